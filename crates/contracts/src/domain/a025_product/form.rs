//! Состояние формы создания товара и переходы между состояниями

use super::category::{ProductCategory, ProductSubcategory};

/// Файл изображения, выбранный пользователем.
///
/// Содержимое непрозрачно: для проверки нужны только имя и размер.
pub trait ImageFile: Clone {
    fn file_name(&self) -> String;
    fn size_bytes(&self) -> u64;
}

/// Описание файла без содержимого (используется в тестах и логах)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageMeta {
    pub name: String,
    pub size: u64,
}

impl ImageMeta {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }
}

impl ImageFile for ImageMeta {
    fn file_name(&self) -> String {
        self.name.clone()
    }

    fn size_bytes(&self) -> u64 {
        self.size
    }
}

/// Изменение одного поля формы
#[derive(Debug, Clone, PartialEq)]
pub enum ProductFieldEdit<F> {
    Name(String),
    Description(String),
    Price(String),
    WeightGrams(String),
    Category(ProductCategory),
    Subcategory(ProductSubcategory),
    Image(Option<F>),
}

/// Сырые значения полей формы в том виде, в котором их ввёл пользователь.
///
/// Категорию можно поменять только через [`ProductFormState::set_category`],
/// который сбрасывает подкатегорию на первое значение новой категории.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductFormState<F> {
    pub name: String,
    pub description: String,
    pub price: String,
    pub weight_grams: String,
    category: ProductCategory,
    subcategory: ProductSubcategory,
    pub image: Option<F>,
}

impl<F> ProductFormState<F> {
    pub fn new() -> Self {
        let mut state = Self {
            name: String::new(),
            description: String::new(),
            price: String::new(),
            weight_grams: String::new(),
            category: ProductCategory::default(),
            subcategory: ProductSubcategory::Alimento,
            image: None,
        };
        state.set_category(ProductCategory::default());
        state
    }

    pub fn category(&self) -> ProductCategory {
        self.category
    }

    pub fn subcategory(&self) -> ProductSubcategory {
        self.subcategory
    }

    /// Установить категорию. Подкатегория всегда сбрасывается, даже если
    /// прежнее значение допустимо и в новой категории.
    pub fn set_category(&mut self, category: ProductCategory) {
        self.category = category;
        self.subcategory = category.default_subcategory();
    }

    pub fn set_subcategory(&mut self, subcategory: ProductSubcategory) {
        self.subcategory = subcategory;
    }

    /// Применить изменение одного поля
    pub fn apply(&mut self, edit: ProductFieldEdit<F>) {
        match edit {
            ProductFieldEdit::Name(v) => self.name = v,
            ProductFieldEdit::Description(v) => self.description = v,
            ProductFieldEdit::Price(v) => self.price = v,
            ProductFieldEdit::WeightGrams(v) => self.weight_grams = v,
            ProductFieldEdit::Category(c) => self.set_category(c),
            ProductFieldEdit::Subcategory(s) => self.set_subcategory(s),
            ProductFieldEdit::Image(f) => self.image = f,
        }
    }
}

impl<F> Default for ProductFormState<F> {
    fn default() -> Self {
        Self::new()
    }
}
