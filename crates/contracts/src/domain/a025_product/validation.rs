//! Клиентская валидация формы создания товара

use super::aggregate::{CreateProductDto, CreateProductPayload};
use super::form::{ImageFile, ProductFormState};
use std::collections::BTreeMap;

pub const MIN_NAME_CHARS: usize = 2;
pub const MIN_DESCRIPTION_CHARS: usize = 10;
/// 10 MiB
pub const MAX_IMAGE_BYTES: u64 = 10_485_760;
pub const ALLOWED_IMAGE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "svg", "webp"];

/// Поле формы, которое может не пройти проверку
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ProductField {
    Name,
    Description,
    Price,
    WeightGrams,
    /// `validate` не помечает: неизвестная метка отбрасывается в `ProductCategory::from_label`
    Category,
    Subcategory,
    Image,
}

/// Причина ошибки поля
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// Значение не прошло проверку
    Invalid,
    /// Файл изображения не выбран
    Missing,
    /// Недопустимый формат или размер изображения
    ImageRejected,
}

/// Результат проверки: поле -> ошибка. Пустой набор означает валидную форму.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<ProductField, FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: ProductField, error: FieldError) {
        self.0.insert(field, error);
    }

    pub fn get(&self, field: ProductField) -> Option<FieldError> {
        self.0.get(&field).copied()
    }

    pub fn has(&self, field: ProductField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = ProductField> + '_ {
        self.0.keys().copied()
    }
}

/// Расширение файла в нижнем регистре (часть после последней точки).
/// Для имени без точки возвращается всё имя.
pub fn image_extension(file_name: &str) -> String {
    file_name
        .rsplit_once('.')
        .map_or(file_name, |(_, ext)| ext)
        .to_lowercase()
}

/// Проверка расширения и размера выбранного изображения
pub fn is_acceptable_image<F: ImageFile>(file: &F) -> bool {
    let ext = image_extension(&file.file_name());
    ALLOWED_IMAGE_EXTENSIONS.contains(&ext.as_str()) && file.size_bytes() <= MAX_IMAGE_BYTES
}

/// Длина цифрового префикса начиная с `from`
fn digits_len(bytes: &[u8], from: usize) -> usize {
    bytes[from..].iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Ведущее число в строке: пробелы слева, затем знак и цифры.
/// Хвост после числа отбрасывается ("500.0" -> 500, "1e3" -> 1).
pub fn leading_integer(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let sign = usize::from(matches!(bytes.first(), Some(b'+') | Some(b'-')));
    let digits = digits_len(bytes, sign);
    if digits == 0 {
        return None;
    }
    s[..sign + digits].parse().ok()
}

/// Самый длинный префикс строки, который является десятичным числом
/// (знак, цифры, дробная часть, экспонента). "12abc" -> 12, "1.5kg" -> 1.5.
pub fn leading_decimal(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = usize::from(matches!(bytes.first(), Some(b'+') | Some(b'-')));

    let int_digits = digits_len(bytes, end);
    end += int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digits_len(bytes, end + 1);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+') | Some(b'-')) {
            exp += 1;
        }
        let exp_digits = digits_len(bytes, exp);
        if exp_digits > 0 {
            end = exp + exp_digits;
        }
    }
    s[..end].parse().ok()
}

fn parse_price(raw: &str) -> Option<f64> {
    leading_decimal(raw).filter(|p| p.is_finite() && *p > 0.0)
}

fn parse_weight(raw: &str) -> Option<i64> {
    leading_integer(raw).filter(|w| *w >= 1)
}

fn has_min_chars(raw: &str, min: usize) -> bool {
    raw.trim().chars().count() >= min
}

/// Проверить форму и, если ошибок нет, собрать запрос на создание.
///
/// Ошибки собираются по всем полям сразу, без остановки на первой.
pub fn validate<F: ImageFile>(
    form: &ProductFormState<F>,
) -> Result<CreateProductPayload<F>, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if !has_min_chars(&form.name, MIN_NAME_CHARS) {
        errors.insert(ProductField::Name, FieldError::Invalid);
    }
    if !has_min_chars(&form.description, MIN_DESCRIPTION_CHARS) {
        errors.insert(ProductField::Description, FieldError::Invalid);
    }

    let price = parse_price(&form.price);
    if price.is_none() {
        errors.insert(ProductField::Price, FieldError::Invalid);
    }
    let weight = parse_weight(&form.weight_grams);
    if weight.is_none() {
        errors.insert(ProductField::WeightGrams, FieldError::Invalid);
    }

    let category = form.category();
    let subcategory = form.subcategory();
    if !category.allows(subcategory) {
        errors.insert(ProductField::Subcategory, FieldError::Invalid);
    }

    match &form.image {
        None => errors.insert(ProductField::Image, FieldError::Missing),
        Some(file) if !is_acceptable_image(file) => {
            errors.insert(ProductField::Image, FieldError::ImageRejected)
        }
        Some(_) => {}
    }

    match (price, weight, &form.image) {
        (Some(price), Some(weight_grams), Some(image)) if errors.is_empty() => {
            Ok(CreateProductPayload {
                product: CreateProductDto {
                    name: form.name.trim().to_string(),
                    description: form.description.trim().to_string(),
                    price,
                    weight_grams,
                    category,
                    subcategory,
                },
                image: image.clone(),
            })
        }
        _ => Err(errors),
    }
}
