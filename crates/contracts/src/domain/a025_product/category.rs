use serde::{Deserialize, Serialize};
use std::fmt;

/// Категория товара (вид животного)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ProductCategory {
    #[default]
    Perros,
    Gatos,
}

impl ProductCategory {
    /// Все категории в порядке отображения
    pub const ALL: [ProductCategory; 2] = [ProductCategory::Perros, ProductCategory::Gatos];

    /// Метка для UI и для передачи на backend
    pub fn label(&self) -> &'static str {
        match self {
            ProductCategory::Perros => "Perros",
            ProductCategory::Gatos => "Gatos",
        }
    }

    /// Допустимые подкатегории (порядок фиксирован, первая - значение по умолчанию)
    pub fn subcategories(&self) -> &'static [ProductSubcategory] {
        use ProductSubcategory::*;
        match self {
            ProductCategory::Perros => &[Alimento, Juguetes, Accesorios, Higiene],
            ProductCategory::Gatos => &[Alimento, Rascadores, Arena, Accesorios],
        }
    }

    /// Подкатегория, которая выставляется при выборе категории
    pub fn default_subcategory(&self) -> ProductSubcategory {
        self.subcategories()[0]
    }

    pub fn allows(&self, subcategory: ProductSubcategory) -> bool {
        self.subcategories().contains(&subcategory)
    }

    /// Парсинг из метки
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Подкатегория товара. Набор допустимых значений зависит от категории.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductSubcategory {
    Alimento,
    Juguetes,
    Accesorios,
    Higiene,
    Rascadores,
    Arena,
}

impl ProductSubcategory {
    pub const ALL: [ProductSubcategory; 6] = [
        ProductSubcategory::Alimento,
        ProductSubcategory::Juguetes,
        ProductSubcategory::Accesorios,
        ProductSubcategory::Higiene,
        ProductSubcategory::Rascadores,
        ProductSubcategory::Arena,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProductSubcategory::Alimento => "Alimento",
            ProductSubcategory::Juguetes => "Juguetes",
            ProductSubcategory::Accesorios => "Accesorios",
            ProductSubcategory::Higiene => "Higiene",
            ProductSubcategory::Rascadores => "Rascadores",
            ProductSubcategory::Arena => "Arena",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == label)
    }
}

impl fmt::Display for ProductSubcategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domains_are_fixed() {
        use ProductSubcategory::*;
        assert_eq!(
            ProductCategory::Perros.subcategories(),
            &[Alimento, Juguetes, Accesorios, Higiene]
        );
        assert_eq!(
            ProductCategory::Gatos.subcategories(),
            &[Alimento, Rascadores, Arena, Accesorios]
        );
    }

    #[test]
    fn test_default_subcategory_is_first() {
        for category in ProductCategory::ALL {
            assert_eq!(category.default_subcategory(), category.subcategories()[0]);
        }
        assert_eq!(ProductCategory::default(), ProductCategory::Perros);
    }

    #[test]
    fn test_allows() {
        assert!(ProductCategory::Gatos.allows(ProductSubcategory::Arena));
        assert!(!ProductCategory::Perros.allows(ProductSubcategory::Arena));
        assert!(!ProductCategory::Gatos.allows(ProductSubcategory::Higiene));
    }

    #[test]
    fn test_labels() {
        assert_eq!(ProductCategory::from_label("Gatos"), Some(ProductCategory::Gatos));
        assert_eq!(ProductCategory::from_label("gatos"), None);
        assert_eq!(ProductCategory::from_label("Aves"), None);
        for sub in ProductSubcategory::ALL {
            assert_eq!(ProductSubcategory::from_label(sub.label()), Some(sub));
        }
        assert_eq!(serde_json::to_string(&ProductCategory::Perros).unwrap(), "\"Perros\"");
    }
}
