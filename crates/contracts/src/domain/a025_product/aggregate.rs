use super::category::{ProductCategory, ProductSubcategory};
use serde::{Deserialize, Serialize};

/// Имя части multipart-запроса с файлом изображения
pub const IMAGE_PART_NAME: &str = "imagen";

// ============================================================================
// DTO
// ============================================================================

/// Данные нового товара после нормализации (обрезка пробелов, разбор чисел)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateProductDto {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "precio")]
    pub price: f64,
    #[serde(rename = "peso")]
    pub weight_grams: i64,
    #[serde(rename = "categoria")]
    pub category: ProductCategory,
    #[serde(rename = "subcategoria")]
    pub subcategory: ProductSubcategory,
}

impl CreateProductDto {
    /// Текстовые части multipart-запроса: (имя поля, значение)
    pub fn form_parts(&self) -> Vec<(&'static str, String)> {
        vec![
            ("nombre", self.name.clone()),
            ("descripcion", self.description.clone()),
            ("precio", self.price.to_string()),
            ("peso", self.weight_grams.to_string()),
            ("categoria", self.category.label().to_string()),
            ("subcategoria", self.subcategory.label().to_string()),
        ]
    }
}

/// Неизменяемый запрос на создание товара вместе с файлом изображения
#[derive(Debug, Clone, PartialEq)]
pub struct CreateProductPayload<F> {
    pub product: CreateProductDto,
    pub image: F,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto() -> CreateProductDto {
        CreateProductDto {
            name: "Croquetas Test".into(),
            description: "Descripción válida de más de diez caracteres".into(),
            price: 123.45,
            weight_grams: 500,
            category: ProductCategory::Perros,
            subcategory: ProductSubcategory::Alimento,
        }
    }

    #[test]
    fn test_json_uses_backend_field_names() {
        let json = serde_json::to_value(dto()).unwrap();
        assert_eq!(json["nombre"], "Croquetas Test");
        assert_eq!(json["precio"], 123.45);
        assert_eq!(json["peso"], 500);
        assert_eq!(json["categoria"], "Perros");
        assert_eq!(json["subcategoria"], "Alimento");
    }

    #[test]
    fn test_form_parts() {
        let parts = dto().form_parts();
        assert_eq!(parts.len(), 6);
        assert!(parts.contains(&("precio", "123.45".to_string())));
        assert!(parts.contains(&("peso", "500".to_string())));
        assert!(parts.contains(&("subcategoria", "Alimento".to_string())));
    }
}
