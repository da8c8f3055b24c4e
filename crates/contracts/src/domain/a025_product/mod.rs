pub mod aggregate;
pub mod category;
pub mod error;
pub mod form;
pub mod validation;

pub use aggregate::{CreateProductDto, CreateProductPayload, IMAGE_PART_NAME};
pub use category::{ProductCategory, ProductSubcategory};
pub use error::{CreateFailure, ProductServiceError};
pub use form::{ImageFile, ImageMeta, ProductFieldEdit, ProductFormState};
pub use validation::{validate, FieldError, ProductField, ValidationErrors};
