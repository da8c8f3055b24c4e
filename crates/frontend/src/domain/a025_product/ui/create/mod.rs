//! Product Create UI Module
//!
//! MVVM layout:
//! - model.rs: product service seam and HTTP implementation
//! - controller.rs: submit flow (validation, create call, outcome mapping)
//! - view_model.rs: reactive state and commands
//! - view.rs: Leptos page component (pure UI)

mod controller;
mod model;
mod view;
mod view_model;

pub use controller::{ProductCreateController, SubmitStatus};
pub use model::{HttpProductService, ProductService, SelectedImage};
pub use view::ProductCreatePage;
pub use view_model::ProductCreateVm;
