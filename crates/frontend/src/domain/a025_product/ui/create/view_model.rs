//! Product Create - ViewModel
//!
//! Reactive state for the create form. Field edits go through
//! `ProductFormState::apply`, so the category select resets the subcategory at
//! the same call site that sets the category.

use super::controller::{ProductCreateController, SubmitStart, SubmitStatus};
use super::model::{HttpProductService, SelectedImage};
use crate::shared::navigation::RouterNavigator;
use crate::shared::notifier::ToastService;
use contracts::domain::a025_product::{
    FieldError, ProductCategory, ProductField, ProductFieldEdit, ProductFormState,
    ProductSubcategory, ValidationErrors,
};
use leptos::prelude::*;

pub type BrowserProductController =
    ProductCreateController<HttpProductService, ToastService, RouterNavigator>;

/// ViewModel for the product create form
#[derive(Clone, Copy)]
pub struct ProductCreateVm {
    pub form: RwSignal<ProductFormState<SelectedImage>, LocalStorage>,
    pub errors: RwSignal<ValidationErrors>,
    pub status: RwSignal<SubmitStatus>,
    controller: StoredValue<BrowserProductController, LocalStorage>,
}

impl ProductCreateVm {
    pub fn new(controller: BrowserProductController) -> Self {
        Self {
            form: RwSignal::new_local(ProductFormState::new()),
            errors: RwSignal::new(ValidationErrors::new()),
            status: RwSignal::new(SubmitStatus::Idle),
            controller: StoredValue::new_local(controller),
        }
    }

    // === Field edits ===

    pub fn edit(&self, edit: ProductFieldEdit<SelectedImage>) {
        self.form.update(|f| f.apply(edit));
    }

    /// Category select handler; unknown labels never reach the state
    pub fn select_category(&self, label: String) {
        match ProductCategory::from_label(&label) {
            Some(category) => self.edit(ProductFieldEdit::Category(category)),
            None => log::warn!("unknown product category '{}' ignored", label),
        }
    }

    pub fn select_subcategory(&self, label: String) {
        match ProductSubcategory::from_label(&label) {
            Some(sub) => self.edit(ProductFieldEdit::Subcategory(sub)),
            None => log::warn!("unknown product subcategory '{}' ignored", label),
        }
    }

    pub fn select_image(&self, file: Option<web_sys::File>) {
        self.edit(ProductFieldEdit::Image(file.map(SelectedImage)));
    }

    // === Derived signals ===

    /// Text value of a field for binding
    pub fn text(&self, field: ProductField) -> Signal<String> {
        let form = self.form;
        Signal::derive(move || {
            form.with(|f| match field {
                ProductField::Name => f.name.clone(),
                ProductField::Description => f.description.clone(),
                ProductField::Price => f.price.clone(),
                ProductField::WeightGrams => f.weight_grams.clone(),
                ProductField::Category => f.category().label().to_string(),
                ProductField::Subcategory => f.subcategory().label().to_string(),
                ProductField::Image => f
                    .image
                    .as_ref()
                    .map(|img| img.0.name())
                    .unwrap_or_default(),
            })
        })
    }

    pub fn category_options(&self) -> Signal<Vec<(String, String)>> {
        Signal::derive(move || {
            ProductCategory::ALL
                .iter()
                .map(|c| (c.label().to_string(), c.label().to_string()))
                .collect()
        })
    }

    /// Subcategories allowed for the current category
    pub fn subcategory_options(&self) -> Signal<Vec<(String, String)>> {
        let form = self.form;
        Signal::derive(move || {
            form.with(|f| {
                f.category()
                    .subcategories()
                    .iter()
                    .map(|s| (s.label().to_string(), s.label().to_string()))
                    .collect()
            })
        })
    }

    pub fn has_error(&self, field: ProductField) -> Signal<bool> {
        let errors = self.errors;
        Signal::derive(move || errors.with(|e| e.has(field)))
    }

    /// Format or size problem with the image (as opposed to no image at all)
    pub fn image_rejected(&self) -> Signal<bool> {
        let errors = self.errors;
        Signal::derive(move || {
            errors.with(|e| e.get(ProductField::Image) == Some(FieldError::ImageRejected))
        })
    }

    pub fn is_submitting(&self) -> Signal<bool> {
        let status = self.status;
        Signal::derive(move || status.get() == SubmitStatus::Submitting)
    }

    // === Commands ===

    /// Submit command: validate, then create in the background
    pub fn submit(&self) {
        let mut status = self.status.get_untracked();
        let start = self.controller.with_value(|controller| {
            self.form
                .with_untracked(|form| controller.begin_submit(form, &mut status))
        });

        match start {
            SubmitStart::Busy => {}
            SubmitStart::Rejected(errors) => self.errors.set(errors),
            SubmitStart::Accepted(payload) => {
                self.errors.set(ValidationErrors::new());
                self.status.set(status);

                let controller = self.controller.get_value();
                let status = self.status;
                leptos::task::spawn_local(async move {
                    let next = controller.finish_submit(payload).await;
                    // The page may already be unmounted after navigation
                    let _ = status.try_set(next);
                });
            }
        }
    }

    pub fn cancel(&self) {
        self.controller.with_value(|controller| controller.cancel());
    }
}
