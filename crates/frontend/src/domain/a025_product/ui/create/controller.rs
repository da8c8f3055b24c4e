//! Product Create - Controller
//!
//! Submit flow for the create form, independent of Leptos and the browser:
//! validation, the single create call, and mapping of its outcome to
//! notifications and navigation. Collaborators are passed in explicitly.

use super::model::ProductService;
use crate::routes::paths::PRODUCT_LIST_PATH;
use crate::shared::navigation::Navigator;
use crate::shared::notifier::Notifier;
use contracts::domain::a025_product::{
    validate, CreateFailure, CreateProductPayload, ImageFile, ProductFormState,
    ProductServiceError, ValidationErrors,
};

pub const MSG_FILL_REQUIRED: &str = "Por favor, completa todos los campos obligatorios.";
pub const MSG_CREATED: &str = "Producto creado exitosamente";
pub const MSG_DUPLICATE_NAME: &str = "Ya existe un producto con ese nombre.";
pub const MSG_CREATE_FAILED: &str = "Error al crear el producto. Revisa la consola.";
pub const MSG_INVALID_IMAGE: &str =
    "Formato o tamaño de imagen no válido. Usa JPG, PNG, SVG o WebP (máx. 10 MB).";

/// Where the form is in its submit cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    /// Create call in flight; further submits are ignored
    Submitting,
    /// Created and navigated away
    Navigated,
}

/// Result of the synchronous half of a submit
#[derive(Debug)]
pub enum SubmitStart<F> {
    /// A create call is already in flight
    Busy,
    /// Validation failed; nothing was sent
    Rejected(ValidationErrors),
    /// Ready to send
    Accepted(CreateProductPayload<F>),
}

#[derive(Clone)]
pub struct ProductCreateController<S, N, R> {
    service: S,
    notifier: N,
    navigator: R,
}

impl<S, N, R> ProductCreateController<S, N, R>
where
    N: Notifier,
    R: Navigator,
{
    pub fn new(service: S, notifier: N, navigator: R) -> Self {
        Self {
            service,
            notifier,
            navigator,
        }
    }

    /// Validate the form for a submit click. An accepted submit moves
    /// `status` to `Submitting`; the caller holds it until `finish_submit`.
    pub fn begin_submit<F: ImageFile>(
        &self,
        form: &ProductFormState<F>,
        status: &mut SubmitStatus,
    ) -> SubmitStart<F> {
        if *status == SubmitStatus::Submitting {
            log::debug!("product create: submit ignored, request in flight");
            return SubmitStart::Busy;
        }

        match validate(form) {
            Ok(payload) => {
                log::debug!("product create: submitting '{}'", payload.product.name);
                *status = SubmitStatus::Submitting;
                SubmitStart::Accepted(payload)
            }
            Err(errors) => {
                log::debug!(
                    "product create: validation failed for {:?}",
                    errors.fields().collect::<Vec<_>>()
                );
                self.notifier.error(MSG_FILL_REQUIRED);
                SubmitStart::Rejected(errors)
            }
        }
    }

    /// Send an accepted payload and report the outcome. Exactly one call, no retry.
    pub async fn finish_submit<F>(&self, payload: CreateProductPayload<F>) -> SubmitStatus
    where
        F: ImageFile,
        S: ProductService<F>,
    {
        match self.service.create(&payload).await {
            Ok(()) => {
                log::info!("product created: '{}'", payload.product.name);
                self.notifier.success(MSG_CREATED);
                self.navigator.navigate(PRODUCT_LIST_PATH);
                SubmitStatus::Navigated
            }
            Err(err) => {
                self.report_failure(&err);
                SubmitStatus::Idle
            }
        }
    }

    /// Leave the form without saving
    pub fn cancel(&self) {
        self.navigator.navigate(PRODUCT_LIST_PATH);
    }

    fn report_failure(&self, err: &ProductServiceError) {
        match err.classify() {
            CreateFailure::DuplicateName => self.notifier.error(MSG_DUPLICATE_NAME),
            CreateFailure::Message(text) => self.notifier.error(&text),
            CreateFailure::Unclassified(detail) => {
                log::error!("product create failed: {}", detail);
                self.notifier.error(MSG_CREATE_FAILED);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a025_product::{
        FieldError, ImageMeta, ProductCategory, ProductField, ProductFieldEdit,
        ProductSubcategory,
    };
    use futures::executor::block_on;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct MockService {
        calls: Rc<RefCell<Vec<CreateProductPayload<ImageMeta>>>>,
        failure: Option<ProductServiceError>,
    }

    impl ProductService<ImageMeta> for MockService {
        async fn create(
            &self,
            payload: &CreateProductPayload<ImageMeta>,
        ) -> Result<(), ProductServiceError> {
            self.calls.borrow_mut().push(payload.clone());
            match &self.failure {
                Some(err) => Err(err.clone()),
                None => Ok(()),
            }
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    enum Note {
        Success(String),
        Error(String),
    }

    #[derive(Clone, Default)]
    struct MockNotifier(Rc<RefCell<Vec<Note>>>);

    impl Notifier for MockNotifier {
        fn success(&self, text: &str) {
            self.0.borrow_mut().push(Note::Success(text.to_string()));
        }

        fn error(&self, text: &str) {
            self.0.borrow_mut().push(Note::Error(text.to_string()));
        }
    }

    #[derive(Clone, Default)]
    struct MockNavigator(Rc<RefCell<Vec<String>>>);

    impl Navigator for MockNavigator {
        fn navigate(&self, path: &str) {
            self.0.borrow_mut().push(path.to_string());
        }
    }

    struct Harness {
        controller: ProductCreateController<MockService, MockNotifier, MockNavigator>,
        service: MockService,
        notes: MockNotifier,
        nav: MockNavigator,
    }

    fn harness(failure: Option<ProductServiceError>) -> Harness {
        let service = MockService {
            failure,
            ..Default::default()
        };
        let notes = MockNotifier::default();
        let nav = MockNavigator::default();
        Harness {
            controller: ProductCreateController::new(service.clone(), notes.clone(), nav.clone()),
            service,
            notes,
            nav,
        }
    }

    impl Harness {
        /// Full click: validate, then send if accepted
        fn submit(&self, form: &ProductFormState<ImageMeta>) -> (SubmitStatus, Option<ValidationErrors>) {
            let mut status = SubmitStatus::Idle;
            match self.controller.begin_submit(form, &mut status) {
                SubmitStart::Busy => (SubmitStatus::Submitting, None),
                SubmitStart::Rejected(errors) => (SubmitStatus::Idle, Some(errors)),
                SubmitStart::Accepted(payload) => {
                    (block_on(self.controller.finish_submit(payload)), None)
                }
            }
        }

        fn calls(&self) -> usize {
            self.service.calls.borrow().len()
        }

        fn notes(&self) -> Vec<Note> {
            self.notes.0.borrow().clone()
        }

        fn paths(&self) -> Vec<String> {
            self.nav.0.borrow().clone()
        }
    }

    fn filled_form() -> ProductFormState<ImageMeta> {
        let mut form = ProductFormState::new();
        form.apply(ProductFieldEdit::Name("Croquetas Test".into()));
        form.apply(ProductFieldEdit::Description(
            "Descripción válida de más de diez caracteres".into(),
        ));
        form.apply(ProductFieldEdit::Price("123.45".into()));
        form.apply(ProductFieldEdit::WeightGrams("500".into()));
        form.apply(ProductFieldEdit::Image(Some(ImageMeta::new("croquetas.jpg", 50_000))));
        form
    }

    #[test]
    fn test_valid_submit_creates_and_navigates() {
        let h = harness(None);
        let (status, errors) = h.submit(&filled_form());

        assert_eq!(status, SubmitStatus::Navigated);
        assert!(errors.is_none());
        assert_eq!(h.calls(), 1);

        let sent = h.service.calls.borrow()[0].clone();
        assert_eq!(sent.product.name, "Croquetas Test");
        assert_eq!(sent.product.price, 123.45);
        assert_eq!(sent.product.weight_grams, 500);
        assert_eq!(sent.product.category, ProductCategory::Perros);
        assert_eq!(sent.product.subcategory, ProductSubcategory::Alimento);
        assert_eq!(sent.image.name, "croquetas.jpg");

        assert_eq!(h.notes(), vec![Note::Success(MSG_CREATED.into())]);
        assert_eq!(h.paths(), vec![PRODUCT_LIST_PATH.to_string()]);
    }

    #[test]
    fn test_blank_form_never_calls_service() {
        let h = harness(None);
        let (status, errors) = h.submit(&ProductFormState::new());
        let errors = errors.expect("validation errors");

        assert_eq!(status, SubmitStatus::Idle);
        assert_eq!(h.calls(), 0);
        for field in [
            ProductField::Name,
            ProductField::Description,
            ProductField::Price,
            ProductField::WeightGrams,
            ProductField::Image,
        ] {
            assert!(errors.has(field), "{field:?}");
        }
        assert_eq!(h.notes(), vec![Note::Error(MSG_FILL_REQUIRED.into())]);
        assert!(h.paths().is_empty());
    }

    #[test]
    fn test_any_blank_required_field_blocks_call() {
        let blankers: [fn(&mut ProductFormState<ImageMeta>); 5] = [
            |f| f.name.clear(),
            |f| f.description.clear(),
            |f| f.price.clear(),
            |f| f.weight_grams.clear(),
            |f| f.image = None,
        ];
        for blank in blankers {
            let h = harness(None);
            let mut form = filled_form();
            blank(&mut form);
            let (status, errors) = h.submit(&form);
            assert_eq!(status, SubmitStatus::Idle);
            assert_eq!(errors.map(|e| e.len()), Some(1));
            assert_eq!(h.calls(), 0);
        }
    }

    #[test]
    fn test_rejected_image_is_distinguished() {
        let h = harness(None);
        let mut form = filled_form();
        form.apply(ProductFieldEdit::Image(Some(ImageMeta::new("doc.pdf", 10))));
        let (_, errors) = h.submit(&form);
        assert_eq!(
            errors.and_then(|e| e.get(ProductField::Image)),
            Some(FieldError::ImageRejected)
        );
    }

    #[test]
    fn test_conflict_shows_duplicate_message() {
        let h = harness(Some(ProductServiceError::from_response(409, "")));
        let (status, _) = h.submit(&filled_form());

        assert_eq!(status, SubmitStatus::Idle);
        assert_eq!(h.calls(), 1);
        assert_eq!(h.notes(), vec![Note::Error(MSG_DUPLICATE_NAME.into())]);
        assert!(h.paths().is_empty());
    }

    #[test]
    fn test_duplicate_code_shows_duplicate_message() {
        let h = harness(Some(ProductServiceError::from_response(
            400,
            r#"{"error":"nombre_duplicado"}"#,
        )));
        h.submit(&filled_form());
        assert_eq!(h.notes(), vec![Note::Error(MSG_DUPLICATE_NAME.into())]);
    }

    #[test]
    fn test_service_message_is_shown_verbatim() {
        let h = harness(Some(ProductServiceError::from_response(
            422,
            r#"{"message":"La imagen no pudo procesarse"}"#,
        )));
        let (status, _) = h.submit(&filled_form());
        assert_eq!(status, SubmitStatus::Idle);
        assert_eq!(
            h.notes(),
            vec![Note::Error("La imagen no pudo procesarse".into())]
        );
    }

    #[test]
    fn test_unclassified_failure_shows_generic_message() {
        let h = harness(Some(ProductServiceError::transport("TypeError: Failed to fetch")));
        let (status, _) = h.submit(&filled_form());
        assert_eq!(status, SubmitStatus::Idle);
        assert_eq!(h.notes(), vec![Note::Error(MSG_CREATE_FAILED.into())]);
        assert!(h.paths().is_empty());
    }

    #[test]
    fn test_failure_allows_resubmit() {
        let h = harness(Some(ProductServiceError::from_response(500, "")));
        let form = filled_form();
        h.submit(&form);
        h.submit(&form);
        assert_eq!(h.calls(), 2);
    }

    #[test]
    fn test_submit_while_in_flight_is_ignored() {
        let h = harness(None);
        let mut status = SubmitStatus::Submitting;
        let start = h.controller.begin_submit(&filled_form(), &mut status);
        assert!(matches!(start, SubmitStart::Busy));
        assert_eq!(status, SubmitStatus::Submitting);
        assert_eq!(h.calls(), 0);
        assert!(h.notes().is_empty());
    }

    #[test]
    fn test_double_click_sends_once() {
        let h = harness(None);
        let form = filled_form();
        let mut status = SubmitStatus::Idle;

        let first = h.controller.begin_submit(&form, &mut status);
        assert_eq!(status, SubmitStatus::Submitting);
        let second = h.controller.begin_submit(&form, &mut status);
        assert!(matches!(second, SubmitStart::Busy));

        let SubmitStart::Accepted(payload) = first else {
            panic!("first click should be accepted");
        };
        status = block_on(h.controller.finish_submit(payload));

        assert_eq!(status, SubmitStatus::Navigated);
        assert_eq!(h.calls(), 1);
        assert_eq!(h.notes(), vec![Note::Success(MSG_CREATED.into())]);
        assert_eq!(h.paths(), vec![PRODUCT_LIST_PATH.to_string()]);
    }

    #[test]
    fn test_failed_send_reopens_submit() {
        let h = harness(Some(ProductServiceError::from_response(500, "")));
        let form = filled_form();
        let mut status = SubmitStatus::Idle;

        let SubmitStart::Accepted(payload) = h.controller.begin_submit(&form, &mut status) else {
            panic!("valid form should be accepted");
        };
        status = block_on(h.controller.finish_submit(payload));
        assert_eq!(status, SubmitStatus::Idle);

        assert!(matches!(
            h.controller.begin_submit(&form, &mut status),
            SubmitStart::Accepted(_)
        ));
        assert_eq!(status, SubmitStatus::Submitting);
    }

    #[test]
    fn test_rejected_submit_keeps_idle() {
        let h = harness(None);
        let mut status = SubmitStatus::Idle;
        let start = h.controller.begin_submit(&ProductFormState::<ImageMeta>::new(), &mut status);
        assert!(matches!(start, SubmitStart::Rejected(_)));
        assert_eq!(status, SubmitStatus::Idle);
    }

    #[test]
    fn test_category_switch_then_submit_uses_new_default() {
        let h = harness(None);
        let mut form = filled_form();
        form.apply(ProductFieldEdit::Subcategory(ProductSubcategory::Accesorios));
        form.apply(ProductFieldEdit::Category(ProductCategory::Gatos));
        h.submit(&form);

        let sent = h.service.calls.borrow()[0].clone();
        assert_eq!(sent.product.category, ProductCategory::Gatos);
        assert_eq!(sent.product.subcategory, ProductSubcategory::Alimento);
    }

    #[test]
    fn test_cancel_navigates_to_list() {
        let h = harness(None);
        h.controller.cancel();
        assert_eq!(h.paths(), vec![PRODUCT_LIST_PATH.to_string()]);
        assert_eq!(h.calls(), 0);
    }
}
