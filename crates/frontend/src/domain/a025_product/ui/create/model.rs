//! Product Create - Model Layer
//!
//! Product service seam and its HTTP implementation

use crate::shared::api_utils::api_url;
use contracts::domain::a025_product::{
    CreateProductPayload, ImageFile, ProductServiceError, IMAGE_PART_NAME,
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{FormData, Request, RequestInit, RequestMode, Response};

/// Create endpoint (multipart/form-data)
pub const PRODUCTS_ENDPOINT: &str = "/api/productos";

/// Remote product service: one create call per valid submit
#[allow(async_fn_in_trait)]
pub trait ProductService<F: ImageFile> {
    async fn create(&self, payload: &CreateProductPayload<F>) -> Result<(), ProductServiceError>;
}

/// File picked in the browser
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedImage(pub web_sys::File);

impl ImageFile for SelectedImage {
    fn file_name(&self) -> String {
        self.0.name()
    }

    fn size_bytes(&self) -> u64 {
        self.0.size() as u64
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HttpProductService;

impl ProductService<SelectedImage> for HttpProductService {
    async fn create(
        &self,
        payload: &CreateProductPayload<SelectedImage>,
    ) -> Result<(), ProductServiceError> {
        create_product(payload).await
    }
}

fn js_err(e: JsValue) -> ProductServiceError {
    ProductServiceError::transport(format!("{e:?}"))
}

/// POST the product with its image as multipart form data
pub async fn create_product(
    payload: &CreateProductPayload<SelectedImage>,
) -> Result<(), ProductServiceError> {
    let form_data = FormData::new().map_err(js_err)?;
    for (name, value) in payload.product.form_parts() {
        form_data.append_with_str(name, &value).map_err(js_err)?;
    }
    let image = &payload.image.0;
    form_data
        .append_with_blob_and_filename(IMAGE_PART_NAME, image, &image.name())
        .map_err(js_err)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&form_data);

    let url = api_url(PRODUCTS_ENDPOINT);
    let request = Request::new_with_str_and_init(&url, &opts).map_err(js_err)?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(js_err)?;

    let window =
        web_sys::window().ok_or_else(|| ProductServiceError::transport("no window"))?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_err)?;
    let resp: Response = resp_value.dyn_into().map_err(js_err)?;

    if resp.ok() {
        return Ok(());
    }

    // Error body is optional; a failed read just leaves it empty
    let body = match resp.text() {
        Ok(promise) => wasm_bindgen_futures::JsFuture::from(promise)
            .await
            .ok()
            .and_then(|text| text.as_string())
            .unwrap_or_default(),
        Err(_) => String::new(),
    };
    Err(ProductServiceError::from_response(resp.status(), &body))
}
