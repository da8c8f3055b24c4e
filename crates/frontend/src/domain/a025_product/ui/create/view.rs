use super::controller::{ProductCreateController, MSG_INVALID_IMAGE};
use super::model::HttpProductService;
use super::view_model::ProductCreateVm;
use crate::shared::components::ui::{FileInput, Input, Select, Textarea};
use crate::shared::navigation::RouterNavigator;
use crate::shared::notifier::use_toasts;
use crate::domain::a025_product::ENTITY;
use crate::shared::page_standard::{page_id, PAGE_CAT_DETAIL};
use contracts::domain::a025_product::validation::ALLOWED_IMAGE_EXTENSIONS;
use contracts::domain::a025_product::{ProductField, ProductFieldEdit};
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

/// `accept` attribute for the picker, e.g. ".jpg,.jpeg,.png,.svg,.webp"
fn image_accept() -> String {
    ALLOWED_IMAGE_EXTENSIONS
        .iter()
        .map(|ext| format!(".{}", ext))
        .collect::<Vec<_>>()
        .join(",")
}

/// Admin page: create a new product
#[component]
pub fn ProductCreatePage() -> impl IntoView {
    let controller = ProductCreateController::new(
        HttpProductService,
        use_toasts(),
        RouterNavigator::from_router(),
    );
    let vm = ProductCreateVm::new(controller);
    let is_submitting = vm.is_submitting();

    view! {
        <div
            id=page_id(ENTITY, PAGE_CAT_DETAIL)
            data-page-category=PAGE_CAT_DETAIL
            class="page admin-nuevo-producto-page"
        >
            <div class="page__header">
                <h2>"Crear Nuevo Producto"</h2>
            </div>

            <div class="page__content form-producto">
                <Input
                    id="nombre"
                    label="Nombre"
                    value=vm.text(ProductField::Name)
                    on_input=Callback::new(move |v| vm.edit(ProductFieldEdit::Name(v)))
                    placeholder="Nombre del producto"
                    invalid=vm.has_error(ProductField::Name)
                />

                <Textarea
                    id="descripcion"
                    label="Descripción"
                    value=vm.text(ProductField::Description)
                    on_input=Callback::new(move |v| vm.edit(ProductFieldEdit::Description(v)))
                    placeholder="Descripción (mínimo 10 caracteres)"
                    invalid=vm.has_error(ProductField::Description)
                />

                <Input
                    id="precio"
                    label="Precio"
                    input_type="number"
                    step="0.01"
                    value=vm.text(ProductField::Price)
                    on_input=Callback::new(move |v| vm.edit(ProductFieldEdit::Price(v)))
                    placeholder="Precio"
                    invalid=vm.has_error(ProductField::Price)
                />

                <Input
                    id="peso"
                    label="Peso (gramos)"
                    input_type="number"
                    value=vm.text(ProductField::WeightGrams)
                    on_input=Callback::new(move |v| vm.edit(ProductFieldEdit::WeightGrams(v)))
                    placeholder="Ingresa el peso en gramos (ej: 500)"
                    hint="Ingresa el peso en gramos (ej: 500 para 500g)"
                    invalid=vm.has_error(ProductField::WeightGrams)
                />

                <Select
                    id="categoria"
                    label="Categoría"
                    value=vm.text(ProductField::Category)
                    options=vm.category_options()
                    on_change=Callback::new(move |v| vm.select_category(v))
                />

                <Select
                    id="subcategoria"
                    label="Subcategoría"
                    value=vm.text(ProductField::Subcategory)
                    options=vm.subcategory_options()
                    on_change=Callback::new(move |v| vm.select_subcategory(v))
                    invalid=vm.has_error(ProductField::Subcategory)
                />

                <FileInput
                    id="imagen"
                    label="Imagen"
                    accept=image_accept()
                    on_change=Callback::new(move |file| vm.select_image(file))
                    invalid=vm.has_error(ProductField::Image)
                    error_text=Signal::derive({
                        let rejected = vm.image_rejected();
                        move || rejected.get().then(|| MSG_INVALID_IMAGE.to_string())
                    })
                />

                <div class="actions">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| vm.submit()
                        disabled=is_submitting
                    >
                        {move || if is_submitting.get() { "Guardando..." } else { "Guardar producto" }}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| vm.cancel()
                    >
                        "Cancelar"
                    </Button>
                </div>
            </div>
        </div>
    }
}
