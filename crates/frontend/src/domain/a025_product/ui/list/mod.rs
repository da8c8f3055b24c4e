//! Landing page of the product list route.
//!
//! The list itself is served by another part of the admin; this page is the
//! navigation target after a product is created.

use crate::routes::paths::PRODUCT_CREATE_PATH;
use crate::domain::a025_product::ENTITY;
use crate::shared::page_standard::{page_id, PAGE_CAT_LIST};
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn ProductListPage() -> impl IntoView {
    view! {
        <div id=page_id(ENTITY, PAGE_CAT_LIST) data-page-category=PAGE_CAT_LIST class="page">
            <div class="page__header">
                <h2>"Productos"</h2>
                <A href=PRODUCT_CREATE_PATH attr:class="button button--primary">
                    "Nuevo producto"
                </A>
            </div>
        </div>
    }
}
