use crate::domain::a025_product::ui::create::ProductCreatePage;
use crate::domain::a025_product::ui::list::ProductListPage;
use crate::routes::paths::PRODUCT_LIST_PATH;
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <main class="app-main">
                <Routes fallback=|| view! { <p class="page">"Página no encontrada"</p> }>
                    <Route path=path!("/") view=|| view! { <Redirect path=PRODUCT_LIST_PATH /> } />
                    <Route path=path!("/admin/productos") view=ProductListPage />
                    <Route path=path!("/admin/productos/nuevo") view=ProductCreatePage />
                </Routes>
            </main>
        </Router>
    }
}
