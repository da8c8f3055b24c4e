use crate::routes::routes::AppRoutes;
use crate::shared::notifier::{ToastHost, ToastService};
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Toasts are shared by every page that reports save results
    provide_context(ToastService::new());

    view! {
        <ConfigProvider>
            <AppRoutes />
            <ToastHost />
        </ConfigProvider>
    }
}
