//! User-facing notifications (toasts)
//!
//! `Notifier` is the seam used by page controllers; `ToastService` is the
//! browser implementation provided once via context in `App`.

use leptos::prelude::*;
use thaw::*;

/// How long a toast stays on screen
const TOAST_TTL_MS: u32 = 4_000;

/// Sink for short success/error messages shown to the user
pub trait Notifier {
    fn success(&self, text: &str);
    fn error(&self, text: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub text: String,
}

/// Сервис всплывающих уведомлений
#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(1),
        }
    }

    /// Show a toast and schedule its removal
    pub fn push(&self, kind: ToastKind, text: &str) -> u64 {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.toasts.update(|list| {
            list.push(Toast {
                id,
                kind,
                text: text.to_string(),
            })
        });

        let this = *self;
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_TTL_MS).await;
            this.dismiss(id);
        });
        id
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.try_update(|list| list.retain(|t| t.id != id));
    }

    pub fn toasts(&self) -> Signal<Vec<Toast>> {
        self.toasts.into()
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for ToastService {
    fn success(&self, text: &str) {
        log::info!("toast(success): {}", text);
        self.push(ToastKind::Success, text);
    }

    fn error(&self, text: &str) {
        log::warn!("toast(error): {}", text);
        self.push(ToastKind::Error, text);
    }
}

pub fn use_toasts() -> ToastService {
    use_context::<ToastService>().expect("ToastService not provided in context")
}

/// Renders the active toasts in a fixed corner stack
#[component]
pub fn ToastHost() -> impl IntoView {
    let service = use_toasts();

    view! {
        <div class="toast-stack">
            <For
                each=move || service.toasts().get()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let intent = match toast.kind {
                        ToastKind::Success => MessageBarIntent::Success,
                        ToastKind::Error => MessageBarIntent::Error,
                    };
                    let id = toast.id;
                    view! {
                        <div class="toast-stack__item" on:click=move |_| service.dismiss(id)>
                            <MessageBar intent=intent>
                                {toast.text}
                            </MessageBar>
                        </div>
                    }
                }
            />
        </div>
    }
}
