use super::control_class;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Single-file picker. Emits the chosen file, or `None` when the selection is cleared.
#[component]
pub fn FileInput(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// `accept` attribute, e.g. ".png,.jpg"
    #[prop(optional, into)]
    accept: MaybeProp<String>,
    /// Change event handler
    #[prop(optional)]
    on_change: Option<Callback<Option<web_sys::File>>>,
    /// Marks the control as failed validation
    #[prop(optional, into)]
    invalid: MaybeProp<bool>,
    /// Inline error text shown under the control when set
    #[prop(optional, into)]
    error_text: MaybeProp<String>,
    /// ID for the input element
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();

    let handle_change = move |ev: web_sys::Event| {
        let file = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        if let Some(handler) = on_change {
            handler.run(file);
        }
    };

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=input_id>
                    {l}
                </label>
            })}
            <input
                id=input_id
                type="file"
                class=move || control_class("form__file", invalid.get().unwrap_or(false))
                accept=move || accept.get()
                aria-invalid=move || invalid.get().unwrap_or(false).to_string()
                on:change=handle_change
            />
            {move || error_text.get().map(|text| view! {
                <small class="error-text">{text}</small>
            })}
        </div>
    }
}
