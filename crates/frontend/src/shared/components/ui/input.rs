use super::control_class;
use leptos::prelude::*;

/// Input component with label, hint and validation state
#[component]
pub fn Input(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Input type: "text" (default), "number", etc.
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    /// `step` attribute for numeric inputs
    #[prop(optional, into)]
    step: MaybeProp<String>,
    /// Marks the control as failed validation
    #[prop(optional, into)]
    invalid: MaybeProp<bool>,
    /// Small helper text under the control
    #[prop(optional, into)]
    hint: MaybeProp<String>,
    /// ID for the input element
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=input_id>
                    {l}
                </label>
            })}
            <input
                id=input_id
                class=move || control_class("form__input", invalid.get().unwrap_or(false))
                type=input_t
                step=move || step.get()
                prop:value=move || value.get()
                placeholder=input_placeholder
                aria-invalid=move || invalid.get().unwrap_or(false).to_string()
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
            {move || hint.get().map(|h| view! { <small class="form__hint">{h}</small> })}
        </div>
    }
}
