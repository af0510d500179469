//! Labeled text input with inline field-scoped error display.

use leptos::prelude::*;

use crate::net::types::FieldErrors;

/// Form input bound to a string signal. Shows the first validation message
/// recorded for `name` and clears it as soon as the field is edited.
#[component]
pub fn TextInput(
    label: &'static str,
    /// Field name used as the key into the validation error map.
    name: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] placeholder: &'static str,
    value: RwSignal<String>,
    errors: RwSignal<FieldErrors>,
) -> impl IntoView {
    let error = move || errors.get().get(name).and_then(|messages| messages.first().cloned());

    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <input
                class="field__input"
                type=input_type
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| {
                    value.set(event_target_value(&ev));
                    errors.update(|map| {
                        map.remove(name);
                    });
                }
            />
            {move || error().map(|message| view! { <span class="field__error">{message}</span> })}
        </label>
    }
}
