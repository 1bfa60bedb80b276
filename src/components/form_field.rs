//! Labelled input bound to one contact form field.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every keystroke dispatches `FormEvent::Input` with the full input value, so
//! the field's error indicator below it tracks the reducer's live validation.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::error_display::ErrorDisplay;
use crate::state::form::{ContactFormState, Field, FormEvent};

#[component]
pub fn FormField(field: Field, form: RwSignal<ContactFormState>) -> impl IntoView {
    let id = field.input_id();
    let value = move || form.with(|state| state.values().get(field).to_owned());
    let error = move || form.with(|state| state.error_for(field).cloned());
    let on_input = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        form.update(|state| state.apply(FormEvent::Input { field, value }));
    };

    let input = if field == Field::Message {
        view! {
            <textarea id=id.clone() name=field.key() prop:value=value on:input=on_input></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                id=id.clone()
                name=field.key()
                type=field.input_type()
                placeholder=field.placeholder()
                prop:value=value
                on:input=on_input
            />
        }
        .into_any()
    };

    view! {
        <div class="contact-form__field">
            <label for=id>{field.label()}</label>
            {input}
            {move || error().map(|error| view! { <ErrorDisplay error/> })}
        </div>
    }
}
