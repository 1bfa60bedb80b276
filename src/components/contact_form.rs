//! Contact form: four labelled fields, live validation, and a confirmation
//! view after a valid submit.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ContactForm` owns the component-scoped state signal; `ContactFormView`
//! renders whatever state it is handed, which lets tests render prepared
//! states through SSR.

#[cfg(all(test, feature = "ssr"))]
#[path = "contact_form_test.rs"]
mod contact_form_test;

use leptos::prelude::*;

use crate::components::form_field::FormField;
use crate::components::submission_display::SubmissionDisplay;
use crate::state::form::{ContactFormState, Field, FormEvent};
use crate::util::validation::FormRules;

/// Self-contained contact form. State is created on mount and dropped on
/// unmount.
#[component]
pub fn ContactForm(#[prop(optional)] rules: FormRules) -> impl IntoView {
    let form = RwSignal::new(ContactFormState::new(rules));
    view! { <ContactFormView form/> }
}

/// Render a contact form backed by an existing state signal.
#[component]
pub fn ContactFormView(form: RwSignal<ContactFormState>) -> impl IntoView {
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        form.update(|state| state.apply(FormEvent::Submit));
    };
    let is_editing = move || !form.with(ContactFormState::is_submitted);

    view! {
        <div class="contact-form">
            <h1>"Contact Form"</h1>
            <Show
                when=is_editing
                fallback=move || {
                    let values = form.with(|state| state.values().clone());
                    view! {
                        <SubmissionDisplay values/>
                        <button
                            class="contact-form__reset"
                            type="button"
                            on:click=move |_| form.update(|state| state.apply(FormEvent::Reset))
                        >
                            "Send another message"
                        </button>
                    }
                }
            >
                <form class="contact-form__form" on:submit=on_submit>
                    {Field::ALL.into_iter().map(|field| view! { <FormField field form/> }).collect_view()}
                    <button class="contact-form__submit" type="submit">
                        "Submit"
                    </button>
                </form>
            </Show>
        </div>
    }
}
