//! Inline validation error for a single field.

use leptos::prelude::*;

use crate::util::validation::FieldError;

/// One error indicator. Rendered at most once per field.
#[component]
pub fn ErrorDisplay(error: FieldError) -> impl IntoView {
    view! {
        <p class="contact-form__error" data-testid="error">
            "Error: "
            {error.to_string()}
        </p>
    }
}
