//! Read-only confirmation of a successful submission.

use leptos::prelude::*;

use crate::state::form::FormValues;

/// Shows the captured snapshot. The message row is omitted entirely when no
/// message was entered.
#[component]
pub fn SubmissionDisplay(values: FormValues) -> impl IntoView {
    let message = values.message().map(str::to_owned);

    view! {
        <section class="contact-form__confirmation" data-testid="confirmation">
            <h2>"You Submitted:"</h2>
            <p>
                <strong>"First Name: "</strong>
                <span data-testid="firstnameDisplay">{values.first_name}</span>
            </p>
            <p>
                <strong>"Last Name: "</strong>
                <span data-testid="lastnameDisplay">{values.last_name}</span>
            </p>
            <p>
                <strong>"Email: "</strong>
                <span data-testid="emailDisplay">{values.email}</span>
            </p>
            {message.map(|message| {
                view! {
                    <p>
                        <strong>"Message: "</strong>
                        <span data-testid="messageDisplay">{message}</span>
                    </p>
                }
            })}
        </section>
    }
}
