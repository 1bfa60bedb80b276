use leptos::tachys::view::RenderHtml;

use super::*;

/// Simulate typing `text` one character at a time, like a user would.
fn type_text(state: &mut ContactFormState, field: Field, text: &str) {
    let mut current = state.values().get(field).to_owned();
    for ch in text.chars() {
        current.push(ch);
        state.apply(FormEvent::Input { field, value: current.clone() });
    }
}

fn render(state: ContactFormState) -> String {
    let owner = Owner::new();
    owner.with(|| {
        let form = RwSignal::new(state);
        view! { <ContactFormView form/> }.to_html()
    })
}

fn error_count(html: &str) -> usize {
    html.matches(r#"data-testid="error""#).count()
}

fn submitted_state(message: &str) -> ContactFormState {
    let mut state = ContactFormState::default();
    type_text(&mut state, Field::FirstName, "Allison");
    type_text(&mut state, Field::LastName, "Stewart");
    type_text(&mut state, Field::Email, "allison@gmail.com");
    if !message.is_empty() {
        type_text(&mut state, Field::Message, message);
    }
    state.apply(FormEvent::Submit);
    state
}

// =============================================================
// Editing view
// =============================================================

#[test]
fn renders_header_without_errors() {
    let html = render(ContactFormState::default());
    assert!(html.contains("Contact Form"));
    assert_eq!(error_count(&html), 0);
}

#[test]
fn renders_labelled_inputs_and_one_submit_button() {
    let html = render(ContactFormState::default());
    for field in Field::ALL {
        assert!(html.contains(field.label()), "missing label {}", field.label());
        assert!(html.contains(&format!(r#"for="{}""#, field.input_id())));
        assert!(html.contains(&format!(r#"id="{}""#, field.input_id())));
    }
    assert!(html.contains(r#"placeholder="Edd""#));
    assert_eq!(html.matches("<button").count(), 1);
    assert!(!html.contains(r#"data-testid="confirmation""#));
}

#[test]
fn renders_one_error_for_short_first_name() {
    let mut state = ContactFormState::default();
    type_text(&mut state, Field::FirstName, "Sara");
    let html = render(state);
    assert_eq!(error_count(&html), 1);
    assert!(html.contains("firstName must have at least 5 characters."));
}

#[test]
fn renders_three_errors_for_empty_submit() {
    let mut state = ContactFormState::default();
    state.apply(FormEvent::Submit);
    assert_eq!(error_count(&render(state)), 3);
}

#[test]
fn renders_one_error_when_email_missing() {
    let mut state = ContactFormState::default();
    type_text(&mut state, Field::FirstName, "Allison");
    type_text(&mut state, Field::LastName, "Stewart");
    state.apply(FormEvent::Submit);
    let html = render(state);
    assert_eq!(error_count(&html), 1);
    assert!(html.contains("email is a required field."));
}

#[test]
fn renders_one_error_for_invalid_email() {
    let mut state = ContactFormState::default();
    type_text(&mut state, Field::Email, "allison@gmail");
    let html = render(state);
    assert_eq!(error_count(&html), 1);
    assert!(html.contains("email must be a valid email address."));
}

#[test]
fn renders_remaining_errors_after_correcting_first_name() {
    let mut state = ContactFormState::default();
    state.apply(FormEvent::Submit);
    type_text(&mut state, Field::FirstName, "Allison");
    let html = render(state);
    assert_eq!(error_count(&html), 2);
    assert!(!html.contains("firstName is a required field."));
    assert!(html.contains("lastName is a required field."));
    assert!(html.contains("email is a required field."));
}

#[test]
fn renders_one_error_when_last_name_missing() {
    let mut state = ContactFormState::default();
    type_text(&mut state, Field::FirstName, "Allison");
    type_text(&mut state, Field::Email, "allison@gmail.com");
    state.apply(FormEvent::Submit);
    let html = render(state);
    assert_eq!(error_count(&html), 1);
    assert!(html.contains("lastName is a required field."));
}

// =============================================================
// Confirmation view
// =============================================================

#[test]
fn renders_submitted_values_without_message() {
    let html = render(submitted_state(""));
    assert!(html.contains(r#"data-testid="confirmation""#));
    assert!(html.contains("Allison"));
    assert!(html.contains("Stewart"));
    assert!(html.contains("allison@gmail.com"));
    assert!(!html.contains(r#"data-testid="messageDisplay""#));
    assert_eq!(error_count(&html), 0);
}

#[test]
fn renders_submitted_message_when_present() {
    let html = render(submitted_state("message goes here"));
    assert!(html.contains(r#"data-testid="messageDisplay""#));
    assert!(html.contains("message goes here"));
}

#[test]
fn omits_message_display_for_blank_message() {
    let html = render(submitted_state("   "));
    assert!(html.contains(r#"data-testid="confirmation""#));
    assert!(!html.contains(r#"data-testid="messageDisplay""#));
}

#[test]
fn confirmation_replaces_inputs() {
    let html = render(submitted_state(""));
    assert!(!html.contains("<input"));
    assert!(!html.contains("<textarea"));
    assert!(html.contains("Send another message"));
}
