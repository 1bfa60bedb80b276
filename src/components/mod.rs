//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the contact form from a shared
//! `RwSignal<ContactFormState>` and dispatch user input back through its
//! reducer.

pub mod contact_form;
pub mod error_display;
pub mod form_field;
pub mod submission_display;
