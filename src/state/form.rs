//! Contact form state and its event reducer.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ContactForm` owns one `RwSignal<ContactFormState>` and feeds every input
//! and submit event through `ContactFormState::apply`. Rendering reads the
//! resulting state only; no decision logic lives in the view.
//!
//! DESIGN
//! ======
//! The two display modes are a tagged variant. `Editing` carries the live
//! values plus their derived errors, `Submitted` carries only the snapshot
//! captured at the moment of a valid submit, so there are no stale fields to
//! keep in sync.
//!
//! An input event revalidates only the field that changed; a submit
//! revalidates every field. Untouched fields therefore stay silent until the
//! first submit, and errors on other fields persist while one is corrected.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::collections::BTreeMap;
use std::fmt;

use crate::util::validation::{self, FieldError, FormRules};

/// One of the four contact form inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Message,
}

impl Field {
    /// All fields in render order.
    pub const ALL: [Field; 4] = [Field::FirstName, Field::LastName, Field::Email, Field::Message];

    /// Form key used for the input `name` and in error messages.
    pub fn key(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    /// Visible label text. Required fields carry a trailing `*`.
    pub fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First Name*",
            Self::LastName => "Last Name*",
            Self::Email => "Email*",
            Self::Message => "Message",
        }
    }

    pub fn placeholder(self) -> Option<&'static str> {
        match self {
            Self::FirstName => Some("Edd"),
            Self::LastName => Some("Burke"),
            Self::Email => Some("bluebill1049@hotmail.com"),
            Self::Message => None,
        }
    }

    pub fn input_type(self) -> &'static str {
        match self {
            Self::Email => "email",
            _ => "text",
        }
    }

    /// DOM id tying the `<label>` to its input.
    pub fn input_id(self) -> String {
        format!("contact-form-{}", self.key())
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Text values of every field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormValues {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
}

impl FormValues {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::FirstName => self.first_name = value,
            Field::LastName => self.last_name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    /// The message, or `None` when nothing but whitespace was entered.
    pub fn message(&self) -> Option<&str> {
        if self.message.trim().is_empty() { None } else { Some(&self.message) }
    }
}

/// User input dispatched to the reducer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormEvent {
    /// A field's full new value after a keystroke.
    Input { field: Field, value: String },
    /// The submit control was activated.
    Submit,
    /// Leave the confirmation view and start over with an empty form.
    Reset,
}

/// Which view the form is showing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormMode {
    Editing {
        values: FormValues,
        errors: BTreeMap<Field, FieldError>,
    },
    Submitted {
        values: FormValues,
    },
}

impl Default for FormMode {
    fn default() -> Self {
        Self::Editing { values: FormValues::default(), errors: BTreeMap::new() }
    }
}

/// Complete component state: display mode plus the rules it validates with.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFormState {
    mode: FormMode,
    rules: FormRules,
}

impl ContactFormState {
    pub fn new(rules: FormRules) -> Self {
        Self { mode: FormMode::default(), rules }
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn rules(&self) -> &FormRules {
        &self.rules
    }

    /// Live values while editing, the captured snapshot once submitted.
    pub fn values(&self) -> &FormValues {
        match &self.mode {
            FormMode::Editing { values, .. } | FormMode::Submitted { values } => values,
        }
    }

    /// Current validation findings. Always empty once submitted.
    pub fn errors(&self) -> Vec<(Field, &FieldError)> {
        match &self.mode {
            FormMode::Editing { errors, .. } => errors.iter().map(|(field, err)| (*field, err)).collect(),
            FormMode::Submitted { .. } => Vec::new(),
        }
    }

    pub fn error_for(&self, field: Field) -> Option<&FieldError> {
        match &self.mode {
            FormMode::Editing { errors, .. } => errors.get(&field),
            FormMode::Submitted { .. } => None,
        }
    }

    pub fn error_count(&self) -> usize {
        match &self.mode {
            FormMode::Editing { errors, .. } => errors.len(),
            FormMode::Submitted { .. } => 0,
        }
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self.mode, FormMode::Submitted { .. })
    }

    /// The snapshot taken at the last valid submit.
    pub fn submitted(&self) -> Option<&FormValues> {
        match &self.mode {
            FormMode::Submitted { values } => Some(values),
            FormMode::Editing { .. } => None,
        }
    }

    /// Apply one user event.
    pub fn apply(&mut self, event: FormEvent) {
        match (&mut self.mode, event) {
            (FormMode::Editing { values, errors }, FormEvent::Input { field, value }) => {
                match validation::validate_field(field, &value, &self.rules) {
                    Ok(()) => {
                        errors.remove(&field);
                    }
                    Err(err) => {
                        errors.insert(field, err);
                    }
                }
                values.set(field, value);
            }
            (FormMode::Editing { values, errors }, FormEvent::Submit) => {
                *errors = validation::validate(values, &self.rules);
                if errors.is_empty() {
                    log::info!("contact form submitted");
                    let snapshot = std::mem::take(values);
                    self.mode = FormMode::Submitted { values: snapshot };
                } else {
                    log::debug!("contact form submit rejected with {} error(s)", errors.len());
                }
            }
            (_, FormEvent::Reset) => {
                log::debug!("contact form reset");
                self.mode = FormMode::default();
            }
            (FormMode::Submitted { .. }, event) => {
                log::debug!("ignoring {event:?} while showing confirmation");
            }
        }
    }
}
