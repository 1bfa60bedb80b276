//! Field validation rules for the contact form.
//!
//! DESIGN
//! ======
//! Validation is a pure function from the current field values to an error
//! map. Every rule is evaluated independently, so each failing field yields
//! exactly one `FieldError` regardless of how many of its checks fail.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::state::form::{Field, FormValues};

/// Default minimum length of the first name, in characters.
pub const DEFAULT_FIRST_NAME_MIN_CHARS: usize = 5;

/// Local part, `@`, then a domain of non-empty dot-separated labels.
static EMAIL_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@.]+(\.[^\s@.]+)+$").ok());

/// A single validation finding for one field.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("{0} is a required field.")]
    Required(Field),
    #[error("{field} must have at least {min} characters.")]
    TooShort { field: Field, min: usize },
    #[error("email must be a valid email address.")]
    InvalidEmail,
}

/// Tunable validation thresholds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormRules {
    pub first_name_min_chars: usize,
}

impl Default for FormRules {
    fn default() -> Self {
        Self { first_name_min_chars: DEFAULT_FIRST_NAME_MIN_CHARS }
    }
}

/// Check one field against its rule.
///
/// # Errors
///
/// Returns the single `FieldError` describing why `value` is not acceptable
/// for `field`. `Field::Message` always passes.
pub fn validate_field(field: Field, value: &str, rules: &FormRules) -> Result<(), FieldError> {
    let trimmed = value.trim();
    match field {
        Field::Message => Ok(()),
        _ if trimmed.is_empty() => Err(FieldError::Required(field)),
        Field::FirstName if trimmed.chars().count() < rules.first_name_min_chars => {
            Err(FieldError::TooShort { field, min: rules.first_name_min_chars })
        }
        Field::Email if !is_valid_email(trimmed) => Err(FieldError::InvalidEmail),
        Field::FirstName | Field::LastName | Field::Email => Ok(()),
    }
}

/// Validate every field, collecting one error per failing field.
pub fn validate(values: &FormValues, rules: &FormRules) -> BTreeMap<Field, FieldError> {
    Field::ALL
        .into_iter()
        .filter_map(|field| {
            validate_field(field, values.get(field), rules)
                .err()
                .map(|err| (field, err))
        })
        .collect()
}

/// Whether `value` has the shape `local@domain.tld`.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.as_ref().is_some_and(|re| re.is_match(value))
}
