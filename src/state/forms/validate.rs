//! Pure field validation rules
//!
//! These functions are deterministic and side-effect free; annotation of
//! invalid fields happens in the form layer, not here.

use super::field::{FieldKind, FormField};
use once_cell::sync::Lazy;
use regex::Regex;

/// local@domain.tld, no whitespace and no second `@` in any part
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex"));

/// Optional leading `+`, then at least 8 digits/spaces/hyphens/parens
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9\s\-()]{8,}$").expect("phone regex"));

pub const MSG_REQUIRED: &str = "This field is required.";
pub const MSG_EMAIL: &str = "Please enter a valid email address.";
pub const MSG_PHONE: &str = "Please enter a valid phone number.";
pub const MSG_NAME: &str = "Name must be at least 2 characters.";

/// Per-field validation outcome; `message` is present iff invalid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub valid: bool,
    pub message: Option<String>,
}

impl ValidationResult {
    fn ok() -> Self {
        Self {
            valid: true,
            message: None,
        }
    }

    fn fail(message: &str) -> Self {
        Self {
            valid: false,
            message: Some(message.to_string()),
        }
    }
}

/// Validate a single field. Rules apply in order; the first failure wins.
pub fn validate(field: &FormField) -> ValidationResult {
    let value = field.trimmed();

    if field.required && value.is_empty() {
        return ValidationResult::fail(MSG_REQUIRED);
    }

    if !value.is_empty() {
        match field.kind {
            FieldKind::Email if !EMAIL_RE.is_match(value) => {
                return ValidationResult::fail(MSG_EMAIL);
            }
            FieldKind::Phone if !PHONE_RE.is_match(value) => {
                return ValidationResult::fail(MSG_PHONE);
            }
            FieldKind::Name if value.chars().count() < 2 => {
                return ValidationResult::fail(MSG_NAME);
            }
            _ => {}
        }
    }

    ValidationResult::ok()
}

/// Validate a set of fields; true iff every field validates individually
pub fn validate_all<'a>(fields: impl IntoIterator<Item = &'a FormField>) -> bool {
    fields.into_iter().all(|f| validate(f).valid)
}
