//! Contact form state module

mod contact_form;
mod field;
pub mod validate;

pub use contact_form::{ContactForm, Form, FIELD_COUNT};
pub use field::{FieldKind, FormField};
pub use validate::{validate_all, ValidationResult};
