//! Application state module

mod app_state;
mod counters;
pub mod forms;

pub use app_state::*;
pub use counters::*;
pub use forms::{ContactForm, FieldKind, Form, FormField, FIELD_COUNT};
