//! Contact form state and form trait

use super::field::{FieldKind, FormField};
use super::validate::{validate, validate_all};

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// Number of input fields (the buttons row is the extra slot after them)
pub const FIELD_COUNT: usize = 6;

/// The contact / lead-capture form
#[derive(Debug, Clone)]
pub struct ContactForm {
    pub name: FormField,
    pub email: FormField,
    pub phone: FormField,
    pub profession: FormField,
    pub athlete_count: FormField,
    pub message: FormField,
    pub active_field_index: usize,
    /// Which button is selected when on the buttons row (0=Cancel, 1=Send)
    pub selected_button: usize,
    /// True while a submission is in flight; the send button is disabled
    /// and relabeled for the duration
    busy: bool,
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            name: FormField::text("name", "Name", FieldKind::Name, true),
            email: FormField::text("email", "Email", FieldKind::Email, true),
            phone: FormField::text("phone", "Phone (optional)", FieldKind::Phone, false),
            profession: FormField::text("profession", "Profession", FieldKind::Generic, true),
            athlete_count: FormField::text(
                "athlete_count",
                "Athletes you coach (optional)",
                FieldKind::Generic,
                false,
            ),
            message: FormField::multiline("message", "Message (optional)", false),
            active_field_index: 0,
            selected_button: 1, // Default to "Send" button
            busy: false,
        }
    }

    /// Returns true if the buttons row is currently active
    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == FIELD_COUNT
    }

    /// Move to the next button (wraps around)
    pub fn next_button(&mut self) {
        self.selected_button = (self.selected_button + 1) % 2;
    }

    /// Move to the previous button (wraps around)
    pub fn prev_button(&mut self) {
        self.next_button();
    }

    /// Iterate all fields in display order
    pub fn fields(&self) -> impl Iterator<Item = &FormField> {
        [
            &self.name,
            &self.email,
            &self.phone,
            &self.profession,
            &self.athlete_count,
            &self.message,
        ]
        .into_iter()
    }

    fn fields_mut(&mut self) -> [&mut FormField; FIELD_COUNT] {
        [
            &mut self.name,
            &mut self.email,
            &mut self.phone,
            &mut self.profession,
            &mut self.athlete_count,
            &mut self.message,
        ]
    }

    /// Validate every field, replacing all prior annotations with fresh
    /// ones. Returns true iff the whole form is valid.
    pub fn validate(&mut self) -> bool {
        for field in self.fields_mut() {
            field.error = validate(field).message;
        }
        validate_all(self.fields())
    }

    /// Re-validate a single field, as done when focus leaves it
    pub fn validate_field(&mut self, index: usize) {
        if let Some(field) = self.fields_mut().into_iter().nth(index) {
            field.error = validate(field).message;
        }
    }

    /// Clear all field values and error annotations
    pub fn clear(&mut self) {
        for field in self.fields_mut() {
            field.clear();
        }
        self.active_field_index = 0;
        self.selected_button = 1;
    }

    /// Whether a submission is currently in flight
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Disable or re-enable the send control for the in-flight window
    pub fn set_busy(&mut self, busy: bool) {
        self.busy = busy;
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for ContactForm {
    fn field_count(&self) -> usize {
        FIELD_COUNT + 1 // input fields plus the buttons row
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(FIELD_COUNT);
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        let index = self.active_field_index;
        self.fields_mut().into_iter().nth(index)
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        self.fields().nth(index)
    }
}
