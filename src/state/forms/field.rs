//! Form field value objects

/// Which extra validation rule applies to a field beyond required-ness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldKind {
    #[default]
    Generic,
    Email,
    Phone,
    Name,
}

/// Represents a single form field with its configuration, value and
/// current error annotation
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub value: String,
    pub kind: FieldKind,
    pub required: bool,
    pub is_multiline: bool,
    /// Inline error annotation, set by form validation and cleared on input
    pub error: Option<String>,
}

impl FormField {
    /// Create a new single-line text field
    pub fn text(name: &str, label: &str, kind: FieldKind, required: bool) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: String::new(),
            kind,
            required,
            is_multiline: false,
            error: None,
        }
    }

    /// Create a new multiline text field
    pub fn multiline(name: &str, label: &str, required: bool) -> Self {
        Self {
            is_multiline: true,
            ..Self::text(name, label, FieldKind::Generic, required)
        }
    }

    /// Get the trimmed value, which is what validation and submission see
    pub fn trimmed(&self) -> &str {
        self.value.trim()
    }

    /// Push a character to the field value, clearing any error annotation
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
        self.error = None;
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
        self.error = None;
    }

    /// Clear the field value and its error annotation
    pub fn clear(&mut self) {
        self.value.clear();
        self.error = None;
    }

    /// Whether the field currently carries an error annotation
    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }
}
