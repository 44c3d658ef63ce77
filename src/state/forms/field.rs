//! Form field value objects

/// Type-safe field values
#[derive(Debug, Clone)]
pub enum FieldValue {
    Text(String),
    /// Numeric code constrained at the point of entry: non-digit characters
    /// are dropped and input past `max` is rejected
    Code { value: String, max: usize },
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// A single named input with its configuration, value, and error slot
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub value: FieldValue,
    /// Message from the last validation pass; cleared as soon as the field
    /// is edited
    pub error: Option<&'static str>,
    /// Render the value as bullets (password fields)
    pub masked: bool,
    /// Show/hide toggle state for masked fields
    pub revealed: bool,
}

impl FormField {
    /// Create a plain text field
    pub fn text(name: &'static str, label: &'static str, placeholder: &'static str) -> Self {
        Self {
            name,
            label,
            placeholder,
            value: FieldValue::Text(String::new()),
            error: None,
            masked: false,
            revealed: false,
        }
    }

    /// Create a masked text field
    pub fn secret(name: &'static str, label: &'static str, placeholder: &'static str) -> Self {
        Self {
            masked: true,
            ..Self::text(name, label, placeholder)
        }
    }

    /// Create a digit-constrained code field holding at most `max` digits
    pub fn code(
        name: &'static str,
        label: &'static str,
        placeholder: &'static str,
        max: usize,
    ) -> Self {
        Self {
            name,
            label,
            placeholder,
            value: FieldValue::Code {
                value: String::new(),
                max,
            },
            error: None,
            masked: false,
            revealed: false,
        }
    }

    /// Get the current value as text
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Code { value, .. } => value,
        }
    }

    /// Replace the value. Code fields keep their entry constraint: non-digit
    /// characters are dropped and the result is truncated to the maximum.
    pub fn set_text(&mut self, new_value: impl Into<String>) {
        let new_value = new_value.into();
        match &mut self.value {
            FieldValue::Text(s) => *s = new_value,
            FieldValue::Code { value, max } => {
                *value = new_value
                    .chars()
                    .filter(char::is_ascii_digit)
                    .take(*max)
                    .collect();
            }
        }
        self.error = None;
    }

    /// Push a character, honoring the entry constraint for code fields
    pub fn push_char(&mut self, c: char) {
        match &mut self.value {
            FieldValue::Text(s) => s.push(c),
            FieldValue::Code { value, max } => {
                if c.is_ascii_digit() && value.chars().count() < *max {
                    value.push(c);
                }
            }
        }
        self.error = None;
    }

    /// Remove the last character
    pub fn pop_char(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => {
                s.pop();
            }
            FieldValue::Code { value, .. } => {
                value.pop();
            }
        }
        self.error = None;
    }

    /// Flip the show/hide state of a masked field
    pub fn toggle_reveal(&mut self) {
        if self.masked {
            self.revealed = !self.revealed;
        }
    }

    /// Get the display value for rendering (masked fields render bullets
    /// unless revealed)
    pub fn display_value(&self) -> String {
        let text = self.as_text();
        if self.masked && !self.revealed {
            "•".repeat(text.chars().count())
        } else {
            text.to_string()
        }
    }
}
