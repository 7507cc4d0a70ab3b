//! Form field value objects

/// Identifies one of the contact form inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    /// All fields in focus order
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Subject,
        ContactField::Message,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Subject => "Subject",
            Self::Message => "Message",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Name => "Your Name",
            Self::Email => "Your Email",
            Self::Subject => "Subject",
            Self::Message => "Your Message",
        }
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, Self::Message)
    }

    /// Position in focus order
    pub fn index(&self) -> usize {
        match self {
            Self::Name => 0,
            Self::Email => 1,
            Self::Subject => 2,
            Self::Message => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// A single text input with its current value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub field: ContactField,
    pub value: String,
}

impl FormField {
    /// Create an empty field
    pub fn new(field: ContactField) -> Self {
        Self {
            field,
            value: String::new(),
        }
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    pub fn set_text(&mut self, value: String) {
        self.value = value;
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Get the display value for rendering (placeholder when empty)
    pub fn display_value(&self) -> &str {
        if self.value.is_empty() {
            self.field.placeholder()
        } else {
            &self.value
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_order_round_trips() {
        for field in ContactField::ALL {
            assert_eq!(ContactField::from_index(field.index()), Some(field));
        }
        assert_eq!(ContactField::from_index(4), None);
    }

    #[test]
    fn test_only_message_is_multiline() {
        assert!(ContactField::Message.is_multiline());
        assert!(!ContactField::Name.is_multiline());
        assert!(!ContactField::Email.is_multiline());
        assert!(!ContactField::Subject.is_multiline());
    }

    #[test]
    fn test_display_value_falls_back_to_placeholder() {
        let mut field = FormField::new(ContactField::Email);
        assert_eq!(field.display_value(), "Your Email");

        field.set_text("a@b.co".to_string());
        assert_eq!(field.display_value(), "a@b.co");

        field.clear();
        assert!(field.is_empty());
    }
}
