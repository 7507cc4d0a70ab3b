//! Contact form state and focus handling

use super::field::{ContactField, FormField};
use crate::delivery::ContactPayload;

/// Focus index of the submit button, after the four inputs
pub const SUBMIT_FOCUS: usize = 4;

/// The four contact inputs plus which control has focus
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactForm {
    pub name: FormField,
    pub email: FormField,
    pub subject: FormField,
    pub message: FormField,
    /// 0-3 are the inputs, 4 is the submit button
    pub active_field_index: usize,
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            name: FormField::new(ContactField::Name),
            email: FormField::new(ContactField::Email),
            subject: FormField::new(ContactField::Subject),
            message: FormField::new(ContactField::Message),
            active_field_index: 0,
        }
    }

    pub fn get(&self, field: ContactField) -> &FormField {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn get_mut(&mut self, field: ContactField) -> &mut FormField {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        }
    }

    /// Field under focus, `None` when the submit button is focused
    pub fn active_field(&self) -> Option<ContactField> {
        ContactField::from_index(self.active_field_index)
    }

    pub fn is_submit_focused(&self) -> bool {
        self.active_field_index == SUBMIT_FOCUS
    }

    pub fn next_field(&mut self) {
        self.active_field_index = (self.active_field_index + 1) % (SUBMIT_FOCUS + 1);
    }

    pub fn prev_field(&mut self) {
        if self.active_field_index == 0 {
            self.active_field_index = SUBMIT_FOCUS;
        } else {
            self.active_field_index -= 1;
        }
    }

    /// Clear every input; focus is left where it is
    pub fn clear(&mut self) {
        for field in ContactField::ALL {
            self.get_mut(field).clear();
        }
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        ContactField::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    /// Snapshot of the field values for delivery
    pub fn to_payload(&self) -> ContactPayload {
        ContactPayload {
            name: self.name.value.clone(),
            email: self.email.value.clone(),
            subject: self.subject.value.clone(),
            message: self.message.value.clone(),
        }
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_form_is_empty() {
        let form = ContactForm::new();
        assert!(form.is_empty());
        assert_eq!(form.active_field(), Some(ContactField::Name));
    }

    #[test]
    fn test_next_field_wraps_through_submit() {
        let mut form = ContactForm::new();
        for _ in 0..4 {
            form.next_field();
        }
        assert!(form.is_submit_focused());
        assert_eq!(form.active_field(), None);

        form.next_field();
        assert_eq!(form.active_field(), Some(ContactField::Name));
    }

    #[test]
    fn test_prev_field_wraps_to_submit() {
        let mut form = ContactForm::new();
        form.prev_field();
        assert!(form.is_submit_focused());
        form.prev_field();
        assert_eq!(form.active_field(), Some(ContactField::Message));
    }

    #[test]
    fn test_clear_keeps_focus() {
        let mut form = ContactForm::new();
        form.get_mut(ContactField::Subject)
            .set_text("Hello".to_string());
        form.active_field_index = ContactField::Subject.index();

        form.clear();

        assert!(form.is_empty());
        assert_eq!(form.active_field(), Some(ContactField::Subject));
    }

    #[test]
    fn test_to_payload_copies_values() {
        let mut form = ContactForm::new();
        form.name.set_text("Ada".to_string());
        form.email.set_text("ada@example.com".to_string());
        form.subject.set_text("Hi".to_string());
        form.message.set_text("Line one\nLine two".to_string());

        let payload = form.to_payload();

        assert_eq!(payload.name, "Ada");
        assert_eq!(payload.email, "ada@example.com");
        assert_eq!(payload.subject, "Hi");
        assert_eq!(payload.message, "Line one\nLine two");
    }
}
