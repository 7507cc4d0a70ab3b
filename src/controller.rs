//! Form controller: field updates, validation, and submission

use crate::delivery::{Acknowledgement, ContactPayload, DeliveryClientTrait, DeliveryError};
use crate::state::{ContactField, ContactForm, StatusMessage};
use crate::validation::validate;
use std::future::Future;
use std::sync::Arc;
use tracing::Instrument;
use uuid::Uuid;

/// Notice shown after a confirmed delivery
pub const SUCCESS_MESSAGE: &str = "Message sent successfully! 🎉";

/// Send one payload to the delivery service inside its own tracing span
pub async fn deliver(
    client: Arc<dyn DeliveryClientTrait>,
    payload: ContactPayload,
) -> Result<Acknowledgement, DeliveryError> {
    let span = tracing::info_span!("submit", attempt_id = %Uuid::new_v4());
    client.send(payload).instrument(span).await
}

/// Owns the contact form and drives one submission at a time
pub struct ContactController {
    form: ContactForm,
    is_submitting: bool,
    status_message: Option<StatusMessage>,
    client: Arc<dyn DeliveryClientTrait>,
}

impl ContactController {
    pub fn new(client: Arc<dyn DeliveryClientTrait>) -> Self {
        Self {
            form: ContactForm::new(),
            is_submitting: false,
            status_message: None,
            client,
        }
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    /// Mutable access for focus changes; field values go through `update_field`
    pub fn form_mut(&mut self) -> &mut ContactForm {
        &mut self.form
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn status_message(&self) -> Option<&StatusMessage> {
        self.status_message.as_ref()
    }

    /// Handle to the delivery client, for running a send off the UI task
    pub fn client(&self) -> Arc<dyn DeliveryClientTrait> {
        Arc::clone(&self.client)
    }

    /// Set a field value. Inputs are disabled while a send is in flight, so
    /// the update is dropped then; returns whether it was applied.
    pub fn update_field(&mut self, field: ContactField, value: impl Into<String>) -> bool {
        if self.is_submitting {
            return false;
        }
        self.form.get_mut(field).set_text(value.into());
        true
    }

    /// Append a character to a field
    pub fn push_char(&mut self, field: ContactField, c: char) -> bool {
        let mut value = self.form.get(field).as_text().to_string();
        value.push(c);
        self.update_field(field, value)
    }

    /// Remove the last character of a field
    pub fn pop_char(&mut self, field: ContactField) -> bool {
        let mut value = self.form.get(field).as_text().to_string();
        value.pop();
        self.update_field(field, value)
    }

    /// Validate and, if the form passes, take it in flight.
    ///
    /// Returns the payload to deliver, or `None` when validation failed or a
    /// send is already outstanding. A rejected second call changes nothing.
    pub fn begin_submit(&mut self) -> Option<ContactPayload> {
        if self.is_submitting {
            tracing::debug!("Submit ignored: delivery already in flight");
            return None;
        }

        self.status_message = None;

        if let Err(err) = validate(&self.form) {
            tracing::debug!("Contact form rejected: {err}");
            self.status_message = Some(StatusMessage::error(err.to_string()));
            return None;
        }

        self.is_submitting = true;
        Some(self.form.to_payload())
    }

    /// Record the outcome of the delivery started by `begin_submit`
    pub fn complete_submit(&mut self, result: Result<Acknowledgement, DeliveryError>) {
        match result {
            Ok(ack) if ack.is_ok() => {
                tracing::debug!("Contact message delivered");
                self.status_message = Some(StatusMessage::success(SUCCESS_MESSAGE));
                self.form.clear();
            }
            Ok(ack) => {
                tracing::debug!(
                    status = ack.status,
                    "Delivery resolved without acknowledgement: {:?}",
                    ack.text
                );
            }
            Err(err) => {
                tracing::debug!("Contact message not delivered: {err}");
                self.status_message = Some(StatusMessage::error(err.status_message()));
            }
        }
        self.is_submitting = false;
    }

    /// Validate and take the form in flight.
    ///
    /// Returns the send to await, or `None` when nothing should be sent. The
    /// send owns everything it needs, so it can run on another task; its
    /// result goes back through `complete_submit`.
    pub fn submit(
        &mut self,
    ) -> Option<impl Future<Output = Result<Acknowledgement, DeliveryError>> + Send + 'static>
    {
        let payload = self.begin_submit()?;
        Some(deliver(self.client(), payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delivery::MockDeliveryClientTrait;
    use crate::state::StatusKind;

    fn controller_with(mock: MockDeliveryClientTrait) -> ContactController {
        ContactController::new(Arc::new(mock))
    }

    /// Mock that must never be called
    fn untouched_mock() -> MockDeliveryClientTrait {
        let mut mock = MockDeliveryClientTrait::new();
        mock.expect_send().never();
        mock
    }

    /// Mock that answers exactly once with `result`
    fn mock_returning(
        result: Result<Acknowledgement, DeliveryError>,
    ) -> MockDeliveryClientTrait {
        let mut mock = MockDeliveryClientTrait::new();
        mock.expect_send().times(1).return_once(move |_| result);
        mock
    }

    fn fill(controller: &mut ContactController) {
        controller.update_field(ContactField::Name, "Ada");
        controller.update_field(ContactField::Email, "ada@example.com");
        controller.update_field(ContactField::Subject, "Hello");
        controller.update_field(ContactField::Message, "Hi there");
    }

    /// Run a submission to completion on the current task
    async fn submit_and_wait(controller: &mut ContactController) {
        if let Some(send) = controller.submit() {
            let result = send.await;
            controller.complete_submit(result);
        }
    }

    fn status_text(controller: &ContactController) -> Option<&str> {
        controller.status_message().map(|m| m.text.as_str())
    }

    mod update_field {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_sets_value_without_validating() {
            let mut controller = controller_with(untouched_mock());

            assert!(controller.update_field(ContactField::Email, "not an email"));

            assert_eq!(controller.form().email.as_text(), "not an email");
            assert!(controller.status_message().is_none());
        }

        #[test]
        fn test_push_and_pop_char() {
            let mut controller = controller_with(untouched_mock());
            controller.push_char(ContactField::Name, 'A');
            controller.push_char(ContactField::Name, 'd');
            controller.push_char(ContactField::Name, 'a');
            controller.pop_char(ContactField::Name);
            assert_eq!(controller.form().name.as_text(), "Ad");
        }

        #[test]
        fn test_ignored_while_submitting() {
            let mut controller = controller_with(untouched_mock());
            fill(&mut controller);
            assert!(controller.begin_submit().is_some());

            assert!(!controller.update_field(ContactField::Name, "Grace"));
            assert!(!controller.push_char(ContactField::Message, '!'));

            assert_eq!(controller.form().name.as_text(), "Ada");
            assert_eq!(controller.form().message.as_text(), "Hi there");
        }
    }

    mod validation_failures {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_empty_field_never_contacts_service() {
            for field in ContactField::ALL {
                let mut controller = controller_with(untouched_mock());
                fill(&mut controller);
                controller.update_field(field, "");

                submit_and_wait(&mut controller).await;

                assert_eq!(status_text(&controller), Some("Please fill in all fields"));
                assert!(!controller.is_submitting());
            }
        }

        #[tokio::test]
        async fn test_invalid_email_never_contacts_service() {
            let mut controller = controller_with(untouched_mock());
            fill(&mut controller);
            controller.update_field(ContactField::Email, "ada@example");

            submit_and_wait(&mut controller).await;

            assert_eq!(
                status_text(&controller),
                Some("Please enter a valid email address")
            );
            assert_eq!(
                controller.status_message().map(|m| m.kind),
                Some(StatusKind::Error)
            );
            assert!(!controller.is_submitting());
        }

        #[tokio::test]
        async fn test_fields_kept_after_validation_failure() {
            let mut controller = controller_with(untouched_mock());
            fill(&mut controller);
            controller.update_field(ContactField::Subject, "");

            submit_and_wait(&mut controller).await;

            assert_eq!(controller.form().name.as_text(), "Ada");
            assert_eq!(controller.form().email.as_text(), "ada@example.com");
        }
    }

    mod delivery {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_ok_acknowledgement_resets_form() {
            let mut mock = MockDeliveryClientTrait::new();
            mock.expect_send()
                .times(1)
                .withf(|payload| {
                    payload
                        == &ContactPayload {
                            name: "Ada".to_string(),
                            email: "ada@example.com".to_string(),
                            subject: "Hello".to_string(),
                            message: "Hi there".to_string(),
                        }
                })
                .return_once(|_| Ok(Acknowledgement::new(200, "OK")));
            let mut controller = controller_with(mock);
            fill(&mut controller);

            submit_and_wait(&mut controller).await;

            assert_eq!(status_text(&controller), Some(SUCCESS_MESSAGE));
            assert_eq!(
                controller.status_message().map(|m| m.kind),
                Some(StatusKind::Success)
            );
            assert!(controller.form().is_empty());
            assert!(!controller.is_submitting());
        }

        #[tokio::test]
        async fn test_unacknowledged_result_keeps_form() {
            let mut controller = controller_with(mock_returning(Ok(Acknowledgement::new(
                200, "Queued",
            ))));
            fill(&mut controller);

            submit_and_wait(&mut controller).await;

            assert!(controller.status_message().is_none());
            assert_eq!(controller.form().name.as_text(), "Ada");
            assert!(!controller.is_submitting());
        }

        #[tokio::test]
        async fn test_unauthorized_status() {
            let mut controller =
                controller_with(mock_returning(Err(DeliveryError::WithStatus(401))));
            fill(&mut controller);

            submit_and_wait(&mut controller).await;

            assert_eq!(
                status_text(&controller),
                Some("Email service not authorized. Please contact support.")
            );
            assert!(!controller.is_submitting());
        }

        #[tokio::test]
        async fn test_error_text() {
            let mut controller = controller_with(mock_returning(Err(DeliveryError::WithText(
                "quota exceeded".to_string(),
            ))));
            fill(&mut controller);

            submit_and_wait(&mut controller).await;

            assert_eq!(status_text(&controller), Some("Error: quota exceeded"));
            assert!(!controller.is_submitting());
        }

        #[tokio::test]
        async fn test_unmapped_status() {
            let mut controller =
                controller_with(mock_returning(Err(DeliveryError::WithStatus(418))));
            fill(&mut controller);

            submit_and_wait(&mut controller).await;

            assert_eq!(
                status_text(&controller),
                Some("Error 418: Failed to send message.")
            );
            assert!(!controller.is_submitting());
        }

        #[tokio::test]
        async fn test_unknown_failure_is_generic() {
            let mut controller = controller_with(mock_returning(Err(DeliveryError::Unknown)));
            fill(&mut controller);

            submit_and_wait(&mut controller).await;

            assert_eq!(
                status_text(&controller),
                Some("Error sending message. Please try again.")
            );
        }

        #[tokio::test]
        async fn test_fields_kept_after_delivery_error() {
            let mut controller =
                controller_with(mock_returning(Err(DeliveryError::WithStatus(500))));
            fill(&mut controller);

            submit_and_wait(&mut controller).await;

            assert_eq!(controller.form().to_payload().subject, "Hello");
        }

        #[tokio::test]
        async fn test_resubmit_after_failure_retries_delivery() {
            let mut mock = MockDeliveryClientTrait::new();
            let mut seq = mockall::Sequence::new();
            mock.expect_send()
                .times(1)
                .in_sequence(&mut seq)
                .return_once(|_| Err(DeliveryError::WithStatus(403)));
            mock.expect_send()
                .times(1)
                .in_sequence(&mut seq)
                .return_once(|_| Ok(Acknowledgement::new(200, "OK")));
            let mut controller = controller_with(mock);
            fill(&mut controller);

            submit_and_wait(&mut controller).await;
            assert_eq!(
                status_text(&controller),
                Some("Email service forbidden. Please check your configuration.")
            );

            submit_and_wait(&mut controller).await;
            assert_eq!(status_text(&controller), Some(SUCCESS_MESSAGE));
        }
    }

    mod in_flight_gate {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_not_submitting_initially() {
            let controller = controller_with(untouched_mock());
            assert!(!controller.is_submitting());
        }

        #[test]
        fn test_submitting_between_begin_and_complete() {
            let mut controller = controller_with(untouched_mock());
            fill(&mut controller);

            let payload = controller.begin_submit();
            assert!(payload.is_some());
            assert!(controller.is_submitting());

            controller.complete_submit(Err(DeliveryError::WithStatus(400)));
            assert!(!controller.is_submitting());
            assert_eq!(
                status_text(&controller),
                Some("Invalid form data. Please check your inputs.")
            );
        }

        #[tokio::test]
        async fn test_submitting_while_send_is_pending() {
            let mut controller =
                controller_with(mock_returning(Ok(Acknowledgement::new(200, "OK"))));
            fill(&mut controller);

            let send = controller.submit().expect("valid form starts a send");
            assert!(controller.is_submitting());
            assert!(controller.submit().is_none());

            let result = send.await;
            assert!(controller.is_submitting());
            controller.complete_submit(result);

            assert!(!controller.is_submitting());
            assert_eq!(status_text(&controller), Some(SUCCESS_MESSAGE));
        }

        #[test]
        fn test_submit_with_invalid_form_sends_nothing() {
            let mut controller = controller_with(untouched_mock());
            controller.update_field(ContactField::Name, "Ada");

            assert!(controller.submit().is_none());
            assert!(!controller.is_submitting());
            assert_eq!(status_text(&controller), Some("Please fill in all fields"));
        }

        #[test]
        fn test_second_begin_is_rejected() {
            let mut controller = controller_with(untouched_mock());
            fill(&mut controller);

            assert!(controller.begin_submit().is_some());
            assert!(controller.begin_submit().is_none());
            assert!(controller.is_submitting());
        }

        #[test]
        fn test_begin_clears_previous_status() {
            let mut controller = controller_with(untouched_mock());
            fill(&mut controller);
            controller.begin_submit();
            controller.complete_submit(Err(DeliveryError::Unknown));
            assert!(controller.status_message().is_some());

            controller.begin_submit();

            assert!(controller.status_message().is_none());
        }

        #[test]
        fn test_validation_failure_never_raises_gate() {
            let mut controller = controller_with(untouched_mock());
            assert!(controller.begin_submit().is_none());
            assert!(!controller.is_submitting());
        }
    }
}
