//! Delivery error classification and user-facing messages

use thiserror::Error;

/// Generic message when the failure carries neither text nor status
pub const GENERIC_FAILURE: &str = "Error sending message. Please try again.";

/// Failure reported by the delivery service
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeliveryError {
    /// The provider explained the failure in its response body
    #[error("delivery failed: {0}")]
    WithText(String),
    /// The provider answered with an error status and no explanation
    #[error("delivery failed with status {0}")]
    WithStatus(u16),
    /// No response was received
    #[error("delivery failed without a response")]
    Unknown,
}

impl DeliveryError {
    /// Classify a non-success HTTP response
    pub fn from_response(status: u16, body: &str) -> Self {
        if !body.is_empty() {
            DeliveryError::WithText(body.to_string())
        } else if status != 0 {
            DeliveryError::WithStatus(status)
        } else {
            DeliveryError::Unknown
        }
    }

    /// Classify a transport failure from the HTTP client
    pub fn from_transport(err: &reqwest::Error) -> Self {
        match err.status() {
            Some(status) => DeliveryError::WithStatus(status.as_u16()),
            None => DeliveryError::Unknown,
        }
    }

    /// Message shown to the user for this failure
    pub fn status_message(&self) -> String {
        match self {
            DeliveryError::WithText(text) => format!("Error: {text}"),
            DeliveryError::WithStatus(400) => {
                "Invalid form data. Please check your inputs.".to_string()
            }
            DeliveryError::WithStatus(401) => {
                "Email service not authorized. Please contact support.".to_string()
            }
            DeliveryError::WithStatus(403) => {
                "Email service forbidden. Please check your configuration.".to_string()
            }
            DeliveryError::WithStatus(code) => format!("Error {code}: Failed to send message."),
            DeliveryError::Unknown => GENERIC_FAILURE.to_string(),
        }
    }
}
