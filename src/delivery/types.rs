//! Payload and acknowledgement types exchanged with the delivery service

use serde::Serialize;

/// Acknowledgement text the provider returns for an accepted message
pub const ACK_OK: &str = "OK";

/// Template parameters sent with every message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Successful response from the delivery service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Acknowledgement {
    /// HTTP status of the response
    pub status: u16,
    /// Raw response body
    pub text: String,
}

impl Acknowledgement {
    pub fn new(status: u16, text: impl Into<String>) -> Self {
        Self {
            status,
            text: text.into(),
        }
    }

    /// Whether the provider confirmed the message with the literal marker
    pub fn is_ok(&self) -> bool {
        self.text == ACK_OK
    }
}
