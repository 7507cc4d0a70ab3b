//! Trait abstraction for the delivery client to enable mocking in tests

use super::error::DeliveryError;
use super::types::{Acknowledgement, ContactPayload};
use async_trait::async_trait;

/// Trait for email delivery, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DeliveryClientTrait: Send + Sync {
    /// Send one contact message through the provider
    async fn send(&self, payload: ContactPayload) -> Result<Acknowledgement, DeliveryError>;
}
