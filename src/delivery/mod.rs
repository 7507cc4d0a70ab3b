//! Email delivery boundary
//!
//! Everything that talks to the transactional-email provider lives here.
//! Responses are classified into [`DeliveryError`] once, at this boundary,
//! so the rest of the app only ever matches on the tagged variant.

mod client;
mod error;
mod traits;
mod types;

pub use client::EmailJsClient;
pub use error::DeliveryError;
pub use traits::DeliveryClientTrait;
pub use types::{Acknowledgement, ContactPayload};

#[cfg(test)]
pub use traits::MockDeliveryClientTrait;
