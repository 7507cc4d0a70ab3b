//! HTTP client for the EmailJS delivery service
//!
//! Mirrors what the EmailJS browser SDK does: a single JSON `POST` to the
//! `email/send` endpoint, with the response body treated as the
//! acknowledgement text.

use super::error::DeliveryError;
use super::traits::DeliveryClientTrait;
use super::types::{Acknowledgement, ContactPayload, ACK_OK};
use crate::config::ContactConfig;
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

/// Path of the send endpoint, relative to the API base URL
const SEND_PATH: &str = "/api/v1.0/email/send";

/// Request body expected by the send endpoint
#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    /// EmailJS calls the public key `user_id` on the wire
    user_id: &'a str,
    template_params: &'a ContactPayload,
}

/// Client for sending contact messages through EmailJS
pub struct EmailJsClient {
    http: Client,
    endpoint: String,
    service_id: String,
    template_id: String,
    public_key: String,
}

impl EmailJsClient {
    /// Create a client from the loaded configuration
    pub fn new(config: &ContactConfig) -> Self {
        Self {
            http: Client::new(),
            endpoint: send_endpoint(config.api_url()),
            service_id: config.service_id().to_string(),
            template_id: config.template_id().to_string(),
            public_key: config.public_key().to_string(),
        }
    }

    /// Full URL of the send endpoint
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn request<'a>(&'a self, payload: &'a ContactPayload) -> SendRequest<'a> {
        SendRequest {
            service_id: &self.service_id,
            template_id: &self.template_id,
            user_id: &self.public_key,
            template_params: payload,
        }
    }
}

#[async_trait]
impl DeliveryClientTrait for EmailJsClient {
    async fn send(&self, payload: ContactPayload) -> Result<Acknowledgement, DeliveryError> {
        tracing::debug!(endpoint = %self.endpoint, "sending contact message");

        let response = self
            .http
            .post(&self.endpoint)
            .json(&self.request(&payload))
            .send()
            .await
            .map_err(|e| {
                tracing::debug!("EmailJS request failed: {e}");
                DeliveryError::from_transport(&e)
            })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| {
            tracing::debug!("Failed to read EmailJS response body: {e}");
            DeliveryError::from_transport(&e)
        })?;

        classify_response(status, body)
    }
}

/// Join the configured base URL with the send path
fn send_endpoint(api_url: &str) -> String {
    format!("{}{}", api_url.trim_end_matches('/'), SEND_PATH)
}

/// Turn a raw HTTP response into an acknowledgement or a classified error.
///
/// EmailJS resolves when the status is 200 or the body is the `OK` marker;
/// anything else is a failure.
pub(crate) fn classify_response(
    status: u16,
    body: String,
) -> Result<Acknowledgement, DeliveryError> {
    if status == 200 || body == ACK_OK {
        Ok(Acknowledgement::new(status, body))
    } else {
        let err = DeliveryError::from_response(status, &body);
        tracing::debug!(status, "EmailJS rejected message: {err}");
        Err(err)
    }
}
