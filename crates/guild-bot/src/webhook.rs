//! Outbound webhook delivery
//!
//! Fire-and-forget POSTs to Discord webhook endpoints with a bounded
//! timeout so a slow webhook cannot hold an interaction response open.

use std::time::Duration;

use serde::Serialize;
use thiserror::Error;

/// JSON body accepted by Discord webhooks
#[derive(Debug, Serialize)]
struct WebhookPayload<'a> {
    content: &'a str,
}

/// Errors from a single delivery attempt. Never retried.
#[derive(Debug, Error)]
pub enum WebhookError {
    #[error("Webhook request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Webhook returned status {0}")]
    Status(u16),
}

/// Single-attempt webhook client
#[derive(Debug, Clone)]
pub struct WebhookClient {
    client: reqwest::Client,
}

impl WebhookClient {
    /// Create a client whose every request is bounded by `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, WebhookError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    /// POST a `{content}` message to a webhook URL. One attempt, no retry.
    pub async fn post_content(&self, url: &str, content: &str) -> Result<(), WebhookError> {
        let response = self
            .client
            .post(url)
            .json(&WebhookPayload { content })
            .send()
            .await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(WebhookError::Status(response.status().as_u16()))
        }
    }
}
