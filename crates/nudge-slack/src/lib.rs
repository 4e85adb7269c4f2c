//! # nudge-slack
//!
//! Notification sink posting composed payloads to a Slack incoming webhook
//! as Block Kit messages.

mod blocks;
mod error;

pub use blocks::render;
pub use error::SlackError;

use async_trait::async_trait;
use nudge_config::SlackConfig;
use nudge_pipeline::{DeliveryError, NotificationSink, Payload};

/// Sink posting to one incoming webhook URL.
pub struct SlackWebhook {
    webhook_url: String,
    client: reqwest::Client,
}

impl SlackWebhook {
    /// Build a sink from the `[slack]` configuration section.
    ///
    /// # Errors
    ///
    /// Returns [`SlackError::Http`] if the HTTP client fails to build.
    pub fn new(config: &SlackConfig) -> Result<Self, SlackError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("nudge/", env!("CARGO_PKG_VERSION")))
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            webhook_url: config.webhook_url.clone(),
            client,
        })
    }

    /// Post one payload.
    ///
    /// # Errors
    ///
    /// Returns [`SlackError`] if the request fails or the webhook answers
    /// with a non-success status.
    pub async fn post(&self, payload: &Payload) -> Result<(), SlackError> {
        let body = render(payload);
        let resp = self.client.post(&self.webhook_url).json(&body).send().await?;

        let status = resp.status();
        if status == 429 {
            let retry_after_secs = resp
                .headers()
                .get(reqwest::header::RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(60);
            return Err(SlackError::RateLimited { retry_after_secs });
        }
        if !status.is_success() {
            return Err(SlackError::Api {
                status: status.as_u16(),
                message: resp.text().await.unwrap_or_default(),
            });
        }

        tracing::debug!(kind = ?payload.kind, "posted slack message");
        Ok(())
    }
}

#[async_trait]
impl NotificationSink for SlackWebhook {
    async fn deliver(&self, payload: &Payload) -> Result<(), DeliveryError> {
        Ok(self.post(payload).await?)
    }
}
