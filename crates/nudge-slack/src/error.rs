//! Slack webhook error types.

use nudge_pipeline::DeliveryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SlackError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The webhook answered with a non-success status.
    #[error("webhook returned status {status}: {message}")]
    Api { status: u16, message: String },

    /// Slack returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },
}

impl From<SlackError> for DeliveryError {
    fn from(error: SlackError) -> Self {
        Self::new(error)
    }
}
