//! Notion client error types.

use nudge_pipeline::SourceFetchError;
use thiserror::Error;

/// Errors that can occur when talking to the Notion API.
#[derive(Debug, Error)]
pub enum NotionError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by Notion.
        status: u16,
        /// Error code and message from the body, or the raw body.
        message: String,
    },

    /// Failed to parse a Notion response.
    #[error("parse error: {0}")]
    Parse(String),

    /// The integration token cannot be sent as a header.
    #[error("invalid API key: {0}")]
    InvalidApiKey(String),

    /// A configured value other than the token cannot be sent as a header.
    #[error("invalid {header} header: {reason}")]
    InvalidHeader {
        /// Header name.
        header: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// Notion returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },
}

impl From<NotionError> for SourceFetchError {
    fn from(error: NotionError) -> Self {
        Self::new(error)
    }
}
