//! Cross-cutting error types for nudge.
//!
//! Transport errors live in their own crates (`NotionError`, `SlackError`) and
//! the provider/sink boundary errors live in `nudge-pipeline`. The binary is
//! where they all converge into `anyhow`.

use thiserror::Error;

/// Errors raised while constructing or validating core values.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Data failed validation (range, format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// A vocabulary table lists the same term under two categories.
    #[error("Vocabulary conflict: '{term}' appears in both {first} and {second}")]
    VocabularyConflict {
        term: String,
        first: String,
        second: String,
    },
}
