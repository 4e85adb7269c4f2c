//! Interfaces of the collaborators the pipeline consumes.
//!
//! The pipeline never performs I/O itself. A [`RecordProvider`] supplies raw
//! records and a [`NotificationSink`] accepts composed payloads; both live in
//! their own crates (`nudge-notion`, `nudge-slack`).

use async_trait::async_trait;
use nudge_core::entities::RawRecord;
use nudge_core::settings::ReminderSettings;
use thiserror::Error;

use crate::compose::Payload;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// What the pipeline would like the provider to return.
///
/// Providers may honor it partially or not at all; the pipeline re-applies
/// its own classification and windowing to whatever comes back.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecordFilter {
    /// Candidate names of the status field, in preference order.
    pub status_fields: Vec<String>,
    /// Status terms the pipeline will discard anyway.
    pub excluded_statuses: Vec<String>,
    /// Candidate names of the field to sort ascending by.
    pub sort_fields: Vec<String>,
}

impl RecordFilter {
    /// Ask for records that are not completed, earliest deadline first.
    #[must_use]
    pub fn from_settings(settings: &ReminderSettings) -> Self {
        Self {
            status_fields: settings.fields.status.clone(),
            excluded_statuses: settings.statuses.completed.clone(),
            sort_fields: settings.fields.due_date.clone(),
        }
    }
}

/// Failure to obtain records from the provider.
#[derive(Debug, Error)]
#[error("failed to fetch task records: {source}")]
pub struct SourceFetchError {
    #[source]
    source: BoxError,
}

impl SourceFetchError {
    pub fn new(source: impl Into<BoxError>) -> Self {
        Self {
            source: source.into(),
        }
    }
}

/// Failure to hand a payload to the sink.
#[derive(Debug, Error)]
#[error("failed to deliver notification: {source}")]
pub struct DeliveryError {
    #[source]
    source: BoxError,
}

impl DeliveryError {
    pub fn new(source: impl Into<BoxError>) -> Self {
        Self {
            source: source.into(),
        }
    }
}

#[async_trait]
pub trait RecordProvider: Send + Sync {
    /// Fetch the current records.
    ///
    /// # Errors
    ///
    /// Returns [`SourceFetchError`] when the store cannot be read.
    async fn fetch(&self, filter: &RecordFilter) -> Result<Vec<RawRecord>, SourceFetchError>;
}

#[async_trait]
pub trait NotificationSink: Send + Sync {
    /// Deliver one payload.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryError`] when the sink rejects or never receives it.
    async fn deliver(&self, payload: &Payload) -> Result<(), DeliveryError>;
}
