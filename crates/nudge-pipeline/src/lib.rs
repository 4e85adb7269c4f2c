//! # nudge-pipeline
//!
//! The reminder pipeline: raw records in, a notification payload out.
//!
//! ```text
//! RawRecord ─▶ resolver ─▶ Task ─▶ classifier ─▶ window ─▶ ranker ─▶ compose ─▶ Payload
//! ```
//!
//! Every stage is a synchronous, side-effect free function of its inputs.
//! [`ReminderJob`] wires the stages to a [`RecordProvider`] and a
//! [`NotificationSink`] and contains their failures.
//!
//! The pipeline does no deduplication or locking. Callers that schedule runs
//! must keep at most one run in flight if duplicate deliveries matter.

pub mod classifier;
pub mod compose;
pub mod job;
pub mod ports;
pub mod ranker;
pub mod resolver;
pub mod window;

pub use classifier::TaskClassifier;
pub use compose::{ComposeContext, NotificationComposer, Payload, PayloadKind, Segment, TaskSegment};
pub use job::{ReminderJob, RunOutcome};
pub use ports::{DeliveryError, NotificationSink, RecordFilter, RecordProvider, SourceFetchError};
pub use ranker::PriorityRanker;
pub use window::DueWindowFilter;

use chrono::NaiveDate;
use nudge_core::entities::{RawRecord, Task};
use nudge_core::settings::ReminderSettings;

/// Result of the pure stages, with the counts each stage left behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub resolved: usize,
    pub active: usize,
    pub due: Vec<Task>,
}

/// Resolve, classify, window and rank `records` as of `today`.
#[must_use]
pub fn select_due_tasks(
    records: &[RawRecord],
    settings: &ReminderSettings,
    today: NaiveDate,
) -> Selection {
    let tasks: Vec<Task> = records
        .iter()
        .map(|record| resolver::resolve_task(record, &settings.fields))
        .collect();
    let active = TaskClassifier::new(&settings.statuses).exclude_completed(&tasks);
    let window = DueWindowFilter::new(settings.horizon_days, settings.overdue);
    let due = window.select(&active, today);

    Selection {
        resolved: tasks.len(),
        active: active.len(),
        due: PriorityRanker::new(&settings.priorities).rank(&due),
    }
}
