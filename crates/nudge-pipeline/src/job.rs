//! One reminder run: fetch, select, compose, deliver.

use nudge_core::settings::ReminderSettings;
use serde::Serialize;

use crate::compose::{ComposeContext, NotificationComposer};
use crate::ports::{NotificationSink, RecordFilter, RecordProvider};
use crate::select_due_tasks;

/// How a run ended. None of these is fatal to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RunOutcome {
    /// A reminder listing `task_count` tasks was delivered.
    Delivered { task_count: usize },
    /// No task was due; the sink was not called.
    NothingDue,
    /// The provider failed; an error notification was attempted.
    FetchFailed,
    /// The sink rejected the reminder; an error notification was attempted.
    DeliveryFailed,
}

/// Wires the pipeline stages to a provider and a sink.
pub struct ReminderJob<P, S> {
    provider: P,
    sink: S,
    settings: ReminderSettings,
}

impl<P, S> ReminderJob<P, S>
where
    P: RecordProvider,
    S: NotificationSink,
{
    pub const fn new(provider: P, sink: S, settings: ReminderSettings) -> Self {
        Self {
            provider,
            sink,
            settings,
        }
    }

    #[must_use]
    pub const fn settings(&self) -> &ReminderSettings {
        &self.settings
    }

    /// Run the pipeline once.
    ///
    /// Fetch and delivery failures are reported to the sink as an error
    /// notification; a failure to deliver that notification is only logged.
    pub async fn run(&self, ctx: &ComposeContext) -> RunOutcome {
        tracing::info!(today = %ctx.today, "processing task reminders");

        let filter = RecordFilter::from_settings(&self.settings);
        let records = match self.provider.fetch(&filter).await {
            Ok(records) => records,
            Err(error) => {
                tracing::error!(%error, "failed to fetch task records");
                self.report_error(&error.to_string(), ctx).await;
                return RunOutcome::FetchFailed;
            }
        };

        let selection = select_due_tasks(&records, &self.settings, ctx.today);
        tracing::info!(
            fetched = records.len(),
            active = selection.active,
            due = selection.due.len(),
            horizon_days = self.settings.horizon_days,
            "selected due tasks"
        );

        let composer = NotificationComposer::new(&self.settings);
        let Some(payload) = composer.compose_reminder(&selection.due, ctx) else {
            tracing::info!("no tasks due; skipping delivery");
            return RunOutcome::NothingDue;
        };

        match self.sink.deliver(&payload).await {
            Ok(()) => {
                tracing::info!(task_count = selection.due.len(), "reminder delivered");
                RunOutcome::Delivered {
                    task_count: selection.due.len(),
                }
            }
            Err(error) => {
                tracing::error!(%error, "failed to deliver reminder");
                self.report_error(&error.to_string(), ctx).await;
                RunOutcome::DeliveryFailed
            }
        }
    }

    async fn report_error(&self, message: &str, ctx: &ComposeContext) {
        let payload = NotificationComposer::compose_error(message, ctx);
        if let Err(error) = self.sink.deliver(&payload).await {
            tracing::error!(%error, "failed to deliver error notification");
        }
    }
}
