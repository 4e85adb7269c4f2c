use chrono::{Local, NaiveDate};
use nudge_config::NudgeConfig;
use nudge_pipeline::{
    ComposeContext, NotificationComposer, Payload, RecordFilter, RecordProvider, select_due_tasks,
};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::PreviewArgs;
use crate::context;
use crate::output::output;

#[derive(Debug, Serialize)]
struct PreviewReport {
    today: NaiveDate,
    fetched: usize,
    active: usize,
    due: usize,
    payload: Option<Payload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    slack: Option<serde_json::Value>,
}

/// Handle `nudge preview`: everything `run` does except delivery. Slack
/// settings are not required.
pub async fn handle(
    args: &PreviewArgs,
    config: &NudgeConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let client = context::notion_client(config)?;
    let settings = config.reminder_settings();

    let ctx = match args.date {
        Some(date) => ComposeContext::new(
            date.and_time(Local::now().time()),
            settings.cadence_note.clone(),
        ),
        None => ComposeContext::now(settings.cadence_note.clone()),
    };

    let records = client.fetch(&RecordFilter::from_settings(&settings)).await?;
    let selection = select_due_tasks(&records, &settings, ctx.today);
    let payload = NotificationComposer::new(&settings).compose_reminder(&selection.due, &ctx);

    let slack = if args.blocks {
        payload.as_ref().map(nudge_slack::render)
    } else {
        None
    };
    let report = PreviewReport {
        today: ctx.today,
        fetched: records.len(),
        active: selection.active,
        due: selection.due.len(),
        payload,
        slack,
    };
    output(&report, flags.format)
}
