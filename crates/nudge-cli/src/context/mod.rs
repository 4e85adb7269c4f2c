//! Construction of the provider, sink and job from loaded configuration.

mod config_warnings;

use anyhow::Context;
use nudge_config::NudgeConfig;
use nudge_notion::NotionClient;
use nudge_pipeline::ReminderJob;
use nudge_slack::SlackWebhook;

pub use config_warnings::warn_unconfigured;

pub type AppJob = ReminderJob<NotionClient, SlackWebhook>;

pub fn notion_client(config: &NudgeConfig) -> anyhow::Result<NotionClient> {
    let notion = config
        .require_notion()
        .context("set NUDGE_NOTION__API_KEY and NUDGE_NOTION__DATABASE_ID (or NOTION_API_KEY / NOTION_DATABASE_ID)")?;
    NotionClient::new(notion).context("failed to build Notion client")
}

pub fn slack_webhook(config: &NudgeConfig) -> anyhow::Result<SlackWebhook> {
    let slack = config
        .require_slack()
        .context("set NUDGE_SLACK__WEBHOOK_URL (or SLACK_WEBHOOK_URL)")?;
    SlackWebhook::new(slack).context("failed to build Slack webhook client")
}

/// The full reminder job; requires both Notion and Slack settings.
pub fn reminder_job(config: &NudgeConfig) -> anyhow::Result<AppJob> {
    Ok(ReminderJob::new(
        notion_client(config)?,
        slack_webhook(config)?,
        config.reminder_settings(),
    ))
}
