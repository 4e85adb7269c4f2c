use nudge_config::NudgeConfig;
use nudge_pipeline::{ComposeContext, RunOutcome};

use crate::cli::GlobalFlags;
use crate::context;
use crate::output::output;

/// Handle `nudge run`.
///
/// Failures have already been reported to Slack by the job; they still make
/// the process exit non-zero so schedulers like cron notice them.
pub async fn handle(config: &NudgeConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let job = context::reminder_job(config)?;
    let ctx = ComposeContext::now(job.settings().cadence_note.clone());
    let outcome = job.run(&ctx).await;

    output(&outcome, flags.format)?;
    match outcome {
        RunOutcome::Delivered { .. } | RunOutcome::NothingDue => Ok(()),
        RunOutcome::FetchFailed => anyhow::bail!("reminder run failed: could not fetch tasks"),
        RunOutcome::DeliveryFailed => {
            anyhow::bail!("reminder run failed: could not deliver the reminder")
        }
    }
}
