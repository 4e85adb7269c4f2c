use std::future::Future;
use std::time::Duration;

use nudge_config::NudgeConfig;
use nudge_pipeline::ComposeContext;
use tokio::time::MissedTickBehavior;

use crate::cli::root_commands::ServeArgs;
use crate::context;

/// Handle `nudge serve`: run on a fixed interval until Ctrl-C.
pub async fn handle(args: &ServeArgs, config: &NudgeConfig) -> anyhow::Result<()> {
    let job = context::reminder_job(config)?;
    let interval_secs = args.interval_secs.unwrap_or(config.schedule.interval_secs);
    if interval_secs == 0 {
        anyhow::bail!("--interval-secs must be greater than zero");
    }
    let run_on_start = config.schedule.run_on_start && !args.skip_initial_run;

    tracing::info!(interval_secs, run_on_start, "reminder scheduler started");

    let job = &job;
    let cadence_note = job.settings().cadence_note.as_str();
    let shutdown = async {
        if let Err(error) = tokio::signal::ctrl_c().await {
            tracing::error!(%error, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    let runs = run_every(
        Duration::from_secs(interval_secs),
        run_on_start,
        shutdown,
        move || async move {
            let outcome = job.run(&ComposeContext::now(cadence_note)).await;
            tracing::info!(?outcome, "reminder run finished");
        },
    )
    .await;

    tracing::info!(runs, "reminder scheduler shutting down");
    Ok(())
}

/// Call `tick` every `period` until `shutdown` resolves; returns the number
/// of runs.
///
/// Runs are awaited one at a time, so they never overlap. Ticks missed while
/// a run is in flight are skipped rather than queued.
pub async fn run_every<S, F, Fut>(period: Duration, run_on_start: bool, shutdown: S, mut tick: F) -> usize
where
    S: Future<Output = ()>,
    F: FnMut() -> Fut,
    Fut: Future<Output = ()>,
{
    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
    interval.tick().await; // the first tick completes immediately

    tokio::pin!(shutdown);
    let mut runs = 0;

    if run_on_start {
        tick().await;
        runs += 1;
    }

    loop {
        tokio::select! {
            biased;
            () = &mut shutdown => break,
            _ = interval.tick() => {
                tick().await;
                runs += 1;
            }
        }
    }
    runs
}
