use chrono::NaiveDate;
use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Run the reminder once and deliver it to Slack.
    Run,
    /// Run the reminder on a fixed interval until interrupted.
    Serve(ServeArgs),
    /// Fetch and compose without delivering; prints the payload.
    Preview(PreviewArgs),
    /// Show the Notion database properties and which ones nudge will read.
    Schema,
}

/// Arguments for `nudge serve`.
#[derive(Clone, Debug, Args)]
pub struct ServeArgs {
    /// Seconds between runs (overrides `schedule.interval_secs`)
    #[arg(long)]
    pub interval_secs: Option<u64>,

    /// Wait for the first interval instead of running immediately
    #[arg(long)]
    pub skip_initial_run: bool,
}

/// Arguments for `nudge preview`.
#[derive(Clone, Debug, Args)]
pub struct PreviewArgs {
    /// Reference date (YYYY-MM-DD) instead of today
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Also print the Slack Block Kit message
    #[arg(long)]
    pub blocks: bool,
}
