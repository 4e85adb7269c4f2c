use nudge_config::NudgeConfig;

use crate::cli::{Commands, GlobalFlags};

/// Route a parsed command to its handler.
pub async fn dispatch(
    command: Commands,
    config: &NudgeConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Run => super::run::handle(config, flags).await,
        Commands::Serve(args) => super::serve::handle(&args, config).await,
        Commands::Preview(args) => super::preview::handle(&args, config, flags).await,
        Commands::Schema => super::schema::handle(config, flags).await,
    }
}
