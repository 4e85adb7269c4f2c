use std::path::Path;

use anyhow::Context;
use nudge_config::NudgeConfig;

use crate::cli::GlobalFlags;

pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<NudgeConfig> {
    load_dotenv(flags.config.as_deref())?;
    NudgeConfig::load_from(flags.config.as_deref()).context("failed to load configuration")
}

/// Load `.env` next to an explicit config file, else from the working
/// directory or one of its parents. A missing file is not an error.
fn load_dotenv(config_path: Option<&Path>) -> anyhow::Result<()> {
    if let Some(dir) = config_path.and_then(Path::parent) {
        let env_path = dir.join(".env");
        if env_path.is_file() {
            dotenvy::from_path(&env_path)
                .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
            return Ok(());
        }
    }

    match dotenvy::dotenv() {
        Ok(path) => {
            tracing::debug!(path = %path.display(), "loaded dotenv file");
            Ok(())
        }
        Err(error) if error.not_found() => Ok(()),
        Err(error) => Err(error).context("failed to load dotenv file"),
    }
}
