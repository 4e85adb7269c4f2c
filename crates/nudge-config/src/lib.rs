//! # nudge-config
//!
//! Layered configuration loading for nudge using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`NUDGE_*` prefix, `__` as separator)
//! 2. Legacy environment names (`NOTION_API_KEY`, `NOTION_DATABASE_ID`,
//!    `SLACK_WEBHOOK_URL`, `REMINDER_DAYS`)
//! 3. File passed with `--config`
//! 4. Project-level `./nudge.toml`
//! 5. User-level `~/.config/nudge/config.toml`
//! 6. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `NUDGE_NOTION__API_KEY` -> `notion.api_key`,
//! `NUDGE_REMINDER__HORIZON_DAYS` -> `reminder.horizon_days`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use nudge_config::NudgeConfig;
//!
//! let config = NudgeConfig::load_with_dotenv().expect("config");
//! let notion = config.require_notion().expect("notion credentials");
//! println!("database: {}", notion.database_id);
//! ```

mod error;
mod notion;
mod schedule;
mod slack;

pub use error::ConfigError;
pub use notion::NotionConfig;
pub use schedule::ScheduleConfig;
pub use slack::SlackConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use nudge_core::settings::ReminderSettings;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Unprefixed variable names still honoured for existing deployments.
const LEGACY_ENV: &[(&str, &str)] = &[
    ("NOTION_API_KEY", "notion.api_key"),
    ("NOTION_DATABASE_ID", "notion.database_id"),
    ("SLACK_WEBHOOK_URL", "slack.webhook_url"),
    ("REMINDER_DAYS", "reminder.horizon_days"),
];

/// Notion accepts at most this many records per page.
const MAX_PAGE_SIZE: u32 = 100;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct NudgeConfig {
    #[serde(default)]
    pub notion: NotionConfig,
    #[serde(default)]
    pub slack: SlackConfig,
    #[serde(default)]
    pub schedule: ScheduleConfig,
    #[serde(default)]
    pub reminder: ReminderSettings,
}

impl NudgeConfig {
    /// Load configuration from the default TOML files and the environment.
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Load `.env` from the current directory (or a parent), then [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Load configuration with an extra TOML file layered above the default
    /// files. The file must exist.
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = config_path {
            if !path.is_file() {
                return Err(ConfigError::InvalidValue {
                    field: "config".to_string(),
                    reason: format!("file not found: {}", path.display()),
                });
            }
        }

        let config: Self = Self::figment(config_path).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    pub fn figment(config_path: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from("nudge.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment
            .merge(Self::legacy_env())
            .merge(Env::prefixed("NUDGE_").split("__"))
    }

    /// Check cross-field constraints figment cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.schedule.interval_secs == 0 {
            return Err(invalid("schedule.interval_secs", "must be greater than zero"));
        }
        if !(1..=MAX_PAGE_SIZE).contains(&self.notion.page_size) {
            return Err(invalid(
                "notion.page_size",
                &format!("must be between 1 and {MAX_PAGE_SIZE}"),
            ));
        }
        if self.reminder.urgency.imminent_days > self.reminder.urgency.warning_days {
            return Err(invalid(
                "reminder.urgency",
                "imminent_days must not exceed warning_days",
            ));
        }
        self.reminder
            .statuses
            .validate()
            .map_err(|e| invalid("reminder.statuses", &e.to_string()))?;
        self.reminder
            .priorities
            .validate()
            .map_err(|e| invalid("reminder.priorities", &e.to_string()))?;
        Ok(())
    }

    /// Notion settings, or [`ConfigError::NotConfigured`] without credentials.
    pub fn require_notion(&self) -> Result<&NotionConfig, ConfigError> {
        if self.notion.is_configured() {
            Ok(&self.notion)
        } else {
            Err(ConfigError::NotConfigured {
                section: "notion".to_string(),
            })
        }
    }

    /// Slack settings, or [`ConfigError::NotConfigured`] without a webhook URL.
    pub fn require_slack(&self) -> Result<&SlackConfig, ConfigError> {
        if self.slack.is_configured() {
            Ok(&self.slack)
        } else {
            Err(ConfigError::NotConfigured {
                section: "slack".to_string(),
            })
        }
    }

    /// Reminder settings with an empty cadence note filled from the schedule.
    #[must_use]
    pub fn reminder_settings(&self) -> ReminderSettings {
        let mut settings = self.reminder.clone();
        if settings.cadence_note.is_empty() {
            settings.cadence_note = self.schedule.cadence_note();
        }
        settings
    }

    fn legacy_env() -> Env {
        Env::raw().filter_map(|key| {
            LEGACY_ENV
                .iter()
                .find(|(name, _)| key.as_str().eq_ignore_ascii_case(name))
                .map(|(_, path)| (*path).into())
        })
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("nudge").join("config.toml"))
    }
}

fn invalid(field: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid_but_unconfigured() {
        let config = NudgeConfig::default();
        assert!(config.validate().is_ok());
        assert!(!config.notion.is_configured());
        assert!(!config.slack.is_configured());
        assert_eq!(config.reminder.horizon_days, 3);
    }

    #[test]
    fn require_reports_missing_section() {
        let config = NudgeConfig::default();
        let err = config.require_notion().unwrap_err();
        assert!(matches!(err, ConfigError::NotConfigured { ref section } if section == "notion"));
        let err = config.require_slack().unwrap_err();
        assert!(err.to_string().contains("'slack'"));
    }

    #[test]
    fn zero_interval_is_rejected() {
        let mut config = NudgeConfig::default();
        config.schedule.interval_secs = 0;
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "schedule.interval_secs"));
    }

    #[test]
    fn oversized_page_is_rejected() {
        let mut config = NudgeConfig::default();
        config.notion.page_size = 500;
        assert!(config.validate().is_err());
    }

    #[test]
    fn vocabulary_conflict_is_rejected() {
        let mut config = NudgeConfig::default();
        config.reminder.statuses.active.push("Done".to_string());
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "reminder.statuses"));
    }

    #[test]
    fn cadence_note_is_derived_when_empty() {
        let config = NudgeConfig::default();
        assert_eq!(
            config.reminder_settings().cadence_note,
            "Sent automatically every 2 hours"
        );

        let mut custom = NudgeConfig::default();
        custom.reminder.cadence_note = "Weekdays only".to_string();
        assert_eq!(custom.reminder_settings().cadence_note, "Weekdays only");
    }
}
