//! Scheduling configuration for `nudge serve`.

use serde::{Deserialize, Serialize};

/// Every two hours.
const fn default_interval_secs() -> u64 {
    2 * 60 * 60
}

const fn default_run_on_start() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScheduleConfig {
    /// Seconds between two reminder runs.
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,

    /// Whether to run once immediately on startup.
    #[serde(default = "default_run_on_start")]
    pub run_on_start: bool,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
            run_on_start: default_run_on_start(),
        }
    }
}

impl ScheduleConfig {
    /// Footer text describing this cadence, e.g. `Sent automatically every 2 hours`.
    pub fn cadence_note(&self) -> String {
        let secs = self.interval_secs;
        let (count, unit) = if secs % 3600 == 0 {
            (secs / 3600, "hour")
        } else if secs % 60 == 0 {
            (secs / 60, "minute")
        } else {
            (secs, "second")
        };
        if count == 1 {
            format!("Sent automatically every {unit}")
        } else {
            format!("Sent automatically every {count} {unit}s")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = ScheduleConfig::default();
        assert_eq!(config.interval_secs, 7200);
        assert!(config.run_on_start);
    }

    #[test]
    fn cadence_note_uses_largest_whole_unit() {
        let note = |interval_secs| {
            ScheduleConfig {
                interval_secs,
                ..Default::default()
            }
            .cadence_note()
        };
        assert_eq!(note(7200), "Sent automatically every 2 hours");
        assert_eq!(note(3600), "Sent automatically every hour");
        assert_eq!(note(1800), "Sent automatically every 30 minutes");
        assert_eq!(note(90), "Sent automatically every 90 seconds");
    }
}
