//! Due-soon window selection.

use chrono::{Days, NaiveDate};
use nudge_core::entities::Task;
use nudge_core::settings::OverduePolicy;

/// Selects tasks whose deadline falls on or before `today + horizon_days`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DueWindowFilter {
    horizon_days: u32,
    policy: OverduePolicy,
}

impl DueWindowFilter {
    #[must_use]
    pub const fn new(horizon_days: u32, policy: OverduePolicy) -> Self {
        Self {
            horizon_days,
            policy,
        }
    }

    /// Last calendar day inside the window.
    #[must_use]
    pub fn last_day(&self, today: NaiveDate) -> NaiveDate {
        today
            .checked_add_days(Days::new(u64::from(self.horizon_days)))
            .unwrap_or(NaiveDate::MAX)
    }

    /// Whether a single deadline falls in the window.
    #[must_use]
    pub fn contains(&self, due_date: NaiveDate, today: NaiveDate) -> bool {
        let after_lower_bound = match self.policy {
            OverduePolicy::Include => true,
            OverduePolicy::Exclude => due_date >= today,
        };
        after_lower_bound && due_date <= self.last_day(today)
    }

    /// Tasks due within the window, in input order. Tasks without a due date
    /// are never selected.
    #[must_use]
    pub fn select(&self, tasks: &[Task], today: NaiveDate) -> Vec<Task> {
        tasks
            .iter()
            .filter(|task| task.due_date.is_some_and(|due| self.contains(due, today)))
            .cloned()
            .collect()
    }
}
