//! Reminder settings consumed by the pipeline.
//!
//! Built once by `nudge-config` and passed by reference into every run. The
//! pipeline never reads the environment itself.

use serde::{Deserialize, Serialize};

use crate::vocabulary::{PriorityVocabulary, StatusGlyphs, StatusVocabulary};

const fn default_horizon_days() -> u32 {
    3
}

/// Settings for one reminder pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderSettings {
    /// Size of the due-soon window in days, counted from today.
    #[serde(default = "default_horizon_days")]
    pub horizon_days: u32,

    /// Whether past-due tasks belong in the window.
    #[serde(default)]
    pub overdue: OverduePolicy,

    /// Footer note describing the delivery cadence. Empty means "derive it
    /// from the schedule".
    #[serde(default)]
    pub cadence_note: String,

    #[serde(default)]
    pub fields: FieldCandidates,

    #[serde(default)]
    pub statuses: StatusVocabulary,

    #[serde(default)]
    pub priorities: PriorityVocabulary,

    #[serde(default)]
    pub status_glyphs: StatusGlyphs,

    #[serde(default)]
    pub urgency: UrgencyThresholds,
}

impl Default for ReminderSettings {
    fn default() -> Self {
        Self {
            horizon_days: default_horizon_days(),
            overdue: OverduePolicy::default(),
            cadence_note: String::new(),
            fields: FieldCandidates::default(),
            statuses: StatusVocabulary::default(),
            priorities: PriorityVocabulary::default(),
            status_glyphs: StatusGlyphs::default(),
            urgency: UrgencyThresholds::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// OverduePolicy
// ---------------------------------------------------------------------------

/// Treatment of tasks whose deadline has already passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverduePolicy {
    /// Past-due tasks stay in the window as the most urgent ones.
    #[default]
    Include,
    /// Only tasks due today or later are selected.
    Exclude,
}

// ---------------------------------------------------------------------------
// UrgencyThresholds
// ---------------------------------------------------------------------------

const fn default_imminent_days() -> i64 {
    1
}

const fn default_warning_days() -> i64 {
    2
}

/// Day thresholds for the urgency indicator. Anything at or below zero days
/// left is overdue-or-today regardless of these values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrgencyThresholds {
    #[serde(default = "default_imminent_days")]
    pub imminent_days: i64,
    #[serde(default = "default_warning_days")]
    pub warning_days: i64,
}

impl Default for UrgencyThresholds {
    fn default() -> Self {
        Self {
            imminent_days: default_imminent_days(),
            warning_days: default_warning_days(),
        }
    }
}

// ---------------------------------------------------------------------------
// FieldCandidates
// ---------------------------------------------------------------------------

fn names(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

fn default_title_fields() -> Vec<String> {
    names(&["Name", "Title", "제목", "이름", "작업"])
}

fn default_due_date_fields() -> Vec<String> {
    names(&["Due Date", "마감일", "목표일", "완료일"])
}

fn default_status_fields() -> Vec<String> {
    names(&["Status", "상태", "진행상태"])
}

fn default_priority_fields() -> Vec<String> {
    names(&["Priority", "우선순위", "중요도"])
}

fn default_assignee_fields() -> Vec<String> {
    names(&["Assignee", "담당자", "배정자"])
}

/// Ordered field-name candidates for each logical task attribute. The first
/// name present on a record wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldCandidates {
    #[serde(default = "default_title_fields")]
    pub title: Vec<String>,
    #[serde(default = "default_due_date_fields")]
    pub due_date: Vec<String>,
    #[serde(default = "default_status_fields")]
    pub status: Vec<String>,
    #[serde(default = "default_priority_fields")]
    pub priority: Vec<String>,
    #[serde(default = "default_assignee_fields")]
    pub assignees: Vec<String>,
}

impl Default for FieldCandidates {
    fn default() -> Self {
        Self {
            title: default_title_fields(),
            due_date: default_due_date_fields(),
            status: default_status_fields(),
            priority: default_priority_fields(),
            assignees: default_assignee_fields(),
        }
    }
}
