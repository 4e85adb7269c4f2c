//! Classification enums for nudge.
//!
//! None of these values are stored on a [`Task`](crate::entities::Task); they
//! are derived on demand by the pipeline stages.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// PropertyKind
// ---------------------------------------------------------------------------

/// Discriminant of a [`TypedProperty`](crate::entities::TypedProperty).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum PropertyKind {
    Title,
    RichText,
    Date,
    Select,
    Status,
    MultiSelect,
    People,
    Number,
    Checkbox,
    Unsupported,
}

impl PropertyKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::RichText => "rich_text",
            Self::Date => "date",
            Self::Select => "select",
            Self::Status => "status",
            Self::MultiSelect => "multi_select",
            Self::People => "people",
            Self::Number => "number",
            Self::Checkbox => "checkbox",
            Self::Unsupported => "unsupported",
        }
    }
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// LifecycleCategory
// ---------------------------------------------------------------------------

/// Canonical lifecycle category of a task.
///
/// Anything not recognized as completed is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleCategory {
    Active,
    Completed,
}

impl LifecycleCategory {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for LifecycleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// PriorityTier
// ---------------------------------------------------------------------------

/// Integer priority rank. Lower sorts first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum PriorityTier {
    High = 1,
    Medium = 2,
    Low = 3,
    Unranked = 4,
}

impl PriorityTier {
    /// The tier number, 1 (highest) to 4 (unrecognized).
    #[must_use]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Indicator glyph shown next to the priority label.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::High => "🔴",
            Self::Medium => "🟡",
            Self::Low => "🟢",
            Self::Unranked => "⚪",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
            Self::Unranked => "unranked",
        }
    }
}

impl TryFrom<u8> for PriorityTier {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::High),
            2 => Ok(Self::Medium),
            3 => Ok(Self::Low),
            4 => Ok(Self::Unranked),
            other => Err(CoreError::Validation(format!(
                "priority tier must be between 1 and 4, got {other}"
            ))),
        }
    }
}

impl fmt::Display for PriorityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Urgency
// ---------------------------------------------------------------------------

/// Urgency class chosen from the number of days left until the deadline.
///
/// ```text
/// days_left <= 0          → overdue_or_today
/// days_left <= imminent   → imminent
/// days_left <= warning    → warning
/// otherwise               → upcoming
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    OverdueOrToday,
    Imminent,
    Warning,
    Upcoming,
}

impl Urgency {
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::OverdueOrToday => "🚨",
            Self::Imminent => "⚡",
            Self::Warning => "⚠️",
            Self::Upcoming => "📌",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OverdueOrToday => "overdue_or_today",
            Self::Imminent => "imminent",
            Self::Warning => "warning",
            Self::Upcoming => "upcoming",
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
