use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A task normalized from one source record.
///
/// `due_date` is a calendar date without a time of day, so every deadline
/// comparison happens at day granularity.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Task {
    pub id: String,
    pub title: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub assignees: Option<Vec<String>>,
    pub external_url: String,
}

impl Task {
    /// A task carrying only its required fields.
    #[must_use]
    pub fn new(id: impl Into<String>, external_url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: None,
            due_date: None,
            status: None,
            priority: None,
            assignees: None,
            external_url: external_url.into(),
        }
    }

    /// Title for display, falling back to the record id when untitled.
    #[must_use]
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_task_has_only_required_fields() {
        let task = Task::new("page-1", "https://notion.so/page-1");
        assert_eq!(task.id, "page-1");
        assert_eq!(task.external_url, "https://notion.so/page-1");
        assert!(task.title.is_none());
        assert!(task.due_date.is_none());
        assert!(task.assignees.is_none());
    }

    #[test]
    fn display_title_falls_back_to_id() {
        let mut task = Task::new("page-1", "https://notion.so/page-1");
        assert_eq!(task.display_title(), "page-1");

        task.title = Some("Write report".into());
        assert_eq!(task.display_title(), "Write report");
    }
}
