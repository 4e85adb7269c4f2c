//! Lifecycle classification of tasks by their raw status.

use nudge_core::entities::Task;
use nudge_core::enums::LifecycleCategory;
use nudge_core::vocabulary::StatusVocabulary;

/// Maps raw statuses to [`LifecycleCategory`] using a [`StatusVocabulary`].
#[derive(Debug, Clone, Copy)]
pub struct TaskClassifier<'a> {
    vocabulary: &'a StatusVocabulary,
}

impl<'a> TaskClassifier<'a> {
    #[must_use]
    pub const fn new(vocabulary: &'a StatusVocabulary) -> Self {
        Self { vocabulary }
    }

    /// Completed only on an exact vocabulary match; everything else,
    /// including a missing status, is active.
    #[must_use]
    pub fn classify(&self, task: &Task) -> LifecycleCategory {
        self.vocabulary.category_of(task.status.as_deref())
    }

    /// Drop completed tasks, preserving order.
    #[must_use]
    pub fn exclude_completed(&self, tasks: &[Task]) -> Vec<Task> {
        tasks
            .iter()
            .filter(|task| self.classify(task) == LifecycleCategory::Active)
            .cloned()
            .collect()
    }

    /// Keep only tasks whose status is a known active term, or unset.
    ///
    /// Stricter than [`exclude_completed`](Self::exclude_completed): unknown
    /// statuses are dropped too.
    #[must_use]
    pub fn retain_active_only(&self, tasks: &[Task]) -> Vec<Task> {
        tasks
            .iter()
            .filter(|task| {
                task.status
                    .as_deref()
                    .is_none_or(|status| self.vocabulary.is_active(status))
            })
            .cloned()
            .collect()
    }
}
