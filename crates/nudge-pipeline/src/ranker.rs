//! Priority ranking of selected tasks.

use std::cmp::Ordering;

use chrono::NaiveDate;
use nudge_core::entities::Task;
use nudge_core::enums::PriorityTier;
use nudge_core::vocabulary::PriorityVocabulary;

/// Orders tasks by `(tier, due date)`, both ascending.
#[derive(Debug, Clone, Copy)]
pub struct PriorityRanker<'a> {
    vocabulary: &'a PriorityVocabulary,
}

impl<'a> PriorityRanker<'a> {
    #[must_use]
    pub const fn new(vocabulary: &'a PriorityVocabulary) -> Self {
        Self { vocabulary }
    }

    #[must_use]
    pub fn tier(&self, task: &Task) -> PriorityTier {
        self.vocabulary.tier_of(task.priority.as_deref())
    }

    /// A new vector holding `tasks` in rank order. The sort is stable, so
    /// tasks equal on both keys keep their input order.
    #[must_use]
    pub fn rank(&self, tasks: &[Task]) -> Vec<Task> {
        let mut ranked = tasks.to_vec();
        ranked.sort_by(|a, b| {
            self.tier(a)
                .cmp(&self.tier(b))
                .then_with(|| compare_due_dates(a.due_date, b.due_date))
        });
        ranked
    }
}

/// Earlier deadlines first; undated tasks after every dated one.
fn compare_due_dates(a: Option<NaiveDate>, b: Option<NaiveDate>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
