//! Notification composition.
//!
//! Turns a ranked task list, or an error message, into a [`Payload`]: an
//! ordered list of transport-neutral [`Segment`]s. Sinks decide how each
//! segment is rendered on the wire.

use chrono::{Local, NaiveDate, NaiveDateTime};
use nudge_core::entities::Task;
use nudge_core::enums::{PriorityTier, Urgency};
use nudge_core::settings::{ReminderSettings, UrgencyThresholds};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::ranker::PriorityRanker;

pub const REMINDER_HEADER: &str = "📋 Upcoming task reminder";
pub const ERROR_HEADER: &str = "❌ Task reminder system error";
pub const VIEW_LABEL: &str = "View";
const MISSING_LABEL: &str = "none";
const DUE_DATE_FORMAT: &str = "%Y-%m-%d (%a)";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// ── Payload ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum PayloadKind {
    Reminder,
    Error,
}

/// A composed notification, ready to hand to a sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Payload {
    pub kind: PayloadKind,
    pub segments: Vec<Segment>,
}

impl Payload {
    pub fn task_segments(&self) -> impl Iterator<Item = &TaskSegment> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Task(task) => Some(task),
            _ => None,
        })
    }
}

/// One block of a notification, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "segment", rename_all = "snake_case")]
pub enum Segment {
    Header {
        text: String,
    },
    Summary {
        text: String,
        task_count: usize,
    },
    Divider,
    Task(TaskSegment),
    ErrorBody {
        text: String,
        message: String,
    },
    Footer {
        text: String,
        generated_at: String,
    },
}

/// Everything a sink needs to show one task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TaskSegment {
    pub task_id: String,
    pub title: String,
    pub urgency: Urgency,
    pub urgency_glyph: String,
    pub priority_tier: PriorityTier,
    pub priority_glyph: String,
    pub priority_label: String,
    pub status_glyph: String,
    pub status_label: String,
    pub due_date: NaiveDate,
    pub due_label: String,
    pub days_left: i64,
    pub days_phrase: String,
    pub assignees: Vec<String>,
    pub action: ActionRef,
}

/// A link-out action pointing at the source record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ActionRef {
    pub label: String,
    pub url: String,
    pub action_id: String,
}

// ── Context ────────────────────────────────────────────────────────

/// Clock readings and cadence text for one composition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposeContext {
    /// Reference date for days-left arithmetic.
    pub today: NaiveDate,
    /// Local time stamped into footers.
    pub generated_at: NaiveDateTime,
    /// Footer note on how often reminders go out. May be empty.
    pub cadence_note: String,
}

impl ComposeContext {
    #[must_use]
    pub fn new(generated_at: NaiveDateTime, cadence_note: impl Into<String>) -> Self {
        Self {
            today: generated_at.date(),
            generated_at,
            cadence_note: cadence_note.into(),
        }
    }

    /// Context for the current local time.
    #[must_use]
    pub fn now(cadence_note: impl Into<String>) -> Self {
        Self::new(Local::now().naive_local(), cadence_note)
    }

    fn timestamp(&self) -> String {
        self.generated_at.format(TIMESTAMP_FORMAT).to_string()
    }
}

// ── Composer ───────────────────────────────────────────────────────

/// Builds reminder and error payloads.
#[derive(Debug, Clone, Copy)]
pub struct NotificationComposer<'a> {
    settings: &'a ReminderSettings,
}

impl<'a> NotificationComposer<'a> {
    #[must_use]
    pub const fn new(settings: &'a ReminderSettings) -> Self {
        Self { settings }
    }

    /// Reminder payload for ranked tasks, or `None` when there is nothing to
    /// deliver.
    ///
    /// Tasks without a due date get no segment of their own.
    #[must_use]
    pub fn compose_reminder(&self, tasks: &[Task], ctx: &ComposeContext) -> Option<Payload> {
        if tasks.is_empty() {
            return None;
        }

        let mut segments = vec![
            Segment::Header {
                text: REMINDER_HEADER.to_string(),
            },
            Segment::Summary {
                text: format!(
                    "*{}* due within {}.",
                    count_noun(tasks.len() as u64, "task"),
                    count_noun(u64::from(self.settings.horizon_days), "day")
                ),
                task_count: tasks.len(),
            },
            Segment::Divider,
        ];
        segments.extend(
            tasks
                .iter()
                .filter_map(|task| self.task_segment(task, ctx.today))
                .map(Segment::Task),
        );
        segments.push(Segment::Divider);
        segments.push(footer(ctx));

        Some(Payload {
            kind: PayloadKind::Reminder,
            segments,
        })
    }

    /// Error payload embedding `message` verbatim.
    #[must_use]
    pub fn compose_error(message: &str, ctx: &ComposeContext) -> Payload {
        Payload {
            kind: PayloadKind::Error,
            segments: vec![
                Segment::Header {
                    text: ERROR_HEADER.to_string(),
                },
                Segment::ErrorBody {
                    text: format!(
                        "An error occurred while processing task reminders:\n```{message}```"
                    ),
                    message: message.to_string(),
                },
                Segment::Footer {
                    text: format!("🕒 {}", ctx.timestamp()),
                    generated_at: ctx.timestamp(),
                },
            ],
        }
    }

    fn task_segment(&self, task: &Task, today: NaiveDate) -> Option<TaskSegment> {
        let due_date = task.due_date?;
        let days_left = (due_date - today).num_days();
        let urgency = urgency_for(days_left, self.settings.urgency);
        let priority_tier = PriorityRanker::new(&self.settings.priorities).tier(task);

        Some(TaskSegment {
            task_id: task.id.clone(),
            title: task.display_title().to_string(),
            urgency,
            urgency_glyph: urgency.glyph().to_string(),
            priority_tier,
            priority_glyph: priority_tier.glyph().to_string(),
            priority_label: label_or_missing(task.priority.as_deref()),
            status_glyph: self
                .settings
                .status_glyphs
                .glyph_for(task.status.as_deref())
                .to_string(),
            status_label: label_or_missing(task.status.as_deref()),
            due_date,
            due_label: due_date.format(DUE_DATE_FORMAT).to_string(),
            days_left,
            days_phrase: days_phrase(days_left),
            assignees: task.assignees.clone().unwrap_or_default(),
            action: ActionRef {
                label: VIEW_LABEL.to_string(),
                url: task.external_url.clone(),
                action_id: format!("view_task_{}", task.id),
            },
        })
    }
}

fn footer(ctx: &ComposeContext) -> Segment {
    let stamp = ctx.timestamp();
    let text = if ctx.cadence_note.is_empty() {
        format!("🕒 {stamp}")
    } else {
        format!("💡 {}  |  🕒 {stamp}", ctx.cadence_note)
    };
    Segment::Footer {
        text,
        generated_at: stamp,
    }
}

/// Urgency class for a number of days left.
#[must_use]
pub const fn urgency_for(days_left: i64, thresholds: UrgencyThresholds) -> Urgency {
    if days_left <= 0 {
        Urgency::OverdueOrToday
    } else if days_left <= thresholds.imminent_days {
        Urgency::Imminent
    } else if days_left <= thresholds.warning_days {
        Urgency::Warning
    } else {
        Urgency::Upcoming
    }
}

/// Human-readable days-left phrase: `due today`, `1 day left`,
/// `3 days overdue`.
#[must_use]
pub fn days_phrase(days_left: i64) -> String {
    match days_left {
        0 => "due today".to_string(),
        n if n < 0 => format!("{} overdue", count_noun(n.unsigned_abs(), "day")),
        n => format!("{} left", count_noun(n.unsigned_abs(), "day")),
    }
}

fn count_noun(count: u64, noun: &str) -> String {
    if count == 1 {
        format!("1 {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

fn label_or_missing(value: Option<&str>) -> String {
    value.unwrap_or(MISSING_LABEL).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Days, NaiveTime};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn ctx() -> ComposeContext {
        let today = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        ComposeContext::new(
            today.and_time(NaiveTime::from_hms_opt(9, 0, 0).unwrap()),
            "Sent automatically every 2 hours",
        )
    }

    fn due_in(days: i64) -> NaiveDate {
        ctx().today + chrono::Duration::days(days)
    }

    fn task(id: &str, due_date: Option<NaiveDate>) -> Task {
        Task {
            title: Some(format!("Task {id}")),
            due_date,
            ..Task::new(id, format!("https://notion.so/{id}"))
        }
    }

    #[test]
    fn empty_list_is_nothing_to_deliver() {
        let settings = ReminderSettings::default();
        let composer = NotificationComposer::new(&settings);
        assert_eq!(composer.compose_reminder(&[], &ctx()), None);
    }

    #[test]
    fn reminder_layout() {
        let settings = ReminderSettings::default();
        let composer = NotificationComposer::new(&settings);
        let tasks = vec![task("a", Some(due_in(1))), task("b", Some(due_in(3)))];

        let payload = composer.compose_reminder(&tasks, &ctx()).unwrap();
        assert_eq!(payload.kind, PayloadKind::Reminder);
        assert_eq!(payload.segments.len(), 7);
        assert_eq!(
            payload.segments[0],
            Segment::Header {
                text: REMINDER_HEADER.into()
            }
        );
        assert_eq!(
            payload.segments[1],
            Segment::Summary {
                text: "*2 tasks* due within 3 days.".into(),
                task_count: 2,
            }
        );
        assert_eq!(payload.segments[2], Segment::Divider);
        assert_eq!(payload.segments[5], Segment::Divider);
        assert_eq!(
            payload.segments[6],
            Segment::Footer {
                text: "💡 Sent automatically every 2 hours  |  🕒 2024-01-10 09:00:00".into(),
                generated_at: "2024-01-10 09:00:00".into(),
            }
        );
    }

    #[test]
    fn undated_tasks_get_no_segment() {
        let settings = ReminderSettings::default();
        let composer = NotificationComposer::new(&settings);
        let tasks = vec![
            task("a", Some(due_in(0))),
            task("b", None),
            task("c", Some(due_in(-2))),
        ];

        let payload = composer.compose_reminder(&tasks, &ctx()).unwrap();
        let ids: Vec<&str> = payload.task_segments().map(|s| s.task_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn only_undated_tasks_still_produce_a_payload() {
        let settings = ReminderSettings::default();
        let composer = NotificationComposer::new(&settings);
        let payload = composer
            .compose_reminder(&[task("b", None)], &ctx())
            .unwrap();
        assert_eq!(payload.task_segments().count(), 0);
    }

    #[test]
    fn tomorrow_is_imminent() {
        let settings = ReminderSettings::default();
        let composer = NotificationComposer::new(&settings);
        let payload = composer
            .compose_reminder(&[task("a", Some(due_in(1)))], &ctx())
            .unwrap();
        let segment = payload.task_segments().next().unwrap();
        assert_eq!(segment.urgency, Urgency::Imminent);
        assert_eq!(segment.urgency_glyph, "⚡");
        assert_eq!(segment.days_phrase, "1 day left");
    }

    #[test]
    fn yesterday_is_overdue() {
        let settings = ReminderSettings::default();
        let composer = NotificationComposer::new(&settings);
        let payload = composer
            .compose_reminder(&[task("a", Some(due_in(-1)))], &ctx())
            .unwrap();
        let segment = payload.task_segments().next().unwrap();
        assert_eq!(segment.urgency, Urgency::OverdueOrToday);
        assert_eq!(segment.urgency_glyph, "🚨");
        assert_eq!(segment.days_phrase, "1 day overdue");
        assert_eq!(segment.days_left, -1);
    }

    #[test]
    fn task_segment_fields() {
        let settings = ReminderSettings::default();
        let composer = NotificationComposer::new(&settings);
        let mut t = task("page-1", Some(NaiveDate::from_ymd_opt(2024, 1, 12).unwrap()));
        t.priority = Some("높음".into());
        t.status = Some("In Progress".into());
        t.assignees = Some(vec!["user-1".into(), "user-2".into()]);

        let payload = composer.compose_reminder(&[t], &ctx()).unwrap();
        let segment = payload.task_segments().next().unwrap();
        assert_eq!(
            *segment,
            TaskSegment {
                task_id: "page-1".into(),
                title: "Task page-1".into(),
                urgency: Urgency::Warning,
                urgency_glyph: "⚠️".into(),
                priority_tier: PriorityTier::High,
                priority_glyph: "🔴".into(),
                priority_label: "높음".into(),
                status_glyph: "🚀".into(),
                status_label: "In Progress".into(),
                due_date: NaiveDate::from_ymd_opt(2024, 1, 12).unwrap(),
                due_label: "2024-01-12 (Fri)".into(),
                days_left: 2,
                days_phrase: "2 days left".into(),
                assignees: vec!["user-1".into(), "user-2".into()],
                action: ActionRef {
                    label: "View".into(),
                    url: "https://notion.so/page-1".into(),
                    action_id: "view_task_page-1".into(),
                },
            }
        );
    }

    #[test]
    fn missing_priority_and_status_use_fallbacks() {
        let settings = ReminderSettings::default();
        let composer = NotificationComposer::new(&settings);
        let payload = composer
            .compose_reminder(&[task("a", Some(due_in(5)))], &ctx())
            .unwrap();
        let segment = payload.task_segments().next().unwrap();
        assert_eq!(segment.priority_tier, PriorityTier::Unranked);
        assert_eq!(segment.priority_glyph, "⚪");
        assert_eq!(segment.priority_label, "none");
        assert_eq!(segment.status_glyph, "📋");
        assert_eq!(segment.status_label, "none");
        assert_eq!(segment.urgency, Urgency::Upcoming);
        assert!(segment.assignees.is_empty());
    }

    #[test]
    fn summary_is_singular_aware() {
        let settings = ReminderSettings {
            horizon_days: 1,
            ..ReminderSettings::default()
        };
        let composer = NotificationComposer::new(&settings);
        let payload = composer
            .compose_reminder(&[task("a", Some(due_in(1)))], &ctx())
            .unwrap();
        assert_eq!(
            payload.segments[1],
            Segment::Summary {
                text: "*1 task* due within 1 day.".into(),
                task_count: 1,
            }
        );
    }

    #[test]
    fn footer_without_cadence_note() {
        let settings = ReminderSettings::default();
        let composer = NotificationComposer::new(&settings);
        let mut context = ctx();
        context.cadence_note.clear();
        let payload = composer
            .compose_reminder(&[task("a", Some(due_in(1)))], &context)
            .unwrap();
        assert_eq!(
            payload.segments.last(),
            Some(&Segment::Footer {
                text: "🕒 2024-01-10 09:00:00".into(),
                generated_at: "2024-01-10 09:00:00".into(),
            })
        );
    }

    #[test]
    fn error_payload_embeds_message() {
        let payload = NotificationComposer::compose_error("database unreachable", &ctx());
        assert_eq!(payload.kind, PayloadKind::Error);
        assert_eq!(
            payload.segments,
            vec![
                Segment::Header {
                    text: ERROR_HEADER.into()
                },
                Segment::ErrorBody {
                    text: "An error occurred while processing task reminders:\n```database unreachable```"
                        .into(),
                    message: "database unreachable".into(),
                },
                Segment::Footer {
                    text: "🕒 2024-01-10 09:00:00".into(),
                    generated_at: "2024-01-10 09:00:00".into(),
                },
            ]
        );
    }

    #[rstest]
    #[case(-3, Urgency::OverdueOrToday, "3 days overdue")]
    #[case(-1, Urgency::OverdueOrToday, "1 day overdue")]
    #[case(0, Urgency::OverdueOrToday, "due today")]
    #[case(1, Urgency::Imminent, "1 day left")]
    #[case(2, Urgency::Warning, "2 days left")]
    #[case(3, Urgency::Upcoming, "3 days left")]
    #[case(10, Urgency::Upcoming, "10 days left")]
    fn urgency_and_phrase_by_days_left(
        #[case] days_left: i64,
        #[case] urgency: Urgency,
        #[case] phrase: &str,
    ) {
        assert_eq!(urgency_for(days_left, UrgencyThresholds::default()), urgency);
        assert_eq!(days_phrase(days_left), phrase);
    }

    #[test]
    fn custom_thresholds_widen_tiers() {
        let thresholds = UrgencyThresholds {
            imminent_days: 2,
            warning_days: 5,
        };
        assert_eq!(urgency_for(2, thresholds), Urgency::Imminent);
        assert_eq!(urgency_for(4, thresholds), Urgency::Warning);
        assert_eq!(urgency_for(6, thresholds), Urgency::Upcoming);
    }

    #[test]
    fn context_today_follows_generation_time() {
        let at = NaiveDate::from_ymd_opt(2024, 1, 10)
            .unwrap()
            .checked_add_days(Days::new(1))
            .unwrap()
            .and_hms_opt(23, 59, 0)
            .unwrap();
        let context = ComposeContext::new(at, "");
        assert_eq!(context.today, NaiveDate::from_ymd_opt(2024, 1, 11).unwrap());
    }
}
