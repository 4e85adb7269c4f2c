//! Typed field extraction from raw records.
//!
//! Every accessor takes an ordered list of candidate field names. The first
//! name present on the record wins, even when its kind turns out to be the
//! wrong one: a mismatched property resolves to `None` rather than being
//! coerced, and later candidates are not consulted.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate};
use nudge_core::entities::{RawRecord, Task, TypedProperty};
use nudge_core::enums::PropertyKind;
use nudge_core::settings::FieldCandidates;

type Properties = BTreeMap<String, TypedProperty>;

/// First property whose name appears in `candidates`, scanning in order.
#[must_use]
pub fn find_property<'a>(
    properties: &'a Properties,
    candidates: &[String],
) -> Option<&'a TypedProperty> {
    candidates.iter().find_map(|name| properties.get(name))
}

/// Plain content of the first text run of a `title` or `rich_text` property.
#[must_use]
pub fn resolve_text(
    properties: &Properties,
    candidates: &[String],
    kind: PropertyKind,
) -> Option<String> {
    let runs = match (find_property(properties, candidates)?, kind) {
        (TypedProperty::Title { title }, PropertyKind::Title) => title,
        (TypedProperty::RichText { rich_text }, PropertyKind::RichText) => rich_text,
        _ => return None,
    };
    runs.first()
        .map(|run| run.plain_text.clone())
        .filter(|text| !text.is_empty())
}

/// Start date of a `date` property. End dates and time zones are ignored.
#[must_use]
pub fn resolve_date(properties: &Properties, candidates: &[String]) -> Option<NaiveDate> {
    match find_property(properties, candidates)? {
        TypedProperty::Date { date: Some(range) } => parse_calendar_date(&range.start),
        _ => None,
    }
}

/// Calendar date of a `YYYY-MM-DD` or RFC 3339 string.
///
/// A date-time keeps the calendar date written in its own offset, so a
/// deadline never shifts by a day depending on where the run happens.
#[must_use]
pub fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|dt| dt.date_naive())
        })
}

/// Selected option name of a `select` or `status` property.
#[must_use]
pub fn resolve_choice(
    properties: &Properties,
    candidates: &[String],
    kind: PropertyKind,
) -> Option<String> {
    let option = match (find_property(properties, candidates)?, kind) {
        (TypedProperty::Select { select }, PropertyKind::Select) => select.as_ref(),
        (TypedProperty::Status { status }, PropertyKind::Status) => status.as_ref(),
        _ => None,
    }?;
    Some(option.name.clone()).filter(|name| !name.is_empty())
}

/// Option names of a `multi_select` property. A present property with no
/// selections yields an empty list.
#[must_use]
pub fn resolve_choices(properties: &Properties, candidates: &[String]) -> Option<Vec<String>> {
    match find_property(properties, candidates)? {
        TypedProperty::MultiSelect { multi_select } => Some(
            multi_select
                .iter()
                .map(|option| option.name.clone())
                .collect(),
        ),
        _ => None,
    }
}

/// Person identifiers of a `people` property, in order.
#[must_use]
pub fn resolve_people(properties: &Properties, candidates: &[String]) -> Option<Vec<String>> {
    match find_property(properties, candidates)? {
        TypedProperty::People { people } => {
            Some(people.iter().map(|person| person.id.clone()).collect())
        }
        _ => None,
    }
}

#[must_use]
pub fn resolve_number(properties: &Properties, candidates: &[String]) -> Option<f64> {
    match find_property(properties, candidates)? {
        TypedProperty::Number { number } => *number,
        _ => None,
    }
}

/// Value of a `checkbox` property; `false` when absent or mismatched.
#[must_use]
pub fn resolve_checkbox(properties: &Properties, candidates: &[String]) -> bool {
    matches!(
        find_property(properties, candidates),
        Some(TypedProperty::Checkbox { checkbox: true })
    )
}

/// Single-choice value that may be stored as either `select` or `status`.
fn resolve_select_or_status(properties: &Properties, candidates: &[String]) -> Option<String> {
    resolve_choice(properties, candidates, PropertyKind::Select)
        .or_else(|| resolve_choice(properties, candidates, PropertyKind::Status))
}

/// Normalize one record into a [`Task`].
#[must_use]
pub fn resolve_task(record: &RawRecord, fields: &FieldCandidates) -> Task {
    let properties = &record.properties;
    Task {
        id: record.id.clone(),
        title: resolve_text(properties, &fields.title, PropertyKind::Title),
        due_date: resolve_date(properties, &fields.due_date),
        status: resolve_select_or_status(properties, &fields.status),
        priority: resolve_select_or_status(properties, &fields.priority),
        assignees: resolve_people(properties, &fields.assignees)
            .or_else(|| resolve_choices(properties, &fields.assignees)),
        external_url: record.url.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nudge_core::entities::{ChoiceOption, DateRange};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_string()).collect()
    }

    fn bag(entries: Vec<(&str, TypedProperty)>) -> Properties {
        entries
            .into_iter()
            .map(|(name, property)| (name.to_string(), property))
            .collect()
    }

    #[test]
    fn first_present_candidate_wins() {
        let props = bag(vec![
            ("이름", TypedProperty::title("second")),
            ("제목", TypedProperty::title("first")),
        ]);
        let title = resolve_text(&props, &names(&["Name", "제목", "이름"]), PropertyKind::Title);
        assert_eq!(title.as_deref(), Some("first"));
    }

    #[test]
    fn mismatched_winner_is_not_skipped() {
        let props = bag(vec![
            ("Name", TypedProperty::rich_text("rich")),
            ("Title", TypedProperty::title("title")),
        ]);
        let title = resolve_text(&props, &names(&["Name", "Title"]), PropertyKind::Title);
        assert_eq!(title, None);
    }

    #[test]
    fn missing_candidates_resolve_to_none() {
        let props = bag(vec![("Other", TypedProperty::title("x"))]);
        assert_eq!(
            resolve_text(&props, &names(&["Name"]), PropertyKind::Title),
            None
        );
        assert_eq!(resolve_date(&props, &names(&["Due Date"])), None);
        assert_eq!(resolve_people(&props, &names(&["Assignee"])), None);
    }

    #[test]
    fn empty_text_runs_resolve_to_none() {
        let props = bag(vec![
            ("Empty", TypedProperty::Title { title: vec![] }),
            ("Blank", TypedProperty::title("")),
        ]);
        assert_eq!(
            resolve_text(&props, &names(&["Empty"]), PropertyKind::Title),
            None
        );
        assert_eq!(
            resolve_text(&props, &names(&["Blank"]), PropertyKind::Title),
            None
        );
    }

    #[rstest]
    #[case("2024-01-12", NaiveDate::from_ymd_opt(2024, 1, 12))]
    #[case("2024-01-12T23:30:00+09:00", NaiveDate::from_ymd_opt(2024, 1, 12))]
    #[case("2024-01-12T00:30:00.000Z", NaiveDate::from_ymd_opt(2024, 1, 12))]
    #[case("2024-02-30", None)]
    #[case("next tuesday", None)]
    fn dates_parse_to_calendar_days(#[case] start: &str, #[case] expected: Option<NaiveDate>) {
        let props = bag(vec![("Due Date", TypedProperty::date(start))]);
        assert_eq!(resolve_date(&props, &names(&["Due Date"])), expected);
    }

    #[test]
    fn date_ignores_end_and_time_zone() {
        let props = bag(vec![(
            "마감일",
            TypedProperty::Date {
                date: Some(DateRange {
                    start: "2024-03-01".into(),
                    end: Some("2024-03-09".into()),
                    time_zone: Some("Asia/Seoul".into()),
                }),
            },
        )]);
        assert_eq!(
            resolve_date(&props, &names(&["마감일"])),
            NaiveDate::from_ymd_opt(2024, 3, 1)
        );
    }

    #[test]
    fn empty_date_resolves_to_none() {
        let props = bag(vec![("Due Date", TypedProperty::Date { date: None })]);
        assert_eq!(resolve_date(&props, &names(&["Due Date"])), None);
    }

    #[test]
    fn choice_requires_matching_kind() {
        let props = bag(vec![("Status", TypedProperty::status("진행중"))]);
        let candidates = names(&["Status"]);
        assert_eq!(
            resolve_choice(&props, &candidates, PropertyKind::Status).as_deref(),
            Some("진행중")
        );
        assert_eq!(
            resolve_choice(&props, &candidates, PropertyKind::Select),
            None
        );
    }

    #[test]
    fn multi_select_present_but_empty_is_empty_list() {
        let props = bag(vec![
            ("Tags", TypedProperty::MultiSelect { multi_select: vec![] }),
            ("Labels", TypedProperty::multi_select(&["a", "b"])),
        ]);
        assert_eq!(resolve_choices(&props, &names(&["Tags"])), Some(vec![]));
        assert_eq!(
            resolve_choices(&props, &names(&["Labels"])),
            Some(names(&["a", "b"]))
        );
        assert_eq!(resolve_choices(&props, &names(&["Missing"])), None);
    }

    #[test]
    fn people_keep_order() {
        let props = bag(vec![("담당자", TypedProperty::people(&["u-2", "u-1"]))]);
        assert_eq!(
            resolve_people(&props, &names(&["Assignee", "담당자"])),
            Some(names(&["u-2", "u-1"]))
        );
    }

    #[test]
    fn checkbox_defaults_to_false() {
        let props = bag(vec![
            ("Done", TypedProperty::Checkbox { checkbox: true }),
            ("Flag", TypedProperty::select("yes")),
        ]);
        assert!(resolve_checkbox(&props, &names(&["Done"])));
        assert!(!resolve_checkbox(&props, &names(&["Flag"])));
        assert!(!resolve_checkbox(&props, &names(&["Missing"])));
    }

    #[test]
    fn number_resolves_only_for_number_kind() {
        let props = bag(vec![
            ("Points", TypedProperty::Number { number: Some(5.0) }),
            ("Empty", TypedProperty::Number { number: None }),
            ("Text", TypedProperty::rich_text("5")),
        ]);
        assert_eq!(resolve_number(&props, &names(&["Points"])), Some(5.0));
        assert_eq!(resolve_number(&props, &names(&["Empty"])), None);
        assert_eq!(resolve_number(&props, &names(&["Text"])), None);
    }

    #[test]
    fn resolves_task_from_korean_record() {
        let record = RawRecord::new("page-1", "https://notion.so/page-1")
            .with_property("작업", TypedProperty::title("테스트 작업 1"))
            .with_property("목표일", TypedProperty::date("2023-12-05"))
            .with_property("상태", TypedProperty::status("진행중"))
            .with_property("우선순위", TypedProperty::select("높음"))
            .with_property("담당자", TypedProperty::people(&["user-1"]));

        let task = resolve_task(&record, &FieldCandidates::default());
        assert_eq!(
            task,
            Task {
                id: "page-1".into(),
                title: Some("테스트 작업 1".into()),
                due_date: NaiveDate::from_ymd_opt(2023, 12, 5),
                status: Some("진행중".into()),
                priority: Some("높음".into()),
                assignees: Some(names(&["user-1"])),
                external_url: "https://notion.so/page-1".into(),
            }
        );
    }

    #[test]
    fn assignees_fall_back_to_multi_select_names() {
        let record = RawRecord::new("p", "https://notion.so/p")
            .with_property("Assignee", TypedProperty::multi_select(&["Kim", "Lee"]));
        let task = resolve_task(&record, &FieldCandidates::default());
        assert_eq!(task.assignees, Some(names(&["Kim", "Lee"])));
    }

    #[test]
    fn unusable_fields_leave_task_sparse() {
        let record = RawRecord::new("p", "https://notion.so/p")
            .with_property("Name", TypedProperty::Unsupported)
            .with_property("Due Date", TypedProperty::select("tomorrow"))
            .with_property(
                "Status",
                TypedProperty::Select {
                    select: Some(ChoiceOption::named("")),
                },
            );
        let task = resolve_task(&record, &FieldCandidates::default());
        assert_eq!(task, Task::new("p", "https://notion.so/p"));
    }
}
