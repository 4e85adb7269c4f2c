//! Request bodies for `POST /v1/databases/{id}/query`.

use nudge_core::enums::PropertyKind;
use nudge_pipeline::RecordFilter;
use serde_json::{Value, json};

use crate::schema::DatabaseSchema;

/// Build the query body for one page of results.
///
/// Filter and sort are only sent for properties the schema actually has, and
/// with the kind the schema reports; otherwise Notion rejects the request.
/// Status conditions only name options the property declares.
pub fn query_body(
    filter: &RecordFilter,
    schema: &DatabaseSchema,
    page_size: u32,
    start_cursor: Option<&str>,
) -> Value {
    let mut body = json!({ "page_size": page_size });

    if let Some(status_filter) = status_filter(filter, schema) {
        body["filter"] = status_filter;
    }
    if let Some((name, PropertyKind::Date)) = schema.first_present(&filter.sort_fields) {
        body["sorts"] = json!([{ "property": name, "direction": "ascending" }]);
    }
    if let Some(cursor) = start_cursor {
        body["start_cursor"] = json!(cursor);
    }
    body
}

fn status_filter(filter: &RecordFilter, schema: &DatabaseSchema) -> Option<Value> {
    if filter.excluded_statuses.is_empty() {
        return None;
    }
    let (name, kind) = schema.first_present(&filter.status_fields)?;
    if !matches!(kind, PropertyKind::Select | PropertyKind::Status) {
        return None;
    }
    let conditions: Vec<Value> = schema
        .options_of(name)
        .iter()
        .filter(|option| {
            filter
                .excluded_statuses
                .iter()
                .any(|status| status.trim().eq_ignore_ascii_case(option.trim()))
        })
        .map(|option| {
            let mut condition = json!({ "property": name });
            condition[kind.as_str()] = json!({ "does_not_equal": option });
            condition
        })
        .collect();
    if conditions.is_empty() {
        return None;
    }
    Some(json!({ "and": conditions }))
}
