use nudge_config::NudgeConfig;
use nudge_core::enums::PropertyKind;
use nudge_core::settings::FieldCandidates;
use nudge_notion::DatabaseSchema;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context;
use crate::output::output;

#[derive(Debug, Serialize)]
struct SchemaReport<'a> {
    database: &'a DatabaseSchema,
    fields: Vec<FieldReport>,
}

/// Which property a logical task field resolves to.
#[derive(Debug, PartialEq, Eq, Serialize)]
struct FieldReport {
    field: &'static str,
    property: Option<String>,
    kind: Option<PropertyKind>,
    usable: bool,
}

/// Handle `nudge schema`.
pub async fn handle(config: &NudgeConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let client = context::notion_client(config)?;
    let schema = client.retrieve_schema().await?;

    let fields = field_reports(&schema, &config.reminder.fields);
    for report in fields.iter().filter(|report| !report.usable) {
        tracing::warn!(field = report.field, property = ?report.property, "task field will always be empty");
    }

    output(
        &SchemaReport {
            database: &schema,
            fields,
        },
        flags.format,
    )
}

fn field_reports(schema: &DatabaseSchema, fields: &FieldCandidates) -> Vec<FieldReport> {
    use PropertyKind::{Date, MultiSelect, People, Select, Status, Title};

    let table: [(&'static str, &[String], &[PropertyKind]); 5] = [
        ("title", &fields.title, &[Title]),
        ("due_date", &fields.due_date, &[Date]),
        ("status", &fields.status, &[Select, Status]),
        ("priority", &fields.priority, &[Select, Status]),
        ("assignees", &fields.assignees, &[People, MultiSelect]),
    ];

    table
        .into_iter()
        .map(|(field, candidates, accepted)| {
            let found = schema.first_present(candidates);
            FieldReport {
                field,
                property: found.map(|(name, _)| name.to_string()),
                kind: found.map(|(_, kind)| kind),
                usable: found.is_some_and(|(_, kind)| accepted.contains(&kind)),
            }
        })
        .collect()
}
