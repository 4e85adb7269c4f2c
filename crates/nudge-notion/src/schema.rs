//! Database schema: property names and their kinds.

use std::collections::BTreeMap;

use nudge_core::enums::PropertyKind;
use serde::{Deserialize, Serialize};

/// Property layout of one Notion database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatabaseSchema {
    pub id: String,
    pub title: Option<String>,
    pub properties: BTreeMap<String, PropertyKind>,
    /// Option names of `select` and `status` properties, by property name.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub options: BTreeMap<String, Vec<String>>,
}

impl DatabaseSchema {
    /// The first candidate that exists in this database, with its kind.
    #[must_use]
    pub fn first_present<'a>(&'a self, candidates: &[String]) -> Option<(&'a str, PropertyKind)> {
        candidates.iter().find_map(|name| {
            self.properties
                .get_key_value(name)
                .map(|(name, kind)| (name.as_str(), *kind))
        })
    }

    /// Declared option names of `property`; empty for non-choice properties.
    #[must_use]
    pub fn options_of(&self, property: &str) -> &[String] {
        self.options.get(property).map(Vec::as_slice).unwrap_or_default()
    }
}

// ── Wire format ────────────────────────────────────────────────────

#[derive(Deserialize)]
pub(crate) struct DatabaseObject {
    id: String,
    #[serde(default)]
    title: Vec<TitleRun>,
    #[serde(default)]
    properties: BTreeMap<String, PropertyObject>,
}

#[derive(Deserialize)]
struct TitleRun {
    #[serde(default)]
    plain_text: String,
}

#[derive(Deserialize)]
struct PropertyObject {
    #[serde(rename = "type")]
    kind: String,
    select: Option<OptionList>,
    status: Option<OptionList>,
}

#[derive(Deserialize)]
struct OptionList {
    #[serde(default)]
    options: Vec<OptionName>,
}

#[derive(Deserialize)]
struct OptionName {
    name: String,
}

impl From<DatabaseObject> for DatabaseSchema {
    fn from(db: DatabaseObject) -> Self {
        let title: String = db.title.into_iter().map(|run| run.plain_text).collect();
        let mut properties = BTreeMap::new();
        let mut options = BTreeMap::new();
        for (name, property) in db.properties {
            let kind = kind_from_tag(&property.kind);
            let choices = match kind {
                PropertyKind::Select => property.select,
                PropertyKind::Status => property.status,
                _ => None,
            };
            if let Some(list) = choices {
                options.insert(
                    name.clone(),
                    list.options.into_iter().map(|option| option.name).collect(),
                );
            }
            properties.insert(name, kind);
        }
        Self {
            id: db.id,
            title: (!title.is_empty()).then_some(title),
            properties,
            options,
        }
    }
}

/// Kinds without a [`PropertyKind`] counterpart (formula, rollup, ...) map to
/// [`PropertyKind::Unsupported`].
fn kind_from_tag(tag: &str) -> PropertyKind {
    serde_json::from_value(serde_json::Value::String(tag.to_string()))
        .unwrap_or(PropertyKind::Unsupported)
}
