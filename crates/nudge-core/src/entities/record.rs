use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::enums::PropertyKind;

/// A record as returned by the record store: identity, deep link and a bag of
/// heterogeneously typed properties keyed by field name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    pub id: String,
    pub url: String,
    #[serde(default)]
    pub properties: BTreeMap<String, TypedProperty>,
}

impl RawRecord {
    #[must_use]
    pub fn new(id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
            properties: BTreeMap::new(),
        }
    }

    /// Builder-style insert, mostly useful for fixtures.
    #[must_use]
    pub fn with_property(mut self, name: impl Into<String>, property: TypedProperty) -> Self {
        self.properties.insert(name.into(), property);
        self
    }
}

/// One property value, discriminated by its `type` tag.
///
/// The serde layout follows the record store's wire format, where the payload
/// sits under a key named after the tag:
///
/// ```json
/// { "id": "abc", "type": "select", "select": { "name": "High" } }
/// ```
///
/// Kinds this crate does not understand deserialize to
/// [`TypedProperty::Unsupported`] instead of failing the whole record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TypedProperty {
    Title {
        #[serde(default)]
        title: Vec<RichTextRun>,
    },
    RichText {
        #[serde(default)]
        rich_text: Vec<RichTextRun>,
    },
    Date {
        date: Option<DateRange>,
    },
    Select {
        select: Option<ChoiceOption>,
    },
    Status {
        status: Option<ChoiceOption>,
    },
    MultiSelect {
        #[serde(default)]
        multi_select: Vec<ChoiceOption>,
    },
    People {
        #[serde(default)]
        people: Vec<PersonRef>,
    },
    Number {
        number: Option<f64>,
    },
    Checkbox {
        #[serde(default)]
        checkbox: bool,
    },
    #[serde(other)]
    Unsupported,
}

impl TypedProperty {
    /// The discriminant of this property.
    #[must_use]
    pub const fn kind(&self) -> PropertyKind {
        match self {
            Self::Title { .. } => PropertyKind::Title,
            Self::RichText { .. } => PropertyKind::RichText,
            Self::Date { .. } => PropertyKind::Date,
            Self::Select { .. } => PropertyKind::Select,
            Self::Status { .. } => PropertyKind::Status,
            Self::MultiSelect { .. } => PropertyKind::MultiSelect,
            Self::People { .. } => PropertyKind::People,
            Self::Number { .. } => PropertyKind::Number,
            Self::Checkbox { .. } => PropertyKind::Checkbox,
            Self::Unsupported => PropertyKind::Unsupported,
        }
    }

    #[must_use]
    pub fn title(text: &str) -> Self {
        Self::Title {
            title: vec![RichTextRun::plain(text)],
        }
    }

    #[must_use]
    pub fn rich_text(text: &str) -> Self {
        Self::RichText {
            rich_text: vec![RichTextRun::plain(text)],
        }
    }

    #[must_use]
    pub fn date(start: &str) -> Self {
        Self::Date {
            date: Some(DateRange {
                start: start.to_string(),
                end: None,
                time_zone: None,
            }),
        }
    }

    #[must_use]
    pub fn select(name: &str) -> Self {
        Self::Select {
            select: Some(ChoiceOption::named(name)),
        }
    }

    #[must_use]
    pub fn status(name: &str) -> Self {
        Self::Status {
            status: Some(ChoiceOption::named(name)),
        }
    }

    #[must_use]
    pub fn multi_select(names: &[&str]) -> Self {
        Self::MultiSelect {
            multi_select: names.iter().map(|name| ChoiceOption::named(name)).collect(),
        }
    }

    #[must_use]
    pub fn people(ids: &[&str]) -> Self {
        Self::People {
            people: ids
                .iter()
                .map(|id| PersonRef {
                    id: (*id).to_string(),
                    name: None,
                })
                .collect(),
        }
    }
}

/// A run of rich text; only the plain rendering is kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RichTextRun {
    #[serde(default)]
    pub plain_text: String,
}

impl RichTextRun {
    #[must_use]
    pub fn plain(text: &str) -> Self {
        Self {
            plain_text: text.to_string(),
        }
    }
}

/// A date property value. `start` is either `YYYY-MM-DD` or an RFC 3339
/// date-time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: String,
    #[serde(default)]
    pub end: Option<String>,
    #[serde(default)]
    pub time_zone: Option<String>,
}

/// A selected option of a select, status or multi-select property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOption {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
}

impl ChoiceOption {
    #[must_use]
    pub fn named(name: &str) -> Self {
        Self {
            id: None,
            name: name.to_string(),
            color: None,
        }
    }
}

/// A reference to a person in the record store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRef {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}
