//! Vocabulary tables mapping raw record-store terms to canonical values.
//!
//! The tables are plain data so they can be overridden from configuration and
//! tested apart from the classification and ranking logic. Each table ships
//! with the English and Korean synonyms the record store is known to use.

use serde::{Deserialize, Serialize};

use crate::enums::{LifecycleCategory, PriorityTier};
use crate::errors::CoreError;

fn terms(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

fn default_active_statuses() -> Vec<String> {
    terms(&[
        "In Progress",
        "진행중",
        "Not Started",
        "대기",
        "시작 전",
        "To Do",
        "할 일",
        "Pending",
        "보류",
    ])
}

fn default_completed_statuses() -> Vec<String> {
    terms(&[
        "Done",
        "완료",
        "완성",
        "Completed",
        "끝",
        "Finished",
        "종료",
        "Closed",
        "닫힘",
    ])
}

/// Status synonyms per lifecycle category. Matching is exact and
/// case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusVocabulary {
    #[serde(default = "default_active_statuses")]
    pub active: Vec<String>,
    #[serde(default = "default_completed_statuses")]
    pub completed: Vec<String>,
}

impl Default for StatusVocabulary {
    fn default() -> Self {
        Self {
            active: default_active_statuses(),
            completed: default_completed_statuses(),
        }
    }
}

impl StatusVocabulary {
    #[must_use]
    pub fn is_completed(&self, status: &str) -> bool {
        self.completed.iter().any(|term| term == status)
    }

    #[must_use]
    pub fn is_active(&self, status: &str) -> bool {
        self.active.iter().any(|term| term == status)
    }

    /// Category of a raw status. Unknown and missing statuses are active.
    #[must_use]
    pub fn category_of(&self, status: Option<&str>) -> LifecycleCategory {
        match status {
            Some(status) if self.is_completed(status) => LifecycleCategory::Completed,
            _ => LifecycleCategory::Active,
        }
    }

    /// Reject tables that list one term under both categories.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::VocabularyConflict`] naming the first shared term.
    pub fn validate(&self) -> Result<(), CoreError> {
        match self.active.iter().find(|term| self.is_completed(term)) {
            Some(term) => Err(CoreError::VocabularyConflict {
                term: term.clone(),
                first: LifecycleCategory::Active.to_string(),
                second: LifecycleCategory::Completed.to_string(),
            }),
            None => Ok(()),
        }
    }
}

// ---------------------------------------------------------------------------
// Priority
// ---------------------------------------------------------------------------

fn default_high() -> Vec<String> {
    terms(&["High", "높음"])
}

fn default_medium() -> Vec<String> {
    terms(&["Medium", "보통"])
}

fn default_low() -> Vec<String> {
    terms(&["Low", "낮음"])
}

/// Priority synonyms per tier. Matching is exact and case-sensitive; any
/// other term ranks as [`PriorityTier::Unranked`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityVocabulary {
    #[serde(default = "default_high")]
    pub high: Vec<String>,
    #[serde(default = "default_medium")]
    pub medium: Vec<String>,
    #[serde(default = "default_low")]
    pub low: Vec<String>,
}

impl Default for PriorityVocabulary {
    fn default() -> Self {
        Self {
            high: default_high(),
            medium: default_medium(),
            low: default_low(),
        }
    }
}

impl PriorityVocabulary {
    fn tables(&self) -> [(PriorityTier, &[String]); 3] {
        [
            (PriorityTier::High, self.high.as_slice()),
            (PriorityTier::Medium, self.medium.as_slice()),
            (PriorityTier::Low, self.low.as_slice()),
        ]
    }

    #[must_use]
    pub fn tier_of(&self, priority: Option<&str>) -> PriorityTier {
        let Some(priority) = priority else {
            return PriorityTier::Unranked;
        };
        self.tables()
            .into_iter()
            .find(|(_, synonyms)| synonyms.iter().any(|term| term == priority))
            .map_or(PriorityTier::Unranked, |(tier, _)| tier)
    }

    /// Reject tables that list one term under two tiers.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::VocabularyConflict`] naming the first shared term.
    pub fn validate(&self) -> Result<(), CoreError> {
        let tables = self.tables();
        for (i, (tier, synonyms)) in tables.iter().enumerate() {
            for (other_tier, other_synonyms) in &tables[i + 1..] {
                if let Some(term) = synonyms.iter().find(|t| other_synonyms.contains(*t)) {
                    return Err(CoreError::VocabularyConflict {
                        term: term.clone(),
                        first: tier.to_string(),
                        second: other_tier.to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Status glyphs
// ---------------------------------------------------------------------------

const DEFAULT_STATUS_GLYPH: &str = "📋";

/// Terms sharing one display glyph. Matched case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlyphRule {
    pub glyph: String,
    pub terms: Vec<String>,
}

fn default_glyph_rules() -> Vec<GlyphRule> {
    vec![
        GlyphRule {
            glyph: "🚀".into(),
            terms: terms(&["in progress", "진행중"]),
        },
        GlyphRule {
            glyph: "⏳".into(),
            terms: terms(&["not started", "대기", "시작 전"]),
        },
        GlyphRule {
            glyph: "📝".into(),
            terms: terms(&["to do", "할 일"]),
        },
        GlyphRule {
            glyph: "⏸️".into(),
            terms: terms(&["pending", "보류"]),
        },
    ]
}

fn default_status_glyph() -> String {
    DEFAULT_STATUS_GLYPH.to_string()
}

/// Display glyphs for raw statuses. Looser than [`StatusVocabulary`]: the
/// lookup ignores case and falls back to a generic glyph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusGlyphs {
    #[serde(default = "default_glyph_rules")]
    pub rules: Vec<GlyphRule>,
    #[serde(default = "default_status_glyph")]
    pub fallback: String,
}

impl Default for StatusGlyphs {
    fn default() -> Self {
        Self {
            rules: default_glyph_rules(),
            fallback: default_status_glyph(),
        }
    }
}

impl StatusGlyphs {
    #[must_use]
    pub fn glyph_for(&self, status: Option<&str>) -> &str {
        let Some(status) = status else {
            return &self.fallback;
        };
        let status = status.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.terms.iter().any(|term| term.to_lowercase() == status))
            .map_or(self.fallback.as_str(), |rule| rule.glyph.as_str())
    }
}
