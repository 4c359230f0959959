//! Data model for lesson-plan documents
//!
//! Field shapes follow the JSON emitted by the generation service. Every
//! activity field tolerates absence: a sparse or partially filled activity
//! deserializes to empty values and is flagged by the validator rather than
//! failing the parse.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Educational stage a lesson plan targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgeLevel {
    Infantil,
    Primaria,
    Secundaria,
    Bachillerato,
}

impl fmt::Display for AgeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgeLevel::Infantil => write!(f, "infantil"),
            AgeLevel::Primaria => write!(f, "primaria"),
            AgeLevel::Secundaria => write!(f, "secundaria"),
            AgeLevel::Bachillerato => write!(f, "bachillerato"),
        }
    }
}

/// Descriptions for the five ordinal performance levels of an activity,
/// keyed "0" (worst) to "4" (best) on the wire
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Criteria {
    #[serde(rename = "0")]
    pub level0: String,
    #[serde(rename = "1")]
    pub level1: String,
    #[serde(rename = "2")]
    pub level2: String,
    #[serde(rename = "3")]
    pub level3: String,
    #[serde(rename = "4")]
    pub level4: String,
}

impl Criteria {
    /// Levels in display order, best (4) to worst (0)
    pub fn levels_descending(&self) -> [(u8, &str); 5] {
        [
            (4, self.level4.as_str()),
            (3, self.level3.as_str()),
            (2, self.level2.as_str()),
            (1, self.level1.as_str()),
            (0, self.level0.as_str()),
        ]
    }
}

/// A specific competency worked by an activity, with the descriptor codes
/// it relates to (e.g. `CCL2`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompetencyItem {
    /// Free-text description of the competency
    pub competency: String,
    /// Descriptor codes backing the competency, looked up verbatim against
    /// the reference catalog
    #[serde(
        rename = "relatedDescriptorCodes",
        alias = "related_descriptor_codes"
    )]
    pub related_descriptor_codes: Vec<String>,
}

/// A single pedagogical activity within a lesson plan
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Activity {
    /// Title of the activity
    pub title: String,
    /// Description of what the students do
    pub description: String,
    /// Duration in minutes
    pub duration: u32,
    /// Number of sessions the activity spans
    pub sessions: u32,
    /// Competencies worked by the activity; empty is legal but flagged
    pub competencies: Vec<CompetencyItem>,
    /// Knowledge / basic-skills items; empty is legal but flagged
    pub knowledge: Vec<String>,
    /// Opaque resource-tag strings suggested for the activity
    #[serde(
        rename = "suggestedResources",
        alias = "AInara",
        skip_serializing_if = "Option::is_none"
    )]
    pub suggested_resources: Option<Vec<String>>,
    /// Performance-level descriptions, all five levels required
    #[serde(rename = "criteria", alias = "Criteria")]
    pub criteria: Criteria,
}

/// Top-level lesson-plan document
///
/// Activities arrive as a variable, sparse set of named slots (`activity1`,
/// `activity2`, ...) rather than a list; they are captured in `slots` and
/// normalized into an ordered sequence by [`crate::walker::extract_activities`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LessonPlan {
    /// Language the plan is written in
    #[serde(default)]
    pub language: String,
    /// Title of the lesson plan
    #[serde(default)]
    pub title: String,
    /// Learning context presented to the students
    #[serde(default)]
    pub context: String,
    /// Pedagogical justification of the proposal
    #[serde(default)]
    pub justification: String,
    /// Educational stage the plan targets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agelvl: Option<AgeLevel>,
    /// Sustainable-Development-Goal identifiers, if any
    #[serde(rename = "SDG", default, skip_serializing_if = "Option::is_none")]
    pub sdg: Option<Vec<String>>,
    /// Raw activity slots and any other unrecognized fields
    #[serde(flatten)]
    pub slots: BTreeMap<String, Value>,
}
