use anyhow::{Result, anyhow};
use log::{info, warn};

use crate::aggregator;
use crate::catalog::ReferenceCatalog;
use crate::types::{Activity, LessonPlan};
use crate::validator::CompetencyValidator;
use crate::walker;

/// Pure outputs of one validation/aggregation pass, handed to the
/// presentation layer to render verbatim
#[derive(Debug, Clone)]
pub struct DocumentInspection {
    /// The parsed document
    pub plan: LessonPlan,
    /// Activities in ascending slot order
    pub activities: Vec<Activity>,
    /// Ordered, de-duplicated validation diagnostics
    pub diagnostics: Vec<String>,
    /// Distinct competency group labels, sorted ascending
    pub exercised_groups: Vec<String>,
}

/// Parse a raw lesson-plan document
///
/// Boundary errors only: empty input and malformed JSON are reported here,
/// before the core ever runs.
pub fn parse_document(raw: &str) -> Result<LessonPlan> {
    if raw.trim().is_empty() {
        return Err(anyhow!("input must not be empty"));
    }
    serde_json::from_str(raw).map_err(|err| anyhow!("invalid JSON format: {}", err))
}

/// Parse a raw document and run the full inspection pass
pub fn inspect_document(raw: &str, catalog: &ReferenceCatalog) -> Result<DocumentInspection> {
    let plan = parse_document(raw)?;
    Ok(inspect_plan(plan, catalog))
}

/// Walk, validate, and aggregate an already-parsed lesson plan
///
/// Never fails: a document with zero populated activity slots produces empty
/// diagnostics and an empty group list. The source document is not mutated;
/// all outputs are recomputed values.
pub fn inspect_plan(plan: LessonPlan, catalog: &ReferenceCatalog) -> DocumentInspection {
    info!("Inspecting lesson plan '{}'", plan.title);

    let activities = walker::extract_activities(&plan);
    if activities.is_empty() {
        warn!("Lesson plan has no populated activity slots");
    }

    let validator = CompetencyValidator::new(catalog);
    let diagnostics = validator.diagnostics(&activities);
    let exercised_groups = aggregator::exercised_groups(catalog, &activities);

    info!(
        "Inspection complete: {} activities, {} diagnostics, {} competency groups",
        activities.len(),
        diagnostics.len(),
        exercised_groups.len()
    );

    DocumentInspection {
        plan,
        activities,
        diagnostics,
        exercised_groups,
    }
}
