use serde::{Deserialize, Serialize};

/// Validation statistics for a single activity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityValidationSummary {
    /// 1-based position of the activity in document order
    pub index: usize,
    /// Title of the activity
    pub title: String,
    /// Number of descriptor-code occurrences referenced by the activity
    pub total_codes: usize,
    /// Number of those occurrences that failed catalog lookup
    pub unknown_codes: usize,
}

/// Validation outcome for a whole lesson plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Number of activities validated
    pub total_activities: usize,
    /// Descriptor-code occurrences across all activities
    pub total_codes: usize,
    /// Occurrences that failed catalog lookup
    pub unknown_codes: usize,
    /// Ordered, de-duplicated human-readable diagnostics
    pub diagnostics: Vec<String>,
    /// Per-activity statistics
    pub activity_summaries: Vec<ActivityValidationSummary>,
}
