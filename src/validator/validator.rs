use std::collections::HashSet;

use log::{debug, info};

use super::types::{ActivityValidationSummary, ValidationReport};
use crate::catalog::ReferenceCatalog;
use crate::types::Activity;

/// Validate activities against the catalog and build the full report
///
/// Diagnostics accumulate into an order-preserving set keyed by message text:
/// insertion order of first occurrence, repeats collapsed. The same unknown
/// code referenced twice in one activity yields one visible line; distinct
/// activities stay distinct because the message embeds the activity index.
pub fn validate_activities(
    catalog: &ReferenceCatalog,
    activities: &[Activity],
) -> ValidationReport {
    info!("Validating {} activities", activities.len());

    let mut seen: HashSet<String> = HashSet::new();
    let mut diagnostics: Vec<String> = Vec::new();
    let mut emit = |message: String| {
        if seen.insert(message.clone()) {
            diagnostics.push(message);
        }
    };

    let mut total_codes = 0;
    let mut unknown_codes = 0;
    let mut activity_summaries = Vec::with_capacity(activities.len());

    for (position, activity) in activities.iter().enumerate() {
        let index = position + 1;
        let mut activity_codes = 0;
        let mut activity_unknown = 0;

        if activity.competencies.is_empty() {
            emit(format!("Activity {} has no competencies assigned.", index));
        } else {
            for item in &activity.competencies {
                for code in &item.related_descriptor_codes {
                    activity_codes += 1;
                    if catalog.lookup_description(code).is_none() {
                        activity_unknown += 1;
                        emit(format!(
                            "Unknown key-competency code in Activity {}: '{}'.",
                            index, code
                        ));
                    }
                }
            }
        }

        if activity.knowledge.is_empty() {
            emit(format!(
                "Activity {} has no Knowledge/Basic-Skills items assigned.",
                index
            ));
        }

        debug!(
            "Activity {}: {} code occurrences, {} unknown",
            index, activity_codes, activity_unknown
        );

        total_codes += activity_codes;
        unknown_codes += activity_unknown;
        activity_summaries.push(ActivityValidationSummary {
            index,
            title: activity.title.clone(),
            total_codes: activity_codes,
            unknown_codes: activity_unknown,
        });
    }

    info!(
        "Validation complete: {} diagnostics across {} activities",
        diagnostics.len(),
        activities.len()
    );

    ValidationReport {
        total_activities: activities.len(),
        total_codes,
        unknown_codes,
        diagnostics,
        activity_summaries,
    }
}
