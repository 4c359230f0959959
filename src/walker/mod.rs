#[cfg(test)]
mod tests;

use log::warn;

use crate::types::{Activity, LessonPlan};

/// Common prefix of the named activity slots (`activity1`, `activity2`, ...)
pub const ACTIVITY_SLOT_PREFIX: &str = "activity";

/// Extract the ordered sequence of activities from a lesson plan
///
/// Walks every populated `activity<N>` slot in ascending numeric slot order,
/// skipping absent slots. Never fails: a document with no activity slots
/// yields an empty vector, and a slot whose value has an unexpected shape is
/// kept with empty fields so the validator can flag it.
pub fn extract_activities(plan: &LessonPlan) -> Vec<Activity> {
    let mut indexed: Vec<(u32, Activity)> = Vec::new();

    for (key, value) in &plan.slots {
        let Some(index) = slot_index(key) else {
            continue;
        };

        match serde_json::from_value::<Activity>(value.clone()) {
            Ok(activity) => indexed.push((index, activity)),
            Err(err) => {
                warn!(
                    "Activity slot '{}' has an unexpected shape, treating its fields as empty: {}",
                    key, err
                );
                indexed.push((index, Activity::default()));
            }
        }
    }

    indexed.sort_by_key(|(index, _)| *index);
    indexed.into_iter().map(|(_, activity)| activity).collect()
}

/// Parse the numeric suffix of an activity slot name
///
/// Returns `None` for keys that are not `activity` followed by digits.
fn slot_index(key: &str) -> Option<u32> {
    let suffix = key.strip_prefix(ACTIVITY_SLOT_PREFIX)?;
    if suffix.is_empty() || !suffix.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    suffix.parse().ok()
}
