use serde_json::json;

use super::*;
use crate::types::LessonPlan;

/// Helper to build a plan from a raw JSON value
fn plan_from_json(value: serde_json::Value) -> LessonPlan {
    serde_json::from_value(value).expect("test document should deserialize")
}

#[test]
fn extracts_slots_in_ascending_numeric_order() {
    let plan = plan_from_json(json!({
        "title": "ordering",
        "activity10": { "title": "tenth" },
        "activity2": { "title": "second" },
        "activity1": { "title": "first" }
    }));

    let activities = extract_activities(&plan);
    let titles: Vec<&str> = activities.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, vec!["first", "second", "tenth"]);
}

#[test]
fn sparse_slots_are_skipped_without_error() {
    let plan = plan_from_json(json!({
        "title": "sparse",
        "activity2": { "title": "only populated slot" }
    }));

    let activities = extract_activities(&plan);
    assert_eq!(activities.len(), 1);
    assert_eq!(activities[0].title, "only populated slot");
}

#[test]
fn document_without_activities_yields_empty_sequence() {
    let plan = plan_from_json(json!({ "title": "empty", "language": "es" }));
    assert!(extract_activities(&plan).is_empty());
}

#[test]
fn non_activity_keys_are_ignored() {
    let plan = plan_from_json(json!({
        "title": "noise",
        "activity1": { "title": "real" },
        "activitynotes": "not a slot",
        "activity": "no index",
        "activity1b": "trailing letter"
    }));

    let activities = extract_activities(&plan);
    assert_eq!(activities.len(), 1);
    assert_eq!(activities[0].title, "real");
}

#[test]
fn malformed_slot_degrades_to_empty_activity() {
    let plan = plan_from_json(json!({
        "title": "malformed",
        "activity1": "this is not an object"
    }));

    let activities = extract_activities(&plan);
    assert_eq!(activities.len(), 1);
    assert!(activities[0].title.is_empty());
    assert!(activities[0].competencies.is_empty());
}
