use std::collections::BTreeSet;

use log::debug;

use crate::catalog::ReferenceCatalog;
use crate::types::Activity;

/// Compute the distinct competency group labels exercised across all
/// activities, sorted lexicographically ascending
///
/// Codes whose prefix resolves to no group are silently ignored: group
/// membership is advisory, descriptor-code validity is the validator's
/// concern.
pub fn exercised_groups(catalog: &ReferenceCatalog, activities: &[Activity]) -> Vec<String> {
    let mut groups: BTreeSet<String> = BTreeSet::new();

    for activity in activities {
        for item in &activity.competencies {
            for code in &item.related_descriptor_codes {
                let prefix = descriptor_prefix(code);
                if prefix.is_empty() {
                    continue;
                }
                if let Some(label) = catalog.lookup_group(prefix) {
                    groups.insert(label.to_string());
                }
            }
        }
    }

    debug!("Resolved {} competency groups", groups.len());
    groups.into_iter().collect()
}

/// Leading run of ASCII uppercase letters at the start of a descriptor code
///
/// `CPSAA4` yields `CPSAA`, `ZZ9` yields `ZZ`, `9X` yields the empty string.
pub fn descriptor_prefix(code: &str) -> &str {
    let end = code
        .bytes()
        .position(|b| !b.is_ascii_uppercase())
        .unwrap_or(code.len());
    &code[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_is_the_leading_uppercase_run() {
        assert_eq!(descriptor_prefix("CCL2"), "CCL");
        assert_eq!(descriptor_prefix("CPSAA4"), "CPSAA");
        assert_eq!(descriptor_prefix("STEM5"), "STEM");
        assert_eq!(descriptor_prefix("ZZ9"), "ZZ");
    }

    #[test]
    fn prefix_of_non_uppercase_start_is_empty() {
        assert_eq!(descriptor_prefix("9X"), "");
        assert_eq!(descriptor_prefix("ccl2"), "");
        assert_eq!(descriptor_prefix(""), "");
    }

    #[test]
    fn prefix_stops_at_first_non_uppercase_byte() {
        assert_eq!(descriptor_prefix("CCl2"), "CC");
        assert_eq!(descriptor_prefix("CD-1"), "CD");
    }
}
