mod data;

use std::collections::HashMap;

use once_cell::sync::Lazy;

static BUILTIN: Lazy<ReferenceCatalog> = Lazy::new(|| {
    ReferenceCatalog::from_entries(data::KEY_COMPETENCY_DESCRIPTORS, data::COMPETENCY_GROUPS)
});

/// Immutable reference tables for descriptor codes and competency groups
///
/// Loaded once and treated as read-only for the process lifetime. Both
/// lookups are pure and case-sensitive.
#[derive(Debug, Clone)]
pub struct ReferenceCatalog {
    /// Descriptor code to description
    descriptors: HashMap<String, String>,
    /// Code prefix to group label
    groups: HashMap<String, String>,
}

impl ReferenceCatalog {
    /// Build a catalog from explicit entry tables
    ///
    /// Used by the built-in catalog and by tests that need an alternate one.
    pub fn from_entries(descriptors: &[(&str, &str)], groups: &[(&str, &str)]) -> Self {
        Self {
            descriptors: descriptors
                .iter()
                .map(|(code, description)| (code.to_string(), description.to_string()))
                .collect(),
            groups: groups
                .iter()
                .map(|(prefix, label)| (prefix.to_string(), label.to_string()))
                .collect(),
        }
    }

    /// The built-in Spanish LOMLOE key-competency catalog, initialized once
    /// per process
    pub fn builtin() -> &'static ReferenceCatalog {
        &BUILTIN
    }

    /// Look up the description for a descriptor code, verbatim
    pub fn lookup_description(&self, code: &str) -> Option<&str> {
        self.descriptors.get(code).map(String::as_str)
    }

    /// Look up the group label for a code prefix
    pub fn lookup_group(&self, prefix: &str) -> Option<&str> {
        self.groups.get(prefix).map(String::as_str)
    }

    /// Number of descriptor codes in the catalog
    pub fn descriptor_count(&self) -> usize {
        self.descriptors.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_resolves_known_codes() {
        let catalog = ReferenceCatalog::builtin();
        assert!(catalog.lookup_description("CCL2").is_some());
        assert!(catalog.lookup_description("CPSAA5").is_some());
        assert_eq!(catalog.descriptor_count(), 32);
    }

    #[test]
    fn lookups_are_case_sensitive() {
        let catalog = ReferenceCatalog::builtin();
        assert!(catalog.lookup_description("ccl2").is_none());
        assert!(catalog.lookup_group("ccl").is_none());
        assert!(catalog.lookup_group("CCL").is_some());
    }

    #[test]
    fn catalog_from_entries_is_substitutable() {
        let catalog =
            ReferenceCatalog::from_entries(&[("X1", "test descriptor")], &[("X", "test group")]);
        assert_eq!(catalog.lookup_description("X1"), Some("test descriptor"));
        assert_eq!(catalog.lookup_group("X"), Some("test group"));
        assert!(catalog.lookup_description("CCL2").is_none());
    }
}
