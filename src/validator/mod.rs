pub mod types;
mod validator;

pub use types::*;
pub use validator::*;

use crate::catalog::ReferenceCatalog;
use crate::types::Activity;

/// Validator for the descriptor codes and knowledge items declared by
/// lesson-plan activities
pub struct CompetencyValidator<'a> {
    /// Reference catalog used for descriptor lookups
    catalog: &'a ReferenceCatalog,
}

impl<'a> CompetencyValidator<'a> {
    /// Create a validator backed by the given catalog
    pub fn new(catalog: &'a ReferenceCatalog) -> Self {
        Self { catalog }
    }

    /// Produce the ordered diagnostics a reviewer must see before trusting
    /// the document
    pub fn diagnostics(&self, activities: &[Activity]) -> Vec<String> {
        validator::validate_activities(self.catalog, activities).diagnostics
    }

    /// Produce the full validation report, including per-activity statistics
    pub fn validate(&self, activities: &[Activity]) -> types::ValidationReport {
        validator::validate_activities(self.catalog, activities)
    }
}
