pub mod aggregator;
pub mod catalog;
pub mod client;
pub mod inspect;
pub mod types;
pub mod validator;
pub mod walker;

pub use types::{
    Activity,
    AgeLevel,
    CompetencyItem,
    Criteria,
    LessonPlan,
};

pub use aggregator::exercised_groups;
pub use catalog::ReferenceCatalog;
pub use client::{GenerateRequest, GenerationClient};
pub use inspect::{DocumentInspection, inspect_document, inspect_plan, parse_document};
pub use validator::{CompetencyValidator, ValidationReport};
pub use walker::extract_activities;
