use std::path::PathBuf;

use anyhow::{Context, Result};

use lesson_validator::{ReferenceCatalog, inspect_document};

fn main() -> Result<()> {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .context("usage: basic <lesson-plan.json>")?;

    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let inspection = inspect_document(&raw, ReferenceCatalog::builtin())?;

    println!("Lesson plan: {}", inspection.plan.title);
    if let Some(agelvl) = inspection.plan.agelvl {
        println!("Stage: {}", agelvl);
    }
    println!("Activities: {}", inspection.activities.len());

    if inspection.diagnostics.is_empty() {
        println!("No validation diagnostics.");
    } else {
        println!("Diagnostics:");
        for diagnostic in &inspection.diagnostics {
            println!("  - {}", diagnostic);
        }
    }

    println!("Key competency groups exercised:");
    for group in &inspection.exercised_groups {
        println!("  - {}", group);
    }

    Ok(())
}
