//! Check command implementation

use anyhow::{Context, Result};
use crmgen_cli::codegen::Template;
use crmgen_core::{GeneratorConfig, MetadataDocument};
use std::path::Path;

/// Collect one message per invalid entity
fn entity_problems(doc: &MetadataDocument) -> Vec<String> {
    doc.entities()
        .iter()
        .filter_map(|entity| entity.validate().err())
        .map(|e| e.to_string())
        .collect()
}

/// Check command implementation
pub fn check(input: &Path, config: &GeneratorConfig) -> Result<()> {
    config.validate()?;

    Template::from_config(config)?.validate()?;

    let doc = MetadataDocument::from_file(input)
        .with_context(|| format!("Failed to load metadata: {input:?}"))?;

    let problems = entity_problems(&doc);
    for problem in &problems {
        println!("✗ {problem}");
    }
    if !problems.is_empty() {
        anyhow::bail!(
            "{} of {} entities are invalid",
            problems.len(),
            doc.entities().len()
        );
    }

    Ok(())
}

/// Check command entry point
pub fn run(input: &Path, config: &GeneratorConfig) -> Result<()> {
    println!("Checking metadata: {}", input.display());

    check(input, config)?;

    println!("✓ Namespace: {}", config.namespace);
    println!("✓ Template placeholder: {}", config.placeholder);
    println!("\nMetadata is valid!");

    Ok(())
}
