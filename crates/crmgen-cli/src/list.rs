//! List command implementation

use anyhow::{Context, Result};
use crmgen_core::{EntityDescriptor, MetadataDocument};
use std::path::Path;

/// Format one line of the entity listing
fn format_entry(entity: &EntityDescriptor) -> String {
    format!(
        "{:<32} {:<32} {:>4} attributes",
        entity.logical_name,
        entity.schema_name,
        entity.attributes.len()
    )
}

/// List command implementation
pub fn run(input: &Path) -> Result<()> {
    let doc = MetadataDocument::from_file(input)
        .with_context(|| format!("Failed to load metadata: {input:?}"))?;

    println!("{:<32} {:<32} {:>4}", "LOGICAL NAME", "SCHEMA NAME", "");
    for entity in doc.entities() {
        println!("{}", format_entry(entity));
    }
    println!("\n{} entities", doc.entities().len());

    Ok(())
}
