//! List command implementation

use anyhow::{Context, Result};
use tn_core::{Project, TenantRegistry};

use crate::cli::{GlobalArgs, LsArgs, LsOutput};
use crate::commands::common;

/// Execute the ls command
pub fn execute(args: &LsArgs, global: &GlobalArgs) -> Result<()> {
    let project = common::load_project(global)?;
    let entities = gather(&project)?;

    match args.output {
        LsOutput::Table => print_table(&entities, project.config.tenant_name.as_deref()),
        LsOutput::Json => print_json(&entities)?,
    }

    Ok(())
}

/// Entity information for display
#[derive(Debug, serde::Serialize)]
pub(crate) struct EntityInfo {
    pub name: String,
    pub tenantised: bool,
    pub fields: usize,
    pub relationships: usize,
}

/// Collect every entity in the metadata store with its tenantised status.
pub(crate) fn gather(project: &Project) -> Result<Vec<EntityInfo>> {
    let registry = TenantRegistry::from_project(project);

    let mut entities = Vec::new();
    for name in project.entity_names().context("Failed to scan entity store")? {
        let descriptor = project
            .load_entity(&name)
            .with_context(|| format!("Failed to load entity '{name}'"))?;
        entities.push(EntityInfo {
            tenantised: registry.is_processed(&name),
            fields: descriptor.fields.len(),
            relationships: descriptor.relationships.len(),
            name,
        });
    }
    Ok(entities)
}

/// Print entities in table format
fn print_table(entities: &[EntityInfo], tenant: Option<&str>) {
    let name_width = entities
        .iter()
        .map(|e| e.name.len())
        .max()
        .unwrap_or(4)
        .max(4);
    let status_width = 10;

    println!(
        "{:<name_width$}  {:<status_width$}  FIELDS  RELATIONSHIPS",
        "NAME",
        "TENANTISED",
        name_width = name_width,
        status_width = status_width
    );
    println!(
        "{:-<name_width$}  {:-<status_width$}  {}  {}",
        "",
        "",
        "-".repeat(6),
        "-".repeat(13),
        name_width = name_width,
        status_width = status_width
    );

    for entity in entities {
        println!(
            "{:<name_width$}  {:<status_width$}  {:<6}  {}",
            entity.name,
            if entity.tenantised { "yes" } else { "no" },
            entity.fields,
            entity.relationships,
            name_width = name_width,
            status_width = status_width
        );
    }

    let tenantised = entities.iter().filter(|e| e.tenantised).count();
    println!();
    match tenant {
        Some(tenant) => println!(
            "{} entities, {} tenantised (tenant: {})",
            entities.len(),
            tenantised,
            tenant
        ),
        None => println!(
            "{} entities, no tenant configured (run `tn init --tenant-name <NAME>`)",
            entities.len()
        ),
    }
}

/// Print entities in JSON format
fn print_json(entities: &[EntityInfo]) -> Result<()> {
    let json = serde_json::to_string_pretty(entities).context("Failed to serialize to JSON")?;
    println!("{}", json);
    Ok(())
}

#[cfg(test)]
#[path = "ls_test.rs"]
mod tests;
