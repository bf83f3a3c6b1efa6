//! Init command implementation - configures the tenant entity
//!
//! The base application generator owns project creation; this command only
//! stamps the tenant keys into an existing configuration store.

use anyhow::{Context, Result};
use std::path::Path;
use tn_core::{CoreError, Project};

use crate::cli::{GlobalArgs, InitArgs};

/// Aliases that collide with identifiers the generated application already
/// uses for authentication.
const RESERVED_ALIASES: &[&str] = &["account"];

/// What `apply` changed in the configuration store.
#[derive(Debug)]
pub(crate) struct InitReport {
    pub tenant: String,
    pub changelog_date: String,
    pub date_stamped: bool,
}

/// Execute the init command
pub fn execute(args: &InitArgs, global: &GlobalArgs) -> Result<()> {
    let report = apply(Path::new(&global.project_dir), &args.tenant_name)
        .with_context(|| format!("Failed to configure tenant '{}'", args.tenant_name))?;

    println!("Tenant entity set to '{}'", report.tenant);
    if report.date_stamped {
        println!("Stamped changelog date {}", report.changelog_date);
    } else {
        println!("Keeping existing changelog date {}", report.changelog_date);
    }
    println!();
    println!("Next steps:");
    println!("  tn entity <NAME>    # Make an entity tenant aware");
    println!("  tn ls               # List entities and their status");

    Ok(())
}

/// Stamp the tenant keys into the project configuration.
pub(crate) fn apply(project_dir: &Path, tenant_name: &str) -> Result<InitReport> {
    let normalized = tenant_name.to_lowercase();
    if RESERVED_ALIASES.contains(&normalized.as_str()) {
        return Err(CoreError::ReservedTenantName {
            name: tenant_name.to_string(),
        }
        .into());
    }

    let mut project = Project::load(project_dir)?;

    if let Some(existing) = &project.config.tenant_name {
        if existing != tenant_name {
            log::warn!("Replacing previously configured tenant '{existing}'");
        }
    }

    project.config.tenant_name = Some(tenant_name.to_string());
    let date_stamped = project.config.ensure_changelog_date();
    project.save_config()?;

    // Set by ensure_changelog_date when absent
    let changelog_date = project
        .config
        .tenant_changelog_date
        .clone()
        .unwrap_or_default();

    Ok(InitReport {
        tenant: tenant_name.to_string(),
        changelog_date,
        date_stamped,
    })
}

#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
