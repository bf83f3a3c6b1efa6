//! Entity command implementation - the tenant retrofit

use anyhow::{Context, Result};
use tn_patch::{retrofit, RetrofitOptions};

use crate::cli::{EntityArgs, GlobalArgs};
use crate::commands::common;

/// Execute the entity command
pub fn execute(args: &EntityArgs, global: &GlobalArgs) -> Result<()> {
    let mut project = common::load_project(global)?;

    let opts = RetrofitOptions {
        framework: args.framework.clone(),
        languages: args.languages.as_deref().map(parse_languages),
        regenerate: args.regenerate,
    };

    let outcome = retrofit(&mut project, &args.name, &opts)
        .with_context(|| format!("Failed to tenantise entity '{}'", args.name))?;

    for path in &outcome.files_patched {
        println!("  Patched {}", path.display());
    }
    if global.verbose {
        for path in &outcome.files_skipped {
            println!("  Skipped {} (not generated)", path.display());
        }
    }

    println!();
    println!(
        "Entity '{}' is now scoped to tenant '{}' ({} client, {} files patched, {} skipped)",
        outcome.entity,
        outcome.tenant,
        outcome.variant,
        outcome.files_patched.len(),
        outcome.files_skipped.len()
    );

    Ok(())
}

/// Split a comma-separated locale list, dropping empty segments.
fn parse_languages(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty())
        .collect()
}
