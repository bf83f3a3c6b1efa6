//! Helpers shared across commands

use anyhow::{Context, Result};
use std::path::Path;
use tn_core::Project;

use crate::cli::GlobalArgs;

/// Load the project from the global `--project-dir`.
pub(crate) fn load_project(global: &GlobalArgs) -> Result<Project> {
    Project::load(Path::new(&global.project_dir)).context("Failed to load project")
}
