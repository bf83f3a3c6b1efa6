//! Tenant registry — the persisted set of already-tenantised entities
//!
//! Anchor patches are single-shot: re-applying them to an already-patched
//! file inserts duplicate content or misses consumed anchors. Exactly-once
//! processing is therefore enforced here, at the entity grain, not inside
//! the patcher. Membership is checked before any mutation begins and a name
//! is committed only after every file patch for it has succeeded.

use crate::config::ProjectConfig;
use crate::error::{CoreError, CoreResult};
use crate::project::Project;
use std::path::PathBuf;

/// Snapshot of the tenantised-entity set with a handle to its store.
#[derive(Debug, Clone)]
pub struct TenantRegistry {
    config_path: PathBuf,
    entities: Vec<String>,
}

impl TenantRegistry {
    /// Snapshot the registry from a loaded project.
    pub fn from_project(project: &Project) -> Self {
        Self {
            config_path: project.config_path(),
            entities: project.config.tenantised_entities.clone(),
        }
    }

    /// Case-insensitive membership test.
    pub fn is_processed(&self, name: &str) -> bool {
        let normalized = name.to_lowercase();
        self.entities.iter().any(|e| e.to_lowercase() == normalized)
    }

    /// Record an entity as fully tenantised and persist the set.
    ///
    /// Re-reads the configuration store before writing so that keys owned by
    /// the generator are never clobbered, then saves atomically. Must only
    /// be called after every file patch for the entity has succeeded.
    pub fn commit(&mut self, name: &str) -> CoreResult<()> {
        let normalized = name.to_lowercase();
        if self.is_processed(&normalized) {
            return Err(CoreError::AlreadyProcessed {
                name: name.to_string(),
            });
        }

        let mut config = ProjectConfig::load(&self.config_path)?;
        config.tenantised_entities.push(normalized.clone());
        config.save(&self.config_path)?;

        self.entities.push(normalized);
        Ok(())
    }

    /// Names currently in the registry (normalized form).
    pub fn entities(&self) -> &[String] {
        &self.entities
    }
}

#[cfg(test)]
#[path = "registry_test.rs"]
mod tests;
