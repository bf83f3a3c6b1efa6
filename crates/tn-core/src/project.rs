//! Project discovery and the entity metadata store

use crate::config::{ProjectConfig, CONFIG_FILE};
use crate::entity::EntityDescriptor;
use crate::error::{CoreError, CoreResult};
use crate::naming::upper_first;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Root of the generated client sources, relative to the project root.
pub const CLIENT_MAIN_SRC_DIR: &str = "src/main/webapp/";

/// Root of the generated client test sources, relative to the project root.
pub const CLIENT_TEST_SRC_DIR: &str = "src/test/javascript/";

/// Directory holding one metadata record per entity.
pub const ENTITY_STORE_DIR: &str = ".entities";

/// A generated application project on disk.
#[derive(Debug, Clone)]
pub struct Project {
    /// Absolute or caller-relative project root
    pub root: PathBuf,

    /// The loaded configuration store
    pub config: ProjectConfig,
}

impl Project {
    /// Load a project from a directory.
    pub fn load(dir: impl AsRef<Path>) -> CoreResult<Self> {
        let root = dir.as_ref().to_path_buf();
        let config = ProjectConfig::load(&root.join(CONFIG_FILE))?;
        Ok(Self { root, config })
    }

    /// Path of the configuration store.
    pub fn config_path(&self) -> PathBuf {
        self.root.join(CONFIG_FILE)
    }

    /// Persist the in-memory configuration back to the store.
    pub fn save_config(&self) -> CoreResult<()> {
        self.config.save(&self.config_path())
    }

    /// Path of the metadata record for an entity name.
    pub fn entity_path(&self, name: &str) -> PathBuf {
        self.root
            .join(ENTITY_STORE_DIR)
            .join(format!("{}.json", upper_first(name)))
    }

    /// Load an entity's metadata record.
    ///
    /// Fails with `EntityNotFound` when no record exists; the entity must be
    /// scaffolded by the base generator before it can be made tenant aware.
    pub fn load_entity(&self, name: &str) -> CoreResult<EntityDescriptor> {
        let path = self.entity_path(name);
        if !path.exists() {
            return Err(CoreError::EntityNotFound {
                name: name.to_string(),
            });
        }
        let content = std::fs::read_to_string(&path)?;
        let mut entity: EntityDescriptor = serde_json::from_str(&content)?;
        if entity.name.is_empty() {
            entity.name = upper_first(name);
        }
        Ok(entity)
    }

    /// Write an entity's metadata record back, overwriting the whole file.
    ///
    /// Records are written with 4-space indentation to match the entity
    /// generator's own output, via write-temp-then-rename.
    pub fn save_entity(&self, entity: &EntityDescriptor) -> CoreResult<()> {
        let path = self.entity_path(&entity.name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        entity.serialize(&mut ser)?;

        let temp_path = path.with_extension("json.tmp");
        std::fs::write(&temp_path, &buf).map_err(|e| CoreError::IoWithPath {
            path: temp_path.display().to_string(),
            source: e,
        })?;
        std::fs::rename(&temp_path, &path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        Ok(())
    }

    /// Names of all entities with a metadata record, sorted.
    pub fn entity_names(&self) -> CoreResult<Vec<String>> {
        let store = self.root.join(ENTITY_STORE_DIR);
        if !store.exists() {
            return Ok(Vec::new());
        }
        let mut names = Vec::new();
        for dent in std::fs::read_dir(&store)? {
            let path = dent?.path();
            if path.extension().is_some_and(|e| e == "json") {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    names.push(stem.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }
}

#[cfg(test)]
#[path = "project_test.rs"]
mod tests;
