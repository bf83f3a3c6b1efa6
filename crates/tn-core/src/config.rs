//! Project configuration store (.genrc.json)
//!
//! The configuration file is owned by the application generator that
//! produced the project. Tenantry reads the whole record, mutates only the
//! tenant-related keys, and writes it back with every unknown key preserved.

use crate::error::{CoreError, CoreResult};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File name of the project configuration store, relative to the project root.
pub const CONFIG_FILE: &str = ".genrc.json";

/// Format of the changelog date stamped when a tenant is first configured.
const CHANGELOG_DATE_FORMAT: &str = "%Y%m%d%H%M%S";

/// Project configuration record.
///
/// Only the fields this tool reads or mutates are typed; everything else the
/// generator stores in the file round-trips through `extra`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    /// Display name of the tenant entity, set by `tn init`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_name: Option<String>,

    /// Changelog timestamp stamped when the tenant was first configured
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_changelog_date: Option<String>,

    /// Lower-cased names of entities that have completed the tenant retrofit
    #[serde(default)]
    pub tenantised_entities: Vec<String>,

    /// Client rendering framework the project was generated with
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_framework: Option<String>,

    /// Whether the project was generated with i18n support
    #[serde(default)]
    pub enable_translation: bool,

    /// Active locales when translation is enabled
    #[serde(default)]
    pub languages: Vec<String>,

    /// Test frameworks the project was generated with (e.g. "protractor")
    #[serde(default)]
    pub test_frameworks: Vec<String>,

    /// Keys owned by the generator, preserved verbatim
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ProjectConfig {
    /// Load the configuration store from a file path.
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| CoreError::ConfigParse {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Save the configuration store atomically.
    ///
    /// Uses write-to-temp-then-rename to prevent corruption: the store also
    /// holds the tenantised-entity set, which must never be partially
    /// written.
    pub fn save(&self, path: &Path) -> CoreResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        let temp_path = path.with_extension("json.tmp");
        std::fs::write(&temp_path, json).map_err(|e| CoreError::IoWithPath {
            path: temp_path.display().to_string(),
            source: e,
        })?;
        std::fs::rename(&temp_path, path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        Ok(())
    }

    /// Return the configured tenant name, or fail if none is set.
    pub fn tenant_name(&self) -> CoreResult<&str> {
        self.tenant_name
            .as_deref()
            .ok_or(CoreError::TenantNotConfigured)
    }

    /// Stamp a changelog date if none exists yet.
    ///
    /// Returns `true` when a new date was stamped. The date is only ever
    /// written once; re-running `tn init` keeps the original.
    pub fn ensure_changelog_date(&mut self) -> bool {
        if self.tenant_changelog_date.is_some() {
            return false;
        }
        self.tenant_changelog_date = Some(Utc::now().format(CHANGELOG_DATE_FORMAT).to_string());
        true
    }

    /// Active locales for translation-guarded patches.
    ///
    /// Empty when the project was generated without i18n support.
    pub fn active_languages(&self) -> &[String] {
        if self.enable_translation {
            &self.languages
        } else {
            &[]
        }
    }

    /// Whether end-to-end test patches apply to this project.
    pub fn has_e2e_tests(&self) -> bool {
        self.test_frameworks.iter().any(|f| f == "protractor")
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
