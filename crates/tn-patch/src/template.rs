//! Snippet templating for patch catalogs
//!
//! Catalog entries are minijinja source strings; paths, anchors, and
//! replacement snippets are all rendered against the same context so that a
//! later anchor can reference names synthesized for an earlier insertion.

use crate::error::PatchResult;
use minijinja::Environment;
use serde::Serialize;
use tn_core::NameVariants;
use tn_core::{CLIENT_MAIN_SRC_DIR, CLIENT_TEST_SRC_DIR};

/// Context available to every catalog template.
#[derive(Debug, Clone, Serialize)]
pub struct RenderContext {
    /// Root of the generated client sources
    pub webapp_dir: &'static str,

    /// Root of the generated client test sources
    pub client_test_dir: &'static str,

    /// Name variants of the tenant entity
    pub tenant: NameVariants,

    /// Name variants of the entity being retrofitted
    pub entity: NameVariants,

    /// Whether the project was generated with i18n support
    pub translation: bool,

    /// Active locale, bound only for translation-guarded entries
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl RenderContext {
    /// Build a context for one (tenant, entity) pair.
    pub fn new(tenant: NameVariants, entity: NameVariants, translation: bool) -> Self {
        Self {
            webapp_dir: CLIENT_MAIN_SRC_DIR,
            client_test_dir: CLIENT_TEST_SRC_DIR,
            tenant,
            entity,
            translation,
            language: None,
        }
    }

    /// Same context with a locale bound.
    pub fn with_language(&self, language: &str) -> Self {
        Self {
            language: Some(language.to_string()),
            ..self.clone()
        }
    }
}

/// Rendering environment for catalog snippets.
pub struct SnippetEnv {
    env: Environment<'static>,
}

impl SnippetEnv {
    /// Create the snippet environment.
    pub fn new() -> Self {
        let mut env = Environment::new();
        // Snippets are spliced verbatim; a template's trailing newline is
        // part of the injected bytes and must survive rendering.
        env.set_keep_trailing_newline(true);
        Self { env }
    }

    /// Render one template source against a context.
    pub fn render(&self, source: &str, ctx: &RenderContext) -> PatchResult<String> {
        Ok(self.env.render_str(source, ctx)?)
    }
}

impl Default for SnippetEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "template_test.rs"]
mod tests;
