//! Patch catalogs, one per supported client framework
//!
//! A catalog is static data: an ordered list of target files, each with an
//! ordered list of patch operations. Paths, anchors, segment end tokens, and
//! replacement snippets are minijinja sources rendered against a
//! [`RenderContext`](crate::template::RenderContext). All format-specific
//! knowledge lives here; the patcher stays format agnostic.

mod angular;
mod react;

/// Supported client rendering frameworks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrameworkVariant {
    /// Angular client (default)
    #[default]
    Angular,
    /// React client
    React,
}

impl FrameworkVariant {
    /// Resolve a variant from the configured framework string.
    ///
    /// Unknown values degrade to the default variant with a warning instead
    /// of blocking the run; a known-good rendering beats a hard failure.
    pub fn from_config(value: Option<&str>) -> Self {
        match value.map(|v| v.to_lowercase()).as_deref() {
            Some("react") => FrameworkVariant::React,
            Some("angular") | Some("angularx") | None => FrameworkVariant::Angular,
            Some(other) => {
                log::warn!("Unknown client framework '{other}', falling back to angular");
                FrameworkVariant::Angular
            }
        }
    }
}

impl std::fmt::Display for FrameworkVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FrameworkVariant::Angular => write!(f, "angular"),
            FrameworkVariant::React => write!(f, "react"),
        }
    }
}

/// Condition under which a catalog entry applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    /// Applies to every project
    Always,

    /// Applies only when the protractor test framework is configured
    E2e,

    /// Applies once per active locale, binding `language` in the context
    Translation,
}

/// How replacement text relates to the anchor, in catalog (template) form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogVerb {
    /// Splice before the anchor
    InsertBefore,

    /// Splice after the anchor
    InsertAfter,

    /// Replace the anchor itself
    Replace,

    /// Replace from the anchor through the end token (inclusive)
    ReplaceThrough { end: &'static str },

    /// Splice at end of file
    Append,
}

/// One patch operation against a target file.
#[derive(Debug, Clone, Copy)]
pub struct PatchOp {
    /// Splice verb
    pub verb: CatalogVerb,

    /// Anchor template
    pub anchor: &'static str,

    /// Replacement snippet template
    pub template: &'static str,
}

/// Ordered patch operations for one target file.
#[derive(Debug, Clone, Copy)]
pub struct FilePatch {
    /// Target path template, relative to the project root
    pub path: &'static str,

    /// Condition under which this entry applies
    pub guard: Guard,

    /// Operations, applied in order, each against the output of the previous
    pub ops: &'static [PatchOp],
}

/// The catalog for a framework variant.
pub fn for_variant(variant: FrameworkVariant) -> &'static [FilePatch] {
    match variant {
        FrameworkVariant::Angular => angular::CATALOG,
        FrameworkVariant::React => react::CATALOG,
    }
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
