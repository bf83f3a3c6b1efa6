//! Error types for tn-patch

use thiserror::Error;
use tn_core::CoreError;

/// Patching and retrofit errors
#[derive(Error, Debug)]
pub enum PatchError {
    /// P001: Anchor string not present in the content being patched
    #[error("[P001] Anchor not found: {anchor:?}")]
    AnchorNotFound { anchor: String },

    /// P002: Anchor string not present in a target file
    ///
    /// The generated file's shape diverged from what the catalog expects;
    /// proceeding would silently produce malformed output.
    #[error("[P002] Anchor {anchor:?} not found in {path}. The generated file no longer matches the patch catalog")]
    AnchorNotFoundIn { path: String, anchor: String },

    /// P003: Snippet, anchor, or path template failed to render
    #[error("[P003] Template render error: {0}")]
    Template(String),

    /// P004: Failed to read or write a generated source file
    #[error("[P004] Failed to access '{path}': {source}")]
    IoWithPath {
        path: String,
        source: std::io::Error,
    },

    /// Error from the core layer (stores, registry, validation)
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Result type alias for PatchError
pub type PatchResult<T> = Result<T, PatchError>;

impl From<minijinja::Error> for PatchError {
    fn from(err: minijinja::Error) -> Self {
        PatchError::Template(err.to_string())
    }
}
