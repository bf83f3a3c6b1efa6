//! tn-patch - Anchor-based source patching for Tenantry
//!
//! This crate provides the format-agnostic anchor patcher, the per-framework
//! patch catalogs, the snippet templating layer, and the retrofit
//! orchestrator that ties them to the tn-core stores.

pub mod catalog;
pub mod error;
pub mod patcher;
pub mod retrofit;
pub mod template;

pub use catalog::{CatalogVerb, FilePatch, FrameworkVariant, Guard, PatchOp};
pub use error::{PatchError, PatchResult};
pub use patcher::{apply, PatchVerb, ResolvedPatch};
pub use retrofit::{retrofit, RetrofitOptions, RetrofitOutcome};
pub use template::{RenderContext, SnippetEnv};
