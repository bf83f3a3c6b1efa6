//! Tenant retrofit orchestrator
//!
//! Drives one entity retrofit to completion: validation gates, metadata
//! merge, catalog-driven file patching, and finally the registry commit.
//! The commit is strictly the last step so that an interrupted run never
//! records an entity it did not fully patch.

use crate::catalog::{self, CatalogVerb, FilePatch, FrameworkVariant, Guard};
use crate::error::{PatchError, PatchResult};
use crate::patcher::{self, PatchVerb, ResolvedPatch};
use crate::template::{RenderContext, SnippetEnv};
use std::path::PathBuf;
use tn_core::{merge, CoreError, NameVariants, Project, TenantRegistry};

/// Options for one retrofit run.
#[derive(Debug, Clone, Default)]
pub struct RetrofitOptions {
    /// Override the configured client framework
    pub framework: Option<String>,

    /// Override the active locales for translation patches
    pub languages: Option<Vec<String>>,

    /// Whether non-client layers should be regenerated afterwards
    /// (delegated to the application generator)
    pub regenerate: bool,
}

/// Result of a successful retrofit.
#[derive(Debug, Clone)]
pub struct RetrofitOutcome {
    /// The entity that was made tenant aware
    pub entity: String,

    /// The configured tenant name
    pub tenant: String,

    /// The framework variant whose catalog was applied
    pub variant: FrameworkVariant,

    /// Files rewritten, in catalog order
    pub files_patched: Vec<PathBuf>,

    /// Catalog targets skipped because the file does not exist
    pub files_skipped: Vec<PathBuf>,
}

/// Make one entity tenant aware.
///
/// Validation failures (`ReservedEntity`, `AlreadyProcessed`,
/// `EntityNotFound`) are detected before any mutation. A missing anchor
/// aborts the remaining catalog entries; files already rewritten for this
/// entity are left as-is and the registry is not committed.
pub fn retrofit(
    project: &mut Project,
    entity_name: &str,
    opts: &RetrofitOptions,
) -> PatchResult<RetrofitOutcome> {
    let tenant_raw = project.config.tenant_name()?.to_string();

    if entity_name.to_lowercase() == tenant_raw.to_lowercase() {
        return Err(CoreError::ReservedEntity {
            name: entity_name.to_string(),
        }
        .into());
    }

    let mut registry = TenantRegistry::from_project(project);
    if registry.is_processed(entity_name) {
        return Err(CoreError::AlreadyProcessed {
            name: entity_name.to_string(),
        }
        .into());
    }

    let mut entity = project.load_entity(entity_name)?;
    let tenant = NameVariants::derive(&tenant_raw);

    // Metadata first: the injected relationship must exist before any view
    // references it, and the merge is idempotent if patching later aborts.
    merge(&mut entity, &tenant);
    project.save_entity(&entity)?;

    let variant =
        FrameworkVariant::from_config(opts.framework.as_deref().or(project.config.client_framework.as_deref()));
    let catalog = catalog::for_variant(variant);

    let languages: Vec<String> = opts
        .languages
        .clone()
        .unwrap_or_else(|| project.config.active_languages().to_vec());
    let base_ctx = RenderContext::new(
        tenant,
        NameVariants::derive(&entity.name),
        !languages.is_empty(),
    );
    let e2e = project.config.has_e2e_tests();

    let env = SnippetEnv::new();
    let mut files_patched = Vec::new();
    let mut files_skipped = Vec::new();

    for file in catalog {
        for ctx in expand_guard(file, &base_ctx, e2e, &languages) {
            let rel_path = env.render(file.path, &ctx)?;
            let full_path = project.root.join(&rel_path);
            if !full_path.exists() {
                log::debug!("Skipping {rel_path}: file not generated for this project");
                files_skipped.push(full_path);
                continue;
            }

            let original =
                std::fs::read_to_string(&full_path).map_err(|e| PatchError::IoWithPath {
                    path: rel_path.clone(),
                    source: e,
                })?;

            let mut content = original;
            for op in file.ops {
                let resolved = resolve_op(&env, op, &ctx)?;
                content = patcher::apply(&content, &resolved).map_err(|e| match e {
                    PatchError::AnchorNotFound { anchor } => PatchError::AnchorNotFoundIn {
                        path: rel_path.clone(),
                        anchor,
                    },
                    other => other,
                })?;
            }

            // Written only after every operation for this file succeeded
            std::fs::write(&full_path, content).map_err(|e| PatchError::IoWithPath {
                path: rel_path.clone(),
                source: e,
            })?;
            files_patched.push(full_path);
        }
    }

    registry.commit(entity_name).map_err(|e| {
        log::error!(
            "Entity '{entity_name}' was patched but could not be recorded as tenantised; \
             revert the files or reconcile the registry by hand before re-running"
        );
        e
    })?;
    project.config.tenantised_entities = registry.entities().to_vec();

    if opts.regenerate {
        log::info!("Regeneration of non-client layers is delegated to the application generator");
    }

    Ok(RetrofitOutcome {
        entity: entity.name,
        tenant: tenant_raw,
        variant,
        files_patched,
        files_skipped,
    })
}

/// Expand one catalog entry into the contexts it applies under.
fn expand_guard(
    file: &FilePatch,
    base: &RenderContext,
    e2e: bool,
    languages: &[String],
) -> Vec<RenderContext> {
    match file.guard {
        Guard::Always => vec![base.clone()],
        Guard::E2e => {
            if e2e {
                vec![base.clone()]
            } else {
                Vec::new()
            }
        }
        Guard::Translation => languages.iter().map(|l| base.with_language(l)).collect(),
    }
}

/// Render one catalog operation into a literal patch.
fn resolve_op(
    env: &SnippetEnv,
    op: &catalog::PatchOp,
    ctx: &RenderContext,
) -> PatchResult<ResolvedPatch> {
    let verb = match op.verb {
        CatalogVerb::InsertBefore => PatchVerb::InsertBefore,
        CatalogVerb::InsertAfter => PatchVerb::InsertAfter,
        CatalogVerb::Replace => PatchVerb::ReplaceSegment { end: None },
        CatalogVerb::ReplaceThrough { end } => PatchVerb::ReplaceSegment {
            end: Some(env.render(end, ctx)?),
        },
        CatalogVerb::Append => PatchVerb::Append,
    };
    Ok(ResolvedPatch {
        anchor: env.render(op.anchor, ctx)?,
        verb,
        replacement: env.render(op.template, ctx)?,
    })
}

#[cfg(test)]
#[path = "retrofit_test.rs"]
mod tests;
