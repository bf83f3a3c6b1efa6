//! tn-core - Core library for Tenantry
//!
//! This crate provides the project and entity metadata stores, naming
//! variants, the tenant registry, and the metadata merger shared by all
//! Tenantry components.

pub mod config;
pub mod entity;
pub mod error;
pub mod merge;
pub mod naming;
pub mod project;
pub mod registry;

pub use config::{ProjectConfig, CONFIG_FILE};
pub use entity::{EntityDescriptor, FieldSpec, RelationshipSpec, RelationshipType};
pub use error::{CoreError, CoreResult};
pub use merge::merge;
pub use naming::NameVariants;
pub use project::{Project, CLIENT_MAIN_SRC_DIR, CLIENT_TEST_SRC_DIR, ENTITY_STORE_DIR};
pub use registry::TenantRegistry;
