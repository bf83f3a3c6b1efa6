//! Error types for tn-core

use thiserror::Error;

/// Core error type for Tenantry
#[derive(Error, Debug)]
pub enum CoreError {
    /// E001: Project configuration store not found
    #[error("[E001] Project config not found: {path}. Generate the application first")]
    ConfigNotFound { path: String },

    /// E002: Failed to parse the project configuration store
    #[error("[E002] Failed to parse project config {path}: {message}")]
    ConfigParse { path: String, message: String },

    /// E003: No tenant has been configured for this project
    #[error("[E003] No tenant configured. Run `tn init --tenant-name <NAME>` first")]
    TenantNotConfigured,

    /// E004: The requested tenant alias is a reserved word
    #[error("[E004] '{name}' is a reserved word and cannot be used as the tenant alias")]
    ReservedTenantName { name: String },

    /// E005: The requested entity is the tenant entity itself
    #[error("[E005] '{name}' is the tenant entity and cannot be made tenant aware")]
    ReservedEntity { name: String },

    /// E006: The entity has already been made tenant aware
    #[error("[E006] Entity '{name}' has already been tenantised")]
    AlreadyProcessed { name: String },

    /// E007: No metadata record exists for the requested entity
    #[error("[E007] Entity '{name}' doesn't exist. Scaffold it with the entity generator first")]
    EntityNotFound { name: String },

    /// E008: IO error
    #[error("[E008] IO error: {0}")]
    Io(#[from] std::io::Error),

    /// E009: IO error with file path context
    #[error("[E009] Failed to write '{path}': {source}")]
    IoWithPath {
        path: String,
        source: std::io::Error,
    },

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
