use super::{ConfigError, SchemaError, StorageError};

/// Top-level error type for the Nexus engine.
#[derive(Debug, thiserror::Error)]
pub enum NexusError {
    #[error("schema error: {0}")]
    SchemaError(#[from] SchemaError),

    #[error("storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("not found: {what}")]
    NotFound { what: String },

    #[error("invalid request: {field}: {reason}")]
    InvalidRequest { field: String, reason: String },

    #[error("draft source failed: {reason}")]
    DraftSourceFailed { reason: String },

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl NexusError {
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    pub fn invalid_request(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidRequest {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Whether the error is a missing-entity condition rather than a failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

pub type NexusResult<T> = Result<T, NexusError>;
