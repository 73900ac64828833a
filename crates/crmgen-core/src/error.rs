//! Error types for crmgen

use thiserror::Error;

/// Result type alias for generator operations
pub type CodegenResult<T> = Result<T, CodegenError>;

/// Error type for generator operations
#[derive(Error, Debug)]
pub enum CodegenError {
    /// Entity metadata violates a structural invariant
    #[error("invalid entity '{entity}': {reason}")]
    InvalidEntity { entity: String, reason: String },

    /// A selected entity is not present in the metadata document
    #[error("unknown entity: {0}")]
    UnknownEntity(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    ConfigError(String),

    /// Template resource is unusable
    #[error("template error: {0}")]
    TemplateError(String),

    /// Serialization/deserialization error
    #[error("serialization error: {0}")]
    SerializationError(String),

    /// An input file could not be read
    #[error("I/O error: {0}")]
    Io(String),
}

impl CodegenError {
    /// Returns a stable numeric code for the error kind
    pub fn error_code(&self) -> u32 {
        match self {
            CodegenError::InvalidEntity { .. } => 1,
            CodegenError::UnknownEntity(_) => 2,
            CodegenError::ConfigError(_) => 3,
            CodegenError::TemplateError(_) => 4,
            CodegenError::SerializationError(_) => 5,
            CodegenError::Io(_) => 6,
        }
    }

    pub(crate) fn invalid_entity(entity: &str, reason: impl Into<String>) -> Self {
        CodegenError::InvalidEntity {
            entity: entity.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for CodegenError {
    fn from(err: serde_json::Error) -> Self {
        CodegenError::SerializationError(err.to_string())
    }
}

impl From<toml::de::Error> for CodegenError {
    fn from(err: toml::de::Error) -> Self {
        CodegenError::ConfigError(err.to_string())
    }
}
