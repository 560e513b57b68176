//! Schema error types
//!
//! Error codes:
//! - SCHEMA_MALFORMED: schema document could not be parsed
//! - SCHEMA_IO: schema or shape file could not be read
//! - SCHEMA_SHAPE_EXISTS: attempt to re-register a named shape

use thiserror::Error;

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Schema loading and registration errors
#[derive(Debug, Clone, Error)]
pub enum SchemaError {
    #[error("Malformed schema '{origin}': {reason}")]
    Malformed { origin: String, reason: String },

    #[error("Failed to read '{path}': {reason}")]
    Io { path: String, reason: String },

    #[error("Shape '{0}' is already registered and immutable")]
    ShapeAlreadyRegistered(String),
}

impl SchemaError {
    pub fn malformed(origin: impl Into<String>, reason: impl Into<String>) -> Self {
        SchemaError::Malformed {
            origin: origin.into(),
            reason: reason.into(),
        }
    }

    pub fn io(path: impl Into<String>, reason: impl Into<String>) -> Self {
        SchemaError::Io {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            SchemaError::Malformed { .. } => "SCHEMA_MALFORMED",
            SchemaError::Io { .. } => "SCHEMA_IO",
            SchemaError::ShapeAlreadyRegistered(_) => "SCHEMA_SHAPE_EXISTS",
        }
    }
}
