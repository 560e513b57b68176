//! Cast error types
//!
//! Error codes:
//! - CAST_KEY_NOT_FOUND: key or path not present in the input
//! - CAST_UNKNOWN_TYPE: type tag not recognized
//! - CAST_REQUIRED_FIELD_MISSING: no value, override or default for a mandatory field
//! - CAST_NESTED_FAILURE: nested schema cast failed
//! - CAST_ARRAY_ELEMENT_FAILURE: an array element failed to cast
//! - CAST_SHAPE_FAILURE: named shape cast failed
//! - CAST_INVALID_VALUE: a leaf converter rejected the raw value
//! - CAST_DUMP_FAILURE: a value could not be rendered back
//!
//! Every wrapper carries exactly one cause and adds the field name.

use thiserror::Error;

/// Result type for cast, update and dump operations
pub type CastResult<T> = Result<T, CastError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CastError {
    #[error("key `{0}` not found")]
    KeyNotFound(String),

    #[error("unknown cast type `{0}`")]
    UnknownCastType(String),

    #[error("failed to cast key `{field}` (`{source}`) and no default value provided.")]
    RequiredFieldMissing {
        field: String,
        source: Box<CastError>,
    },

    #[error("nested cast of `{field}` failed: {source}")]
    NestedCastFailure {
        field: String,
        source: Box<CastError>,
    },

    #[error("array element failed to cast: {0}")]
    ArrayElementCastFailure(#[source] Box<CastError>),

    #[error("shape `{shape}` failed to cast: {source}")]
    ShapeCastFailure {
        shape: String,
        source: Box<CastError>,
    },

    #[error("expected {expected}, got {found}")]
    InvalidValue { expected: String, found: String },

    #[error("failed to dump key `{key}` ({source})")]
    DumpFailure {
        key: String,
        source: Box<CastError>,
    },
}

impl CastError {
    pub fn key_not_found(key: impl ToString) -> Self {
        CastError::KeyNotFound(key.to_string())
    }

    pub fn required(field: impl Into<String>, source: CastError) -> Self {
        CastError::RequiredFieldMissing {
            field: field.into(),
            source: Box::new(source),
        }
    }

    pub fn nested(field: impl Into<String>, source: CastError) -> Self {
        CastError::NestedCastFailure {
            field: field.into(),
            source: Box::new(source),
        }
    }

    pub fn array_element(source: CastError) -> Self {
        CastError::ArrayElementCastFailure(Box::new(source))
    }

    pub fn shape(shape: impl Into<String>, source: CastError) -> Self {
        CastError::ShapeCastFailure {
            shape: shape.into(),
            source: Box::new(source),
        }
    }

    pub fn invalid(expected: impl Into<String>, found: impl Into<String>) -> Self {
        CastError::InvalidValue {
            expected: expected.into(),
            found: found.into(),
        }
    }

    pub fn dump(key: impl Into<String>, source: CastError) -> Self {
        CastError::DumpFailure {
            key: key.into(),
            source: Box::new(source),
        }
    }

    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            CastError::KeyNotFound(_) => "CAST_KEY_NOT_FOUND",
            CastError::UnknownCastType(_) => "CAST_UNKNOWN_TYPE",
            CastError::RequiredFieldMissing { .. } => "CAST_REQUIRED_FIELD_MISSING",
            CastError::NestedCastFailure { .. } => "CAST_NESTED_FAILURE",
            CastError::ArrayElementCastFailure(_) => "CAST_ARRAY_ELEMENT_FAILURE",
            CastError::ShapeCastFailure { .. } => "CAST_SHAPE_FAILURE",
            CastError::InvalidValue { .. } => "CAST_INVALID_VALUE",
            CastError::DumpFailure { .. } => "CAST_DUMP_FAILURE",
        }
    }

    /// Field or key this error is attributed to, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            CastError::RequiredFieldMissing { field, .. }
            | CastError::NestedCastFailure { field, .. } => Some(field),
            CastError::DumpFailure { key, .. } => Some(key),
            _ => None,
        }
    }

    /// The wrapped cause, if this is a wrapper.
    pub fn cause(&self) -> Option<&CastError> {
        match self {
            CastError::RequiredFieldMissing { source, .. }
            | CastError::NestedCastFailure { source, .. }
            | CastError::ShapeCastFailure { source, .. }
            | CastError::DumpFailure { source, .. }
            | CastError::ArrayElementCastFailure(source) => Some(source),
            _ => None,
        }
    }

    /// Innermost error of the wrapper chain.
    pub fn root_cause(&self) -> &CastError {
        let mut current = self;
        while let Some(inner) = current.cause() {
            current = inner;
        }
        current
    }
}
