//! Error taxonomy for parameter coercion and validation.
//!
//! Plugins fail with [`CoerceError`]; the validator wraps those together with
//! presence and lookup failures into [`ValidationError`] and tags each one
//! with the field it came from.

use std::fmt;
use thiserror::Error;

/// Stable error classification handed to the HTTP layer for status mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    RequiredFieldMissing,
    InvalidCid,
    InvalidPath,
    InvalidMultiaddr,
    InvalidDuration,
    InvalidBaseName,
    InvalidJson,
    InvalidString,
    InvalidNumber,
    InvalidBoolean,
    UnknownType,
}

impl ErrorKind {
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::RequiredFieldMissing => "ERR_REQUIRED_FIELD_MISSING",
            ErrorKind::InvalidCid => "ERR_INVALID_CID",
            ErrorKind::InvalidPath => "ERR_INVALID_PATH",
            ErrorKind::InvalidMultiaddr => "ERR_INVALID_MULTIADDR",
            ErrorKind::InvalidDuration => "ERR_INVALID_DURATION",
            ErrorKind::InvalidBaseName => "ERR_INVALID_BASE_NAME",
            ErrorKind::InvalidJson => "ERR_INVALID_JSON",
            ErrorKind::InvalidString => "ERR_INVALID_STRING",
            ErrorKind::InvalidNumber => "ERR_INVALID_NUMBER",
            ErrorKind::InvalidBoolean => "ERR_INVALID_BOOLEAN",
            ErrorKind::UnknownType => "ERR_UNKNOWN_TYPE",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Failure raised by a single type plugin while coercing a raw value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoerceError {
    #[error("invalid CID: {0}")]
    InvalidCid(String),

    #[error("invalid path: {0}")]
    InvalidPath(String),

    #[error("invalid multiaddr: {0}")]
    InvalidMultiaddr(String),

    #[error("invalid duration: {0}")]
    InvalidDuration(String),

    #[error("invalid base name: {0}")]
    InvalidBaseName(String),

    #[error("invalid JSON: {0}")]
    InvalidJson(String),

    #[error("invalid string: {0}")]
    InvalidString(String),

    #[error("invalid number: {0}")]
    InvalidNumber(String),

    #[error("invalid boolean: {0}")]
    InvalidBoolean(String),
}

impl CoerceError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CoerceError::InvalidCid(_) => ErrorKind::InvalidCid,
            CoerceError::InvalidPath(_) => ErrorKind::InvalidPath,
            CoerceError::InvalidMultiaddr(_) => ErrorKind::InvalidMultiaddr,
            CoerceError::InvalidDuration(_) => ErrorKind::InvalidDuration,
            CoerceError::InvalidBaseName(_) => ErrorKind::InvalidBaseName,
            CoerceError::InvalidJson(_) => ErrorKind::InvalidJson,
            CoerceError::InvalidString(_) => ErrorKind::InvalidString,
            CoerceError::InvalidNumber(_) => ErrorKind::InvalidNumber,
            CoerceError::InvalidBoolean(_) => ErrorKind::InvalidBoolean,
        }
    }
}

/// Failure recorded against one schema field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("required field is missing")]
    RequiredFieldMissing,

    #[error("unknown type: {0}")]
    UnknownType(String),

    #[error(transparent)]
    Coerce(#[from] CoerceError),
}

impl ValidationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ValidationError::RequiredFieldMissing => ErrorKind::RequiredFieldMissing,
            ValidationError::UnknownType(_) => ErrorKind::UnknownType,
            ValidationError::Coerce(e) => e.kind(),
        }
    }
}

/// A [`ValidationError`] bound to the field (and list element) it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    /// Element position for list-valued fields.
    pub index: Option<usize>,
    pub error: ValidationError,
}

impl FieldError {
    pub fn new(field: impl Into<String>, error: ValidationError) -> Self {
        Self {
            field: field.into(),
            index: None,
            error,
        }
    }

    pub fn at(field: impl Into<String>, index: usize, error: ValidationError) -> Self {
        Self {
            field: field.into(),
            index: Some(index),
            error,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.error.kind()
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.index {
            Some(index) => write!(f, "{}[{}]: {}", self.field, index, self.error),
            None => write!(f, "{}: {}", self.field, self.error),
        }
    }
}

impl std::error::Error for FieldError {}

/// Every field failure collected during one validation call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("validation failed for {} field(s): {}", .0.len(), join_errors(.0))]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// First error recorded for `field`, if any.
    pub fn for_field(&self, field: &str) -> Option<&FieldError> {
        self.0.iter().find(|e| e.field == field)
    }
}

fn join_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
