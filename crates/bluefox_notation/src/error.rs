//! Error types for value access.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//! Every error here is recoverable: accessors report them as values and never panic.

use std::fmt;

use thiserror::Error;

use crate::kind::Kind;

/// The main error type for notation value access.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a type mismatch error.
    #[must_use]
    pub fn type_mismatch(expected: Kind, actual: Kind) -> Self {
        Self::new(ErrorKind::TypeMismatch { expected, actual })
    }

    /// Creates an index out of bounds error.
    #[must_use]
    pub fn index_out_of_bounds(index: usize, length: usize) -> Self {
        Self::new(ErrorKind::IndexOutOfBounds { index, length })
    }

    /// Creates a key not found error.
    #[must_use]
    pub fn key_not_found(key: impl Into<String>) -> Self {
        Self::new(ErrorKind::KeyNotFound(key.into()))
    }

    /// Creates an invalid path error.
    #[must_use]
    pub fn invalid_path(path: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidPath(path.into()))
    }

    /// Creates a missing record field error.
    #[must_use]
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingField(field.into()))
    }

    /// Returns true if this is a type mismatch.
    #[must_use]
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self.kind, ErrorKind::TypeMismatch { .. })
    }

    /// Returns true if this is an absence (missing key, field, or index).
    #[must_use]
    pub fn is_absent(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::KeyNotFound(_) | ErrorKind::MissingField(_) | ErrorKind::IndexOutOfBounds { .. }
        )
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// Accessor invoked against a value of a different kind.
    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        /// The kind the accessor reads.
        expected: Kind,
        /// The kind actually stored.
        actual: Kind,
    },

    /// Array access at or beyond the current length.
    #[error("index out of bounds: {index} (length {length})")]
    IndexOutOfBounds {
        /// The index that was accessed.
        index: usize,
        /// The length of the array at the time of access.
        length: usize,
    },

    /// Data lookup for an absent key.
    #[error("key not found: {0:?}")]
    KeyNotFound(String),

    /// A path expression with no usable segments.
    #[error("invalid path: {0:?}")]
    InvalidPath(String),

    /// A record conversion needed a field that the data does not carry.
    #[error("missing field: {0}")]
    MissingField(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorContext {
    /// Path traversed before the failing step, rendered as `a.b[1]`.
    pub path: Option<String>,
    /// Name of the operation that failed.
    pub operation: Option<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the traversed path.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Sets the operation name.
    #[must_use]
    pub fn with_operation(mut self, operation: impl Into<String>) -> Self {
        self.operation = Some(operation.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.operation, &self.path) {
            (Some(op), Some(path)) => write!(f, "in {op} at {path}"),
            (Some(op), None) => write!(f, "in {op}"),
            (None, Some(path)) => write!(f, "at {path}"),
            (None, None) => Ok(()),
        }
    }
}

/// Result type for notation value access.
pub type Result<T> = std::result::Result<T, Error>;
