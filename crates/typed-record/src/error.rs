//! Error types.
//!
//! Field types report validation failures as [`TypeError`] values; the
//! record host decides when to turn one into a [`RecordError`].

use thiserror::Error;

/// A failed field read. Returned, never raised, by [`Typed::read`].
///
/// [`Typed::read`]: crate::Typed::read
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct TypeError {
    message: String,
}

impl TypeError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// A type constructor was handed malformed arguments.
    #[error("{0}")]
    InvalidArgument(String),
    /// Mutation attempted on a record that is not a draft.
    #[error("{0}")]
    InvalidState(String),
    #[error("Invalid value for \"{key}\" field: {source}")]
    InvalidField {
        key: String,
        #[source]
        source: TypeError,
    },
    #[error("Cannot set unknown key \"{key}\" on {type_name}")]
    UnknownField { key: String, type_name: String },
    #[error("Cannot update within non-data-structure value in path [{path}]: {value}")]
    InvalidPath { path: String, value: String },
}

impl RecordError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub fn immutable() -> Self {
        Self::InvalidState(IMMUTABLE_SET.to_owned())
    }
}

/// Message carried by [`RecordError::InvalidState`] for writes outside draft mode.
pub const IMMUTABLE_SET: &str = "Cannot set on an immutable record.";
