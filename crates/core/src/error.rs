//! Domain error model.

use thiserror::Error;

/// Domain-level error.
///
/// Only deterministic failures live here. Storage and transport failures
/// have their own error types in the crates that own that IO.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A column name did not match the product schema.
    #[error("unknown column: {0}")]
    UnknownColumn(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn unknown_column(name: impl Into<String>) -> Self {
        Self::UnknownColumn(name.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}
