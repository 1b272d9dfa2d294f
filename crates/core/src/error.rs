//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// duplicate keys, unfulfillable orders). Infrastructure concerns belong
/// elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A request field was missing, empty, or of the wrong shape.
    #[error("validation failed: {0}")]
    Validation(String),

    /// An apparel record with the same `(code, size)` key already exists.
    #[error("apparel with code {code} and size {size} already exists")]
    DuplicateKey { code: String, size: String },

    /// An order line cannot be met from current stock.
    #[error("cannot fulfill item: {code}, size: {size}")]
    Unfulfillable { code: String, size: String },
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn duplicate_key(code: impl Into<String>, size: impl Into<String>) -> Self {
        Self::DuplicateKey {
            code: code.into(),
            size: size.into(),
        }
    }

    pub fn unfulfillable(code: impl Into<String>, size: impl Into<String>) -> Self {
        Self::Unfulfillable {
            code: code.into(),
            size: size.into(),
        }
    }
}
