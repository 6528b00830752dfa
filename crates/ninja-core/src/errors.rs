//! Cross-cutting error types for the CMS.
//!
//! Domain-specific errors (`ApiError`, `SchemaError`, `ConfigError`) live in
//! their respective crates. The binary converges everything into `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any CMS crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No entity schema is registered under this key.
    #[error("Unknown entity: {0}")]
    UnknownEntity(String),

    /// Data failed validation (schema, format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
