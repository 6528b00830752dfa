//! Schema registry error types.

use thiserror::Error;

use crate::ValidationErrors;

/// Errors from the schema registry and validation layer.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Requested entity key was not found in the registry.
    #[error("Schema not found: {0}")]
    NotFound(String),

    /// A schema definition violates a registry invariant.
    #[error("Invalid schema '{entity}': {reason}")]
    Invalid {
        /// Entity key of the offending schema.
        entity: String,
        /// What is wrong with it.
        reason: String,
    },

    /// Input did not pass client-side validation.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// JSON Schema generation or compilation error.
    #[error("Schema generation error: {0}")]
    Generation(String),
}
