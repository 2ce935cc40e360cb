//! Error types for the stamp core.

use thiserror::Error;

/// Errors produced by geometry and sequence operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StampError {
    /// An operation needed at least one element but the collection was empty.
    #[error("empty collection: {0}")]
    EmptyCollection(String),

    /// A sequence was configured with something it cannot run, such as an
    /// unknown picker name.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A sequence statement could not be parsed.
    #[error("invalid statement: {0}")]
    InvalidStatement(String),

    /// A parameter existed but had the wrong JSON type.
    #[error("parameter type mismatch for '{name}': expected {expected}, got {got}")]
    ParamTypeMismatch {
        name: String,
        expected: String,
        got: String,
    },
}
