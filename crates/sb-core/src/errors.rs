//! Cross-cutting error types for Studyboard.
//!
//! Crate-specific errors (`ApiError`, `ConfigError`, `ActionError`) live in
//! their own crates. The CLI converges everything into `anyhow`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// A value could not be parsed into a domain type.
    #[error("invalid {field} '{value}': expected one of {expected}")]
    InvalidValue {
        field: &'static str,
        value: String,
        expected: &'static str,
    },

    /// Persisted or wire data did not match the expected shape.
    #[error("malformed {what}: {source}")]
    Malformed {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },
}
