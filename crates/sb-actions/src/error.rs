//! Action layer error types.

use std::path::PathBuf;

use sb_client::ApiError;
use sb_core::CoreError;
use thiserror::Error;

/// Failures of the local preference store.
#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("failed to access preferences at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The preference file exists but is not a JSON object of strings.
    #[error("preferences at {path} are corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Failures returned by actions that propagate them.
#[derive(Debug, Error)]
pub enum ActionError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Preferences(#[from] PreferenceError),

    /// Persisted data did not decode.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl ActionError {
    /// The API failure behind this error, if it came from the backend.
    #[must_use]
    pub const fn as_api(&self) -> Option<&ApiError> {
        match self {
            Self::Api(error) => Some(error),
            Self::Preferences(_) | Self::Core(_) => None,
        }
    }
}
