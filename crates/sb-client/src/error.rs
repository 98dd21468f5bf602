//! Client error types.

use sb_core::Note;
use serde::Deserialize;
use thiserror::Error;

/// HTTP status the backend uses for a stale note version.
pub const CONFLICT: u16 = 409;

/// Structured fields the backend may put in a failure response body.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    #[serde(default)]
    pub reason: Option<String>,
    /// Authoritative note, sent with a conflict on note save.
    #[serde(default)]
    pub note: Option<Note>,
}

/// Errors that can occur when talking to the backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure: connect, timeout, TLS, or body read.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend answered with a non-success status.
    #[error("API error ({status}): {message}")]
    Api {
        status: u16,
        /// `reason` from the body when present, otherwise the raw body.
        message: String,
        body: ErrorBody,
    },

    /// A success response could not be decoded.
    #[error("parse error: {0}")]
    Parse(String),
}

impl ApiError {
    /// Build an [`ApiError::Api`] from a status and the raw response body.
    ///
    /// Bodies that are not JSON, or JSON without the known fields, yield an
    /// empty [`ErrorBody`].
    #[must_use]
    pub fn from_status(status: u16, raw_body: &str) -> Self {
        let body: ErrorBody = serde_json::from_str(raw_body).unwrap_or_default();
        let message = body
            .reason
            .clone()
            .unwrap_or_else(|| raw_body.trim().to_string());
        Self::Api {
            status,
            message,
            body,
        }
    }

    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Http(_) | Self::Parse(_) => None,
        }
    }

    /// Human-readable failure reason supplied by the backend, if any.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Api { body, .. } => body.reason.as_deref(),
            Self::Http(_) | Self::Parse(_) => None,
        }
    }

    #[must_use]
    pub const fn is_conflict(&self) -> bool {
        matches!(self, Self::Api { status: CONFLICT, .. })
    }

    /// Server-side note carried by a conflict response.
    #[must_use]
    pub const fn conflict_note(&self) -> Option<&Note> {
        match self {
            Self::Api {
                status: CONFLICT,
                body,
                ..
            } => body.note.as_ref(),
            _ => None,
        }
    }
}
