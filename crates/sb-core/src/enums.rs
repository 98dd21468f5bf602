//! Study directions and trial states.
//!
//! Wire names follow the backend: directions are lower-case
//! (`"minimize"`), trial states are capitalized (`"Running"`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// StudyDirection
// ---------------------------------------------------------------------------

/// Optimization direction of one study objective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StudyDirection {
    Minimize,
    Maximize,
    NotSet,
}

impl StudyDirection {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Minimize => "minimize",
            Self::Maximize => "maximize",
            Self::NotSet => "not_set",
        }
    }
}

impl fmt::Display for StudyDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StudyDirection {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "minimize" | "min" => Ok(Self::Minimize),
            "maximize" | "max" => Ok(Self::Maximize),
            "not_set" => Ok(Self::NotSet),
            _ => Err(CoreError::InvalidValue {
                field: "direction",
                value: raw.to_string(),
                expected: "minimize, maximize, not_set",
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// TrialState
// ---------------------------------------------------------------------------

/// Lifecycle state of a trial as reported by the backend.
///
/// ```text
/// Waiting → Running → Complete
///                   → Pruned
///                   → Fail
/// ```
///
/// States this client does not know are kept verbatim in [`TrialState::Other`]
/// and count as settled.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrialState {
    Running,
    Waiting,
    Complete,
    Pruned,
    Fail,
    #[serde(untagged)]
    Other(String),
}

impl TrialState {
    /// Whether the backend may still change this trial.
    ///
    /// Only `Running` and `Waiting` qualify; everything else, including
    /// unrecognized states, is treated as settled.
    #[must_use]
    pub const fn is_updatable(&self) -> bool {
        matches!(self, Self::Running | Self::Waiting)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Running => "Running",
            Self::Waiting => "Waiting",
            Self::Complete => "Complete",
            Self::Pruned => "Pruned",
            Self::Fail => "Fail",
            Self::Other(raw) => raw,
        }
    }
}

impl fmt::Display for TrialState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrialState {
    type Err = std::convert::Infallible;

    /// Case-insensitive for the known states; anything else becomes `Other`.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Ok(match raw.to_ascii_lowercase().as_str() {
            "running" => Self::Running,
            "waiting" => Self::Waiting,
            "complete" => Self::Complete,
            "pruned" => Self::Pruned,
            "fail" => Self::Fail,
            _ => Self::Other(raw.to_string()),
        })
    }
}
