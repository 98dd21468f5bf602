use serde::{Deserialize, Serialize};

/// Freeform study note. The server bumps `version` on every accepted save
/// and rejects stale versions with a conflict.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Note {
    pub version: u64,
    pub body: String,
}

impl Note {
    /// Note carrying `body` as the successor of `self`.
    #[must_use]
    pub fn next(&self, body: impl Into<String>) -> Self {
        Self {
            version: self.version + 1,
            body: body.into(),
        }
    }
}
