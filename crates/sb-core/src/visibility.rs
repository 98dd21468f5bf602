//! Graph-panel visibility preferences.
//!
//! An open-ended map from graph key to a shown/hidden flag. Keys the client
//! does not know about are preserved so that preferences written by a newer
//! dashboard survive a round trip through an older one.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Graph keys shown by default on a fresh dashboard.
pub const DEFAULT_GRAPHS: &[(&str, bool)] = &[
    ("history", true),
    ("paracoords", true),
    ("contour", false),
    ("importances", true),
    ("slice", true),
    ("edf", true),
];

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct GraphVisibility(BTreeMap<String, bool>);

impl GraphVisibility {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The visibility a dashboard starts with before any preference is loaded.
    #[must_use]
    pub fn defaults() -> Self {
        DEFAULT_GRAPHS
            .iter()
            .map(|(key, shown)| ((*key).to_string(), *shown))
            .collect()
    }

    /// Parse a persisted JSON object of `key → bool`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Malformed`] if `raw` is not such an object.
    pub fn from_json(raw: &str) -> Result<Self, CoreError> {
        serde_json::from_str(raw).map_err(|source| CoreError::Malformed {
            what: "graph visibility",
            source,
        })
    }

    /// Serialize to the persisted JSON form.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Malformed`] if serialization fails.
    pub fn to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string(self).map_err(|source| CoreError::Malformed {
            what: "graph visibility",
            source,
        })
    }

    /// Shallow merge: every key in `overrides` wins, other keys are kept.
    #[must_use]
    pub fn merged_with(&self, overrides: &Self) -> Self {
        let mut merged = self.0.clone();
        merged.extend(overrides.0.iter().map(|(k, v)| (k.clone(), *v)));
        Self(merged)
    }

    #[must_use]
    pub fn is_shown(&self, key: &str) -> Option<bool> {
        self.0.get(key).copied()
    }

    pub fn set(&mut self, key: impl Into<String>, shown: bool) {
        self.0.insert(key.into(), shown);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, bool)> for GraphVisibility {
    fn from_iter<I: IntoIterator<Item = (String, bool)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// One `key=bool` assignment, as typed on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibilityAssignment {
    pub key: String,
    pub shown: bool,
}

impl FromStr for VisibilityAssignment {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let invalid = || CoreError::InvalidValue {
            field: "graph visibility",
            value: raw.to_string(),
            expected: "key=true, key=false, key=on, key=off",
        };
        let (key, value) = raw.split_once('=').ok_or_else(invalid)?;
        let key = key.trim();
        if key.is_empty() {
            return Err(invalid());
        }
        let shown = match value.trim().to_ascii_lowercase().as_str() {
            "true" | "on" | "1" | "yes" => true,
            "false" | "off" | "0" | "no" => false,
            _ => return Err(invalid()),
        };
        Ok(Self {
            key: key.to_string(),
            shown,
        })
    }
}
