use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::note::Note;
use super::trial::Trial;
use crate::enums::StudyDirection;

/// Backend-assigned study identifier.
pub type StudyId = u64;

/// Key/value attribute attached to a study or trial.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Attribute {
    pub key: String,
    pub value: String,
}

/// Lightweight study record shown in the study list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StudySummary {
    pub study_id: StudyId,
    pub study_name: String,
    pub directions: Vec<StudyDirection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_trial: Option<Trial>,
    #[serde(default)]
    pub user_attrs: Vec<Attribute>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datetime_start: Option<NaiveDateTime>,
}

/// Parameter present in a study's search space.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchSpaceItem {
    pub name: String,
    #[serde(default)]
    pub distribution: serde_json::Value,
}

/// Full study state: trials in `number` order plus the study note.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StudyDetail {
    pub id: StudyId,
    pub name: String,
    pub directions: Vec<StudyDirection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datetime_start: Option<NaiveDateTime>,
    #[serde(default)]
    pub trials: Vec<Trial>,
    #[serde(default)]
    pub best_trials: Vec<Trial>,
    #[serde(default)]
    pub intersection_search_space: Vec<SearchSpaceItem>,
    #[serde(default)]
    pub union_search_space: Vec<SearchSpaceItem>,
    #[serde(default)]
    pub union_user_attrs: Vec<String>,
    #[serde(default)]
    pub has_intermediate_values: bool,
    #[serde(default)]
    pub note: Note,
}

impl StudyDetail {
    /// Trial count per state name, e.g. `{"Complete": 12, "Running": 2}`.
    #[must_use]
    pub fn trial_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for trial in &self.trials {
            *counts.entry(trial.state.to_string()).or_insert(0) += 1;
        }
        counts
    }
}
