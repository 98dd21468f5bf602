use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::study::{Attribute, StudyId};
use crate::enums::TrialState;

/// One evaluation of the objective within a study.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Trial {
    pub trial_id: u64,
    pub study_id: StudyId,
    pub number: u64,
    pub state: TrialState,
    #[serde(default)]
    pub values: Option<Vec<f64>>,
    #[serde(default)]
    pub intermediate_values: Vec<IntermediateValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datetime_start: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datetime_complete: Option<NaiveDateTime>,
    #[serde(default)]
    pub params: Vec<TrialParam>,
    #[serde(default)]
    pub user_attrs: Vec<Attribute>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IntermediateValue {
    pub step: u64,
    pub value: f64,
}

/// A sampled hyperparameter. `distribution` and the external value are
/// passed through untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrialParam {
    pub name: String,
    pub param_internal_value: f64,
    #[serde(default)]
    pub param_external_value: serde_json::Value,
    #[serde(default)]
    pub param_external_type: String,
    #[serde(default)]
    pub distribution: serde_json::Value,
}

/// Number of leading trials that can no longer change.
///
/// This is the index of the first `Running` or `Waiting` trial, or the whole
/// length when there is none.
#[must_use]
pub fn settled_prefix_len(trials: &[Trial]) -> usize {
    trials
        .iter()
        .position(|trial| trial.state.is_updatable())
        .unwrap_or(trials.len())
}
