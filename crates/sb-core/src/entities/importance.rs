use serde::{Deserialize, Serialize};

/// Importance of one hyperparameter for one objective.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParamImportance {
    pub name: String,
    pub importance: f64,
    /// Distribution kind, e.g. `FloatDistribution`.
    #[serde(default)]
    pub distribution: String,
}
