//! Flattened row views used for table output.
//!
//! JSON and raw output print the entities themselves; tables need one
//! scalar per cell.

use chrono::NaiveDateTime;
use serde::Serialize;
use sb_core::{GraphVisibility, ParamImportance, StudyDetail, StudyDirection, StudySummary, Trial};

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Serialize)]
pub struct SummaryRow {
    pub id: u64,
    pub name: String,
    pub directions: String,
    pub best: Option<String>,
    pub started: Option<String>,
}

impl From<&StudySummary> for SummaryRow {
    fn from(summary: &StudySummary) -> Self {
        Self {
            id: summary.study_id,
            name: summary.study_name.clone(),
            directions: join_directions(&summary.directions),
            best: summary
                .best_trial
                .as_ref()
                .and_then(|trial| trial.values.as_deref())
                .map(join_values),
            started: summary.datetime_start.as_ref().map(format_time),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StudyOverview {
    pub id: u64,
    pub name: String,
    pub directions: String,
    pub trials: usize,
    pub states: String,
    pub best_trials: String,
    pub note_version: u64,
    pub started: Option<String>,
}

impl From<&StudyDetail> for StudyOverview {
    fn from(detail: &StudyDetail) -> Self {
        let states = detail
            .trial_counts()
            .into_iter()
            .map(|(state, count)| format!("{state}={count}"))
            .collect::<Vec<_>>()
            .join(" ");
        let best_trials = detail
            .best_trials
            .iter()
            .map(|trial| format!("#{}", trial.number))
            .collect::<Vec<_>>()
            .join(", ");
        Self {
            id: detail.id,
            name: detail.name.clone(),
            directions: join_directions(&detail.directions),
            trials: detail.trials.len(),
            states,
            best_trials,
            note_version: detail.note.version,
            started: detail.datetime_start.as_ref().map(format_time),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TrialRow {
    pub number: u64,
    pub state: String,
    pub values: Option<String>,
    pub params: String,
    pub started: Option<String>,
    pub completed: Option<String>,
}

impl From<&Trial> for TrialRow {
    fn from(trial: &Trial) -> Self {
        let params = trial
            .params
            .iter()
            .map(|param| {
                let value = match &param.param_external_value {
                    serde_json::Value::String(raw) => raw.clone(),
                    serde_json::Value::Null => param.param_internal_value.to_string(),
                    other => other.to_string(),
                };
                format!("{}={value}", param.name)
            })
            .collect::<Vec<_>>()
            .join(" ");
        Self {
            number: trial.number,
            state: trial.state.to_string(),
            values: trial.values.as_deref().map(join_values),
            params,
            started: trial.datetime_start.as_ref().map(format_time),
            completed: trial.datetime_complete.as_ref().map(format_time),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ImportanceRow {
    pub objective: usize,
    pub param: String,
    pub importance: String,
    pub distribution: String,
}

/// One row per parameter, objectives numbered from zero.
#[must_use]
pub fn importance_rows(per_objective: &[Vec<ParamImportance>]) -> Vec<ImportanceRow> {
    per_objective
        .iter()
        .enumerate()
        .flat_map(|(objective, importances)| {
            importances.iter().map(move |item| ImportanceRow {
                objective,
                param: item.name.clone(),
                importance: format!("{:.4}", item.importance),
                distribution: item.distribution.clone(),
            })
        })
        .collect()
}

#[derive(Debug, Serialize)]
pub struct GraphRow {
    pub graph: String,
    pub shown: bool,
}

#[must_use]
pub fn graph_rows(visibility: &GraphVisibility) -> Vec<GraphRow> {
    visibility
        .iter()
        .map(|(graph, shown)| GraphRow {
            graph: graph.to_string(),
            shown,
        })
        .collect()
}

fn join_directions(directions: &[StudyDirection]) -> String {
    directions
        .iter()
        .map(|direction| direction.as_str())
        .collect::<Vec<_>>()
        .join(",")
}

fn join_values(values: &[f64]) -> String {
    values
        .iter()
        .map(f64::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

fn format_time(time: &NaiveDateTime) -> String {
    time.format(TIME_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use sb_core::{Note, TrialState};

    use super::*;

    fn trial(number: u64, state: TrialState, values: Option<Vec<f64>>) -> Trial {
        serde_json::from_value(serde_json::json!({
            "trial_id": number + 100,
            "study_id": 1,
            "number": number,
            "state": state,
            "values": values,
            "params": [
                {"name": "x", "param_internal_value": 0.5, "param_external_value": 0.5},
                {"name": "opt", "param_internal_value": 1.0, "param_external_value": "adam"}
            ],
            "datetime_start": "2026-01-02T03:04:05"
        }))
        .unwrap()
    }

    #[test]
    fn trial_row_flattens_params_and_values() {
        let row = TrialRow::from(&trial(3, TrialState::Complete, Some(vec![0.25, 1.5])));

        assert_eq!(row.number, 3);
        assert_eq!(row.state, "Complete");
        assert_eq!(row.values.as_deref(), Some("0.25,1.5"));
        assert_eq!(row.params, "x=0.5 opt=adam");
        assert_eq!(row.started.as_deref(), Some("2026-01-02 03:04:05"));
        assert_eq!(row.completed, None);
    }

    #[test]
    fn overview_summarizes_trial_states() {
        let detail = StudyDetail {
            id: 4,
            name: "foo".into(),
            directions: vec![StudyDirection::Minimize],
            datetime_start: None,
            trials: vec![
                trial(0, TrialState::Complete, Some(vec![1.0])),
                trial(1, TrialState::Complete, Some(vec![0.5])),
                trial(2, TrialState::Running, None),
            ],
            best_trials: vec![trial(1, TrialState::Complete, Some(vec![0.5]))],
            intersection_search_space: Vec::new(),
            union_search_space: Vec::new(),
            union_user_attrs: Vec::new(),
            has_intermediate_values: false,
            note: Note {
                version: 2,
                body: "hi".into(),
            },
        };

        let overview = StudyOverview::from(&detail);
        assert_eq!(overview.trials, 3);
        assert_eq!(overview.states, "Complete=2 Running=1");
        assert_eq!(overview.best_trials, "#1");
        assert_eq!(overview.directions, "minimize");
        assert_eq!(overview.note_version, 2);
    }

    #[test]
    fn importance_rows_number_objectives() {
        let rows = importance_rows(&[
            vec![ParamImportance {
                name: "x".into(),
                importance: 0.75,
                distribution: "FloatDistribution".into(),
            }],
            vec![ParamImportance {
                name: "y".into(),
                importance: 0.125,
                distribution: "IntDistribution".into(),
            }],
        ]);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].objective, 1);
        assert_eq!(rows[1].param, "y");
        assert_eq!(rows[1].importance, "0.1250");
    }
}
