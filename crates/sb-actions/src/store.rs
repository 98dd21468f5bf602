//! Observable client-side state.
//!
//! Each container lives in a `tokio::sync::watch` channel. Every mutation
//! replaces the value in place and wakes all subscribers, so views only need
//! to hold a receiver and re-render on `changed()`.

use std::collections::BTreeMap;

use sb_core::{
    GraphVisibility, Note, ParamImportance, StudyDetail, StudyId, StudySummary, Trial,
    settled_prefix_len,
};
use tokio::sync::watch;

pub type StudyDetails = BTreeMap<StudyId, StudyDetail>;

/// Per-objective importances keyed by study.
pub type ParamImportances = BTreeMap<StudyId, Vec<Vec<ParamImportance>>>;

/// Shared handle to the dashboard state. Pass it around as `Arc<Store>`.
#[derive(Debug)]
pub struct Store {
    study_summaries: watch::Sender<Vec<StudySummary>>,
    study_details: watch::Sender<StudyDetails>,
    graph_visibility: watch::Sender<GraphVisibility>,
    param_importances: watch::Sender<ParamImportances>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    /// Empty store with the default graph visibility.
    #[must_use]
    pub fn new() -> Self {
        Self::with_graph_visibility(GraphVisibility::defaults())
    }

    #[must_use]
    pub fn with_graph_visibility(graph_visibility: GraphVisibility) -> Self {
        Self {
            study_summaries: watch::channel(Vec::new()).0,
            study_details: watch::channel(StudyDetails::new()).0,
            graph_visibility: watch::channel(graph_visibility).0,
            param_importances: watch::channel(ParamImportances::new()).0,
        }
    }

    // ── Study summaries ────────────────────────────────────────────────

    #[must_use]
    pub fn study_summaries(&self) -> Vec<StudySummary> {
        self.study_summaries.borrow().clone()
    }

    #[must_use]
    pub fn subscribe_study_summaries(&self) -> watch::Receiver<Vec<StudySummary>> {
        self.study_summaries.subscribe()
    }

    pub fn replace_study_summaries(&self, summaries: Vec<StudySummary>) {
        self.study_summaries.send_replace(summaries);
    }

    pub fn push_study_summary(&self, summary: StudySummary) {
        self.study_summaries.send_modify(|summaries| summaries.push(summary));
    }

    /// Drop every summary with `study_id`. Returns how many were removed.
    pub fn remove_study_summary(&self, study_id: StudyId) -> usize {
        let mut removed = 0;
        self.study_summaries.send_modify(|summaries| {
            let before = summaries.len();
            summaries.retain(|s| s.study_id != study_id);
            removed = before - summaries.len();
        });
        removed
    }

    // ── Study details ──────────────────────────────────────────────────

    #[must_use]
    pub fn study_detail(&self, study_id: StudyId) -> Option<StudyDetail> {
        self.study_details.borrow().get(&study_id).cloned()
    }

    #[must_use]
    pub fn subscribe_study_details(&self) -> watch::Receiver<StudyDetails> {
        self.study_details.subscribe()
    }

    /// Copy of the locally known trials that can no longer change.
    ///
    /// Empty when the study has not been fetched yet.
    #[must_use]
    pub fn settled_trials(&self, study_id: StudyId) -> Vec<Trial> {
        self.study_details
            .borrow()
            .get(&study_id)
            .map(|detail| detail.trials[..settled_prefix_len(&detail.trials)].to_vec())
            .unwrap_or_default()
    }

    pub fn set_study_detail(&self, study_id: StudyId, detail: StudyDetail) {
        self.study_details.send_modify(|details| {
            details.insert(study_id, detail);
        });
    }

    /// Replace the note of a known study. Returns `false`, without waking
    /// subscribers, when the study is not in the store.
    pub fn set_note(&self, study_id: StudyId, note: Note) -> bool {
        self.study_details
            .send_if_modified(|details| match details.get_mut(&study_id) {
                Some(detail) => {
                    detail.note = note;
                    true
                }
                None => false,
            })
    }

    // ── Graph visibility ───────────────────────────────────────────────

    #[must_use]
    pub fn graph_visibility(&self) -> GraphVisibility {
        self.graph_visibility.borrow().clone()
    }

    #[must_use]
    pub fn subscribe_graph_visibility(&self) -> watch::Receiver<GraphVisibility> {
        self.graph_visibility.subscribe()
    }

    pub fn replace_graph_visibility(&self, graph_visibility: GraphVisibility) {
        self.graph_visibility.send_replace(graph_visibility);
    }

    /// Overlay `overrides` on the current visibility; overriding keys win.
    pub fn merge_graph_visibility(&self, overrides: &GraphVisibility) {
        self.graph_visibility
            .send_modify(|current| *current = current.merged_with(overrides));
    }

    // ── Parameter importances ──────────────────────────────────────────

    #[must_use]
    pub fn param_importances(&self, study_id: StudyId) -> Option<Vec<Vec<ParamImportance>>> {
        self.param_importances.borrow().get(&study_id).cloned()
    }

    #[must_use]
    pub fn subscribe_param_importances(&self) -> watch::Receiver<ParamImportances> {
        self.param_importances.subscribe()
    }

    pub fn set_param_importances(&self, study_id: StudyId, importances: Vec<Vec<ParamImportance>>) {
        self.param_importances.send_modify(|all| {
            all.insert(study_id, importances);
        });
    }
}
