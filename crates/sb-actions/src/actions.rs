//! Dashboard actions: one backend call, one store update, one notification.

use std::sync::Arc;

use sb_client::StudyApi;
use sb_core::{GraphVisibility, Note, StudyDirection, StudyId};

use crate::error::ActionError;
use crate::notify::Notifier;
use crate::preferences::PreferenceStorage;
use crate::store::Store;

/// Preference key holding the JSON-serialized graph visibility map.
pub const GRAPH_VISIBILITY_KEY: &str = "graphVisibility";

/// Action layer bound to one store, backend, notifier, and preference store.
///
/// Actions never cancel or de-duplicate each other. Two in-flight actions
/// for the same key race and the last one to complete wins.
pub struct Actions<A> {
    api: A,
    store: Arc<Store>,
    notifier: Arc<dyn Notifier>,
    preferences: Arc<dyn PreferenceStorage>,
}

impl<A: StudyApi> Actions<A> {
    pub fn new(
        api: A,
        store: Arc<Store>,
        notifier: Arc<dyn Notifier>,
        preferences: Arc<dyn PreferenceStorage>,
    ) -> Self {
        Self {
            api,
            store,
            notifier,
            preferences,
        }
    }

    #[must_use]
    pub const fn api(&self) -> &A {
        &self.api
    }

    #[must_use]
    pub const fn store(&self) -> &Arc<Store> {
        &self.store
    }

    /// Refetch the study list and replace it wholesale.
    ///
    /// `success_msg`, when given, is shown after a successful refresh.
    pub async fn update_study_summaries(&self, success_msg: Option<&str>) {
        match self.api.get_study_summaries().await {
            Ok(summaries) => {
                tracing::debug!(count = summaries.len(), "study summaries updated");
                self.store.replace_study_summaries(summaries);
                if let Some(message) = success_msg {
                    self.notifier.success(message.to_string());
                }
            }
            Err(error) => {
                self.notifier.error("Failed to fetch study list.".to_string());
                tracing::warn!(%error, "failed to fetch study summaries");
            }
        }
    }

    /// Refresh one study, fetching only trials that may have changed.
    ///
    /// Locally known trials before the first `Running`/`Waiting` one are
    /// kept as they are; the backend is asked for everything after them.
    pub async fn update_study_detail(&self, study_id: StudyId) {
        let settled = self.store.settled_trials(study_id);
        let after = settled.len();

        match self.api.get_study_detail(study_id, after).await {
            Ok(mut detail) => {
                let fetched = std::mem::take(&mut detail.trials);
                tracing::debug!(
                    study_id,
                    kept = after,
                    fetched = fetched.len(),
                    "study detail updated"
                );
                detail.trials = settled;
                detail.trials.extend(fetched);
                self.store.set_study_detail(study_id, detail);
            }
            Err(error) => {
                if let Some(reason) = error.reason() {
                    self.notifier
                        .error(format!("Failed to fetch study (reason={reason})"));
                }
                tracing::warn!(study_id, %error, "failed to fetch study detail");
            }
        }
    }

    /// Create a study and append its summary to the list.
    pub async fn create_new_study(&self, study_name: &str, directions: &[StudyDirection]) {
        match self.api.create_study(study_name, directions).await {
            Ok(summary) => {
                self.store.push_study_summary(summary);
                self.notifier.success(format!(
                    "Success to create a study (study_name={study_name})"
                ));
            }
            Err(error) => {
                self.notifier.error(format!(
                    "Failed to create a study (study_name={study_name})"
                ));
                tracing::warn!(study_name, %error, "failed to create study");
            }
        }
    }

    /// Delete a study and drop it from the list.
    pub async fn delete_study(&self, study_id: StudyId) {
        match self.api.delete_study(study_id).await {
            Ok(()) => {
                self.store.remove_study_summary(study_id);
                self.notifier
                    .success(format!("Success to delete a study (id={study_id})"));
            }
            Err(error) => {
                self.notifier
                    .error(format!("Failed to delete study (id={study_id})"));
                tracing::warn!(study_id, %error, "failed to delete study");
            }
        }
    }

    /// Overlay persisted graph visibility on the in-memory one.
    ///
    /// Nothing persisted leaves the store untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError`] if the preference store cannot be read or the
    /// persisted value is not a `key → bool` object. The store is untouched.
    pub fn get_graph_visibility(&self) -> Result<(), ActionError> {
        let Some(raw) = self.preferences.get_item(GRAPH_VISIBILITY_KEY)? else {
            return Ok(());
        };
        let persisted = GraphVisibility::from_json(&raw).inspect_err(|error| {
            tracing::warn!(%error, "ignoring unreadable graph visibility preference");
        })?;
        self.store.merge_graph_visibility(&persisted);
        Ok(())
    }

    /// Replace the in-memory visibility, then persist it.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError`] if the preference store cannot be written.
    /// The in-memory value is replaced regardless.
    pub fn save_graph_visibility(&self, value: GraphVisibility) -> Result<(), ActionError> {
        let json = value.to_json()?;
        self.store.replace_graph_visibility(value);
        self.preferences.set_item(GRAPH_VISIBILITY_KEY, &json)?;
        Ok(())
    }

    /// Forget the persisted visibility and restore the defaults in memory.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError`] if the preference store cannot be written.
    pub fn reset_graph_visibility(&self) -> Result<(), ActionError> {
        self.preferences.remove_item(GRAPH_VISIBILITY_KEY)?;
        self.store.replace_graph_visibility(GraphVisibility::defaults());
        Ok(())
    }

    /// Save a study note.
    ///
    /// On success the note replaces the local one. On a conflict the
    /// server's note replaces the local one instead.
    ///
    /// # Errors
    ///
    /// Every backend failure is returned after it has been handled here.
    pub async fn save_note(&self, study_id: StudyId, note: Note) -> Result<(), ActionError> {
        match self.api.save_note(study_id, &note).await {
            Ok(()) => {
                if !self.store.set_note(study_id, note) {
                    tracing::debug!(study_id, "saved note for a study that is not loaded");
                }
                self.notifier.success("Success to save the note".to_string());
                Ok(())
            }
            Err(error) => {
                if let Some(server_note) = error.conflict_note() {
                    self.store.set_note(study_id, server_note.clone());
                }
                if let Some(reason) = error.reason() {
                    self.notifier.error(format!("Failed: {reason}"));
                }
                tracing::warn!(study_id, %error, "failed to save note");
                Err(error.into())
            }
        }
    }

    /// Fetch parameter importances for one study.
    pub async fn update_param_importances(&self, study_id: StudyId) {
        match self.api.get_param_importances(study_id).await {
            Ok(importances) => self.store.set_param_importances(study_id, importances),
            Err(error) => {
                let message = error.reason().map_or_else(
                    || "Failed to load parameter importances.".to_string(),
                    |reason| format!("Failed to load parameter importances (reason={reason})"),
                );
                self.notifier.error(message);
                tracing::warn!(study_id, %error, "failed to fetch param importances");
            }
        }
    }
}
