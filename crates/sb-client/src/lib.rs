//! # sb-client
//!
//! HTTP client for the study-tracking backend.
//!
//! [`StudyApi`] is the seam the action layer is written against;
//! [`ApiClient`] implements it over `reqwest`:
//! - `GET    /api/studies`
//! - `GET    /api/studies/{id}?after={n}`
//! - `POST   /api/studies`
//! - `DELETE /api/studies/{id}`
//! - `PUT    /api/studies/{id}/note`
//! - `GET    /api/studies/{id}/param_importances`

mod error;
mod http;
mod studies;

pub use error::{ApiError, CONFLICT, ErrorBody};

use std::future::Future;
use std::time::Duration;

use sb_config::ApiConfig;
use sb_core::{Note, ParamImportance, StudyDetail, StudyDirection, StudyId, StudySummary};

/// Backend operations consumed by the action layer.
pub trait StudyApi: Send + Sync {
    /// Fetch every study summary.
    fn get_study_summaries(
        &self,
    ) -> impl Future<Output = Result<Vec<StudySummary>, ApiError>> + Send;

    /// Fetch a study with only the trials from index `after` onward.
    fn get_study_detail(
        &self,
        study_id: StudyId,
        after: usize,
    ) -> impl Future<Output = Result<StudyDetail, ApiError>> + Send;

    fn create_study(
        &self,
        study_name: &str,
        directions: &[StudyDirection],
    ) -> impl Future<Output = Result<StudySummary, ApiError>> + Send;

    fn delete_study(&self, study_id: StudyId) -> impl Future<Output = Result<(), ApiError>> + Send;

    /// Save a note. A stale `note.version` is answered with a conflict
    /// carrying the server's note.
    fn save_note(
        &self,
        study_id: StudyId,
        note: &Note,
    ) -> impl Future<Output = Result<(), ApiError>> + Send;

    /// Per-objective parameter importances.
    fn get_param_importances(
        &self,
        study_id: StudyId,
    ) -> impl Future<Output = Result<Vec<Vec<ParamImportance>>, ApiError>> + Send;
}

/// `reqwest`-backed [`StudyApi`] implementation.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the backend rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the underlying client fails to build.
    pub fn new(
        base_url: impl Into<String>,
        timeout: Duration,
        user_agent: &str,
    ) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { http, base_url })
    }

    /// Create a client from the `[api]` configuration section.
    ///
    /// # Errors
    ///
    /// Same as [`Self::new`].
    pub fn from_config(config: &ApiConfig) -> Result<Self, ApiError> {
        Self::new(
            config.normalized_base_url(),
            config.timeout(),
            &config.user_agent,
        )
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api{path}", self.base_url)
    }
}
