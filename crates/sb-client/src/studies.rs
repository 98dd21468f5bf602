//! Study endpoints.

use sb_core::{Note, ParamImportance, StudyDetail, StudyDirection, StudyId, StudySummary};
use serde::{Deserialize, Serialize};

use crate::http::{check_response, read_json};
use crate::{ApiClient, ApiError, StudyApi};

#[derive(Deserialize)]
struct StudySummariesResponse {
    study_summaries: Vec<StudySummary>,
}

#[derive(Serialize)]
struct CreateStudyRequest<'a> {
    study_name: &'a str,
    directions: &'a [StudyDirection],
}

#[derive(Deserialize)]
struct CreateStudyResponse {
    study_summary: StudySummary,
}

#[derive(Deserialize)]
struct ParamImportancesResponse {
    param_importances: Vec<Vec<ParamImportance>>,
}

impl StudyApi for ApiClient {
    async fn get_study_summaries(&self) -> Result<Vec<StudySummary>, ApiError> {
        let url = self.url("/studies");
        tracing::debug!(%url, "GET study summaries");
        let resp = self.http.get(&url).send().await?;
        let data: StudySummariesResponse = read_json(resp).await?;
        Ok(data.study_summaries)
    }

    async fn get_study_detail(
        &self,
        study_id: StudyId,
        after: usize,
    ) -> Result<StudyDetail, ApiError> {
        let url = self.url(&format!("/studies/{study_id}?after={after}"));
        tracing::debug!(%url, "GET study detail");
        let resp = self.http.get(&url).send().await?;
        read_json(resp).await
    }

    async fn create_study(
        &self,
        study_name: &str,
        directions: &[StudyDirection],
    ) -> Result<StudySummary, ApiError> {
        let url = self.url("/studies");
        tracing::debug!(%url, study_name, "POST study");
        let resp = self
            .http
            .post(&url)
            .json(&CreateStudyRequest {
                study_name,
                directions,
            })
            .send()
            .await?;
        let data: CreateStudyResponse = read_json(resp).await?;
        Ok(data.study_summary)
    }

    async fn delete_study(&self, study_id: StudyId) -> Result<(), ApiError> {
        let url = self.url(&format!("/studies/{study_id}"));
        tracing::debug!(%url, "DELETE study");
        let resp = self.http.delete(&url).send().await?;
        check_response(resp).await?;
        Ok(())
    }

    async fn save_note(&self, study_id: StudyId, note: &Note) -> Result<(), ApiError> {
        let url = self.url(&format!("/studies/{study_id}/note"));
        tracing::debug!(%url, version = note.version, "PUT note");
        let resp = self.http.put(&url).json(note).send().await?;
        check_response(resp).await?;
        Ok(())
    }

    async fn get_param_importances(
        &self,
        study_id: StudyId,
    ) -> Result<Vec<Vec<ParamImportance>>, ApiError> {
        let url = self.url(&format!("/studies/{study_id}/param_importances"));
        tracing::debug!(%url, "GET param importances");
        let resp = self.http.get(&url).send().await?;
        let data: ParamImportancesResponse = read_json(resp).await?;
        Ok(data.param_importances)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn create_request_uses_backend_field_names() {
        let body = serde_json::to_value(CreateStudyRequest {
            study_name: "foo",
            directions: &[StudyDirection::Minimize, StudyDirection::Maximize],
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({"study_name": "foo", "directions": ["minimize", "maximize"]})
        );
    }

    #[test]
    fn parses_summaries_envelope() {
        let json = r#"{"study_summaries": [
            {"study_id": 1, "study_name": "a", "directions": ["minimize"]},
            {"study_id": 2, "study_name": "b", "directions": ["maximize"]}
        ]}"#;
        let data: StudySummariesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(data.study_summaries.len(), 2);
        assert_eq!(data.study_summaries[1].study_name, "b");
    }

    #[test]
    fn parses_importances_envelope() {
        let json = r#"{"param_importances": [[
            {"name": "lr", "importance": 0.8, "distribution": "FloatDistribution"},
            {"name": "layers", "importance": 0.2, "distribution": "IntDistribution"}
        ]]}"#;
        let data: ParamImportancesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(data.param_importances.len(), 1);
        assert_eq!(data.param_importances[0][0].name, "lr");
    }
}
