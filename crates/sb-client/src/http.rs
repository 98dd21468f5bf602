//! Shared HTTP response helpers.
//!
//! Centralizes status-code checks and body decoding so the endpoint methods
//! stay focused on request construction.

use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Return the response unchanged on success, otherwise an
/// [`ApiError::Api`] built from the status and body.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::from_status(status.as_u16(), &body))
}

/// Check the status, then decode the body as JSON.
///
/// Decode failures become [`ApiError::Parse`] rather than transport errors.
pub async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ApiError> {
    let resp = check_response(resp).await?;
    let text = resp.text().await?;
    serde_json::from_str(&text).map_err(|e| ApiError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_response(status: u16, body: &'static str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body)
                .unwrap(),
        )
    }

    #[tokio::test]
    async fn check_response_success() {
        let resp = mock_response(204, "");
        assert!(check_response(resp).await.is_ok());
    }

    #[tokio::test]
    async fn check_response_keeps_reason() {
        let resp = mock_response(404, r#"{"reason": "study not found"}"#);
        let err = check_response(resp).await.unwrap_err();
        assert!(matches!(err, ApiError::Api { status: 404, .. }));
        assert_eq!(err.reason(), Some("study not found"));
    }

    #[tokio::test]
    async fn read_json_decodes_body() {
        let resp = mock_response(200, r#"{"version": 3, "body": "hi"}"#);
        let note: sb_core::Note = read_json(resp).await.unwrap();
        assert_eq!(note.version, 3);
    }

    #[tokio::test]
    async fn read_json_maps_decode_failure_to_parse() {
        let resp = mock_response(200, "<html>");
        let err = read_json::<sb_core::Note>(resp).await.unwrap_err();
        assert!(matches!(err, ApiError::Parse(_)));
    }
}
