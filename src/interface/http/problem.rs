use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// RFC 7807 Problem Details payload.
#[derive(Debug, Serialize)]
pub struct ProblemDetails {
    /// A URI reference that identifies the problem type.
    #[serde(rename = "type")]
    pub r#type: String,
    /// A short, human-readable summary of the problem type.
    pub title: String,
    /// The HTTP status code for this occurrence.
    pub status: u16,
    /// A human-readable explanation specific to this occurrence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// A stable, machine-readable application error code (CRL_...).
    pub code: String,
}

/// Build a Problem Details response with the correct content-type.
pub fn problem(status: StatusCode, code: &str, detail: Option<String>) -> Response {
    // Step 1: Build the problem payload.
    let payload = ProblemDetails {
        r#type: "about:blank".to_string(),
        title: status.canonical_reason().unwrap_or("Error").to_string(),
        status: status.as_u16(),
        detail,
        code: code.to_string(),
    };

    // Step 2: Convert to an HTTP response with JSON body.
    let mut response = (status, Json(payload)).into_response();

    // Step 3: Ensure RFC 7807 content type.
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/problem+json"),
    );

    response
}

pub const CRL_REQUEST_MALFORMED: &str = "CRL_REQUEST_MALFORMED";
pub const CRL_WEBHOOK_NOT_FOUND: &str = "CRL_WEBHOOK_NOT_FOUND";
pub const CRL_EVENT_UNKNOWN: &str = "CRL_EVENT_UNKNOWN";
pub const CRL_STORAGE_DB_ERROR: &str = "CRL_STORAGE_DB_ERROR";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_problem_when_built_should_use_problem_json_content_type() {
        let response = problem(
            StatusCode::NOT_FOUND,
            CRL_WEBHOOK_NOT_FOUND,
            Some("webhook not found".to_string()),
        );

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/problem+json"
        );
    }
}
