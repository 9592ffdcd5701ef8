//! Tests for HTTP error mapping.

use super::*;
use crate::domain::Error;
use actix_web::ResponseError;
use actix_web::body::to_bytes;
use actix_web::http::StatusCode;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn expected_trace_id() -> String {
    TRACE_ID.to_owned()
}

async fn response_parts(error: &Error) -> (StatusCode, Option<String>, Value) {
    let response = ResponseError::error_response(error);
    let status = response.status();
    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .map(|value| value.to_str().expect("trace header is ASCII").to_owned());
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    let body = serde_json::from_slice(&bytes).expect("error body is JSON");
    (status, header, body)
}

#[rstest]
#[case(Error::invalid_request("Invalid movie id"), StatusCode::BAD_REQUEST)]
#[case(Error::unauthorized("Unauthorized"), StatusCode::UNAUTHORIZED)]
#[case(
    Error::internal("Failed to fetch movie details"),
    StatusCode::INTERNAL_SERVER_ERROR
)]
fn status_code_matches_error_code(#[case] err: Error, #[case] status: StatusCode) {
    assert_eq!(ResponseError::status_code(&err), status);
}

#[rstest]
#[actix_web::test]
async fn internal_errors_keep_the_endpoint_message(expected_trace_id: String) {
    let error = Error::internal("Failed to fetch favorites").with_trace_id(expected_trace_id);

    let (status, header, body) = response_parts(&error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(header.as_deref(), Some(TRACE_ID));
    assert_eq!(body, json!({"error": "Failed to fetch favorites"}));
}

#[rstest]
#[actix_web::test]
async fn error_without_trace_id_omits_trace_header() {
    let error = Error::invalid_request("Invalid page");

    let (status, header, body) = response_parts(&error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(header.is_none(), "trace-id header should not be present");
    assert_eq!(body, json!({"error": "Invalid page"}));
}

#[rstest]
fn downstream_failure_hides_upstream_detail() {
    let failure = TmdbError::upstream(404_u16, "Not Found");

    let err = downstream_failure("Failed to fetch person details", &failure);

    assert_eq!(err.code(), ErrorCode::InternalError);
    assert_eq!(err.message(), "Failed to fetch person details");
}

#[test]
fn from_actix_error_is_redacted_internal_error() {
    use actix_web::error;

    let actix_err = error::ErrorBadRequest("boom");
    let err: Error = actix_err.into();

    assert_eq!(err.code(), ErrorCode::InternalError);
    assert_eq!(err.message(), "Internal server error");
    assert_eq!(err.trace_id(), None);
}
