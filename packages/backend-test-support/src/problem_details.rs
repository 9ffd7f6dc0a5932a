//! Problem Details assertions for backend testing.

use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::header::{HeaderMap, CONTENT_TYPE};
use actix_web::http::StatusCode;
use serde::Deserialize;

/// Mirror of the backend's error body, kept local so this crate stays
/// independent of backend types.
#[derive(Debug, Deserialize)]
pub struct ProblemDetailsLike {
    #[serde(rename = "type")]
    pub type_: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    pub code: String,
    pub trace_id: String,
}

/// Assert that response parts conform to the error contract and return the
/// parsed body for further checks.
///
/// Validates status, `application/problem+json` content type, the presence of
/// `x-trace-id` and its parity with the body `trace_id`, and the error code.
pub fn assert_problem_details_from_parts(
    status: StatusCode,
    headers: &HeaderMap,
    body_bytes: &[u8],
    expected_code: &str,
    expected_status: StatusCode,
) -> ProblemDetailsLike {
    assert_eq!(status, expected_status);

    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(
        content_type.starts_with("application/problem+json"),
        "Content-Type must be application/problem+json (got {content_type})"
    );

    let body_str =
        std::str::from_utf8(body_bytes).expect("Response body should be valid UTF-8");
    let problem: ProblemDetailsLike = serde_json::from_str(body_str)
        .unwrap_or_else(|_| panic!("Failed to parse error body as ProblemDetails: {body_str}"));

    let trace_id_header = headers
        .get("x-trace-id")
        .expect("x-trace-id header should be present")
        .to_str()
        .expect("x-trace-id header should be valid UTF-8");
    assert!(!trace_id_header.is_empty());
    assert_eq!(
        problem.trace_id, trace_id_header,
        "trace_id in body should match x-trace-id header"
    );

    assert_eq!(problem.code, expected_code);
    assert_eq!(problem.status, expected_status.as_u16());
    assert!(!problem.detail.is_empty(), "detail should carry a message");

    problem
}

/// Same as [`assert_problem_details_from_parts`] for a test `ServiceResponse`.
pub async fn assert_problem_details_from_service_response(
    resp: ServiceResponse<BoxBody>,
    expected_code: &str,
    expected_status: StatusCode,
) -> ProblemDetailsLike {
    let status = resp.status();
    let headers = resp.headers().clone();
    let body = actix_web::test::read_body(resp).await;

    assert_problem_details_from_parts(status, &headers, &body, expected_code, expected_status)
}
