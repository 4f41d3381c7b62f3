//! Assertions over problem+json error responses.

use actix_web::http::header::HeaderMap;
use actix_web::http::StatusCode;
use serde::Deserialize;

/// Mirror of the error body the server emits.
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

/// Check status, content type, trace id parity and the `code` field, and
/// return the parsed body for further assertions.
pub fn assert_problem_details_from_parts(
    status: StatusCode,
    headers: &HeaderMap,
    body: &[u8],
    expected_status: StatusCode,
    expected_code: &str,
) -> ProblemDetailsLike {
    assert_eq!(status, expected_status);

    let content_type = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(
        content_type.starts_with("application/problem+json"),
        "Content-Type must be application/problem+json (got {content_type})"
    );

    let problem: ProblemDetailsLike =
        serde_json::from_slice(body).expect("Response body should be valid ProblemDetails JSON");

    let trace_id_header = headers
        .get("x-trace-id")
        .expect("x-trace-id header should be present")
        .to_str()
        .expect("x-trace-id header should be valid UTF-8");
    assert_eq!(
        problem.trace_id, trace_id_header,
        "trace_id in body should match x-trace-id header"
    );

    assert_eq!(problem.code, expected_code);
    assert_eq!(problem.status, expected_status.as_u16());
    assert_eq!(problem.type_, format!("urn:auth-gate:error:{expected_code}"));

    let www_authenticate = headers.get("www-authenticate");
    if expected_status == StatusCode::UNAUTHORIZED {
        assert_eq!(
            www_authenticate.and_then(|v| v.to_str().ok()),
            Some("Bearer"),
            "401 responses must carry WWW-Authenticate: Bearer"
        );
    } else {
        assert!(
            www_authenticate.is_none(),
            "{expected_status} responses must not carry WWW-Authenticate"
        );
    }

    problem
}

/// Same as [`assert_problem_details_from_parts`] for a `ServiceResponse`.
pub async fn assert_problem_details_from_service_response<B>(
    resp: actix_web::dev::ServiceResponse<B>,
    expected_status: StatusCode,
    expected_code: &str,
) -> ProblemDetailsLike
where
    B: actix_web::body::MessageBody,
{
    let status = resp.status();
    let headers = resp.headers().clone();
    let body = actix_web::test::read_body(resp).await;

    assert_problem_details_from_parts(status, &headers, &body, expected_status, expected_code)
}
