#![allow(dead_code)]

use actix_web::dev::ServiceResponse;
use actix_web::http::StatusCode;
use auth_gate_test_support::problem_details::{
    assert_problem_details_from_service_response, ProblemDetailsLike,
};

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    auth_gate_test_support::logging::init();
}

/// Assert a problem+json rejection and check no token leaked into it.
pub async fn assert_rejected<B>(
    resp: ServiceResponse<B>,
    expected_status: StatusCode,
    expected_code: &str,
) -> ProblemDetailsLike
where
    B: actix_web::body::MessageBody,
{
    let problem =
        assert_problem_details_from_service_response(resp, expected_status, expected_code).await;
    assert!(
        !problem.detail.contains("eyJ"),
        "error detail must not carry a token: {}",
        problem.detail
    );
    problem
}
