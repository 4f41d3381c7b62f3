use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;

use super::token::TokenResponse;
use crate::errors::AuthError;

/// Write an issued token as a `200 OK` JSON body.
pub fn write_token_response(body: &TokenResponse) -> Result<HttpResponse, AuthError> {
    write_json(StatusCode::OK, body)
}

/// Serialize `body` up front so an encoding failure surfaces as
/// `AuthError::Serialization` instead of a half-written response.
pub fn write_json<T: Serialize>(status: StatusCode, body: &T) -> Result<HttpResponse, AuthError> {
    let bytes = serde_json::to_vec(body).map_err(|e| AuthError::serialization(e.to_string()))?;

    Ok(HttpResponse::build(status)
        .content_type(ContentType::json())
        .body(bytes))
}
