//! Login body to `AuthenticationToken` conversion.

use serde_json::Error as JsonError;
use tracing::debug;

use super::token::{AuthenticationToken, TokenRequest};
use crate::errors::AuthError;

/// Parse a raw login body into an `AuthenticationToken`.
///
/// Any body that is not a JSON object carrying both fields fails with
/// `AuthError::MalformedRequest`. The error detail is derived from the JSON
/// error category only, so request contents never leak into responses.
pub fn convert(raw_body: &[u8]) -> Result<AuthenticationToken, AuthError> {
    serde_json::from_slice::<TokenRequest>(raw_body)
        .map(AuthenticationToken::from)
        .map_err(|e| {
            debug!(body_size = raw_body.len(), category = ?e.classify(), "Login body did not parse");
            AuthError::malformed(classify_json_error(&e))
        })
}

/// Classify serde_json::Error and return a sanitized error message
fn classify_json_error(error: &JsonError) -> String {
    match error.classify() {
        serde_json::error::Category::Syntax => {
            let line = error.line();
            format!("Invalid JSON at line {line}")
        }
        serde_json::error::Category::Eof => "Invalid JSON: unexpected end of input".to_string(),
        serde_json::error::Category::Data => {
            "Invalid JSON: missing or mistyped email/password fields".to_string()
        }
        serde_json::error::Category::Io => "Invalid JSON: I/O error while reading body".to_string(),
    }
}
