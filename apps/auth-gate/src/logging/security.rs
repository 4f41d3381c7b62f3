use tracing::warn;

use crate::errors::{AuthFailureReason, TokenRejection};
use crate::logging::pii::Redacted;
use crate::trace_ctx;

/// Log a security-relevant login failure event.
pub fn login_failed(reason: AuthFailureReason, principal: &str) {
    let trace_id = trace_ctx::trace_id();

    warn!(
        event = "SECURITY_LOGIN_FAILED",
        %trace_id,
        principal = %Redacted(principal),
        reason = reason.as_str(),
        "Authentication failure"
    );
}

/// Log a security-relevant bearer token rejection.
pub fn token_rejected(rejection: TokenRejection, path: &str) {
    let trace_id = trace_ctx::trace_id();

    warn!(
        event = "SECURITY_TOKEN_REJECTED",
        %trace_id,
        path,
        rejection = rejection.as_str(),
        "Bearer token rejected"
    );
}
