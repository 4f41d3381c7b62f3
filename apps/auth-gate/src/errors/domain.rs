//! Domain-level error type used by the authentication core.
//!
//! This error type is HTTP-agnostic. The interceptor converts it into
//! `crate::error::AppError` through the provided `From<AuthError>` impl.

use std::fmt::{Display, Formatter, Result as FmtResult};

use thiserror::Error;

/// Why a principal/credentials pair was rejected.
///
/// Kept for logs and tests only; every variant renders the same HTTP outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum AuthFailureReason {
    PrincipalNotFound,
    CredentialMismatch,
    LookupTimedOut,
}

impl AuthFailureReason {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PrincipalNotFound => "principal not found",
            Self::CredentialMismatch => "credential mismatch",
            Self::LookupTimedOut => "user lookup timed out",
        }
    }
}

impl Display for AuthFailureReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Why a presented bearer token was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum TokenRejection {
    /// No Authorization header
    Missing,
    /// Header present but not `Bearer <token>`
    Malformed,
    /// Bad signature, bad shape, or wrong algorithm
    Invalid,
    Expired,
    /// Signature checks out but the subject is no longer in the user store
    UnknownSubject,
    /// The user store did not answer for the token's subject in time
    SubjectLookupTimedOut,
}

impl TokenRejection {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::Malformed => "malformed",
            Self::Invalid => "invalid",
            Self::Expired => "expired",
            Self::UnknownSubject => "unknown_subject",
            Self::SubjectLookupTimedOut => "subject_lookup_timed_out",
        }
    }
}

impl Display for TokenRejection {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Central authentication error type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Login body did not parse into a principal/credentials pair
    #[error("malformed request: {0}")]
    MalformedRequest(String),
    #[error("request body exceeds {limit} bytes")]
    PayloadTooLarge { limit: usize },
    #[error("authentication failed: {0}")]
    AuthenticationFailure(AuthFailureReason),
    #[error("token rejected: {0}")]
    TokenRejected(TokenRejection),
    #[error("token issuance failed: {0}")]
    TokenIssuance(String),
    #[error("user lookup failed: {0}")]
    LookupUnavailable(String),
    #[error("response serialization failed: {0}")]
    Serialization(String),
}

impl AuthError {
    pub fn malformed(detail: impl Into<String>) -> Self {
        Self::MalformedRequest(detail.into())
    }

    pub fn failure(reason: AuthFailureReason) -> Self {
        Self::AuthenticationFailure(reason)
    }

    pub fn rejected(rejection: TokenRejection) -> Self {
        Self::TokenRejected(rejection)
    }

    pub fn issuance(detail: impl Into<String>) -> Self {
        Self::TokenIssuance(detail.into())
    }

    pub fn lookup(detail: impl Into<String>) -> Self {
        Self::LookupUnavailable(detail.into())
    }

    pub fn serialization(detail: impl Into<String>) -> Self {
        Self::Serialization(detail.into())
    }

    pub fn is_authentication_failure(&self) -> bool {
        matches!(self, Self::AuthenticationFailure(_))
    }
}
