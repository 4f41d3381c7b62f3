//! Error codes for the auth-gate HTTP API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses.

use core::fmt;

/// Centralized error codes surfaced in Problem Details responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Authentication
    /// Authentication required
    Unauthorized,
    /// Missing or malformed Bearer token
    UnauthorizedMissingBearer,
    /// Invalid JWT token
    UnauthorizedInvalidJwt,
    /// JWT token has expired
    UnauthorizedExpiredJwt,
    /// Principal/credentials pair was rejected
    InvalidCredentials,

    // Request Validation
    /// Login body could not be parsed
    MalformedRequest,
    /// Login body exceeded the configured limit
    PayloadTooLarge,

    // System Errors
    /// Token could not be minted
    TokenIssuance,
    /// Response body could not be encoded
    SerializationError,
    /// User store failed to answer
    UserLookupUnavailable,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Every code, in declaration order.
    pub const ALL: [ErrorCode; 11] = [
        Self::Unauthorized,
        Self::UnauthorizedMissingBearer,
        Self::UnauthorizedInvalidJwt,
        Self::UnauthorizedExpiredJwt,
        Self::InvalidCredentials,
        Self::MalformedRequest,
        Self::PayloadTooLarge,
        Self::TokenIssuance,
        Self::SerializationError,
        Self::UserLookupUnavailable,
        Self::ConfigError,
    ];

    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unauthorized => "UNAUTHORIZED",
            Self::UnauthorizedMissingBearer => "UNAUTHORIZED_MISSING_BEARER",
            Self::UnauthorizedInvalidJwt => "UNAUTHORIZED_INVALID_JWT",
            Self::UnauthorizedExpiredJwt => "UNAUTHORIZED_EXPIRED_JWT",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",

            Self::MalformedRequest => "MALFORMED_REQUEST",
            Self::PayloadTooLarge => "PAYLOAD_TOO_LARGE",

            Self::TokenIssuance => "TOKEN_ISSUANCE",
            Self::SerializationError => "SERIALIZATION_ERROR",
            Self::UserLookupUnavailable => "USER_LOOKUP_UNAVAILABLE",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_error_code_strings() {
        assert_eq!(ErrorCode::Unauthorized.as_str(), "UNAUTHORIZED");
        assert_eq!(
            ErrorCode::UnauthorizedMissingBearer.as_str(),
            "UNAUTHORIZED_MISSING_BEARER"
        );
        assert_eq!(
            ErrorCode::UnauthorizedExpiredJwt.as_str(),
            "UNAUTHORIZED_EXPIRED_JWT"
        );
        assert_eq!(ErrorCode::InvalidCredentials.as_str(), "INVALID_CREDENTIALS");
        assert_eq!(ErrorCode::MalformedRequest.as_str(), "MALFORMED_REQUEST");
        assert_eq!(ErrorCode::SerializationError.as_str(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_codes_are_unique_and_screaming_snake_case() {
        let mut seen = HashSet::new();
        for code in ErrorCode::ALL {
            let s = code.as_str();
            assert!(seen.insert(s), "duplicate error code {s}");
            assert!(
                s.chars().all(|c| c.is_ascii_uppercase() || c == '_'),
                "{s} is not SCREAMING_SNAKE_CASE"
            );
        }
    }

    #[test]
    fn test_display_trait() {
        assert_eq!(format!("{}", ErrorCode::InvalidCredentials), "INVALID_CREDENTIALS");
        assert_eq!(format!("{}", ErrorCode::PayloadTooLarge), "PAYLOAD_TOO_LARGE");
    }
}
