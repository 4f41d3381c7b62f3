use crate::errors::AuthError;

/// Mints and checks opaque bearer tokens.
///
/// Signing keys and expiry policy belong to the implementation; callers treat
/// the token string as opaque.
pub trait TokenIssuer: Send + Sync {
    /// Issue a signed token asserting `subject`.
    fn create_token(&self, subject: &str) -> Result<String, AuthError>;

    /// Check a presented token and return the subject it asserts.
    ///
    /// Fails with `AuthError::TokenRejected` for bad signatures, malformed
    /// tokens, or expired tokens.
    fn validate_token(&self, token: &str) -> Result<String, AuthError>;
}
