use std::fmt;

use serde::{Deserialize, Serialize};

/// Login request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRequest {
    #[serde(alias = "principal")]
    pub email: String,
    #[serde(alias = "credentials")]
    pub password: String,
}

impl TokenRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Login response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

impl TokenResponse {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

/// Unverified principal/credentials pair for a single login attempt.
///
/// Holding one proves nothing; only `Authenticator::authenticate` turns it
/// into an `Authentication`.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthenticationToken {
    principal: String,
    credentials: String,
}

impl AuthenticationToken {
    pub fn new(principal: impl Into<String>, credentials: impl Into<String>) -> Self {
        Self {
            principal: principal.into(),
            credentials: credentials.into(),
        }
    }

    pub fn principal(&self) -> &str {
        &self.principal
    }

    pub fn credentials(&self) -> &str {
        &self.credentials
    }
}

impl From<TokenRequest> for AuthenticationToken {
    fn from(request: TokenRequest) -> Self {
        Self::new(request.email, request.password)
    }
}

impl fmt::Debug for AuthenticationToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthenticationToken")
            .field("principal", &self.principal)
            .field("credentials", &"<redacted>")
            .finish()
    }
}
