use std::fmt;

use async_trait::async_trait;
use serde::Deserialize;

use crate::errors::AuthError;

/// Stored user record, keyed by email.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct LoginMember {
    pub id: i64,
    pub email: String,
    /// Canonical credential the supplied password is compared against
    pub password: String,
    #[serde(default)]
    pub age: i32,
}

impl LoginMember {
    pub fn new(id: i64, email: impl Into<String>, password: impl Into<String>, age: i32) -> Self {
        Self {
            id,
            email: email.into(),
            password: password.into(),
            age,
        }
    }
}

impl fmt::Debug for LoginMember {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginMember")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("age", &self.age)
            .finish()
    }
}

/// Read-only access to stored user records.
///
/// `Ok(None)` means the principal is unknown; `Err` is reserved for the
/// store itself failing.
#[async_trait]
pub trait UserLookup: Send + Sync {
    async fn load_by_principal(&self, principal: &str) -> Result<Option<LoginMember>, AuthError>;
}
