//! Credential verification against the user store.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use super::token::AuthenticationToken;
use crate::errors::{AuthError, AuthFailureReason, TokenRejection};
use crate::logging::pii::Redacted;
use crate::logging::security;
use crate::ports::{LoginMember, UserLookup};

/// Compared against when the principal is unknown so both failure paths do
/// the same amount of work.
const ABSENT_CREDENTIAL: &str = "\u{0}absent-principal\u{0}";

/// Strategy for comparing supplied credentials with stored ones.
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, supplied: &str, stored: &str) -> bool;
}

/// Exact equality, evaluated in constant time.
///
/// Both sides are hashed first; `blake3::Hash` equality does not short-circuit.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExactMatch;

impl CredentialVerifier for ExactMatch {
    fn verify(&self, supplied: &str, stored: &str) -> bool {
        blake3::hash(supplied.as_bytes()) == blake3::hash(stored.as_bytes())
    }
}

/// An identity that has passed the authenticator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Authentication {
    principal: LoginMember,
}

impl Authentication {
    // Crate-private: only the authenticator vouches for a member.
    pub(crate) fn new(principal: LoginMember) -> Self {
        Self { principal }
    }

    pub fn principal(&self) -> &LoginMember {
        &self.principal
    }

    /// Subject written into issued tokens.
    pub fn subject(&self) -> &str {
        &self.principal.email
    }

    pub fn into_principal(self) -> LoginMember {
        self.principal
    }
}

/// Checks principal/credentials pairs against a `UserLookup`.
///
/// Only a verified login or a validated bearer token yields an
/// `Authentication`; a bare subject cannot be resolved from outside the crate:
///
/// ```compile_fail
/// # async fn resolve(authenticator: &auth_gate::auth::Authenticator) {
/// let _ = authenticator.authenticate_subject("email@email.com").await;
/// # }
/// ```
pub struct Authenticator {
    users: Arc<dyn UserLookup>,
    verifier: Arc<dyn CredentialVerifier>,
    lookup_timeout: Option<Duration>,
}

impl Authenticator {
    pub fn new(users: Arc<dyn UserLookup>) -> Self {
        Self {
            users,
            verifier: Arc::new(ExactMatch),
            lookup_timeout: None,
        }
    }

    pub fn with_verifier(mut self, verifier: Arc<dyn CredentialVerifier>) -> Self {
        self.verifier = verifier;
        self
    }

    pub fn with_lookup_timeout(mut self, lookup_timeout: Option<Duration>) -> Self {
        self.lookup_timeout = lookup_timeout;
        self
    }

    /// Verify a principal/credentials pair against the user store.
    ///
    /// Unknown principals and wrong credentials both fail with
    /// `AuthError::AuthenticationFailure`; only the reason differs.
    pub async fn authenticate(&self, token: &AuthenticationToken) -> Result<Authentication, AuthError> {
        let stored = match self.load(token.principal()).await {
            Ok(stored) => stored,
            Err(AuthError::AuthenticationFailure(reason)) => {
                return Err(self.fail(reason, token.principal()))
            }
            Err(e) => return Err(e),
        };

        let Some(member) = stored else {
            let _ = self.verifier.verify(token.credentials(), ABSENT_CREDENTIAL);
            return Err(self.fail(AuthFailureReason::PrincipalNotFound, token.principal()));
        };

        if !self.verifier.verify(token.credentials(), &member.password) {
            return Err(self.fail(AuthFailureReason::CredentialMismatch, token.principal()));
        }

        debug!(member_id = member.id, principal = %Redacted(&member.email), "Credentials verified");
        Ok(Authentication::new(member))
    }

    /// Resolve the subject of an already-validated token to an identity.
    ///
    /// Crate-private: `subject` must come from `TokenIssuer::validate_token`,
    /// never from the request directly.
    pub(crate) async fn authenticate_subject(&self, subject: &str) -> Result<Authentication, AuthError> {
        match self.load(subject).await {
            Ok(Some(member)) => Ok(Authentication::new(member)),
            Ok(None) => Err(AuthError::rejected(TokenRejection::UnknownSubject)),
            // No credentials were presented, so this is a token outcome.
            Err(AuthError::AuthenticationFailure(AuthFailureReason::LookupTimedOut)) => {
                Err(AuthError::rejected(TokenRejection::SubjectLookupTimedOut))
            }
            Err(e) => Err(e),
        }
    }

    async fn load(&self, principal: &str) -> Result<Option<LoginMember>, AuthError> {
        let lookup = self.users.load_by_principal(principal);
        match self.lookup_timeout {
            Some(limit) => tokio::time::timeout(limit, lookup).await.map_err(|_| {
                warn!(timeout_ms = limit.as_millis() as u64, "User lookup timed out");
                AuthError::failure(AuthFailureReason::LookupTimedOut)
            })?,
            None => lookup.await,
        }
    }

    fn fail(&self, reason: AuthFailureReason, principal: &str) -> AuthError {
        security::login_failed(reason, principal);
        AuthError::failure(reason)
    }
}
