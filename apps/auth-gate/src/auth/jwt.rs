use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::errors::{AuthError, TokenRejection};
use crate::ports::TokenIssuer;
use crate::state::security_config::SecurityConfig;

/// Claims included in issued access tokens.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
    /// Principal the token was issued to
    pub sub: String,
    /// Issued-at (seconds since epoch)
    pub iat: i64,
    /// Expiry (seconds since epoch)
    pub exp: i64,
}

/// HMAC-signed JWT implementation of `TokenIssuer`.
#[derive(Debug, Clone)]
pub struct JwtTokenProvider {
    security: SecurityConfig,
}

impl JwtTokenProvider {
    pub fn new(security: SecurityConfig) -> Self {
        Self { security }
    }

    /// Mint a token for `subject` as if issued at `now`.
    pub fn mint_at(&self, subject: &str, now: SystemTime) -> Result<String, AuthError> {
        let iat = now
            .duration_since(UNIX_EPOCH)
            .map_err(|_| AuthError::issuance("clock is before the unix epoch"))?
            .as_secs() as i64;
        let exp = iat + self.security.token_ttl.as_secs() as i64;

        let claims = Claims {
            sub: subject.to_string(),
            iat,
            exp,
        };

        encode(
            &Header::new(self.security.algorithm),
            &claims,
            &EncodingKey::from_secret(&self.security.jwt_secret),
        )
        .map_err(|e| AuthError::issuance(format!("failed to encode JWT: {e}")))
    }

    /// Verify signature, algorithm and expiry, and return the claims.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        // Default Validation already checks exp; pin algorithm to configured algorithm.
        let validation = Validation::new(self.security.algorithm);

        decode::<Claims>(
            token,
            &DecodingKey::from_secret(&self.security.jwt_secret),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => AuthError::rejected(TokenRejection::Expired),
            _ => AuthError::rejected(TokenRejection::Invalid),
        })
    }
}

impl TokenIssuer for JwtTokenProvider {
    fn create_token(&self, subject: &str) -> Result<String, AuthError> {
        self.mint_at(subject, SystemTime::now())
    }

    fn validate_token(&self, token: &str) -> Result<String, AuthError> {
        self.verify(token).map(|claims| claims.sub)
    }
}
