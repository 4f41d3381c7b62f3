//! Token authentication core: credential extraction, verification, token
//! issuance and the request gate that ties them together.

pub mod authenticator;
pub mod credentials;
pub mod interceptor;
pub mod jwt;
pub mod response;
pub mod token;

pub use authenticator::{Authentication, Authenticator, CredentialVerifier, ExactMatch};
pub use credentials::convert;
pub use interceptor::{AuthStage, Gate, TokenAuthenticationInterceptor};
pub use jwt::{Claims, JwtTokenProvider};
pub use response::write_token_response;
pub use token::{AuthenticationToken, TokenRequest, TokenResponse};
