#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod adapters;
pub mod auth;
pub mod config;
pub mod error;
pub mod errors;
pub mod extractors;
pub mod logging;
pub mod middleware;
pub mod ports;
pub mod routes;
pub mod state;
pub mod telemetry;
pub mod trace_ctx;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use adapters::InMemoryUserStore;
pub use auth::{
    AuthStage, Authentication, Gate, JwtTokenProvider, TokenAuthenticationInterceptor,
    TokenRequest, TokenResponse,
};
pub use config::{AppConfig, InterceptorSettings};
pub use error::AppError;
pub use errors::{AuthError, ErrorCode};
pub use extractors::AuthenticatedMember;
pub use middleware::{RequestTrace, StructuredLogger, TokenAuthentication, TraceSpan};
pub use ports::{LoginMember, TokenIssuer, UserLookup};
pub use state::{build_state, AppState, SecurityConfig};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
