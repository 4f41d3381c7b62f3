//! Error handling for the auth-gate service.

pub mod domain;
pub mod error_code;

pub use domain::{AuthError, AuthFailureReason, TokenRejection};
pub use error_code::ErrorCode;
