//! Capabilities the authentication core consumes.
//!
//! The authenticator and interceptor only see these traits; storage and
//! signing live in `crate::adapters` and `crate::auth::jwt`.

pub mod token_issuer;
pub mod user_lookup;

pub use token_issuer::TokenIssuer;
pub use user_lookup::{LoginMember, UserLookup};
