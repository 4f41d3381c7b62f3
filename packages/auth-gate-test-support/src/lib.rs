//! Shared helpers for auth-gate integration tests.
//!
//! Kept free of auth-gate types so the assertions check the wire contract
//! rather than the crate's own structs.

pub mod logging;
pub mod problem_details;
