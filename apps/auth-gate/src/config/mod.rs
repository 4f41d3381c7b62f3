//! Runtime configuration loaded from `AUTH_GATE_*` environment variables.

pub mod app;
pub mod interceptor;

pub use app::{AppConfig, ServerConfig};
pub use interceptor::InterceptorSettings;
