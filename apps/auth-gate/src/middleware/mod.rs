pub mod request_trace;
pub mod structured_logger;
pub mod token_auth;
pub mod trace_span;

pub use request_trace::RequestTrace;
pub use structured_logger::StructuredLogger;
pub use token_auth::TokenAuthentication;
pub use trace_span::TraceSpan;
