//! Observability for the Namaskar service
//!
//! Structured logging via the tracing stack; output format and level are
//! driven by environment variables so deployments and local runs share the
//! same binary.

pub mod logging;

// Re-export for convenience
pub use logging::{init_default_logging, init_logging, LogFormat};
