//! Observability for agenda runs: structured logging via tracing

pub mod logging;

pub use logging::{init_default_logging, init_logging, LogFormat};
