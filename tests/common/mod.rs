//! Common test utilities for integration tests.
//!
//! # Modules
//!
//! - `log_capture`: Thread-local tracing capture for log assertions
//! - `logger`: Structured test logging infrastructure

pub mod log_capture;
pub mod logger;
