//! System-level modules
//!
//! Logging initialization and other process-wide concerns.

pub mod logging;

pub use logging::init_logging;
