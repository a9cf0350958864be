//! Logging utilities
//!
//! This module provides logger setup for the binary and consistent messages for
//! reference data loading.

pub mod log;

// Re-export commonly used functions for convenience
pub use self::log::{DEFAULT_LOG_FILTER, init_logging, log_operation_complete, log_operation_start, log_warning};
