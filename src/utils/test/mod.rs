//! Test utilities
//!
//! This module provides shared catalog and reading fixtures for unit and integration tests.


// Re-export commonly used functions for convenience
pub use fixtures::{flu_and_cold_catalog, sample_catalog, sample_readings, sample_window};
