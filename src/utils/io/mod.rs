//! IO utilities for file operations
//!
//! This module provides file-backed storage for data that outlives a session.

pub mod history_file;

// Re-export commonly used types for convenience
pub use history_file::JsonlHistoryStore;
