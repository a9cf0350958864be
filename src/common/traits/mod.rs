//! Common traits used across the codebase
//!
//! This module defines the collaborator interfaces the analysis core is fed
//! through, so that callers never hand it a storage handle directly.

pub mod source;

// Re-export collaborator traits
pub use source::{HistoryStore, ReadingSource};
