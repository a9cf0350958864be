//! In-memory collections
//!
//! This module provides in-memory implementations of the collaborator traits
//! defined in the common traits module.

pub mod history;
pub mod readings;

// Re-export specialized collections for convenience
pub use history::InMemoryHistory;
pub use readings::ReadingCollection;
