//! Common traits
//!
//! The storage contracts shared by the in-memory collections and the file-backed
//! history store live here so neither depends on the other.

pub mod traits;

pub use traits::*;
