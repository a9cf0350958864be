//! Vitals analysis over a window of daily readings
//!
//! This module aggregates a user's readings into per-metric statistics and
//! classifies each average against the standards table. It also provides the
//! instant feedback shown after a single day's entry, fixed recommendation
//! texts, and a plain-text report.

pub mod analyzer;
pub mod feedback;
pub mod recommendation;
pub mod report;
pub mod status;
pub mod types;

// Re-export key types
pub use analyzer::analyze_vitals;
pub use feedback::{EntryFeedback, assess_entry};
pub use recommendation::recommendation;
pub use report::render_report;
pub use status::{VitalStatus, classify};
pub use types::{MetricSummary, VitalAnalysis};
