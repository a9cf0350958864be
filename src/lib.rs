//! A Rust library for the analysis core of a personal health tracker:
//! symptom-to-disease matching against a reference catalog and statistical
//! analysis of daily vital readings against reference ranges.

pub mod algorithm;
pub mod collections;
pub mod common;
pub mod config;
pub mod error;
pub mod loader;
pub mod models;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::{AssistantConfig, HistoryConfig};
pub use error::{HealthError, Result};
pub use models::{
    DiseaseMatch, Metric, SymptomCatalog, SymptomCheckRecord, UserId, VitalReading, VitalStandard,
    VitalStandards,
};

// Symptom matching
pub use algorithm::symptom::{
    MatcherConfig, SymptomMatcher, match_symptoms, normalize_symptom, parse_symptom_input,
    summarize_matches,
};

// Vitals analysis
pub use algorithm::vitals::{
    EntryFeedback, VitalAnalysis, VitalStatus, analyze_vitals, assess_entry, render_report,
};

// Storage
pub use collections::{InMemoryHistory, ReadingCollection};
pub use common::traits::{HistoryStore, ReadingSource};
pub use utils::io::JsonlHistoryStore;
pub use utils::period::{DateWindow, ReportPeriod};

// Loading
pub use loader::{load_catalog, load_readings, load_standards};
