//! Domain models for the health assistant
//!
//! This module contains the data shapes shared by the symptom matcher, the vitals
//! analyzer and their persistence collaborators.

pub mod history;
pub mod metric;
pub mod reading;
pub mod standard;
pub mod symptom;

/// Identifier of a registered user
pub type UserId = u64;

// Re-export commonly used types
pub use history::SymptomCheckRecord;
pub use metric::Metric;
pub use reading::{ReadingRecord, VitalReading};
pub use standard::{VitalStandard, VitalStandards};
pub use symptom::{CatalogEntry, DiseaseMatch, DiseaseProfile, SymptomCatalog};
