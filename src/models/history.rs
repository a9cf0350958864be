//! Symptom check history record
//!
//! Each completed symptom check is stored as one record with the normalized query
//! and a short summary of the best matches, both as joined text.

use chrono::{DateTime, Utc};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::algorithm::symptom::summary::summarize_matches;
use crate::models::UserId;
use crate::models::symptom::DiseaseMatch;

/// A persisted symptom check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomCheckRecord {
    /// User who ran the check
    pub user_id: UserId,
    /// When the check was run
    pub timestamp: DateTime<Utc>,
    /// Normalized query symptoms, comma separated
    pub symptoms: String,
    /// Summary of the top matches, e.g. "Flu (100%), Cold (50%)"
    pub top_matches: String,
}

impl SymptomCheckRecord {
    /// Create a record from a normalized query and its ordered matches
    #[must_use]
    pub fn new<S: AsRef<str>>(
        user_id: UserId,
        timestamp: DateTime<Utc>,
        normalized_symptoms: &[S],
        matches: &[DiseaseMatch],
        summary_limit: usize,
    ) -> Self {
        Self {
            user_id,
            timestamp,
            symptoms: normalized_symptoms.iter().map(|s| s.as_ref()).join(", "),
            top_matches: summarize_matches(matches, summary_limit),
        }
    }
}
