//! Symptom matching against a static disease catalog
//!
//! This module implements symptom checking as used by the health assistant:
//!
//! 1. Parsing and normalization of user-entered symptoms
//! 2. Scoring of catalog diseases by symptom overlap
//! 3. Summaries of the best matches for display and history
//!
//! A match percentage always measures how much of the user's query a disease
//! explains, never how much of the disease profile the query covers.

pub mod matcher;
pub mod normalize;
pub mod summary;

// Re-export key types
pub use matcher::{DiseaseDetails, MatcherConfig, SymptomMatcher, match_symptoms};
pub use normalize::{normalize_query, normalize_symptom, parse_symptom_input};
pub use summary::{format_match_line, summarize_matches, top_matches};
