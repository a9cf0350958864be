//! Core symptom matching implementation
//!
//! This module scores every disease of a [`SymptomCatalog`] against a symptom query
//! and orders the candidates from best to worst match.

use std::cmp::Ordering;

use log::{debug, info};
use rayon::prelude::*;
use serde::Deserialize;

use crate::algorithm::symptom::normalize::normalize_query;
use crate::error::{HealthError, Result};
use crate::models::symptom::{DiseaseMatch, SymptomCatalog};

/// Score catalog diseases against a symptom query
///
/// Each query symptom is normalized and tested for membership in every disease's
/// symptom set. Diseases without any matching symptom are left out. The match
/// percentage is `matched / query length * 100`.
///
/// Results are ordered by descending percentage, then descending matched count,
/// then disease name.
///
/// # Errors
///
/// Returns [`HealthError::InvalidInput`] when the query holds no usable symptom.
pub fn match_symptoms<S: AsRef<str>>(
    catalog: &SymptomCatalog,
    query: &[S],
) -> Result<Vec<DiseaseMatch>> {
    let normalized = normalize_query(query);
    if normalized.is_empty() {
        return Err(HealthError::invalid_input(
            "Please enter at least one symptom",
        ));
    }

    let query_len = normalized.len() as f64;
    let mut matches: Vec<DiseaseMatch> = catalog
        .diseases()
        .filter_map(|profile| {
            let matched_count = normalized
                .iter()
                .filter(|symptom| profile.has_symptom(symptom))
                .count();
            (matched_count > 0).then(|| DiseaseMatch {
                disease: profile.name().to_string(),
                match_percentage: matched_count as f64 / query_len * 100.0,
                matched_count,
            })
        })
        .collect();

    matches.sort_by(compare_matches);

    debug!(
        "Scored {} symptoms against {} diseases: {} candidates",
        normalized.len(),
        catalog.len(),
        matches.len()
    );

    Ok(matches)
}

/// Ordering used for match results, best match first
fn compare_matches(a: &DiseaseMatch, b: &DiseaseMatch) -> Ordering {
    b.match_percentage
        .total_cmp(&a.match_percentage)
        .then_with(|| b.matched_count.cmp(&a.matched_count))
        .then_with(|| a.disease.cmp(&b.disease))
}

/// Configuration for batch symptom matching
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    /// Allow parallel scoring of query batches
    pub use_parallel: bool,
    /// Minimum batch size before switching to parallel scoring
    pub parallel_threshold: usize,
    /// Number of matches shown to the user
    pub display_limit: usize,
    /// Number of matches kept in the history summary
    pub summary_limit: usize,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            use_parallel: true,
            parallel_threshold: 64,
            display_limit: 5,
            summary_limit: 3,
        }
    }
}

/// Description and precautions of a matched disease
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiseaseDetails<'a> {
    /// Free-text description, if the catalog has one
    pub description: Option<&'a str>,
    /// Recommended precautions (at most four)
    pub precautions: &'a [String],
}

/// Symptom matcher bound to a loaded catalog
#[derive(Debug, Clone)]
pub struct SymptomMatcher<'a> {
    catalog: &'a SymptomCatalog,
    config: MatcherConfig,
}

impl<'a> SymptomMatcher<'a> {
    /// Create a new matcher over the given catalog
    #[must_use]
    pub const fn new(catalog: &'a SymptomCatalog, config: MatcherConfig) -> Self {
        Self { catalog, config }
    }

    /// The catalog this matcher scores against
    #[must_use]
    pub const fn catalog(&self) -> &'a SymptomCatalog {
        self.catalog
    }

    #[must_use]
    pub const fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Score a single query
    pub fn matches<S: AsRef<str>>(&self, query: &[S]) -> Result<Vec<DiseaseMatch>> {
        match_symptoms(self.catalog, query)
    }

    /// Score several queries, returning one result per query in input order
    ///
    /// Batches at or above the configured threshold are scored in parallel.
    pub fn match_many<S>(&self, queries: &[Vec<S>]) -> Vec<Result<Vec<DiseaseMatch>>>
    where
        S: AsRef<str> + Sync,
    {
        let use_parallel = self.config.use_parallel && queries.len() >= self.config.parallel_threshold;

        if use_parallel {
            info!("Scoring {} symptom queries in parallel", queries.len());
            queries
                .par_iter()
                .map(|query| match_symptoms(self.catalog, query))
                .collect()
        } else {
            queries
                .iter()
                .map(|query| match_symptoms(self.catalog, query))
                .collect()
        }
    }

    /// Description and precautions for a disease in the catalog
    #[must_use]
    pub fn details(&self, disease: &str) -> Option<DiseaseDetails<'a>> {
        self.catalog.get(disease).map(|profile| DiseaseDetails {
            description: profile.description(),
            precautions: profile.precautions(),
        })
    }
}
