//! Symptom catalog and match result models
//!
//! The catalog maps each disease to its set of normalized symptom tokens, together
//! with an optional description and up to four precautions. It is built once from
//! reference data and never mutated during a matching session.

use log::warn;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::algorithm::symptom::normalize::normalize_symptom;
use crate::error::{HealthError, Result};

/// Maximum number of precautions kept per disease
pub const MAX_PRECAUTIONS: usize = 4;

/// Precautions for a disease (never more than [`MAX_PRECAUTIONS`])
pub type Precautions = SmallVec<[String; MAX_PRECAUTIONS]>;

/// One disease as it appears in catalog reference files
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Disease name, as displayed to the user
    pub disease: String,
    /// Symptom names in reference order (normalized on load)
    pub symptoms: Vec<String>,
    /// Free-text description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Recommended precautions
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub precautions: Vec<String>,
}

/// A disease with its normalized symptom profile
#[derive(Debug, Clone, PartialEq)]
pub struct DiseaseProfile {
    name: String,
    symptoms: Vec<String>,
    symptom_set: FxHashSet<String>,
    description: Option<String>,
    precautions: Precautions,
}

impl DiseaseProfile {
    /// Disease name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Normalized symptoms in reference order
    #[must_use]
    pub fn symptoms(&self) -> &[String] {
        &self.symptoms
    }

    /// Whether the disease lists the given normalized symptom
    #[must_use]
    pub fn has_symptom(&self, normalized: &str) -> bool {
        self.symptom_set.contains(normalized)
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub fn precautions(&self) -> &[String] {
        &self.precautions
    }

    fn add_symptom(&mut self, symptom: &str) {
        let token = normalize_symptom(symptom);
        if token.is_empty() {
            return;
        }
        if self.symptom_set.insert(token.clone()) {
            self.symptoms.push(token);
        }
    }
}

/// Immutable mapping from disease name to symptom profile
#[derive(Debug, Clone, Default)]
pub struct SymptomCatalog {
    diseases: Vec<DiseaseProfile>,
    index: FxHashMap<String, usize>,
}

impl SymptomCatalog {
    /// Build a catalog from reference entries
    ///
    /// Symptom names are normalized. An entry repeating an earlier disease name adds
    /// its symptoms to the existing profile. Entries with no usable symptoms are skipped.
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = CatalogEntry>,
    {
        let mut catalog = Self::default();

        for entry in entries {
            let disease = entry.disease.trim();
            if disease.is_empty() {
                warn!("Skipping catalog entry without a disease name");
                continue;
            }

            let precautions: Vec<String> = entry
                .precautions
                .iter()
                .map(|p| p.trim())
                .filter(|p| !p.is_empty())
                .map(str::to_string)
                .collect();
            if precautions.len() > MAX_PRECAUTIONS {
                return Err(HealthError::validation(format!(
                    "Disease '{disease}' lists {} precautions, at most {MAX_PRECAUTIONS} are allowed",
                    precautions.len()
                )));
            }

            let position = match catalog.index.get(disease) {
                Some(&position) => {
                    warn!("Disease '{disease}' appears more than once, merging symptom lists");
                    position
                }
                None => {
                    catalog.diseases.push(DiseaseProfile {
                        name: disease.to_string(),
                        symptoms: Vec::new(),
                        symptom_set: FxHashSet::default(),
                        description: None,
                        precautions: Precautions::new(),
                    });
                    let position = catalog.diseases.len() - 1;
                    catalog.index.insert(disease.to_string(), position);
                    position
                }
            };

            let profile = &mut catalog.diseases[position];
            for symptom in &entry.symptoms {
                profile.add_symptom(symptom);
            }
            if let Some(description) = entry.description.map(|d| d.trim().to_string()) {
                if !description.is_empty() {
                    profile.description = Some(description);
                }
            }
            if !precautions.is_empty() {
                profile.precautions = precautions.into_iter().collect();
            }
        }

        let before = catalog.diseases.len();
        catalog.diseases.retain(|profile| !profile.symptoms.is_empty());
        if catalog.diseases.len() != before {
            warn!(
                "Dropped {} diseases without symptoms from the catalog",
                before - catalog.diseases.len()
            );
            catalog.reindex();
        }

        Ok(catalog)
    }

    /// Build a catalog from `(disease, symptoms)` pairs
    pub fn from_pairs<I, N, S>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (N, Vec<S>)>,
        N: Into<String>,
        S: Into<String>,
    {
        Self::from_entries(pairs.into_iter().map(|(disease, symptoms)| CatalogEntry {
            disease: disease.into(),
            symptoms: symptoms.into_iter().map(Into::into).collect(),
            description: None,
            precautions: Vec::new(),
        }))
    }

    fn reindex(&mut self) {
        self.index = self
            .diseases
            .iter()
            .enumerate()
            .map(|(position, profile)| (profile.name.clone(), position))
            .collect();
    }

    /// Look up a disease by name
    #[must_use]
    pub fn get(&self, disease: &str) -> Option<&DiseaseProfile> {
        self.index.get(disease).map(|&position| &self.diseases[position])
    }

    /// Iterate over all diseases in load order
    pub fn diseases(&self) -> impl Iterator<Item = &DiseaseProfile> {
        self.diseases.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.diseases.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.diseases.is_empty()
    }
}

/// One scored disease for a symptom query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiseaseMatch {
    /// Disease name
    pub disease: String,
    /// Matched symptoms as a share of the query, in percent
    pub match_percentage: f64,
    /// Number of query symptoms the disease lists
    pub matched_count: usize,
}

impl DiseaseMatch {
    /// Percentage from which a match is shown as strong
    pub const STRONG_MATCH_PERCENTAGE: f64 = 70.0;

    /// Whether the match reaches the strong-match threshold
    #[must_use]
    pub fn is_strong(&self) -> bool {
        self.match_percentage >= Self::STRONG_MATCH_PERCENTAGE
    }
}
