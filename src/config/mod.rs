//! Configuration for the health assistant.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::algorithm::symptom::MatcherConfig;
use crate::common::traits::source::DEFAULT_HISTORY_LIMIT;
use crate::error::{HealthError, Result};
use crate::loader::read_json;
use crate::utils::period::ReportPeriod;

/// Configuration for symptom history storage
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// JSON Lines file holding the history
    pub path: PathBuf,
    /// Number of records shown when the caller gives no limit
    pub default_limit: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("data/symptom_history.jsonl"),
            default_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

/// Configuration for the health assistant
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    /// Symptom catalog file
    pub catalog_path: PathBuf,
    /// Standards table file; the built-in report ranges are used when absent
    pub standards_path: Option<PathBuf>,
    /// Vital readings file
    pub readings_path: PathBuf,
    /// Report period used when none is requested
    pub default_period: ReportPeriod,
    /// Symptom matching settings
    pub matcher: MatcherConfig,
    /// History storage settings
    pub history: HistoryConfig,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from("data/symptom_catalog.json"),
            standards_path: None,
            readings_path: PathBuf::from("data/vitals.json"),
            default_period: ReportPeriod::Weekly,
            matcher: MatcherConfig::default(),
            history: HistoryConfig::default(),
        }
    }
}

impl AssistantConfig {
    /// Load configuration from a JSON file, filling missing fields with defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let config: Self = read_json(path, "assistant configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Check settings that would make the assistant unusable
    pub fn validate(&self) -> Result<()> {
        if self.matcher.display_limit == 0 {
            return Err(HealthError::ConfigError(
                "matcher.display_limit must be at least 1".to_string(),
            ));
        }
        if self.matcher.summary_limit == 0 {
            return Err(HealthError::ConfigError(
                "matcher.summary_limit must be at least 1".to_string(),
            ));
        }
        if self.history.default_limit == 0 {
            return Err(HealthError::ConfigError(
                "history.default_limit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
