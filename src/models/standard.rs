//! Normal ranges for vital metrics
//!
//! The standards table is supplied once at process start and never edited by the user.
//! Metrics missing from the table are reported unclassified.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{HealthError, Result};
use crate::models::metric::Metric;

/// Normal range and labels for one metric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VitalStandard {
    /// Lowest value considered normal (inclusive)
    pub min: f64,
    /// Highest value considered normal (inclusive)
    pub max: f64,
    /// Unit label, e.g. "mmHg"
    pub unit: String,
    /// Human readable metric name
    pub name: String,
}

impl VitalStandard {
    #[must_use]
    pub fn new(min: f64, max: f64, unit: &str, name: &str) -> Self {
        Self {
            min,
            max,
            unit: unit.to_string(),
            name: name.to_string(),
        }
    }

    /// Whether a value lies inside the normal range (bounds inclusive)
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }

    fn validate(&self, metric: Metric) -> Result<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(HealthError::validation(format!(
                "Standard for {metric} has a non-finite bound"
            )));
        }
        if self.min > self.max {
            return Err(HealthError::validation(format!(
                "Standard for {metric} has min {} above max {}",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

/// Standards table keyed by metric
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<Metric, VitalStandard>",
    into = "BTreeMap<Metric, VitalStandard>"
)]
pub struct VitalStandards {
    by_metric: BTreeMap<Metric, VitalStandard>,
}

impl TryFrom<BTreeMap<Metric, VitalStandard>> for VitalStandards {
    type Error = HealthError;

    fn try_from(by_metric: BTreeMap<Metric, VitalStandard>) -> Result<Self> {
        Self::new(by_metric)
    }
}

impl From<VitalStandards> for BTreeMap<Metric, VitalStandard> {
    fn from(standards: VitalStandards) -> Self {
        standards.by_metric
    }
}

impl VitalStandards {
    /// Build a validated standards table
    pub fn new(by_metric: BTreeMap<Metric, VitalStandard>) -> Result<Self> {
        for (metric, standard) in &by_metric {
            standard.validate(*metric)?;
        }
        Ok(Self { by_metric })
    }

    /// Ranges used for weekly and monthly reports
    ///
    /// Sleep and weight have no standard and are reported as recorded values only.
    #[must_use]
    pub fn report_defaults() -> Self {
        let by_metric = BTreeMap::from([
            (
                Metric::BpSystolic,
                VitalStandard::new(90.0, 120.0, "mmHg", "Blood Pressure (Systolic)"),
            ),
            (
                Metric::BpDiastolic,
                VitalStandard::new(60.0, 80.0, "mmHg", "Blood Pressure (Diastolic)"),
            ),
            (Metric::Sugar, VitalStandard::new(70.0, 140.0, "mg/dL", "Blood Sugar")),
            (Metric::Pulse, VitalStandard::new(60.0, 100.0, "bpm", "Pulse Rate")),
        ]);
        Self { by_metric }
    }

    /// Ranges used for instant feedback on a single day's entry
    ///
    /// Blood pressure is only flagged above 130/85, a wider band than the
    /// report ranges. Sleep is checked against 7-9 hours.
    #[must_use]
    pub fn daily_entry_defaults() -> Self {
        let mut standards = Self::report_defaults();
        standards.by_metric.extend([
            (
                Metric::BpSystolic,
                VitalStandard::new(90.0, 130.0, "mmHg", "Blood Pressure (Systolic)"),
            ),
            (
                Metric::BpDiastolic,
                VitalStandard::new(60.0, 85.0, "mmHg", "Blood Pressure (Diastolic)"),
            ),
            (Metric::SleepHours, VitalStandard::new(7.0, 9.0, "hours", "Sleep")),
        ]);
        standards
    }

    /// Standard for a metric, if one is defined
    #[must_use]
    pub fn get(&self, metric: Metric) -> Option<&VitalStandard> {
        self.by_metric.get(&metric)
    }

    /// Display name for a metric, falling back to the built-in name
    #[must_use]
    pub fn display_name(&self, metric: Metric) -> &str {
        self.get(metric)
            .map_or(metric.default_display_name(), |s| s.name.as_str())
    }

    /// Unit label for a metric, falling back to the built-in unit
    #[must_use]
    pub fn unit(&self, metric: Metric) -> &str {
        self.get(metric).map_or(metric.default_unit(), |s| s.unit.as_str())
    }

    /// Iterate over all defined standards
    pub fn iter(&self) -> impl Iterator<Item = (Metric, &VitalStandard)> {
        self.by_metric.iter().map(|(metric, standard)| (*metric, standard))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_metric.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_metric.is_empty()
    }
}
