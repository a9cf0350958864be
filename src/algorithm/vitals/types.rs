//! Type definitions for vitals analysis

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::algorithm::vitals::status::VitalStatus;
use crate::models::metric::Metric;

/// Statistics for one metric over the analysed window
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricSummary {
    /// Arithmetic mean of the present values
    pub average: f64,
    /// Smallest present value
    pub min: f64,
    /// Largest present value
    pub max: f64,
    /// Classification of the average
    pub status: VitalStatus,
    /// Present values, oldest first
    pub values: Vec<f64>,
    /// Dates of the present values, aligned with `values`
    pub dates: Vec<NaiveDate>,
}

impl MetricSummary {
    /// Number of days the metric was recorded
    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.values.len()
    }
}

/// Result of analysing a window of readings
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VitalAnalysis {
    /// Number of readings analysed
    pub record_count: usize,
    /// Statistics for every metric with at least one present value
    pub metrics: BTreeMap<Metric, MetricSummary>,
}

impl VitalAnalysis {
    /// Summary for a metric, if it was recorded in the window
    #[must_use]
    pub fn get(&self, metric: Metric) -> Option<&MetricSummary> {
        self.metrics.get(&metric)
    }

    /// Metrics whose average falls outside the normal range
    pub fn out_of_range(&self) -> impl Iterator<Item = (Metric, &MetricSummary)> {
        self.metrics
            .iter()
            .filter(|(_, summary)| summary.status.is_out_of_range())
            .map(|(metric, summary)| (*metric, summary))
    }
}
