//! Core vitals analysis implementation

use std::collections::BTreeMap;

use log::debug;

use crate::algorithm::vitals::status::classify;
use crate::algorithm::vitals::types::{MetricSummary, VitalAnalysis};
use crate::models::metric::Metric;
use crate::models::reading::VitalReading;
use crate::models::standard::VitalStandards;

/// Aggregate readings into per-metric statistics
///
/// Returns `None` when there are no readings at all. Otherwise every metric with
/// at least one present value gets its mean, minimum and maximum, and the mean is
/// classified against `standards`. Metrics never recorded in the window are left
/// out rather than reported as zero.
#[must_use]
pub fn analyze_vitals(readings: &[VitalReading], standards: &VitalStandards) -> Option<VitalAnalysis> {
    if readings.is_empty() {
        return None;
    }

    let metrics: BTreeMap<Metric, MetricSummary> = Metric::ALL
        .into_iter()
        .filter_map(|metric| summarize_metric(readings, metric, standards).map(|s| (metric, s)))
        .collect();

    debug!(
        "Analysed {} readings: {} metrics recorded",
        readings.len(),
        metrics.len()
    );

    Some(VitalAnalysis {
        record_count: readings.len(),
        metrics,
    })
}

fn summarize_metric(
    readings: &[VitalReading],
    metric: Metric,
    standards: &VitalStandards,
) -> Option<MetricSummary> {
    let (dates, values): (Vec<_>, Vec<_>) = readings
        .iter()
        .filter_map(|reading| reading.value(metric).map(|value| (reading.date, value)))
        .unzip();

    if values.is_empty() {
        return None;
    }

    let average = values.iter().sum::<f64>() / values.len() as f64;
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    Some(MetricSummary {
        average,
        min,
        max,
        status: classify(average, standards.get(metric)),
        values,
        dates,
    })
}
