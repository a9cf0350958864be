//! Instant feedback for a single day's vitals entry
//!
//! Unlike the window analysis, each recorded value is checked on its own right
//! after the user saves an entry.

use std::fmt;

use itertools::Itertools;

use crate::algorithm::vitals::status::{VitalStatus, classify};
use crate::models::metric::Metric;
use crate::models::reading::VitalReading;
use crate::models::standard::VitalStandards;

/// Message shown when every recorded value is in range
pub const ALL_NORMAL_MESSAGE: &str = "All your vitals are in the normal range. Great job!";

/// One out-of-range value of a daily entry
#[derive(Debug, Clone, PartialEq)]
pub struct EntryFeedback {
    /// Metric the value belongs to
    pub metric: Metric,
    /// The recorded value
    pub value: f64,
    /// Low or High
    pub status: VitalStatus,
    /// User-facing message
    pub message: String,
}

impl fmt::Display for EntryFeedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Check every recorded value of a reading against its standard
///
/// Only values outside their range produce feedback; an empty result means the
/// entry is entirely in range. Metrics without a standard are not checked.
#[must_use]
pub fn assess_entry(reading: &VitalReading, standards: &VitalStandards) -> Vec<EntryFeedback> {
    reading
        .recorded()
        .filter_map(|(metric, value)| {
            let standard = standards.get(metric)?;
            let status = classify(value, Some(standard));
            if !status.is_out_of_range() {
                return None;
            }

            let message = match (metric, status) {
                (Metric::SleepHours, VitalStatus::High) => format!(
                    "You slept {value} hours. You might be oversleeping; {}-{} hours is ideal.",
                    standard.min, standard.max
                ),
                (Metric::SleepHours, _) => format!(
                    "You slept {value} hours. Recommended: {}-{} hours.",
                    standard.min, standard.max
                ),
                _ => format!(
                    "Your {} ({value}) is {}.",
                    entry_label(metric),
                    status.description().to_lowercase()
                ),
            };

            Some(EntryFeedback {
                metric,
                value,
                status,
                message,
            })
        })
        .collect()
}

/// Join entry feedback into the text shown to the user
#[must_use]
pub fn feedback_message(feedback: &[EntryFeedback]) -> String {
    if feedback.is_empty() {
        ALL_NORMAL_MESSAGE.to_string()
    } else {
        feedback.iter().map(|f| f.message.as_str()).join("\n")
    }
}

const fn entry_label(metric: Metric) -> &'static str {
    match metric {
        Metric::BpSystolic => "systolic BP",
        Metric::BpDiastolic => "diastolic BP",
        Metric::Sugar => "blood sugar",
        Metric::Weight => "weight",
        Metric::Pulse => "pulse",
        Metric::SleepHours => "sleep",
    }
}
