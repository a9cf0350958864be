//! Tracked vital metrics
//!
//! This module defines the closed set of metrics recorded once per day per user.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::HealthError;

/// A single measured health metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Systolic blood pressure (mmHg)
    BpSystolic,
    /// Diastolic blood pressure (mmHg)
    BpDiastolic,
    /// Blood sugar (mg/dL)
    Sugar,
    /// Body weight (kg)
    Weight,
    /// Pulse rate (bpm)
    Pulse,
    /// Hours slept
    SleepHours,
}

impl Metric {
    /// All metrics, in report order
    pub const ALL: [Self; 6] = [
        Self::BpSystolic,
        Self::BpDiastolic,
        Self::Sugar,
        Self::Weight,
        Self::Pulse,
        Self::SleepHours,
    ];

    /// Stable key used in data files and analysis output
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::BpSystolic => "bp_systolic",
            Self::BpDiastolic => "bp_diastolic",
            Self::Sugar => "sugar",
            Self::Weight => "weight",
            Self::Pulse => "pulse",
            Self::SleepHours => "sleep_hours",
        }
    }

    /// Display name used when no standard supplies one
    #[must_use]
    pub const fn default_display_name(self) -> &'static str {
        match self {
            Self::BpSystolic => "Blood Pressure (Systolic)",
            Self::BpDiastolic => "Blood Pressure (Diastolic)",
            Self::Sugar => "Blood Sugar",
            Self::Weight => "Weight",
            Self::Pulse => "Pulse Rate",
            Self::SleepHours => "Sleep",
        }
    }

    /// Unit label used when no standard supplies one
    #[must_use]
    pub const fn default_unit(self) -> &'static str {
        match self {
            Self::BpSystolic | Self::BpDiastolic => "mmHg",
            Self::Sugar => "mg/dL",
            Self::Weight => "kg",
            Self::Pulse => "bpm",
            Self::SleepHours => "hours",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Metric {
    type Err = HealthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|metric| metric.key() == s.trim())
            .ok_or_else(|| HealthError::validation(format!("Unknown vital metric: {s}")))
    }
}
