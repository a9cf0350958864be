//! Daily vital reading model
//!
//! A reading holds the values one user recorded for one day. Any metric may be
//! missing when it was not recorded that day.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::UserId;
use crate::models::metric::Metric;

/// One day's vital values for a single user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VitalReading {
    /// Day the values were recorded
    pub date: NaiveDate,
    /// Hours slept
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sleep_hours: Option<f64>,
    /// Systolic blood pressure (mmHg)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bp_systolic: Option<u16>,
    /// Diastolic blood pressure (mmHg)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bp_diastolic: Option<u16>,
    /// Blood sugar (mg/dL)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sugar: Option<f64>,
    /// Body weight (kg)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Pulse rate (bpm)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pulse: Option<u16>,
}

impl VitalReading {
    /// Create an empty reading for the given day
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self {
            date,
            sleep_hours: None,
            bp_systolic: None,
            bp_diastolic: None,
            sugar: None,
            weight: None,
            pulse: None,
        }
    }

    /// Get the recorded value of a metric, if present
    #[must_use]
    pub fn value(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::BpSystolic => self.bp_systolic.map(f64::from),
            Metric::BpDiastolic => self.bp_diastolic.map(f64::from),
            Metric::Sugar => self.sugar,
            Metric::Weight => self.weight,
            Metric::Pulse => self.pulse.map(f64::from),
            Metric::SleepHours => self.sleep_hours,
        }
    }

    /// Iterate over the metrics recorded in this reading
    pub fn recorded(&self) -> impl Iterator<Item = (Metric, f64)> + '_ {
        Metric::ALL
            .into_iter()
            .filter_map(|metric| self.value(metric).map(|value| (metric, value)))
    }

    /// Whether no metric was recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recorded().next().is_none()
    }

    #[must_use]
    pub const fn with_sleep_hours(mut self, hours: f64) -> Self {
        self.sleep_hours = Some(hours);
        self
    }

    #[must_use]
    pub const fn with_blood_pressure(mut self, systolic: u16, diastolic: u16) -> Self {
        self.bp_systolic = Some(systolic);
        self.bp_diastolic = Some(diastolic);
        self
    }

    #[must_use]
    pub const fn with_sugar(mut self, sugar: f64) -> Self {
        self.sugar = Some(sugar);
        self
    }

    #[must_use]
    pub const fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    #[must_use]
    pub const fn with_pulse(mut self, pulse: u16) -> Self {
        self.pulse = Some(pulse);
        self
    }
}

/// A reading tagged with its owner, as stored in reading files
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadingRecord {
    /// Owner of the reading
    pub user_id: UserId,
    /// The reading itself
    #[serde(flatten)]
    pub reading: VitalReading,
}
