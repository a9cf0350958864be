//! Status classification for vital averages

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::standard::VitalStandard;

/// Classification of a metric against its normal range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VitalStatus {
    /// Below the normal range
    Low,
    /// Inside the normal range (bounds inclusive)
    Normal,
    /// Above the normal range
    High,
    /// No standard is defined for the metric
    Recorded,
}

impl VitalStatus {
    /// Get a descriptive name for this status
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Normal => "Normal",
            Self::High => "High",
            Self::Recorded => "Recorded",
        }
    }

    /// Whether the value lies outside its normal range
    #[must_use]
    pub const fn is_out_of_range(self) -> bool {
        matches!(self, Self::Low | Self::High)
    }
}

impl fmt::Display for VitalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Classify a value against an optional standard
///
/// Values below `min` are Low, values above `max` are High, anything else is
/// Normal. Without a standard the value is only Recorded.
#[must_use]
pub fn classify(value: f64, standard: Option<&VitalStandard>) -> VitalStatus {
    match standard {
        None => VitalStatus::Recorded,
        Some(standard) if value < standard.min => VitalStatus::Low,
        Some(standard) if value > standard.max => VitalStatus::High,
        Some(_) => VitalStatus::Normal,
    }
}
