//! Report periods and date windows
//!
//! This module provides the inclusive date windows used to select readings for
//! weekly and monthly vitals reports.

use std::fmt;
use std::str::FromStr;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{HealthError, Result};

/// Inclusive range of calendar days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DateWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateWindow {
    /// Create a window from `start` to `end`, both inclusive
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(HealthError::invalid_input(format!(
                "Date window starts ({start}) after it ends ({end})"
            )));
        }
        Ok(Self { start, end })
    }

    /// First day of the window
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the window
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Check if this window contains the given date
    #[must_use]
    pub fn contains(&self, date: &NaiveDate) -> bool {
        &self.start <= date && date <= &self.end
    }
}

impl fmt::Display for DateWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

/// Length of the window covered by a vitals report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportPeriod {
    /// The last 7 days
    #[default]
    Weekly,
    /// The last 30 days
    Monthly,
}

impl ReportPeriod {
    /// Number of days looked back from the end date
    #[must_use]
    pub const fn days(self) -> u64 {
        match self {
            Self::Weekly => 7,
            Self::Monthly => 30,
        }
    }

    /// Human-readable name of this period
    #[must_use]
    pub const fn display(self) -> &'static str {
        match self {
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
        }
    }

    /// Window ending on `today`, starting [`days`](Self::days) days earlier
    #[must_use]
    pub fn window_ending(self, today: NaiveDate) -> DateWindow {
        let start = today
            .checked_sub_days(Days::new(self.days()))
            .unwrap_or(NaiveDate::MIN);
        DateWindow { start, end: today }
    }
}

impl fmt::Display for ReportPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display())
    }
}

impl FromStr for ReportPeriod {
    type Err = HealthError;

    /// Parse a string into a `ReportPeriod`
    ///
    /// Supported values: "weekly"/"week" and "monthly"/"month", in any case.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "weekly" | "week" => Ok(Self::Weekly),
            "monthly" | "month" => Ok(Self::Monthly),
            other => Err(HealthError::invalid_input(format!(
                "Invalid report period: {other}"
            ))),
        }
    }
}
