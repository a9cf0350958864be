//! Plain-text vitals report
//!
//! This module renders a [`VitalAnalysis`] as the summary shown to the user for a
//! weekly or monthly report.

use crate::algorithm::vitals::recommendation::recommendation;
use crate::algorithm::vitals::types::VitalAnalysis;
use crate::models::standard::VitalStandards;
use crate::utils::period::{DateWindow, ReportPeriod};

/// Text shown when the window holds no readings
pub const NO_DATA_MESSAGE: &str = "No vitals data recorded for this period.";

/// Disclaimer appended to every report
pub const DISCLAIMER: &str =
    "This report is not a medical diagnosis. Consult a qualified healthcare professional.";

/// Render a vitals report
///
/// `analysis` is `None` when the window held no readings; the report then says so
/// instead of listing metrics.
#[must_use]
pub fn render_report(
    user_name: &str,
    period: ReportPeriod,
    window: &DateWindow,
    analysis: Option<&VitalAnalysis>,
    standards: &VitalStandards,
) -> String {
    let mut report = String::new();
    report.push_str(&format!("Health Report - {period}\n"));
    report.push_str(&format!("  User: {user_name}\n"));
    report.push_str(&format!("  Period: {window}\n"));

    let Some(analysis) = analysis else {
        report.push_str(&format!("\n{NO_DATA_MESSAGE}\n"));
        return report;
    };

    report.push_str(&format!("  Records Analysed: {}\n", analysis.record_count));

    if analysis.metrics.is_empty() {
        report.push_str(&format!("\n{NO_DATA_MESSAGE}\n"));
    }

    for (metric, summary) in &analysis.metrics {
        let unit = standards.unit(*metric);
        report.push_str(&format!(
            "\n{}: {}\n",
            standards.display_name(*metric),
            summary.status
        ));
        report.push_str(&format!("  Average: {:.1} {unit}\n", summary.average));
        report.push_str(&format!(
            "  Range: {:.1} - {:.1} {unit}\n",
            summary.min, summary.max
        ));
        report.push_str(&format!("  Readings: {}\n", summary.sample_count()));

        if let Some(standard) = standards.get(*metric) {
            report.push_str(&format!(
                "  Standard Range: {} - {} {unit}\n",
                standard.min, standard.max
            ));
        }

        if summary.status.is_out_of_range() {
            report.push_str(&format!(
                "  Recommendation: {}\n",
                recommendation(*metric, summary.status)
            ));
        }
    }

    report.push_str(&format!("\n{DISCLAIMER}\n"));
    report
}
