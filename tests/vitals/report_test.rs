#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use health_assist::algorithm::vitals::feedback::{ALL_NORMAL_MESSAGE, feedback_message};
    use health_assist::algorithm::vitals::report::{DISCLAIMER, NO_DATA_MESSAGE};
    use health_assist::algorithm::vitals::{VitalStatus, analyze_vitals, assess_entry, render_report};
    use health_assist::models::{Metric, VitalReading, VitalStandards};
    use health_assist::utils::test::{sample_readings, sample_window};
    use health_assist::ReportPeriod;

    #[test]
    fn test_weekly_report() {
        let standards = VitalStandards::report_defaults();
        let analysis = analyze_vitals(&sample_readings(), &standards);
        let report = render_report(
            "Asha",
            ReportPeriod::Weekly,
            &sample_window(),
            analysis.as_ref(),
            &standards,
        );

        assert!(report.starts_with("Health Report - Weekly\n  User: Asha\n"));
        assert!(report.contains("Period: 2024-03-01 to 2024-03-08"));
        assert!(report.contains("Records Analysed: 3"));
        assert!(report.contains("Blood Pressure (Systolic): Normal"));
        assert!(report.contains("Blood Sugar: High"));
        assert!(report.contains("Recommendation: Your blood sugar is elevated"));
        assert_eq!(report.matches("Recommendation:").count(), 1);
        assert!(report.trim_end().ends_with(DISCLAIMER));
    }

    #[test]
    fn test_report_for_empty_window() {
        let standards = VitalStandards::report_defaults();
        let report = render_report("Asha", ReportPeriod::Monthly, &sample_window(), None, &standards);
        assert!(report.contains(NO_DATA_MESSAGE));
        assert!(!report.contains("Average"));
    }

    #[test]
    fn test_daily_entry_feedback() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        let standards = VitalStandards::daily_entry_defaults();

        let healthy = VitalReading::new(date).with_blood_pressure(110, 70).with_sleep_hours(8.0);
        assert_eq!(feedback_message(&assess_entry(&healthy, &standards)), ALL_NORMAL_MESSAGE);

        let tired = VitalReading::new(date).with_sleep_hours(6.0).with_blood_pressure(85, 70);
        let feedback = assess_entry(&tired, &standards);
        let metrics: Vec<_> = feedback.iter().map(|f| (f.metric, f.status)).collect();
        assert_eq!(
            metrics,
            vec![(Metric::BpSystolic, VitalStatus::Low), (Metric::SleepHours, VitalStatus::Low)]
        );
    }
}
