#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use chrono::{NaiveDate, TimeZone, Utc};
    use health_assist::algorithm::symptom::normalize_query;
    use health_assist::{
        AssistantConfig, HistoryStore, JsonlHistoryStore, ReadingSource, ReportPeriod,
        SymptomCheckRecord, SymptomMatcher, VitalStatus, analyze_vitals, load_catalog,
        load_readings, parse_symptom_input, render_report,
    };
    use health_assist::models::Metric;
    use health_assist::utils::logging::{DEFAULT_LOG_FILTER, init_logging};

    fn write_fixtures(dir: &Path) {
        fs::write(
            dir.join("catalog.json"),
            r#"[
                {"disease": "Flu", "symptoms": ["Fever", "Cough", "Body Ache"],
                 "description": "Viral infection.", "precautions": ["rest", "fluids"]},
                {"disease": "Migraine", "symptoms": ["headache", "nausea"]}
            ]"#,
        )
        .unwrap();
        fs::write(
            dir.join("vitals.json"),
            r#"[
                {"user_id": 5, "date": "2024-08-26", "sugar": 120.0, "pulse": 110},
                {"user_id": 5, "date": "2024-08-28", "sugar": 100.0, "pulse": 104},
                {"user_id": 5, "date": "2024-07-01", "sugar": 300.0}
            ]"#,
        )
        .unwrap();
        fs::write(
            dir.join("config.json"),
            format!(
                r#"{{"catalog_path": {:?}, "readings_path": {:?}, "history": {{"path": {:?}}}}}"#,
                dir.join("catalog.json"),
                dir.join("vitals.json"),
                dir.join("history.jsonl"),
            ),
        )
        .unwrap();
    }

    #[test]
    fn test_logging_setup_is_exported() {
        assert_eq!(DEFAULT_LOG_FILTER, "info");
        init_logging(DEFAULT_LOG_FILTER);
        init_logging(DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_check_and_record() {
        let dir = tempfile::tempdir().unwrap();
        write_fixtures(dir.path());
        let config = AssistantConfig::from_file(&dir.path().join("config.json")).unwrap();

        let catalog = load_catalog(&config.catalog_path).unwrap();
        let matcher = SymptomMatcher::new(&catalog, config.matcher.clone());
        let query = parse_symptom_input("fever, body-ache\nheadache");
        let matches = matcher.matches(&query).unwrap();

        assert_eq!(matches[0].disease, "Flu");
        assert_eq!(matches[0].matched_count, 2);
        assert_eq!(matches[1].disease, "Migraine");

        let mut store = JsonlHistoryStore::new(&config.history.path);
        let timestamp = Utc.with_ymd_and_hms(2024, 8, 30, 7, 45, 0).unwrap();
        store
            .append(SymptomCheckRecord::new(
                5,
                timestamp,
                &normalize_query(&query),
                &matches,
                config.matcher.summary_limit,
            ))
            .unwrap();

        let history = JsonlHistoryStore::new(&config.history.path).recent_default(5).unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].symptoms, "fever, body_ache, headache");
        assert_eq!(history[0].top_matches, "Flu (67%), Migraine (33%)");
    }

    #[test]
    fn test_weekly_report_from_files() {
        let dir = tempfile::tempdir().unwrap();
        write_fixtures(dir.path());
        let config = AssistantConfig::from_file(&dir.path().join("config.json")).unwrap();

        let collection = load_readings(&config.readings_path).unwrap();
        let standards = health_assist::VitalStandards::report_defaults();
        let today = NaiveDate::from_ymd_opt(2024, 8, 30).unwrap();
        let window = config.default_period.window_ending(today);
        assert_eq!(config.default_period, ReportPeriod::Weekly);

        let readings = collection.readings_between(5, &window).unwrap();
        let analysis = analyze_vitals(&readings, &standards).unwrap();
        assert_eq!(analysis.record_count, 2);
        assert_eq!(analysis.get(Metric::Sugar).unwrap().status, VitalStatus::Normal);
        assert_eq!(analysis.get(Metric::Pulse).unwrap().status, VitalStatus::High);

        let report = render_report("Ravi", ReportPeriod::Weekly, &window, Some(&analysis), &standards);
        assert!(report.contains("Period: 2024-08-23 to 2024-08-30"));
        assert!(report.contains("Pulse Rate: High"));
        assert!(report.contains("Average: 107.0 bpm"));
        assert!(report.contains("Recommendation: Your pulse rate is elevated"));
    }
}
