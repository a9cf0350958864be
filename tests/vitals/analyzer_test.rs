#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use health_assist::algorithm::vitals::{VitalStatus, analyze_vitals};
    use health_assist::models::{Metric, VitalReading, VitalStandard, VitalStandards};
    use health_assist::utils::test::sample_readings;
    use proptest::prelude::*;
    use std::collections::BTreeMap;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    fn sugar_only() -> VitalStandards {
        let mut table = BTreeMap::new();
        table.insert(Metric::Sugar, VitalStandard::new(70.0, 140.0, "mg/dL", "Blood Sugar"));
        VitalStandards::new(table).unwrap()
    }

    #[test]
    fn test_empty_readings_have_no_analysis() {
        assert!(analyze_vitals(&[], &VitalStandards::report_defaults()).is_none());
    }

    #[test]
    fn test_average_on_upper_bound_is_normal() {
        let readings = [
            VitalReading::new(day(1)).with_sugar(150.0),
            VitalReading::new(day(2)).with_sugar(130.0),
        ];
        let analysis = analyze_vitals(&readings, &sugar_only()).unwrap();
        let sugar = analysis.get(Metric::Sugar).unwrap();
        assert_eq!(sugar.average, 140.0);
        assert_eq!(sugar.status, VitalStatus::Normal);
    }

    #[test]
    fn test_average_above_range_is_high() {
        let readings = [
            VitalReading::new(day(1)).with_sugar(150.0),
            VitalReading::new(day(2)).with_sugar(150.0),
        ];
        let analysis = analyze_vitals(&readings, &sugar_only()).unwrap();
        let sugar = analysis.get(Metric::Sugar).unwrap();
        assert_eq!(sugar.average, 150.0);
        assert_eq!(sugar.status, VitalStatus::High);
    }

    #[test]
    fn test_metric_without_standard_is_recorded() {
        let readings = [VitalReading::new(day(1)).with_pulse(40).with_sugar(100.0)];
        let analysis = analyze_vitals(&readings, &sugar_only()).unwrap();
        assert_eq!(analysis.get(Metric::Pulse).unwrap().status, VitalStatus::Recorded);
        assert_eq!(analysis.get(Metric::Sugar).unwrap().status, VitalStatus::Normal);
    }

    #[test]
    fn test_unrecorded_metrics_are_absent() {
        let readings = [VitalReading::new(day(1)), VitalReading::new(day(2)).with_weight(80.0)];
        let analysis = analyze_vitals(&readings, &VitalStandards::report_defaults()).unwrap();
        assert_eq!(analysis.record_count, 2);
        assert_eq!(analysis.metrics.keys().copied().collect::<Vec<_>>(), vec![Metric::Weight]);
        assert!(analysis.get(Metric::Sugar).is_none());
    }

    #[test]
    fn test_sample_week() {
        let analysis = analyze_vitals(&sample_readings(), &VitalStandards::report_defaults()).unwrap();
        let sugar = analysis.get(Metric::Sugar).unwrap();
        assert_eq!(sugar.average, 155.0);
        assert_eq!((sugar.min, sugar.max), (150.0, 160.0));
        assert_eq!(sugar.dates, vec![day(2), day(4), day(6)]);

        let weight = analysis.get(Metric::Weight).unwrap();
        assert_eq!(weight.values, vec![80.0, 79.0]);
        assert_eq!(weight.status, VitalStatus::Recorded);

        let out_of_range: Vec<_> = analysis.out_of_range().map(|(metric, _)| metric).collect();
        assert_eq!(out_of_range, vec![Metric::Sugar]);
    }

    #[test]
    fn test_analysis_is_deterministic() {
        let standards = VitalStandards::report_defaults();
        let first = analyze_vitals(&sample_readings(), &standards);
        let second = analyze_vitals(&sample_readings(), &standards);
        assert_eq!(first, second);
    }

    proptest! {
        #[test]
        fn prop_non_empty_readings_always_analysed(
            values in proptest::collection::vec(proptest::option::of(40.0f64..300.0), 1..20),
        ) {
            let readings: Vec<_> = values
                .iter()
                .enumerate()
                .map(|(i, value)| {
                    let mut reading = VitalReading::new(day(1 + i as u32));
                    reading.sugar = *value;
                    reading
                })
                .collect();

            let analysis = analyze_vitals(&readings, &sugar_only());
            prop_assert!(analysis.is_some());
            let analysis = analysis.unwrap();
            prop_assert_eq!(analysis.record_count, readings.len());

            let present: Vec<f64> = values.iter().flatten().copied().collect();
            match analysis.get(Metric::Sugar) {
                Some(sugar) => {
                    prop_assert_eq!(&sugar.values, &present);
                    prop_assert!(sugar.min <= sugar.average + 1e-9);
                    prop_assert!(sugar.average <= sugar.max + 1e-9);
                }
                None => prop_assert!(present.is_empty()),
            }
        }
    }
}
