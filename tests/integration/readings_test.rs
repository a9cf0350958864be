#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use health_assist::models::ReadingRecord;
    use health_assist::{DateWindow, ReadingCollection, ReadingSource, ReportPeriod, VitalReading};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, d).unwrap()
    }

    fn collection() -> ReadingCollection {
        let records = [
            (1, VitalReading::new(day(20)).with_pulse(70)),
            (1, VitalReading::new(day(3)).with_pulse(72)),
            (2, VitalReading::new(day(10)).with_pulse(90)),
            (1, VitalReading::new(day(12)).with_pulse(64)),
            (1, VitalReading::new(day(28)).with_pulse(66)),
        ];
        ReadingCollection::from_records(
            records
                .into_iter()
                .map(|(user_id, reading)| ReadingRecord { user_id, reading }),
        )
    }

    #[test]
    fn test_window_returns_in_range_oldest_first() {
        let window = DateWindow::new(day(3), day(20)).unwrap();
        let readings = collection().readings_between(1, &window).unwrap();
        let dates: Vec<_> = readings.iter().map(|r| r.date).collect();
        assert_eq!(dates, vec![day(3), day(12), day(20)]);
    }

    #[test]
    fn test_weekly_window_is_inclusive() {
        let window = ReportPeriod::Weekly.window_ending(day(27));
        assert_eq!(window.start(), day(20));
        let readings = collection().readings_between(1, &window).unwrap();
        assert_eq!(readings.len(), 1);
        assert_eq!(readings[0].pulse, Some(70));
    }

    #[test]
    fn test_other_users_are_excluded() {
        let window = ReportPeriod::Monthly.window_ending(day(31));
        assert!(collection().readings_between(3, &window).unwrap().is_empty());
        assert_eq!(collection().readings_between(2, &window).unwrap().len(), 1);
    }

    #[test]
    fn test_upsert_replaces_same_day() {
        let mut readings = collection();
        let replaced = readings.upsert(1, VitalReading::new(day(12)).with_pulse(61));
        assert_eq!(replaced.unwrap().pulse, Some(64));
        assert_eq!(readings.count_for(1), 4);
        assert_eq!(readings.get(1, day(12)).unwrap().pulse, Some(61));
    }
}
