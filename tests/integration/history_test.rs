#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};
    use health_assist::algorithm::symptom::match_symptoms;
    use health_assist::utils::test::flu_and_cold_catalog;
    use health_assist::{HistoryStore, InMemoryHistory, JsonlHistoryStore, SymptomCheckRecord};

    fn check(store: &mut dyn HistoryStore, user_id: u64, minutes: i64, symptoms: &[&str]) {
        let catalog = flu_and_cold_catalog();
        let matches = match_symptoms(&catalog, symptoms).unwrap();
        let timestamp = Utc.with_ymd_and_hms(2024, 10, 1, 8, 0, 0).unwrap() + Duration::minutes(minutes);
        store
            .append(SymptomCheckRecord::new(user_id, timestamp, symptoms, &matches, 3))
            .unwrap();
    }

    fn exercise_store(store: &mut dyn HistoryStore) {
        check(store, 1, 0, &["fever"]);
        check(store, 2, 1, &["sneeze"]);
        check(store, 1, 2, &["fever", "cough"]);
        check(store, 1, 3, &["cough"]);

        let recent = store.recent(1, 2).unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].symptoms, "cough");
        assert_eq!(recent[0].top_matches, "Cold (100%), Flu (100%)");
        assert_eq!(recent[1].symptoms, "fever, cough");
        assert_eq!(recent[1].top_matches, "Flu (100%), Cold (50%)");

        let all = store.recent_default(1).unwrap();
        assert_eq!(all.len(), 3);
        assert!(all.windows(2).all(|pair| pair[0].timestamp >= pair[1].timestamp));
        assert!(all.iter().all(|record| record.user_id == 1));

        assert!(store.recent(3, 10).unwrap().is_empty());
        assert!(store.recent(1, 0).unwrap().is_empty());
    }

    #[test]
    fn test_in_memory_history() {
        let mut store = InMemoryHistory::new();
        exercise_store(&mut store);
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn test_jsonl_history() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.jsonl");
        let mut store = JsonlHistoryStore::new(&path);
        exercise_store(&mut store);

        let reopened = JsonlHistoryStore::new(&path);
        assert_eq!(reopened.read_all().unwrap().len(), 4);
        assert_eq!(reopened.recent(2, 5).unwrap()[0].top_matches, "Cold (100%)");
    }

    #[test]
    fn test_missing_history_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonlHistoryStore::new(dir.path().join("none.jsonl"));
        assert!(store.recent_default(1).unwrap().is_empty());
    }
}
