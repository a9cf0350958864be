#[cfg(test)]
mod tests {
    use health_assist::algorithm::symptom::{normalize_query, normalize_symptom, parse_symptom_input};
    use proptest::prelude::*;

    #[test]
    fn test_spelling_variants_normalize_identically() {
        let expected = normalize_symptom("Chest Pain");
        assert_eq!(expected, "chest_pain");
        assert_eq!(normalize_symptom("chest-pain"), expected);
        assert_eq!(normalize_symptom("  chest_pain "), expected);
        assert_eq!(normalize_symptom("CHEST \t PAIN"), expected);
    }

    #[test]
    fn test_parse_symptom_input() {
        assert_eq!(parse_symptom_input("fever,\n cough,, "), vec!["fever", "cough"]);
        assert!(parse_symptom_input(" , \n ").is_empty());
    }

    #[test]
    fn test_query_keeps_order_and_repeats() {
        let query = normalize_query(&["Cough", " ", "fever", "cough"]);
        assert_eq!(query, vec!["cough", "fever", "cough"]);
    }

    proptest! {
        #[test]
        fn prop_normalize_is_idempotent(input in "[ A-Za-z_-]{0,24}") {
            let once = normalize_symptom(&input);
            prop_assert_eq!(normalize_symptom(&once), once.clone());
        }

        #[test]
        fn prop_separator_style_is_irrelevant(
            words in proptest::collection::vec("[a-z]{1,8}", 1..4),
            sep in prop_oneof![Just(" "), Just("-"), Just("_"), Just("  ")],
        ) {
            let joined = words.join(sep);
            let upper = joined.to_uppercase();
            prop_assert_eq!(normalize_symptom(&joined), words.join("_"));
            prop_assert_eq!(normalize_symptom(&format!("  {upper} ")), words.join("_"));
        }

        #[test]
        fn prop_normalized_has_no_outer_separators(input in "\\PC{0,32}") {
            let normalized = normalize_symptom(&input);
            prop_assert!(!normalized.starts_with('_'));
            prop_assert!(!normalized.ends_with('_'));
            prop_assert!(!normalized.contains("__"));
        }
    }
}
