//! Summaries of symptom match results

use itertools::Itertools;

use crate::models::symptom::DiseaseMatch;

/// The first `limit` matches of an ordered result
#[must_use]
pub fn top_matches(matches: &[DiseaseMatch], limit: usize) -> &[DiseaseMatch] {
    &matches[..matches.len().min(limit)]
}

/// Join the best matches into a single line, e.g. `"Flu (100%), Cold (50%)"`
#[must_use]
pub fn summarize_matches(matches: &[DiseaseMatch], limit: usize) -> String {
    top_matches(matches, limit)
        .iter()
        .map(|m| format!("{} ({:.0}%)", m.disease, m.match_percentage))
        .join(", ")
}

/// Format one ranked match for display
///
/// `query_len` is the number of symptoms the user entered.
#[must_use]
pub fn format_match_line(rank: usize, m: &DiseaseMatch, query_len: usize) -> String {
    format!(
        "{rank}. {} - Match: {:.0}% ({}/{query_len} symptoms)",
        m.disease, m.match_percentage, m.matched_count
    )
}
