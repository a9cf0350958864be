//! Symptom text normalization
//!
//! Catalog symptoms and user-entered symptoms go through the same normalization so
//! that matching is an exact comparison of tokens.

/// Separator used between words of a normalized symptom
pub const TOKEN_SEPARATOR: char = '_';

/// Normalize a symptom name for matching
///
/// The name is trimmed and lowercased, and every run of whitespace, hyphens or
/// underscores becomes a single underscore. Separators at either end are dropped.
#[must_use]
pub fn normalize_symptom(symptom: &str) -> String {
    let mut token = String::with_capacity(symptom.len());
    let mut pending_separator = false;

    for c in symptom.trim().chars() {
        if c.is_whitespace() || c == '-' || c == TOKEN_SEPARATOR {
            pending_separator = true;
            continue;
        }
        if pending_separator && !token.is_empty() {
            token.push(TOKEN_SEPARATOR);
        }
        pending_separator = false;
        token.extend(c.to_lowercase());
    }

    token
}

/// Normalize every symptom of a query, dropping entries that normalize to nothing
///
/// Order and repeated entries are preserved.
#[must_use]
pub fn normalize_query<S: AsRef<str>>(query: &[S]) -> Vec<String> {
    query
        .iter()
        .map(|symptom| normalize_symptom(symptom.as_ref()))
        .filter(|token| !token.is_empty())
        .collect()
}

/// Split free-text symptom input into individual symptoms
///
/// Symptoms may be separated by commas or new lines. Entries are trimmed and
/// blank entries are removed; the original spelling is kept for display.
#[must_use]
pub fn parse_symptom_input(input: &str) -> Vec<String> {
    input
        .split([',', '\n'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
