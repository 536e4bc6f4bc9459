//! Color normalization: free-text color strings to canonical tokens.
//!
//! Normalization is total and idempotent. Matching runs in three tiers:
//! exact canonical token, exact synonym, then a substring fallback in either
//! direction. The fallback scans colors in `CanonicalColor::ALL` declaration
//! order and the first match wins, which makes ambiguous input deterministic.
//! Input that matches nothing is returned lower-cased and trimmed; it then
//! carries zero weight through every downstream scorer.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::analysis::reference::CanonicalColor;
use crate::analysis::types::{ColorPreferences, ColorRanking};

/// Exact-match index over canonical tokens and synonyms. Built in declaration
/// order with first-writer-wins so that a word listed under two colors (e.g.
/// "amber") resolves to the earlier one.
static SYNONYM_INDEX: Lazy<HashMap<&'static str, CanonicalColor>> = Lazy::new(|| {
    let mut index = HashMap::new();
    for color in CanonicalColor::ALL {
        for synonym in color.synonyms() {
            index.entry(*synonym).or_insert(color);
        }
    }
    index
});

/// Normalize a raw color string to a canonical token.
///
/// Empty or whitespace-only input yields an empty string. Unrecognized input
/// is returned lower-cased and trimmed rather than rejected; normalization
/// never fails.
pub fn normalize(raw: &str) -> String {
    let folded = raw.trim().to_lowercase();
    if folded.is_empty() {
        return String::new();
    }

    if let Some(color) = CanonicalColor::from_token(&folded) {
        return color.as_str().to_string();
    }

    if let Some(color) = SYNONYM_INDEX.get(folded.as_str()) {
        return color.as_str().to_string();
    }

    // Substring fallback: "navy blue" contains the synonym "navy", and "nav"
    // is contained in it. First match in declaration order wins.
    for color in CanonicalColor::ALL {
        for synonym in color.synonyms() {
            if synonym.contains(&folded) || folded.contains(synonym) {
                return color.as_str().to_string();
            }
        }
    }

    folded
}

/// Whether a token is an exact canonical token or an exact synonym.
///
/// Deliberately narrower than [`normalize`]: a string that would only
/// fuzzy-match is not yet normalized.
pub fn is_recognized(token: &str) -> bool {
    SYNONYM_INDEX.contains_key(token)
}

/// Whether an input already consists entirely of recognized tokens, so a
/// second normalization pass can be skipped.
///
/// Checks the primary color and every explicit ranking entry; a ranking still
/// in comma-separated string form is never considered processed.
pub fn is_processed(prefs: &ColorPreferences) -> bool {
    if let Some(primary) = &prefs.primary_color {
        if !is_recognized(&primary.to_lowercase()) {
            return false;
        }
    }

    match &prefs.color_ranking {
        Some(ColorRanking::List(colors)) => colors
            .iter()
            .all(|color| is_recognized(&color.to_lowercase())),
        Some(ColorRanking::Csv(_)) => false,
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_tokens_pass_through() {
        for color in CanonicalColor::ALL {
            assert_eq!(normalize(color.as_str()), color.as_str());
        }
    }

    #[test]
    fn test_exact_synonyms() {
        assert_eq!(normalize("crimson"), "red");
        assert_eq!(normalize("navy"), "blue");
        assert_eq!(normalize("grey"), "gray");
        assert_eq!(normalize("violet"), "purple");
    }

    #[test]
    fn test_case_and_whitespace_folding() {
        assert_eq!(normalize("  Navy  "), "blue");
        assert_eq!(normalize("CRIMSON"), "red");
    }

    #[test]
    fn test_substring_fallback() {
        assert_eq!(normalize("Navy Blue"), "blue");
        assert_eq!(normalize("Forest Green"), "green");
        assert_eq!(normalize("dark charcoal"), "black");
    }

    #[test]
    fn test_ambiguous_synonym_resolves_in_declaration_order() {
        // "amber" is listed under both yellow and orange; yellow is declared
        // first.
        assert_eq!(normalize("amber"), "yellow");
    }

    #[test]
    fn test_unrecognized_input_passes_through_folded() {
        assert_eq!(normalize("  Turquoise "), "turquoise");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for input in ["Navy Blue", "crimson", "blue", "Turquoise", "", "AMBER"] {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "not idempotent for {:?}", input);
        }
    }

    #[test]
    fn test_is_processed() {
        let processed = ColorPreferences {
            primary_color: Some("blue".to_string()),
            color_ranking: Some(ColorRanking::List(vec![
                "blue".to_string(),
                "green".to_string(),
            ])),
            ..Default::default()
        };
        assert!(is_processed(&processed));

        let fuzzy = ColorPreferences {
            primary_color: Some("navy blue".to_string()),
            ..Default::default()
        };
        assert!(!is_processed(&fuzzy));

        let csv = ColorPreferences {
            color_ranking: Some(ColorRanking::Csv("blue, green".to_string())),
            ..Default::default()
        };
        assert!(!is_processed(&csv));

        assert!(is_processed(&ColorPreferences::default()));
    }
}
