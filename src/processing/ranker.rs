//! Deterministic ordering of raw engine matches.

use std::cmp::Ordering;

use crate::types::{DetectionResult, RawMatch};

/// Convert raw engine matches into ranked detection results.
///
/// Malformed matches are skipped rather than propagated. The sort is
/// stable: probability descending, then reliable matches before
/// unreliable ones, then original relative order.
pub fn rank(raw_matches: Vec<RawMatch>) -> Vec<DetectionResult> {
    let mut results: Vec<DetectionResult> = raw_matches
        .into_iter()
        .filter_map(DetectionResult::from_raw)
        .collect();

    results.sort_by(|a, b| {
        // Probabilities come from clamped integer percentages, so they
        // are always finite and comparable.
        b.probability
            .partial_cmp(&a.probability)
            .unwrap_or(Ordering::Equal)
            .then_with(|| b.confidence.cmp(&a.confidence))
    });

    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(code: &str, reliable: bool, percent: u8) -> RawMatch {
        RawMatch::new(code, code.to_uppercase().as_str(), reliable, percent)
    }

    fn codes(results: &[DetectionResult]) -> Vec<&str> {
        results.iter().map(|r| r.language_code.as_str()).collect()
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert!(rank(Vec::new()).is_empty());
    }

    #[test]
    fn test_orders_by_probability_descending() {
        let ranked = rank(vec![
            raw("fr", true, 30),
            raw("en", true, 90),
            raw("de", true, 60),
        ]);

        assert_eq!(codes(&ranked), vec!["en", "de", "fr"]);
        for pair in ranked.windows(2) {
            assert!(pair[0].probability >= pair[1].probability);
        }
    }

    #[test]
    fn test_reliable_match_wins_probability_tie() {
        let ranked = rank(vec![raw("fr", false, 80), raw("en", true, 80)]);

        assert_eq!(codes(&ranked), vec!["en", "fr"]);
    }

    #[test]
    fn test_full_ties_keep_original_order() {
        let ranked = rank(vec![
            raw("pt", true, 50),
            raw("es", true, 50),
            raw("it", true, 50),
        ]);

        assert_eq!(codes(&ranked), vec!["pt", "es", "it"]);
    }

    #[test]
    fn test_rank_is_idempotent_on_sorted_input() {
        let ranked = rank(vec![
            raw("en", true, 80),
            raw("fr", false, 80),
            raw("de", true, 20),
        ]);

        let reranked = rank(
            ranked
                .iter()
                .map(|r| {
                    RawMatch::new(
                        &r.language_code,
                        &r.language_name,
                        r.confidence,
                        (r.probability * 100.0).round() as u8,
                    )
                })
                .collect(),
        );

        assert_eq!(reranked, ranked);
    }

    #[test]
    fn test_skips_malformed_matches() {
        let ranked = rank(vec![raw("en", true, 90), raw("", true, 95)]);

        assert_eq!(codes(&ranked), vec!["en"]);
    }

    #[test]
    fn test_converts_percentage_to_probability() {
        let ranked = rank(vec![raw("en", true, 73)]);

        assert!((ranked[0].probability - 0.73).abs() < f64::EPSILON);
    }
}
