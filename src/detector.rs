//! Detection orchestration.
//!
//! Sequences normalization, the engine call, and ranking into a single
//! operation. The detector holds no mutable state, so it is safe to
//! share across call sites whenever the engine itself is.

use std::sync::Arc;

use tracing::debug;

use crate::engine::{EncodingHint, LanguageEngine, WhatlangEngine};
use crate::error::DetectError;
use crate::processing::{ranker, TextNormalizer};
use crate::types::DetectionResult;

/// Language detector composing the normalizer, an engine, and the ranker.
pub struct LanguageDetector {
    engine: Arc<dyn LanguageEngine>,
    normalizer: TextNormalizer,
}

impl LanguageDetector {
    /// Create a detector backed by the bundled whatlang engine.
    ///
    /// Fails with [`DetectError::EngineUnavailable`] if the engine
    /// cannot be initialized; detection can never succeed without one,
    /// so the failure surfaces here rather than at the first call.
    pub fn new() -> Result<Self, DetectError> {
        Self::with_encoding_hint(EncodingHint::Utf8)
    }

    /// Create a detector with an explicit encoding hint for the
    /// bundled engine.
    pub fn with_encoding_hint(hint: EncodingHint) -> Result<Self, DetectError> {
        let engine = WhatlangEngine::new(hint)?;
        Ok(Self::with_engine(Arc::new(engine)))
    }

    /// Create a detector around an already-constructed engine.
    pub fn with_engine(engine: Arc<dyn LanguageEngine>) -> Self {
        Self {
            engine,
            normalizer: TextNormalizer::new(),
        }
    }

    /// Detect candidate languages for a text, most probable first.
    ///
    /// When `normalize` is true the text is cleaned first; normalization
    /// tends to speed detection up and reduce spurious matches, at the
    /// cost of not classifying the original text verbatim. Empty input
    /// returns an empty vec without touching the engine. An engine that
    /// finds no confident match also yields an empty vec; that is a
    /// legitimate outcome, not an error.
    pub fn detect(&self, text: &str, normalize: bool) -> Vec<DetectionResult> {
        if text.is_empty() {
            return Vec::new();
        }

        let normalized;
        let input = if normalize {
            normalized = self.normalizer.normalize(text);
            normalized.as_str()
        } else {
            text
        };

        let raw_matches = self.engine.detect(input);
        debug!(matches = raw_matches.len(), "engine returned raw matches");

        ranker::rank(raw_matches)
    }

    /// Detect only the most probable language, if any.
    pub fn detect_most_probable(&self, text: &str, normalize: bool) -> Option<DetectionResult> {
        self.detect(text, normalize).into_iter().next()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use super::*;
    use crate::types::RawMatch;

    /// Engine double that records calls and replays canned matches.
    struct FakeEngine {
        matches: Vec<RawMatch>,
        calls: AtomicUsize,
        last_input: Mutex<Option<String>>,
    }

    impl FakeEngine {
        fn returning(matches: Vec<RawMatch>) -> Arc<Self> {
            Arc::new(Self {
                matches,
                calls: AtomicUsize::new(0),
                last_input: Mutex::new(None),
            })
        }
    }

    impl LanguageEngine for FakeEngine {
        fn detect(&self, text: &str) -> Vec<RawMatch> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_input.lock().unwrap() = Some(text.to_string());
            self.matches.clone()
        }
    }

    #[test]
    fn test_empty_input_skips_engine() {
        let engine = FakeEngine::returning(vec![RawMatch::new("en", "English", true, 90)]);
        let detector = LanguageDetector::with_engine(engine.clone());

        assert!(detector.detect("", true).is_empty());
        assert!(detector.detect("", false).is_empty());
        assert_eq!(engine.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_reliable_match_ranks_first_on_probability_tie() {
        let engine = FakeEngine::returning(vec![
            RawMatch::new("fr", "French", false, 80),
            RawMatch::new("en", "English", true, 80),
        ]);
        let detector = LanguageDetector::with_engine(engine);

        let results = detector.detect("some text", true);

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].language_code, "en");
        assert_eq!(results[1].language_code, "fr");
    }

    #[test]
    fn test_no_matches_yields_empty_results() {
        let engine = FakeEngine::returning(Vec::new());
        let detector = LanguageDetector::with_engine(engine);

        assert!(detector.detect("some text", true).is_empty());
        assert!(detector.detect_most_probable("some text", true).is_none());
    }

    #[test]
    fn test_most_probable_is_first_ranked() {
        let engine = FakeEngine::returning(vec![
            RawMatch::new("de", "German", true, 40),
            RawMatch::new("nl", "Dutch", true, 70),
        ]);
        let detector = LanguageDetector::with_engine(engine);

        let best = detector.detect_most_probable("some text", false).unwrap();

        assert_eq!(best.language_code, "nl");
        assert!((best.probability - 0.7).abs() < f64::EPSILON);
    }

    #[test]
    fn test_normalization_applied_before_engine_call() {
        let engine = FakeEngine::returning(Vec::new());
        let detector = LanguageDetector::with_engine(engine.clone());

        detector.detect("hello a@b.com world!!", true);

        let seen = engine.last_input.lock().unwrap().clone().unwrap();
        assert!(!seen.contains("a@b.com"));
        assert!(!seen.contains("!!"));
        assert!(seen.contains("hello"));
    }

    #[test]
    fn test_raw_text_passed_through_without_normalization() {
        let engine = FakeEngine::returning(Vec::new());
        let detector = LanguageDetector::with_engine(engine.clone());

        detector.detect("hello a@b.com world!!", false);

        let seen = engine.last_input.lock().unwrap().clone().unwrap();
        assert_eq!(seen, "hello a@b.com world!!");
    }

    #[test]
    fn test_construction_fails_without_usable_engine() {
        let Err(err) = LanguageDetector::with_encoding_hint(EncodingHint::Unknown) else {
            panic!("construction must fail without a usable engine");
        };

        assert!(matches!(err, DetectError::EngineUnavailable { .. }));
    }
}
