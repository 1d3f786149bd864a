//! Detection record types.

use serde::{Deserialize, Serialize};

/// One candidate language identification as reported by the engine,
/// before conversion and ranking.
///
/// This mirrors the engine wire contract: an integer confidence
/// percentage and a boolean reliability flag alongside the language
/// code and display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawMatch {
    /// Short language identifier (ISO-639 style, e.g. "en")
    pub language_code: String,

    /// Human-readable display name (e.g. "English")
    pub language_name: String,

    /// Whether the engine considers this match reliable
    pub is_reliable: bool,

    /// Confidence as an integer percentage (0-100)
    pub language_probability: u8,
}

impl RawMatch {
    pub fn new(code: &str, name: &str, is_reliable: bool, language_probability: u8) -> Self {
        Self {
            language_code: code.to_string(),
            language_name: name.to_string(),
            is_reliable,
            language_probability,
        }
    }
}

/// An immutable candidate language match, owned by the caller once returned.
///
/// Created exclusively by converting one [`RawMatch`]; the integer
/// percentage becomes a `probability` in the closed interval [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetectionResult {
    /// Short language identifier (ISO-639 style, e.g. "en")
    pub language_code: String,

    /// Human-readable display name (e.g. "English")
    pub language_name: String,

    /// Reliability flag copied verbatim from the engine
    pub confidence: bool,

    /// Probability in [0, 1], derived from the engine percentage
    pub probability: f64,
}

impl DetectionResult {
    /// Convert one raw engine match into a result record.
    ///
    /// Returns `None` for a malformed match (empty code or name) so the
    /// ranker can skip it instead of propagating a corrupt record. The
    /// percentage is clamped to 0-100 before division, so `probability`
    /// can never leave [0, 1].
    pub fn from_raw(raw: RawMatch) -> Option<Self> {
        if raw.language_code.is_empty() || raw.language_name.is_empty() {
            return None;
        }

        let percent = raw.language_probability.min(100);

        Some(Self {
            language_code: raw.language_code,
            language_name: raw.language_name,
            confidence: raw.is_reliable,
            probability: f64::from(percent) / 100.0,
        })
    }
}
