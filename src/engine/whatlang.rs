//! Whatlang-backed identification engine.
//!
//! Adapts the whatlang trigram classifier to the engine wire contract:
//! integer confidence percentage, reliability flag, ISO-639-style code
//! and English display name.

use tracing::info;
use whatlang::{Detector, Lang};

use crate::engine::{EncodingHint, LanguageEngine};
use crate::error::DetectError;
use crate::types::RawMatch;

/// Identification engine backed by the whatlang crate.
pub struct WhatlangEngine {
    detector: Detector,
}

impl WhatlangEngine {
    /// Initialize the engine with an encoding hint.
    ///
    /// Whatlang classifies UTF-8 text only, so any other hint means no
    /// usable engine can be constructed.
    pub fn new(hint: EncodingHint) -> Result<Self, DetectError> {
        if hint != EncodingHint::Utf8 {
            return Err(DetectError::engine_unavailable(format!(
                "whatlang engine supports only UTF-8 input, got hint {:?}",
                hint
            )));
        }

        info!("Initializing whatlang identification engine");
        Ok(Self {
            detector: Detector::new(),
        })
    }
}

impl LanguageEngine for WhatlangEngine {
    fn detect(&self, text: &str) -> Vec<RawMatch> {
        let Some(info) = self.detector.detect(text) else {
            return Vec::new();
        };

        let percent = (info.confidence() * 100.0).round().clamp(0.0, 100.0) as u8;

        vec![RawMatch {
            language_code: iso_code(info.lang()).to_string(),
            language_name: info.lang().eng_name().to_string(),
            is_reliable: info.is_reliable(),
            language_probability: percent,
        }]
    }
}

/// Map common languages to two-letter ISO-639-1 codes, falling back to
/// whatlang's three-letter code for the long tail.
fn iso_code(lang: Lang) -> &'static str {
    match lang {
        Lang::Eng => "en",
        Lang::Fra => "fr",
        Lang::Spa => "es",
        Lang::Deu => "de",
        Lang::Ita => "it",
        Lang::Rus => "ru",
        Lang::Cmn => "zh",
        Lang::Jpn => "ja",
        Lang::Kor => "ko",
        Lang::Ara => "ar",
        Lang::Hin => "hi",
        Lang::Por => "pt",
        Lang::Nld => "nl",
        Lang::Tur => "tr",
        Lang::Pol => "pl",
        Lang::Swe => "sv",
        Lang::Vie => "vi",
        Lang::Ukr => "uk",
        l => l.code(),
    }
}
