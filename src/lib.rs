//! Langsift Library
//!
//! Prepares free-form UTF-8 text for language identification and turns
//! the raw output of an identification engine into a deterministically
//! ordered list of typed candidates. The pipeline is: normalize the
//! text (optional), run the engine, rank the raw matches.
//!
//! The statistical classifier itself is an external collaborator behind
//! the [`engine::LanguageEngine`] trait; the bundled implementation is
//! backed by whatlang.

pub mod detector;
pub mod engine;
pub mod error;
pub mod processing;
pub mod types;

pub use detector::LanguageDetector;
pub use engine::{EncodingHint, LanguageEngine, WhatlangEngine};
pub use error::DetectError;
pub use processing::{normalize, rank, TextNormalizer};
pub use types::{DetectionResult, RawMatch};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::detector::LanguageDetector;
    pub use crate::engine::{EncodingHint, LanguageEngine, WhatlangEngine};
    pub use crate::error::DetectError;
    pub use crate::processing::{normalize, rank, TextNormalizer};
    pub use crate::types::*;
}

/// Sample phrase used by the demo binary when no argument is given
pub const DEFAULT_SAMPLE_TEXT: &str = "Bonjour le monde.";
