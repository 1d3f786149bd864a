//! Error types for the detection pipeline.

use thiserror::Error;

/// Errors surfaced by detector construction.
///
/// "No language could be determined" is a legitimate outcome and is
/// reported as an empty result sequence, never as an error; the only
/// hard failure is an engine that cannot be initialized at all.
#[derive(Debug, Error)]
pub enum DetectError {
    /// The identification engine could not be located or initialized.
    #[error("identification engine unavailable: {reason}")]
    EngineUnavailable { reason: String },
}

impl DetectError {
    pub fn engine_unavailable(reason: impl Into<String>) -> Self {
        Self::EngineUnavailable {
            reason: reason.into(),
        }
    }
}
