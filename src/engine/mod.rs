//! External identification engine contract.
//!
//! The statistical classifier is an external collaborator behind a
//! narrow trait, so the orchestrator can be exercised against a fake
//! engine in tests and the bundled engine can be swapped out.

mod whatlang;

pub use self::whatlang::WhatlangEngine;

use crate::types::RawMatch;

/// Encoding hint fixed at engine-construction time.
///
/// Only UTF-8 input is supported; constructing an engine with any other
/// hint fails immediately rather than at the first detection call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodingHint {
    Utf8,
    Unknown,
}

/// A language identification engine.
///
/// One call returns zero or more raw matches; a call with no confident
/// match returns an empty vec. Implementations must be safe for
/// concurrent use, since the orchestrator adds no synchronization.
pub trait LanguageEngine: Send + Sync {
    /// Run one identification pass over a UTF-8 text.
    fn detect(&self, text: &str) -> Vec<RawMatch>;
}
