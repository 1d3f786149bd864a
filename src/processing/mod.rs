//! The two pure pipeline stages.
//!
//! This module provides:
//! - Text normalization (noise removal before the engine call)
//! - Candidate ranking (deterministic ordering of raw matches)

pub mod normalizer;
pub mod ranker;

pub use normalizer::{normalize, TextNormalizer};
pub use ranker::rank;
