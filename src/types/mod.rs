//! Core type definitions for the detection pipeline.

mod detection;

pub use detection::{DetectionResult, RawMatch};
