//! Error types for the visualizer core
//!
//! This module defines [`VizError`], the single error type returned by the
//! registry, the playback engine, fixture validation and host-side input
//! parsing.
//!
//! `MalformedStep` is a generator-authoring defect. Generators never return it:
//! the step recorder turns it into a panic at the offending step, so a broken
//! generator fails the first test that runs it.

use thiserror::Error;

/// Errors surfaced by the visualizer core
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VizError {
    /// No descriptor is registered under the requested id
    #[error("unknown algorithm id: {0}")]
    UnknownAlgorithmId(String),

    /// A step failed construction-time validation
    #[error("malformed step: {reason}")]
    MalformedStep {
        /// What the validator rejected.
        reason: String,
    },

    /// Playback speed outside 1..=10
    #[error("invalid speed {0}: expected a value between 1 and 10")]
    InvalidSpeed(u8),

    /// Caller-supplied input could not be used
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A demo dataset is internally inconsistent
    #[error("invalid fixture: {0}")]
    InvalidFixture(String),
}

impl VizError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        VizError::MalformedStep {
            reason: reason.into(),
        }
    }
}

pub type VizResult<T> = Result<T, VizError>;
