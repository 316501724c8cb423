//! Error and skip-reason types for the scan pipeline

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejected strategy parameters. Fatal to the scan configuration, raised
/// before any instrument is touched.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("{parameter} = {value} outside its domain [{min}, {max}]")]
    OutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("unknown strategy mode '{0}'")]
    UnknownMode(String),
    #[error("invalid value for {parameter}: {message}")]
    Invalid {
        parameter: &'static str,
        message: String,
    },
}

/// Why a single instrument was excluded from a scan. Never fatal: the scan
/// skips the instrument and continues.
#[derive(Debug, Clone, Serialize, Deserialize, Error)]
pub enum SkipReason {
    #[error("insufficient history: {have} bars, need {need}")]
    InsufficientHistory { have: usize, need: usize },
    #[error("data unavailable: {message}")]
    DataUnavailable { message: String },
}

/// Errors that abort the whole run.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
    #[error("universe unavailable: {0}")]
    UniverseUnavailable(String),
}
