//! Error type shared by every fallible operation in the crate.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("Dimension mismatch: expected {expected} values, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
    #[error("Invalid architecture: {0}")]
    InvalidArchitecture(String),
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
    #[error("Parameter count mismatch: expected {expected}, got {actual}")]
    ParameterCount { expected: usize, actual: usize },
    #[error("Class {class} out of range for {classes} classes")]
    InvalidClass { class: usize, classes: usize },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, NetworkError>;
