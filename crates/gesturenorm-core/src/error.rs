//! Error types for gesturenorm.

use thiserror::Error;

/// The main error type for gesturenorm operations.
#[derive(Error, Debug)]
pub enum MotionError {
    /// A computation would divide by a zero extent or a zero mean distance.
    #[error("degenerate geometry in {stage}: {reason}")]
    DegenerateGeometry {
        stage: &'static str,
        reason: String,
    },

    /// The motion has too few poses for the requested stage.
    #[error("{stage} needs at least {required} poses, got {actual}")]
    InsufficientData {
        stage: &'static str,
        required: usize,
        actual: usize,
    },

    /// A mode keyword did not match any known mode.
    #[error("unrecognized {kind} mode '{value}'")]
    UnrecognizedMode { kind: &'static str, value: String },

    /// A data row is too short to hold a pose.
    #[error("malformed row at line {line}: expected at least 8 columns, got {columns}")]
    MalformedRow { line: usize, columns: usize },

    /// A configuration value is out of range.
    #[error("invalid option {name} = {value}: {requirement}")]
    InvalidOption {
        name: &'static str,
        value: f64,
        requirement: &'static str,
    },

    /// Data size mismatch.
    #[error("data size mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl MotionError {
    /// Shorthand for an [`MotionError::InsufficientData`] error.
    pub fn insufficient(stage: &'static str, required: usize, actual: usize) -> Self {
        Self::InsufficientData {
            stage,
            required,
            actual,
        }
    }

    /// Shorthand for a [`MotionError::DegenerateGeometry`] error.
    pub fn degenerate(stage: &'static str, reason: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            stage,
            reason: reason.into(),
        }
    }
}

/// A specialized Result type for gesturenorm operations.
pub type Result<T> = std::result::Result<T, MotionError>;
