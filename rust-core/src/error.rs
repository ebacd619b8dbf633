//! Error types for spectral editing

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpectralError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No sample series loaded")]
    NotLoaded,

    #[error("Bin index {index} out of range (spectrum has {len} bins)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Series length mismatch: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    #[error("Line {line}: cannot parse sample value '{token}'")]
    Parse { line: usize, token: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SpectralError>;
