//! Error type for the loaders and conversions

use thiserror::Error;

/// Resonator data errors
#[derive(Error, Debug)]
pub enum ResonatorError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Undefined input type! Use one of: real_imag, db_mag_phase_rad, lin_mag_phase_rad, db_mag_phase_deg, lin_mag_phase_deg. (got {0:?})")]
    InvalidEncoding(String),

    #[error("Malformed row at line {line}: {message}")]
    MalformedRow { line: usize, message: String },

    #[error("Malformed line {line}: {message}")]
    MalformedLine { line: usize, message: String },

    #[error("Length mismatch: {frequencies} frequencies but {values} values")]
    LengthMismatch { frequencies: usize, values: usize },

    #[error("Shape mismatch: x has {x} elements but y has {y}")]
    ShapeMismatch { x: usize, y: usize },
}

pub type Result<T> = std::result::Result<T, ResonatorError>;
