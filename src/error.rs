//! Crate error type
//!
//! The simulation step itself never fails; these errors come from the
//! level, generation and library boundaries.

use crate::level::CellKind;

/// Errors raised while loading, validating or storing levels
#[derive(thiserror::Error, Debug)]
pub enum MakerError {
    /// A level row contained a character outside the cell alphabet
    #[error("unknown cell code {code:?} at row {row}, column {col}")]
    UnknownCell { row: usize, col: usize, code: char },

    /// Level is not the expected size
    #[error("level is {cols}x{rows}, expected {expected_cols}x{expected_rows}")]
    Dimensions {
        expected_cols: usize,
        expected_rows: usize,
        cols: usize,
        rows: usize,
    },

    /// A required marker is absent
    #[error("level has no {0:?} marker")]
    MissingMarker(CellKind),

    /// A marker that must be unique appears more than once
    #[error("level has {1} {0:?} markers, expected exactly one")]
    DuplicateMarker(CellKind, usize),

    /// The level generator failed or returned unusable output
    #[error("generation failed: {0}")]
    Generation(String),

    /// Serialization/deserialization error
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Browser storage unavailable or rejected the write
    #[error("storage error: {0}")]
    Storage(String),
}

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, MakerError>;
