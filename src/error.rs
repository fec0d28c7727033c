//! Crate error type.

use thiserror::Error;

/// Errors raised while building a session or its inputs.
///
/// Everything that can go wrong at runtime (rays leaving the map, walls right
/// in front of the camera) is recovered inside the frame; only startup
/// problems surface here.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RaycastError {
    #[error("map has no rows")]
    EmptyMap,

    #[error("map row {row} is empty")]
    EmptyRow { row: usize },

    /// A row's length differs from the first row's.
    #[error("map row {row} has {found} cells, expected {expected} like row 0")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A cell holds a code other than 0 (open) or 1 (wall).
    #[error("map cell ({row}, {col}) has unknown code {code}")]
    InvalidCell { row: usize, col: usize, code: u8 },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// The window, renderer or input subsystem could not be brought up.
    #[error("initialization failed: {0}")]
    Init(String),
}

pub type Result<T> = std::result::Result<T, RaycastError>;
