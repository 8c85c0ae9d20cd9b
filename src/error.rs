//! Error types for maze_search.

use thiserror::Error;

use crate::maze_grid::{MAX_SIDE, MIN_SIDE};

/// maze_search error type.
///
/// An unreachable destination is not an error: the engine reports it through
/// [SearchOutcome::NoPathExists](crate::SearchOutcome::NoPathExists).
#[derive(Error, Debug)]
pub enum MazeError {
    #[error("grid dimensions {width}x{height} outside supported range {MIN_SIDE}..={MAX_SIDE}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("obstacle density {0} outside 0.0..=1.0")]
    InvalidDensity(f64),

    #[error("grid rows differ in length")]
    RaggedRows,

    #[error("configuration error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for MazeError {
    fn from(e: toml::de::Error) -> Self {
        MazeError::Config(e.to_string())
    }
}

impl From<toml::ser::Error> for MazeError {
    fn from(e: toml::ser::Error) -> Self {
        MazeError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, MazeError>;
