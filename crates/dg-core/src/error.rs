//! Error types for configuration, grid access and generation

use thiserror::Error;

/// Out-of-range access on a [`crate::dungeon::Grid`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },
}

/// Rejected [`crate::GenerationConfig`], reported before any generation work
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be greater than zero")]
    ZeroDimension { field: &'static str },

    #[error("{field} range is inverted: min {min} > max {max}")]
    InvertedRange {
        field: &'static str,
        min: u32,
        max: u32,
    },

    #[error("{field} must be a probability in [0, 1], got {value}")]
    ProbabilityOutOfRange { field: &'static str, value: f64 },

    #[error("{field} must be a finite, non-negative distance, got {value}")]
    InvalidDistance { field: &'static str, value: f64 },

    #[error("world {width}x{height} cannot hold a room; each axis needs at least {required} cells")]
    WorldTooSmall {
        width: u32,
        height: u32,
        required: u32,
    },

    #[error("world {width}x{height} exceeds the {max}-cell limit per axis")]
    WorldTooLarge { width: u32, height: u32, max: u32 },
}

/// Failure of a whole generation run
///
/// Soft degradations are not errors; they are reported as
/// [`crate::dungeon::Shortfall`] values on the result.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenerationError {
    #[error("invalid generation config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("only {walkable} walkable cells after carving; start and end need at least 2")]
    InsufficientSpace { walkable: usize },

    #[error(transparent)]
    Grid(#[from] GridError),
}
