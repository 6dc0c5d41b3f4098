use thiserror::Error;

/// Result type for building conversion.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while validating or converting a building.
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid external dependency: missing {0}")]
    InvalidDependency(&'static str),

    #[error("creating level {index} at elevation {elevation} failed")]
    LevelCreation { index: usize, elevation: f64 },

    #[error("wall {wall} references level {level}, but there are only {levels} levels")]
    DanglingLevel {
        wall: usize,
        level: usize,
        levels: usize,
    },

    #[error("wall {wall} coordinate {index} is not a finite number")]
    NonFiniteCoordinate { wall: usize, index: usize },

    #[error("level {level} elevation is not a finite number")]
    NonFiniteElevation { level: usize },

    #[error("authoring host error: {0}")]
    Host(String),

    #[cfg(feature = "io")]
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
