use std::path::PathBuf;

/// Errors reported by the board and the game engine.
///
/// Clicking a full column or playing after the game ended are not errors;
/// those come back as [`crate::game::DropOutcome::Ignored`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("invalid board dimensions {height}x{width}: both must be > 0")]
    InvalidDimensions { height: usize, width: usize },

    #[error("column {column} is out of range (board is {width} wide)")]
    InvalidColumn { column: isize, width: usize },

    #[error("row {row} is out of range (board is {height} tall)")]
    InvalidRow { row: usize, height: usize },

    #[error("cell ({row}, {column}) is already occupied")]
    CellOccupied { row: usize, column: usize },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
