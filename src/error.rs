use std::path::PathBuf;

/// Errors from board cell access.
///
/// Coordinates outside the 4x4 grid are caller misuse and fail loudly;
/// placing on an occupied cell is an expected outcome and is reported as a
/// boolean instead (see [`crate::game::Board::set`]).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("cell position out of range: ({row}, {col})")]
    OutOfRange { row: usize, col: usize },
}

/// Errors from move selection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("no empty cells to choose a move from")]
    BoardFull,
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
