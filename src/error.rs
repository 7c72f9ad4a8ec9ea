use std::path::PathBuf;

/// Reasons a column drop is rejected. The board is never mutated when one of
/// these is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} is out of range (expected 0..7)")]
    InvalidColumn { column: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("game is already over")]
    GameOver,
}

/// Errors raised when decoding a stored board.
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    #[error("expected 7 columns, found {found}")]
    ColumnCount { found: usize },

    #[error("expected 6 cells in column {column}, found {found}")]
    RowCount { column: usize, found: usize },

    #[error("token at column {column}, row {row} sits above an empty cell")]
    FloatingToken { column: usize, row: usize },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
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
