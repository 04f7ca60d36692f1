use std::path::PathBuf;

/// Errors reported by the move selector.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("no legal move: every column is full")]
    NoLegalMove,
}

/// Errors an [`Agent`](crate::ai::Agent) reports instead of a column.
#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    #[error(transparent)]
    Search(#[from] SearchError),

    #[error("input closed before a column was chosen")]
    InputClosed,

    #[error("failed to read a column: {0}")]
    Input(#[from] std::io::Error),
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
