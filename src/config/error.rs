use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("required options file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("failed to read options file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse options file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("'data' in options file '{path}' must be a table of variables, found {found}")]
    DataNotTable { path: PathBuf, found: &'static str },

    #[error("failed to deserialize options: {0}")]
    DeserializeError(#[from] toml::de::Error),

    #[error("invalid severity '{0}' (expected one of: error, warn, silent)")]
    InvalidSeverity(String),
}
