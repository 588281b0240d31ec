use crate::config::ConfigError;
use crate::variable::VariableError;
use thiserror::Error;

/// Top-level error type for the markup-vars library.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("options error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Variable(#[from] VariableError),

    #[error("tried to use \"{}\" without specifying any variable", crate::PLUGIN_NAME)]
    MissingConfiguration,
}
