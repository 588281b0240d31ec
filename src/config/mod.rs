//! Plugin options and their loading from files and the environment.

mod builder;
mod env;
mod error;
mod options;
mod source;

pub use builder::OptionsLoader;
pub use error::ConfigError;
pub use options::{Options, Severity};
pub use source::{OptionsEntry, OptionsSource};

/// Top-level table holding variable data. Values under it are never coerced.
const DATA_SECTION: &str = "data";
