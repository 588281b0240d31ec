use std::path::{Path, PathBuf};

use toml::{Table, Value};

use super::env::EnvSource;
use super::source::{merge_at_path, OptionsEntry, OptionsSource};
use super::{ConfigError, Options, DATA_SECTION};

/// Builder for loading [`Options`] from TOML files and the environment.
///
/// Sources are merged in registration order, with later sources overriding
/// earlier ones. Nested tables (including `data` and structured variables)
/// are merged recursively; other values are replaced entirely.
///
/// ## Example
///
/// ```no_run
/// use markup_vars::OptionsLoader;
///
/// let options = OptionsLoader::new()
///     .with_file("variables/default.toml", true)
///     .with_env("MDVARS", "__")
///     .with_file("variables/local.toml", false)
///     .load()?;
/// # Ok::<(), markup_vars::ConfigError>(())
/// ```
#[derive(Debug, Default)]
#[must_use = "loaders do nothing until .load() is called"]
pub struct OptionsLoader {
    sources: Vec<Box<dyn OptionsSource>>,
}

impl OptionsLoader {
    /// Creates a loader with no sources.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a TOML file to be loaded.
    ///
    /// If `required` is `true`, loading fails if the file doesn't exist.
    /// Optional files that are missing are skipped. A `data` key, when
    /// present, must hold a table of variables.
    ///
    /// Sources are applied in registration order, so later sources override earlier ones.
    pub fn with_file(self, path: impl AsRef<Path>, required: bool) -> Self {
        self.with_source(OptionsFile {
            path: path.as_ref().to_path_buf(),
            required,
        })
    }

    /// Reads overrides from environment variables starting with `prefix` + `separator`.
    ///
    /// Setting names are lowercased (`MDVARS__SEVERITY=error`); variable keys
    /// under `data` keep their case and their values stay strings
    /// (`MDVARS__DATA__since=1948`).
    pub fn with_env(self, prefix: impl Into<String>, separator: impl Into<String>) -> Self {
        self.with_source(EnvSource::new(prefix, separator))
    }

    /// Adds a custom source.
    pub fn with_source(mut self, source: impl OptionsSource + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    /// Loads and merges every source, then deserializes the result once.
    pub fn load(self) -> Result<Options, ConfigError> {
        let mut merged = toml::Table::new();

        for source in &self.sources {
            for entry in source.entries()? {
                merge_at_path(&mut merged, &entry.path, entry.value);
            }
        }

        let value = Value::Table(merged);
        value.try_into().map_err(ConfigError::DeserializeError)
    }
}

/// A TOML options file registered with [`OptionsLoader::with_file`].
#[derive(Debug, Clone)]
struct OptionsFile {
    path: PathBuf,
    required: bool,
}

impl OptionsFile {
    /// Reads the file contents, `None` when an optional file is absent.
    fn read(&self) -> Result<Option<String>, ConfigError> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                if self.required {
                    Err(ConfigError::FileNotFound(self.path.clone()))
                } else {
                    Ok(None)
                }
            }
            Err(source) => Err(ConfigError::ReadError {
                path: self.path.clone(),
                source,
            }),
        }
    }

    /// Checks the shape of the `data` section and reports what the file declares.
    fn check_data(&self, table: &Table) -> Result<(), ConfigError> {
        match table.get(DATA_SECTION) {
            Some(Value::Table(data)) => {
                tracing::debug!(
                    path = %self.path.display(),
                    variables = data.len(),
                    "loaded options file"
                );
                Ok(())
            }
            Some(other) => Err(ConfigError::DataNotTable {
                path: self.path.clone(),
                found: other.type_str(),
            }),
            None => {
                tracing::debug!(path = %self.path.display(), "options file declares no variables");
                Ok(())
            }
        }
    }
}

impl OptionsSource for OptionsFile {
    fn entries(&self) -> Result<Vec<OptionsEntry>, ConfigError> {
        let Some(contents) = self.read()? else {
            tracing::debug!(path = %self.path.display(), "optional options file not found");
            return Ok(Vec::new());
        };

        let table: Table = toml::from_str(&contents).map_err(|source| ConfigError::ParseError {
            path: self.path.clone(),
            source,
        })?;
        self.check_data(&table)?;
        Ok(vec![OptionsEntry::root(table)])
    }
}
