use toml::Value;

use super::source::{OptionsEntry, OptionsSource};
use super::{ConfigError, DATA_SECTION};

/// An options source reading `PREFIX<sep>path<sep>to<sep>field` environment variables.
///
/// Setting paths are lowercased (`MDVARS__SEVERITY` sets `severity`). Variable
/// keys under `data` keep their case and their values stay strings, so
/// `MDVARS__DATA__since=1948` registers the simple variable `since`.
#[derive(Debug, Clone)]
pub struct EnvSource {
    prefix: String,
    separator: String,
}

impl EnvSource {
    /// Creates a new environment source.
    ///
    /// Panics if `separator` is empty.
    pub fn new(prefix: impl Into<String>, separator: impl Into<String>) -> Self {
        let separator = separator.into();
        assert!(!separator.is_empty(), "separator must not be empty");
        Self {
            prefix: prefix.into(),
            separator,
        }
    }

    fn entries_from(&self, vars: impl IntoIterator<Item = (String, String)>) -> Vec<OptionsEntry> {
        let prefix_with_sep = format!("{}{}", self.prefix, self.separator);
        let mut entries = Vec::new();

        for (key, value) in vars {
            let Some(path_str) = key.strip_prefix(&prefix_with_sep) else {
                continue;
            };
            if path_str.is_empty() {
                continue;
            }

            let mut segments = path_str.split(&self.separator);
            let Some(first) = segments.next().map(str::to_lowercase) else {
                continue;
            };

            if first == DATA_SECTION {
                let path: Vec<String> = std::iter::once(first)
                    .chain(segments.map(str::to_string))
                    .collect();
                entries.push(OptionsEntry::at_path(path, Value::String(value)));
            } else {
                let path: Vec<String> = std::iter::once(first)
                    .chain(segments.map(str::to_lowercase))
                    .collect();
                entries.push(OptionsEntry::at_path(path, coerce_value(&value)));
            }
        }

        entries
    }
}

impl OptionsSource for EnvSource {
    fn entries(&self) -> Result<Vec<OptionsEntry>, ConfigError> {
        Ok(self.entries_from(std::env::vars()))
    }
}

fn coerce_value(s: &str) -> Value {
    if s.eq_ignore_ascii_case("true") {
        return Value::Boolean(true);
    }
    if s.eq_ignore_ascii_case("false") {
        return Value::Boolean(false);
    }
    Value::String(s.to_string())
}
