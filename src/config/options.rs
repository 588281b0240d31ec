use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use toml::Table;

use super::ConfigError;

/// How per-reference errors are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Errors propagate out of the render call.
    Error,
    /// Errors are logged and resolution falls back.
    #[default]
    Warn,
    /// Errors are swallowed and resolution falls back.
    Silent,
}

impl FromStr for Severity {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "error" => Ok(Self::Error),
            "warn" => Ok(Self::Warn),
            "silent" => Ok(Self::Silent),
            other => Err(ConfigError::InvalidSeverity(other.to_string())),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Silent => "silent",
        })
    }
}

/// Plugin options, supplied once at installation.
///
/// `data` maps variable keys to raw values: a string for a simple variable,
/// or a table with `label` (and optionally `abbr` and `url`) for a structured
/// one.
///
/// ```toml
/// severity = "error"
/// class_name = "variable"
///
/// [data]
/// since = "1948"
/// who = { label = "World Health Organization", abbr = "WHO", url = "https://www.who.int" }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Options {
    #[serde(default)]
    pub data: Table,

    #[serde(default)]
    pub severity: Severity,

    #[serde(default, alias = "ignoreMissingVariables")]
    pub ignore_missing_variables: bool,

    #[serde(default, alias = "className")]
    pub class_name: Option<String>,
}

impl Options {
    /// Creates options with the given variable data and default settings.
    pub fn new(data: Table) -> Self {
        Self {
            data,
            ..Self::default()
        }
    }

    /// Sets how per-reference errors are handled.
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Downgrades unknown variables to warnings whatever the severity.
    pub fn with_ignore_missing_variables(mut self, ignore: bool) -> Self {
        self.ignore_missing_variables = ignore;
        self
    }

    /// Wraps every resolved replacement in `<span class="...">`.
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }
}
