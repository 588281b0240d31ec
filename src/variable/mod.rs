//! Variable model, lexicon and reference resolution.

mod error;
mod lexicon;
mod modifier;
mod resolve;

use std::collections::BTreeMap;

use toml::Value;

pub use error::VariableError;
pub use lexicon::Lexicon;
pub use modifier::{Modifier, Reference};
pub use resolve::resolve_reference;

/// Field holding the text shown by default.
pub const LABEL: &str = "label";
/// Field holding the short form used by the `abbr` modifier.
pub const ABBR: &str = "abbr";
/// Field holding the link target used by the `link` modifier.
pub const URL: &str = "url";

/// A validated lexicon entry.
///
/// The shape is decided once, when the lexicon is built, and trusted afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Variable {
    /// Plain text, no modifier support.
    Simple(String),
    /// A record exposing `label` and optionally `abbr` and `url`.
    Structured(Record),
}

impl Variable {
    /// Classifies a raw configuration value.
    ///
    /// Strings become [`Variable::Simple`]; tables carrying a `label` become
    /// [`Variable::Structured`]. Anything else is rejected with
    /// [`VariableError::UnknownVariableType`].
    pub fn from_raw(key: &str, raw: &Value) -> Result<Self, VariableError> {
        match raw {
            Value::String(s) if is_simple(raw) => Ok(Self::Simple(s.clone())),
            Value::Table(table) if is_structured(raw) => {
                Ok(Self::Structured(Record::from_table(table)))
            }
            _ => Err(VariableError::UnknownVariableType {
                key: key.to_string(),
                found: describe(raw).to_string(),
            }),
        }
    }
}

/// Returns `true` if the raw value is a simple variable.
pub fn is_simple(raw: &Value) -> bool {
    matches!(raw, Value::String(_))
}

/// Returns `true` if the raw value is a structured variable.
pub fn is_structured(raw: &Value) -> bool {
    match raw {
        Value::Table(table) => table.contains_key(LABEL),
        _ => false,
    }
}

/// Name of a raw value's type, for error messages.
fn describe(raw: &Value) -> &'static str {
    match raw {
        Value::String(_) => "string",
        Value::Integer(_) => "integer",
        Value::Float(_) => "float",
        Value::Boolean(_) => "boolean",
        Value::Datetime(_) => "datetime",
        Value::Array(_) => "array",
        Value::Table(_) => "table without label",
    }
}

/// Field mapping of a structured variable.
///
/// Every field is held as text: strings as-is, other values in their TOML
/// form (`label = 1948` reads back as `"1948"`). `label` is always present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    fields: BTreeMap<String, String>,
}

impl Record {
    fn from_table(table: &toml::Table) -> Self {
        let fields = table
            .iter()
            .map(|(k, v)| (k.clone(), field_text(v)))
            .collect();
        Self { fields }
    }

    /// Looks up a field by name.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Returns the full label, shown when no modifier applies.
    pub fn label(&self) -> &str {
        self.get(LABEL).unwrap_or_default()
    }

    /// Returns the short form used by the `abbr` modifier, if any.
    pub fn abbr(&self) -> Option<&str> {
        self.get(ABBR)
    }

    /// Returns the link target used by the `link` modifier, if any.
    pub fn url(&self) -> Option<&str> {
        self.get(URL)
    }
}

/// Text of a record field.
fn field_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
