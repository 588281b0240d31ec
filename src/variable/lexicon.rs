use std::collections::BTreeMap;

use toml::Table;

use super::{Variable, VariableError};

/// Validated mapping from variable key to [`Variable`].
///
/// Built once from raw configuration data and never modified afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexicon {
    entries: BTreeMap<String, Variable>,
}

impl Lexicon {
    /// Builds a lexicon from raw `key = value` data.
    ///
    /// Entries of unknown shape are handed to `raise`. If it returns an error
    /// the build aborts with it; otherwise the entry is skipped.
    pub fn build<F>(data: &Table, mut raise: F) -> Result<Self, VariableError>
    where
        F: FnMut(VariableError) -> Result<(), VariableError>,
    {
        let mut entries = BTreeMap::new();

        for (key, raw) in data {
            match Variable::from_raw(key, raw) {
                Ok(variable) => {
                    entries.insert(key.clone(), variable);
                }
                Err(error) => raise(error)?,
            }
        }

        tracing::debug!(
            entries = entries.len(),
            rejected = data.len() - entries.len(),
            "built variable lexicon"
        );
        Ok(Self { entries })
    }

    /// Looks up a variable by key.
    pub fn get(&self, key: &str) -> Option<&Variable> {
        self.entries.get(key)
    }

    /// Returns `true` if `key` was registered.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns the number of registered variables.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if every entry was rejected.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
