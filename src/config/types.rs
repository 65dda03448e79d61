use std::collections::BTreeMap;

use serde::Deserialize;
use serde::de::IgnoredAny;

use crate::error::ConfigError;

/// Flat settings table read from `mercury.toml` / `mercury.json`.
#[derive(Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct ConfigFile {
    pub entries: BTreeMap<String, ConfigValue>,
}

/// Scalar config value. Settings stay strings until a run plan consumes them,
/// so numbers and booleans are only accepted to be converted back to text.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Text(String),
    Integer(i64),
    Boolean(bool),
    Unsupported(IgnoredAny),
}

impl ConfigFile {
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Converts every entry to its string form.
    ///
    /// # Errors
    ///
    /// Returns an error for tables, arrays, floats, or other non-scalar values.
    pub fn into_strings(self) -> Result<BTreeMap<String, String>, ConfigError> {
        self.entries
            .into_iter()
            .map(|(key, value)| match value {
                ConfigValue::Text(text) => Ok((key, text)),
                ConfigValue::Integer(number) => Ok((key, number.to_string())),
                ConfigValue::Boolean(flag) => Ok((key, flag.to_string())),
                ConfigValue::Unsupported(_) => Err(ConfigError::UnsupportedValue { key }),
            })
            .collect()
    }
}
