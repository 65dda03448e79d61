use std::collections::BTreeMap;

use tracing::debug;

use crate::error::{AppError, AppResult, ValidationError};

use super::types::ConfigFile;

pub const URI: &str = "uri";
pub const METHOD: &str = "method";
pub const COOKIE: &str = "cookie";
pub const PAYLOAD: &str = "payload";
pub const CONTENT_TYPE: &str = "contentType";
pub const RUN_COUNT: &str = "runCount";
pub const TIMEOUT: &str = "timeout";
pub const CONNECT_TIMEOUT: &str = "connectTimeout";
pub const INSECURE: &str = "insecure";

/// Settings every run needs, in report order.
pub const REQUIRED_SETTINGS: [&str; 6] = [URI, METHOD, COOKIE, PAYLOAD, CONTENT_TYPE, RUN_COUNT];

/// Environment variables for the environment layer.
pub const ENV_BINDINGS: [(&str, &str); 9] = [
    (URI, "MERCURY_URI"),
    (METHOD, "MERCURY_METHOD"),
    (COOKIE, "MERCURY_COOKIE"),
    (PAYLOAD, "MERCURY_PAYLOAD"),
    (CONTENT_TYPE, "MERCURY_CONTENT_TYPE"),
    (RUN_COUNT, "MERCURY_RUN_COUNT"),
    (TIMEOUT, "MERCURY_TIMEOUT"),
    (CONNECT_TIMEOUT, "MERCURY_CONNECT_TIMEOUT"),
    (INSECURE, "MERCURY_INSECURE"),
];

const FLAG_MARKER: char = '-';

/// Resolved name/value settings for one run.
///
/// Layers are folded in by value: each `with_*` call consumes the previous
/// layer and overwrites matching names, so the final value is never mutated
/// after resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    values: BTreeMap<String, String>,
}

impl Settings {
    #[must_use]
    pub const fn new(values: BTreeMap<String, String>) -> Self {
        Self { values }
    }

    /// Builds the base layer from a parsed config file.
    ///
    /// # Errors
    ///
    /// Returns an error when the file holds a non-scalar value.
    pub fn from_config(config: ConfigFile) -> AppResult<Self> {
        let values = config.into_strings().map_err(AppError::config)?;
        Ok(Self { values })
    }

    /// Overlays known settings found through `lookup` (normally the process
    /// environment).
    #[must_use]
    pub fn with_env<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        for (name, variable) in ENV_BINDINGS {
            if let Some(value) = lookup(variable) {
                debug!("Setting '{}' taken from {}.", name, variable);
                self.values.insert(name.to_owned(), value);
            }
        }
        self
    }

    /// Applies parsed override pairs left to right; the last value for a name wins.
    #[must_use]
    pub fn with_overrides<I>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        self.values.extend(overrides);
        self
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Returns a required setting.
    ///
    /// # Errors
    ///
    /// Returns an error when `name` never resolved to a value.
    pub fn require(&self, name: &'static str) -> Result<&str, ValidationError> {
        self.get(name).ok_or(ValidationError::MissingSetting { name })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Splits CLI tokens into `(name, value)` pairs of the form `-name value`.
///
/// # Errors
///
/// Returns an error when a name token lacks the leading `-` or has no value.
pub fn parse_overrides<S>(tokens: &[S]) -> Result<Vec<(String, String)>, ValidationError>
where
    S: AsRef<str>,
{
    let mut pairs = Vec::with_capacity(tokens.len().div_ceil(2));
    let mut tokens = tokens.iter().map(AsRef::<str>::as_ref);
    while let Some(token) = tokens.next() {
        let name = token
            .strip_prefix(FLAG_MARKER)
            .filter(|name| !name.is_empty())
            .ok_or_else(|| ValidationError::ArgumentFormat {
                token: token.to_owned(),
            })?;
        let value = tokens
            .next()
            .ok_or_else(|| ValidationError::MissingArgumentValue {
                name: name.to_owned(),
            })?;
        pairs.push((name.to_owned(), value.to_owned()));
    }
    Ok(pairs)
}

/// Merges the config file, environment, and CLI layers, in that precedence
/// order, into one settings value.
///
/// # Errors
///
/// Returns an error for malformed override tokens or non-scalar config values.
pub fn resolve_settings<F, S>(
    config: Option<ConfigFile>,
    env_lookup: F,
    tokens: &[S],
) -> AppResult<Settings>
where
    F: Fn(&str) -> Option<String>,
    S: AsRef<str>,
{
    let overrides = parse_overrides(tokens).map_err(AppError::validation)?;
    let base = match config {
        Some(config) => Settings::from_config(config)?,
        None => Settings::default(),
    };
    let settings = base.with_env(env_lookup).with_overrides(overrides);
    debug!("Resolved {} setting(s).", settings.len());
    Ok(settings)
}
