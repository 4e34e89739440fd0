//! Environment initialization.
//!
//! Before any suite runs, the CLI hands the run configuration to an
//! [`Environment`]. The default [`FileEnvironment`] loads the optional `-f`
//! configuration file into [`Settings`] that suites can read back through
//! [`crate::runner::TestRunner::settings`]. A failed initialization aborts
//! the run.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_yaml::Value;
use tracing::debug;

use crate::config::RunConfig;
use crate::error::{HarnessError, Result};

/// Key/value settings loaded from a configuration file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Settings {
    values: BTreeMap<String, Value>,
}

impl Settings {
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(Value::as_bool)
    }

    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(Value::as_i64)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    /// Parses YAML, or JSON when the path ends in `.json`.
    pub fn parse(path: &Path, text: &str) -> Result<Self> {
        let parse_error = |message: String| HarnessError::ConfigParse {
            path: path.to_path_buf(),
            message,
        };
        let is_json = path.extension().is_some_and(|ext| ext == "json");
        if is_json {
            return serde_json::from_str(text).map_err(|e| parse_error(e.to_string()));
        }
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text).map_err(|e| parse_error(e.to_string()))
    }
}

/// Prepares the world the suites run in.
pub trait Environment {
    fn initialize(&mut self, config: &RunConfig) -> Result<Settings>;
}

/// Loads `config.config_path`, if any. Without a path the settings are empty.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileEnvironment;

impl Environment for FileEnvironment {
    fn initialize(&mut self, config: &RunConfig) -> Result<Settings> {
        let Some(path) = config.config_path.as_deref() else {
            return Ok(Settings::default());
        };
        debug!(path = %path.display(), "loading config file");
        let text = fs::read_to_string(path).map_err(|source| HarnessError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Settings::parse(path, &text)
    }
}

impl<F> Environment for F
where
    F: FnMut(&RunConfig) -> Result<Settings>,
{
    fn initialize(&mut self, config: &RunConfig) -> Result<Settings> {
        self(config)
    }
}
