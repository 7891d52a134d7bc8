//! Lint configuration loaded from the host project's YAML document.
//!
//! The document has two top-level sections. `files` holds the glob
//! selector(s) applied under each asset root, and `options` holds the rule
//! options handed to the engine verbatim. One reserved key inside `options`
//! (`globals`) carries the global-identifier allowances and is split out
//! before the remaining options reach the engine.

use serde::Deserialize;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// Conventional configuration location under the host project root.
pub const DEFAULT_CONFIG_PATH: &str = "config/jshint.yml";

/// Reserved `options` key holding the global-identifier allowances.
const GLOBALS_KEY: &str = "globals";

/// File selector(s) from the `files` section.
///
/// A single pattern and a pattern sequence are both accepted, but the two
/// forms are not equivalent for the resolver; see the resolver module docs.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FileSelectors {
    /// One glob pattern applied under each asset root.
    One(String),
    /// An ordered pattern sequence folded under each asset root.
    Many(Vec<String>),
}

impl Default for FileSelectors {
    fn default() -> Self {
        Self::Many(Vec::new())
    }
}

impl FileSelectors {
    /// Returns `true` when there is nothing to expand.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::One(pattern) => pattern.is_empty(),
            Self::Many(patterns) => patterns.is_empty(),
        }
    }
}

/// Parsed configuration document.
///
/// Option values are kept as loose JSON values in document order. They are
/// not validated against the engine's accepted option set; rejecting an
/// unknown or malformed option is the engine's job, and validating here
/// would break options a newer engine accepts.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    files: FileSelectors,
    #[serde(default)]
    options: Map<String, Value>,
}

impl Config {
    /// Loads the configuration document from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotFound`] when no readable document exists at
    /// `path` and [`ConfigError::Parse`] when the document is malformed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::NotFound {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Parses a configuration document from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the document is malformed.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Returns the configured file selector(s) verbatim.
    #[must_use]
    pub fn file_selectors(&self) -> &FileSelectors {
        &self.files
    }

    /// Returns the global-identifier allowances, empty when absent.
    ///
    /// `true` marks an identifier as writable, `false` as read-only.
    #[must_use]
    pub fn globals(&self) -> Map<String, Value> {
        match self.options.get(GLOBALS_KEY) {
            Some(Value::Object(map)) => map.clone(),
            _ => Map::new(),
        }
    }

    /// Returns every rule option except the reserved globals entry, order
    /// and values untouched.
    #[must_use]
    pub fn lint_options(&self) -> Map<String, Value> {
        self.options
            .iter()
            .filter(|(key, _)| key.as_str() != GLOBALS_KEY)
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// No readable document exists at the resolved path.
    #[error("configuration file not found: {path}: {source}")]
    NotFound {
        /// Path that was probed.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The document is not valid YAML.
    #[error("failed to parse configuration: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },
}
