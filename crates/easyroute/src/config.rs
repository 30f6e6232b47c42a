// File: src/config.rs
// Purpose: Expander configuration parsing from easyroute.toml

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::{ExpandError, Result};
use crate::expander::Expander;
use crate::options::ExpanderConfig;
use crate::table::PatternTable;

/// Default config file name
pub const CONFIG_FILE: &str = "easyroute.toml";

/// Contents of an `easyroute.toml` file
///
/// ```toml
/// [expander]
/// default_fragment = '\d+'
/// append_slash = false
///
/// [patterns]
/// yy = '\d{2}'
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ExpanderFile {
    #[serde(default)]
    pub expander: ExpanderConfig,

    /// Entries merged over the default pattern table
    #[serde(default)]
    pub patterns: HashMap<String, String>,
}

impl ExpanderFile {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // Missing file means defaults
        if !path.exists() {
            debug!(?path, "no expander config, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ExpandError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let file: ExpanderFile = toml::from_str(&content).map_err(|source| ExpandError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(?path, patterns = file.patterns.len(), "loaded expander config");
        Ok(file)
    }

    /// Load configuration from default path (./easyroute.toml)
    pub fn load_default() -> Result<Self> {
        Self::load(CONFIG_FILE)
    }

    /// Builds an expander: default table plus `[patterns]`, with `[expander]` settings
    pub fn into_expander(self) -> Expander {
        let mut table = PatternTable::new();
        table.extend(self.patterns);
        Expander::with_table(table, self.expander)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config() {
        let file = toml::from_str::<ExpanderFile>("").unwrap_or_default();
        assert_eq!(file.expander, ExpanderConfig::default());
        assert!(file.patterns.is_empty());
    }

    #[test]
    fn test_custom_patterns() {
        let toml = r#"
            [expander]
            append_slash = false

            [patterns]
            yy = '\d{2}'
            year = '\d{2}'
        "#;
        let expander = toml::from_str::<ExpanderFile>(toml).unwrap().into_expander();
        assert!(!expander.config().append_slash);
        assert_eq!(expander.pattern("yy"), Some(r"\d{2}"));
        assert_eq!(expander.pattern("day"), Some(r"\d{1,2}"));
        assert_eq!(expander.expand("<year>"), r"^(?P<year>\d{2})$");
    }

    #[test]
    fn test_missing_file_is_default() {
        let file = ExpanderFile::load("does/not/exist/easyroute.toml").unwrap();
        assert_eq!(file.expander, ExpanderConfig::default());
    }
}
