// File: src/options.rs
// Purpose: Expander settings and per-call overrides

use serde::{Deserialize, Serialize};

/// Start-of-string anchor
pub const ANCHOR: char = '^';
/// End-of-string terminator
pub const TERMINATOR: char = '$';
/// Path separator appended before the terminator
pub const SEPARATOR: char = '/';
/// Fragment used for names missing from the table
pub const DEFAULT_FRAGMENT: &str = r"\d+";

/// Settings fixed when an expander is built
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpanderConfig {
    /// Fragment for a name with no table entry and no explicit pattern
    #[serde(default = "default_fragment")]
    pub default_fragment: String,

    /// Prepend `^` when missing
    #[serde(default = "default_true")]
    pub anchor: bool,

    /// Append `$` when missing
    #[serde(default = "default_true")]
    pub terminate: bool,

    /// Append `/` unless the pattern already ends in `/` or `$`
    #[serde(default = "default_true")]
    pub append_slash: bool,
}

fn default_fragment() -> String {
    DEFAULT_FRAGMENT.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for ExpanderConfig {
    fn default() -> Self {
        Self {
            default_fragment: default_fragment(),
            anchor: true,
            terminate: true,
            append_slash: true,
        }
    }
}

impl ExpanderConfig {
    /// Applies call-time overrides on top of this config, option by option
    pub fn merged(&self, options: &ExpandOptions) -> ExpanderConfig {
        ExpanderConfig {
            default_fragment: options
                .default_fragment
                .clone()
                .unwrap_or_else(|| self.default_fragment.clone()),
            anchor: options.anchor.unwrap_or(self.anchor),
            terminate: options.terminate.unwrap_or(self.terminate),
            append_slash: options.append_slash.unwrap_or(self.append_slash),
        }
    }
}

/// Per-call overrides; `None` keeps the expander's own setting
///
/// # Examples
///
/// ```
/// use easyroute::{Expander, ExpandOptions};
///
/// let expander = Expander::new();
/// let options = ExpandOptions::new().append_slash(false);
/// assert_eq!(expander.expand_with("feed", &options), "^feed$");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandOptions {
    pub default_fragment: Option<String>,
    pub anchor: Option<bool>,
    pub terminate: Option<bool>,
    pub append_slash: Option<bool>,
}

impl ExpandOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Disables anchoring, terminating and the trailing separator
    pub fn bare() -> Self {
        Self::new().anchor(false).terminate(false).append_slash(false)
    }

    pub fn anchor(mut self, anchor: bool) -> Self {
        self.anchor = Some(anchor);
        self
    }

    pub fn terminate(mut self, terminate: bool) -> Self {
        self.terminate = Some(terminate);
        self
    }

    pub fn append_slash(mut self, append_slash: bool) -> Self {
        self.append_slash = Some(append_slash);
        self
    }

    pub fn default_fragment(mut self, fragment: impl Into<String>) -> Self {
        self.default_fragment = Some(fragment.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ExpanderConfig::default();
        assert_eq!(config.default_fragment, r"\d+");
        assert!(config.anchor);
        assert!(config.terminate);
        assert!(config.append_slash);
    }

    #[test]
    fn test_merge_keeps_unset() {
        let config = ExpanderConfig::default();
        let merged = config.merged(&ExpandOptions::new().terminate(false));
        assert!(merged.anchor);
        assert!(!merged.terminate);
        assert!(merged.append_slash);
        assert_eq!(merged.default_fragment, r"\d+");
    }

    #[test]
    fn test_merge_can_reenable() {
        let config = ExpanderConfig {
            anchor: false,
            ..ExpanderConfig::default()
        };
        assert!(config.merged(&ExpandOptions::new().anchor(true)).anchor);
    }

    #[test]
    fn test_bare() {
        let merged = ExpanderConfig::default().merged(&ExpandOptions::bare());
        assert!(!merged.anchor && !merged.terminate && !merged.append_slash);
    }

    #[test]
    fn test_partial_toml() {
        let config: ExpanderConfig = toml::from_str("anchor = false").unwrap();
        assert!(!config.anchor);
        assert!(config.terminate);
        assert_eq!(config.default_fragment, r"\d+");
    }
}
