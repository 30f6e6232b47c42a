use std::path::PathBuf;

/// Errors surfaced around expansion
///
/// Expansion itself never fails. These come from compiling the produced
/// pattern or from loading an expander config file.
#[derive(Debug, thiserror::Error)]
pub enum ExpandError {
    #[error("template {template:?} expanded to invalid regex {pattern:?}: {source}")]
    InvalidRegex {
        template: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("failed to read config file {path:?}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path:?}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ExpandError>;
