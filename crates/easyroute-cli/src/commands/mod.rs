pub mod expand;
pub mod matches;
pub mod patterns;

use std::path::Path;

use anyhow::{Context, Result};
use easyroute::{ExpandOptions, Expander, ExpanderFile};
use tracing::debug;

use crate::ExpandArgs;

/// Loads the expander from `config`, then applies `-p name=fragment` entries
pub fn load_expander(config: &Path, args: &ExpandArgs) -> Result<Expander> {
    let mut expander = ExpanderFile::load(config)
        .with_context(|| format!("Failed to load config: {}", config.display()))?
        .into_expander();

    for entry in &args.patterns {
        let (name, fragment) = parse_entry(entry)?;
        expander.set_entry(name, fragment);
    }

    Ok(expander)
}

/// Turns the `--no-*` and `--default` flags into call-time overrides
pub fn expand_options(args: &ExpandArgs) -> ExpandOptions {
    let mut options = ExpandOptions::new();
    if args.no_anchor {
        options = options.anchor(false);
    }
    if args.no_terminate {
        options = options.terminate(false);
    }
    if args.no_slash {
        options = options.append_slash(false);
    }
    if let Some(fragment) = &args.default_fragment {
        options = options.default_fragment(fragment.as_str());
    }
    debug!(?options, "resolved expand options");
    options
}

fn parse_entry(entry: &str) -> Result<(&str, &str)> {
    match entry.split_once('=') {
        Some((name, fragment)) if !name.is_empty() && name.chars().all(|c| c.is_alphanumeric() || c == '_') => {
            Ok((name, fragment))
        }
        _ => anyhow::bail!("Invalid pattern entry '{}', expected NAME=FRAGMENT", entry),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_entry() {
        assert_eq!(parse_entry(r"yy=\d{2}").unwrap(), ("yy", r"\d{2}"));
        assert_eq!(parse_entry("eq=a=b").unwrap(), ("eq", "a=b"));
        assert!(parse_entry("no-equals").is_err());
        assert!(parse_entry("=x").is_err());
        assert!(parse_entry("a-b=x").is_err());
    }

    #[test]
    fn test_expand_options_from_flags() {
        let args = ExpandArgs {
            no_slash: true,
            default_fragment: Some("[^/]+".to_string()),
            ..ExpandArgs::default()
        };
        let options = expand_options(&args);
        assert_eq!(options.append_slash, Some(false));
        assert_eq!(options.anchor, None);
        assert_eq!(options.default_fragment.as_deref(), Some("[^/]+"));
    }

    #[test]
    fn test_load_expander_with_entries() {
        let args = ExpandArgs {
            patterns: vec![r"yy=\d{2}".to_string()],
            ..ExpandArgs::default()
        };
        let expander = load_expander(Path::new("missing-easyroute.toml"), &args).unwrap();
        assert_eq!(expander.expand("<year:yy>"), r"^(?P<year>\d{2})/$");
    }
}
