/// The pattern expander
///
/// Turns `<year>/<month:mon>` style templates into regular expressions
/// such as `^(?P<year>\d{4})/(?P<month>[a-z]{3})/$`.

use regex::Regex;
use tracing::{debug, trace};

use crate::error::{ExpandError, Result};
use crate::options::{ExpandOptions, ExpanderConfig, ANCHOR, SEPARATOR, TERMINATOR};
use crate::route::RoutePattern;
use crate::table::PatternTable;
use crate::token::{segments, Segment};

/// Expands placeholder templates into regex strings
///
/// Owns its pattern table and its configuration. `set_entry` is the only
/// mutator; expansion reads both and keeps no state between calls.
///
/// # Examples
///
/// ```
/// use easyroute::Expander;
///
/// let mut expander = Expander::new();
/// assert_eq!(expander.expand("article/<id>/edit"), r"^article/(?P<id>\d+)/edit/$");
///
/// expander.set_entry("yy", r"\d{2}");
/// assert_eq!(expander.expand("<year:yy>"), r"^(?P<year>\d{2})/$");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Expander {
    patterns: PatternTable,
    config: ExpanderConfig,
}

impl Expander {
    /// Creates an expander with the default table and settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an expander with the default table and custom settings
    pub fn with_config(config: ExpanderConfig) -> Self {
        Self::with_table(PatternTable::new(), config)
    }

    /// Creates an expander over a caller-supplied table
    pub fn with_table(patterns: PatternTable, config: ExpanderConfig) -> Self {
        Self { patterns, config }
    }

    /// Builder form of [`Expander::set_entry`]
    pub fn with_pattern(mut self, name: impl Into<String>, fragment: impl Into<String>) -> Self {
        self.set_entry(name, fragment);
        self
    }

    /// Inserts or overwrites the fragment for `name`
    ///
    /// The fragment is not validated; a bad fragment only shows up when
    /// the expanded pattern is compiled.
    pub fn set_entry(&mut self, name: impl Into<String>, fragment: impl Into<String>) {
        let name = name.into();
        let fragment = fragment.into();
        debug!(name = %name, fragment = %fragment, "setting pattern entry");
        self.patterns.insert(name, fragment);
    }

    /// Alias for [`Expander::set_entry`]
    pub fn add(&mut self, name: impl Into<String>, fragment: impl Into<String>) {
        self.set_entry(name, fragment);
    }

    /// Current fragment for `name`, if the table has one
    pub fn pattern(&self, name: &str) -> Option<&str> {
        self.patterns.get(name)
    }

    pub fn patterns(&self) -> &PatternTable {
        &self.patterns
    }

    pub fn config(&self) -> &ExpanderConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut ExpanderConfig {
        &mut self.config
    }

    /// Expands `template` using the expander's own settings
    pub fn expand(&self, template: &str) -> String {
        self.expand_config(template, &self.config)
    }

    /// Expands `template` with call-time overrides merged over the settings
    pub fn expand_with(&self, template: &str, options: &ExpandOptions) -> String {
        self.expand_config(template, &self.config.merged(options))
    }

    fn expand_config(&self, template: &str, config: &ExpanderConfig) -> String {
        let body = self.substitute(template, &config.default_fragment);
        let pattern = finish(body, !template.is_empty(), config);
        trace!(template = %template, pattern = %pattern, "expanded template");
        pattern
    }

    /// Replaces every placeholder with its capture group, keeping literal
    /// text in place
    fn substitute(&self, template: &str, default: &str) -> String {
        segments(template).fold(String::with_capacity(template.len() * 2), |mut out, segment| {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(placeholder) => {
                    let fragment = self.patterns.resolve(placeholder.name, placeholder.pattern, default);
                    out.push_str(&placeholder.capture_group(fragment));
                }
            }
            out
        })
    }

    /// Expands and compiles `template`
    pub fn compile(&self, template: &str) -> Result<Regex> {
        self.compile_with(template, &ExpandOptions::new())
    }

    /// Expands with overrides and compiles `template`
    pub fn compile_with(&self, template: &str, options: &ExpandOptions) -> Result<Regex> {
        let pattern = self.expand_with(template, options);
        Regex::new(&pattern).map_err(|source| ExpandError::InvalidRegex {
            template: template.to_string(),
            pattern,
            source,
        })
    }

    /// Expands and compiles `template` into a matchable route
    pub fn route(&self, template: &str) -> Result<RoutePattern> {
        self.route_with(template, &ExpandOptions::new())
    }

    pub fn route_with(&self, template: &str, options: &ExpandOptions) -> Result<RoutePattern> {
        let regex = self.compile_with(template, options)?;
        Ok(RoutePattern::new(template, regex))
    }
}

/// Applies the anchor, separator and terminator rules
///
/// The separator is skipped for an empty template so that `""` becomes
/// `^$` rather than `^/$`.
fn finish(mut pattern: String, has_template: bool, config: &ExpanderConfig) -> String {
    if config.anchor && !pattern.starts_with(ANCHOR) {
        pattern.insert(0, ANCHOR);
    }

    if has_template
        && config.append_slash
        && !pattern.ends_with(TERMINATOR)
        && !pattern.ends_with(SEPARATOR)
    {
        pattern.push(SEPARATOR);
    }

    if config.terminate && !pattern.ends_with(TERMINATOR) {
        pattern.push(TERMINATOR);
    }

    pattern
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text() {
        let expander = Expander::new();
        assert_eq!(expander.expand("about"), "^about/$");
    }

    #[test]
    fn test_empty_template() {
        let expander = Expander::new();
        assert_eq!(expander.expand(""), "^$");
    }

    #[test]
    fn test_empty_template_without_anchor() {
        let expander = Expander::new();
        assert_eq!(expander.expand_with("", &ExpandOptions::new().anchor(false)), "$");
        assert_eq!(expander.expand_with("", &ExpandOptions::bare()), "");
    }

    #[test]
    fn test_existing_anchor_kept() {
        let expander = Expander::new();
        assert_eq!(expander.expand("^blog"), "^blog/$");
    }

    #[test]
    fn test_existing_terminator_kept() {
        let expander = Expander::new();
        assert_eq!(expander.expand("foo$"), "^foo$");
    }

    #[test]
    fn test_no_terminate_still_appends_slash() {
        let expander = Expander::new();
        let options = ExpandOptions::new().terminate(false);
        assert_eq!(expander.expand_with("foo", &options), "^foo/");
    }

    #[test]
    fn test_default_fragment_override() {
        let expander = Expander::new();
        let options = ExpandOptions::new().default_fragment("[^/]+");
        assert_eq!(expander.expand_with("<name>", &options), "^(?P<name>[^/]+)/$");
        // table entries still win over the default
        assert_eq!(expander.expand_with("<id>", &options), r"^(?P<id>\d+)/$");
    }

    #[test]
    fn test_config_default_fragment() {
        let expander = Expander::with_config(ExpanderConfig {
            default_fragment: r"\w+".to_string(),
            ..ExpanderConfig::default()
        });
        assert_eq!(expander.expand("<project>"), r"^(?P<project>\w+)/$");
    }

    #[test]
    fn test_set_entry_overrides_default() {
        let mut expander = Expander::new();
        expander.set_entry("id", "[0-9a-f]+");
        assert_eq!(expander.expand("<id>"), "^(?P<id>[0-9a-f]+)/$");
        expander.add("id", "[0-9]+");
        assert_eq!(expander.pattern("id"), Some("[0-9]+"));
    }

    #[test]
    fn test_expanders_do_not_share_tables() {
        let mut first = Expander::new();
        let second = Expander::new();
        first.set_entry("year", r"\d{2}");
        assert_eq!(second.expand("<year>"), r"^(?P<year>\d{4})/$");
    }

    #[test]
    fn test_compile_invalid_fragment() {
        let expander = Expander::new().with_pattern("broken", "(");
        let err = expander.compile("<x:broken>").unwrap_err();
        match err {
            ExpandError::InvalidRegex { template, pattern, .. } => {
                assert_eq!(template, "<x:broken>");
                assert_eq!(pattern, "^(?P<x>()/$");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_compile_matches() {
        let regex = Expander::new().compile("<year>/<month:mon>").unwrap();
        assert!(regex.is_match("2009/jan/"));
        assert!(!regex.is_match("2009/jan"));
        assert!(!regex.is_match("09/jan/"));
    }
}
