//! # easyroute
//!
//! Write route regexes as short templates and let the expander fill in
//! the repetitive parts:
//! - `<name>` becomes `(?P<name>…)` using the table fragment for `name`
//! - `<name:key>` uses the table fragment for `key` (`<month:mon>`)
//! - `<name:regex>` uses `regex` verbatim (`<zip:\d{5}>`)
//! - unknown names fall back to a default fragment (`\d+`)
//!
//! Missing `^` is prepended, and `/` and `$` are appended, unless the
//! template already ends in them or the options turn them off.
//!
//! ## Default Patterns
//!
//! | name    | fragment   |
//! |---------|------------|
//! | `day`   | `\d{1,2}`  |
//! | `id`    | `\d+`      |
//! | `mon`   | `[a-z]{3}` |
//! | `month` | `\d{1,2}`  |
//! | `n`     | `\d+`      |
//! | `slug`  | `[\w-]+`   |
//! | `tag`   | `\w+`      |
//! | `year`  | `\d{4}`    |
//!
//! ## Example
//!
//! ```
//! use easyroute::{Expander, ExpandOptions};
//!
//! let mut expander = Expander::new();
//! assert_eq!(
//!     expander.expand("<year>/<month:mon>/<day>/<slug>"),
//!     r"^(?P<year>\d{4})/(?P<month>[a-z]{3})/(?P<day>\d{1,2})/(?P<slug>[\w-]+)/$"
//! );
//!
//! expander.set_entry("dd", r"\d{2}");
//! assert_eq!(expander.expand("<day:dd>"), r"^(?P<day>\d{2})/$");
//!
//! assert_eq!(expander.expand_with("foo", &ExpandOptions::bare()), "foo");
//! ```

use once_cell::sync::Lazy;

// ============================================================================
// Module Declarations
// ============================================================================

pub mod config;
mod error;
mod expander;
mod options;
mod route;
mod shared;
pub mod table;
pub mod token;

pub use config::ExpanderFile;
pub use error::{ExpandError, Result};
pub use expander::Expander;
pub use options::{ExpandOptions, ExpanderConfig, ANCHOR, DEFAULT_FRAGMENT, SEPARATOR, TERMINATOR};
pub use route::RoutePattern;
pub use shared::SharedExpander;
pub use table::{PatternTable, DEFAULT_PATTERNS};
pub use token::{placeholders, segments, Placeholder, Segment};

// ============================================================================
// Default Instance
// ============================================================================

static DEFAULT_EXPANDER: Lazy<Expander> = Lazy::new(Expander::new);

/// Expands `template` with the default table and settings
///
/// # Examples
///
/// ```
/// assert_eq!(easyroute::regex("releases/<project_id>"), r"^releases/(?P<project_id>\d+)/$");
/// ```
pub fn regex(template: &str) -> String {
    DEFAULT_EXPANDER.expand(template)
}

/// Expands `template` with the default table and call-time overrides
pub fn regex_with(template: &str, options: &ExpandOptions) -> String {
    DEFAULT_EXPANDER.expand_with(template, options)
}
