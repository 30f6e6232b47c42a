/// Named regex fragments used to fill in placeholders
///
/// Each `Expander` owns its own `PatternTable`. The defaults are rebuilt
/// for every table, so mutating one expander never leaks into another.

use std::collections::HashMap;

/// Default fragments, keyed by the name they are looked up under.
///
/// `mon` and `n` exist to be referenced as a pattern (`<month:mon>`)
/// rather than as a capture name.
pub const DEFAULT_PATTERNS: [(&str, &str); 8] = [
    ("day", r"\d{1,2}"),
    ("id", r"\d+"),
    ("month", r"\d{1,2}"),
    ("slug", r"[\w-]+"),
    ("tag", r"\w+"),
    ("year", r"\d{4}"),
    ("mon", r"[a-z]{3}"),
    ("n", r"\d+"),
];

/// Mapping from short name to regex fragment
///
/// # Examples
///
/// ```
/// use easyroute::PatternTable;
///
/// let mut table = PatternTable::new();
/// assert_eq!(table.get("year"), Some(r"\d{4}"));
///
/// table.insert("yy", r"\d{2}");
/// assert_eq!(table.get("yy"), Some(r"\d{2}"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternTable {
    entries: HashMap<String, String>,
}

impl PatternTable {
    /// Creates a table seeded with [`DEFAULT_PATTERNS`]
    pub fn new() -> Self {
        DEFAULT_PATTERNS
            .iter()
            .map(|(name, fragment)| (name.to_string(), fragment.to_string()))
            .collect()
    }

    /// Creates a table with no entries at all
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Inserts or overwrites the fragment for `name`
    ///
    /// The fragment is stored as-is; it is not checked for valid regex
    /// syntax. Returns the fragment that was replaced, if any.
    pub fn insert(&mut self, name: impl Into<String>, fragment: impl Into<String>) -> Option<String> {
        self.entries.insert(name.into(), fragment.into())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries ordered by name
    pub fn iter_sorted(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<(&str, &str)> = self
            .entries
            .iter()
            .map(|(name, fragment)| (name.as_str(), fragment.as_str()))
            .collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }

    /// Picks the fragment for a placeholder (pure function)
    ///
    /// # Lookup Rules
    ///
    /// 1. **Explicit pattern**: a table key is replaced by its fragment,
    ///    anything else is used verbatim as a regex fragment
    /// 2. **Name only**: the name's fragment, or `default` when the name
    ///    is unknown
    ///
    /// Only one level of indirection is followed: a fragment that happens
    /// to equal another key is not looked up again.
    ///
    /// # Examples
    ///
    /// ```
    /// use easyroute::PatternTable;
    ///
    /// let table = PatternTable::new();
    /// assert_eq!(table.resolve("month", Some("mon"), r"\d+"), "[a-z]{3}");
    /// assert_eq!(table.resolve("zip", Some(r"\d{5}"), r"\d+"), r"\d{5}");
    /// assert_eq!(table.resolve("project_id", None, r"\d+"), r"\d+");
    /// ```
    pub fn resolve<'a>(&'a self, name: &str, pattern: Option<&'a str>, default: &'a str) -> &'a str {
        match pattern {
            Some(pattern) => self.get(pattern).unwrap_or(pattern),
            None => self.get(name).unwrap_or(default),
        }
    }
}

impl Default for PatternTable {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<(String, String)> for PatternTable {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Extend<(String, String)> for PatternTable {
    fn extend<I: IntoIterator<Item = (String, String)>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}
