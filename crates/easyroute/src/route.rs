/// A compiled expansion that can be matched against request paths

use std::collections::HashMap;

use regex::Regex;

/// Compiled route pattern with its named captures
///
/// # Examples
///
/// ```
/// use easyroute::Expander;
///
/// let route = Expander::new().route("<year>/<month:mon>/<slug>").unwrap();
/// let params = route.captures("2009/jan/hello-world/").unwrap();
/// assert_eq!(params.get("year"), Some(&"2009".to_string()));
/// assert_eq!(params.get("slug"), Some(&"hello-world".to_string()));
/// ```
#[derive(Debug, Clone)]
pub struct RoutePattern {
    template: String,
    regex: Regex,
}

impl RoutePattern {
    pub(crate) fn new(template: &str, regex: Regex) -> Self {
        Self {
            template: template.to_string(),
            regex,
        }
    }

    /// The template this pattern was expanded from
    pub fn template(&self) -> &str {
        &self.template
    }

    /// The expanded regex source
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// Named capture groups, in pattern order
    pub fn capture_names(&self) -> Vec<&str> {
        self.regex.capture_names().flatten().collect()
    }

    pub fn is_match(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }

    /// Named captures for `path`, or `None` when it does not match
    ///
    /// Groups that did not participate in the match are left out.
    pub fn captures(&self, path: &str) -> Option<HashMap<String, String>> {
        let caps = self.regex.captures(path)?;
        let params = self
            .regex
            .capture_names()
            .flatten()
            .filter_map(|name| {
                caps.name(name)
                    .map(|m| (name.to_string(), m.as_str().to_string()))
            })
            .collect();
        Some(params)
    }
}
