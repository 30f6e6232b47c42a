/// Placeholder tokenizer for route templates
///
/// Splits a template such as `article/<id>/edit` into literal text and
/// `<name[:pattern]>` placeholders, in template order. All functions are
/// pure: same input → same output.

use once_cell::sync::Lazy;
use regex::Regex;

/// `<name>` or `<name:pattern>`; `name` is word characters, `pattern` is
/// anything up to the next `>`.
static PLACEHOLDER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<(?P<name>\w+)(?::(?P<pattern>[^>]+))?>").unwrap()
});

/// A parsed `<name[:pattern]>` token, borrowed from the template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder<'a> {
    /// Capture group name
    pub name: &'a str,
    /// Table key or literal regex fragment, when given after `:`
    pub pattern: Option<&'a str>,
}

impl<'a> Placeholder<'a> {
    /// Wraps `fragment` in a named capture group for this placeholder
    ///
    /// # Examples
    ///
    /// ```
    /// use easyroute::Placeholder;
    ///
    /// let p = Placeholder { name: "id", pattern: None };
    /// assert_eq!(p.capture_group(r"\d+"), r"(?P<id>\d+)");
    /// ```
    pub fn capture_group(&self, fragment: &str) -> String {
        format!("(?P<{}>{})", self.name, fragment)
    }
}

/// One piece of a tokenized template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Text copied through unchanged
    Literal(&'a str),
    /// A placeholder to be replaced by a capture group
    Placeholder(Placeholder<'a>),
}

/// Iterator over the segments of a template
///
/// Empty literals are never yielded, so `segments("")` is empty and two
/// adjacent placeholders produce no literal between them.
pub struct Segments<'a> {
    template: &'a str,
    captures: regex::CaptureMatches<'static, 'a>,
    position: usize,
    pending: Option<Placeholder<'a>>,
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(placeholder) = self.pending.take() {
            return Some(Segment::Placeholder(placeholder));
        }

        match self.captures.next() {
            Some(caps) => {
                // Group 0 and "name" always participate in a match
                let whole = caps.get(0)?;
                let placeholder = Placeholder {
                    name: caps.name("name")?.as_str(),
                    pattern: caps.name("pattern").map(|m| m.as_str()),
                };
                let literal = &self.template[self.position..whole.start()];
                self.position = whole.end();

                if literal.is_empty() {
                    Some(Segment::Placeholder(placeholder))
                } else {
                    self.pending = Some(placeholder);
                    Some(Segment::Literal(literal))
                }
            }
            None => {
                let rest = &self.template[self.position..];
                self.position = self.template.len();
                (!rest.is_empty()).then_some(Segment::Literal(rest))
            }
        }
    }
}

/// Tokenizes a template into literal text and placeholders
///
/// # Examples
///
/// ```
/// use easyroute::{segments, Placeholder, Segment};
///
/// let parts: Vec<Segment> = segments("zip/<code:\\d{5}>").collect();
/// assert_eq!(
///     parts,
///     vec![
///         Segment::Literal("zip/"),
///         Segment::Placeholder(Placeholder { name: "code", pattern: Some("\\d{5}") }),
///     ]
/// );
/// ```
pub fn segments(template: &str) -> Segments<'_> {
    Segments {
        template,
        captures: PLACEHOLDER_REGEX.captures_iter(template),
        position: 0,
        pending: None,
    }
}

/// Collects just the placeholders of a template
pub fn placeholders(template: &str) -> Vec<Placeholder<'_>> {
    segments(template)
        .filter_map(|segment| match segment {
            Segment::Placeholder(p) => Some(p),
            Segment::Literal(_) => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ph<'a>(name: &'a str, pattern: Option<&'a str>) -> Segment<'a> {
        Segment::Placeholder(Placeholder { name, pattern })
    }

    #[test]
    fn test_no_tokens() {
        let parts: Vec<_> = segments("about/team").collect();
        assert_eq!(parts, vec![Segment::Literal("about/team")]);
    }

    #[test]
    fn test_empty_template() {
        assert_eq!(segments("").count(), 0);
    }

    #[test]
    fn test_interleaved() {
        let parts: Vec<_> = segments("article/<id>/edit").collect();
        assert_eq!(
            parts,
            vec![
                Segment::Literal("article/"),
                ph("id", None),
                Segment::Literal("/edit"),
            ]
        );
    }

    #[test]
    fn test_adjacent_placeholders() {
        let parts: Vec<_> = segments("<year><month:mon>").collect();
        assert_eq!(parts, vec![ph("year", None), ph("month", Some("mon"))]);
    }

    #[test]
    fn test_pattern_runs_to_first_close() {
        let parts: Vec<_> = segments("<slug:[\\w-.]+>").collect();
        assert_eq!(parts, vec![ph("slug", Some("[\\w-.]+"))]);
    }

    #[test]
    fn test_non_tokens_pass_through() {
        // empty pattern, empty name and non-word names are not placeholders
        for template in ["<id:>", "<>", "<:mon>", "<a-b>", "<id"] {
            let parts: Vec<_> = segments(template).collect();
            assert_eq!(parts, vec![Segment::Literal(template)], "{}", template);
        }
    }

    #[test]
    fn test_pattern_requires_colon() {
        let parts: Vec<_> = segments("<a b>").collect();
        assert_eq!(parts, vec![Segment::Literal("<a b>")]);
    }

    #[test]
    fn test_unicode_word_names() {
        let parts: Vec<_> = segments("<café>").collect();
        assert_eq!(parts, vec![ph("café", None)]);
    }

    #[test]
    fn test_nested_brackets_are_literal_pattern() {
        let parts: Vec<_> = segments("<a:b<c>>").collect();
        assert_eq!(parts, vec![ph("a", Some("b<c")), Segment::Literal(">")]);
    }

    #[test]
    fn test_placeholders_only() {
        let names: Vec<_> = placeholders("<year>/<month:mon>/<day>")
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["year", "month", "day"]);
    }
}
