// SPDX-License-Identifier: PMPL-1.0-or-later
//! Query descriptors for the page snapshot.
//!
//! The checks rely on attribute and class-name conventions rather than on
//! typed markup. Each convention is named here as a [`Query`] value, so a
//! check reads "the banner section" instead of a raw selector string. A
//! query renders to a CSS selector for `scraper` and can describe itself for
//! diagnostics.

use scraper::Selector;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Query {
    /// `<tag role="...">`
    TagWithRole { tag: String, role: String },
    /// Any element whose tag is one of the listed names
    Tags(Vec<String>),
    /// Any element whose `class` attribute contains the marker
    ClassContains(String),
}

impl Query {
    /// Section exposing the banner role
    pub fn banner() -> Self {
        Query::TagWithRole {
            tag: "section".to_string(),
            role: "banner".to_string(),
        }
    }

    /// Primary heading carrying the brand identity
    pub fn brand_heading() -> Self {
        Query::Tags(vec!["h1".to_string()])
    }

    /// Secondary heading carrying the main message
    pub fn message_heading() -> Self {
        Query::Tags(vec!["h2".to_string()])
    }

    /// Link exposing the button role
    pub fn cta_button() -> Self {
        Query::TagWithRole {
            tag: "a".to_string(),
            role: "button".to_string(),
        }
    }

    /// Top-level section container
    pub fn landmark_section() -> Self {
        Query::Tags(vec!["section".to_string()])
    }

    /// Headings counted for outline structure
    pub fn headings() -> Self {
        Query::Tags(vec!["h1".to_string(), "h2".to_string(), "h3".to_string()])
    }

    /// Element tagged with a layout convention such as `grid` or `lg:`
    pub fn class_marker(marker: &str) -> Self {
        Query::ClassContains(marker.to_string())
    }

    /// CSS selector text for this query
    pub fn css(&self) -> String {
        match self {
            Query::TagWithRole { tag, role } => {
                format!("{}[role=\"{}\"]", tag, escape_attr(role))
            }
            Query::Tags(tags) => tags.join(", "),
            Query::ClassContains(marker) => format!("[class*=\"{}\"]", escape_attr(marker)),
        }
    }

    /// Parse into a `scraper` selector. `None` if the rendered CSS is invalid.
    pub fn selector(&self) -> Option<Selector> {
        Selector::parse(&self.css()).ok()
    }

    /// Human-readable capability name
    pub fn describe(&self) -> String {
        match self {
            Query::TagWithRole { tag, role } => {
                format!("<{}> exposing the {} role", tag, role)
            }
            Query::Tags(tags) => {
                let names: Vec<String> = tags.iter().map(|t| format!("<{}>", t)).collect();
                format!("element tagged {}", names.join(" or "))
            }
            Query::ClassContains(marker) => format!("element with class marker '{}'", marker),
        }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.css())
    }
}

/// Escape a value for use inside a double-quoted CSS attribute selector
fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        if c == '"' || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_queries_render() {
        assert_eq!(Query::banner().css(), "section[role=\"banner\"]");
        assert_eq!(Query::cta_button().css(), "a[role=\"button\"]");
        assert_eq!(Query::headings().css(), "h1, h2, h3");
        assert_eq!(Query::class_marker("lg:").css(), "[class*=\"lg:\"]");
    }

    #[test]
    fn test_named_queries_parse() {
        let queries = [
            Query::banner(),
            Query::brand_heading(),
            Query::message_heading(),
            Query::cta_button(),
            Query::landmark_section(),
            Query::headings(),
            Query::class_marker("lg:"),
        ];
        for q in &queries {
            assert!(q.selector().is_some(), "selector failed to parse: {}", q);
        }
    }

    #[test]
    fn test_quote_in_marker_is_escaped() {
        let q = Query::class_marker("a\"b");
        assert_eq!(q.css(), "[class*=\"a\\\"b\"]");
        assert!(q.selector().is_some());
    }

    #[test]
    fn test_describe() {
        assert_eq!(Query::banner().describe(), "<section> exposing the banner role");
        assert_eq!(Query::headings().describe(), "element tagged <h1> or <h2> or <h3>");
    }
}
