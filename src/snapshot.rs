// SPDX-License-Identifier: PMPL-1.0-or-later
//! Read-only snapshot of a rendered page.
//!
//! Wraps a parsed `scraper::Html` document and exposes only the primitives
//! the checks need: first/all matches of a [`Query`], direct element
//! children, text content and attributes. Nothing here mutates the tree.

use crate::error::Result;
use crate::query::Query;
use scraper::{ElementRef, Html};
use std::path::Path;
use tracing::warn;

pub struct PageSnapshot {
    document: Html,
}

impl PageSnapshot {
    /// Parse a full HTML document
    pub fn parse(html: &str) -> Self {
        Self {
            document: Html::parse_document(html),
        }
    }

    /// Read and parse an HTML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::parse(&content))
    }

    /// First element in document order matching the query
    pub fn first(&self, query: &Query) -> Option<ElementRef<'_>> {
        let selector = parse_or_warn(query)?;
        self.document.select(&selector).next()
    }

    /// All elements matching the query, in document order
    pub fn all(&self, query: &Query) -> Vec<ElementRef<'_>> {
        match parse_or_warn(query) {
            Some(selector) => self.document.select(&selector).collect(),
            None => Vec::new(),
        }
    }

    pub fn exists(&self, query: &Query) -> bool {
        self.first(query).is_some()
    }

    pub fn count(&self, query: &Query) -> usize {
        self.all(query).len()
    }

    /// Text content of the first match; empty when nothing matches
    pub fn text_of(&self, query: &Query) -> String {
        self.first(query).map(text_content).unwrap_or_default()
    }
}

fn parse_or_warn(query: &Query) -> Option<scraper::Selector> {
    let selector = query.selector();
    if selector.is_none() {
        warn!(
            "Unparsable query for {}, treating as no match: {}",
            query.describe(),
            query
        );
    }
    selector
}

/// Concatenated text of the element and its descendants
pub fn text_content(element: ElementRef<'_>) -> String {
    element.text().collect()
}

/// Attribute value, if the attribute is present
pub fn attr<'a>(element: ElementRef<'a>, name: &str) -> Option<&'a str> {
    element.value().attr(name)
}

pub fn has_attr(element: ElementRef<'_>, name: &str) -> bool {
    attr(element, name).is_some()
}

/// Direct element children, skipping text and comment nodes
pub fn children<'a>(element: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    element.children().filter_map(ElementRef::wrap)
}
