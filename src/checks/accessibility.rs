// SPDX-License-Identifier: PMPL-1.0-or-later
//! Accessibility check - labels and heading outline
//!
//! - The first `section` carries a non-empty `aria-label`
//! - Every link with the button role carries an `aria-label` attribute
//!   (vacuously true when there are none)
//! - At least `min_headings` h1/h2/h3 elements exist
//!
//! These are presence checks on attributes. They say nothing about what a
//! screen reader actually announces.

use crate::checks::Check;
use crate::config::Config;
use crate::query::Query;
use crate::result::{CheckName, CheckResult};
use crate::snapshot::{self, PageSnapshot};

pub struct AccessibilityCheck;

const KEYS: &[&str] = &["hasAriaLabel", "buttonsHaveAriaLabel", "properHeadingStructure"];

const LABEL_ATTR: &str = "aria-label";

impl Check for AccessibilityCheck {
    fn name(&self) -> CheckName {
        CheckName::Accessibility
    }

    fn description(&self) -> &str {
        "Section is labelled, every CTA button is labelled, enough headings"
    }

    fn keys(&self) -> &'static [&'static str] {
        KEYS
    }

    fn run(&self, page: &PageSnapshot, config: &Config) -> CheckResult {
        let section_labelled = page
            .first(&Query::landmark_section())
            .and_then(|section| snapshot::attr(section, LABEL_ATTR))
            .is_some_and(|label| !label.is_empty());

        let buttons_labelled = page
            .all(&Query::cta_button())
            .into_iter()
            .all(|button| snapshot::has_attr(button, LABEL_ATTR));

        let headings = page.count(&Query::headings());

        CheckResult::new()
            .with("hasAriaLabel", section_labelled)
            .with("buttonsHaveAriaLabel", buttons_labelled)
            .with("properHeadingStructure", headings >= config.min_headings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(html: &str) -> CheckResult {
        AccessibilityCheck.run(&PageSnapshot::parse(html), &Config::default())
    }

    #[test]
    fn test_accessible_hero() {
        let result = run(r#"
            <section aria-label="Hero">
                <h1>RODAX</h1><h2>Refacciones</h2>
                <a role="button" aria-label="Ver catálogo">Ver</a>
            </section>
        "#);
        assert!(result.verdict(), "failed: {:?}", result.failed());
    }

    #[test]
    fn test_no_buttons_is_vacuously_labelled() {
        let result = run(r#"<section aria-label="Hero"><h1>A</h1><h2>B</h2></section>"#);
        assert_eq!(result.get("buttonsHaveAriaLabel"), Some(true));
        assert!(result.verdict());
    }

    #[test]
    fn test_every_button_must_be_labelled() {
        let result = run(r#"
            <section aria-label="Hero"><h1>A</h1><h2>B</h2>
                <a role="button" aria-label="First">1</a>
                <a role="button">2</a>
            </section>
        "#);
        assert_eq!(result.failed(), vec!["buttonsHaveAriaLabel"]);
    }

    #[test]
    fn test_empty_button_label_counts_as_present() {
        let result = run(r#"<section aria-label="Hero"><h1>A</h1><h2>B</h2><a role="button" aria-label="">x</a></section>"#);
        assert_eq!(result.get("buttonsHaveAriaLabel"), Some(true));
    }

    #[test]
    fn test_empty_section_label_fails() {
        let result = run(r#"<section aria-label=""><h1>A</h1><h2>B</h2></section>"#);
        assert_eq!(result.failed(), vec!["hasAriaLabel"]);
    }

    #[test]
    fn test_only_first_section_is_inspected() {
        let result = run(r#"<section><h1>A</h1></section><section aria-label="Later"><h2>B</h2></section>"#);
        assert_eq!(result.get("hasAriaLabel"), Some(false));
    }

    #[test]
    fn test_single_heading_is_not_an_outline() {
        let result = run(r#"<section aria-label="Hero"><h1>A</h1><h4>B</h4></section>"#);
        assert_eq!(result.failed(), vec!["properHeadingStructure"]);
    }
}
