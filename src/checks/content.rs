// SPDX-License-Identifier: PMPL-1.0-or-later
//! Content check - brand name, message heading text and feature count
//!
//! - The first `h1` contains the brand marker (case-sensitive)
//! - The first `h2` has non-empty text
//! - Grid containers hold at least `min_feature_items` feature items as
//!   direct children
//!
//! A missing heading reads as empty text, so its assertion fails instead of
//! erroring.

use crate::checks::Check;
use crate::config::Config;
use crate::query::Query;
use crate::result::{CheckName, CheckResult};
use crate::snapshot::{self, PageSnapshot};

pub struct ContentCheck;

const KEYS: &[&str] = &["companyNameCorrect", "headingExists", "featuresCount"];

impl Check for ContentCheck {
    fn name(&self) -> CheckName {
        CheckName::Content
    }

    fn description(&self) -> &str {
        "Brand heading names the company, message heading has text, enough feature items"
    }

    fn keys(&self) -> &'static [&'static str] {
        KEYS
    }

    fn run(&self, page: &PageSnapshot, config: &Config) -> CheckResult {
        let brand = page.text_of(&Query::brand_heading());
        let heading = page.text_of(&Query::message_heading());
        let features = count_feature_items(page, config);

        CheckResult::new()
            .with("companyNameCorrect", brand.contains(config.brand_marker.as_str()))
            .with("headingExists", !heading.is_empty())
            .with("featuresCount", features >= config.min_feature_items)
    }
}

/// Feature items are `feature_item_tag` elements directly inside any element
/// carrying the grid marker. Nested grids contribute their own children.
/// Parsed element names are lower case, so the tag compares case-insensitively.
fn count_feature_items(page: &PageSnapshot, config: &Config) -> usize {
    page.all(&Query::class_marker(&config.markers.grid))
        .into_iter()
        .map(|grid| {
            snapshot::children(grid)
                .filter(|child| {
                    child
                        .value()
                        .name()
                        .eq_ignore_ascii_case(&config.feature_item_tag)
                })
                .count()
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(html: &str) -> CheckResult {
        ContentCheck.run(&PageSnapshot::parse(html), &Config::default())
    }

    const FEATURES: &str = r#"
        <div class="grid grid-cols-1 md:grid-cols-3">
            <div>Entrega</div><div>Servicio</div><div>Calidad</div>
        </div>
    "#;

    #[test]
    fn test_valid_content() {
        let result = run(&format!("<h1>RODAX Refacciones</h1><h2>Calidad</h2>{}", FEATURES));
        assert!(result.verdict(), "failed: {:?}", result.failed());
    }

    #[test]
    fn test_brand_is_case_sensitive() {
        let result = run(&format!("<h1>Rodax</h1><h2>Calidad</h2>{}", FEATURES));
        assert_eq!(result.failed(), vec!["companyNameCorrect"]);
    }

    #[test]
    fn test_missing_headings_fail_without_error() {
        let result = run(FEATURES);
        assert_eq!(result.get("companyNameCorrect"), Some(false));
        assert_eq!(result.get("headingExists"), Some(false));
        assert_eq!(result.get("featuresCount"), Some(true));
    }

    #[test]
    fn test_empty_message_heading() {
        let result = run(&format!("<h1>RODAX</h1><h2></h2>{}", FEATURES));
        assert_eq!(result.failed(), vec!["headingExists"]);
    }

    #[test]
    fn test_two_features_are_not_enough() {
        let html = r#"<h1>RODAX</h1><h2>x</h2><div class="grid"><div>a</div><div>b</div></div>"#;
        assert_eq!(run(html).failed(), vec!["featuresCount"]);
    }

    #[test]
    fn test_only_direct_children_count() {
        let html = r#"
            <h1>RODAX</h1><h2>x</h2>
            <div class="grid"><div><div>a</div><div>b</div><div>c</div></div></div>
        "#;
        assert_eq!(run(html).get("featuresCount"), Some(false));
    }

    #[test]
    fn test_children_across_grids_add_up() {
        let html = r#"
            <h1>RODAX</h1><h2>x</h2>
            <div class="grid"><div>a</div><div>b</div></div>
            <ul class="lg:grid"><div>c</div><li>d</li></ul>
        "#;
        assert_eq!(run(html).get("featuresCount"), Some(true));
    }

    #[test]
    fn test_custom_threshold_and_tag() {
        let config = Config {
            min_feature_items: 2,
            feature_item_tag: "li".to_string(),
            ..Config::default()
        };
        let page = PageSnapshot::parse(r#"<ul class="grid"><li>a</li><li>b</li></ul>"#);
        assert_eq!(ContentCheck.run(&page, &config).get("featuresCount"), Some(true));
    }

    #[test]
    fn test_upper_case_feature_tag_matches() {
        let config = Config {
            feature_item_tag: "DIV".to_string(),
            ..Config::default()
        };
        let page = PageSnapshot::parse(&format!("<h1>RODAX</h1><h2>x</h2>{}", FEATURES));
        assert_eq!(ContentCheck.run(&page, &config).get("featuresCount"), Some(true));
    }
}
