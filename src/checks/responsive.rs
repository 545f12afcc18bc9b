// SPDX-License-Identifier: PMPL-1.0-or-later
//! Responsive check - layout class markers
//!
//! Looks for class-name substrings only: a grid marker, a flex marker and a
//! named-breakpoint prefix such as `lg:`. This is a proxy. A page can carry
//! every marker and still lay out badly, and a page styled without the
//! utility-class convention fails even if it is responsive.

use crate::checks::Check;
use crate::config::Config;
use crate::query::Query;
use crate::result::{CheckName, CheckResult};
use crate::snapshot::PageSnapshot;

pub struct ResponsiveCheck;

const KEYS: &[&str] = &["hasGridElements", "hasFlexElements", "hasResponsiveClasses"];

impl Check for ResponsiveCheck {
    fn name(&self) -> CheckName {
        CheckName::Responsive
    }

    fn description(&self) -> &str {
        "Grid, flex and breakpoint-scoped class markers are present"
    }

    fn keys(&self) -> &'static [&'static str] {
        KEYS
    }

    fn run(&self, page: &PageSnapshot, config: &Config) -> CheckResult {
        let markers = &config.markers;

        CheckResult::new()
            .with("hasGridElements", page.exists(&Query::class_marker(&markers.grid)))
            .with("hasFlexElements", page.exists(&Query::class_marker(&markers.flex)))
            .with(
                "hasResponsiveClasses",
                page.exists(&Query::class_marker(&markers.breakpoint)),
            )
    }
}
