// SPDX-License-Identifier: PMPL-1.0-or-later
//! Structure check - required landmark elements exist
//!
//! Existence only: the banner section, the brand heading, the message
//! heading and at least one call-to-action link with the button role.

use crate::checks::Check;
use crate::config::Config;
use crate::query::Query;
use crate::result::{CheckName, CheckResult};
use crate::snapshot::PageSnapshot;

pub struct StructureCheck;

const KEYS: &[&str] = &["heroExists", "logoExists", "titleExists", "ctaExists"];

impl Check for StructureCheck {
    fn name(&self) -> CheckName {
        CheckName::Structure
    }

    fn description(&self) -> &str {
        "Banner section, brand heading, message heading and CTA button exist"
    }

    fn keys(&self) -> &'static [&'static str] {
        KEYS
    }

    fn run(&self, page: &PageSnapshot, _config: &Config) -> CheckResult {
        CheckResult::new()
            .with("heroExists", page.exists(&Query::banner()))
            .with("logoExists", page.exists(&Query::brand_heading()))
            .with("titleExists", page.exists(&Query::message_heading()))
            .with("ctaExists", page.exists(&Query::cta_button()))
    }
}
