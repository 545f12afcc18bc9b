// SPDX-License-Identifier: PMPL-1.0-or-later
//! The four hero-section checks.
//!
//! Each check is a pure read of a [`PageSnapshot`]: it runs its queries,
//! records one boolean per contract key and returns the [`CheckResult`].
//! Absence of an element is a `false` assertion, never an error.

pub mod accessibility;
pub mod content;
pub mod responsive;
pub mod structure;

use crate::config::Config;
use crate::result::{CheckName, CheckResult};
use crate::snapshot::PageSnapshot;

pub use accessibility::AccessibilityCheck;
pub use content::ContentCheck;
pub use responsive::ResponsiveCheck;
pub use structure::StructureCheck;

/// Trait implemented by all checks
pub trait Check: Send + Sync {
    /// Name the verdict is reported under
    fn name(&self) -> CheckName;

    /// Short description of what this check asserts
    fn description(&self) -> &str;

    /// Assertion keys this check always produces, in order
    fn keys(&self) -> &'static [&'static str];

    /// Run against a page snapshot
    fn run(&self, page: &PageSnapshot, config: &Config) -> CheckResult;
}

/// The stock checks in report order
pub fn default_checks() -> Vec<Box<dyn Check>> {
    vec![
        Box::new(StructureCheck),
        Box::new(ContentCheck),
        Box::new(AccessibilityCheck),
        Box::new(ResponsiveCheck),
    ]
}
