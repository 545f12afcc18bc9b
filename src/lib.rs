// SPDX-License-Identifier: PMPL-1.0-or-later
//! Herobot - hero section validation harness
//!
//! Checks a rendered landing page for the structure, content, accessibility
//! attributes and responsive-layout markers its hero section depends on.
//! Every check is a pure read of a parsed page and reports named booleans;
//! the suite ANDs them into a per-check verdict and an overall verdict.
//!
//! ## Checks
//!
//! - **Structure**: banner section, brand and message headings, CTA button
//! - **Content**: brand name, message text, feature item count
//! - **Accessibility**: section and CTA labels, heading count
//! - **Responsive**: grid, flex and breakpoint class markers (heuristic)
//!
//! ```no_run
//! use herobot::{run_all, PageSnapshot};
//!
//! let page = PageSnapshot::parse("<section role=\"banner\">...</section>");
//! let report = run_all(&page);
//! println!("overall: {}", report.overall());
//! ```

pub mod checks;
pub mod config;
pub mod console;
pub mod error;
pub mod fixture;
pub mod query;
pub mod report;
pub mod result;
pub mod scanner;
pub mod snapshot;
pub mod suite;

pub use checks::{AccessibilityCheck, Check, ContentCheck, ResponsiveCheck, StructureCheck};
pub use config::Config;
pub use error::{Error, Result};
pub use query::Query;
pub use result::{CheckName, CheckResult, SuiteReport};
pub use snapshot::PageSnapshot;
pub use suite::{run_all, Suite};
