// SPDX-License-Identifier: PMPL-1.0-or-later
//! Suite aggregator.
//!
//! Runs every check against one snapshot and folds the verdicts with AND.
//! All checks always run, so a report shows every failing assertion at once.

use crate::checks::{self, Check};
use crate::config::Config;
use crate::result::{CheckOutcome, SuiteReport};
use crate::snapshot::PageSnapshot;
use tracing::{debug, info};

pub struct Suite {
    config: Config,
    checks: Vec<Box<dyn Check>>,
}

impl Default for Suite {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Suite {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            checks: checks::default_checks(),
        }
    }

    pub fn checks(&self) -> &[Box<dyn Check>] {
        &self.checks
    }

    /// Run one check and log its failed assertions
    pub fn run_check(&self, check: &dyn Check, page: &PageSnapshot) -> CheckOutcome {
        let result = check.run(page, &self.config);
        debug_assert_eq!(
            result.keys(),
            check.keys(),
            "{} produced keys outside its contract",
            check.name()
        );

        debug!(
            check = %check.name(),
            verdict = result.verdict(),
            failed = ?result.failed(),
            "check finished"
        );

        CheckOutcome {
            name: check.name(),
            result,
        }
    }

    /// Run every check. Never short-circuits.
    pub fn run(&self, page: &PageSnapshot) -> SuiteReport {
        let outcomes = self
            .checks
            .iter()
            .map(|check| self.run_check(check.as_ref(), page))
            .collect();

        let report = SuiteReport::new(outcomes);
        info!(
            "Suite finished: {} ({} failed assertion(s))",
            if report.overall() { "pass" } else { "fail" },
            report.failures().len()
        );
        report
    }
}

/// Run the stock suite with default configuration
pub fn run_all(page: &PageSnapshot) -> SuiteReport {
    Suite::default().run(page)
}
