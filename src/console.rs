// SPDX-License-Identifier: PMPL-1.0-or-later
//! Interactive console adapter.
//!
//! Nothing registers itself globally. A caller that wants the step-by-step
//! console walkthrough constructs a [`ConsoleReporter`] over any writer and
//! runs the suite through it; library users call [`Suite::run`] directly.

use crate::result::{CheckName, SuiteReport};
use crate::snapshot::PageSnapshot;
use crate::suite::Suite;
use std::io::{self, Write};

pub struct ConsoleReporter<W: Write> {
    out: W,
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Run every check, narrating each one, then print the verdict map.
    pub fn run(&mut self, suite: &Suite, page: &PageSnapshot) -> io::Result<SuiteReport> {
        writeln!(self.out, "Running all hero section checks...")?;

        let mut outcomes = Vec::with_capacity(suite.checks().len());
        for check in suite.checks() {
            writeln!(self.out)?;
            writeln!(self.out, "Testing {}...", banner(check.name()))?;
            writeln!(self.out, "  ({})", check.description())?;

            let outcome = suite.run_check(check.as_ref(), page);
            let fields: Vec<String> = outcome
                .result
                .assertions()
                .iter()
                .map(|a| format!("{}: {}", a.key, a.passed))
                .collect();
            writeln!(self.out, "{} results: {{ {} }}", title(check.name()), fields.join(", "))?;

            outcomes.push(outcome);
        }

        let report = SuiteReport::new(outcomes);

        writeln!(self.out)?;
        writeln!(self.out, "Final results:")?;
        for (name, verdict) in report.verdicts() {
            writeln!(self.out, "  {}: {}", name, verdict)?;
        }
        if report.overall() {
            writeln!(self.out, "All checks passed!")?;
        } else {
            writeln!(self.out, "Some checks failed")?;
        }

        Ok(report)
    }
}

fn banner(name: CheckName) -> &'static str {
    match name {
        CheckName::Structure => "basic structure",
        CheckName::Content => "content",
        CheckName::Accessibility => "accessibility",
        CheckName::Responsive => "responsive design",
    }
}

fn title(name: CheckName) -> &'static str {
    match name {
        CheckName::Structure => "Basic Structure",
        CheckName::Content => "Content",
        CheckName::Accessibility => "Accessibility",
        CheckName::Responsive => "Responsive",
    }
}
