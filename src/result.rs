// SPDX-License-Identifier: PMPL-1.0-or-later
//! Check results and the suite report.
//!
//! A [`CheckResult`] is an ordered set of named boolean assertions; its
//! verdict is the AND of all of them. A [`SuiteReport`] holds one result per
//! [`CheckName`] plus the overall verdict. Neither carries timestamps or
//! identifiers, so two runs over the same page compare equal.

use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};
use std::fmt;

/// The four checks of the suite, in report order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckName {
    Structure,
    Content,
    Accessibility,
    Responsive,
}

impl CheckName {
    pub const ALL: [CheckName; 4] = [
        CheckName::Structure,
        CheckName::Content,
        CheckName::Accessibility,
        CheckName::Responsive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CheckName::Structure => "structure",
            CheckName::Content => "content",
            CheckName::Accessibility => "accessibility",
            CheckName::Responsive => "responsive",
        }
    }
}

impl fmt::Display for CheckName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One named sub-assertion of a check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assertion {
    pub key: &'static str,
    pub passed: bool,
}

/// Ordered named assertions produced by a single check run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckResult {
    assertions: Vec<Assertion>,
}

impl CheckResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an assertion. Keys are unique; a repeated key panics in debug
    /// builds since it means the check broke its own key contract.
    pub fn with(mut self, key: &'static str, passed: bool) -> Self {
        debug_assert!(self.get(key).is_none(), "duplicate assertion key: {}", key);
        self.assertions.push(Assertion { key, passed });
        self
    }

    pub fn get(&self, key: &str) -> Option<bool> {
        self.assertions.iter().find(|a| a.key == key).map(|a| a.passed)
    }

    /// AND over every assertion; true for an empty result
    pub fn verdict(&self) -> bool {
        self.assertions.iter().all(|a| a.passed)
    }

    pub fn assertions(&self) -> &[Assertion] {
        &self.assertions
    }

    pub fn keys(&self) -> Vec<&'static str> {
        self.assertions.iter().map(|a| a.key).collect()
    }

    /// Keys of the assertions that did not hold
    pub fn failed(&self) -> Vec<&'static str> {
        self.assertions
            .iter()
            .filter(|a| !a.passed)
            .map(|a| a.key)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.assertions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assertions.is_empty()
    }
}

impl Serialize for CheckResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.assertions.len()))?;
        for a in &self.assertions {
            map.serialize_entry(a.key, &a.passed)?;
        }
        map.end()
    }
}

/// Result of one check inside a suite run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub name: CheckName,
    pub result: CheckResult,
}

impl CheckOutcome {
    pub fn verdict(&self) -> bool {
        self.result.verdict()
    }
}

impl Serialize for CheckOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("CheckOutcome", 2)?;
        s.serialize_field("verdict", &self.verdict())?;
        s.serialize_field("assertions", &self.result)?;
        s.end()
    }
}

/// Named verdicts of a full suite run plus the overall verdict
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuiteReport {
    outcomes: Vec<CheckOutcome>,
    overall: bool,
}

impl SuiteReport {
    pub fn new(outcomes: Vec<CheckOutcome>) -> Self {
        let overall = outcomes.iter().all(CheckOutcome::verdict);
        Self { outcomes, overall }
    }

    pub fn overall(&self) -> bool {
        self.overall
    }

    pub fn outcomes(&self) -> &[CheckOutcome] {
        &self.outcomes
    }

    pub fn result(&self, name: CheckName) -> Option<&CheckResult> {
        self.outcomes
            .iter()
            .find(|o| o.name == name)
            .map(|o| &o.result)
    }

    pub fn verdict(&self, name: CheckName) -> Option<bool> {
        self.result(name).map(CheckResult::verdict)
    }

    /// Value of one sub-assertion, e.g. `(Content, "featuresCount")`
    pub fn assertion(&self, name: CheckName, key: &str) -> Option<bool> {
        self.result(name).and_then(|r| r.get(key))
    }

    pub fn verdicts(&self) -> Vec<(CheckName, bool)> {
        self.outcomes.iter().map(|o| (o.name, o.verdict())).collect()
    }

    /// Every failed sub-assertion, qualified by its check
    pub fn failures(&self) -> Vec<(CheckName, &'static str)> {
        self.outcomes
            .iter()
            .flat_map(|o| o.result.failed().into_iter().map(move |key| (o.name, key)))
            .collect()
    }
}

impl Serialize for SuiteReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        struct Checks<'a>(&'a [CheckOutcome]);

        impl Serialize for Checks<'_> {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                let mut map = serializer.serialize_map(Some(self.0.len()))?;
                for outcome in self.0 {
                    map.serialize_entry(outcome.name.as_str(), outcome)?;
                }
                map.end()
            }
        }

        let mut s = serializer.serialize_struct("SuiteReport", 2)?;
        s.serialize_field("checks", &Checks(&self.outcomes))?;
        s.serialize_field("overall", &self.overall)?;
        s.end()
    }
}
