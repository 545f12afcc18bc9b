// SPDX-License-Identifier: PMPL-1.0-or-later
//! Report generation for suite runs.
//!
//! Supports multiple output formats:
//! - Text: per-check PASS/FAIL with each sub-assertion marked
//! - JSON: the serialized [`SuiteReport`]
//! - SARIF: one result per failed sub-assertion, for CI annotations
//!
//! [`generate_scan_report`] renders a whole directory scan as one document.

use crate::result::SuiteReport;
use crate::scanner::PageRun;
use serde::Serialize;
use std::path::Path;

/// Output format for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// Structured JSON
    Json,
    /// SARIF for IDE/CI integration
    Sarif,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Sarif => write!(f, "sarif"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "sarif" => Ok(OutputFormat::Sarif),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}

/// Generate a report for one page. `page` is only used for locations.
pub fn generate_report(report: &SuiteReport, format: OutputFormat, page: Option<&Path>) -> String {
    match format {
        OutputFormat::Text => generate_text_report(report, page),
        OutputFormat::Json => generate_json_report(report),
        OutputFormat::Sarif => generate_sarif_report(report, page),
    }
}

/// Generate one report covering every scanned page.
///
/// JSON is an array of `{ path, report }`; SARIF is a single run whose
/// results carry each page's own location.
pub fn generate_scan_report(runs: &[PageRun], format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => runs
            .iter()
            .map(|run| generate_text_report(&run.report, Some(&run.path)))
            .collect::<Vec<_>>()
            .join("\n"),
        OutputFormat::Json => serde_json::to_string_pretty(runs).unwrap_or_else(|e| {
            format!("{{\"error\": \"Failed to serialize scan: {}\"}}", e)
        }),
        OutputFormat::Sarif => {
            let results = runs
                .iter()
                .flat_map(|run| sarif_results(&run.report, Some(&run.path)))
                .collect();
            sarif_document(results)
        }
    }
}

fn mark(passed: bool) -> &'static str {
    if passed {
        "PASS"
    } else {
        "FAIL"
    }
}

/// Generate human-readable text report
fn generate_text_report(report: &SuiteReport, page: Option<&Path>) -> String {
    let mut output = String::new();

    output.push_str("=== Herobot Hero Section Report ===\n");
    if let Some(path) = page {
        output.push_str(&format!("Page: {}\n", path.display()));
    }
    output.push('\n');

    for outcome in report.outcomes() {
        output.push_str(&format!("[{}] {}\n", mark(outcome.verdict()), outcome.name));
        for assertion in outcome.result.assertions() {
            let sign = if assertion.passed { '+' } else { '-' };
            output.push_str(&format!("  {} {}\n", sign, assertion.key));
        }
    }

    output.push('\n');
    let failures = report.failures();
    if failures.is_empty() {
        output.push_str("RESULT: PASS (all checks passed)\n");
    } else {
        let names: Vec<String> = failures
            .iter()
            .map(|(check, key)| format!("{}.{}", check, key))
            .collect();
        output.push_str(&format!("RESULT: FAIL ({})\n", names.join(", ")));
    }

    output
}

/// Generate JSON report
fn generate_json_report(report: &SuiteReport) -> String {
    serde_json::to_string_pretty(report).unwrap_or_else(|e| {
        format!("{{\"error\": \"Failed to serialize report: {}\"}}", e)
    })
}

/// SARIF report structure (simplified)
#[derive(Debug, Serialize)]
struct SarifReport {
    #[serde(rename = "$schema")]
    schema: String,
    version: String,
    runs: Vec<SarifRun>,
}

#[derive(Debug, Serialize)]
struct SarifRun {
    tool: SarifTool,
    results: Vec<SarifResult>,
}

#[derive(Debug, Serialize)]
struct SarifTool {
    driver: SarifDriver,
}

#[derive(Debug, Serialize)]
struct SarifDriver {
    name: String,
    version: String,
}

#[derive(Debug, Serialize)]
struct SarifResult {
    #[serde(rename = "ruleId")]
    rule_id: String,
    level: String,
    message: SarifMessage,
    locations: Vec<SarifLocation>,
}

#[derive(Debug, Serialize)]
struct SarifMessage {
    text: String,
}

#[derive(Debug, Serialize)]
struct SarifLocation {
    #[serde(rename = "physicalLocation")]
    physical_location: SarifPhysicalLocation,
}

#[derive(Debug, Serialize)]
struct SarifPhysicalLocation {
    #[serde(rename = "artifactLocation")]
    artifact_location: SarifArtifactLocation,
}

#[derive(Debug, Serialize)]
struct SarifArtifactLocation {
    uri: String,
}

/// Generate SARIF report
fn generate_sarif_report(report: &SuiteReport, page: Option<&Path>) -> String {
    sarif_document(sarif_results(report, page))
}

/// One SARIF result per failed sub-assertion
fn sarif_results(report: &SuiteReport, page: Option<&Path>) -> Vec<SarifResult> {
    report
        .failures()
        .into_iter()
        .map(|(check, key)| {
            let locations = page
                .map(|p| SarifLocation {
                    physical_location: SarifPhysicalLocation {
                        artifact_location: SarifArtifactLocation {
                            uri: p.display().to_string(),
                        },
                    },
                })
                .into_iter()
                .collect();

            SarifResult {
                rule_id: format!("{}.{}", check, key),
                level: "error".to_string(),
                message: SarifMessage {
                    text: format!("Assertion '{}' of the {} check did not hold", key, check),
                },
                locations,
            }
        })
        .collect()
}

fn sarif_document(results: Vec<SarifResult>) -> String {
    let sarif = SarifReport {
        schema: "https://json.schemastore.org/sarif-2.1.0.json".to_string(),
        version: "2.1.0".to_string(),
        runs: vec![SarifRun {
            tool: SarifTool {
                driver: SarifDriver {
                    name: "herobot".to_string(),
                    version: env!("CARGO_PKG_VERSION").to_string(),
                },
            },
            results,
        }],
    };

    serde_json::to_string_pretty(&sarif).unwrap_or_else(|e| {
        format!("{{\"error\": \"Failed to serialize SARIF report: {}\"}}", e)
    })
}
