// SPDX-License-Identifier: PMPL-1.0-or-later
//! Integration tests for herobot

use herobot::config::load_config;
use herobot::report::{generate_report, generate_scan_report, OutputFormat};
use herobot::{scanner, CheckName, Suite};
use std::path::Path;
use tempfile::TempDir;

#[test]
fn test_scan_hero_fixture() {
    let run = scanner::scan_file(Path::new("tests/fixtures/hero.html"), &Suite::default())
        .expect("scan should succeed");

    assert!(
        run.report.overall(),
        "Hero fixture should pass, failed: {:?}",
        run.report.failures()
    );
}

#[test]
fn test_scan_unlabelled_cta_fixture() {
    let run = scanner::scan_file(
        Path::new("tests/fixtures/unlabelled_cta.html"),
        &Suite::default(),
    )
    .expect("scan should succeed");

    assert_eq!(
        run.report.failures(),
        vec![(CheckName::Accessibility, "buttonsHaveAriaLabel")]
    );
}

#[test]
fn test_scan_fixtures_directory() {
    let runs = scanner::scan_directory(Path::new("tests/fixtures"), &Suite::default())
        .expect("scan should succeed");

    assert_eq!(runs.len(), 2);
    assert!(runs[0].path.ends_with("hero.html"));
    assert!(runs[0].report.overall());
    assert!(!runs[1].report.overall());
}

#[test]
fn test_config_changes_verdicts() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("herobot.yml");
    std::fs::write(&path, "brand_marker: ACME\nmin_feature_items: 4\n").unwrap();

    let suite = Suite::new(load_config(&path).unwrap());
    let run = scanner::scan_file(Path::new("tests/fixtures/hero.html"), &suite).unwrap();

    assert_eq!(
        run.report.failures(),
        vec![
            (CheckName::Content, "companyNameCorrect"),
            (CheckName::Content, "featuresCount"),
        ]
    );
}

#[test]
fn test_json_report_valid() {
    let run = scanner::scan_file(
        Path::new("tests/fixtures/unlabelled_cta.html"),
        &Suite::default(),
    )
    .unwrap();

    let report = generate_report(&run.report, OutputFormat::Json, Some(&run.path));
    let parsed: serde_json::Value =
        serde_json::from_str(&report).expect("JSON report should be valid JSON");

    assert_eq!(parsed["overall"], false);
    assert_eq!(parsed["checks"]["accessibility"]["verdict"], false);
    assert_eq!(parsed["checks"]["structure"]["verdict"], true);
    assert_eq!(
        parsed["checks"]["content"]["assertions"]
            .as_object()
            .unwrap()
            .keys()
            .count(),
        3
    );
}

#[test]
fn test_sarif_report_valid() {
    let run = scanner::scan_file(
        Path::new("tests/fixtures/unlabelled_cta.html"),
        &Suite::default(),
    )
    .unwrap();

    let report = generate_report(&run.report, OutputFormat::Sarif, Some(&run.path));
    let parsed: serde_json::Value =
        serde_json::from_str(&report).expect("SARIF report should be valid JSON");

    assert_eq!(parsed["version"], "2.1.0");
    assert_eq!(parsed["runs"][0]["tool"]["driver"]["name"], "herobot");
    assert_eq!(
        parsed["runs"][0]["results"][0]["ruleId"],
        "accessibility.buttonsHaveAriaLabel"
    );
}

#[test]
fn test_scan_sarif_report_is_single_document() {
    let runs = scanner::scan_directory(Path::new("tests/fixtures"), &Suite::default())
        .expect("scan should succeed");
    let sarif = generate_scan_report(&runs, OutputFormat::Sarif);

    let parsed: serde_json::Value =
        serde_json::from_str(&sarif).expect("scan SARIF should be one JSON document");
    let sarif_runs = parsed["runs"].as_array().expect("runs array");
    assert_eq!(sarif_runs.len(), 1);

    let results = sarif_runs[0]["results"].as_array().expect("results array");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["ruleId"], "accessibility.buttonsHaveAriaLabel");
    let uri = results[0]["locations"][0]["physicalLocation"]["artifactLocation"]["uri"]
        .as_str()
        .expect("uri");
    assert!(uri.ends_with("unlabelled_cta.html"), "unexpected uri: {}", uri);
}

#[test]
fn test_scan_empty_directory_errors() {
    let dir = TempDir::new().unwrap();
    assert!(scanner::scan_directory(dir.path(), &Suite::default()).is_err());
    assert!(scanner::scan_directory(&dir.path().join("dist"), &Suite::default()).is_err());
}

#[test]
fn test_text_report_format() {
    let run = scanner::scan_file(Path::new("tests/fixtures/hero.html"), &Suite::default())
        .unwrap();

    let report = generate_report(&run.report, OutputFormat::Text, Some(&run.path));

    assert!(report.contains("Herobot Hero Section Report"));
    assert!(report.contains("[PASS] responsive"));
    assert!(report.contains("RESULT: PASS"));
}
