// SPDX-License-Identifier: PMPL-1.0-or-later
//! Page scanner for running the suite over rendered build output.
//!
//! Walks directory trees, picks HTML files and runs the suite on each.

use crate::error::{Error, Result};
use crate::result::SuiteReport;
use crate::snapshot::PageSnapshot;
use crate::suite::Suite;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use walkdir::WalkDir;

/// File extensions to scan
const SCANNABLE_EXTENSIONS: &[&str] = &["html", "htm"];

/// Directories to skip
const SKIP_DIRS: &[&str] = &["node_modules", ".git", "target", "vendor", "coverage"];

/// Suite report for one page file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageRun {
    pub path: PathBuf,
    pub report: SuiteReport,
}

/// Run the suite on a single HTML file
pub fn scan_file(path: &Path, suite: &Suite) -> Result<PageRun> {
    let page = PageSnapshot::from_file(path)?;
    Ok(PageRun {
        path: path.to_path_buf(),
        report: suite.run(&page),
    })
}

/// Run the suite on every HTML file under `dir`, sorted by path.
///
/// A missing directory or one without any readable page is an error, so a
/// mistyped build-output path cannot pass.
pub fn scan_directory(dir: &Path, suite: &Suite) -> Result<Vec<PageRun>> {
    if !dir.is_dir() {
        return Err(Error::NotADirectory(dir.to_path_buf()));
    }

    let mut runs = Vec::new();

    info!("Scanning directory: {}", dir.display());

    for entry in WalkDir::new(dir)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| {
            let name = e.file_name().to_str().unwrap_or("");
            if e.depth() > 0 && e.file_type().is_dir() {
                return !SKIP_DIRS.contains(&name) && !name.starts_with('.');
            }
            true
        })
    {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => continue,
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        if !SCANNABLE_EXTENSIONS.contains(&ext) {
            continue;
        }

        match scan_file(path, suite) {
            Ok(run) => runs.push(run),
            Err(e) => warn!("Skipping {}: {}", path.display(), e),
        }
    }

    if runs.is_empty() {
        return Err(Error::NoPages(dir.to_path_buf()));
    }

    runs.sort_by(|a, b| a.path.cmp(&b.path));

    let failing = runs.iter().filter(|r| !r.report.overall()).count();
    info!("Scanned {} pages, {} failing", runs.len(), failing);

    Ok(runs)
}
