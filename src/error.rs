// SPDX-License-Identifier: PMPL-1.0-or-later
//! Error types for herobot
//!
//! Check outcomes are never errors: a failed assertion is `false` in a
//! [`CheckResult`](crate::result::CheckResult). These variants only cover the
//! surfaces around the checks (loading pages and configuration, writing
//! reports).

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("No HTML pages found under {}", .0.display())]
    NoPages(PathBuf),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
