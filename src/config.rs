// SPDX-License-Identifier: PMPL-1.0-or-later
//! Configuration for herobot
//!
//! Every field has a default matching the Rodax hero section, so an empty
//! or missing config file yields the stock suite.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Substring the brand heading must contain (case-sensitive)
    pub brand_marker: String,
    /// Minimum number of feature items inside grid containers
    pub min_feature_items: usize,
    /// Minimum number of h1/h2/h3 headings on the page
    pub min_headings: usize,
    /// Tag name of a feature item (direct child of a grid container)
    pub feature_item_tag: String,
    pub markers: LayoutMarkers,
}

/// Class-name substrings that stand for layout conventions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutMarkers {
    pub grid: String,
    pub flex: String,
    /// Named-breakpoint prefix, e.g. `lg:` in `lg:grid-cols-3`
    pub breakpoint: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            brand_marker: "RODAX".to_string(),
            min_feature_items: 3,
            min_headings: 2,
            feature_item_tag: "div".to_string(),
            markers: LayoutMarkers::default(),
        }
    }
}

impl Default for LayoutMarkers {
    fn default() -> Self {
        Self {
            grid: "grid".to_string(),
            flex: "flex".to_string(),
            breakpoint: "lg:".to_string(),
        }
    }
}

impl Config {
    /// Reject values that would turn every query into a trivial match.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("brand_marker", &self.brand_marker),
            ("feature_item_tag", &self.feature_item_tag),
            ("markers.grid", &self.markers.grid),
            ("markers.flex", &self.markers.flex),
            ("markers.breakpoint", &self.markers.breakpoint),
        ];

        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(Error::Config(format!("{} must not be empty", field)));
            }
        }

        if !self
            .feature_item_tag
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-')
        {
            return Err(Error::Config(format!(
                "feature_item_tag is not a tag name: {}",
                self.feature_item_tag
            )));
        }

        Ok(())
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("herobot")
        .join("config.yml")
}

pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)?;

    let config: Config = if path.extension().and_then(|s| s.to_str()) == Some("toml") {
        toml::from_str(&content)?
    } else if content.trim().is_empty() {
        Config::default()
    } else {
        serde_yaml::from_str(&content)?
    };

    config.validate()?;
    Ok(config)
}
