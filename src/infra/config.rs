//! Configuration loading from TOML files
//!
//! Config file is selected via the CONFIG_FILE environment variable. Without
//! it, or when the file cannot be loaded, built-in defaults are used.

use crate::domain::types::{GroupId, Point, LEFT_BASKET};
use crate::services::analysis::AnalysisSettings;
use anyhow::Context;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;
use tracing::warn;

/// Environment variable naming the config file
pub const CONFIG_ENV: &str = "CONFIG_FILE";

#[derive(Debug, Clone, Deserialize)]
pub struct CourtConfig {
    /// Left basket x coordinate (m)
    #[serde(default = "default_left_basket_x")]
    pub left_basket_x: f64,
    /// Left basket y coordinate (m)
    #[serde(default = "default_left_basket_y")]
    pub left_basket_y: f64,
}

fn default_left_basket_x() -> f64 {
    LEFT_BASKET.x
}

fn default_left_basket_y() -> f64 {
    LEFT_BASKET.y
}

impl Default for CourtConfig {
    fn default() -> Self {
        Self { left_basket_x: default_left_basket_x(), left_basket_y: default_left_basket_y() }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TeamsConfig {
    /// Group id reported as team 1
    #[serde(default = "default_primary_group_id")]
    pub primary_group_id: i64,
    /// Reject inputs with more than two distinct group ids
    #[serde(default)]
    pub strict_groups: bool,
}

fn default_primary_group_id() -> i64 {
    1
}

impl Default for TeamsConfig {
    fn default() -> Self {
        Self { primary_group_id: default_primary_group_id(), strict_groups: false }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct TomlConfig {
    #[serde(default)]
    pub court: CourtConfig,
    #[serde(default)]
    pub teams: TeamsConfig,
}

/// Main configuration struct used throughout the application
#[derive(Debug, Clone)]
pub struct Config {
    left_basket: Point,
    primary_group_id: GroupId,
    strict_groups: bool,
    config_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            left_basket: LEFT_BASKET,
            primary_group_id: GroupId(1),
            strict_groups: false,
            config_file: "default".to_string(),
        }
    }
}

impl Config {
    /// Config file path from the environment, if set
    pub fn resolve_config_path() -> Option<String> {
        env::var(CONFIG_ENV).ok().filter(|path| !path.is_empty())
    }

    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let toml_config: TomlConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        Ok(Self::from_toml(toml_config, path.display().to_string()))
    }

    fn from_toml(toml_config: TomlConfig, config_file: String) -> Self {
        Self {
            left_basket: Point::new(toml_config.court.left_basket_x, toml_config.court.left_basket_y),
            primary_group_id: GroupId(toml_config.teams.primary_group_id),
            strict_groups: toml_config.teams.strict_groups,
            config_file,
        }
    }

    /// Load configuration from a path, falling back to defaults on failure
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Self {
        match Self::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(error = %format!("{e:#}"), "config_load_failed_using_defaults");
                Self::default()
            }
        }
    }

    /// Load configuration - tries CONFIG_FILE first, falls back to defaults
    pub fn load() -> Self {
        match Self::resolve_config_path() {
            Some(path) => Self::load_from_path(path),
            None => Self::default(),
        }
    }

    /// Settings handed to the analysis pipeline
    pub fn analysis_settings(&self) -> AnalysisSettings {
        AnalysisSettings {
            reference: self.left_basket,
            primary_group: self.primary_group_id,
            strict_groups: self.strict_groups,
        }
    }

    pub fn left_basket(&self) -> Point {
        self.left_basket
    }

    pub fn primary_group_id(&self) -> GroupId {
        self.primary_group_id
    }

    pub fn strict_groups(&self) -> bool {
        self.strict_groups
    }

    pub fn config_file(&self) -> &str {
        &self.config_file
    }
}
