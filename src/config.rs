use crate::model::{default_destinations, NavigationItem};
use crate::style;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Application configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct Config {
    pub theme: ThemeConfig,
    pub panel: PanelConfig,
    pub api: ApiConfig,
    /// Sidebar destinations, shown in this order
    pub navigation: Vec<NavigationItem>,
}

/// Theme configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct ThemeConfig {
    /// "dark" or "light"
    pub mode: String,
}

/// Panel layout configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct PanelConfig {
    /// Width of the navigation sidebar (in pixels)
    pub sidebar_width: f32,
}

/// Analysis service configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    /// Per-request timeout (in seconds)
    pub timeout_secs: u64,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        ThemeConfig {
            mode: "dark".to_string(),
        }
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        PanelConfig {
            sidebar_width: style::SIDEBAR_DEFAULT,
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: "http://localhost:8000".to_string(),
            timeout_secs: 30,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            theme: ThemeConfig::default(),
            panel: PanelConfig::default(),
            api: ApiConfig::default(),
            navigation: default_destinations(),
        }
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "qian")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from the user config directory, or return defaults
    pub fn load() -> Self {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                match Self::load_from(&path) {
                    Ok(config) => {
                        info!(path = %path.display(), "loaded configuration");
                        return config;
                    }
                    Err(e) => {
                        warn!(path = %path.display(), error = %e, "using default configuration");
                    }
                }
            }
        }
        Config::default()
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let mut config: Config = toml::from_str(contents)?;
        config.normalize_api();
        config.normalize_navigation();
        Ok(config)
    }

    // The service URL must be an absolute base URL and requests need a timeout.
    fn normalize_api(&mut self) {
        let usable_url = Url::parse(&self.api.base_url)
            .map(|url| !url.cannot_be_a_base())
            .unwrap_or(false);
        if !usable_url || self.api.timeout_secs == 0 {
            warn!(
                base_url = %self.api.base_url,
                timeout_secs = self.api.timeout_secs,
                "invalid [api] settings, using defaults"
            );
            self.api = ApiConfig::default();
        }
    }

    // Labels and ids must be unique and the list must not be empty.
    fn normalize_navigation(&mut self) {
        let mut labels = HashSet::new();
        let mut ids = HashSet::new();
        self.navigation.retain(|item| {
            if labels.contains(&item.label) || ids.contains(&item.destination_id) {
                warn!(label = %item.label, id = %item.destination_id, "dropping duplicate destination");
                return false;
            }
            labels.insert(item.label.clone());
            ids.insert(item.destination_id.clone());
            true
        });

        if self.navigation.is_empty() {
            warn!("no navigation destinations configured, using defaults");
            self.navigation = default_destinations();
        }
    }
}
