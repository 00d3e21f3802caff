//! Configuration for toolshelf.
//!
//! Loaded from ~/.config/toolshelf/toolshelf.yml or .toolshelf.yml.
//!
//! Search order:
//! 1. Explicit path if provided
//! 2. .toolshelf.yml in current directory (project config)
//! 3. ~/.config/toolshelf/toolshelf.yml (user config)
//! 4. Default values

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Catalog source settings.
    pub catalog: CatalogConfig,

    /// Language pack settings.
    pub language: LanguageConfig,

    /// TUI behavior settings.
    pub ui: UiConfig,
}

impl Config {
    /// Load configuration with fallback chain.
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        if let Some(path) = config_path {
            return Self::load_from_file(path)
                .context(format!("Failed to load config from {}", path.display()));
        }

        let project_config = PathBuf::from(".toolshelf.yml");
        if project_config.exists() {
            match Self::load_from_file(&project_config) {
                Ok(config) => {
                    log::info!("Loaded config from .toolshelf.yml");
                    return Ok(config);
                }
                Err(e) => {
                    log::warn!("Failed to load .toolshelf.yml: {}", e);
                }
            }
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("toolshelf").join("toolshelf.yml");
            if user_config.exists() {
                match Self::load_from_file(&user_config) {
                    Ok(config) => {
                        log::info!("Loaded config from {}", user_config.display());
                        return Ok(config);
                    }
                    Err(e) => {
                        log::warn!("Failed to load {}: {}", user_config.display(), e);
                    }
                }
            }
        }

        log::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).context("Failed to read config file")?;
        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.ui.tick_rate_ms == 0 {
            eyre::bail!("ui.tick-rate-ms must be > 0");
        }
        if self.ui.debounce_ms == 0 {
            eyre::bail!("ui.debounce-ms must be > 0");
        }
        if self.catalog.url.is_none() && self.catalog.path.as_os_str().is_empty() {
            eyre::bail!("catalog.path or catalog.url must be set");
        }
        Ok(())
    }
}

/// Catalog source settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Local catalog JSON file.
    pub path: PathBuf,

    /// Remote catalog URL. Takes precedence over `path` when set.
    pub url: Option<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("data/tools.json"),
            url: None,
        }
    }
}

impl CatalogConfig {
    /// Resolve the configured source.
    pub fn source(&self) -> crate::catalog::CatalogSource {
        match &self.url {
            Some(url) => crate::catalog::CatalogSource::Url(url.clone()),
            None => crate::catalog::CatalogSource::File(self.path.clone()),
        }
    }
}

/// Language pack settings.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct LanguageConfig {
    /// Directory holding `<lang>.json` packs; built-ins are used when unset.
    pub dir: Option<PathBuf>,

    /// Remote pack URL template with a `{lang}` placeholder. Takes
    /// precedence over `dir` when set.
    pub url: Option<String>,
}

/// TUI behavior settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UiConfig {
    /// Event tick rate in milliseconds.
    #[serde(rename = "tick-rate-ms")]
    pub tick_rate_ms: u64,

    /// Search debounce delay in milliseconds.
    #[serde(rename = "debounce-ms")]
    pub debounce_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 100,
            debounce_ms: crate::filter::DEFAULT_DEBOUNCE_MS,
        }
    }
}
