//! Configuration management

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::app::playback::PlaybackSettings;
use crate::theme::Theme;

const APP_NAME: &str = "syllabus";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Selected theme name
    pub theme: String,

    /// Custom theme overrides (if any)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_theme: Option<Theme>,

    /// Vim mode enabled
    pub vim_mode: bool,

    /// Milliseconds between module playback ticks
    pub playback_interval_ms: u64,

    /// Percentage added per playback tick
    pub playback_step: u8,

    /// Learner id reported in progress summaries
    pub user_id: String,

    /// Course catalog JSON to load instead of the built-in course
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "Ledger".to_string(),
            custom_theme: None,
            vim_mode: true,
            playback_interval_ms: 500,
            playback_step: 10,
            user_id: "user-1".to_string(),
            catalog_path: None,
        }
    }
}

impl Config {
    /// Load configuration from disk, or create default if not exists
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from an explicit path, writing defaults there if it is missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {:?}", path))?;
            serde_json::from_str(&contents)
                .with_context(|| format!("Failed to parse config {:?}", path))
        } else {
            let config = Self::default();
            config.save_to(path)?;
            tracing::info!("Wrote default config to {:?}", path);
            Ok(config)
        }
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }

        let contents =
            serde_json::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write config to {:?}", path))?;

        Ok(())
    }

    fn project_dirs() -> Result<ProjectDirs> {
        ProjectDirs::from("", "", APP_NAME).context("Failed to determine project directories")
    }

    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::project_dirs()?.config_dir().join("config.json"))
    }

    /// Get the data directory path
    pub fn data_dir() -> Result<PathBuf> {
        Ok(Self::project_dirs()?.data_dir().to_path_buf())
    }

    /// Log file used while the TUI owns the terminal
    pub fn log_path() -> Result<PathBuf> {
        Ok(Self::data_dir()?.join(format!("{APP_NAME}.log")))
    }

    /// Get the active theme: custom overrides, then the named theme, then the default
    pub fn active_theme(&self) -> Theme {
        if let Some(custom) = &self.custom_theme {
            return custom.clone();
        }
        Theme::by_name(&self.theme).unwrap_or_else(|| {
            tracing::warn!("Unknown theme {:?}, using default", self.theme);
            Theme::default()
        })
    }

    pub fn playback(&self) -> PlaybackSettings {
        PlaybackSettings {
            interval: Duration::from_millis(self.playback_interval_ms),
            step: self.playback_step,
        }
    }
}
