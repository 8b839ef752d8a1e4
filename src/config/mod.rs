// ABOUTME: Configuration management for aml-lab
// Handles wizard timing, clipboard behavior, UI preferences, and logging

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::wizard::ProgressSchedule;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application version
    #[serde(default = "default_version")]
    pub version: String,

    /// Simulated run timing
    #[serde(default)]
    pub wizard: WizardConfig,

    /// Copy action behavior
    #[serde(default)]
    pub clipboard: ClipboardConfig,

    /// UI preferences
    #[serde(default)]
    pub ui_preferences: UiPreferences,

    /// Log file location and filter
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardConfig {
    /// Wait between two progress samples in milliseconds (default: 500ms)
    #[serde(default = "default_tick_interval")]
    pub tick_interval_ms: u64,

    /// Progress added per sample; must divide 100 (default: 20)
    #[serde(default = "default_progress_increment")]
    pub progress_increment: u8,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: default_tick_interval(),
            progress_increment: default_progress_increment(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClipboardBackend {
    /// Operating system clipboard
    #[default]
    System,
    /// Keep copied text in memory only
    Memory,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipboardConfig {
    /// How long the "Copied!" acknowledgement stays visible (default: 2000ms)
    #[serde(default = "default_ack_duration")]
    pub ack_duration_ms: u64,

    #[serde(default)]
    pub backend: ClipboardBackend,
}

impl Default for ClipboardConfig {
    fn default() -> Self {
        Self {
            ack_duration_ms: default_ack_duration(),
            backend: ClipboardBackend::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiPreferences {
    /// Highlight the Python blocks on the code panel
    #[serde(default = "default_true")]
    pub syntax_highlighting: bool,

    /// Redraw interval of the terminal loop in milliseconds (default: 100ms)
    #[serde(default = "default_ui_tick_rate")]
    pub tick_rate_ms: u64,
}

impl Default for UiPreferences {
    fn default() -> Self {
        Self {
            syntax_highlighting: default_true(),
            tick_rate_ms: default_ui_tick_rate(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Directory for JSONL log files (default: ~/.aml-lab/logs)
    #[serde(default)]
    pub directory: Option<PathBuf>,

    /// Filter used when RUST_LOG is not set
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            directory: None,
            filter: default_log_filter(),
        }
    }
}

fn default_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_tick_interval() -> u64 {
    500
}

fn default_progress_increment() -> u8 {
    20
}

fn default_ack_duration() -> u64 {
    2000
}

fn default_ui_tick_rate() -> u64 {
    100
}

fn default_log_filter() -> String {
    "aml_lab=info".to_string()
}

fn default_true() -> bool {
    true
}

/// One config file as written on disk; keys the file leaves out stay `None`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConfigLayer {
    pub wizard: WizardLayer,
    pub clipboard: ClipboardLayer,
    pub ui_preferences: UiPreferencesLayer,
    pub logging: LoggingLayer,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WizardLayer {
    pub tick_interval_ms: Option<u64>,
    pub progress_increment: Option<u8>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClipboardLayer {
    pub ack_duration_ms: Option<u64>,
    pub backend: Option<ClipboardBackend>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UiPreferencesLayer {
    pub syntax_highlighting: Option<bool>,
    pub tick_rate_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingLayer {
    pub directory: Option<PathBuf>,
    pub filter: Option<String>,
}

impl ConfigLayer {
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

impl AppConfig {
    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        let mut config = Self::default();

        for path in Self::get_config_paths() {
            if path.exists() {
                config.merge(Self::read_file(&path)?);
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Load defaults overlaid with a single explicit file
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            bail!("Config file {} does not exist", path.display());
        }

        let mut config = Self::default();
        config.merge(Self::read_file(path)?);
        config.validate()?;
        Ok(config)
    }

    fn read_file(path: &Path) -> Result<ConfigLayer> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let layer = ConfigLayer::parse(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(layer)
    }

    /// Save configuration to user config directory
    pub fn save(&self) -> Result<()> {
        let config_dir = Self::get_user_config_dir()?;
        self.save_to(&config_dir.join("config.toml"))
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }

    /// Get configuration file paths, lowest precedence first
    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![];

        // 1. System config
        paths.push(PathBuf::from("/etc/aml-lab/config.toml"));

        // 2. User config (~/.aml-lab/config/config.toml)
        if let Ok(config_dir) = Self::get_user_config_dir() {
            paths.push(config_dir.join("config.toml"));
        }

        // 3. Local project config
        if let Ok(cwd) = std::env::current_dir() {
            paths.push(cwd.join(".aml-lab").join("config.toml"));
        }

        paths
    }

    /// Get user configuration directory
    fn get_user_config_dir() -> Result<PathBuf> {
        let home_dir = dirs::home_dir().context("Failed to get home directory")?;
        Ok(home_dir.join(".aml-lab").join("config"))
    }

    /// Overlay one file on top of this config; only keys present in the file override
    pub fn merge(&mut self, layer: ConfigLayer) {
        let ConfigLayer {
            wizard,
            clipboard,
            ui_preferences,
            logging,
        } = layer;

        if let Some(interval) = wizard.tick_interval_ms {
            self.wizard.tick_interval_ms = interval;
        }
        if let Some(increment) = wizard.progress_increment {
            self.wizard.progress_increment = increment;
        }

        if let Some(ack) = clipboard.ack_duration_ms {
            self.clipboard.ack_duration_ms = ack;
        }
        if let Some(backend) = clipboard.backend {
            self.clipboard.backend = backend;
        }

        if let Some(highlighting) = ui_preferences.syntax_highlighting {
            self.ui_preferences.syntax_highlighting = highlighting;
        }
        if let Some(tick_rate) = ui_preferences.tick_rate_ms {
            self.ui_preferences.tick_rate_ms = tick_rate;
        }

        if logging.directory.is_some() {
            self.logging.directory = logging.directory;
        }
        if let Some(filter) = logging.filter {
            self.logging.filter = filter;
        }
    }

    /// Reject values the wizard cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.wizard.tick_interval_ms == 0 {
            bail!("wizard.tick_interval_ms must be greater than zero");
        }
        if !ProgressSchedule::is_valid_increment(self.wizard.progress_increment) {
            bail!(
                "wizard.progress_increment must be between 1 and 100 and divide 100, got {}",
                self.wizard.progress_increment
            );
        }
        if self.ui_preferences.tick_rate_ms == 0 {
            bail!("ui_preferences.tick_rate_ms must be greater than zero");
        }
        Ok(())
    }

    pub fn progress_schedule(&self) -> ProgressSchedule {
        ProgressSchedule::new(
            Duration::from_millis(self.wizard.tick_interval_ms),
            self.wizard.progress_increment,
        )
    }

    pub fn ack_duration(&self) -> Duration {
        Duration::from_millis(self.clipboard.ack_duration_ms)
    }

    pub fn ui_tick_rate(&self) -> Duration {
        Duration::from_millis(self.ui_preferences.tick_rate_ms)
    }

    /// Resolved log directory
    pub fn log_dir(&self) -> PathBuf {
        self.logging.directory.clone().unwrap_or_else(|| {
            dirs::home_dir()
                .map(|home| home.join(".aml-lab").join("logs"))
                .unwrap_or_else(|| PathBuf::from(".aml-lab/logs"))
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            wizard: WizardConfig::default(),
            clipboard: ClipboardConfig::default(),
            ui_preferences: UiPreferences::default(),
            logging: LoggingConfig::default(),
        }
    }
}
