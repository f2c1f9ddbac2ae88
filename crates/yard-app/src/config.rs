//! Configuration management for yard-inventory
//!
//! Config stored at: ~/.config/yard-inventory/config.toml

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use yard_domain::model::Shift;
use yard_infra::persistence::StorageKeys;
use yard_types::{ConfigError, OutputFormat, Result};

const APP_DIR: &str = "yard-inventory";

/// Application configuration
///
/// Built once at startup and handed to the store and the CLI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Local storage directory override
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// Where exports go when no output path is given
    #[serde(default)]
    pub export_dir: Option<PathBuf>,

    /// Storage key holding the inventory
    #[serde(default = "default_inventory_key")]
    pub inventory_key: String,

    /// Storage key holding the theme preference
    #[serde(default = "default_theme_key")]
    pub theme_key: String,

    /// Title row of exported sheets and prefix of export file names
    #[serde(default = "default_report_title")]
    pub report_title: String,

    /// Shift used when --shift is not given (1-3)
    #[serde(default = "default_shift")]
    pub default_shift: u8,

    /// Default output format (table, json)
    #[serde(default)]
    pub output_format: OutputFormat,
}

fn default_inventory_key() -> String {
    StorageKeys::default().inventory
}

fn default_theme_key() -> String {
    StorageKeys::default().theme
}

fn default_report_title() -> String {
    "Inventario Nexxus".to_string()
}

fn default_shift() -> u8 {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            export_dir: None,
            inventory_key: default_inventory_key(),
            theme_key: default_theme_key(),
            report_title: default_report_title(),
            default_shift: default_shift(),
            output_format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join(APP_DIR);
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Local storage directory
    pub fn data_dir(&self) -> Result<PathBuf> {
        if let Some(ref dir) = self.data_dir {
            return Ok(dir.clone());
        }

        let data_dir = dirs::data_dir()
            .ok_or(ConfigError::NotFound)?
            .join(APP_DIR);
        Ok(data_dir)
    }

    /// Export directory, the working directory by default
    pub fn export_dir(&self) -> PathBuf {
        self.export_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn storage_keys(&self) -> StorageKeys {
        StorageKeys {
            inventory: self.inventory_key.clone(),
            theme: self.theme_key.clone(),
        }
    }

    pub fn default_shift(&self) -> Result<Shift> {
        Shift::try_from(self.default_shift).map_err(|_| {
            ConfigError::InvalidValue {
                key: "default_shift".to_string(),
                value: self.default_shift.to_string(),
            }
            .into()
        })
    }

    /// Load config from the default location, or defaults if absent
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Config =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        Ok(config)
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Yard Inventory Configuration")?;
        writeln!(f, "============================")?;
        writeln!(f)?;
        writeln!(
            f,
            "Data dir:       {}",
            self.data_dir()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| "(error)".to_string())
        )?;
        writeln!(f, "Export dir:     {}", self.export_dir().display())?;
        writeln!(f, "Inventory key:  {}", self.inventory_key)?;
        writeln!(f, "Theme key:      {}", self.theme_key)?;
        writeln!(f, "Report title:   {}", self.report_title)?;
        writeln!(f, "Default shift:  {}", self.default_shift)?;
        writeln!(f, "Output format:  {}", self.output_format)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:    {}", path.display())?;
        }

        Ok(())
    }
}
