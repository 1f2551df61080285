//! Configuration loading and resolution
//!
//! Each setting is resolved in priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable (a `.env` file is loaded into the environment first)
//! 3. TOML config file
//! 4. Compiled default (fallback)
//!
//! Levels 1 and 2 arrive together as [`ConfigOverrides`] (clap reads both).
//! A missing or malformed TOML file never stops startup; the remaining
//! levels apply and the caller reports the [`ConfigFileStatus`].

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit config file
pub const CONFIG_ENV_VAR: &str = "MMR_CONFIG";

/// File name of the persisted state inside the data directory
pub const DATA_FILE_NAME: &str = "favorites.json";

/// Compiled fallback values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledDefaults {
    pub bind_addr: String,
    pub data_dir: PathBuf,
    pub quotes_base_url: String,
    pub log_level: String,
}

impl Default for CompiledDefaults {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:5000".to_string(),
            data_dir: PathBuf::from("data"),
            quotes_base_url: "https://zenquotes.io/api".to_string(),
            log_level: "info".to_string(),
        }
    }
}

/// Optional TOML config file contents
///
/// ```toml
/// bind_addr = "127.0.0.1:5000"
/// data_dir = "/var/lib/mmr"
/// quotes_base_url = "https://zenquotes.io/api"
/// log_level = "debug"
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct TomlConfig {
    pub bind_addr: Option<String>,
    pub data_dir: Option<PathBuf>,
    pub quotes_base_url: Option<String>,
    pub log_level: Option<String>,
}

impl TomlConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }
}

/// Values supplied on the command line or through the environment
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub bind_addr: Option<String>,
    pub data_dir: Option<PathBuf>,
    pub quotes_base_url: Option<String>,
    pub log_level: Option<String>,
    pub config_file: Option<PathBuf>,
}

/// What happened to the TOML config file during [`ServiceConfig::load`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigFileStatus {
    /// No file configured and none at the platform location
    NotFound,
    Loaded(PathBuf),
    /// File unreadable or malformed; defaults were used instead
    Ignored(PathBuf, String),
}

/// Fully resolved service configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub bind_addr: String,
    pub data_dir: PathBuf,
    pub quotes_base_url: String,
    pub log_level: String,
}

impl ServiceConfig {
    /// Merge overrides, an optional TOML file and compiled defaults
    pub fn resolve(overrides: ConfigOverrides, file: Option<TomlConfig>) -> Self {
        let defaults = CompiledDefaults::default();
        let file = file.unwrap_or_default();

        Self {
            bind_addr: overrides
                .bind_addr
                .or(file.bind_addr)
                .unwrap_or(defaults.bind_addr),
            data_dir: overrides
                .data_dir
                .or(file.data_dir)
                .unwrap_or(defaults.data_dir),
            quotes_base_url: overrides
                .quotes_base_url
                .or(file.quotes_base_url)
                .unwrap_or(defaults.quotes_base_url),
            log_level: overrides
                .log_level
                .or(file.log_level)
                .unwrap_or(defaults.log_level),
        }
    }

    /// Resolve using whichever config file [`locate_config_file`] finds
    ///
    /// Nothing is logged here since this usually runs before the tracing
    /// subscriber exists; the returned status says what happened.
    pub fn load(overrides: ConfigOverrides) -> (Self, ConfigFileStatus) {
        let (file, status) = match locate_config_file(overrides.config_file.as_deref()) {
            None => (None, ConfigFileStatus::NotFound),
            Some(path) => match TomlConfig::from_file(&path) {
                Ok(config) => (Some(config), ConfigFileStatus::Loaded(path)),
                Err(e) => (None, ConfigFileStatus::Ignored(path, e.to_string())),
            },
        };

        (Self::resolve(overrides, file), status)
    }

    /// Path of the JSON data file
    pub fn data_file(&self) -> PathBuf {
        self.data_dir.join(DATA_FILE_NAME)
    }

    /// Create the data directory if it does not exist yet
    pub fn ensure_data_dir(&self) -> Result<()> {
        if self.data_dir.is_file() {
            return Err(Error::Config(format!(
                "Data directory path is a file: {}",
                self.data_dir.display()
            )));
        }
        std::fs::create_dir_all(&self.data_dir)?;
        Ok(())
    }
}

/// Find the TOML config file to use, if any
///
/// An explicit path (command line) wins, then `MMR_CONFIG`, then
/// `<config_dir>/mmr/config.toml`. Explicit paths are returned even when
/// missing so the caller can report them; the platform default is only
/// returned when it exists.
pub fn locate_config_file(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
        if !path.is_empty() {
            return Some(PathBuf::from(path));
        }
    }

    default_config_path().filter(|path| path.exists())
}

/// Platform config location (`~/.config/mmr/config.toml` on Linux)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("mmr").join("config.toml"))
}
