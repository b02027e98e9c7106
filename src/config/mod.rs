use crate::core::layout::OverflowPolicy;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

pub mod check;
pub mod palette;

pub use palette::{ColorToken, Palette};

/// First column of the weekly grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FirstDay {
    #[default]
    Sunday,
    Monday,
}

impl FirstDay {
    pub fn weekday(self) -> chrono::Weekday {
        match self {
            FirstDay::Sunday => chrono::Weekday::Sun,
            FirstDay::Monday => chrono::Weekday::Mon,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default)]
    pub first_day: FirstDay,
    #[serde(default = "default_unit_height")]
    pub unit_height: i32,
    #[serde(default = "default_gutter")]
    pub gutter: i32,
    #[serde(default)]
    pub overflow: OverflowPolicy,
    #[serde(default = "default_cell_width")]
    pub cell_width: usize,
    #[serde(default)]
    pub palette: Palette,
}

/// Field names written by `Config::default()`, used by `config --check`.
pub const CONFIG_FIELDS: &[&str] = &[
    "database",
    "first_day",
    "unit_height",
    "gutter",
    "overflow",
    "cell_width",
    "palette",
];

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_unit_height() -> i32 {
    34
}
fn default_gutter() -> i32 {
    4
}
fn default_cell_width() -> usize {
    12
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            first_day: FirstDay::default(),
            unit_height: default_unit_height(),
            gutter: default_gutter(),
            overflow: OverflowPolicy::default(),
            cell_width: default_cell_width(),
            palette: Palette::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory (`~/.playweek`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".playweek")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("playweek.conf")
    }

    /// Return the default path of the session snapshot
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("game_history.db")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        serde_yaml::from_str(content).map_err(|e| AppError::Config(e.to_string()))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Serialization(e.to_string()))
    }

    /// Write the default configuration file, unless one already exists.
    pub fn init_file(force: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let path = Self::config_file();
        if path.exists() && !force {
            return Err(AppError::Config(format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            )));
        }

        let yaml = Self::default().to_yaml()?;
        let mut file = fs::File::create(&path)?;
        file.write_all(yaml.as_bytes())?;

        success(format!("Config file: {}", path.display()));
        Ok(path)
    }
}
