use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::tracker::MAX_LOOKBACK_DAYS;

fn default_max_lookback_days() -> u32 {
    MAX_LOOKBACK_DAYS
}
fn default_tasbih_target() -> u32 {
    33
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Prepended to every storage key. "ramadan-" gives the web app's names.
    #[serde(default)]
    pub key_prefix: String,
    #[serde(default = "default_max_lookback_days")]
    pub max_lookback_days: u32,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            key_prefix: String::new(),
            max_lookback_days: default_max_lookback_days(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TasbihConfig {
    #[serde(default = "default_tasbih_target")]
    pub default_target: u32,
}

impl Default for TasbihConfig {
    fn default() -> Self {
        Self {
            default_target: default_tasbih_target(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CalendarConfig {
    /// Days to add/subtract from the Hijri date for local moon sighting.
    #[serde(default)]
    pub hijri_offset: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub tracker: TrackerConfig,
    #[serde(default)]
    pub tasbih: TasbihConfig,
    #[serde(default)]
    pub calendar: CalendarConfig,
}

impl AppConfig {
    fn project_dirs() -> Result<ProjectDirs> {
        ProjectDirs::from("", "", "amal").context("Could not determine project directories")
    }

    pub fn config_path() -> Result<PathBuf> {
        let dirs = Self::project_dirs()?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn data_dir() -> Result<PathBuf> {
        let dirs = Self::project_dirs()?;
        Ok(dirs.data_dir().to_path_buf())
    }

    pub fn db_path() -> Result<PathBuf> {
        Ok(Self::data_dir()?.join("amal.db"))
    }

    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let content =
            std::fs::read_to_string(&path).with_context(|| format!("Reading {:?}", path))?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("Parsing config.toml")
    }

    pub fn ensure_data_dir() -> Result<PathBuf> {
        let dir = Self::data_dir()?;
        std::fs::create_dir_all(&dir)?;
        Ok(dir)
    }
}
