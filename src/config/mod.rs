//! Application configuration.
//!
//! Read from `config.toml` in the platform config directory (or a path given
//! on the command line), then overridden by `CALENDAR_*` environment
//! variables. A missing file means defaults: the local SQLite backend.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Weekday;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::models::ui::ViewMode;

pub const ENV_BACKEND_URL: &str = "CALENDAR_BACKEND_URL";
pub const ENV_API_KEY: &str = "CALENDAR_API_KEY";
pub const ENV_DB_PATH: &str = "CALENDAR_DB_PATH";

const CONFIG_FILE_NAME: &str = "config.toml";
const DATABASE_FILE_NAME: &str = "calendar.db";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub backend: BackendConfig,
    pub default_view: ViewMode,
    pub week_starts_on: WeekStart,
    pub theme: ThemePreference,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend: BackendConfig::Local(LocalConfig::default()),
            default_view: ViewMode::Month,
            week_starts_on: WeekStart::Sunday,
            theme: ThemePreference::System,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum BackendConfig {
    Local(LocalConfig),
    Remote(RemoteConfig),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalConfig {
    /// SQLite file; defaults to the platform data directory
    pub database_path: Option<PathBuf>,
    /// Display name of the single local profile
    pub user_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Project URL, e.g. `https://<project>.supabase.co`
    pub url: String,
    /// Public (anon) API key sent with every request
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    15
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    pub fn weekday(self) -> Weekday {
        match self {
            WeekStart::Sunday => Weekday::Sun,
            WeekStart::Monday => Weekday::Mon,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    System,
    Light,
    Dark,
}

impl AppConfig {
    /// Load from `path` (or the default location), then apply env overrides
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = path.map(Path::to_path_buf).or_else(default_config_path);

        let mut config = match path {
            Some(path) if path.exists() => {
                log::info!("Loading configuration from {}", path.display());
                Self::from_file(&path)?
            }
            Some(path) => {
                log::info!("No configuration at {}, using defaults", path.display());
                Self::default()
            }
            None => Self::default(),
        };

        config.apply_env_overrides();
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse configuration")
    }

    /// `CALENDAR_BACKEND_URL` switches to the hosted backend;
    /// `CALENDAR_API_KEY` and `CALENDAR_DB_PATH` refine whichever is active.
    pub fn apply_env_overrides(&mut self) {
        if let Some(url) = non_empty_env(ENV_BACKEND_URL) {
            let api_key = match &self.backend {
                BackendConfig::Remote(remote) => remote.api_key.clone(),
                BackendConfig::Local(_) => String::new(),
            };
            let timeout_secs = match &self.backend {
                BackendConfig::Remote(remote) => remote.timeout_secs,
                BackendConfig::Local(_) => default_timeout_secs(),
            };
            self.backend = BackendConfig::Remote(RemoteConfig {
                url,
                api_key,
                timeout_secs,
            });
        }

        match &mut self.backend {
            BackendConfig::Remote(remote) => {
                if let Some(api_key) = non_empty_env(ENV_API_KEY) {
                    remote.api_key = api_key;
                }
            }
            BackendConfig::Local(local) => {
                if let Some(db_path) = non_empty_env(ENV_DB_PATH) {
                    local.database_path = Some(PathBuf::from(db_path));
                }
            }
        }
    }
}

impl LocalConfig {
    /// Configured path, else `calendar.db` in the platform data directory
    pub fn resolved_database_path(&self) -> PathBuf {
        self.database_path.clone().unwrap_or_else(|| {
            project_dirs()
                .map(|dirs| dirs.data_dir().join(DATABASE_FILE_NAME))
                .unwrap_or_else(|| PathBuf::from(DATABASE_FILE_NAME))
        })
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "CloudCalendar", "cloud-calendar")
}

pub fn default_config_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

fn non_empty_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}
