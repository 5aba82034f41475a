use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read config {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("parse config {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub balance: String,
    pub avatar_url: String,
    /// Stars out of five shown on the dashboard.
    pub rating: u8,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "M. Fathin Halim".to_string(),
            balance: "$0703.612.2010".to_string(),
            avatar_url: "https://i.pravatar.cc/40?u=fathin".to_string(),
            rating: 3,
        }
    }
}

impl Profile {
    pub fn stars(&self) -> u8 {
        self.rating.min(5)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Terminal width below which the sidebar collapses into a drawer.
    pub compact_width: u16,
    pub tick_ms: u64,
    /// JSON fixture replacing the built-in records.
    pub data: Option<String>,
    pub profile: Profile,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            compact_width: 100,
            tick_ms: 200,
            data: None,
            profile: Profile::default(),
        }
    }
}

impl Config {
    pub fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str::<Config>(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn data_path(&self) -> Option<PathBuf> {
        self.data.as_deref().and_then(expand_path)
    }
}

/// Load the config file. A missing file yields the defaults.
pub fn load(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    let Some(path) = explicit.map(Path::to_path_buf).or_else(config_path) else {
        return Ok(Config::default());
    };
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound && explicit.is_none() => {
            return Ok(Config::default());
        }
        Err(source) => return Err(ConfigError::Read { path, source }),
    };
    Config::parse(&content, &path)
}

pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("SKILLSWAP_CONFIG").map(PathBuf::from) {
        return Some(path);
    }
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from) {
        return Some(xdg.join("skillswap").join("config.toml"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".config").join("skillswap").join("config.toml"));
    }

    directories::ProjectDirs::from("org", "skillswap", "skillswap")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

pub fn data_dir() -> Option<PathBuf> {
    if let Some(xdg) = std::env::var_os("XDG_DATA_HOME").map(PathBuf::from) {
        return Some(xdg.join("skillswap"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".local").join("share").join("skillswap"));
    }
    directories::ProjectDirs::from("org", "skillswap", "skillswap")
        .map(|dirs| dirs.data_dir().to_path_buf())
}

pub fn log_path() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join("skillswap.log"))
}

pub fn expand_path(path: &str) -> Option<PathBuf> {
    let trimmed = path.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Some(rest) = trimmed.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
            return Some(home.join(rest));
        }
    }

    let mut buf = PathBuf::from(trimmed);
    if buf.is_relative() {
        if let Ok(cwd) = std::env::current_dir() {
            buf = cwd.join(buf);
        }
    }
    Some(buf)
}
