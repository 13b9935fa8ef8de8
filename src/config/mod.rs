use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_pilots")]
    pub pilots: Vec<String>,
    #[serde(default = "default_drones")]
    pub drones: Vec<String>,
    #[serde(default = "default_start")]
    pub default_start: String,
    #[serde(default = "default_end")]
    pub default_end: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}

fn default_pilots() -> Vec<String> {
    [
        "Aleksandra Kruszewska",
        "Arnold Hoyer",
        "Bertalan Szabo-Papp",
        "Joao Scotti",
        "Michael Lloyd",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_drones() -> Vec<String> {
    [
        "DJI Mini 3 - 1581F4XFC2285007E8MV",
        "DJI Mini 3 - Manchester",
        "DJI Mini 2",
        "DJI Mavic 3 Enterprise",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_start() -> String {
    "10:00".to_string()
}
fn default_end() -> String {
    "11:00".to_string()
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            pilots: default_pilots(),
            drones: default_drones(),
            default_start: default_start(),
            default_end: default_end(),
            separator_char: default_separator_char(),
        }
    }
}

/// Look `name` up in `list`: exact match first, then a case-insensitive
/// match normalised to the configured spelling.
fn resolve_in(list: &[String], name: &str) -> Option<String> {
    let name = name.trim();
    list.iter()
        .find(|c| c.as_str() == name)
        .or_else(|| list.iter().find(|c| c.to_lowercase() == name.to_lowercase()))
        .cloned()
}

fn check_list(kind: &str, list: &[String]) -> AppResult<()> {
    if list.is_empty() {
        return Err(AppError::Config(format!("no {kind} configured")));
    }

    for (i, item) in list.iter().enumerate() {
        if item.trim().is_empty() {
            return Err(AppError::Config(format!("empty entry in {kind} list")));
        }
        if list[..i].iter().any(|other| other.to_lowercase() == item.to_lowercase()) {
            return Err(AppError::Config(format!("duplicate {kind} entry '{item}'")));
        }
    }
    Ok(())
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("dronelog")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".dronelog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("dronelog.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("dronelog.sqlite")
    }

    /// Load the configuration file, or return defaults if there is none.
    /// In test mode the user's file is never read.
    pub fn load(is_test: bool) -> AppResult<Self> {
        let path = Self::config_file();
        if is_test || !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let mut cfg: Config = serde_yaml::from_str(&content).map_err(|_| AppError::ConfigLoad)?;
        cfg.database = expand_tilde(&cfg.database).to_string_lossy().to_string();
        Ok(cfg)
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        let mut file = fs::File::create(path).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes())
            .map_err(|_| AppError::ConfigSave)?;
        Ok(())
    }

    /// Validate the pilot and drone lists.
    pub fn check_fleet(&self) -> AppResult<()> {
        check_list("pilot", &self.pilots)?;
        check_list("drone", &self.drones)
    }

    pub fn resolve_pilot(&self, name: &str) -> AppResult<String> {
        resolve_in(&self.pilots, name).ok_or_else(|| AppError::UnknownPilot(name.to_string()))
    }

    pub fn resolve_drone(&self, name: &str) -> AppResult<String> {
        resolve_in(&self.drones, name).ok_or_else(|| AppError::UnknownDrone(name.to_string()))
    }

    pub fn separator(&self) -> char {
        self.separator_char.chars().next().unwrap_or('-')
    }

    /// `--db` value as a path: `~` expanded, relative names placed in the
    /// config directory.
    pub fn resolve_db_path(name: &str) -> PathBuf {
        let p = expand_tilde(name);
        if p.is_absolute() {
            p
        } else {
            Self::config_dir().join(p)
        }
    }

    /// Initialize configuration and database files.
    /// Returns the database path that was configured.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();

        let db_path = match custom_db {
            Some(name) => Self::resolve_db_path(&name),
            None => Self::database_file(),
        };

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        if !is_test {
            fs::create_dir_all(&dir)?;
            let path = Self::config_file();

            // Keep an existing fleet, only point it at the new database
            let mut config = if path.exists() {
                Self::load_from(&path)?
            } else {
                Self::default()
            };
            config.database = db_path.to_string_lossy().to_string();
            config.save_to(&path)?;
        }

        Ok(db_path)
    }
}
