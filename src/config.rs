//! Jadwal configuration.
//!
//! Loaded from `~/.jadwal/config.toml`. A missing file means defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Jadwal configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
    /// IANA time zone used to decide what "today" is.
    /// The system time zone when unset.
    pub time_zone: Option<String>,

    /// Where the database lives. `~/.jadwal/jadwal.sqlite` when unset.
    pub database: Option<PathBuf>,
}

impl Config {
    /// Load config from `~/.jadwal/config.toml`.
    ///
    /// Returns defaults when the file (or the home directory) is missing,
    /// and an error when the file exists but can't be read or parsed.
    pub fn load() -> Result<Self, String> {
        match Self::path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load config from an explicit path, with the same missing-file rule.
    pub fn load_from(path: &Path) -> Result<Self, String> {
        let contents = match fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("no config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(format!("failed to read {}: {e}", path.display())),
        };

        toml::from_str(&contents).map_err(|e| format!("invalid config at {}: {e}", path.display()))
    }

    /// The config file path: `~/.jadwal/config.toml`.
    pub fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".jadwal").join("config.toml"))
    }
}
