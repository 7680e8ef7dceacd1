//! Local persistence for the profile, schedule entries, and meetings.
//!
//! Everything lives in one `SQLite` file as a small key-value table of JSON
//! blobs:
//!
//! ```text
//! blobs(key TEXT PRIMARY KEY, value TEXT)
//!   profile   # Profile, absent until onboarding is done
//!   schedule  # Vec<ScheduleEntry>
//!   meetings  # Vec<Meeting>
//! ```
//!
//! Each save overwrites the whole blob. A blob that no longer decodes is
//! read as empty, so a bad write never locks the user out of the app.

mod profile;
mod schedule;

use std::{fs, io, path::Path, path::PathBuf};

use rusqlite::{Connection, OptionalExtension};
use serde::{Serialize, de::DeserializeOwned};

use crate::model::{Meeting, Profile, ScheduleEntry};

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = core::result::Result<T, StorageError>;

/// The persistence port: whatever owns the collections loads and saves
/// through this, one whole collection at a time.
pub trait Store {
    fn load_entries(&self) -> Result<Vec<ScheduleEntry>>;
    fn save_entries(&self, entries: &[ScheduleEntry]) -> Result<()>;

    fn load_meetings(&self) -> Result<Vec<Meeting>>;
    fn save_meetings(&self, meetings: &[Meeting]) -> Result<()>;

    fn load_profile(&self) -> Result<Option<Profile>>;
    fn save_profile(&self, profile: &Profile) -> Result<()>;
    fn clear_profile(&self) -> Result<()>;

    /// Onboarding is complete once a profile has been saved.
    fn is_onboarded(&self) -> Result<bool> {
        Ok(self.load_profile()?.is_some())
    }
}

/// `SQLite`-backed blob storage.
pub struct Storage {
    conn: Connection,
}

impl Storage {
    /// Opens (or creates) the database at `path`.
    ///
    /// The parent directory is created if it doesn't exist.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        log::debug!("opening storage at {}", path.display());
        Self::init(Connection::open(path)?)
    }

    /// A throwaway database that lives as long as the value.
    #[cfg(test)]
    pub fn open_in_memory() -> Result<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    /// Returns the default database path: `~/.jadwal/jadwal.sqlite`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".jadwal").join("jadwal.sqlite"))
    }

    fn init(conn: Connection) -> Result<Self> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS blobs (key TEXT PRIMARY KEY, value TEXT NOT NULL)",
            [],
        )?;
        Ok(Self { conn })
    }

    fn get_raw(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM blobs WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    fn put_raw(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO blobs (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            rusqlite::params![key, value],
        )?;
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<()> {
        self.conn
            .execute("DELETE FROM blobs WHERE key = ?1", [key])?;
        Ok(())
    }

    /// Reads and decodes a blob. Missing or undecodable blobs are `None`.
    fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let Some(raw) = self.get_raw(key)? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                log::warn!("stored '{key}' could not be decoded, treating it as empty: {e}");
                Ok(None)
            }
        }
    }

    fn put<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let json = serde_json::to_string(value)?;
        self.put_raw(key, &json)
    }
}

impl Store for Storage {
    fn load_entries(&self) -> Result<Vec<ScheduleEntry>> {
        self.read_entries()
    }

    fn save_entries(&self, entries: &[ScheduleEntry]) -> Result<()> {
        self.write_entries(entries)
    }

    fn load_meetings(&self) -> Result<Vec<Meeting>> {
        self.read_meetings()
    }

    fn save_meetings(&self, meetings: &[Meeting]) -> Result<()> {
        self.write_meetings(meetings)
    }

    fn load_profile(&self) -> Result<Option<Profile>> {
        self.read_profile()
    }

    fn save_profile(&self, profile: &Profile) -> Result<()> {
        self.write_profile(profile)
    }

    fn clear_profile(&self) -> Result<()> {
        self.delete_profile()
    }
}
