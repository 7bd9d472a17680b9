//! Settings repository for JSON storage
//!
//! Manages the single settings.json document. Unlike the expense store
//! this holds one value, not a collection.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::CentimeError;
use crate::models::{SettingsPatch, UserSettings};

use super::file_io::{read_json, write_json_atomic};

/// Repository for user settings persistence
pub struct SettingsRepository {
    path: PathBuf,
    data: RwLock<UserSettings>,
}

impl SettingsRepository {
    /// Create a new settings repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(UserSettings::default()),
        }
    }

    /// Load settings from disk
    ///
    /// A missing file is not an error: defaults are adopted and written
    /// out once, so the next load finds a real document. Fields absent
    /// from an existing document fall back to their defaults without
    /// rewriting the file.
    pub fn load(&self) -> Result<(), CentimeError> {
        let settings = if self.path.exists() {
            read_json(&self.path)?
        } else {
            let defaults = UserSettings::default();
            write_json_atomic(&self.path, &defaults)?;
            defaults
        };

        let mut data = self
            .data
            .write()
            .map_err(|e| CentimeError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *data = settings;

        Ok(())
    }

    /// Save settings to disk
    pub fn save(&self) -> Result<(), CentimeError> {
        let data = self
            .data
            .read()
            .map_err(|e| CentimeError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        write_json_atomic(&self.path, &*data)
    }

    /// Get a copy of the current settings
    pub fn get(&self) -> Result<UserSettings, CentimeError> {
        let data = self
            .data
            .read()
            .map_err(|e| CentimeError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.clone())
    }

    /// Apply a patch to the in-memory settings and return the result
    ///
    /// The change takes effect immediately; persisting it is a separate
    /// step so a failed write never rolls back what the session sees.
    pub fn apply(&self, patch: &SettingsPatch) -> Result<UserSettings, CentimeError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| CentimeError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.apply(patch);
        Ok(data.clone())
    }
}
