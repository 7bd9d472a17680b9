//! Storage layer for Centime
//!
//! Provides JSON file storage with atomic writes and automatic
//! directory creation.

pub mod expenses;
pub mod file_io;
pub mod settings;

pub use expenses::ExpenseRepository;
pub use file_io::{read_json, write_json_atomic};
pub use settings::SettingsRepository;

use crate::config::paths::CentimePaths;
use crate::error::CentimeError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: CentimePaths,
    pub expenses: ExpenseRepository,
    pub settings: SettingsRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: CentimePaths) -> Result<Self, CentimeError> {
        // Ensure directories exist
        paths.ensure_directories()?;

        Ok(Self {
            expenses: ExpenseRepository::new(paths.expenses_file()),
            settings: SettingsRepository::new(paths.settings_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &CentimePaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), CentimeError> {
        self.expenses.load()?;
        self.settings.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), CentimeError> {
        self.expenses.save()?;
        self.settings.save()?;
        Ok(())
    }

    /// Check if storage has been initialized (has any data)
    pub fn is_initialized(&self) -> bool {
        self.paths.is_initialized()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CentimePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        assert!(temp_dir.path().join("default").join("data").exists());
        assert!(!storage.is_initialized());
    }

    #[test]
    fn test_load_all_seeds_settings() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CentimePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();

        storage.load_all().unwrap();

        // First load writes default settings, so the profile now counts
        // as initialized
        assert!(storage.is_initialized());
        assert_eq!(storage.settings.get().unwrap().monthly_budget, 2000.0);
        assert_eq!(storage.expenses.count().unwrap(), 0);
    }

    #[test]
    fn test_save_all_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CentimePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();

        let date = chrono::NaiveDate::from_ymd_opt(2025, 4, 2).unwrap();
        storage
            .expenses
            .create(crate::models::ExpenseDraft::new(
                12.0,
                date,
                crate::models::Category::Food,
            ))
            .unwrap();
        storage.save_all().unwrap();

        let paths2 = CentimePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage2 = Storage::new(paths2).unwrap();
        storage2.load_all().unwrap();
        assert_eq!(storage2.expenses.count().unwrap(), 1);
    }
}
