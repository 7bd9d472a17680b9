//! Path management for Centime
//!
//! Provides XDG-compliant path resolution for configuration and data files.
//! Each profile (the local equivalent of an account) gets its own directory
//! so several budgets can live side by side on one machine.
//!
//! ## Path Resolution Order
//!
//! 1. `CENTIME_DATA_DIR` environment variable (if set)
//! 2. Platform config directory via `directories` (Linux: `~/.config/centime`,
//!    macOS: `~/Library/Application Support/centime`, Windows: `%APPDATA%\centime`)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::CentimeError;

/// Default profile name used when none is given on the command line
pub const DEFAULT_PROFILE: &str = "default";

/// Manages all paths used by Centime
#[derive(Debug, Clone)]
pub struct CentimePaths {
    /// Base directory for all Centime data
    base_dir: PathBuf,
    /// Active profile name
    profile: String,
}

impl CentimePaths {
    /// Create a new CentimePaths instance for the given profile
    ///
    /// Path resolution:
    /// 1. `CENTIME_DATA_DIR` env var (explicit override)
    /// 2. Platform config directory via `directories`
    ///
    /// # Errors
    ///
    /// Returns an error if the platform config directory cannot be determined.
    pub fn new(profile: impl Into<String>) -> Result<Self, CentimeError> {
        let base_dir = if let Ok(custom) = std::env::var("CENTIME_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            let dirs = ProjectDirs::from("", "", "centime").ok_or_else(|| {
                CentimeError::Config("Could not determine a config directory".into())
            })?;
            dirs.config_dir().to_path_buf()
        };

        Ok(Self {
            base_dir,
            profile: profile.into(),
        })
    }

    /// Create CentimePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self {
            base_dir,
            profile: DEFAULT_PROFILE.to_string(),
        }
    }

    /// Create CentimePaths with a custom base directory and profile
    pub fn with_base_dir_and_profile(base_dir: PathBuf, profile: impl Into<String>) -> Self {
        Self {
            base_dir,
            profile: profile.into(),
        }
    }

    /// Get the base directory (~/.config/centime/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the active profile name
    pub fn profile(&self) -> &str {
        &self.profile
    }

    /// Get the directory for the active profile
    pub fn profile_dir(&self) -> PathBuf {
        self.base_dir.join(&self.profile)
    }

    /// Get the data directory for the active profile
    pub fn data_dir(&self) -> PathBuf {
        self.profile_dir().join("data")
    }

    /// Get the path to the settings file for the active profile
    pub fn settings_file(&self) -> PathBuf {
        self.profile_dir().join("settings.json")
    }

    /// Get the path to expenses.json for the active profile
    pub fn expenses_file(&self) -> PathBuf {
        self.data_dir().join("expenses.json")
    }

    /// Ensure all required directories exist
    ///
    /// Creates:
    /// - Base directory (~/.config/centime/)
    /// - Profile directory (~/.config/centime/<profile>/)
    /// - Data directory (~/.config/centime/<profile>/data/)
    pub fn ensure_directories(&self) -> Result<(), CentimeError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| CentimeError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| CentimeError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if this profile has been initialized (settings file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CentimePaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.profile(), DEFAULT_PROFILE);
        assert_eq!(paths.profile_dir(), temp_dir.path().join("default"));
        assert_eq!(paths.data_dir(), temp_dir.path().join("default").join("data"));
    }

    #[test]
    fn test_profiles_are_isolated() {
        let temp_dir = TempDir::new().unwrap();
        let personal = CentimePaths::with_base_dir_and_profile(
            temp_dir.path().to_path_buf(),
            "personal",
        );
        let shared = CentimePaths::with_base_dir_and_profile(
            temp_dir.path().to_path_buf(),
            "shared",
        );

        assert_ne!(personal.expenses_file(), shared.expenses_file());
        assert_ne!(personal.settings_file(), shared.settings_file());
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CentimePaths::with_base_dir(temp_dir.path().to_path_buf());

        paths.ensure_directories().unwrap();

        assert!(paths.profile_dir().exists());
        assert!(paths.data_dir().exists());
    }

    #[test]
    fn test_file_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CentimePaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(
            paths.settings_file(),
            temp_dir.path().join("default").join("settings.json")
        );
        assert_eq!(
            paths.expenses_file(),
            temp_dir.path().join("default").join("data").join("expenses.json")
        );
    }
}
