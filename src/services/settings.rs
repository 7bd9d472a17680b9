//! Settings service
//!
//! Validates and applies partial settings updates. Updates land in
//! memory first; persisting is a separate step so the caller can treat
//! a failed write as a warning rather than losing the change.

use crate::error::{CentimeError, CentimeResult};
use crate::models::{ExpenseType, SettingsPatch, UserSettings};
use crate::storage::Storage;

/// Service for settings management
pub struct SettingsService<'a> {
    storage: &'a Storage,
}

impl<'a> SettingsService<'a> {
    /// Create a new settings service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Get the current settings
    pub fn show(&self) -> CentimeResult<UserSettings> {
        self.storage.settings.get()
    }

    /// Apply a partial update to the settings
    ///
    /// The merged result is validated before anything changes, so an
    /// invalid patch leaves both memory and disk untouched.
    pub fn patch(&self, patch: &SettingsPatch) -> CentimeResult<UserSettings> {
        if patch.is_empty() {
            return self.storage.settings.get();
        }

        let mut candidate = self.storage.settings.get()?;
        candidate.apply(patch);
        candidate
            .validate()
            .map_err(|e| CentimeError::Validation(e.to_string()))?;

        self.storage.settings.apply(patch)
    }

    /// Set the monthly target for one expense type
    pub fn set_target(&self, expense_type: ExpenseType, amount: f64) -> CentimeResult<UserSettings> {
        self.patch(&SettingsPatch::for_target(expense_type, amount))
    }

    /// Write the current settings to disk
    pub fn persist(&self) -> CentimeResult<()> {
        self.storage.settings.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::CentimePaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = CentimePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_patch_merges_and_returns_updated() {
        let (_temp_dir, storage) = create_test_storage();
        let service = SettingsService::new(&storage);

        let patch = SettingsPatch {
            monthly_budget: Some(1800.0),
            ..Default::default()
        };
        let updated = service.patch(&patch).unwrap();

        assert_eq!(updated.monthly_budget, 1800.0);
        // Untouched fields survive
        assert_eq!(updated.monthly_income, 2500.0);
        assert_eq!(updated.currency, "EUR");
    }

    #[test]
    fn test_invalid_patch_changes_nothing() {
        let (_temp_dir, storage) = create_test_storage();
        let service = SettingsService::new(&storage);

        let patch = SettingsPatch {
            budget_alert_threshold: Some(120.0),
            monthly_budget: Some(1800.0),
            ..Default::default()
        };
        let result = service.patch(&patch);
        assert!(matches!(result, Err(CentimeError::Validation(_))));

        // Neither field of the rejected patch landed
        let current = service.show().unwrap();
        assert_eq!(current.monthly_budget, 2000.0);
        assert_eq!(current.budget_alert_threshold, 80.0);
    }

    #[test]
    fn test_empty_patch_is_noop() {
        let (_temp_dir, storage) = create_test_storage();
        let service = SettingsService::new(&storage);

        let before = service.show().unwrap();
        let after = service.patch(&SettingsPatch::default()).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_set_target() {
        let (_temp_dir, storage) = create_test_storage();
        let service = SettingsService::new(&storage);

        let updated = service.set_target(ExpenseType::Savings, 350.0).unwrap();
        assert_eq!(updated.budget_targets.savings, 350.0);
        assert_eq!(updated.budget_targets.fixed, 1000.0);
        assert_eq!(updated.budget_targets.variable, 800.0);
    }

    #[test]
    fn test_persist_round_trip() {
        let (temp_dir, storage) = create_test_storage();
        let service = SettingsService::new(&storage);

        let patch = SettingsPatch {
            currency: Some("GBP".to_string()),
            ..Default::default()
        };
        service.patch(&patch).unwrap();
        service.persist().unwrap();

        let paths = CentimePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage2 = Storage::new(paths).unwrap();
        storage2.load_all().unwrap();
        assert_eq!(storage2.settings.get().unwrap().currency, "GBP");
    }
}
