//! User settings
//!
//! One settings document per profile, created with defaults on first access
//! and only ever patched afterward (never replaced wholesale). Every field
//! has a serde default so documents written by older versions read cleanly.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::expense::ExpenseType;

/// Per-type monthly budget targets
///
/// All three keys are always present; missing keys read as the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BudgetTargets {
    #[serde(default = "default_fixed_target")]
    pub fixed: f64,
    #[serde(default = "default_variable_target")]
    pub variable: f64,
    #[serde(default = "default_savings_target")]
    pub savings: f64,
}

impl BudgetTargets {
    /// Get the target for an expense type
    pub fn get(&self, expense_type: ExpenseType) -> f64 {
        match expense_type {
            ExpenseType::Fixed => self.fixed,
            ExpenseType::Variable => self.variable,
            ExpenseType::Savings => self.savings,
        }
    }

    /// Set the target for an expense type
    pub fn set(&mut self, expense_type: ExpenseType, amount: f64) {
        match expense_type {
            ExpenseType::Fixed => self.fixed = amount,
            ExpenseType::Variable => self.variable = amount,
            ExpenseType::Savings => self.savings = amount,
        }
    }

    /// Sum of the three targets
    pub fn total(&self) -> f64 {
        self.fixed + self.variable + self.savings
    }
}

impl Default for BudgetTargets {
    fn default() -> Self {
        Self {
            fixed: default_fixed_target(),
            variable: default_variable_target(),
            savings: default_savings_target(),
        }
    }
}

/// User settings for one profile
///
/// Serialized with camelCase keys for compatibility with existing data
/// files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    /// Total monthly spending ceiling (legacy aggregate field, independently
    /// settable from the sum of the per-type targets)
    #[serde(default = "default_monthly_budget")]
    pub monthly_budget: f64,

    /// Declared net monthly income
    #[serde(default = "default_monthly_income")]
    pub monthly_income: f64,

    /// Per-type budget targets
    #[serde(default)]
    pub budget_targets: BudgetTargets,

    /// Currency code used purely for display formatting
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Display preference, stored and round-tripped but not interpreted by
    /// the terminal renderer
    #[serde(default)]
    pub dark_mode: bool,

    /// Whether budget-consumption alerts fire at all
    #[serde(default = "default_enable_alerts")]
    pub enable_budget_alerts: bool,

    /// Percentage of the monthly budget at which the alert fires (50-100)
    #[serde(default = "default_alert_threshold")]
    pub budget_alert_threshold: f64,
}

fn default_monthly_budget() -> f64 {
    2000.0
}

fn default_monthly_income() -> f64 {
    2500.0
}

fn default_fixed_target() -> f64 {
    1000.0
}

fn default_variable_target() -> f64 {
    800.0
}

fn default_savings_target() -> f64 {
    200.0
}

fn default_currency() -> String {
    "EUR".to_string()
}

fn default_enable_alerts() -> bool {
    true
}

fn default_alert_threshold() -> f64 {
    80.0
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            monthly_budget: default_monthly_budget(),
            monthly_income: default_monthly_income(),
            budget_targets: BudgetTargets::default(),
            currency: default_currency(),
            dark_mode: false,
            enable_budget_alerts: default_enable_alerts(),
            budget_alert_threshold: default_alert_threshold(),
        }
    }
}

impl UserSettings {
    /// Merge a partial update into these settings, field by field
    ///
    /// Fields absent from the patch keep their current value.
    pub fn apply(&mut self, patch: &SettingsPatch) {
        if let Some(v) = patch.monthly_budget {
            self.monthly_budget = v;
        }
        if let Some(v) = patch.monthly_income {
            self.monthly_income = v;
        }
        if let Some(v) = patch.budget_targets.fixed {
            self.budget_targets.fixed = v;
        }
        if let Some(v) = patch.budget_targets.variable {
            self.budget_targets.variable = v;
        }
        if let Some(v) = patch.budget_targets.savings {
            self.budget_targets.savings = v;
        }
        if let Some(ref v) = patch.currency {
            self.currency = v.clone();
        }
        if let Some(v) = patch.dark_mode {
            self.dark_mode = v;
        }
        if let Some(v) = patch.enable_budget_alerts {
            self.enable_budget_alerts = v;
        }
        if let Some(v) = patch.budget_alert_threshold {
            self.budget_alert_threshold = v;
        }
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<(), SettingsValidationError> {
        for (name, value) in [
            ("monthly_budget", self.monthly_budget),
            ("monthly_income", self.monthly_income),
            ("fixed target", self.budget_targets.fixed),
            ("variable target", self.budget_targets.variable),
            ("savings target", self.budget_targets.savings),
        ] {
            if !value.is_finite() {
                return Err(SettingsValidationError::NonFiniteAmount(name));
            }
            if value < 0.0 {
                return Err(SettingsValidationError::NegativeAmount(name));
            }
        }

        if !(50.0..=100.0).contains(&self.budget_alert_threshold) {
            return Err(SettingsValidationError::ThresholdOutOfRange(
                self.budget_alert_threshold,
            ));
        }

        Ok(())
    }
}

/// Partial settings update
///
/// Every field is optional; only the fields present are applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsPatch {
    pub monthly_budget: Option<f64>,
    pub monthly_income: Option<f64>,
    #[serde(default)]
    pub budget_targets: TargetsPatch,
    pub currency: Option<String>,
    pub dark_mode: Option<bool>,
    pub enable_budget_alerts: Option<bool>,
    pub budget_alert_threshold: Option<f64>,
}

impl SettingsPatch {
    /// Check whether the patch changes anything at all
    pub fn is_empty(&self) -> bool {
        self.monthly_budget.is_none()
            && self.monthly_income.is_none()
            && self.budget_targets.fixed.is_none()
            && self.budget_targets.variable.is_none()
            && self.budget_targets.savings.is_none()
            && self.currency.is_none()
            && self.dark_mode.is_none()
            && self.enable_budget_alerts.is_none()
            && self.budget_alert_threshold.is_none()
    }

    /// Build a patch setting a single per-type target
    pub fn for_target(expense_type: ExpenseType, amount: f64) -> Self {
        let mut patch = Self::default();
        match expense_type {
            ExpenseType::Fixed => patch.budget_targets.fixed = Some(amount),
            ExpenseType::Variable => patch.budget_targets.variable = Some(amount),
            ExpenseType::Savings => patch.budget_targets.savings = Some(amount),
        }
        patch
    }
}

/// Partial update of the per-type targets
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TargetsPatch {
    pub fixed: Option<f64>,
    pub variable: Option<f64>,
    pub savings: Option<f64>,
}

/// Validation errors for settings
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsValidationError {
    NonFiniteAmount(&'static str),
    NegativeAmount(&'static str),
    ThresholdOutOfRange(f64),
}

impl fmt::Display for SettingsValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteAmount(field) => {
                write!(f, "{} must be a finite number", field)
            }
            Self::NegativeAmount(field) => {
                write!(f, "{} cannot be negative", field)
            }
            Self::ThresholdOutOfRange(value) => {
                write!(f, "Alert threshold must be between 50 and 100 (got {})", value)
            }
        }
    }
}

impl std::error::Error for SettingsValidationError {}
