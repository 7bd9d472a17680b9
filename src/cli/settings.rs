//! Settings CLI commands
//!
//! Implements CLI commands for showing and updating user settings. Updates
//! apply to the in-memory snapshot first; a failed write is reported as a
//! warning instead of discarding the change.

use clap::Subcommand;

use crate::display::format_amount;
use crate::error::{CentimeError, CentimeResult};
use crate::models::{ExpenseType, SettingsPatch, UserSettings};
use crate::services::SettingsService;
use crate::storage::Storage;

/// Settings subcommands
#[derive(Subcommand)]
pub enum SettingsCommands {
    /// Show the current settings
    Show,
    /// Update one or more settings
    Set {
        /// Monthly spending ceiling
        #[arg(long)]
        monthly_budget: Option<f64>,
        /// Declared net monthly income
        #[arg(long)]
        monthly_income: Option<f64>,
        /// Display currency code (EUR, USD, GBP, ...)
        #[arg(long)]
        currency: Option<String>,
        /// Budget alerts (on, off)
        #[arg(long)]
        alerts: Option<String>,
        /// Alert threshold as a percentage of the budget (50-100)
        #[arg(long)]
        threshold: Option<f64>,
        /// Dark mode preference (on, off)
        #[arg(long)]
        dark_mode: Option<String>,
    },
    /// Set the monthly target for one budget type
    Target {
        /// Budget type (fixed, variable, savings)
        expense_type: String,
        /// Target amount
        amount: f64,
    },
}

/// Handle a settings command
pub fn handle_settings_command(storage: &Storage, cmd: SettingsCommands) -> CentimeResult<()> {
    let service = SettingsService::new(storage);

    match cmd {
        SettingsCommands::Show => {
            let settings = service.show()?;
            print_settings(&settings);
        }

        SettingsCommands::Set {
            monthly_budget,
            monthly_income,
            currency,
            alerts,
            threshold,
            dark_mode,
        } => {
            let patch = SettingsPatch {
                monthly_budget,
                monthly_income,
                currency,
                enable_budget_alerts: alerts
                    .as_deref()
                    .map(|s| parse_toggle("alerts", s))
                    .transpose()?,
                budget_alert_threshold: threshold,
                dark_mode: dark_mode
                    .as_deref()
                    .map(|s| parse_toggle("dark mode", s))
                    .transpose()?,
                ..Default::default()
            };

            if patch.is_empty() {
                println!("Nothing to update. Pass at least one setting flag.");
                return Ok(());
            }

            let updated = service.patch(&patch)?;
            persist_with_warning(&service);
            println!("Settings updated.");
            println!();
            print_settings(&updated);
        }

        SettingsCommands::Target {
            expense_type,
            amount,
        } => {
            let expense_type = ExpenseType::parse(&expense_type).ok_or_else(|| {
                CentimeError::Validation(format!(
                    "Invalid type: '{}'. Valid types: fixed, variable, savings",
                    expense_type
                ))
            })?;

            let updated = service.set_target(expense_type, amount)?;
            persist_with_warning(&service);
            println!(
                "Set {} target to {}",
                expense_type,
                format_amount(amount, &updated.currency)
            );
        }
    }

    Ok(())
}

/// Persist settings, degrading a failed write to a warning
///
/// The in-memory update already happened; losing the write should not
/// make the command fail.
fn persist_with_warning(service: &SettingsService) {
    if let Err(e) = service.persist() {
        eprintln!("Warning: settings were not saved: {}", e);
    }
}

fn parse_toggle(name: &str, s: &str) -> CentimeResult<bool> {
    match s.trim().to_lowercase().as_str() {
        "on" => Ok(true),
        "off" => Ok(false),
        _ => Err(CentimeError::Validation(format!(
            "Invalid {} value: '{}'. Use on or off",
            name, s
        ))),
    }
}

fn print_settings(settings: &UserSettings) {
    let currency = &settings.currency;

    println!("Settings");
    println!("{}", "=".repeat(40));
    println!(
        "{:<18} {}",
        "Monthly budget:",
        format_amount(settings.monthly_budget, currency)
    );
    println!(
        "{:<18} {}",
        "Monthly income:",
        format_amount(settings.monthly_income, currency)
    );
    println!("{:<18} {}", "Currency:", currency);
    println!(
        "{:<18} {}",
        "Budget alerts:",
        if settings.enable_budget_alerts {
            format!("on (at {:.0}% of budget)", settings.budget_alert_threshold)
        } else {
            "off".to_string()
        }
    );
    println!(
        "{:<18} {}",
        "Dark mode:",
        if settings.dark_mode { "on" } else { "off" }
    );
    println!();
    println!("Monthly targets");
    println!("{}", "-".repeat(40));
    for expense_type in ExpenseType::ALL {
        println!(
            "{:<18} {}",
            format!("{}:", expense_type),
            format_amount(settings.budget_targets.get(expense_type), currency)
        );
    }
    println!(
        "{:<18} {}",
        "Total:",
        format_amount(settings.budget_targets.total(), currency)
    );
}
