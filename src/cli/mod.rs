//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod data;
pub mod expense;
pub mod report;
pub mod settings;
pub mod simulate;

pub use data::{handle_data_command, DataCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use report::{handle_report_command, ReportCommands};
pub use settings::{handle_settings_command, SettingsCommands};
pub use simulate::{handle_simulate_command, SimulateCommands};
