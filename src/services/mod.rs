//! Service layer for Centime
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, defaulting, and persistence ordering.

pub mod demo;
pub mod expense;
pub mod settings;

pub use demo::DemoService;
pub use expense::{AddExpenseInput, ExpenseFilter, ExpenseService};
pub use settings::SettingsService;
