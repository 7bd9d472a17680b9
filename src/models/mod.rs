//! Core data models for Centime
//!
//! This module contains the data structures that represent the budgeting
//! domain: expenses, categories, user settings, and loan math.

pub mod category;
pub mod expense;
pub mod loan;
pub mod settings;

pub use category::Category;
pub use expense::{
    Expense, ExpenseDraft, ExpenseId, ExpenseType, PaymentMethod, DEFAULT_DESCRIPTION,
};
pub use loan::{LoanQuote, LoanTerms};
pub use settings::{BudgetTargets, SettingsPatch, TargetsPatch, UserSettings};
