//! Display formatting for terminal output
//!
//! Provides utilities for formatting data models for terminal display,
//! including tables, currency amounts, and progress bars.

pub mod expense;
pub mod format;

pub use expense::format_expense_list;
pub use format::{currency_symbol, format_amount, format_date, progress_bar};
