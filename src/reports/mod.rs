//! Reports module for Centime
//!
//! Provides the month-to-date dashboard, spending trends over time,
//! and the budget forecast against per-type targets.

pub mod dashboard;
pub mod forecast;
pub mod trend;

pub use dashboard::{BudgetAlert, DailySpend, DashboardReport};
pub use forecast::{ForecastReport, TargetState, TargetStatus};
pub use trend::{TrendBucket, TrendPeriod, TrendReport};
