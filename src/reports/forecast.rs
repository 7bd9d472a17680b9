//! Budget forecast report
//!
//! Compares current-month spending per expense type against the
//! configured targets and derives the savings headroom figures.

use chrono::{Datelike, NaiveDate};

use crate::display::format::{format_amount, paint, progress_bar, GREEN, RED};
use crate::models::{Expense, ExpenseType, UserSettings};

/// Position of actual spending against one target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetState {
    /// Actual exceeds the target
    OverBudget,
    /// Actual equals the target exactly
    Met,
    /// Actual is below the target
    OnTrack,
}

/// Actual vs target for one expense type
#[derive(Debug, Clone)]
pub struct TargetStatus {
    pub expense_type: ExpenseType,
    pub target: f64,
    pub actual: f64,
    /// Share of the target used, 0 when the target is not positive
    pub percent: f64,
    /// Percent capped at 100 for progress display
    pub bar_percent: f64,
    pub is_over: bool,
    pub state: TargetState,
}

impl TargetStatus {
    fn new(expense_type: ExpenseType, target: f64, actual: f64) -> Self {
        let percent = if target > 0.0 {
            actual / target * 100.0
        } else {
            0.0
        };
        let is_over = actual > target;
        let state = if is_over {
            TargetState::OverBudget
        } else if percent >= 100.0 {
            TargetState::Met
        } else {
            TargetState::OnTrack
        };

        Self {
            expense_type,
            target,
            actual,
            percent,
            bar_percent: percent.min(100.0),
            is_over,
            state,
        }
    }
}

/// Month-to-date forecast against the budget targets
#[derive(Debug, Clone)]
pub struct ForecastReport {
    /// Month being reported, e.g. "June 2025"
    pub month_label: String,
    pub monthly_income: f64,
    /// One status per expense type, in Fixed/Variable/Savings order
    pub statuses: Vec<TargetStatus>,
    /// Sum of the three targets
    pub total_budget: f64,
    /// Sum of the three actuals
    pub total_actual: f64,
    /// Income minus the fixed and variable targets
    pub savings_capacity: f64,
    /// Income minus actual spending this month
    pub real_disposable: f64,
    pub currency: String,
}

impl ForecastReport {
    /// Build the forecast from an expense snapshot
    pub fn generate(expenses: &[Expense], settings: &UserSettings, today: NaiveDate) -> Self {
        let statuses: Vec<TargetStatus> = ExpenseType::ALL
            .iter()
            .map(|&expense_type| {
                let actual: f64 = expenses
                    .iter()
                    .filter(|e| {
                        e.expense_type == expense_type
                            && e.date.year() == today.year()
                            && e.date.month() == today.month()
                    })
                    .map(|e| e.amount)
                    .sum();
                TargetStatus::new(expense_type, settings.budget_targets.get(expense_type), actual)
            })
            .collect();

        let total_budget = settings.budget_targets.total();
        let total_actual: f64 = statuses.iter().map(|s| s.actual).sum();
        let savings_capacity = settings.monthly_income
            - settings.budget_targets.fixed
            - settings.budget_targets.variable;
        let real_disposable = settings.monthly_income - total_actual;

        Self {
            month_label: today.format("%B %Y").to_string(),
            monthly_income: settings.monthly_income,
            statuses,
            total_budget,
            total_actual,
            savings_capacity,
            real_disposable,
            currency: settings.currency.clone(),
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("Forecast: {}\n", self.month_label));
        output.push_str(&"=".repeat(64));
        output.push('\n');
        output.push_str(&format!(
            "{:<18} {:>14}\n\n",
            "Monthly income:",
            format_amount(self.monthly_income, &self.currency)
        ));

        for status in &self.statuses {
            let note = match status.state {
                TargetState::OverBudget => {
                    let over = status.actual - status.target;
                    format!(
                        " {}",
                        paint(
                            &format!("over by {}", format_amount(over, &self.currency)),
                            RED
                        )
                    )
                }
                TargetState::Met => format!(" {}", paint("met exactly", GREEN)),
                TargetState::OnTrack => String::new(),
            };

            output.push_str(&format!(
                "{:<10} {} {:>12} of {} ({:.0}%){}\n",
                status.expense_type.to_string(),
                progress_bar(status.bar_percent, 20),
                format_amount(status.actual, &self.currency),
                format_amount(status.target, &self.currency),
                status.percent,
                note
            ));
        }

        output.push_str(&"-".repeat(64));
        output.push('\n');
        output.push_str(&format!(
            "{:<18} {:>14}\n",
            "Total targets:",
            format_amount(self.total_budget, &self.currency)
        ));
        output.push_str(&format!(
            "{:<18} {:>14}\n",
            "Total actual:",
            format_amount(self.total_actual, &self.currency)
        ));
        output.push_str(&format!(
            "{:<18} {:>14}\n",
            "Savings capacity:",
            format_amount(self.savings_capacity, &self.currency)
        ));

        let disposable = format_amount(self.real_disposable, &self.currency);
        let disposable = if self.real_disposable < 0.0 {
            paint(&disposable, RED)
        } else {
            paint(&disposable, GREEN)
        };
        output.push_str(&format!("{:<18} {:>14}\n", "Real disposable:", disposable));

        output
    }
}
