//! Dashboard report
//!
//! Aggregates the expense snapshot into the month-to-date view: totals,
//! remaining budget, category breakdown, trailing daily series, and the
//! budget alert.

use std::collections::HashMap;

use chrono::{Datelike, Duration, NaiveDate};

use crate::display::format::{format_amount, paint, progress_bar, GREEN, RED, YELLOW};
use crate::models::{Category, Expense, UserSettings};

/// Days covered by the trailing daily series
pub const DAILY_WINDOW_DAYS: usize = 7;

/// Spending for one day of the trailing window
#[derive(Debug, Clone, PartialEq)]
pub struct DailySpend {
    pub date: NaiveDate,
    /// Abbreviated weekday name, e.g. "Mon"
    pub label: String,
    pub amount: f64,
}

/// Raised when month-to-date spending crosses the alert threshold
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetAlert {
    pub total_spent: f64,
    /// Unclamped share of the budget, in percent
    pub percentage: f64,
    pub threshold: f64,
}

impl BudgetAlert {
    /// Evaluate the alert condition for the current month
    ///
    /// Fires only when alerts are enabled, the budget is positive, and
    /// the unclamped percentage reaches the threshold. Crossing exactly
    /// the threshold fires.
    pub fn evaluate(
        expenses: &[Expense],
        settings: &UserSettings,
        today: NaiveDate,
    ) -> Option<Self> {
        if !settings.enable_budget_alerts || settings.monthly_budget <= 0.0 {
            return None;
        }

        let total_spent: f64 = expenses
            .iter()
            .filter(|e| in_month(e.date, today))
            .map(|e| e.amount)
            .sum();

        let percentage = total_spent / settings.monthly_budget * 100.0;
        if percentage >= settings.budget_alert_threshold {
            Some(Self {
                total_spent,
                percentage,
                threshold: settings.budget_alert_threshold,
            })
        } else {
            None
        }
    }
}

/// Month-to-date dashboard snapshot
#[derive(Debug, Clone)]
pub struct DashboardReport {
    /// Month being reported, e.g. "June 2025"
    pub month_label: String,
    pub monthly_total: f64,
    pub daily_total: f64,
    /// Monthly total divided by the day of month
    pub daily_average: f64,
    pub monthly_budget: f64,
    /// May go negative on overspend
    pub remaining_budget: f64,
    /// Clamped to 0..=100 for progress display
    pub percent_used: f64,
    /// Unclamped, the value alerts are judged on
    pub percent_used_raw: f64,
    /// Current-month totals per category, first-occurrence order
    pub category_breakdown: Vec<(Category, f64)>,
    /// Trailing window of daily spending, oldest first
    pub daily_series: Vec<DailySpend>,
    pub alert: Option<BudgetAlert>,
    pub currency: String,
}

impl DashboardReport {
    /// Build the dashboard from an expense snapshot
    pub fn generate(expenses: &[Expense], settings: &UserSettings, today: NaiveDate) -> Self {
        let monthly_total: f64 = expenses
            .iter()
            .filter(|e| in_month(e.date, today))
            .map(|e| e.amount)
            .sum();

        let daily_total: f64 = expenses
            .iter()
            .filter(|e| e.date == today)
            .map(|e| e.amount)
            .sum();

        let daily_average = monthly_total / today.day() as f64;
        let remaining_budget = settings.monthly_budget - monthly_total;

        // A non-positive budget can't express a meaningful percentage
        let (percent_used_raw, percent_used) = if settings.monthly_budget > 0.0 {
            let raw = monthly_total / settings.monthly_budget * 100.0;
            (raw, raw.clamp(0.0, 100.0))
        } else {
            (0.0, 0.0)
        };

        Self {
            month_label: today.format("%B %Y").to_string(),
            monthly_total,
            daily_total,
            daily_average,
            monthly_budget: settings.monthly_budget,
            remaining_budget,
            percent_used,
            percent_used_raw,
            category_breakdown: category_breakdown(expenses, today),
            daily_series: daily_series(expenses, today, DAILY_WINDOW_DAYS),
            alert: BudgetAlert::evaluate(expenses, settings, today),
            currency: settings.currency.clone(),
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("Dashboard: {}\n", self.month_label));
        output.push_str(&"=".repeat(64));
        output.push('\n');

        output.push_str(&format!(
            "{:<20} {:>14}\n",
            "Monthly spend:",
            format_amount(self.monthly_total, &self.currency)
        ));
        output.push_str(&format!(
            "{:<20} {:>14}\n",
            "Spent today:",
            format_amount(self.daily_total, &self.currency)
        ));
        output.push_str(&format!(
            "{:<20} {:>14}\n",
            "Daily average:",
            format_amount(self.daily_average, &self.currency)
        ));

        let remaining = format_amount(self.remaining_budget, &self.currency);
        let remaining = if self.remaining_budget < 0.0 {
            paint(&remaining, RED)
        } else {
            paint(&remaining, GREEN)
        };
        output.push_str(&format!("{:<20} {:>14}\n", "Remaining budget:", remaining));

        output.push_str(&format!(
            "{:<20} {} {:.0}% of {}\n",
            "Budget used:",
            progress_bar(self.percent_used, 20),
            self.percent_used,
            format_amount(self.monthly_budget, &self.currency)
        ));

        if let Some(alert) = &self.alert {
            output.push('\n');
            output.push_str(&paint(
                &format!(
                    "Budget alert: {} spent ({:.1}% of budget, threshold {:.0}%)",
                    format_amount(alert.total_spent, &self.currency),
                    alert.percentage,
                    alert.threshold
                ),
                YELLOW,
            ));
            output.push('\n');
        }

        if !self.category_breakdown.is_empty() {
            output.push('\n');
            output.push_str(&format!("Spending by category ({})\n", self.month_label));
            output.push_str(&"-".repeat(64));
            output.push('\n');

            let total: f64 = self.category_breakdown.iter().map(|(_, v)| v).sum();
            for (category, amount) in &self.category_breakdown {
                let share = if total != 0.0 {
                    amount / total * 100.0
                } else {
                    0.0
                };
                output.push_str(&format!(
                    "{} {:<12} {:>12} {} {:>5.1}%\n",
                    category.glyph(),
                    category.to_string(),
                    format_amount(*amount, &self.currency),
                    progress_bar(share, 16),
                    share
                ));
            }
        }

        output.push('\n');
        output.push_str(&format!("Last {} days\n", self.daily_series.len()));
        output.push_str(&"-".repeat(64));
        output.push('\n');

        let max_daily = self
            .daily_series
            .iter()
            .map(|d| d.amount)
            .fold(0.0_f64, f64::max);
        for day in &self.daily_series {
            let share = if max_daily > 0.0 {
                day.amount / max_daily * 100.0
            } else {
                0.0
            };
            output.push_str(&format!(
                "{:<4} {:>12} {}\n",
                day.label,
                format_amount(day.amount, &self.currency),
                progress_bar(share, 16)
            ));
        }

        output
    }
}

/// Current-month totals per category, in order of first occurrence
///
/// Categories with no entries this month are omitted rather than listed
/// at zero.
pub fn category_breakdown(expenses: &[Expense], today: NaiveDate) -> Vec<(Category, f64)> {
    let mut order: Vec<Category> = Vec::new();
    let mut sums: HashMap<Category, f64> = HashMap::new();

    for expense in expenses.iter().filter(|e| in_month(e.date, today)) {
        if !sums.contains_key(&expense.category) {
            order.push(expense.category);
        }
        *sums.entry(expense.category).or_insert(0.0) += expense.amount;
    }

    order
        .into_iter()
        .map(|c| {
            let total = sums.get(&c).copied().unwrap_or(0.0);
            (c, total)
        })
        .collect()
}

/// Daily spending for the trailing window ending at `today`
///
/// Always yields exactly `window_days` entries, oldest first, with 0 for
/// days without expenses.
pub fn daily_series(expenses: &[Expense], today: NaiveDate, window_days: usize) -> Vec<DailySpend> {
    let mut series = Vec::with_capacity(window_days);

    for offset in (0..window_days as i64).rev() {
        let date = today - Duration::days(offset);
        let amount = expenses
            .iter()
            .filter(|e| e.date == date)
            .map(|e| e.amount)
            .sum();
        series.push(DailySpend {
            date,
            label: date.format("%a").to_string(),
            amount,
        });
    }

    series
}

fn in_month(date: NaiveDate, of: NaiveDate) -> bool {
    date.year() == of.year() && date.month() == of.month()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseDraft, ExpenseId, PaymentMethod};
    use chrono::Utc;

    fn expense(amount: f64, date: NaiveDate, category: Category) -> Expense {
        let draft = ExpenseDraft::new(amount, date, category);
        Expense {
            id: ExpenseId::new(),
            amount: draft.amount,
            date: draft.date,
            category: draft.category,
            expense_type: draft.expense_type,
            description: "test".to_string(),
            payment_method: PaymentMethod::Card,
            created_at: Utc::now(),
        }
    }

    fn settings_with_budget(budget: f64) -> UserSettings {
        UserSettings {
            monthly_budget: budget,
            ..Default::default()
        }
    }

    #[test]
    fn test_monthly_total_respects_month_boundaries() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        let expenses = vec![
            // Last day of the previous month: excluded
            expense(100.0, NaiveDate::from_ymd_opt(2025, 5, 31).unwrap(), Category::Food),
            // First day of the current month: included
            expense(40.0, NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(), Category::Food),
            expense(60.0, NaiveDate::from_ymd_opt(2025, 6, 15).unwrap(), Category::Food),
            // Same month last year: excluded
            expense(500.0, NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(), Category::Food),
        ];

        let report = DashboardReport::generate(&expenses, &settings_with_budget(2000.0), today);
        assert_eq!(report.monthly_total, 100.0);
        assert_eq!(report.daily_total, 60.0);
    }

    #[test]
    fn test_remaining_budget_identity() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        let expenses = vec![
            expense(100.0, today, Category::Food),
            expense(250.0, today, Category::Transport),
        ];

        let settings = settings_with_budget(2000.0);
        let report = DashboardReport::generate(&expenses, &settings, today);
        assert_eq!(
            report.remaining_budget + report.monthly_total,
            settings.monthly_budget
        );
    }

    #[test]
    fn test_overspend_goes_negative_and_percent_clamps() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        let expenses = vec![expense(2500.0, today, Category::Housing)];

        let report = DashboardReport::generate(&expenses, &settings_with_budget(2000.0), today);
        assert_eq!(report.remaining_budget, -500.0);
        assert_eq!(report.percent_used, 100.0);
        assert_eq!(report.percent_used_raw, 125.0);
    }

    #[test]
    fn test_zero_budget_percent_is_zero() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        let expenses = vec![expense(100.0, today, Category::Food)];

        let report = DashboardReport::generate(&expenses, &settings_with_budget(0.0), today);
        assert_eq!(report.percent_used, 0.0);
        assert_eq!(report.percent_used_raw, 0.0);
        assert!(report.alert.is_none());
    }

    #[test]
    fn test_alert_threshold_is_inclusive() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        let settings = UserSettings {
            monthly_budget: 1000.0,
            budget_alert_threshold: 80.0,
            ..Default::default()
        };

        // Exactly on the threshold: fires
        let expenses = vec![expense(800.0, today, Category::Food)];
        let alert = BudgetAlert::evaluate(&expenses, &settings, today);
        let alert = alert.unwrap();
        assert_eq!(alert.percentage, 80.0);
        assert_eq!(alert.total_spent, 800.0);

        // Just under: does not fire
        let expenses = vec![expense(799.99, today, Category::Food)];
        assert!(BudgetAlert::evaluate(&expenses, &settings, today).is_none());
    }

    #[test]
    fn test_alert_respects_enable_flag() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        let settings = UserSettings {
            monthly_budget: 1000.0,
            enable_budget_alerts: false,
            ..Default::default()
        };

        let expenses = vec![expense(950.0, today, Category::Food)];
        assert!(BudgetAlert::evaluate(&expenses, &settings, today).is_none());
    }

    #[test]
    fn test_alert_fires_past_hundred_percent() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        let settings = UserSettings {
            monthly_budget: 1000.0,
            ..Default::default()
        };

        let expenses = vec![expense(1300.0, today, Category::Food)];
        let alert = BudgetAlert::evaluate(&expenses, &settings, today).unwrap();
        assert_eq!(alert.percentage, 130.0);
    }

    #[test]
    fn test_daily_series_shape() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        let expenses = vec![
            expense(10.0, today, Category::Food),
            expense(5.0, today, Category::Transport),
            expense(20.0, today - Duration::days(3), Category::Food),
            // Outside the 7-day window
            expense(99.0, today - Duration::days(7), Category::Food),
        ];

        let series = daily_series(&expenses, today, 7);
        assert_eq!(series.len(), 7);
        // Oldest first, ending today
        assert_eq!(series[0].date, today - Duration::days(6));
        assert_eq!(series[6].date, today);
        // Window sum only counts in-window expenses
        let sum: f64 = series.iter().map(|d| d.amount).sum();
        assert_eq!(sum, 35.0);
        // Empty days are zero-filled
        assert_eq!(series[5].amount, 0.0);
        // Labels are weekday abbreviations
        assert_eq!(series[6].label, today.format("%a").to_string());
    }

    #[test]
    fn test_category_breakdown_first_occurrence_order() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        let expenses = vec![
            expense(30.0, today, Category::Leisure),
            expense(10.0, today, Category::Food),
            expense(20.0, today, Category::Leisure),
            // Previous month never shows up
            expense(99.0, NaiveDate::from_ymd_opt(2025, 5, 20).unwrap(), Category::Housing),
        ];

        let breakdown = category_breakdown(&expenses, today);
        assert_eq!(breakdown.len(), 2);
        assert_eq!(breakdown[0], (Category::Leisure, 50.0));
        assert_eq!(breakdown[1], (Category::Food, 10.0));
    }

    #[test]
    fn test_daily_average_uses_day_of_month() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
        let expenses = vec![expense(250.0, NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(), Category::Food)];

        let report = DashboardReport::generate(&expenses, &settings_with_budget(2000.0), today);
        assert_eq!(report.daily_average, 25.0);
    }

    #[test]
    fn test_format_terminal_mentions_key_figures() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        let expenses = vec![expense(900.0, today, Category::Food)];
        let settings = UserSettings {
            monthly_budget: 1000.0,
            ..Default::default()
        };

        let report = DashboardReport::generate(&expenses, &settings, today);
        let text = report.format_terminal();

        assert!(text.contains("June 2025"));
        assert!(text.contains("900.00 €"));
        assert!(text.contains("Budget alert"));
        assert!(text.contains("Food"));
    }
}
