//! Expense display formatting
//!
//! Formats expenses for terminal output as a table.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Expense;

use super::format::{format_amount, format_date};

/// One row of the expense list table
#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Type")]
    expense_type: String,
    #[tabled(rename = "Method")]
    method: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

impl ExpenseRow {
    fn from_expense(expense: &Expense, currency: &str) -> Self {
        Self {
            id: expense.id.to_string(),
            date: format_date(expense.date),
            description: expense.description.clone(),
            category: expense.category.to_string(),
            expense_type: expense.expense_type.to_string(),
            method: expense.payment_method.to_string(),
            amount: format_amount(expense.amount, currency),
        }
    }
}

/// Format a list of expenses as a table
pub fn format_expense_list(expenses: &[Expense], currency: &str) -> String {
    if expenses.is_empty() {
        return "No expenses found.".to_string();
    }

    let rows: Vec<ExpenseRow> = expenses
        .iter()
        .map(|e| ExpenseRow::from_expense(e, currency))
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::psql());
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, ExpenseId, ExpenseType, PaymentMethod};
    use chrono::{NaiveDate, Utc};

    fn sample(amount: f64, description: &str) -> Expense {
        Expense {
            id: ExpenseId::new(),
            amount,
            date: NaiveDate::from_ymd_opt(2025, 3, 15).unwrap(),
            category: Category::Food,
            expense_type: ExpenseType::Variable,
            description: description.to_string(),
            payment_method: PaymentMethod::Card,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(format_expense_list(&[], "EUR"), "No expenses found.");
    }

    #[test]
    fn test_table_contains_rows_and_headers() {
        let expenses = vec![sample(12.5, "Lunch"), sample(30.0, "Groceries")];
        let table = format_expense_list(&expenses, "EUR");

        assert!(table.contains("Date"));
        assert!(table.contains("Amount"));
        assert!(table.contains("Lunch"));
        assert!(table.contains("Groceries"));
        assert!(table.contains("12.50 €"));
        assert!(table.contains("15/03/2025"));
    }
}
