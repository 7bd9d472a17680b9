//! Expense CLI commands
//!
//! Implements CLI commands for recording, listing, and deleting expenses.

use chrono::{Datelike, NaiveDate};
use clap::Subcommand;

use crate::display::{format_amount, format_date, format_expense_list};
use crate::error::{CentimeError, CentimeResult};
use crate::models::{Category, ExpenseType, PaymentMethod};
use crate::services::{AddExpenseInput, ExpenseFilter, ExpenseService};
use crate::storage::Storage;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// Amount spent (negative amounts record a refund)
        amount: f64,
        /// Category (food, transport, housing, leisure, health, shopping, savings, misc)
        #[arg(short, long, default_value = "food")]
        category: String,
        /// Expense date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Budget type (fixed, variable, savings), defaults from the category
        #[arg(short = 't', long = "type")]
        expense_type: Option<String>,
        /// Payment method (cash, card, transfer, other)
        #[arg(short, long, default_value = "card")]
        method: String,
        /// Free-text description
        #[arg(long)]
        description: Option<String>,
    },
    /// List expenses, newest first
    List {
        /// Only show expenses from one month (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,
        /// Filter by category
        #[arg(short, long)]
        category: Option<String>,
        /// Filter by budget type
        #[arg(short = 't', long = "type")]
        expense_type: Option<String>,
        /// Maximum number of expenses to show
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Delete an expense
    Delete {
        /// Expense id (e.g. exp-1a2b3c4d) or an unambiguous prefix
        expense: String,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    today: NaiveDate,
    cmd: ExpenseCommands,
) -> CentimeResult<()> {
    let service = ExpenseService::new(storage);

    match cmd {
        ExpenseCommands::Add {
            amount,
            category,
            date,
            expense_type,
            method,
            description,
        } => {
            let category = parse_category(&category)?;
            let expense_type = expense_type.as_deref().map(parse_expense_type).transpose()?;
            let payment_method = parse_payment_method(&method)?;
            let date = match date {
                Some(ref s) => parse_date(s)?,
                None => today,
            };

            let expense = service.add(AddExpenseInput {
                amount,
                date,
                category,
                expense_type,
                description,
                payment_method: Some(payment_method),
            })?;

            let settings = storage.settings.get()?;
            println!("Recorded expense: {}", expense.id);
            println!("  Date: {}", format_date(expense.date));
            println!("  Category: {}", expense.category);
            println!("  Type: {}", expense.expense_type);
            println!("  Amount: {}", format_amount(expense.amount, &settings.currency));
        }

        ExpenseCommands::List {
            month,
            category,
            expense_type,
            limit,
        } => {
            let mut filter = ExpenseFilter::new();
            if let Some(ref s) = month {
                let (year, month) = parse_month(s)?;
                filter = filter.month(year, month);
            }
            if let Some(ref s) = category {
                filter = filter.category(parse_category(s)?);
            }
            if let Some(ref s) = expense_type {
                filter = filter.expense_type(parse_expense_type(s)?);
            }
            if let Some(limit) = limit {
                filter = filter.limit(limit);
            }

            let expenses = service.list(filter)?;
            let settings = storage.settings.get()?;
            println!("{}", format_expense_list(&expenses, &settings.currency));

            if !expenses.is_empty() {
                let total: f64 = expenses.iter().map(|e| e.amount).sum();
                println!();
                println!(
                    "{} expense(s), total {}",
                    expenses.len(),
                    format_amount(total, &settings.currency)
                );
            }
        }

        ExpenseCommands::Delete { expense } => {
            let deleted = service.delete_by_prefix(&expense)?;
            let settings = storage.settings.get()?;
            println!("Deleted expense: {}", deleted.id);
            println!(
                "  {} {} ({})",
                format_date(deleted.date),
                deleted.description,
                format_amount(deleted.amount, &settings.currency)
            );
        }
    }

    Ok(())
}

fn parse_category(s: &str) -> CentimeResult<Category> {
    Category::parse(s).ok_or_else(|| {
        CentimeError::Validation(format!(
            "Invalid category: '{}'. Valid categories: food, transport, housing, leisure, health, shopping, savings, misc",
            s
        ))
    })
}

fn parse_expense_type(s: &str) -> CentimeResult<ExpenseType> {
    ExpenseType::parse(s).ok_or_else(|| {
        CentimeError::Validation(format!(
            "Invalid type: '{}'. Valid types: fixed, variable, savings",
            s
        ))
    })
}

fn parse_payment_method(s: &str) -> CentimeResult<PaymentMethod> {
    PaymentMethod::parse(s).ok_or_else(|| {
        CentimeError::Validation(format!(
            "Invalid payment method: '{}'. Valid methods: cash, card, transfer, other",
            s
        ))
    })
}

fn parse_date(s: &str) -> CentimeResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
        CentimeError::Validation(format!("Invalid date: '{}'. Use YYYY-MM-DD", s))
    })
}

fn parse_month(s: &str) -> CentimeResult<(i32, u32)> {
    let first = NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d")
        .map_err(|_| CentimeError::Validation(format!("Invalid month: '{}'. Use YYYY-MM", s)))?;
    Ok((first.year(), first.month()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2025-03-15").unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 15).unwrap()
        );
        assert!(parse_date("15/03/2025").is_err());
        assert!(parse_date("2025-13-01").is_err());
    }

    #[test]
    fn test_parse_month() {
        assert_eq!(parse_month("2025-03").unwrap(), (2025, 3));
        assert!(parse_month("2025").is_err());
        assert!(parse_month("2025-00").is_err());
    }

    #[test]
    fn test_parse_errors_list_valid_values() {
        let err = parse_category("groceries").unwrap_err();
        assert!(err.to_string().contains("food, transport"));

        let err = parse_expense_type("flexible").unwrap_err();
        assert!(err.to_string().contains("fixed, variable, savings"));
    }
}
