//! Expense service
//!
//! Provides business logic for recording, listing, and deleting expenses.
//! Expenses are immutable once recorded: corrections are made by deleting
//! the entry and adding a new one.

use chrono::NaiveDate;

use crate::error::{CentimeError, CentimeResult};
use crate::models::{
    Category, Expense, ExpenseDraft, ExpenseId, ExpenseType, PaymentMethod, DEFAULT_DESCRIPTION,
};
use crate::storage::Storage;

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

/// Options for filtering expenses
#[derive(Debug, Clone, Default)]
pub struct ExpenseFilter {
    /// Filter by calendar month (year, month)
    pub month: Option<(i32, u32)>,
    /// Filter by category
    pub category: Option<Category>,
    /// Filter by expense type
    pub expense_type: Option<ExpenseType>,
    /// Maximum number of expenses to return
    pub limit: Option<usize>,
}

impl ExpenseFilter {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by calendar month
    pub fn month(mut self, year: i32, month: u32) -> Self {
        self.month = Some((year, month));
        self
    }

    /// Filter by category
    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Filter by expense type
    pub fn expense_type(mut self, expense_type: ExpenseType) -> Self {
        self.expense_type = Some(expense_type);
        self
    }

    /// Limit results
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Input for recording a new expense
#[derive(Debug, Clone)]
pub struct AddExpenseInput {
    pub amount: f64,
    pub date: NaiveDate,
    pub category: Category,
    /// Defaults from the category when not given
    pub expense_type: Option<ExpenseType>,
    /// Blank or missing descriptions become a placeholder
    pub description: Option<String>,
    pub payment_method: Option<PaymentMethod>,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a new expense
    pub fn add(&self, input: AddExpenseInput) -> CentimeResult<Expense> {
        let description = input
            .description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string());

        let draft = ExpenseDraft {
            amount: input.amount,
            date: input.date,
            category: input.category,
            expense_type: input
                .expense_type
                .unwrap_or_else(|| input.category.default_expense_type()),
            description,
            payment_method: input.payment_method.unwrap_or_default(),
        };

        draft
            .validate()
            .map_err(|e| CentimeError::Validation(e.to_string()))?;

        let expense = self.storage.expenses.create(draft)?;
        self.storage.expenses.save()?;

        Ok(expense)
    }

    /// Get an expense by ID
    pub fn get(&self, id: ExpenseId) -> CentimeResult<Option<Expense>> {
        self.storage.expenses.get(id)
    }

    /// List expenses with optional filtering, newest first
    pub fn list(&self, filter: ExpenseFilter) -> CentimeResult<Vec<Expense>> {
        let mut expenses = if let Some((year, month)) = filter.month {
            self.storage.expenses.get_by_month(year, month)?
        } else {
            self.storage.expenses.get_all()?
        };

        // Apply additional filters
        if let Some(category) = filter.category {
            expenses.retain(|e| e.category == category);
        }
        if let Some(expense_type) = filter.expense_type {
            expenses.retain(|e| e.expense_type == expense_type);
        }

        // Apply limit
        if let Some(limit) = filter.limit {
            expenses.truncate(limit);
        }

        Ok(expenses)
    }

    /// Delete an expense identified by an id prefix
    ///
    /// Accepts the full display form (`exp-1a2b3c4d`) or any unambiguous
    /// prefix of the hex id.
    pub fn delete_by_prefix(&self, identifier: &str) -> CentimeResult<Expense> {
        let mut matches = self.storage.expenses.find_by_prefix(identifier)?;

        if matches.is_empty() {
            return Err(CentimeError::expense_not_found(identifier));
        }
        if matches.len() > 1 {
            return Err(CentimeError::expense_ambiguous(identifier, matches.len()));
        }
        let expense = matches.remove(0);

        self.storage.expenses.delete(expense.id)?;
        self.storage.expenses.save()?;

        Ok(expense)
    }

    /// Count all recorded expenses
    pub fn count(&self) -> CentimeResult<usize> {
        self.storage.expenses.count()
    }
}
