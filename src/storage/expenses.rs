//! Expense repository for JSON storage
//!
//! Manages loading and saving expenses to expenses.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use chrono::{Datelike, Utc};

use crate::error::CentimeError;
use crate::models::{Expense, ExpenseDraft, ExpenseId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable expense data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct ExpenseData {
    expenses: Vec<Expense>,
}

/// Repository for expense persistence
///
/// Expenses are append-and-delete only: there is no update operation.
/// The repository mints ids and creation timestamps so callers never
/// supply them.
pub struct ExpenseRepository {
    path: PathBuf,
    data: RwLock<HashMap<ExpenseId, Expense>>,
}

impl ExpenseRepository {
    /// Create a new expense repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load expenses from disk
    pub fn load(&self) -> Result<(), CentimeError> {
        let file_data: ExpenseData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| CentimeError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for expense in file_data.expenses {
            data.insert(expense.id, expense);
        }

        Ok(())
    }

    /// Save expenses to disk
    pub fn save(&self) -> Result<(), CentimeError> {
        let data = self
            .data
            .read()
            .map_err(|e| CentimeError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut expenses: Vec<_> = data.values().cloned().collect();
        expenses.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));

        let file_data = ExpenseData { expenses };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get an expense by ID
    pub fn get(&self, id: ExpenseId) -> Result<Option<Expense>, CentimeError> {
        let data = self
            .data
            .read()
            .map_err(|e| CentimeError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Get all expenses, newest first
    ///
    /// Ordering is by date descending, then creation time descending so
    /// same-day entries list in reverse entry order.
    pub fn get_all(&self) -> Result<Vec<Expense>, CentimeError> {
        let data = self
            .data
            .read()
            .map_err(|e| CentimeError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut expenses: Vec<_> = data.values().cloned().collect();
        expenses.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));
        Ok(expenses)
    }

    /// Get expenses dated in a given calendar month, newest first
    pub fn get_by_month(&self, year: i32, month: u32) -> Result<Vec<Expense>, CentimeError> {
        let all = self.get_all()?;
        Ok(all
            .into_iter()
            .filter(|e| e.date.year() == year && e.date.month() == month)
            .collect())
    }

    /// Find expenses whose id starts with the given prefix
    pub fn find_by_prefix(&self, prefix: &str) -> Result<Vec<Expense>, CentimeError> {
        let data = self
            .data
            .read()
            .map_err(|e| CentimeError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut matches: Vec<_> = data
            .values()
            .filter(|e| e.id.matches_prefix(prefix))
            .cloned()
            .collect();
        matches.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));
        Ok(matches)
    }

    /// Insert a new expense from a draft, minting its id and timestamp
    pub fn create(&self, draft: ExpenseDraft) -> Result<Expense, CentimeError> {
        let expense = Expense {
            id: ExpenseId::new(),
            amount: draft.amount,
            date: draft.date,
            category: draft.category,
            expense_type: draft.expense_type,
            description: draft.description,
            payment_method: draft.payment_method,
            created_at: Utc::now(),
        };

        let mut data = self
            .data
            .write()
            .map_err(|e| CentimeError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(expense.id, expense.clone());
        Ok(expense)
    }

    /// Delete an expense
    pub fn delete(&self, id: ExpenseId) -> Result<bool, CentimeError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| CentimeError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(data.remove(&id).is_some())
    }

    /// Replace the entire expense set with freshly minted entries
    ///
    /// Used by demo-data reset. Every existing expense is discarded.
    pub fn bulk_replace(&self, drafts: Vec<ExpenseDraft>) -> Result<Vec<Expense>, CentimeError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| CentimeError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();

        let now = Utc::now();
        let mut created = Vec::with_capacity(drafts.len());
        for draft in drafts {
            let expense = Expense {
                id: ExpenseId::new(),
                amount: draft.amount,
                date: draft.date,
                category: draft.category,
                expense_type: draft.expense_type,
                description: draft.description,
                payment_method: draft.payment_method,
                created_at: now,
            };
            data.insert(expense.id, expense.clone());
            created.push(expense);
        }

        Ok(created)
    }

    /// Count expenses
    pub fn count(&self) -> Result<usize, CentimeError> {
        let data = self
            .data
            .read()
            .map_err(|e| CentimeError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, ExpenseRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");
        let repo = ExpenseRepository::new(path);
        (temp_dir, repo)
    }

    fn draft(amount: f64, date: NaiveDate, category: Category) -> ExpenseDraft {
        ExpenseDraft::new(amount, date, category)
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_create_mints_id_and_timestamp() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let date = NaiveDate::from_ymd_opt(2025, 3, 15).unwrap();
        let a = repo.create(draft(42.50, date, Category::Food)).unwrap();
        let b = repo.create(draft(42.50, date, Category::Food)).unwrap();

        assert_ne!(a.id, b.id);
        let retrieved = repo.get(a.id).unwrap().unwrap();
        assert_eq!(retrieved.amount, 42.50);
        assert_eq!(retrieved.category, Category::Food);
    }

    #[test]
    fn test_get_all_newest_first() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let d1 = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let d2 = NaiveDate::from_ymd_opt(2025, 3, 20).unwrap();
        repo.create(draft(10.0, d1, Category::Food)).unwrap();
        repo.create(draft(20.0, d2, Category::Transport)).unwrap();
        repo.create(draft(30.0, d1, Category::Leisure)).unwrap();

        let all = repo.get_all().unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].date, d2);
        // Same-day entries come back in reverse creation order
        assert_eq!(all[1].amount, 30.0);
        assert_eq!(all[2].amount, 10.0);
    }

    #[test]
    fn test_get_by_month() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.create(draft(10.0, NaiveDate::from_ymd_opt(2025, 2, 28).unwrap(), Category::Food))
            .unwrap();
        repo.create(draft(20.0, NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(), Category::Food))
            .unwrap();
        repo.create(draft(30.0, NaiveDate::from_ymd_opt(2025, 3, 31).unwrap(), Category::Food))
            .unwrap();

        let march = repo.get_by_month(2025, 3).unwrap();
        assert_eq!(march.len(), 2);
        assert!(march.iter().all(|e| e.date.month() == 3));
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let date = NaiveDate::from_ymd_opt(2025, 3, 15).unwrap();
        let created = repo.create(draft(99.99, date, Category::Shopping)).unwrap();
        repo.save().unwrap();

        let path = temp_dir.path().join("expenses.json");
        let repo2 = ExpenseRepository::new(path);
        repo2.load().unwrap();

        assert_eq!(repo2.count().unwrap(), 1);
        let retrieved = repo2.get(created.id).unwrap().unwrap();
        assert_eq!(retrieved.amount, 99.99);
        assert_eq!(retrieved.created_at, created.created_at);
    }

    #[test]
    fn test_delete() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let date = NaiveDate::from_ymd_opt(2025, 3, 15).unwrap();
        let created = repo.create(draft(10.0, date, Category::Food)).unwrap();
        assert_eq!(repo.count().unwrap(), 1);

        assert!(repo.delete(created.id).unwrap());
        assert_eq!(repo.count().unwrap(), 0);

        // Deleting again reports absence
        assert!(!repo.delete(created.id).unwrap());
    }

    #[test]
    fn test_find_by_prefix() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let date = NaiveDate::from_ymd_opt(2025, 3, 15).unwrap();
        let created = repo.create(draft(10.0, date, Category::Food)).unwrap();

        let display = created.id.to_string();
        let prefix = display.trim_start_matches("exp-");

        let matches = repo.find_by_prefix(prefix).unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].id, created.id);

        // The display form itself also resolves
        let matches = repo.find_by_prefix(&display).unwrap();
        assert_eq!(matches.len(), 1);

        assert!(repo.find_by_prefix("").unwrap().is_empty());
    }

    #[test]
    fn test_bulk_replace() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let date = NaiveDate::from_ymd_opt(2025, 3, 15).unwrap();
        repo.create(draft(10.0, date, Category::Food)).unwrap();
        repo.create(draft(20.0, date, Category::Transport)).unwrap();

        let drafts = vec![
            draft(1.0, date, Category::Misc),
            draft(2.0, date, Category::Misc),
            draft(3.0, date, Category::Misc),
        ];
        let created = repo.bulk_replace(drafts).unwrap();

        assert_eq!(created.len(), 3);
        assert_eq!(repo.count().unwrap(), 3);
        let all = repo.get_all().unwrap();
        assert!(all.iter().all(|e| e.category == Category::Misc));
    }
}
