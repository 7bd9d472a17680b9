//! Expense model
//!
//! Represents a single dated, categorized money outflow. Expenses are
//! immutable once created: there is no edit operation, only add and delete.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::category::Category;

/// Placeholder used when an expense is created with an empty description
pub const DEFAULT_DESCRIPTION: &str = "Expense";

/// Strongly-typed expense identifier
///
/// Ids are minted by the storage layer on create, mirroring a document
/// store that assigns ids server-side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(Uuid);

impl ExpenseId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Check whether this id matches a user-supplied prefix
    ///
    /// Accepts the display form (`exp-d3adbeef`), the bare hex prefix, or a
    /// full hyphenated UUID prefix.
    pub fn matches_prefix(&self, prefix: &str) -> bool {
        let q = prefix.strip_prefix("exp-").unwrap_or(prefix);
        if q.is_empty() {
            return false;
        }
        self.0.simple().to_string().starts_with(&q.to_lowercase())
            || self.0.to_string().starts_with(&q.to_lowercase())
    }
}

impl Default for ExpenseId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "exp-{}", &self.0.simple().to_string()[..8])
    }
}

impl From<Uuid> for ExpenseId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl FromStr for ExpenseId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix("exp-").unwrap_or(s);
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Budget-planning classification of an expense
///
/// Independent of [`Category`]: the category suggests a default type at
/// creation time, but the stored type is never recomputed afterward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseType {
    Fixed,
    #[default]
    Variable,
    Savings,
}

impl ExpenseType {
    /// All expense types in display order
    pub const ALL: [ExpenseType; 3] = [Self::Fixed, Self::Variable, Self::Savings];

    /// Parse an expense type from user input (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "fixed" => Some(Self::Fixed),
            "variable" => Some(Self::Variable),
            "savings" => Some(Self::Savings),
            _ => None,
        }
    }

    /// ANSI color escape used for this type in reports
    pub fn color(self) -> &'static str {
        match self {
            Self::Fixed => "\x1b[34m",    // blue
            Self::Variable => "\x1b[33m", // amber
            Self::Savings => "\x1b[32m",  // green
        }
    }
}

impl fmt::Display for ExpenseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed => write!(f, "Fixed"),
            Self::Variable => write!(f, "Variable"),
            Self::Savings => write!(f, "Savings"),
        }
    }
}

/// How an expense was paid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Cash,
    #[default]
    Card,
    Transfer,
    Other,
}

impl PaymentMethod {
    /// All payment methods in display order
    pub const ALL: [PaymentMethod; 4] = [Self::Cash, Self::Card, Self::Transfer, Self::Other];

    /// Parse a payment method from user input (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "cash" => Some(Self::Cash),
            "card" => Some(Self::Card),
            "transfer" => Some(Self::Transfer),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cash => write!(f, "Cash"),
            Self::Card => write!(f, "Card"),
            Self::Transfer => write!(f, "Transfer"),
            Self::Other => write!(f, "Other"),
        }
    }
}

/// A single expense record
///
/// Serialized with camelCase keys (and the planning type under the legacy
/// `type` key) for compatibility with existing data files.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// Unique identifier, assigned by storage on create
    pub id: ExpenseId,

    /// Amount spent (floating quantity; sign is not enforced)
    pub amount: f64,

    /// Civil calendar date of the expense (time of day is never stored)
    pub date: NaiveDate,

    /// Spending category
    pub category: Category,

    /// Budget-planning type, fixed at creation time
    #[serde(rename = "type")]
    pub expense_type: ExpenseType,

    /// Free-text label
    #[serde(default)]
    pub description: String,

    /// How the expense was paid
    #[serde(default)]
    pub payment_method: PaymentMethod,

    /// When the record was created; only used as a sort tiebreaker
    pub created_at: DateTime<Utc>,
}

impl Expense {
    /// Validate the expense
    ///
    /// Amounts may be negative (a refund simply changes the sign of the
    /// aggregates) but must be finite, otherwise every total they touch
    /// would be poisoned.
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if !self.amount.is_finite() {
            return Err(ExpenseValidationError::NonFiniteAmount);
        }
        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {:.2} ({})",
            self.date.format("%Y-%m-%d"),
            self.description,
            self.amount,
            self.category
        )
    }
}

/// An expense as submitted by a caller, before storage assigns an id
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseDraft {
    pub amount: f64,
    pub date: NaiveDate,
    pub category: Category,
    #[serde(rename = "type")]
    pub expense_type: ExpenseType,
    pub description: String,
    pub payment_method: PaymentMethod,
}

impl ExpenseDraft {
    /// Create a draft with the type defaulted from the category
    pub fn new(amount: f64, date: NaiveDate, category: Category) -> Self {
        Self {
            amount,
            date,
            category,
            expense_type: category.default_expense_type(),
            description: String::new(),
            payment_method: PaymentMethod::default(),
        }
    }

    /// Validate the draft before it is stored
    ///
    /// Same rule as [`Expense::validate`]: any finite amount passes.
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if !self.amount.is_finite() {
            return Err(ExpenseValidationError::NonFiniteAmount);
        }
        Ok(())
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    NonFiniteAmount,
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteAmount => write!(f, "Expense amount must be a finite number"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_expense(amount: f64) -> Expense {
        Expense {
            id: ExpenseId::new(),
            amount,
            date: NaiveDate::from_ymd_opt(2025, 3, 15).unwrap(),
            category: Category::Food,
            expense_type: ExpenseType::Variable,
            description: "Lunch".to_string(),
            payment_method: PaymentMethod::Card,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_id_display() {
        let id = ExpenseId::new();
        let display = format!("{}", id);
        assert!(display.starts_with("exp-"));
        assert_eq!(display.len(), 12); // "exp-" + 8 hex chars
    }

    #[test]
    fn test_id_prefix_matching() {
        let id = ExpenseId::new();
        let display = id.to_string();

        assert!(id.matches_prefix(&display));
        assert!(id.matches_prefix(&display[..8])); // "exp-" + 4 chars
        assert!(id.matches_prefix(display.strip_prefix("exp-").unwrap()));
        assert!(!id.matches_prefix(""));
        assert!(!id.matches_prefix("exp-"));
    }

    #[test]
    fn test_id_from_str() {
        let uuid_str = "550e8400-e29b-41d4-a716-446655440000";
        let id: ExpenseId = uuid_str.parse().unwrap();
        assert_eq!(id.as_uuid().to_string(), uuid_str);

        let prefixed: ExpenseId = format!("exp-{}", uuid_str).parse().unwrap();
        assert_eq!(prefixed, id);
    }

    #[test]
    fn test_type_defaulting_from_category() {
        let draft = ExpenseDraft::new(
            120.0,
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            Category::Housing,
        );
        assert_eq!(draft.expense_type, ExpenseType::Fixed);

        let draft = ExpenseDraft::new(
            12.5,
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            Category::Food,
        );
        assert_eq!(draft.expense_type, ExpenseType::Variable);
    }

    #[test]
    fn test_validate() {
        assert!(sample_expense(42.0).validate().is_ok());
        assert!(sample_expense(-10.0).validate().is_ok());
        assert_eq!(
            sample_expense(f64::NAN).validate(),
            Err(ExpenseValidationError::NonFiniteAmount)
        );
        assert_eq!(
            sample_expense(f64::INFINITY).validate(),
            Err(ExpenseValidationError::NonFiniteAmount)
        );
    }

    #[test]
    fn test_serialization() {
        let expense = sample_expense(42.5);
        let json = serde_json::to_string(&expense).unwrap();

        // The planning type serializes under the legacy "type" key
        assert!(json.contains("\"type\":\"variable\""));
        assert!(json.contains("\"paymentMethod\":\"card\""));
        assert!(json.contains("\"createdAt\""));

        let deserialized: Expense = serde_json::from_str(&json).unwrap();
        assert_eq!(expense.id, deserialized.id);
        assert_eq!(expense.amount, deserialized.amount);
        assert_eq!(expense.category, deserialized.category);
        assert_eq!(expense.expense_type, deserialized.expense_type);
    }

    #[test]
    fn test_enum_parsing() {
        assert_eq!(ExpenseType::parse("fixed"), Some(ExpenseType::Fixed));
        assert_eq!(ExpenseType::parse("SAVINGS"), Some(ExpenseType::Savings));
        assert_eq!(ExpenseType::parse("junk"), None);

        assert_eq!(PaymentMethod::parse("card"), Some(PaymentMethod::Card));
        assert_eq!(PaymentMethod::parse("Transfer"), Some(PaymentMethod::Transfer));
        assert_eq!(PaymentMethod::parse(""), None);
    }
}
