//! Demo data service
//!
//! Replaces the expense book with a generated sample set so reports
//! have something to show on a fresh profile.

use chrono::{Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::CentimeResult;
use crate::models::{Category, ExpenseDraft, PaymentMethod};
use crate::storage::Storage;

/// Number of expenses in a generated sample set
pub const DEMO_EXPENSE_COUNT: usize = 80;

/// Days of history the sample set spans
pub const DEMO_WINDOW_DAYS: i64 = 90;

/// Generate a sample expense set spread over the trailing 90 days
///
/// Amounts are whole euros between 5 and 154, categories and payment
/// methods are drawn uniformly, and each expense takes the default type
/// for its category.
pub fn generate_demo_expenses(today: NaiveDate, rng: &mut StdRng) -> Vec<ExpenseDraft> {
    let mut drafts = Vec::with_capacity(DEMO_EXPENSE_COUNT);

    for i in 0..DEMO_EXPENSE_COUNT {
        let days_ago = rng.gen_range(0..DEMO_WINDOW_DAYS);
        let date = today - Duration::days(days_ago);
        let category = Category::ALL[rng.gen_range(0..Category::ALL.len())];
        let payment_method = PaymentMethod::ALL[rng.gen_range(0..PaymentMethod::ALL.len())];

        let mut draft = ExpenseDraft::new(rng.gen_range(5..=154) as f64, date, category);
        draft.description = format!("Demo expense {}", i + 1);
        draft.payment_method = payment_method;
        drafts.push(draft);
    }

    drafts
}

/// Service for demo data management
pub struct DemoService<'a> {
    storage: &'a Storage,
}

impl<'a> DemoService<'a> {
    /// Create a new demo service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Replace all expenses with a generated sample set
    ///
    /// Pass a seed to make the set reproducible. Returns the number of
    /// expenses written.
    pub fn reset(&self, today: NaiveDate, seed: Option<u64>) -> CentimeResult<usize> {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let drafts = generate_demo_expenses(today, &mut rng);
        let created = self.storage.expenses.bulk_replace(drafts)?;
        self.storage.expenses.save()?;

        Ok(created.len())
    }
}
