//! Spending trend report
//!
//! Buckets the expense history by week, month, quarter, or year and
//! reports per-bucket totals alongside the average and the peak bucket.

use std::collections::HashMap;
use std::fmt;
use std::io::Write;

use chrono::{Datelike, NaiveDate};

use crate::display::format::{format_amount, progress_bar};
use crate::error::{CentimeError, CentimeResult};
use crate::models::Expense;

/// Maximum number of buckets a trend report keeps
pub const MAX_BUCKETS: usize = 12;

/// Bucketing granularity for the trend report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendPeriod {
    Week,
    Month,
    Quarter,
    Year,
}

impl TrendPeriod {
    /// Parse a period name, case-insensitive
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "week" => Some(Self::Week),
            "month" => Some(Self::Month),
            "quarter" => Some(Self::Quarter),
            "year" => Some(Self::Year),
            _ => None,
        }
    }

    /// Bucket key for a date
    ///
    /// Week 1 starts on January 1 and weeks roll over on Sundays, so
    /// `W{n}` can reach 54. Not ISO-8601 on purpose.
    fn key_for(self, date: NaiveDate) -> String {
        match self {
            Self::Week => {
                let jan1 = NaiveDate::from_ymd_opt(date.year(), 1, 1).unwrap();
                let past_days = date.ordinal0();
                let week = (past_days + jan1.weekday().num_days_from_sunday() + 7) / 7;
                format!("W{} {}", week, date.year())
            }
            Self::Month => date.format("%b %Y").to_string(),
            Self::Quarter => format!("Q{} {}", date.month0() / 3 + 1, date.year()),
            Self::Year => date.year().to_string(),
        }
    }
}

impl fmt::Display for TrendPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Week => "week",
            Self::Month => "month",
            Self::Quarter => "quarter",
            Self::Year => "year",
        };
        write!(f, "{}", name)
    }
}

/// One bucket of the trend
#[derive(Debug, Clone, PartialEq)]
pub struct TrendBucket {
    /// Human-readable bucket key, e.g. "W7 2025" or "Jan 2025"
    pub key: String,
    pub total: f64,
}

/// Spending totals over time
#[derive(Debug, Clone)]
pub struct TrendReport {
    pub period: TrendPeriod,
    /// At most [`MAX_BUCKETS`] buckets, oldest first
    pub buckets: Vec<TrendBucket>,
    /// Mean bucket total, 0 when there are no buckets
    pub average: f64,
    /// Largest bucket total, 0 when there are no buckets
    pub max: f64,
}

impl TrendReport {
    /// Build the trend from an expense snapshot
    ///
    /// Only the trailing [`MAX_BUCKETS`] buckets are kept; older history
    /// falls off the front.
    pub fn generate(expenses: &[Expense], period: TrendPeriod) -> Self {
        let mut sorted: Vec<&Expense> = expenses.iter().collect();
        sorted.sort_by_key(|e| e.date);

        // Ascending input makes first-occurrence key order chronological
        let mut order: Vec<String> = Vec::new();
        let mut totals: HashMap<String, f64> = HashMap::new();
        for expense in sorted {
            let key = period.key_for(expense.date);
            if !totals.contains_key(&key) {
                order.push(key.clone());
            }
            *totals.entry(key).or_insert(0.0) += expense.amount;
        }

        let skip = order.len().saturating_sub(MAX_BUCKETS);
        let buckets: Vec<TrendBucket> = order
            .into_iter()
            .skip(skip)
            .map(|key| {
                let total = totals.get(&key).copied().unwrap_or(0.0);
                TrendBucket { key, total }
            })
            .collect();

        let average = if buckets.is_empty() {
            0.0
        } else {
            buckets.iter().map(|b| b.total).sum::<f64>() / buckets.len() as f64
        };

        let max = buckets
            .iter()
            .map(|b| b.total)
            .fold(f64::NEG_INFINITY, f64::max);
        let max = if max.is_finite() { max } else { 0.0 };

        Self {
            period,
            buckets,
            average,
            max,
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!("Spending by {}\n", self.period));
        output.push_str(&"=".repeat(64));
        output.push('\n');

        if self.buckets.is_empty() {
            output.push_str("No expenses recorded.\n");
            return output;
        }

        for bucket in &self.buckets {
            let share = if self.max > 0.0 {
                bucket.total / self.max * 100.0
            } else {
                0.0
            };
            output.push_str(&format!(
                "{:<10} {:>14} {}\n",
                bucket.key,
                format_amount(bucket.total, currency),
                progress_bar(share, 24)
            ));
        }

        output.push_str(&"-".repeat(64));
        output.push('\n');
        output.push_str(&format!(
            "{:<10} {:>14}\n",
            "Average:",
            format_amount(self.average, currency)
        ));
        output.push_str(&format!(
            "{:<10} {:>14}\n",
            "Peak:",
            format_amount(self.max, currency)
        ));

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> CentimeResult<()> {
        writeln!(writer, "Period,Total")
            .map_err(|e| CentimeError::Export(e.to_string()))?;

        for bucket in &self.buckets {
            writeln!(writer, "{},{:.2}", bucket.key, bucket.total)
                .map_err(|e| CentimeError::Export(e.to_string()))?;
        }

        Ok(())
    }
}
