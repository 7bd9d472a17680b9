//! Expense categories
//!
//! Categories are a closed enumeration. Each category carries a display
//! glyph and an ANSI color for terminal charts, and knows which expense
//! type it suggests by default.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::expense::ExpenseType;

/// A spending category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Transport,
    Housing,
    Leisure,
    Health,
    Shopping,
    Savings,
    Misc,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 8] = [
        Self::Food,
        Self::Transport,
        Self::Housing,
        Self::Leisure,
        Self::Health,
        Self::Shopping,
        Self::Savings,
        Self::Misc,
    ];

    /// Parse a category from user input (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "food" => Some(Self::Food),
            "transport" => Some(Self::Transport),
            "housing" => Some(Self::Housing),
            "leisure" => Some(Self::Leisure),
            "health" => Some(Self::Health),
            "shopping" => Some(Self::Shopping),
            "savings" => Some(Self::Savings),
            "misc" => Some(Self::Misc),
            _ => None,
        }
    }

    /// The expense type this category suggests by default
    ///
    /// Housing and Health are recurring obligations, Savings is its own
    /// bucket, everything else is day-to-day variable spending. This is a
    /// suggestion applied at creation time only; stored expenses keep
    /// whatever type they were created with.
    pub fn default_expense_type(self) -> ExpenseType {
        match self {
            Self::Housing | Self::Health => ExpenseType::Fixed,
            Self::Savings => ExpenseType::Savings,
            Self::Food
            | Self::Transport
            | Self::Leisure
            | Self::Shopping
            | Self::Misc => ExpenseType::Variable,
        }
    }

    /// Display glyph for terminal output
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Food => "🍽",
            Self::Transport => "🚗",
            Self::Housing => "🏠",
            Self::Leisure => "🎮",
            Self::Health => "💊",
            Self::Shopping => "🛍",
            Self::Savings => "🐷",
            Self::Misc => "📦",
        }
    }

    /// ANSI color escape used for this category in charts
    pub fn color(self) -> &'static str {
        match self {
            Self::Food => "\x1b[33m",      // amber
            Self::Transport => "\x1b[34m", // blue
            Self::Housing => "\x1b[35m",   // purple
            Self::Leisure => "\x1b[95m",   // pink
            Self::Health => "\x1b[31m",    // red
            Self::Shopping => "\x1b[36m",  // cyan
            Self::Savings => "\x1b[32m",   // green
            Self::Misc => "\x1b[90m",      // gray
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Housing => "Housing",
            Self::Leisure => "Leisure",
            Self::Health => "Health",
            Self::Shopping => "Shopping",
            Self::Savings => "Savings",
            Self::Misc => "Misc",
        };
        write!(f, "{}", name)
    }
}
