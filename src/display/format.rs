//! Shared formatting helpers for terminal output

use chrono::NaiveDate;

/// ANSI reset sequence
pub const RESET: &str = "\x1b[0m";
/// ANSI red
pub const RED: &str = "\x1b[31m";
/// ANSI green
pub const GREEN: &str = "\x1b[32m";
/// ANSI yellow
pub const YELLOW: &str = "\x1b[33m";

/// Map an ISO currency code to its display symbol
///
/// Unknown codes display as themselves.
pub fn currency_symbol(code: &str) -> &str {
    match code {
        "EUR" => "€",
        "USD" => "$",
        "GBP" => "£",
        other => other,
    }
}

/// Format an amount with two decimals and the currency symbol
pub fn format_amount(amount: f64, currency: &str) -> String {
    format!("{:.2} {}", amount, currency_symbol(currency))
}

/// Format a date as DD/MM/YYYY
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Render a fixed-width progress bar for a 0-100 percentage
pub fn progress_bar(percent: f64, width: usize) -> String {
    let clamped = percent.clamp(0.0, 100.0);
    let filled = ((clamped / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);
    format!("[{}{}]", "█".repeat(filled), "░".repeat(width - filled))
}

/// Wrap text in a color escape with a trailing reset
pub fn paint(text: &str, color: &str) -> String {
    format!("{}{}{}", color, text, RESET)
}
