//! CSV export functionality
//!
//! Exports expenses in the legacy spreadsheet layout. Fields are written
//! through the `csv` crate so embedded commas and quotes are properly
//! escaped.

use std::io::Write;

use crate::error::{CentimeError, CentimeResult};
use crate::storage::Storage;

/// Column headers of the legacy expense export
pub const CSV_HEADERS: [&str; 6] = [
    "Date",
    "Type",
    "Categorie",
    "Description",
    "Montant",
    "Methode",
];

/// Export all expenses to CSV, newest first
pub fn export_expenses_csv<W: Write>(storage: &Storage, writer: &mut W) -> CentimeResult<()> {
    let expenses = storage.expenses.get_all()?;

    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer
        .write_record(CSV_HEADERS)
        .map_err(|e| CentimeError::Export(e.to_string()))?;

    for expense in expenses {
        csv_writer
            .write_record([
                expense.date.format("%d/%m/%Y").to_string(),
                expense.expense_type.to_string(),
                expense.category.to_string(),
                expense.description.clone(),
                format_csv_amount(expense.amount),
                expense.payment_method.to_string(),
            ])
            .map_err(|e| CentimeError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| CentimeError::Export(e.to_string()))?;

    Ok(())
}

/// Format an amount with up to two decimals, trimming trailing zeros
fn format_csv_amount(amount: f64) -> String {
    let s = format!("{:.2}", amount);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}
