//! Export module for Centime
//!
//! Provides complete profile export functionality in multiple formats:
//! - CSV: expenses only, spreadsheet-compatible legacy layout
//! - JSON: machine-readable full profile export
//! - YAML: human-readable full profile export

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::export_expenses_csv;
pub use json::{export_full_json, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_full_yaml;
