//! YAML export functionality
//!
//! Exports the complete profile to YAML format for human-readable backup.

use std::io::Write;

use crate::error::{CentimeError, CentimeResult};
use crate::export::json::FullExport;
use crate::storage::Storage;

/// Export the full profile to YAML format
pub fn export_full_yaml<W: Write>(storage: &Storage, writer: &mut W) -> CentimeResult<()> {
    let export = FullExport::from_storage(storage)?;

    // Add a header comment
    writeln!(writer, "# Centime Full Profile Export")
        .map_err(|e| CentimeError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| CentimeError::Export(e.to_string()))?;
    writeln!(writer, "# App Version: {}", export.app_version)
        .map_err(|e| CentimeError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| CentimeError::Export(e.to_string()))?;

    // Serialize to YAML
    serde_yaml::to_writer(writer, &export).map_err(|e| CentimeError::Export(e.to_string()))?;

    Ok(())
}
