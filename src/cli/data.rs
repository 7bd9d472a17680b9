//! Data management CLI commands
//!
//! Implements profile export, demo data generation, and profile info.

use chrono::NaiveDate;
use clap::{Subcommand, ValueEnum};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use crate::error::{CentimeError, CentimeResult};
use crate::export::{csv, json, yaml};
use crate::services::{DemoService, ExpenseService};
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (expenses only)
    Csv,
    /// JSON format (full profile)
    Json,
    /// YAML format (full profile, human-readable)
    Yaml,
}

/// Data subcommands
#[derive(Subcommand)]
pub enum DataCommands {
    /// Export the profile to a file
    Export {
        /// Output file path
        output: PathBuf,

        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Replace all expenses with generated demo data
    ResetDemo {
        /// Seed for reproducible demo data
        #[arg(long)]
        seed: Option<u64>,

        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Show information about the active profile
    Info,
}

/// Handle a data command
pub fn handle_data_command(
    storage: &Storage,
    today: NaiveDate,
    cmd: DataCommands,
) -> CentimeResult<()> {
    match cmd {
        DataCommands::Export {
            output,
            format,
            pretty,
        } => handle_export(storage, output, format, pretty),
        DataCommands::ResetDemo { seed, yes } => handle_reset_demo(storage, today, seed, yes),
        DataCommands::Info => handle_info(storage),
    }
}

fn handle_export(
    storage: &Storage,
    output: PathBuf,
    format: ExportFormat,
    pretty: bool,
) -> CentimeResult<()> {
    let file = File::create(&output).map_err(|e| {
        CentimeError::Export(format!("Failed to create file {}: {}", output.display(), e))
    })?;
    let mut writer = BufWriter::new(file);

    match format {
        ExportFormat::Csv => {
            csv::export_expenses_csv(storage, &mut writer)?;
            let count = storage.expenses.count()?;
            println!("Exported {} expenses to: {}", count, output.display());
            println!("Note: CSV exports expenses only. Use JSON or YAML for a full profile export.");
        }
        ExportFormat::Json => {
            json::export_full_json(storage, &mut writer, pretty)?;
            println!("Full profile exported to: {}", output.display());
        }
        ExportFormat::Yaml => {
            yaml::export_full_yaml(storage, &mut writer)?;
            println!("Full profile exported to: {}", output.display());
        }
    }

    Ok(())
}

fn handle_reset_demo(
    storage: &Storage,
    today: NaiveDate,
    seed: Option<u64>,
    yes: bool,
) -> CentimeResult<()> {
    if !yes {
        println!("WARNING: This will replace ALL recorded expenses with demo data!");
        println!("To proceed, run again with --yes flag:");
        match seed {
            Some(seed) => println!("  centime data reset-demo --seed {} --yes", seed),
            None => println!("  centime data reset-demo --yes"),
        }
        return Ok(());
    }

    let service = DemoService::new(storage);
    let count = service.reset(today, seed)?;

    println!("Generated {} demo expenses.", count);
    println!("Run 'centime report dashboard' to see them.");

    Ok(())
}

fn handle_info(storage: &Storage) -> CentimeResult<()> {
    let paths = storage.paths();
    let settings = storage.settings.get()?;
    let service = ExpenseService::new(storage);
    let expenses = service.list(Default::default())?;

    println!("Profile Information");
    println!("===================\n");

    println!("Profile:  {}", paths.profile());
    println!("Location: {}", paths.profile_dir().display());
    println!();

    println!("Data Summary:");
    println!("  Expenses: {}", expenses.len());
    println!("  Currency: {}", settings.currency);
    if let (Some(newest), Some(oldest)) = (expenses.first(), expenses.last()) {
        println!("  Newest:   {}", newest.date);
        println!("  Oldest:   {}", oldest.date);
    }

    println!("\nFiles:");
    println!("  Settings: {}", paths.settings_file().display());
    println!("  Expenses: {}", paths.expenses_file().display());

    println!("\nExamples:");
    println!("  centime data export backup.json --format json --pretty");
    println!("  centime data export expenses.csv --format csv");
    println!("  centime data reset-demo --seed 42 --yes");

    Ok(())
}
