//! Report CLI commands
//!
//! Implements CLI commands for the dashboard, trend, and forecast reports.
//! Reports are computed from an in-memory snapshot; the handlers fetch the
//! data once and hand it to the report generators.

use chrono::NaiveDate;
use clap::{Subcommand, ValueEnum};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use crate::error::{CentimeError, CentimeResult};
use crate::reports::{DashboardReport, ForecastReport, TrendPeriod, TrendReport};
use crate::storage::Storage;

/// Bucketing period options for the trend report
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PeriodArg {
    /// Weekly buckets
    Week,
    /// Monthly buckets
    Month,
    /// Quarterly buckets
    Quarter,
    /// Yearly buckets
    Year,
}

impl From<PeriodArg> for TrendPeriod {
    fn from(arg: PeriodArg) -> Self {
        match arg {
            PeriodArg::Week => TrendPeriod::Week,
            PeriodArg::Month => TrendPeriod::Month,
            PeriodArg::Quarter => TrendPeriod::Quarter,
            PeriodArg::Year => TrendPeriod::Year,
        }
    }
}

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Month-to-date spending dashboard
    Dashboard,
    /// Spending totals bucketed over time
    Trend {
        /// Bucketing period
        #[arg(short, long, value_enum, default_value = "month")]
        period: PeriodArg,
        /// Write the buckets as CSV to a file instead of the terminal
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Budget targets against actual spending
    Forecast,
}

/// Handle a report command
pub fn handle_report_command(
    storage: &Storage,
    today: NaiveDate,
    cmd: ReportCommands,
) -> CentimeResult<()> {
    let expenses = storage.expenses.get_all()?;
    let settings = storage.settings.get()?;

    match cmd {
        ReportCommands::Dashboard => {
            let report = DashboardReport::generate(&expenses, &settings, today);
            println!("{}", report.format_terminal());
        }

        ReportCommands::Trend { period, output } => {
            let report = TrendReport::generate(&expenses, period.into());

            match output {
                Some(path) => {
                    let file = File::create(&path).map_err(|e| {
                        CentimeError::Export(format!(
                            "Failed to create file {}: {}",
                            path.display(),
                            e
                        ))
                    })?;
                    let mut writer = BufWriter::new(file);
                    report.export_csv(&mut writer)?;
                    println!(
                        "Exported {} {} buckets to: {}",
                        report.buckets.len(),
                        report.period,
                        path.display()
                    );
                }
                None => println!("{}", report.format_terminal(&settings.currency)),
            }
        }

        ReportCommands::Forecast => {
            let report = ForecastReport::generate(&expenses, &settings, today);
            println!("{}", report.format_terminal());
        }
    }

    Ok(())
}
