use anyhow::Result;
use chrono::Local;
use clap::{Parser, Subcommand};

use centime::cli::{
    handle_data_command, handle_expense_command, handle_report_command, handle_settings_command,
    handle_simulate_command,
};
use centime::config::paths::CentimePaths;
use centime::storage::Storage;

#[derive(Parser)]
#[command(
    name = "centime",
    version,
    about = "Terminal-based expense tracking and budget forecasting",
    long_about = "Centime tracks day-to-day expenses from the command line and \
                  aggregates them into a monthly dashboard, spending trends over \
                  time, and a budget forecast against per-type targets."
)]
struct Cli {
    /// Profile to operate on (each profile keeps its own data)
    #[arg(long, global = true, default_value = "default")]
    profile: String,

    /// Override the data directory (also settable via CENTIME_DATA_DIR)
    #[arg(long, global = true)]
    data_dir: Option<std::path::PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record, list, and delete expenses
    #[command(subcommand, alias = "exp")]
    Expense(centime::cli::ExpenseCommands),

    /// Spending and budget reports
    #[command(subcommand)]
    Report(centime::cli::ReportCommands),

    /// View and change settings
    #[command(subcommand)]
    Settings(centime::cli::SettingsCommands),

    /// Financial what-if simulators
    #[command(subcommand, alias = "sim")]
    Simulate(centime::cli::SimulateCommands),

    /// Export, demo data, and profile information
    #[command(subcommand)]
    Data(centime::cli::DataCommands),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and storage for the selected profile
    let paths = match cli.data_dir {
        Some(ref dir) => CentimePaths::with_base_dir_and_profile(dir.clone(), cli.profile.as_str()),
        None => CentimePaths::new(cli.profile.as_str())?,
    };
    let mut storage = Storage::new(paths)?;
    storage.load_all()?;

    let today = Local::now().date_naive();

    match cli.command {
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&storage, today, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&storage, today, cmd)?;
        }
        Some(Commands::Settings(cmd)) => {
            handle_settings_command(&storage, cmd)?;
        }
        Some(Commands::Simulate(cmd)) => {
            handle_simulate_command(&storage, cmd)?;
        }
        Some(Commands::Data(cmd)) => {
            handle_data_command(&storage, today, cmd)?;
        }
        None => {
            println!("Centime - Terminal expense tracking and budget forecasting");
            println!();
            println!("Run 'centime --help' for usage information.");
            println!("Run 'centime report dashboard' for the monthly overview.");
        }
    }

    Ok(())
}
