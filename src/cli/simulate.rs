//! Simulator CLI commands
//!
//! Implements the loan amortization calculator. The computation is pure;
//! storage is only consulted for the display currency.

use clap::Subcommand;

use crate::display::format_amount;
use crate::error::{CentimeError, CentimeResult};
use crate::models::LoanTerms;
use crate::storage::Storage;

/// Simulator subcommands
#[derive(Subcommand)]
pub enum SimulateCommands {
    /// Compute the monthly payment for a fixed-rate loan
    Loan {
        /// Amount borrowed
        #[arg(short, long)]
        principal: f64,
        /// Annual interest rate in percent (e.g. 3.5)
        #[arg(short, long)]
        rate: f64,
        /// Duration in years (fractions allowed)
        #[arg(short, long)]
        years: f64,
    },
}

/// Handle a simulator command
pub fn handle_simulate_command(storage: &Storage, cmd: SimulateCommands) -> CentimeResult<()> {
    match cmd {
        SimulateCommands::Loan {
            principal,
            rate,
            years,
        } => {
            let terms = LoanTerms::new(principal, rate, years);
            let quote = terms.quote().ok_or_else(|| {
                CentimeError::Validation(format!(
                    "Cannot compute a quote for principal {} at {}% over {} years. \
                     The duration must cover at least one monthly payment and all \
                     terms must be finite numbers.",
                    principal, rate, years
                ))
            })?;

            let currency = storage.settings.get()?.currency;

            println!("Loan simulation");
            println!("{}", "=".repeat(40));
            println!("{:<18} {}", "Principal:", format_amount(principal, &currency));
            println!("{:<18} {:.2}% annual", "Rate:", rate);
            println!("{:<18} {} years", "Duration:", years);
            println!("{}", "-".repeat(40));
            println!(
                "{:<18} {}",
                "Monthly payment:",
                format_amount(quote.monthly_payment, &currency)
            );
            println!(
                "{:<18} {}",
                "Total cost:",
                format_amount(quote.total_cost, &currency)
            );
            println!(
                "{:<18} {}",
                "Total interest:",
                format_amount(quote.total_interest, &currency)
            );

            if quote.total_cost > 0.0 {
                let principal_share = principal / quote.total_cost * 100.0;
                let interest_share = quote.total_interest / quote.total_cost * 100.0;
                println!();
                println!(
                    "Cost split: {:.1}% principal, {:.1}% interest",
                    principal_share, interest_share
                );
            }
        }
    }

    Ok(())
}
