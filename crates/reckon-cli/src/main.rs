//! Reckon CLI
//!
//! Thin presentation layer over the reducer engines: each subcommand
//! issues actions and renders the resulting state.

use clap::{Parser, Subcommand};
use reckon_core::logging::{self, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "reckon")]
#[command(about = "Reckon - calculator and conversion suite", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run a calculator keystroke sequence
    Calc(commands::calc::CalcArgs),
    /// Convert a value between units of a category
    Convert(commands::convert::ConvertArgs),
    /// Convert between currencies using live exchange rates
    Rates(commands::rates::RatesArgs),
    /// Inspect or clear the persisted calculation history
    History(commands::history::HistoryArgs),
}

fn main() {
    logging::init(Profile::Development);

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Calc(args) => commands::calc::execute(args),
        Commands::Convert(args) => commands::convert::execute(args),
        Commands::Rates(args) => commands::rates::execute(args),
        Commands::History(args) => commands::history::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
