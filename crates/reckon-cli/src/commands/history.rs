//! `reckon history` - inspect or clear the persisted history

use std::path::PathBuf;

use clap::{Args, Subcommand};
use reckon_core::calculator::{apply, CalculatorAction, CalculatorState, Effect};
use reckon_core::errors::Result;
use reckon_store::{db, migrations, HistoryRepo};

#[derive(Debug, Args)]
pub struct HistoryArgs {
    /// History database path
    #[arg(long)]
    pub db: PathBuf,

    #[command(subcommand)]
    pub action: HistoryCommand,
}

#[derive(Debug, Subcommand)]
pub enum HistoryCommand {
    /// Print the history, most recent first
    Show,
    /// Clear the history and persist the empty list
    Clear,
}

pub fn execute(args: HistoryArgs) -> Result<()> {
    let mut conn = db::open(&args.db)?;
    db::configure(&conn)?;
    migrations::run(&mut conn)?;

    let history = HistoryRepo::load(&conn)?;
    let state = apply(
        CalculatorState::new(),
        CalculatorAction::HistoryLoaded(history),
    )
    .state;

    match args.action {
        HistoryCommand::Show => {
            if state.history.is_empty() {
                println!("(no history)");
            }
            for equation in &state.history {
                println!("{equation}");
            }
        }
        HistoryCommand::Clear => {
            let transition = apply(state, CalculatorAction::ClearHistory);
            if let Some(Effect::PersistHistory(history)) = transition.effect {
                HistoryRepo::save(&mut conn, &history)?;
            }
            println!("History cleared");
        }
    }
    Ok(())
}
