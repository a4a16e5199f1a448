//! `reckon calc` - run a keystroke sequence through the calculator

use std::path::PathBuf;

use clap::Args;
use reckon_core::calculator::{
    apply, BinaryOp, CalculatorAction, CalculatorState, Effect,
};
use reckon_core::errors::{ReckonError, Result};
use reckon_store::{db, migrations, HistoryRepo};

#[derive(Debug, Args)]
pub struct CalcArgs {
    /// Keystroke sequence, e.g. "12+3=" or "2^10="
    #[arg(long)]
    pub keys: String,

    /// History database; when set, history is seeded from it before the
    /// sequence and written back after
    #[arg(long)]
    pub db: Option<PathBuf>,
}

pub fn execute(args: CalcArgs) -> Result<()> {
    let mut conn = match &args.db {
        Some(path) => {
            let mut conn = db::open(path)?;
            db::configure(&conn)?;
            migrations::run(&mut conn)?;
            Some(conn)
        }
        None => None,
    };

    let mut state = CalculatorState::new();
    if let Some(conn) = &conn {
        let history = HistoryRepo::load(conn)?;
        state = apply(state, CalculatorAction::HistoryLoaded(history)).state;
    }

    for action in parse_keys(&args.keys)? {
        let transition = apply(state, action);
        state = transition.state;
        if let (Some(Effect::PersistHistory(history)), Some(conn)) =
            (transition.effect, conn.as_mut())
        {
            HistoryRepo::save(conn, &history)?;
        }
    }

    println!("{}", render_display(&state));
    Ok(())
}

/// Map a keystroke string onto calculator actions
fn parse_keys(keys: &str) -> Result<Vec<CalculatorAction>> {
    keys.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c {
            '0'..='9' => Ok(CalculatorAction::Digit(c as u8 - b'0')),
            '.' => Ok(CalculatorAction::Decimal),
            '+' => Ok(CalculatorAction::Operation(BinaryOp::Add)),
            '-' => Ok(CalculatorAction::Operation(BinaryOp::Subtract)),
            '*' => Ok(CalculatorAction::Operation(BinaryOp::Multiply)),
            '/' => Ok(CalculatorAction::Operation(BinaryOp::Divide)),
            '%' => Ok(CalculatorAction::Operation(BinaryOp::Percent)),
            '^' => Ok(CalculatorAction::Operation(BinaryOp::Power)),
            '=' => Ok(CalculatorAction::Calculate),
            key => Err(ReckonError::UnrecognizedKey { key }),
        })
        .collect()
}

/// Render the state the way the calculator display would show it
fn render_display(state: &CalculatorState) -> String {
    match state.operation {
        Some(op) => format!("{} {} {}", state.operand1, op.symbol(), state.operand2),
        None => state.operand1.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keys_maps_digits_and_operators() {
        let actions = parse_keys("1+2=").unwrap();
        assert_eq!(
            actions,
            vec![
                CalculatorAction::Digit(1),
                CalculatorAction::Operation(BinaryOp::Add),
                CalculatorAction::Digit(2),
                CalculatorAction::Calculate,
            ]
        );
    }

    #[test]
    fn test_parse_keys_rejects_unknown() {
        assert!(matches!(
            parse_keys("1a"),
            Err(ReckonError::UnrecognizedKey { key: 'a' })
        ));
    }

    #[test]
    fn test_render_display_pending_operation() {
        let mut state = CalculatorState::new();
        for action in parse_keys("12+3").unwrap() {
            state = apply(state, action).state;
        }
        assert_eq!(render_display(&state), "12 + 3");
    }

    #[test]
    fn test_execute_persists_history_to_db() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.db");

        execute(CalcArgs {
            keys: "2+3=".to_string(),
            db: Some(path.clone()),
        })
        .unwrap();

        let conn = db::open(&path).unwrap();
        assert_eq!(HistoryRepo::load(&conn).unwrap(), vec!["2 + 3 = 5"]);
    }
}
