use reckon_core::calculator::{apply, CalculatorAction, CalculatorState, Transition};

/// Apply a sequence of actions to a fresh calculator, dropping effects
#[allow(dead_code)]
pub fn run(actions: impl IntoIterator<Item = CalculatorAction>) -> CalculatorState {
    actions
        .into_iter()
        .fold(CalculatorState::new(), |state, action| {
            apply(state, action).state
        })
}

/// Apply a sequence of actions, returning the final transition
#[allow(dead_code)]
pub fn run_with_effect(actions: impl IntoIterator<Item = CalculatorAction>) -> Transition {
    let mut transition = Transition {
        state: CalculatorState::new(),
        effect: None,
    };
    for action in actions {
        transition = apply(transition.state, action);
    }
    transition
}

/// Keystrokes for a digit string, e.g. "12.5"
#[allow(dead_code)]
pub fn keys(text: &str) -> Vec<CalculatorAction> {
    text.chars()
        .map(|c| match c {
            '.' => CalculatorAction::Decimal,
            d => CalculatorAction::Digit(d as u8 - b'0'),
        })
        .collect()
}
