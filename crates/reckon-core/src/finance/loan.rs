//! Loan EMI calculator
//!
//! Standard amortization formula with a separate branch for 0% interest
//! (flat principal / payment count).

use serde::{Deserialize, Serialize};

/// Loan calculator state; the three inputs drive the three derived fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanState {
    pub principal: f64,
    /// Annual interest rate, percent
    pub annual_rate_pct: f64,
    pub term_years: u32,
    pub monthly_payment: f64,
    pub total_interest: f64,
    pub total_payment: f64,
}

/// Operations accepted by the loan reducer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum LoanAction {
    PrincipalChanged(f64),
    RateChanged(f64),
    TermChanged(u32),
}

impl Default for LoanState {
    fn default() -> Self {
        Self::new(10_000.0, 7.5, 5)
    }
}

impl LoanState {
    /// Build a state with derived fields already computed
    pub fn new(principal: f64, annual_rate_pct: f64, term_years: u32) -> Self {
        recompute(Self {
            principal,
            annual_rate_pct,
            term_years,
            monthly_payment: 0.0,
            total_interest: 0.0,
            total_payment: 0.0,
        })
    }
}

/// Apply a loan action, returning the next state
pub fn apply(mut state: LoanState, action: LoanAction) -> LoanState {
    match action {
        LoanAction::PrincipalChanged(amount) => state.principal = amount,
        LoanAction::RateChanged(rate) => state.annual_rate_pct = rate,
        LoanAction::TermChanged(term) => state.term_years = term,
    }
    recompute(state)
}

fn recompute(mut state: LoanState) -> LoanState {
    let p = state.principal;
    let r = (state.annual_rate_pct / 100.0) / 12.0;
    let n = (state.term_years * 12) as f64;

    if n == 0.0 {
        state.monthly_payment = 0.0;
        state.total_payment = 0.0;
        state.total_interest = 0.0;
        return state;
    }

    if r > 0.0 {
        let growth = (1.0 + r).powf(n);
        let emi = p * r * growth / (growth - 1.0);
        state.monthly_payment = emi;
        state.total_payment = emi * n;
        state.total_interest = state.total_payment - p;
    } else {
        state.monthly_payment = p / n;
        state.total_payment = p;
        state.total_interest = 0.0;
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_emi() {
        // 10000 at 12% over 1 year: EMI is 888.49 to the cent
        let state = LoanState::new(10_000.0, 12.0, 1);
        assert!((state.monthly_payment - 888.4878868).abs() < 1e-3);
        assert!((state.total_payment - state.monthly_payment * 12.0).abs() < 1e-9);
        assert!((state.total_interest - (state.total_payment - 10_000.0)).abs() < 1e-9);
    }

    #[test]
    fn test_zero_interest_branch() {
        let state = LoanState::new(12_000.0, 0.0, 1);
        assert_eq!(state.monthly_payment, 1000.0);
        assert_eq!(state.total_payment, 12_000.0);
        assert_eq!(state.total_interest, 0.0);
    }

    #[test]
    fn test_actions_recompute() {
        let state = LoanState::default();
        let before = state.monthly_payment;
        let state = apply(state, LoanAction::RateChanged(12.0));
        assert_ne!(state.monthly_payment, before);
    }
}
