//! GST calculator
//!
//! Splits the goods-and-services tax for a base amount evenly between the
//! central (CGST) and state (SGST) components.

use serde::{Deserialize, Serialize};

/// Standard GST slabs, percent
pub const GST_SLABS: [u32; 4] = [5, 12, 18, 28];

/// GST calculator state; `amount` stays a text buffer like the other
/// keypad-driven inputs (unparseable text computes as 0)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GstState {
    pub amount: String,
    pub slab_pct: u32,
    pub cgst: f64,
    pub sgst: f64,
    pub total_amount: f64,
}

/// Operations accepted by the GST reducer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GstAction {
    AmountChanged(String),
    SlabChanged(u32),
}

impl Default for GstState {
    fn default() -> Self {
        Self::new("1000", 18)
    }
}

impl GstState {
    /// Build a state with the tax split already computed
    pub fn new(amount: impl Into<String>, slab_pct: u32) -> Self {
        recompute(Self {
            amount: amount.into(),
            slab_pct,
            cgst: 0.0,
            sgst: 0.0,
            total_amount: 0.0,
        })
    }
}

/// Apply a GST action, returning the next state
pub fn apply(mut state: GstState, action: GstAction) -> GstState {
    match action {
        GstAction::AmountChanged(amount) => state.amount = amount,
        GstAction::SlabChanged(slab) => state.slab_pct = slab,
    }
    recompute(state)
}

fn recompute(mut state: GstState) -> GstState {
    let base = state.amount.parse::<f64>().unwrap_or(0.0);
    let total_gst = base * (state.slab_pct as f64 / 100.0);
    state.cgst = total_gst / 2.0;
    state.sgst = total_gst / 2.0;
    state.total_amount = base + total_gst;
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_split() {
        let state = GstState::default();
        assert_eq!(state.cgst, 90.0);
        assert_eq!(state.sgst, 90.0);
        assert_eq!(state.total_amount, 1180.0);
    }

    #[test]
    fn test_slab_change_recomputes() {
        let state = apply(GstState::default(), GstAction::SlabChanged(28));
        assert_eq!(state.cgst, 140.0);
        assert_eq!(state.total_amount, 1280.0);
    }

    #[test]
    fn test_unparseable_amount_is_zero() {
        let state = apply(GstState::default(), GstAction::AmountChanged("x".to_string()));
        assert_eq!(state.total_amount, 0.0);
    }
}
