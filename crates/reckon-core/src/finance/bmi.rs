//! Body mass index calculator

use serde::{Deserialize, Serialize};

/// BMI classification bands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obesity,
}

impl BmiCategory {
    /// Display label for the band
    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obesity => "Obesity",
        }
    }

    fn for_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 24.9 {
            BmiCategory::Normal
        } else if bmi < 29.9 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obesity
        }
    }
}

/// BMI calculator state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmiState {
    pub height_cm: f64,
    pub weight_kg: f64,
    pub bmi: f64,
    pub category: BmiCategory,
}

/// Operations accepted by the BMI reducer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum BmiAction {
    HeightChanged(f64),
    WeightChanged(f64),
}

impl Default for BmiState {
    fn default() -> Self {
        Self::new(170.0, 65.0)
    }
}

impl BmiState {
    /// Build a state with the index already computed
    pub fn new(height_cm: f64, weight_kg: f64) -> Self {
        recompute(Self {
            height_cm,
            weight_kg,
            bmi: 0.0,
            category: BmiCategory::Normal,
        })
    }
}

/// Apply a BMI action, returning the next state
pub fn apply(mut state: BmiState, action: BmiAction) -> BmiState {
    match action {
        BmiAction::HeightChanged(height) => state.height_cm = height,
        BmiAction::WeightChanged(weight) => state.weight_kg = weight,
    }
    recompute(state)
}

fn recompute(mut state: BmiState) -> BmiState {
    let height_m = state.height_cm / 100.0;
    // Non-positive height would divide by zero; keep the previous index.
    if height_m > 0.0 {
        state.bmi = state.weight_kg / (height_m * height_m);
        state.category = BmiCategory::for_bmi(state.bmi);
    }
    state
}
