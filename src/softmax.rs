//! # Softmax Engine
//! Temperature-scaled softmax over raw candidate scores.
//!
//! Pure and total over finite input: no validation, no panics. The empty and
//! single-element cases are handled explicitly rather than through the general
//! formula (a one-element "distribution" would otherwise run into
//! `ln(1) = 0` downstream in the confidence math).

use serde::{Deserialize, Serialize};

/// Map raw scores to a probability distribution, same length and order.
///
/// `temperature` divides each score before exponentiation: smaller values
/// sharpen the distribution towards one-hot, larger values flatten it towards
/// uniform. The caller is responsible for supplying `temperature > 0`; the
/// boundary layer in [`crate::parse`] rejects anything else before it gets here.
pub fn softmax(scores: &[f64], temperature: f64) -> Vec<f64> {
    if scores.is_empty() {
        return Vec::new();
    }
    if scores.len() == 1 {
        return vec![1.0];
    }

    let scaled: Vec<f64> = scores.iter().map(|s| s / temperature).collect();

    // Subtract the max before exponentiating so every exponent is <= 0.
    // Keeps exp() from overflowing on large scores or tiny temperatures.
    let max_val = scaled.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = scaled.iter().map(|s| (s - max_val).exp()).collect();
    let sum: f64 = exps.iter().sum();

    exps.iter().map(|e| e / sum).collect()
}

/// Qualitative description of what a temperature does to the distribution.
///
/// Display-only tiers taken from the interactive temperature demo; they have
/// no effect on the numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemperatureRegime {
    Sharp,
    Standard,
    Flattened,
    NearUniform,
}

impl TemperatureRegime {
    pub fn for_temperature(t: f64) -> Self {
        if t <= 0.5 {
            Self::Sharp
        } else if t <= 1.2 {
            Self::Standard
        } else if t <= 2.0 {
            Self::Flattened
        } else {
            Self::NearUniform
        }
    }

    /// Short status line for the CLI / meter header.
    pub fn describe(self) -> &'static str {
        match self {
            Self::Sharp => "low temperature: leader runs away, high confidence",
            Self::Standard => "mid temperature: typical distribution",
            Self::Flattened => "high temperature: distribution flattens",
            Self::NearUniform => "very high temperature: nearly uniform, hard to call",
        }
    }
}
