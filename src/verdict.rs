//! # Confidence Classifier
//! Maps the confidence scalar into one of three fixed bands, each carrying a
//! display label and a human-readable rationale for the meter UI.
//!
//! Bands are non-overlapping with inclusive lower bounds: `>= 70` High,
//! `>= 40` Medium, otherwise Low. Pure lookup, no side effects.

use serde::{Deserialize, Serialize};

/// Discrete judgment band. Serialized lowercase so the presentation layer can
/// reuse the value directly as a CSS class (`high` / `medium` / `low`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Band {
    High,
    Medium,
    Low,
}

/// Classification result shown next to the meter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Judgment {
    /// Short display label (e.g. "Confident").
    pub label: String,
    /// Band, doubling as the style class.
    pub band: Band,
    /// One-line explanation of why the band was chosen.
    pub reason: String,
}

/// Classify a confidence value in `[0, 100]` into its band.
pub fn classify(confidence: f64) -> Judgment {
    if confidence >= 70.0 {
        Judgment {
            label: "Confident".to_string(),
            band: Band::High,
            reason: "The top candidate is clearly dominant.".to_string(),
        }
    } else if confidence >= 40.0 {
        Judgment {
            label: "Contested".to_string(),
            band: Band::Medium,
            reason: "Multiple candidates are competitive.".to_string(),
        }
    } else {
        Judgment {
            label: "Undecided".to_string(),
            band: Band::Low,
            reason: "The distribution is nearly uniform with no clear winner.".to_string(),
        }
    }
}
