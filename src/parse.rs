//! # Candidate Input Parser
//! Boundary layer between free-text input and the numeric core.
//!
//! Format: one candidate per line, either `name:score` or a bare `score`.
//! Splitting happens on the FIRST colon, so names cannot contain one but
//! scores keep any remaining text (and fail to parse if it is junk). Blank
//! lines and lines whose score does not parse are skipped silently; auto names
//! for bare scores follow the raw 1-based line number, so skipped lines still
//! consume an index.
//!
//! The core itself is total and never validates; everything user-facing is
//! rejected here with a named error before the core is called.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A named raw score, as parsed from one input line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub name: String,
    pub score: f64,
}

impl Candidate {
    pub fn new(name: impl Into<String>, score: f64) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}

/// User-facing input rejection, surfaced before the pipeline runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Fewer than two valid candidates were parsed.
    NotEnoughCandidates,
    /// Temperature was zero, negative, or NaN.
    NonPositiveTemperature,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotEnoughCandidates => write!(f, "enter at least two scores"),
            Self::NonPositiveTemperature => write!(f, "temperature must be > 0"),
        }
    }
}

impl std::error::Error for InputError {}

/// Parse free-text lines into candidates. Never fails; unusable lines are
/// dropped and counted against the auto-name index only.
pub fn parse_candidates(text: &str) -> Vec<Candidate> {
    let mut candidates = Vec::new();

    for (index, raw) in text.trim().lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let (name, score_text) = match line.split_once(':') {
            Some((name, rest)) => (name.trim().to_string(), rest.trim()),
            None => (format!("Candidate {}", index + 1), line),
        };

        if let Ok(score) = score_text.parse::<f64>() {
            if score.is_finite() {
                candidates.push(Candidate { name, score });
            }
        }
    }

    candidates
}

/// Validate parsed input against the preconditions the core documents but
/// does not check.
pub fn validate(candidates: &[Candidate], temperature: f64) -> Result<(), InputError> {
    if !(temperature > 0.0) {
        return Err(InputError::NonPositiveTemperature);
    }
    if candidates.len() < 2 {
        return Err(InputError::NotEnoughCandidates);
    }
    Ok(())
}
