// src/lib.rs
// Public library surface for integration tests (and potential reuse).

pub mod chart;
pub mod config;
pub mod confidence;
pub mod engine;
pub mod parse;
pub mod samples;
pub mod softmax;
pub mod verdict;

// ---- Re-exports for stable public API ----
pub use crate::confidence::{confidence, entropy};
pub use crate::engine::{evaluate, MeterReading, RankedEntry};
pub use crate::parse::{parse_candidates, validate, Candidate, InputError};
pub use crate::softmax::{softmax, TemperatureRegime};
pub use crate::verdict::{classify, Band, Judgment};
