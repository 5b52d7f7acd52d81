//! # Meter Engine
//! Pure, testable pipeline that maps `(candidates, temperature)` → `MeterReading`.
//! No I/O; the CLI and the HTML renderer are both plain consumers of the
//! reading.
//!
//! Steps: softmax over the raw scores, pair each probability back with its
//! candidate, order by descending probability, then derive the confidence
//! scalar and its judgment band.

use serde::{Deserialize, Serialize};

use crate::confidence::confidence;
use crate::parse::Candidate;
use crate::softmax::{softmax, TemperatureRegime};
use crate::verdict::{classify, Judgment};

/// One candidate with its share of the probability mass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub label: String,
    pub score: f64,
    pub probability: f64,
}

/// Complete pipeline output for one invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeterReading {
    /// Candidates ordered by descending probability (ties keep input order).
    pub entries: Vec<RankedEntry>,
    /// Confidence scalar in `[0, 100]`.
    pub confidence: f64,
    pub judgment: Judgment,
    /// The temperature the distribution was computed with.
    pub temperature: f64,
    pub regime: TemperatureRegime,
}

/// Run the full numeric pipeline. Pure function of its inputs; call
/// [`crate::parse::validate`] first if the input came from a user.
pub fn evaluate(candidates: &[Candidate], temperature: f64) -> MeterReading {
    let scores: Vec<f64> = candidates.iter().map(|c| c.score).collect();
    let probs = softmax(&scores, temperature);

    let mut entries: Vec<RankedEntry> = candidates
        .iter()
        .zip(&probs)
        .map(|(c, &p)| RankedEntry {
            label: c.name.clone(),
            score: c.score,
            probability: p,
        })
        .collect();

    // Stable sort: equal probabilities keep their input order.
    entries.sort_by(|a, b| {
        b.probability
            .partial_cmp(&a.probability)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let conf = confidence(&probs);

    MeterReading {
        entries,
        confidence: conf,
        judgment: classify(conf),
        temperature,
        regime: TemperatureRegime::for_temperature(temperature),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verdict::Band;

    fn mk(pairs: &[(&str, f64)]) -> Vec<Candidate> {
        pairs
            .iter()
            .map(|(n, s)| Candidate::new(*n, *s))
            .collect()
    }

    #[test]
    fn entries_are_ordered_by_descending_probability() {
        let reading = evaluate(&mk(&[("a", 1.0), ("b", 3.0), ("c", 2.0)]), 1.0);
        let labels: Vec<&str> = reading.entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["b", "c", "a"]);
        assert!(reading.entries[0].probability >= reading.entries[1].probability);
    }

    #[test]
    fn ties_keep_input_order() {
        let reading = evaluate(&mk(&[("first", 2.0), ("second", 2.0)]), 1.0);
        assert_eq!(reading.entries[0].label, "first");
        assert_eq!(reading.entries[1].label, "second");
    }

    #[test]
    fn dominant_leader_reads_high() {
        let reading = evaluate(&mk(&[("a", 5.0), ("b", 1.0), ("c", 0.5), ("d", 0.2)]), 1.0);
        assert_eq!(reading.entries[0].label, "a");
        assert_eq!(reading.judgment.band, Band::High);
    }

    #[test]
    fn tight_pack_reads_low() {
        let reading = evaluate(&mk(&[("a", 2.1), ("b", 2.0), ("c", 1.9), ("d", 1.8)]), 1.0);
        assert!(reading.confidence < 40.0, "got {}", reading.confidence);
        assert_eq!(reading.judgment.band, Band::Low);
    }

    #[test]
    fn reading_carries_temperature_and_regime() {
        let reading = evaluate(&mk(&[("a", 1.0), ("b", 2.0)]), 0.3);
        assert_eq!(reading.temperature, 0.3);
        assert_eq!(reading.regime, TemperatureRegime::Sharp);
    }

    #[test]
    fn serialized_reading_has_the_chart_fields() {
        let reading = evaluate(&mk(&[("a", 3.0), ("b", 1.0)]), 1.0);
        let v: serde_json::Value = serde_json::to_value(&reading).unwrap();
        assert!(v["entries"].is_array());
        assert!(v["entries"][0]["probability"].as_f64().unwrap() > 0.5);
        assert!(v["confidence"].is_number());
        assert!(v["judgment"]["band"].is_string());
    }
}
