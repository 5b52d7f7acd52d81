//! # Entropy / Confidence Evaluator
//! Turns a probability distribution into a bounded confidence scalar.
//!
//! Confidence = `(1 - H / ln(N)) * 100`, where `H` is Shannon entropy and
//! `ln(N)` is the entropy of the uniform distribution over N outcomes. A
//! peaked distribution scores near 100, a uniform one near 0.

/// Shannon entropy `H = -Σ p ln(p)` over the positive terms.
///
/// Zero probabilities are skipped (`0 * ln(0)` is taken as 0 by convention).
/// Distributions with 0 or 1 elements have entropy 0 by definition; no
/// computation is attempted.
pub fn entropy(probs: &[f64]) -> f64 {
    if probs.len() <= 1 {
        return 0.0;
    }

    let mut h = 0.0;
    for &p in probs {
        if p > 0.0 {
            h -= p * p.ln();
        }
    }
    h
}

/// Confidence score in `[0, 100]` derived from normalized entropy.
///
/// Empty and single-element distributions are fully "decided" by convention
/// and return 100 directly; the general formula would divide by `ln(1) = 0`.
pub fn confidence(probs: &[f64]) -> f64 {
    if probs.len() <= 1 {
        return 100.0;
    }

    let h = entropy(probs);
    let max_entropy = (probs.len() as f64).ln();
    let normalized = h / max_entropy;

    // Clamp absorbs floating-point overshoot at the extremes.
    ((1.0 - normalized) * 100.0).clamp(0.0, 100.0)
}
