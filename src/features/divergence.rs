//! Kullback-Leibler divergence between two series.
//!
//! Values are read as unnormalized weights: each side is scaled to sum to
//! one before the divergence `sum(p_i * ln(p_i / q_i))` is taken. Positions
//! where either operand is NaN are dropped from both sides.

use crate::core::Serie;
use crate::error::{KlError, Result};

/// Returns the KL divergence `D_KL(p || q)` in nats.
///
/// Degenerate operands are resolved before the general formula:
/// * `p` all zero (NaN read as zero) gives `0.0`, whatever `q` is.
/// * `q` all zero while `p` is not gives `+inf`.
///
/// # Errors
/// * [`KlError::InvalidArgument`] if either operand is empty.
/// * [`KlError::DimensionMismatch`] if the operands differ in length.
/// * [`KlError::ComputationError`] if no position is valid in both operands.
///
/// # Example
/// ```
/// use kl_evolution::core::Serie;
/// use kl_evolution::features::kl_divergence;
///
/// let p = Serie::new([1.0, 2.0, 3.0]);
/// assert_eq!(kl_divergence(&p, &p).unwrap(), 0.0);
///
/// let q = Serie::new([0.0, 0.0, 0.0]);
/// assert_eq!(kl_divergence(&p, &q).unwrap(), f64::INFINITY);
/// ```
pub fn kl_divergence(p: &Serie, q: &Serie) -> Result<f64> {
    if p.is_empty() || q.is_empty() {
        return Err(KlError::InvalidArgument(
            "both p and q must be specified".to_string(),
        ));
    }

    let p_is_empty = p.all_eq(0.0);
    let q_is_empty = q.all_eq(0.0);

    if p_is_empty {
        return Ok(0.0);
    }
    if q_is_empty {
        return Ok(f64::INFINITY);
    }

    relative_entropy(p.values(), q.values())
}

/// KL divergence of two equal-length weight vectors, omitting NaN pairs.
///
/// No degenerate-operand policy is applied here; see [`kl_divergence`].
pub fn relative_entropy(p: &[f64], q: &[f64]) -> Result<f64> {
    if p.len() != q.len() {
        return Err(KlError::DimensionMismatch {
            expected: p.len(),
            got: q.len(),
        });
    }

    let pairs: Vec<(f64, f64)> = p
        .iter()
        .zip(q.iter())
        .filter(|(pi, qi)| !pi.is_nan() && !qi.is_nan())
        .map(|(&pi, &qi)| (pi, qi))
        .collect();

    if pairs.is_empty() {
        return Err(KlError::ComputationError(
            "no position is observed in both p and q".to_string(),
        ));
    }

    let p_total: f64 = pairs.iter().map(|(pi, _)| pi).sum();
    let q_total: f64 = pairs.iter().map(|(_, qi)| qi).sum();

    Ok(pairs
        .iter()
        .map(|&(pi, qi)| rel_entr(pi / p_total, qi / q_total))
        .sum())
}

/// Elementwise relative entropy term.
fn rel_entr(x: f64, y: f64) -> f64 {
    if x.is_nan() || y.is_nan() {
        f64::NAN
    } else if x > 0.0 && y > 0.0 {
        x * (x / y).ln()
    } else if x == 0.0 && y >= 0.0 {
        0.0
    } else {
        f64::INFINITY
    }
}
