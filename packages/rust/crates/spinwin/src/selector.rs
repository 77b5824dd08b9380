//! Weighted random outcome selection (inverse-CDF sampling).
//!
//! `r` is drawn uniformly from `[0, total)` and the sectors are walked in
//! order, returning the first one whose cumulative weight reaches `r`. A
//! positive-weight sector at position `i` owns the interval
//! `(cumulative_{i-1}, cumulative_i]`, so its probability is `weight / total`.
//!
//! Degenerate inputs are resolved without consulting comparison semantics:
//! an all-zero weight set always yields the last index.

use crate::error::{WheelError, WheelResult};
use crate::random::UniformSource;
use crate::sector::{Sector, total_weight, weights_of};

/// Select one sector index.
///
/// The input is only read. One draw is taken from `source` unless every
/// weight is zero.
///
/// # Errors
///
/// [`crate::WheelError::EmptyInput`] for no sectors,
/// [`crate::WheelError::InvalidWeight`] for a negative or non-finite weight,
/// [`crate::WheelError::TotalWeightOverflow`] when the weights do not sum to a
/// finite value, [`crate::WheelError::InvalidDraw`] when `source` hands back
/// a value outside `[0, 1)`.
pub fn select<S: UniformSource>(sectors: &[Sector], source: &mut S) -> WheelResult<usize> {
    select_weights(&weights_of(sectors), source)
}

/// Same as [`select`] over bare weights.
///
/// # Errors
///
/// See [`select`].
pub fn select_weights<S: UniformSource>(weights: &[f64], source: &mut S) -> WheelResult<usize> {
    let total = total_weight(weights)?;
    let last = weights.len() - 1;
    if total == 0.0 {
        log::debug!("all {} weights are zero; selecting last index {last}", weights.len());
        return Ok(last);
    }

    let unit = source.next_unit();
    if !(0.0..1.0).contains(&unit) {
        return Err(WheelError::InvalidDraw { value: unit });
    }
    let r = unit * total;
    let index = walk(weights, r);
    log::debug!("draw unit={unit:.6} r={r:.6} total={total:.6} -> index {index}");
    Ok(index)
}

/// Resolve a draw already scaled to `[0, total)` against `weights`.
///
/// # Errors
///
/// Validates `weights` like [`select_weights`].
pub fn draw_index(weights: &[f64], r: f64) -> WheelResult<usize> {
    let total = total_weight(weights)?;
    if total == 0.0 {
        return Ok(weights.len() - 1);
    }
    Ok(walk(weights, r))
}

/// Per-sector selection probability, `weight / total`.
///
/// For an all-zero set the last sector carries probability `1.0`.
///
/// # Errors
///
/// See [`select`].
pub fn probabilities(sectors: &[Sector]) -> WheelResult<Vec<f64>> {
    let weights = weights_of(sectors);
    let total = total_weight(&weights)?;
    if total == 0.0 {
        let mut out = vec![0.0; weights.len()];
        if let Some(last) = out.last_mut() {
            *last = 1.0;
        }
        return Ok(out);
    }
    Ok(weights.iter().map(|w| w / total).collect())
}

// Zero-weight sectors own an empty interval, so they are skipped outright:
// a draw of exactly 0.0 must not land on a leading zero-weight sector.
fn walk(weights: &[f64], r: f64) -> usize {
    let mut cumulative = 0.0;
    for (index, &weight) in weights.iter().enumerate() {
        if weight == 0.0 {
            continue;
        }
        cumulative += weight;
        if r <= cumulative {
            return index;
        }
    }
    // Rounding fallback.
    weights.len() - 1
}
