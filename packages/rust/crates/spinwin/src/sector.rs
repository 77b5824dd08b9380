//! Merchant-configurable wheel sectors.
//!
//! A sector's `weight` is a relative likelihood and does not need to be
//! normalized. `color` is opaque to selection and only travels through to the
//! rendering surface.

use serde::{Deserialize, Serialize};

use crate::error::{WheelError, WheelResult};

const TRY_AGAIN_LABEL: &str = "TRY AGAIN";

/// One labeled region of the wheel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sector {
    /// Display text, e.g. "10% OFF".
    pub label: String,
    /// CSS-style color string.
    pub color: String,
    /// Relative selection weight, non-negative.
    pub weight: f64,
    /// Discount percentage granted by this prize, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<u8>,
}

impl Sector {
    /// Create a sector without discount metadata.
    pub fn new(label: impl Into<String>, color: impl Into<String>, weight: f64) -> Self {
        Self {
            label: label.into(),
            color: color.into(),
            weight,
            discount: None,
        }
    }

    /// Attach a discount percentage.
    #[must_use]
    pub fn with_discount(mut self, percent: u8) -> Self {
        self.discount = Some(percent);
        self
    }

    /// Whether this is the consolation sector.
    #[must_use]
    pub fn is_try_again(&self) -> bool {
        self.label.trim().eq_ignore_ascii_case(TRY_AGAIN_LABEL)
    }

    /// Whether landing here counts as a prize.
    ///
    /// "TRY AGAIN" and an explicit 0% discount are losses.
    #[must_use]
    pub fn is_win(&self) -> bool {
        !self.is_try_again() && self.discount != Some(0)
    }

    /// Validate label and weight of a single sector about to be placed at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`WheelError::InvalidLabel`] for a blank label and
    /// [`WheelError::InvalidWeight`] for a negative or non-finite weight.
    pub fn validate(&self, index: usize) -> WheelResult<()> {
        if self.label.trim().is_empty() {
            return Err(WheelError::InvalidLabel);
        }
        check_weight(index, self.weight)
    }
}

pub(crate) fn check_weight(index: usize, weight: f64) -> WheelResult<()> {
    if weight.is_finite() && weight >= 0.0 {
        Ok(())
    } else {
        Err(WheelError::InvalidWeight { index, weight })
    }
}

/// Validate a weight list and return its total, summed in sequence order.
///
/// # Errors
///
/// [`WheelError::EmptyInput`] for an empty list, [`WheelError::InvalidWeight`]
/// for the first bad weight, [`WheelError::TotalWeightOverflow`] when the sum
/// is not finite.
pub fn total_weight(weights: &[f64]) -> WheelResult<f64> {
    if weights.is_empty() {
        return Err(WheelError::EmptyInput);
    }
    let mut total = 0.0;
    for (index, &weight) in weights.iter().enumerate() {
        check_weight(index, weight)?;
        total += weight;
    }
    if total.is_finite() {
        Ok(total)
    } else {
        Err(WheelError::TotalWeightOverflow)
    }
}

/// Validate sector weights and return the total weight.
///
/// # Errors
///
/// Same conditions as [`total_weight`].
pub fn validate_weights(sectors: &[Sector]) -> WheelResult<f64> {
    total_weight(&weights_of(sectors))
}

pub(crate) fn weights_of(sectors: &[Sector]) -> Vec<f64> {
    sectors.iter().map(|s| s.weight).collect()
}
