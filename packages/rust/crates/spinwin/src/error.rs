//! Error taxonomy for wheel operations.

use thiserror::Error;

/// Result type with wheel-specific error.
pub type WheelResult<T> = Result<T, WheelError>;

/// Unified error type for selection, geometry, state transitions and edits.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WheelError {
    /// Selection or geometry was requested over zero sectors.
    #[error("wheel has no sectors")]
    EmptyInput,

    /// A sector weight is negative, NaN or infinite.
    #[error("invalid weight {weight} for sector {index}")]
    InvalidWeight {
        /// Position of the offending sector.
        index: usize,
        /// The rejected weight.
        weight: f64,
    },

    /// Every weight is finite but their sum is not.
    #[error("total sector weight overflows")]
    TotalWeightOverflow,

    /// A random source returned a value outside `[0, 1)`, including NaN.
    #[error("random draw {value} outside [0, 1)")]
    InvalidDraw {
        /// The rejected draw.
        value: f64,
    },

    /// A spin is in flight; the wheel cannot be edited or reset.
    #[error("a spin is already in progress")]
    SpinInProgress,

    /// `complete_spin` was called without a spin in flight.
    #[error("no spin in progress")]
    NotSpinning,

    /// Index does not address a sector.
    #[error("sector index {index} out of range for {len} sectors")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of sectors on the wheel.
        len: usize,
    },

    /// Removing the only remaining sector.
    #[error("cannot remove the last sector")]
    LastSector,

    /// Sector label is empty or whitespace.
    #[error("sector label must not be blank")]
    InvalidLabel,
}

impl WheelError {
    /// Stable identifier used in logs and JSON output.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::EmptyInput => "empty_input",
            Self::InvalidWeight { .. } => "invalid_weight",
            Self::TotalWeightOverflow => "total_weight_overflow",
            Self::InvalidDraw { .. } => "invalid_draw",
            Self::SpinInProgress => "spin_in_progress",
            Self::NotSpinning => "not_spinning",
            Self::IndexOutOfRange { .. } => "index_out_of_range",
            Self::LastSector => "last_sector",
            Self::InvalidLabel => "invalid_label",
        }
    }
}
