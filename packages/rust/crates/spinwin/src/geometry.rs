//! Angular layout of sectors and terminal spin rotation.
//!
//! Sector `i` of `n` spans `[i * a, (i + 1) * a)` degrees clockwise from the
//! pointer, where `a = full_turn / n`. The terminal rotation brings the
//! middle of the selected sector under the pointer after `base_rotation`
//! worth of decorative turns.

use serde::{Deserialize, Serialize};

use crate::error::{WheelError, WheelResult};

/// Default decorative rotation, ten full turns.
pub const DEFAULT_BASE_ROTATION: f64 = 3600.0;

/// Degrees in one revolution.
pub const FULL_TURN: f64 = 360.0;

/// Rotation constants used by the rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpinGeometry {
    /// Rotation applied before the target offset.
    pub base_rotation: f64,
    /// Degrees per revolution.
    pub full_turn: f64,
}

impl Default for SpinGeometry {
    fn default() -> Self {
        Self {
            base_rotation: DEFAULT_BASE_ROTATION,
            full_turn: FULL_TURN,
        }
    }
}

impl SpinGeometry {
    /// Geometry with a custom base rotation.
    #[must_use]
    pub fn with_base_rotation(base_rotation: f64) -> Self {
        Self {
            base_rotation,
            ..Self::default()
        }
    }

    /// Arc covered by each of `count` equal sectors.
    ///
    /// # Errors
    ///
    /// [`WheelError::EmptyInput`] when `count` is zero.
    #[allow(clippy::cast_precision_loss)]
    pub fn sector_angle(&self, count: usize) -> WheelResult<f64> {
        if count == 0 {
            return Err(WheelError::EmptyInput);
        }
        Ok(self.full_turn / count as f64)
    }

    /// Terminal rotation that centers sector `index` under the pointer.
    ///
    /// `base_rotation + full_turn - (index * sector_angle + sector_angle / 2)`.
    ///
    /// # Errors
    ///
    /// [`WheelError::EmptyInput`] for zero sectors,
    /// [`WheelError::IndexOutOfRange`] when `index >= count`.
    #[allow(clippy::cast_precision_loss)]
    pub fn target_angle(&self, index: usize, count: usize) -> WheelResult<f64> {
        let sector_angle = self.checked_angle(index, count)?;
        Ok(self.base_rotation + self.full_turn
            - (index as f64 * sector_angle + sector_angle / 2.0))
    }

    /// Start and end angle of sector `index`, as used for conic-gradient stops.
    ///
    /// # Errors
    ///
    /// Same as [`Self::target_angle`].
    #[allow(clippy::cast_precision_loss)]
    pub fn sector_arc(&self, index: usize, count: usize) -> WheelResult<(f64, f64)> {
        let sector_angle = self.checked_angle(index, count)?;
        let start = index as f64 * sector_angle;
        Ok((start, start + sector_angle))
    }

    /// Tilt applied to each label so it reads along the sector's bisector.
    ///
    /// # Errors
    ///
    /// [`WheelError::EmptyInput`] when `count` is zero.
    pub fn label_tilt(&self, count: usize) -> WheelResult<f64> {
        Ok(self.sector_angle(count)? / 2.0)
    }

    /// Map a resting rotation back to the sector under the pointer.
    ///
    /// Inverse of [`Self::target_angle`] when `base_rotation` is a whole
    /// number of turns.
    ///
    /// # Errors
    ///
    /// [`WheelError::EmptyInput`] when `count` is zero.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn sector_at_rotation(&self, rotation: f64, count: usize) -> WheelResult<usize> {
        let sector_angle = self.sector_angle(count)?;
        let resting = rotation.rem_euclid(self.full_turn);
        let offset = (self.full_turn - resting).rem_euclid(self.full_turn);
        let index = (offset / sector_angle).floor() as usize;
        Ok(index.min(count - 1))
    }

    fn checked_angle(&self, index: usize, count: usize) -> WheelResult<f64> {
        let sector_angle = self.sector_angle(count)?;
        if index >= count {
            return Err(WheelError::IndexOutOfRange { index, len: count });
        }
        Ok(sector_angle)
    }
}
