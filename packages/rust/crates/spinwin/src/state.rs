//! Explicit wheel state owned by the rendering/editing surface.
//!
//! All mutation goes through named transitions:
//!
//! ```text
//!            start_spin / spin_with           complete_spin(i)
//!   Idle ─────────────────────────▶ Spinning ─────────────────▶ Showing(result)
//!    ▲                                                             │
//!    └──────────── reset() or tick() reaching zero ◀───────────────┘
//! ```
//!
//! Only one spin may be in flight; edits are refused while spinning. The
//! state owns no timer: the caller invokes [`WheelState::tick`] once per
//! elapsed countdown second.

use serde::{Deserialize, Serialize};

use crate::error::{WheelError, WheelResult};
use crate::presets::default_sectors;
use crate::random::UniformSource;
use crate::sector::{Sector, validate_weights};
use crate::selector::select;

/// Seconds a result stays on screen before the wheel resets itself.
pub const DEFAULT_COUNTDOWN_SECS: u32 = 10;

/// Result of a completed spin, detached from later sector edits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpinOutcome {
    /// Index of the winning sector at completion time.
    pub index: usize,
    /// Sector label.
    pub label: String,
    /// Sector color.
    pub color: String,
    /// Discount percentage, if the sector carries one.
    pub discount: Option<u8>,
    /// Whether the outcome is a prize (drives celebration effects).
    pub is_win: bool,
}

impl SpinOutcome {
    /// Snapshot `sector` as the outcome at `index`.
    #[must_use]
    pub fn from_sector(index: usize, sector: &Sector) -> Self {
        Self {
            index,
            label: sector.label.clone(),
            color: sector.color.clone(),
            discount: sector.discount,
            is_win: sector.is_win(),
        }
    }

    /// Player-facing result line.
    #[must_use]
    pub fn message(&self) -> String {
        if self.is_win {
            format!("You won: {}", self.label)
        } else {
            "Better luck next time!".to_string()
        }
    }
}

/// What a countdown tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing to count down: spinning or no result shown.
    Idle,
    /// Countdown advanced; seconds left before reset.
    Counting {
        /// Seconds remaining.
        remaining: u32,
    },
    /// Countdown hit zero and the wheel was reset.
    AutoReset,
}

/// Caller-owned wheel state.
#[derive(Debug, Clone, PartialEq)]
pub struct WheelState {
    sectors: Vec<Sector>,
    spinning: bool,
    last_result: Option<SpinOutcome>,
    countdown_remaining: u32,
    countdown_start: u32,
}

impl Default for WheelState {
    fn default() -> Self {
        Self::new(default_sectors())
    }
}

impl WheelState {
    /// Idle wheel over `sectors`. Sectors are validated when a spin starts.
    #[must_use]
    pub fn new(sectors: Vec<Sector>) -> Self {
        Self {
            sectors,
            spinning: false,
            last_result: None,
            countdown_remaining: DEFAULT_COUNTDOWN_SECS,
            countdown_start: DEFAULT_COUNTDOWN_SECS,
        }
    }

    /// Override the result countdown length.
    #[must_use]
    pub fn with_countdown(mut self, secs: u32) -> Self {
        self.countdown_start = secs;
        self.countdown_remaining = secs;
        self
    }

    /// Current sectors in wheel order.
    #[must_use]
    pub fn sectors(&self) -> &[Sector] {
        &self.sectors
    }

    /// Whether a spin is in flight.
    #[must_use]
    pub fn is_spinning(&self) -> bool {
        self.spinning
    }

    /// Result currently shown, if any.
    #[must_use]
    pub fn last_result(&self) -> Option<&SpinOutcome> {
        self.last_result.as_ref()
    }

    /// Seconds left before the shown result is cleared.
    #[must_use]
    pub fn countdown_remaining(&self) -> u32 {
        self.countdown_remaining
    }

    /// Configured countdown length.
    #[must_use]
    pub fn countdown_start(&self) -> u32 {
        self.countdown_start
    }

    /// Begin a spin.
    ///
    /// # Errors
    ///
    /// [`WheelError::SpinInProgress`] if a spin is already in flight, or any
    /// sector validation error.
    pub fn start_spin(&mut self) -> WheelResult<()> {
        if self.spinning {
            return Err(WheelError::SpinInProgress);
        }
        validate_weights(&self.sectors)?;
        self.spinning = true;
        self.last_result = None;
        self.countdown_remaining = self.countdown_start;
        log::info!("spin started over {} sectors", self.sectors.len());
        Ok(())
    }

    /// Begin a spin and pick its outcome from `source`.
    ///
    /// The spin stays in flight until [`Self::complete_spin`] is called with
    /// the returned index.
    ///
    /// # Errors
    ///
    /// Same as [`Self::start_spin`]. On error the wheel stays idle.
    pub fn spin_with<S: UniformSource>(&mut self, source: &mut S) -> WheelResult<usize> {
        self.start_spin()?;
        match select(&self.sectors, source) {
            Ok(index) => Ok(index),
            Err(error) => {
                self.spinning = false;
                Err(error)
            }
        }
    }

    /// Finish the in-flight spin on sector `index`.
    ///
    /// # Errors
    ///
    /// [`WheelError::NotSpinning`] without a spin in flight,
    /// [`WheelError::IndexOutOfRange`] for a bad index.
    pub fn complete_spin(&mut self, index: usize) -> WheelResult<&SpinOutcome> {
        if !self.spinning {
            return Err(WheelError::NotSpinning);
        }
        let sector = self.sector(index)?;
        let outcome = SpinOutcome::from_sector(index, sector);
        log::info!(
            "spin completed: index={} label={:?} win={}",
            outcome.index,
            outcome.label,
            outcome.is_win
        );
        self.spinning = false;
        self.countdown_remaining = self.countdown_start;
        Ok(&*self.last_result.insert(outcome))
    }

    /// Clear the shown result and re-arm the countdown ("click to continue").
    ///
    /// # Errors
    ///
    /// [`WheelError::SpinInProgress`] while spinning.
    pub fn reset(&mut self) -> WheelResult<()> {
        self.ensure_idle()?;
        self.clear_result();
        Ok(())
    }

    /// Advance the result countdown by one second.
    pub fn tick(&mut self) -> TickOutcome {
        if self.spinning || self.last_result.is_none() {
            return TickOutcome::Idle;
        }
        self.countdown_remaining = self.countdown_remaining.saturating_sub(1);
        if self.countdown_remaining == 0 {
            log::info!("countdown elapsed; resetting wheel");
            self.clear_result();
            return TickOutcome::AutoReset;
        }
        TickOutcome::Counting {
            remaining: self.countdown_remaining,
        }
    }

    /// Append a sector, returning its index.
    ///
    /// # Errors
    ///
    /// [`WheelError::SpinInProgress`] while spinning, or a sector validation
    /// error.
    pub fn add_sector(&mut self, sector: Sector) -> WheelResult<usize> {
        self.ensure_idle()?;
        let index = self.sectors.len();
        sector.validate(index)?;
        self.sectors.push(sector);
        Ok(index)
    }

    /// Remove and return the sector at `index`.
    ///
    /// # Errors
    ///
    /// [`WheelError::SpinInProgress`], [`WheelError::IndexOutOfRange`], or
    /// [`WheelError::LastSector`] when it is the only sector.
    pub fn remove_sector(&mut self, index: usize) -> WheelResult<Sector> {
        self.ensure_idle()?;
        self.sector(index)?;
        if self.sectors.len() == 1 {
            return Err(WheelError::LastSector);
        }
        Ok(self.sectors.remove(index))
    }

    /// Replace the sector at `index`, returning the previous one.
    ///
    /// # Errors
    ///
    /// [`WheelError::SpinInProgress`], [`WheelError::IndexOutOfRange`], or a
    /// sector validation error.
    pub fn update_sector(&mut self, index: usize, sector: Sector) -> WheelResult<Sector> {
        self.ensure_idle()?;
        self.sector(index)?;
        sector.validate(index)?;
        Ok(std::mem::replace(&mut self.sectors[index], sector))
    }

    fn sector(&self, index: usize) -> WheelResult<&Sector> {
        self.sectors.get(index).ok_or(WheelError::IndexOutOfRange {
            index,
            len: self.sectors.len(),
        })
    }

    fn ensure_idle(&self) -> WheelResult<()> {
        if self.spinning {
            Err(WheelError::SpinInProgress)
        } else {
            Ok(())
        }
    }

    fn clear_result(&mut self) {
        self.last_result = None;
        self.countdown_remaining = self.countdown_start;
    }
}
