//! spinwin - Weighted spin-the-wheel engine for e-commerce promotions.
//!
//! Provides the non-presentational core of a prize wheel:
//! - Sector model (label, color, weight, optional discount)
//! - Weighted outcome selection over unnormalized weights
//! - Explicit wheel state with spin/complete/reset transitions and countdown
//! - Rotation geometry for the rendering surface
//! - YAML settings with system/user merge
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │           Rendering / Editing Surface (caller)              │
//! │  - animation, timers, confetti                              │
//! │  - sector editing form                                      │
//! └─────────────────────────────────────────────────────────────┘
//!                             │
//!                             ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      spinwin (this crate)                   │
//! │  - WheelState transitions                                   │
//! │  - select() over &[Sector] with injectable UniformSource    │
//! │  - SpinGeometry target angles                               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust
//! use spinwin::{Sector, ScriptedRandom, select};
//!
//! let sectors = vec![
//!     Sector::new("A", "#FF6B6B", 0.4),
//!     Sector::new("B", "#FFD93D", 0.1),
//!     Sector::new("C", "#6A0572", 0.5),
//! ];
//! let mut source = ScriptedRandom::new(vec![0.05, 0.95]);
//! assert_eq!(select(&sectors, &mut source).ok(), Some(0));
//! assert_eq!(select(&sectors, &mut source).ok(), Some(2));
//! ```
//!
//! ```rust
//! use spinwin::{SeededRandom, SpinGeometry, WheelState};
//!
//! let mut wheel = WheelState::default();
//! let mut rng = SeededRandom::new(7);
//! let index = wheel.spin_with(&mut rng)?;
//! let angle = SpinGeometry::default().target_angle(index, wheel.sectors().len())?;
//! assert!(angle > 3600.0);
//! let outcome = wheel.complete_spin(index)?;
//! println!("{}", outcome.message());
//! # Ok::<(), spinwin::WheelError>(())
//! ```

// ============================================================================
// Core modules
// ============================================================================

mod error;
mod geometry;
mod presets;
mod random;
mod sector;
mod selector;
mod settings;
mod state;

// ============================================================================
// Public exports
// ============================================================================

pub use error::{WheelError, WheelResult};
pub use geometry::{DEFAULT_BASE_ROTATION, FULL_TURN, SpinGeometry};
pub use presets::{Preset, default_sectors, discount_segments};
pub use random::{ScriptedRandom, SeededRandom, ThreadRandom, UniformSource};
pub use sector::{Sector, total_weight, validate_weights};
pub use selector::{draw_index, probabilities, select, select_weights};
pub use settings::{
    SettingsLocation, WheelSettings, load_wheel_settings, load_wheel_settings_from_paths,
    set_config_home_override, wheel_settings_paths,
};
pub use state::{DEFAULT_COUNTDOWN_SECS, SpinOutcome, TickOutcome, WheelState};

/// Initialize logging for binaries built on this crate.
pub fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();
}
