//! Injectable uniform random sources.
//!
//! The selector never touches ambient randomness directly; it asks a
//! [`UniformSource`] for a draw in `[0, 1)` and scales it itself.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng, thread_rng};

/// Source of uniformly distributed reals in the half-open interval `[0, 1)`.
pub trait UniformSource {
    /// Next draw in `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

impl<S: UniformSource + ?Sized> UniformSource for &mut S {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

/// Thread-local generator from `rand`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl UniformSource for ThreadRandom {
    fn next_unit(&mut self) -> f64 {
        thread_rng().gen_range(0.0..1.0)
    }
}

/// Reproducible generator seeded from a `u64`.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    /// Create a generator from a seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl UniformSource for SeededRandom {
    fn next_unit(&mut self) -> f64 {
        self.rng.gen_range(0.0..1.0)
    }
}

/// Replays a fixed list of draws, cycling when exhausted.
///
/// An empty script always yields `0.0`. Values are replayed as given, so a
/// script can feed out-of-range draws to exercise selector rejection.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    draws: Vec<f64>,
    cursor: usize,
}

impl ScriptedRandom {
    /// Create a source that replays `draws` in order.
    #[must_use]
    pub fn new(draws: Vec<f64>) -> Self {
        Self { draws, cursor: 0 }
    }

    /// Number of draws handed out so far.
    #[must_use]
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl UniformSource for ScriptedRandom {
    fn next_unit(&mut self) -> f64 {
        if self.draws.is_empty() {
            return 0.0;
        }
        let value = self.draws[self.cursor % self.draws.len()];
        self.cursor += 1;
        value
    }
}
