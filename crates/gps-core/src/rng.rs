//! Injectable random sources for the motion model.
//!
//! # Determinism strategy
//!
//! Every random draw the simulator makes goes through [`RandomSource::unit`],
//! a single value in `[0, 1)` that is then scaled into the wanted range.
//! Production code uses [`SimRng`], a seeded `SmallRng`: the same seed always
//! produces the same trajectory.  Tests substitute [`ConstantRng`] or
//! [`SequenceRng`] to pin every draw and assert exact positions.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// A stream of uniform draws.
pub trait RandomSource: Send + 'static {
    /// Next value, uniformly distributed in `[0, 1)`.
    fn unit(&mut self) -> f64;

    /// Next value, uniformly distributed in `[low, high)`.
    #[inline]
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        low + (high - low) * self.unit()
    }

    /// Symmetric jitter in `[-amplitude, +amplitude)`.
    #[inline]
    fn jitter(&mut self, amplitude: f64) -> f64 {
        self.uniform(-amplitude, amplitude)
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Seeded production RNG.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed from OS entropy; runs are not reproducible.
    pub fn from_entropy() -> Self {
        SimRng(SmallRng::from_entropy())
    }
}

impl RandomSource for SimRng {
    #[inline]
    fn unit(&mut self) -> f64 {
        self.0.r#gen::<f64>()
    }
}

// ── Test doubles ──────────────────────────────────────────────────────────────

/// Returns the same unit value forever.
///
/// `ConstantRng(0.5)` yields zero for every symmetric jitter, i.e. a model
/// with all perturbation switched off.
#[derive(Copy, Clone, Debug)]
pub struct ConstantRng(pub f64);

impl RandomSource for ConstantRng {
    #[inline]
    fn unit(&mut self) -> f64 {
        self.0
    }
}

/// Replays a fixed list of unit values, cycling when exhausted.
#[derive(Clone, Debug)]
pub struct SequenceRng {
    values: Vec<f64>,
    next:   usize,
}

impl SequenceRng {
    /// # Panics
    /// Panics if `values` is empty.
    pub fn new(values: Vec<f64>) -> Self {
        assert!(!values.is_empty(), "SequenceRng needs at least one value");
        Self { values, next: 0 }
    }

    /// Number of draws taken so far.
    pub fn draws(&self) -> usize {
        self.next
    }
}

impl RandomSource for SequenceRng {
    fn unit(&mut self) -> f64 {
        let v = self.values[self.next % self.values.len()];
        self.next += 1;
        v
    }
}
