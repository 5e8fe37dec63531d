//! Uniform random sources for policy sampling.
//!
//! Policies never touch ambient global randomness.  Every sampling pass takes
//! a `&mut dyn UniformSource`, so tests can substitute a [`SequenceSource`]
//! and reproduce an exact draw order.
//!
//! # Determinism strategy
//!
//! A single run uses one [`SimRng`] and consumes it in traversal order.
//! Parallel runs give each household its own [`HouseholdRng`] seeded by:
//!
//!   seed = global_seed XOR (household_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive household IDs uniformly across the seed space.
//! Results then do not depend on which thread processes which household.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::HouseholdId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── Trait ─────────────────────────────────────────────────────────────────────

/// A stream of independent uniform draws in `[0, 1)`.
pub trait UniformSource {
    /// Draw the next value.
    fn next_uniform(&mut self) -> f64;
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Run-level RNG, consumed sequentially.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }
}

impl UniformSource for SimRng {
    #[inline]
    fn next_uniform(&mut self) -> f64 {
        self.0.r#gen::<f64>()
    }
}

// ── HouseholdRng ──────────────────────────────────────────────────────────────

/// Per-household deterministic RNG.
pub struct HouseholdRng(SmallRng);

impl HouseholdRng {
    /// Seed deterministically from the run's global seed and a household ID.
    pub fn new(global_seed: u64, household: HouseholdId) -> Self {
        let seed = global_seed ^ (household.0 as u64).wrapping_mul(MIXING_CONSTANT);
        HouseholdRng(SmallRng::seed_from_u64(seed))
    }
}

impl UniformSource for HouseholdRng {
    #[inline]
    fn next_uniform(&mut self) -> f64 {
        self.0.r#gen::<f64>()
    }
}

// ── SequenceSource ────────────────────────────────────────────────────────────

/// Replays a fixed list of draws, wrapping around when exhausted.
///
/// Counts how many values were taken so callers can assert on the exact
/// number of Bernoulli trials a pass performed.  An empty sequence yields
/// `0.0`.
#[derive(Clone, Debug, Default)]
pub struct SequenceSource {
    values: Vec<f64>,
    draws:  usize,
}

impl SequenceSource {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, draws: 0 }
    }

    /// A source that always returns `value`.
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }

    /// Number of values drawn so far.
    pub fn draws(&self) -> usize {
        self.draws
    }
}

impl UniformSource for SequenceSource {
    fn next_uniform(&mut self) -> f64 {
        let value = if self.values.is_empty() {
            0.0
        } else {
            self.values[self.draws % self.values.len()]
        };
        self.draws += 1;
        value
    }
}
