//! Entropy sources for response selection and simulated predictions.
//!
//! Selection never reaches for an ambient RNG: callers hand in an
//! [`EntropySource`], so tests and reproducible demos can script the outcome.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Provider of random choices.
pub trait EntropySource: Send {
    /// Returns an index in `0..len`. Returns 0 when `len` is 0.
    fn next_index(&mut self, len: usize) -> usize;

    /// Returns a float in `[0.0, 1.0)`.
    fn next_unit(&mut self) -> f64;
}

/// Entropy backed by the standard `rand` generator.
pub struct RandomSource {
    rng: StdRng,
}

impl RandomSource {
    /// Seeds from operating system entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl EntropySource for RandomSource {
    fn next_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.rng.gen_range(0..len)
    }

    fn next_unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Deterministic source replaying fixed sequences, cycling when exhausted.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    indexes: Vec<usize>,
    units: Vec<f64>,
    index_cursor: usize,
    unit_cursor: usize,
}

impl ScriptedSource {
    pub fn new(indexes: Vec<usize>) -> Self {
        Self {
            indexes,
            ..Self::default()
        }
    }

    pub fn with_units(mut self, units: Vec<f64>) -> Self {
        self.units = units;
        self
    }
}

impl EntropySource for ScriptedSource {
    fn next_index(&mut self, len: usize) -> usize {
        if len == 0 || self.indexes.is_empty() {
            return 0;
        }
        let raw = self.indexes[self.index_cursor % self.indexes.len()];
        self.index_cursor += 1;
        raw % len
    }

    fn next_unit(&mut self) -> f64 {
        if self.units.is_empty() {
            return 0.0;
        }
        let raw = self.units[self.unit_cursor % self.units.len()];
        self.unit_cursor += 1;
        // Keep the half-open contract even for sloppy scripts.
        if raw.is_nan() {
            0.0
        } else {
            raw.clamp(0.0, 1.0 - f64::EPSILON)
        }
    }
}
