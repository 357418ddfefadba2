//! Random sources

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Uniform real sampling in a closed range
pub trait RandomSource {
    fn uniform(&mut self, lo: f64, hi: f64) -> f64;
}

/// PCG32 source seeded from a u64
#[derive(Debug, Clone)]
pub struct SeededSource {
    pub seed: u64,
    rng: Pcg32,
}

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededSource {
    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        if lo >= hi {
            return lo;
        }
        self.rng.random_range(lo..=hi)
    }
}

/// Replays a fixed sequence of values, wrapping at the end
///
/// Values are returned as given, regardless of the requested range.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    values: Vec<f64>,
    next: usize,
}

impl ScriptedSource {
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        Self {
            values: values.into_iter().collect(),
            next: 0,
        }
    }

    /// Script a sequence of (x, y) points
    pub fn points(points: &[(f64, f64)]) -> Self {
        Self::new(points.iter().flat_map(|&(x, y)| [x, y]))
    }
}

impl RandomSource for ScriptedSource {
    fn uniform(&mut self, lo: f64, _hi: f64) -> f64 {
        if self.values.is_empty() {
            return lo;
        }
        let value = self.values[self.next];
        self.next = (self.next + 1) % self.values.len();
        value
    }
}
