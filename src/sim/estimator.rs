//! Monte Carlo estimate of pi
//!
//! The circle covers pi/4 of its bounding square, so four times the share of
//! darts landing inside approaches pi.

use serde::{Deserialize, Serialize};

use super::board::Dartboard;
use super::random::RandomSource;
use crate::error::{DartsError, Result};
use crate::renderer::Surface;

/// Outcome of an estimation run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    pub darts: u64,
    pub inside: u64,
    pub pi: f64,
}

impl Estimate {
    /// Distance from the true value of pi
    pub fn abs_error(&self) -> f64 {
        (self.pi - std::f64::consts::PI).abs()
    }
}

/// Throw `darts` darts and estimate pi as `4 * inside / darts`
///
/// The surface is flushed every `batch` throws (0 disables batching) and once
/// at the end. Zero darts is an error since the ratio is undefined.
pub fn monte_pi<S, R>(
    board: &Dartboard,
    surface: &mut S,
    rng: &mut R,
    darts: u64,
    batch: u32,
) -> Result<Estimate>
where
    S: Surface,
    R: RandomSource,
{
    if darts == 0 {
        return Err(DartsError::NoDarts);
    }

    let mut inside = 0u64;
    for i in 1..=darts {
        if board.throw_dart(surface, rng).inside {
            inside += 1;
        }
        if batch > 0 && i % u64::from(batch) == 0 {
            surface.flush();
        }
    }
    surface.flush();

    let pi = 4.0 * (inside as f64 / darts as f64);
    log::info!("Estimated pi = {} from {} darts ({} inside)", pi, darts, inside);

    Ok(Estimate { darts, inside, pi })
}
