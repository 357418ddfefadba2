//! Dartboard - Monte Carlo pi on a virtual dartboard
//!
//! Core modules:
//! - `sim`: Seeded simulations (pi estimator, darts game, screensaver)
//! - `renderer`: Drawing surface abstraction and a recording canvas
//! - `settings`: JSON configuration
//! - `error`: Crate error type

pub mod error;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{DartsError, Result};
pub use settings::Settings;

use glam::DVec2;

/// Default configuration constants
pub mod consts {
    /// Unit circle, 2x2 board
    pub const DEFAULT_CIRCLE_RADIUS: f64 = 1.0;
    /// Segments used to draw the circle outline
    pub const CIRCLE_RESOLUTION: u32 = 100;

    /// Part A warm-up throws
    pub const WARMUP_DARTS: u32 = 10;
    /// Rounds in a darts game
    pub const DARTS_ROUNDS: u32 = 10;
    /// Throws between surface refreshes during estimation
    pub const REFRESH_BATCH: u32 = 5000;

    /// Screensaver bound rectangle
    pub const SCREEN_WIDTH: f64 = 800.0;
    pub const SCREEN_HEIGHT: f64 = 600.0;
    /// Distance travelled per screensaver step
    pub const BALL_STEP: f64 = 10.0;
    /// Pause between screensaver steps (milliseconds)
    pub const FRAME_DELAY_MS: u64 = 10;
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Unit vector for a heading in degrees (0 = east, counter-clockwise)
#[inline]
pub fn heading_vector(degrees: f64) -> DVec2 {
    let theta = degrees.to_radians();
    DVec2::new(theta.cos(), theta.sin())
}

/// Bearing in degrees from `from` toward `to`, in [0, 360)
#[inline]
pub fn bearing(from: DVec2, to: DVec2) -> f64 {
    let d = to - from;
    normalize_degrees(d.y.atan2(d.x).to_degrees())
}
