//! Simulation module
//!
//! All sampling and trajectory logic lives here. Every simulation is driven by
//! explicit collaborators so runs are reproducible:
//! - Seeded or scripted random source only
//! - Drawing goes through a `Surface` handle and never feeds back into results
//! - Wall-clock time comes from a `Clock`

pub mod board;
pub mod clock;
pub mod collision;
pub mod darts;
pub mod estimator;
pub mod random;
pub mod screensaver;

pub use board::{Circle, Dartboard, Throw};
pub use clock::{Clock, ManualClock, SystemClock};
pub use collision::{BoundHit, Bounds, reflect_heading};
pub use darts::{DartsOutcome, Winner, play_darts};
pub use estimator::{Estimate, monte_pi};
pub use random::{RandomSource, ScriptedSource, SeededSource};
pub use screensaver::{Screensaver, ScreensaverReport};
