//! Run settings
//!
//! Loaded from a JSON file; any missing field falls back to its default.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::Result;
use crate::sim::Bounds;

/// Screensaver options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreensaverSettings {
    /// Bound rectangle width (centered at the origin)
    pub width: f64,
    /// Bound rectangle height (centered at the origin)
    pub height: f64,
    /// Distance per step
    pub step: f64,
    /// Pause between steps in milliseconds
    pub frame_delay_ms: u64,
}

impl Default for ScreensaverSettings {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            step: BALL_STEP,
            frame_delay_ms: FRAME_DELAY_MS,
        }
    }
}

impl ScreensaverSettings {
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.width, self.height)
    }
}

/// Dartboard settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Board ===
    /// Circle radius; the board is the square of side 2r around it
    pub circle_radius: f64,
    /// Segments used to draw the circle
    pub circle_resolution: u32,

    // === Runs ===
    /// Part A warm-up throws
    pub warmup_darts: u32,
    /// Rounds per darts game
    pub darts_rounds: u32,
    /// Throws between surface refreshes (0 disables batching)
    pub refresh_batch: u32,
    /// Fixed RNG seed; a time-derived seed is used when absent
    pub seed: Option<u64>,

    // === Output ===
    /// Directory for SVG snapshots of each part, if any
    pub svg_dir: Option<PathBuf>,

    pub screensaver: ScreensaverSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            circle_radius: DEFAULT_CIRCLE_RADIUS,
            circle_resolution: CIRCLE_RESOLUTION,
            warmup_darts: WARMUP_DARTS,
            darts_rounds: DARTS_ROUNDS,
            refresh_batch: REFRESH_BATCH,
            seed: None,
            svg_dir: None,
            screensaver: ScreensaverSettings::default(),
        }
    }
}

impl Settings {
    /// Environment variable naming the settings file
    pub const CONFIG_ENV: &'static str = "DARTBOARD_CONFIG";
    /// Settings file used when the environment variable is unset
    pub const DEFAULT_PATH: &'static str = "dartboard.json";

    /// Load settings from a JSON file; a missing file yields defaults
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::info!("No settings at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load from `$DARTBOARD_CONFIG`, or `dartboard.json`
    pub fn load_default() -> Result<Self> {
        let path = std::env::var_os(Self::CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(Self::DEFAULT_PATH));
        Self::load(&path)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Save settings as pretty JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }

    /// Seed to use for this run
    pub fn effective_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or_default()
        })
    }
}
