//! Boundary detection and heading reflection for the screensaver
//!
//! Headings are in degrees, 0 = east, counter-clockwise. A wall hit mirrors
//! the heading across the wall; a corner hit sends the ball straight back.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::normalize_degrees;

/// Rectangle centered at the origin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

/// Which part of the boundary a position has reached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoundHit {
    None,
    Left,
    Right,
    Top,
    Bottom,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl BoundHit {
    pub fn is_corner(&self) -> bool {
        matches!(
            self,
            BoundHit::TopLeft | BoundHit::TopRight | BoundHit::BottomLeft | BoundHit::BottomRight
        )
    }

    /// Left or right wall only
    pub fn is_vertical(&self) -> bool {
        matches!(self, BoundHit::Left | BoundHit::Right)
    }

    /// Top or bottom wall only
    pub fn is_horizontal(&self) -> bool {
        matches!(self, BoundHit::Top | BoundHit::Bottom)
    }
}

impl Bounds {
    pub fn new(width: f64, height: f64) -> Self {
        debug_assert!(width > 0.0 && height > 0.0, "bounds must be positive");
        Self { width, height }
    }

    pub fn half_extents(&self) -> DVec2 {
        DVec2::new(self.width, self.height) / 2.0
    }

    /// Strictly inside, not touching any wall
    pub fn contains(&self, p: DVec2) -> bool {
        let half = self.half_extents();
        p.x.abs() < half.x && p.y.abs() < half.y
    }

    /// Classify a position; touching a wall counts as hitting it
    pub fn classify(&self, p: DVec2) -> BoundHit {
        let half = self.half_extents();
        let left = p.x <= -half.x;
        let right = p.x >= half.x;
        let top = p.y >= half.y;
        let bottom = p.y <= -half.y;

        match (left, right, top, bottom) {
            (true, _, true, _) => BoundHit::TopLeft,
            (_, true, true, _) => BoundHit::TopRight,
            (true, _, _, true) => BoundHit::BottomLeft,
            (_, true, _, true) => BoundHit::BottomRight,
            (true, _, _, _) => BoundHit::Left,
            (_, true, _, _) => BoundHit::Right,
            (_, _, true, _) => BoundHit::Top,
            (_, _, _, true) => BoundHit::Bottom,
            _ => BoundHit::None,
        }
    }
}

/// Heading after a step whose forward bearing was `forward`
///
/// Corner: full reversal. Left/right wall: mirror across the vertical axis.
/// Top/bottom wall: mirror across the horizontal axis.
pub fn reflect_heading(forward: f64, hit: BoundHit) -> f64 {
    let heading = if hit.is_corner() {
        forward + 180.0
    } else if hit.is_vertical() {
        -forward + 180.0
    } else if hit.is_horizontal() {
        -forward
    } else {
        forward
    };
    normalize_degrees(heading)
}
