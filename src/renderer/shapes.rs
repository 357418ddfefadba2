//! Outline generation for 2D primitives

use glam::DVec2;
use std::f64::consts::PI;

/// Closed outline of a square, clockwise from its top-left corner
pub fn square(top_left: DVec2, width: f64) -> [DVec2; 5] {
    [
        top_left,
        top_left + DVec2::new(width, 0.0),
        top_left + DVec2::new(width, -width),
        top_left + DVec2::new(0.0, -width),
        top_left,
    ]
}

/// Closed circle outline, counter-clockwise starting at the bottom point
pub fn circle(center: DVec2, radius: f64, segments: u32) -> Vec<DVec2> {
    let segments = segments.max(3);
    let start = -PI / 2.0;

    (0..=segments)
        .map(|i| {
            let theta = start + (i as f64 / segments as f64) * 2.0 * PI;
            DVec2::new(
                center.x + radius * theta.cos(),
                center.y + radius * theta.sin(),
            )
        })
        .collect()
}
