//! Drawing surface abstraction
//!
//! The simulations only talk to a `Surface`: a pen that moves, strokes lines
//! and stamps colored markers in world coordinates.

pub mod canvas;
pub mod shapes;

pub use canvas::{Canvas, DrawCommand};

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Pen colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Color {
    #[default]
    Black,
    Blue,
    Red,
    Green,
}

impl Color {
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::Blue => "blue",
            Color::Red => "red",
            Color::Green => "green",
        }
    }
}

/// Pen state shared by surface implementations
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pen {
    pub position: DVec2,
    /// Degrees, 0 = east, counter-clockwise
    pub heading: f64,
    pub color: Color,
}

impl Default for Pen {
    fn default() -> Self {
        Self {
            position: DVec2::ZERO,
            heading: 0.0,
            color: Color::Black,
        }
    }
}

/// A 2D drawing surface with turtle-style pen state
pub trait Surface {
    fn pen(&self) -> &Pen;
    fn pen_mut(&mut self) -> &mut Pen;

    /// Set the world coordinate window
    fn set_world_bounds(&mut self, lower_left: DVec2, upper_right: DVec2);

    /// Erase everything drawn and reset the pen
    fn clear(&mut self);

    /// Stroke a line from the pen position to `to`
    fn line_to(&mut self, to: DVec2);

    /// Stamp a marker at the pen position in the pen color
    fn stamp(&mut self);

    /// Push pending drawing to the display
    fn flush(&mut self) {}

    /// Move the pen without drawing
    fn move_to(&mut self, to: DVec2) {
        self.pen_mut().position = to;
    }

    fn set_color(&mut self, color: Color) {
        self.pen_mut().color = color;
    }

    fn set_heading(&mut self, degrees: f64) {
        self.pen_mut().heading = crate::normalize_degrees(degrees);
    }

    /// Move to the first point, then stroke through the rest
    fn polyline(&mut self, points: &[DVec2]) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        self.move_to(*first);
        for p in rest {
            self.line_to(*p);
        }
    }

    fn position(&self) -> DVec2 {
        self.pen().position
    }

    fn heading(&self) -> f64 {
        self.pen().heading
    }

    fn distance_to(&self, point: DVec2) -> f64 {
        self.position().distance(point)
    }
}

/// Surface that tracks the pen but draws nothing (headless runs)
#[derive(Debug, Clone, Default)]
pub struct NullSurface {
    pen: Pen,
}

impl NullSurface {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Surface for NullSurface {
    fn pen(&self) -> &Pen {
        &self.pen
    }

    fn pen_mut(&mut self) -> &mut Pen {
        &mut self.pen
    }

    fn set_world_bounds(&mut self, _lower_left: DVec2, _upper_right: DVec2) {}

    fn clear(&mut self) {
        self.pen = Pen::default();
    }

    fn line_to(&mut self, to: DVec2) {
        self.pen.position = to;
    }

    fn stamp(&mut self) {}
}
