//! Recording canvas
//!
//! Keeps every draw command so a run can be inspected, dumped as JSON or
//! exported as an SVG picture.

use std::path::Path;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::{Color, Pen, Surface};
use crate::error::Result;

/// A single recorded drawing operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    Line { from: DVec2, to: DVec2, color: Color },
    Stamp { at: DVec2, color: Color },
}

/// In-memory canvas that records draw commands
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Canvas {
    pub lower_left: DVec2,
    pub upper_right: DVec2,
    pub commands: Vec<DrawCommand>,
    /// Number of flushes since the last clear
    pub frames: u32,
    #[serde(skip)]
    pen: Pen,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(DVec2::splat(-1.0), DVec2::splat(1.0))
    }
}

impl Canvas {
    pub fn new(lower_left: DVec2, upper_right: DVec2) -> Self {
        Self {
            lower_left,
            upper_right,
            commands: Vec::new(),
            frames: 0,
            pen: Pen::default(),
        }
    }

    /// Stamps recorded in the given color
    pub fn stamps(&self, color: Color) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Stamp { color: stamped, .. } if *stamped == color))
            .count()
    }

    pub fn lines(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
            .count()
    }

    /// Render the recorded commands as an SVG document
    pub fn to_svg(&self) -> String {
        let size = self.upper_right - self.lower_left;
        let span = size.x.max(size.y).max(f64::EPSILON);
        let stroke = span / 400.0;
        let dot = span / 150.0;

        // SVG y grows downward; flip world y around the window
        let flip = |p: DVec2| DVec2::new(p.x, self.upper_right.y + self.lower_left.y - p.y);

        let mut svg = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"{} {} {} {}\">\n",
            self.lower_left.x, self.lower_left.y, size.x, size.y
        );
        for command in &self.commands {
            match command {
                DrawCommand::Line { from, to, color } => {
                    let (a, b) = (flip(*from), flip(*to));
                    svg.push_str(&format!(
                        "  <line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>\n",
                        a.x,
                        a.y,
                        b.x,
                        b.y,
                        color.as_str(),
                        stroke
                    ));
                }
                DrawCommand::Stamp { at, color } => {
                    let p = flip(*at);
                    svg.push_str(&format!(
                        "  <circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\"/>\n",
                        p.x,
                        p.y,
                        dot,
                        color.as_str()
                    ));
                }
            }
        }
        svg.push_str("</svg>\n");
        svg
    }

    pub fn write_svg(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_svg())?;
        log::info!("Wrote {} draw commands to {}", self.commands.len(), path.display());
        Ok(())
    }
}

impl Surface for Canvas {
    fn pen(&self) -> &Pen {
        &self.pen
    }

    fn pen_mut(&mut self) -> &mut Pen {
        &mut self.pen
    }

    fn set_world_bounds(&mut self, lower_left: DVec2, upper_right: DVec2) {
        self.lower_left = lower_left;
        self.upper_right = upper_right;
    }

    fn clear(&mut self) {
        self.commands.clear();
        self.frames = 0;
        self.pen = Pen::default();
    }

    fn line_to(&mut self, to: DVec2) {
        self.commands.push(DrawCommand::Line {
            from: self.pen.position,
            to,
            color: self.pen.color,
        });
        self.pen.position = to;
    }

    fn stamp(&mut self) {
        self.commands.push(DrawCommand::Stamp {
            at: self.pen.position,
            color: self.pen.color,
        });
    }

    fn flush(&mut self) {
        self.frames += 1;
    }
}
