//! Dartboard geometry and the single-dart throw
//!
//! The board is the square of side 2r bounding a circle of radius r. A dart
//! lands uniformly in that square and scores when it falls in the closed disk.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::random::RandomSource;
use crate::Settings;
use crate::error::{DartsError, Result};
use crate::renderer::{Color, Surface, shapes};

/// Target circle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: DVec2,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: DVec2, radius: f64) -> Result<Self> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(DartsError::InvalidRadius(radius));
        }
        Ok(Self { center, radius })
    }

    /// Unit circle at the origin
    pub fn unit() -> Self {
        Self {
            center: DVec2::ZERO,
            radius: 1.0,
        }
    }

    /// Closed-disk membership: points exactly on the rim count as inside
    #[inline]
    pub fn contains(&self, point: DVec2) -> bool {
        point.distance(self.center) <= self.radius
    }

    /// Lower-left and upper-right corners of the bounding square
    pub fn bounding_square(&self) -> (DVec2, DVec2) {
        let r = DVec2::splat(self.radius);
        (self.center - r, self.center + r)
    }
}

/// Where a dart landed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Throw {
    pub point: DVec2,
    pub inside: bool,
}

/// A circle on its bounding square
#[derive(Debug, Clone)]
pub struct Dartboard {
    circle: Circle,
    /// Segments used to draw the circle
    pub resolution: u32,
}

impl Default for Dartboard {
    fn default() -> Self {
        Self::new(Circle::unit())
    }
}

impl Dartboard {
    pub fn new(circle: Circle) -> Self {
        Self {
            circle,
            resolution: crate::consts::CIRCLE_RESOLUTION,
        }
    }

    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let mut board = Self::new(Circle::new(DVec2::ZERO, settings.circle_radius)?);
        board.resolution = settings.circle_resolution;
        Ok(board)
    }

    pub fn circle(&self) -> &Circle {
        &self.circle
    }

    /// Change the circle radius, keeping its center
    pub fn set_radius(&mut self, radius: f64) -> Result<()> {
        self.circle = Circle::new(self.circle.center, radius)?;
        Ok(())
    }

    /// Fit the surface to the board and draw the outline, axes and circle
    pub fn set_up<S: Surface>(&self, surface: &mut S) {
        let (lower_left, upper_right) = self.circle.bounding_square();
        let center = self.circle.center;
        let width = upper_right.x - lower_left.x;

        surface.set_world_bounds(lower_left, upper_right);
        surface.set_color(Color::Black);

        surface.polyline(&shapes::square(
            DVec2::new(lower_left.x, upper_right.y),
            width,
        ));
        surface.polyline(&[
            DVec2::new(lower_left.x, center.y),
            DVec2::new(upper_right.x, center.y),
        ]);
        surface.polyline(&[
            DVec2::new(center.x, upper_right.y),
            DVec2::new(center.x, lower_left.y),
        ]);
        surface.polyline(&shapes::circle(center, self.circle.radius, self.resolution));
    }

    /// Throw one dart: x then y uniformly over the bounding square
    ///
    /// The dart is stamped blue when inside and red when outside. The
    /// classification comes from the sampled point, never from the surface.
    pub fn throw_dart<S, R>(&self, surface: &mut S, rng: &mut R) -> Throw
    where
        S: Surface,
        R: RandomSource,
    {
        let (lower_left, upper_right) = self.circle.bounding_square();
        let x = rng.uniform(lower_left.x, upper_right.x);
        let y = rng.uniform(lower_left.y, upper_right.y);
        let point = DVec2::new(x, y);
        let inside = self.circle.contains(point);

        surface.move_to(point);
        surface.set_color(if inside { Color::Blue } else { Color::Red });
        surface.stamp();
        surface.set_color(Color::Black);

        Throw { point, inside }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{Canvas, DrawCommand, NullSurface};
    use crate::sim::{ScriptedSource, SeededSource};

    #[test]
    fn test_rim_point_is_inside() {
        let circle = Circle::unit();
        assert!(circle.contains(DVec2::new(1.0, 0.0)));
        assert!(circle.contains(DVec2::new(0.0, -1.0)));
        assert!(circle.contains(DVec2::new(0.6, 0.8)));
        assert!(!circle.contains(DVec2::new(1.0 + 1e-12, 0.0)));
    }

    #[test]
    fn test_offset_circle_contains() {
        let circle = Circle::new(DVec2::new(5.0, 5.0), 2.0).unwrap();
        assert!(circle.contains(DVec2::new(7.0, 5.0)));
        assert!(!circle.contains(DVec2::ZERO));
        assert_eq!(
            circle.bounding_square(),
            (DVec2::new(3.0, 3.0), DVec2::new(7.0, 7.0))
        );
    }

    #[test]
    fn test_invalid_radius_rejected() {
        for r in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                Circle::new(DVec2::ZERO, r),
                Err(DartsError::InvalidRadius(_))
            ));
        }
        let mut board = Dartboard::default();
        assert!(board.set_radius(0.0).is_err());
        assert_eq!(board.circle().radius, 1.0);
        board.set_radius(3.0).unwrap();
        assert_eq!(board.circle().radius, 3.0);
    }

    #[test]
    fn test_throw_stamps_by_outcome() {
        let board = Dartboard::default();
        let mut canvas = Canvas::default();
        let mut rng = ScriptedSource::points(&[(0.1, 0.1), (0.9, 0.9)]);

        let first = board.throw_dart(&mut canvas, &mut rng);
        let second = board.throw_dart(&mut canvas, &mut rng);

        assert!(first.inside);
        assert!(!second.inside);
        assert_eq!(
            canvas.commands,
            vec![
                DrawCommand::Stamp {
                    at: DVec2::new(0.1, 0.1),
                    color: Color::Blue,
                },
                DrawCommand::Stamp {
                    at: DVec2::new(0.9, 0.9),
                    color: Color::Red,
                },
            ]
        );
        assert_eq!(canvas.pen().color, Color::Black);
    }

    #[test]
    fn test_throws_land_on_board() {
        let board = Dartboard::new(Circle::new(DVec2::new(1.0, -2.0), 0.5).unwrap());
        let mut surface = NullSurface::new();
        let mut rng = SeededSource::new(3);
        for _ in 0..1000 {
            let throw = board.throw_dart(&mut surface, &mut rng);
            assert!((0.5..=1.5).contains(&throw.point.x));
            assert!((-2.5..=-1.5).contains(&throw.point.y));
            assert_eq!(throw.inside, board.circle().contains(throw.point));
        }
    }

    #[test]
    fn test_set_up_draws_board() {
        let mut board = Dartboard::default();
        board.resolution = 100;
        let mut canvas = Canvas::new(DVec2::ZERO, DVec2::ONE);
        board.set_up(&mut canvas);

        assert_eq!(canvas.lower_left, DVec2::splat(-1.0));
        assert_eq!(canvas.upper_right, DVec2::splat(1.0));
        // 4 square sides + 2 axes + 100 circle segments
        assert_eq!(canvas.lines(), 106);
        assert_eq!(canvas.stamps(Color::Blue) + canvas.stamps(Color::Red), 0);
    }
}
