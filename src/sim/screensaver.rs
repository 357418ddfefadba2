//! Bouncing-ball screensaver
//!
//! A point travels in fixed-length steps inside a rectangle, reflecting off
//! walls and reversing at corners, until a wall-clock deadline passes.

use std::time::Duration;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::clock::Clock;
use super::collision::{BoundHit, Bounds, reflect_heading};
use super::random::RandomSource;
use crate::renderer::{Color, Surface};
use crate::settings::ScreensaverSettings;
use crate::{bearing, heading_vector, normalize_degrees};

/// Counters for a finished run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScreensaverReport {
    pub steps: u64,
    /// Single-wall reflections
    pub bounces: u64,
    pub corner_hits: u64,
}

/// Ink for the ball's trail
pub const TRAIL_COLOR: Color = Color::Green;

#[derive(Debug, Clone)]
pub struct Screensaver {
    pub bounds: Bounds,
    /// Distance per step
    pub step_length: f64,
    pub frame_delay: Duration,
    pub position: DVec2,
    /// Degrees, 0 = east, counter-clockwise
    pub heading: f64,
    report: ScreensaverReport,
}

impl Screensaver {
    /// Start at the origin with the given heading
    pub fn new(bounds: Bounds, step_length: f64, heading: f64) -> Self {
        Self {
            bounds,
            step_length,
            frame_delay: Duration::ZERO,
            position: DVec2::ZERO,
            heading: normalize_degrees(heading),
            report: ScreensaverReport::default(),
        }
    }

    /// Start at the origin with a random heading in [0, 360)
    pub fn from_settings<R: RandomSource>(settings: &ScreensaverSettings, rng: &mut R) -> Self {
        let heading = rng.uniform(0.0, 360.0);
        let mut saver = Self::new(settings.bounds(), settings.step, heading);
        saver.frame_delay = Duration::from_millis(settings.frame_delay_ms);
        saver
    }

    pub fn report(&self) -> ScreensaverReport {
        self.report
    }

    /// Advance one step, drawing the segment and reflecting if a wall was reached
    pub fn step<S: Surface>(&mut self, surface: &mut S) -> BoundHit {
        let previous = self.position;
        let next = previous + heading_vector(self.heading) * self.step_length;

        surface.move_to(previous);
        surface.set_color(TRAIL_COLOR);
        surface.line_to(next);
        self.position = next;

        let forward = normalize_degrees(bearing(next, previous) + 180.0);
        let hit = self.bounds.classify(next);
        self.heading = reflect_heading(forward, hit);
        surface.set_heading(self.heading);

        self.report.steps += 1;
        if hit.is_corner() {
            self.report.corner_hits += 1;
            log::debug!("Corner {:?} at {:?}, heading {:.1}", hit, next, self.heading);
        } else if hit != BoundHit::None {
            self.report.bounces += 1;
            log::debug!("Bounce {:?} at {:?}, heading {:.1}", hit, next, self.heading);
        }

        hit
    }

    /// Run until `duration_secs` whole seconds have elapsed on `clock`
    ///
    /// The deadline is fixed at start and re-checked before every step.
    pub fn run<S, C>(&mut self, surface: &mut S, clock: &mut C, duration_secs: u64) -> ScreensaverReport
    where
        S: Surface,
        C: Clock,
    {
        let start = clock.now_secs();
        let deadline = start.saturating_add(duration_secs);
        log::info!(
            "Screensaver for {}s in {}x{} bounds, heading {:.1}",
            duration_secs,
            self.bounds.width,
            self.bounds.height,
            self.heading
        );

        surface.move_to(self.position);
        surface.set_heading(self.heading);
        while clock.now_secs() < deadline {
            self.step(surface);
            clock.pause(self.frame_delay);
        }

        log::info!(
            "Screensaver done: {} steps, {} bounces, {} corners",
            self.report.steps,
            self.report.bounces,
            self.report.corner_hits
        );
        self.report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{Canvas, DrawCommand, NullSurface};
    use crate::sim::{ManualClock, SeededSource};
    use proptest::prelude::*;

    #[test]
    fn test_straight_step_keeps_heading() {
        let mut saver = Screensaver::new(Bounds::new(100.0, 100.0), 10.0, 0.0);
        let hit = saver.step(&mut NullSurface::new());
        assert_eq!(hit, BoundHit::None);
        assert!((saver.position - DVec2::new(10.0, 0.0)).length() < 1e-9);
        assert!(saver.heading.abs() < 1e-9 || (saver.heading - 360.0).abs() < 1e-9);
    }

    #[test]
    fn test_right_wall_bounce() {
        let mut saver = Screensaver::new(Bounds::new(100.0, 100.0), 10.0, 30.0);
        saver.position = DVec2::new(45.0, 0.0);
        let hit = saver.step(&mut NullSurface::new());

        assert_eq!(hit, BoundHit::Right);
        assert!((saver.heading - 150.0).abs() < 1e-9);
        assert_eq!(saver.report().bounces, 1);
    }

    #[test]
    fn test_corner_reverses() {
        let mut saver = Screensaver::new(Bounds::new(100.0, 100.0), 10.0, 45.0);
        saver.position = DVec2::new(46.0, 46.0);
        let hit = saver.step(&mut NullSurface::new());
        assert_eq!(hit, BoundHit::TopRight);
        assert!((saver.heading - 225.0).abs() < 1e-9);

        // Next step retraces the way back in
        saver.step(&mut NullSurface::new());
        assert!((saver.position - DVec2::new(46.0, 46.0)).length() < 1e-9);
        assert_eq!(saver.report().corner_hits, 1);
    }

    #[test]
    fn test_run_stops_at_deadline() {
        let mut saver = Screensaver::new(Bounds::new(100.0, 60.0), 7.0, 20.0);
        saver.frame_delay = Duration::from_millis(100);
        let mut clock = ManualClock::starting_at(1_000);
        let mut canvas = Canvas::default();

        let report = saver.run(&mut canvas, &mut clock, 2);

        assert_eq!(report.steps, 20);
        assert_eq!(canvas.lines(), 20);
        assert_eq!(clock.now_secs(), 1_002);
    }

    #[test]
    fn test_zero_frame_delay_reaches_deadline() {
        let mut saver = Screensaver::new(Bounds::new(100.0, 100.0), 5.0, 30.0);
        assert_eq!(saver.frame_delay, Duration::ZERO);

        let mut clock = ManualClock::new();
        let report = saver.run(&mut NullSurface::new(), &mut clock, 1);

        // One minimum tick per step
        assert_eq!(report.steps, 1000);
        assert_eq!(clock.now_secs(), 1);
    }

    #[test]
    fn test_trail_is_drawn_in_trail_color() {
        let mut saver = Screensaver::new(Bounds::new(100.0, 100.0), 10.0, 30.0);
        let mut canvas = Canvas::default();
        canvas.set_color(Color::Red);
        for _ in 0..10 {
            saver.step(&mut canvas);
        }

        assert_eq!(canvas.lines(), 10);
        assert!(canvas.commands.iter().all(|c| matches!(
            c,
            DrawCommand::Line { color: Color::Green, .. }
        )));
    }

    #[test]
    fn test_zero_duration_does_nothing() {
        let mut saver = Screensaver::new(Bounds::new(100.0, 60.0), 7.0, 20.0);
        let report = saver.run(&mut NullSurface::new(), &mut ManualClock::new(), 0);
        assert_eq!(report, ScreensaverReport::default());
    }

    #[test]
    fn test_long_run_stays_near_bounds() {
        let settings = ScreensaverSettings {
            width: 300.0,
            height: 200.0,
            step: 9.0,
            frame_delay_ms: 5,
        };
        let mut saver = Screensaver::from_settings(&settings, &mut SeededSource::new(42));
        let report = saver.run(&mut NullSurface::new(), &mut ManualClock::new(), 10);

        assert_eq!(report.steps, 2000);
        assert!(report.bounces + report.corner_hits > 0);
        let half = saver.bounds.half_extents();
        // A ball may overshoot a wall by at most one step before turning back
        assert!(saver.position.x.abs() < half.x + settings.step);
        assert!(saver.position.y.abs() < half.y + settings.step);
    }

    proptest! {
        #[test]
        fn prop_single_wall_reflection_returns_inside(
            wall in 0usize..4,
            tilt in -80.0f64..80.0,
            frac in 0.01f64..1.0,
            along in -20.0f64..20.0,
        ) {
            let step = 15.0;
            let half = 50.0;
            // Head toward one wall (right, top, left, bottom), tilted off its normal,
            // starting close enough that this step reaches it
            let heading = [0.0, 90.0, 180.0, 270.0][wall] + tilt;
            let reach = step * tilt.to_radians().cos();
            let depth = half - frac * reach;
            let start = match wall {
                0 => DVec2::new(depth, along),
                1 => DVec2::new(along, depth),
                2 => DVec2::new(-depth, along),
                _ => DVec2::new(along, -depth),
            };

            let mut saver = Screensaver::new(Bounds::new(2.0 * half, 2.0 * half), step, heading);
            saver.position = start;
            prop_assert!(saver.bounds.contains(start));

            let hit = saver.step(&mut NullSurface::new());
            prop_assert!(hit != BoundHit::None && !hit.is_corner(), "hit {:?}", hit);

            saver.step(&mut NullSurface::new());
            prop_assert!(saver.bounds.contains(saver.position), "escaped to {:?}", saver.position);
        }
    }
}
