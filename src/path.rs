//! Closed outline made of straight and circular segments.
//!
//! A [`Path`] is a flat list of draw commands. It is built once per geometry
//! request and handed to the caller, who owns it outright.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use glam::DVec2;

use crate::types::{Angle, Point};

const EPSILON: f64 = 1e-9;

/// Circular arc around `center`.
///
/// Angles are measured from +X toward +Y. `clockwise` arcs sweep toward
/// increasing angles, which is visually clockwise on a Y-down surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    pub center: Point,
    pub radius: f64,
    pub start_angle: Angle,
    pub end_angle: Angle,
    pub clockwise: bool,
}

impl Arc {
    pub fn point_at(&self, angle: Angle) -> Point {
        self.center + angle.unit() * self.radius
    }

    pub fn start_point(&self) -> Point {
        self.point_at(self.start_angle)
    }

    pub fn end_point(&self) -> Point {
        self.point_at(self.end_angle)
    }

    /// Signed sweep in radians, positive when clockwise.
    ///
    /// Always within one full turn, with the sign given by `clockwise`.
    pub fn sweep(&self) -> f64 {
        let mut delta = (self.end_angle - self.start_angle).raw() % TAU;
        if self.clockwise && delta < 0.0 {
            delta += TAU;
        } else if !self.clockwise && delta > 0.0 {
            delta -= TAU;
        }
        delta
    }

    pub fn length(&self) -> f64 {
        self.sweep().abs() * self.radius
    }

    /// Heading of travel at the start of the arc.
    pub fn start_heading(&self) -> Angle {
        self.heading_at(self.start_angle)
    }

    /// Heading of travel at the end of the arc.
    pub fn end_heading(&self) -> Angle {
        self.heading_at(self.end_angle)
    }

    fn heading_at(&self, angle: Angle) -> Angle {
        let quarter = if self.clockwise { FRAC_PI_2 } else { -FRAC_PI_2 };
        (angle + Angle(quarter)).normalized()
    }

    /// True when `angle` is passed while sweeping from start to end.
    pub fn contains_angle(&self, angle: Angle) -> bool {
        let sweep = self.sweep();
        let mut offset = (angle - self.start_angle).raw() % TAU;
        if sweep >= 0.0 {
            if offset < 0.0 {
                offset += TAU;
            }
            offset <= sweep
        } else {
            if offset > 0.0 {
                offset -= TAU;
            }
            offset >= sweep
        }
    }

    fn translated(self, offset: DVec2) -> Arc {
        Arc {
            center: self.center + offset,
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    /// Arc; a gap between the current point and its start is an implied line.
    ArcTo(Arc),
    Close,
}

/// An ordered list of commands forming one closed contour.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    pub fn from_commands(commands: Vec<PathCommand>) -> Self {
        Path { commands }
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<PathCommand> {
        self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Point of the leading `MoveTo`, if any.
    pub fn start(&self) -> Option<Point> {
        match self.commands.first() {
            Some(PathCommand::MoveTo(p)) => Some(*p),
            _ => None,
        }
    }

    pub fn is_closed(&self) -> bool {
        matches!(self.commands.last(), Some(PathCommand::Close))
    }

    pub fn arcs(&self) -> impl Iterator<Item = &Arc> + '_ {
        self.commands.iter().filter_map(|cmd| match cmd {
            PathCommand::ArcTo(arc) => Some(arc),
            _ => None,
        })
    }

    /// Total change of heading along the contour, in radians.
    ///
    /// Straight segments contribute their joints, arcs their sweep. A simple
    /// clockwise contour on a Y-down surface turns by `2π`.
    pub fn total_turning(&self) -> f64 {
        let mut tracker = TurnTracker::default();
        let mut start = DVec2::ZERO;
        let mut current = DVec2::ZERO;

        for cmd in &self.commands {
            match *cmd {
                PathCommand::MoveTo(p) => {
                    start = p;
                    current = p;
                }
                PathCommand::LineTo(p) => {
                    tracker.line(current, p);
                    current = p;
                }
                PathCommand::ArcTo(arc) => {
                    tracker.line(current, arc.start_point());
                    tracker.arc(&arc);
                    current = arc.end_point();
                }
                PathCommand::Close => {
                    tracker.line(current, start);
                    tracker.close();
                    current = start;
                }
            }
        }
        tracker.total
    }

    /// Axis-aligned bounds as `(min, max)`, including arc extremes.
    pub fn bounds(&self) -> Option<(Point, Point)> {
        let mut min = DVec2::splat(f64::INFINITY);
        let mut max = DVec2::splat(f64::NEG_INFINITY);
        let mut expand = |p: Point| {
            min = min.min(p);
            max = max.max(p);
        };

        for cmd in &self.commands {
            match cmd {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => expand(*p),
                PathCommand::ArcTo(arc) => {
                    expand(arc.start_point());
                    expand(arc.end_point());
                    for quarter in 0..4 {
                        let angle = Angle(quarter as f64 * FRAC_PI_2 - PI);
                        if arc.contains_angle(angle) {
                            expand(arc.point_at(angle));
                        }
                    }
                }
                PathCommand::Close => {}
            }
        }

        min.is_finite().then_some((min, max))
    }

    /// Approximate the contour with straight segments.
    ///
    /// Arcs are split so no chord strays more than `tolerance` from its
    /// arc. The closing point is not repeated.
    pub fn flatten(&self, tolerance: f64) -> Vec<Point> {
        let mut out: Vec<Point> = Vec::new();
        let push = |out: &mut Vec<Point>, p: Point| {
            if out.last().is_none_or(|last| last.distance(p) > EPSILON) {
                out.push(p);
            }
        };

        for cmd in &self.commands {
            match *cmd {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => push(&mut out, p),
                PathCommand::ArcTo(arc) => {
                    let sweep = arc.sweep();
                    let steps = arc_subdivisions(arc.radius, sweep, tolerance);
                    push(&mut out, arc.start_point());
                    for step in 1..=steps {
                        let t = step as f64 / steps as f64;
                        push(&mut out, arc.point_at(arc.start_angle + Angle(sweep * t)));
                    }
                }
                PathCommand::Close => {}
            }
        }

        if out.len() > 1 && out[0].distance(out[out.len() - 1]) <= EPSILON {
            out.pop();
        }
        out
    }

    /// Copy of this path moved by `offset`.
    pub fn translated(&self, offset: DVec2) -> Path {
        let commands = self
            .commands
            .iter()
            .map(|cmd| match *cmd {
                PathCommand::MoveTo(p) => PathCommand::MoveTo(p + offset),
                PathCommand::LineTo(p) => PathCommand::LineTo(p + offset),
                PathCommand::ArcTo(arc) => PathCommand::ArcTo(arc.translated(offset)),
                PathCommand::Close => PathCommand::Close,
            })
            .collect();
        Path { commands }
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a PathCommand;
    type IntoIter = std::slice::Iter<'a, PathCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}

/// Number of chords needed to keep within `tolerance` of an arc.
fn arc_subdivisions(radius: f64, sweep: f64, tolerance: f64) -> usize {
    if radius <= EPSILON || sweep.abs() <= EPSILON {
        return 1;
    }
    if tolerance <= 0.0 || tolerance >= radius {
        return 1usize.max((sweep.abs() / FRAC_PI_2).ceil() as usize);
    }
    let max_step = 2.0 * (1.0 - tolerance / radius).acos();
    1usize.max((sweep.abs() / max_step).ceil() as usize)
}

/// Accumulates heading changes while walking a path.
///
/// A full reversal has no preferred side. Successive reversals alternate
/// between `+π` and `-π`, so a segment that doubles back over itself adds
/// nothing.
#[derive(Debug, Default)]
struct TurnTracker {
    first: Option<Angle>,
    last: Option<Angle>,
    total: f64,
    reversals: usize,
}

impl TurnTracker {
    fn turn_to(&mut self, heading: Angle) {
        let Some(last) = self.last else {
            self.first = Some(heading);
            return;
        };
        let delta = (heading - last).normalized().raw();
        if (delta.abs() - PI).abs() <= EPSILON {
            self.total += if self.reversals % 2 == 0 { PI } else { -PI };
            self.reversals += 1;
        } else {
            self.total += delta;
        }
    }

    fn line(&mut self, from: Point, to: Point) {
        let delta = to - from;
        if delta.length() <= EPSILON {
            return;
        }
        let heading = Angle::of(delta);
        self.turn_to(heading);
        self.last = Some(heading);
    }

    fn arc(&mut self, arc: &Arc) {
        if arc.radius <= EPSILON {
            return;
        }
        self.turn_to(arc.start_heading());
        self.total += arc.sweep();
        self.last = Some(arc.end_heading());
    }

    fn close(&mut self) {
        if let Some(first) = self.first {
            self.turn_to(first);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec2;

    fn quarter(center: Point, start: f64, end: f64, clockwise: bool) -> Arc {
        Arc {
            center,
            radius: 1.0,
            start_angle: Angle(start),
            end_angle: Angle(end),
            clockwise,
        }
    }

    /// Unit square with rounded corners, traced clockwise (Y-down).
    fn rounded_square() -> Path {
        let r = 1.0;
        Path::from_commands(vec![
            PathCommand::MoveTo(dvec2(r, 0.0)),
            PathCommand::LineTo(dvec2(10.0 - r, 0.0)),
            PathCommand::ArcTo(quarter(dvec2(9.0, 1.0), -FRAC_PI_2, 0.0, true)),
            PathCommand::LineTo(dvec2(10.0, 10.0 - r)),
            PathCommand::ArcTo(quarter(dvec2(9.0, 9.0), 0.0, FRAC_PI_2, true)),
            PathCommand::LineTo(dvec2(r, 10.0)),
            PathCommand::ArcTo(quarter(dvec2(1.0, 9.0), FRAC_PI_2, PI, true)),
            PathCommand::LineTo(dvec2(0.0, r)),
            PathCommand::ArcTo(quarter(dvec2(1.0, 1.0), PI, 3.0 * FRAC_PI_2, true)),
            PathCommand::Close,
        ])
    }

    #[test]
    fn sweep_follows_direction_flag() {
        let cw = quarter(DVec2::ZERO, 0.0, FRAC_PI_2, true);
        assert!((cw.sweep() - FRAC_PI_2).abs() < 1e-12);
        let ccw = quarter(DVec2::ZERO, 0.0, FRAC_PI_2, false);
        assert!((ccw.sweep() + 3.0 * FRAC_PI_2).abs() < 1e-12);
        let wrap = quarter(DVec2::ZERO, 3.0, -3.0, true);
        assert!((wrap.sweep() - (TAU - 6.0)).abs() < 1e-12);
    }

    #[test]
    fn arc_endpoints() {
        let arc = quarter(dvec2(1.0, 1.0), 0.0, FRAC_PI_2, true);
        assert!(arc.start_point().distance(dvec2(2.0, 1.0)) < 1e-12);
        assert!(arc.end_point().distance(dvec2(1.0, 2.0)) < 1e-12);
    }

    #[test]
    fn rounded_square_turns_once() {
        let path = rounded_square();
        assert!(path.is_closed());
        assert!((path.total_turning() - TAU).abs() < 1e-9);
    }

    #[test]
    fn reversed_turning_is_negative() {
        let path = Path::from_commands(vec![
            PathCommand::MoveTo(dvec2(0.0, 0.0)),
            PathCommand::LineTo(dvec2(0.0, 10.0)),
            PathCommand::LineTo(dvec2(10.0, 10.0)),
            PathCommand::LineTo(dvec2(10.0, 0.0)),
            PathCommand::Close,
        ]);
        assert!((path.total_turning() + TAU).abs() < 1e-9);
    }

    #[test]
    fn closing_spike_adds_no_turning() {
        // Starts on the sharp corner and closes back onto it from the
        // last fillet, doubling back over the first edge.
        let mut commands = rounded_square().into_commands();
        commands[0] = PathCommand::MoveTo(dvec2(0.0, 0.0));
        let path = Path::from_commands(commands);
        assert!((path.total_turning() - TAU).abs() < 1e-9);
    }

    #[test]
    fn bounds_include_arc_extremes() {
        let path = Path::from_commands(vec![
            PathCommand::MoveTo(dvec2(1.0, 0.0)),
            PathCommand::ArcTo(quarter(DVec2::ZERO, 0.0, PI, true)),
            PathCommand::Close,
        ]);
        let (min, max) = path.bounds().unwrap();
        assert!(min.distance(dvec2(-1.0, 0.0)) < 1e-12);
        assert!(max.distance(dvec2(1.0, 1.0)) < 1e-12);
    }

    #[test]
    fn empty_path_has_no_bounds() {
        assert_eq!(Path::default().bounds(), None);
        assert_eq!(Path::default().start(), None);
    }

    #[test]
    fn flatten_stays_near_arcs() {
        let path = rounded_square();
        let points = path.flatten(0.01);
        assert!(points.len() > 8);
        for p in &points {
            assert!(p.x >= -1e-9 && p.x <= 10.0 + 1e-9);
            assert!(p.y >= -1e-9 && p.y <= 10.0 + 1e-9);
        }
        assert!(points[0].distance(points[points.len() - 1]) > 1e-9);
    }

    #[test]
    fn translated_moves_everything() {
        let path = rounded_square().translated(dvec2(5.0, -2.0));
        let (min, max) = path.bounds().unwrap();
        assert!(min.distance(dvec2(5.0, -2.0)) < 1e-9);
        assert!(max.distance(dvec2(15.0, 8.0)) < 1e-9);
        assert_eq!(path.start(), Some(dvec2(6.0, -2.0)));
    }

    #[test]
    fn subdivisions_grow_with_precision() {
        assert_eq!(arc_subdivisions(10.0, FRAC_PI_2, 20.0), 1);
        assert!(arc_subdivisions(10.0, FRAC_PI_2, 0.01) > arc_subdivisions(10.0, FRAC_PI_2, 0.5));
        assert_eq!(arc_subdivisions(0.0, FRAC_PI_2, 0.1), 1);
    }
}
