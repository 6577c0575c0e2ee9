//! Path builder for bubble outlines.
//!
//! [`PathBuilder`] tracks a pen position the way a drawing context does:
//! every command starts at the cursor and leaves it at its end point.
//! [`build_path`] threads the seven key points through it, rounding each one
//! with [`fillet_to`](PathBuilder::fillet_to).

use crate::config::BubbleConfig;
use crate::log::trace;
use crate::path::{Arc, Path, PathCommand};
use crate::types::Point;

use super::fillet::{Fillet, fillet_corner};
use super::key_points::{KEY_POINT_COUNT, KeyPoints};

/// Incremental builder for a single closed contour.
///
/// # Example
///
/// ```
/// use bubbler::PathBuilder;
/// use glam::dvec2;
///
/// let mut builder = PathBuilder::new(dvec2(0.0, 0.0));
/// builder.fillet_to(dvec2(10.0, 0.0), dvec2(10.0, 10.0), 2.0);
/// builder.line_to(dvec2(10.0, 10.0));
/// builder.close();
/// let path = builder.build();
/// assert!(path.is_closed());
/// ```
#[derive(Debug)]
pub struct PathBuilder {
    commands: Vec<PathCommand>,
    /// Start of the contour, where `close` returns to
    start: Point,
    /// Current pen position
    cursor: Point,
}

impl PathBuilder {
    /// Start a contour at `start`.
    pub fn new(start: Point) -> Self {
        Self {
            commands: vec![PathCommand::MoveTo(start)],
            start,
            cursor: start,
        }
    }

    pub fn cursor(&self) -> Point {
        self.cursor
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn line_to(&mut self, to: Point) {
        self.commands.push(PathCommand::LineTo(to));
        self.cursor = to;
    }

    /// Append an arc. The gap from the cursor to the arc start, if any, is an
    /// implied straight line.
    pub fn arc_to(&mut self, arc: Arc) {
        self.commands.push(PathCommand::ArcTo(arc));
        self.cursor = arc.end_point();
    }

    /// Round the corner `cursor → corner → next` with `radius`.
    ///
    /// Emits a line to the incoming tangency point and the arc up to the
    /// outgoing one, leaving the cursor there. A corner that cannot be
    /// rounded becomes a line to `corner`.
    pub fn fillet_to(&mut self, corner: Point, next: Point, radius: f64) -> Fillet {
        let fillet = fillet_corner(self.cursor, corner, next, radius);
        match fillet {
            Fillet::Sharp(point) => self.line_to(point),
            Fillet::Round { tangent_in, arc } => {
                self.line_to(tangent_in);
                self.arc_to(arc);
            }
        }
        fillet
    }

    pub fn close(&mut self) {
        self.commands.push(PathCommand::Close);
        self.cursor = self.start;
    }

    pub fn build(self) -> Path {
        Path::from_commands(self.commands)
    }
}

/// Round every key point and close the outline.
///
/// Arrow points use `arrow_radius`, rectangle corners `corner_radius`. The
/// cursor starts on the last corner, so the first fillet bends from the edge
/// ending there into the arrow. The contour closes back on that corner.
pub fn build_path(points: &KeyPoints, config: &BubbleConfig) -> Path {
    let mut builder = PathBuilder::new(points[KEY_POINT_COUNT - 1]);
    for index in 0..KEY_POINT_COUNT {
        let radius = config.radius_at(index);
        let _fillet = builder.fillet_to(points[index], points[KeyPoints::next(index)], radius);
        trace!(index, radius, fillet = ?_fillet, "filleted key point");
    }
    builder.close();
    builder.build()
}
