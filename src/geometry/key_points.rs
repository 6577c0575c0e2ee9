//! The seven anchor points of a bubble outline.
//!
//! Points 0..=2 are the arrow (begin, tip, end) and 3..=6 the corners of the
//! body rectangle, all in clockwise order on a Y-down surface. The body is the
//! bounding box minus `arrow_height` on the pointed side, so the tip lands on
//! the bounding box edge.

use glam::{DVec2, dvec2};

use crate::config::{ArrowDirection, BubbleConfig};
use crate::errors::BubbleError;
use crate::log::debug;
use crate::types::{Point, Size};

/// Number of key points in every bubble.
pub const KEY_POINT_COUNT: usize = 7;

/// Index of the first rectangle corner in [`KeyPoints`].
pub const FIRST_CORNER: usize = 3;

/// Corners of the body rectangle, in clockwise order starting bottom-right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    BottomRight,
    BottomLeft,
    TopLeft,
    TopRight,
}

impl Corner {
    /// Next corner clockwise.
    pub const fn next(self) -> Corner {
        match self {
            Corner::BottomRight => Corner::BottomLeft,
            Corner::BottomLeft => Corner::TopLeft,
            Corner::TopLeft => Corner::TopRight,
            Corner::TopRight => Corner::BottomRight,
        }
    }
}

/// Axis-aligned body rectangle that receives the four rounded corners.
#[derive(Debug, Clone, Copy, PartialEq)]
struct BodyRect {
    origin: DVec2,
    size: DVec2,
}

impl BodyRect {
    fn corner(&self, corner: Corner) -> Point {
        let min = self.origin;
        let max = self.origin + self.size;
        match corner {
            Corner::BottomRight => dvec2(max.x, max.y),
            Corner::BottomLeft => dvec2(min.x, max.y),
            Corner::TopLeft => dvec2(min.x, min.y),
            Corner::TopRight => dvec2(max.x, min.y),
        }
    }
}

/// A vertex whose fillet radius is more than half of an adjacent edge.
///
/// Such fillets overlap their neighbors. The path is still produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Degeneracy {
    pub index: usize,
    pub radius: f64,
    /// Length of the shorter adjacent edge
    pub edge_length: f64,
}

/// Ordered, cyclic sequence of the seven bubble anchor points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyPoints([Point; KEY_POINT_COUNT]);

impl KeyPoints {
    pub const fn from_array(points: [Point; KEY_POINT_COUNT]) -> Self {
        KeyPoints(points)
    }

    pub fn arrow_begin(&self) -> Point {
        self.0[0]
    }

    pub fn arrow_tip(&self) -> Point {
        self.0[1]
    }

    pub fn arrow_end(&self) -> Point {
        self.0[2]
    }

    /// The four rectangle corners, in the order they appear in the outline.
    pub fn corners(&self) -> [Point; 4] {
        [self.0[3], self.0[4], self.0[5], self.0[6]]
    }

    pub fn get(&self, index: usize) -> Option<Point> {
        self.0.get(index).copied()
    }

    pub fn as_slice(&self) -> &[Point] {
        &self.0
    }

    pub fn to_array(self) -> [Point; KEY_POINT_COUNT] {
        self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.0.iter().copied()
    }

    /// Cyclic successor of `index`.
    pub const fn next(index: usize) -> usize {
        (index + 1) % KEY_POINT_COUNT
    }

    /// Cyclic predecessor of `index`.
    pub const fn prev(index: usize) -> usize {
        (index + KEY_POINT_COUNT - 1) % KEY_POINT_COUNT
    }

    /// Shoelace area of the key point polygon. Positive means clockwise on a
    /// Y-down surface.
    pub fn signed_area(&self) -> f64 {
        let twice: f64 = (0..KEY_POINT_COUNT)
            .map(|i| self.0[i].perp_dot(self.0[Self::next(i)]))
            .sum();
        twice / 2.0
    }

    pub fn is_clockwise(&self) -> bool {
        self.signed_area() > 0.0
    }

    /// Vertices whose fillet radius exceeds half of either adjacent edge.
    pub fn degeneracies(&self, config: &BubbleConfig) -> Vec<Degeneracy> {
        (0..KEY_POINT_COUNT)
            .filter_map(|index| {
                let here = self.0[index];
                let incoming = here.distance(self.0[Self::prev(index)]);
                let outgoing = here.distance(self.0[Self::next(index)]);
                let edge_length = incoming.min(outgoing);
                let radius = config.radius_at(index);
                (radius > edge_length / 2.0).then_some(Degeneracy {
                    index,
                    radius,
                    edge_length,
                })
            })
            .collect()
    }
}

impl std::ops::Index<usize> for KeyPoints {
    type Output = Point;

    fn index(&self, index: usize) -> &Point {
        &self.0[index]
    }
}

/// Validate `size` and `config`, then place the seven key points.
pub fn compute_key_points(size: Size, config: &BubbleConfig) -> Result<KeyPoints, BubbleError> {
    config.validate(size)?;
    let position = config.effective_arrow_position()?;
    let points = place(size, config, position);

    debug!(
        %size,
        direction = %config.arrow_direction,
        position,
        points = ?points.as_slice(),
        "computed key points"
    );
    #[cfg(feature = "tracing")]
    for d in points.degeneracies(config) {
        debug!(
            index = d.index,
            radius = d.radius,
            edge_length = d.edge_length,
            "fillet radius overlaps adjacent edge"
        );
    }

    Ok(points)
}

/// Place the key points without validation.
///
/// `arrow_position` is used verbatim. Invalid input produces garbage points
/// rather than an error.
pub fn compute_key_points_unchecked(size: Size, config: &BubbleConfig) -> KeyPoints {
    place(size, config, config.arrow_position)
}

fn place(size: Size, config: &BubbleConfig, position: f64) -> KeyPoints {
    let Size { width, height } = size;
    let ah = config.arrow_height;
    let aw = config.arrow_width;

    // Travel range of the tip along the pointed edge.
    let x_range = width - 2.0 * config.corner_radius - aw;
    let y_range = height - 2.0 * config.corner_radius - aw;
    let offset = position - 0.5;

    let mut body = BodyRect {
        origin: DVec2::ZERO,
        size: size.to_vec2(),
    };

    let (begin, tip, end) = match config.arrow_direction {
        ArrowDirection::Right => {
            let tip = dvec2(width, height / 2.0 + y_range * offset);
            let begin = dvec2(tip.x - ah, tip.y - aw / 2.0);
            let end = dvec2(begin.x, begin.y + aw);
            body.size.x -= ah;
            (begin, tip, end)
        }
        ArrowDirection::Bottom => {
            let tip = dvec2(width / 2.0 + x_range * offset, height);
            let begin = dvec2(tip.x + aw / 2.0, tip.y - ah);
            let end = dvec2(begin.x - aw, begin.y);
            body.size.y -= ah;
            (begin, tip, end)
        }
        ArrowDirection::Left => {
            let tip = dvec2(0.0, height / 2.0 + y_range * offset);
            let begin = dvec2(tip.x + ah, tip.y + aw / 2.0);
            let end = dvec2(begin.x, begin.y - aw);
            body.origin.x = ah;
            body.size.x -= ah;
            (begin, tip, end)
        }
        ArrowDirection::Top => {
            let tip = dvec2(width / 2.0 + x_range * offset, 0.0);
            let begin = dvec2(tip.x - aw / 2.0, tip.y + ah);
            let end = dvec2(begin.x + aw, begin.y);
            body.origin.y = ah;
            body.size.y -= ah;
            (begin, tip, end)
        }
    };

    let mut points = [DVec2::ZERO; KEY_POINT_COUNT];
    points[0] = begin;
    points[1] = tip;
    points[2] = end;

    let mut corner = config.arrow_direction.start_corner();
    for slot in &mut points[FIRST_CORNER..] {
        *slot = body.corner(corner);
        corner = corner.next();
    }

    KeyPoints(points)
}
