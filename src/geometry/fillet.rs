//! Tangent-arc corner rounding.
//!
//! Given a corner and one point on each of its two edges, the fillet circle
//! of radius `r` touches both edges on the inside of the turn. With `θ` the
//! interior angle at the corner, the tangency points sit `r / tan(θ/2)` from
//! the corner and the center sits on the bisector `r / sin(θ/2)` away.
//! This is the arc-to-point primitive drawing APIs offer, written out.

use crate::path::Arc;
use crate::types::{Angle, Point};

/// Below this `tan(θ/2)` the edges fold back on themselves.
const MIN_TAN_HALF: f64 = 1e-12;

/// Result of rounding one corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Fillet {
    /// No arc fits: zero radius, a zero-length edge, or collinear edges.
    Sharp(Point),
    /// Straight edge up to `tangent_in`, then `arc` to the outgoing edge.
    Round { tangent_in: Point, arc: Arc },
}

impl Fillet {
    /// Where the incoming edge stops.
    pub fn tangent_in(&self) -> Point {
        match self {
            Fillet::Sharp(corner) => *corner,
            Fillet::Round { tangent_in, .. } => *tangent_in,
        }
    }

    /// Where the outgoing edge resumes.
    pub fn tangent_out(&self) -> Point {
        match self {
            Fillet::Sharp(corner) => *corner,
            Fillet::Round { arc, .. } => arc.end_point(),
        }
    }

    pub fn arc(&self) -> Option<&Arc> {
        match self {
            Fillet::Sharp(_) => None,
            Fillet::Round { arc, .. } => Some(arc),
        }
    }
}

/// Round the corner at `corner` between the edges `from → corner` and
/// `corner → to`.
///
/// Large radii are not limited to the edge lengths: the tangency points may
/// fall past the far end of an edge, and neighbouring fillets then overlap.
pub fn fillet_corner(from: Point, corner: Point, to: Point, radius: f64) -> Fillet {
    if !(radius > 0.0) || !radius.is_finite() {
        return Fillet::Sharp(corner);
    }

    let (Some(to_prev), Some(to_next)) = (
        (from - corner).try_normalize(),
        (to - corner).try_normalize(),
    ) else {
        return Fillet::Sharp(corner);
    };

    let Some(bisector) = (to_prev + to_next).try_normalize() else {
        // Straight through: nothing to round.
        return Fillet::Sharp(corner);
    };

    let half = to_prev.dot(to_next).clamp(-1.0, 1.0).acos() / 2.0;
    let tan_half = half.tan();
    if !tan_half.is_finite() || tan_half < MIN_TAN_HALF {
        return Fillet::Sharp(corner);
    }

    let tangent_distance = radius / tan_half;
    let tangent_in = corner + to_prev * tangent_distance;
    let tangent_out = corner + to_next * tangent_distance;
    let center = corner + bisector * (radius / half.sin());

    // A right turn on a Y-down surface sweeps toward increasing angles.
    let clockwise = (corner - from).perp_dot(to - corner) > 0.0;

    Fillet::Round {
        tangent_in,
        arc: Arc {
            center,
            radius,
            start_angle: Angle::of(tangent_in - center),
            end_angle: Angle::of(tangent_out - center),
            clockwise,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec2;
    use std::f64::consts::FRAC_PI_2;

    fn close(a: Point, b: Point) -> bool {
        a.distance(b) < 1e-9
    }

    #[test]
    fn right_angle_corner() {
        // Along the top edge, turning down the right edge.
        let fillet = fillet_corner(dvec2(0.0, 0.0), dvec2(10.0, 0.0), dvec2(10.0, 10.0), 2.0);
        let Fillet::Round { tangent_in, arc } = fillet else {
            panic!("expected an arc, got {fillet:?}");
        };
        assert!(close(tangent_in, dvec2(8.0, 0.0)));
        assert!(close(arc.end_point(), dvec2(10.0, 2.0)));
        assert!(close(arc.center, dvec2(8.0, 2.0)));
        assert!(arc.clockwise);
        assert!((arc.sweep() - FRAC_PI_2).abs() < 1e-9);
    }

    #[test]
    fn left_turn_is_counter_clockwise() {
        let fillet = fillet_corner(dvec2(0.0, 0.0), dvec2(10.0, 0.0), dvec2(10.0, -10.0), 2.0);
        let arc = fillet.arc().copied().unwrap();
        assert!(!arc.clockwise);
        assert!(close(arc.center, dvec2(8.0, -2.0)));
        assert!((arc.sweep() + FRAC_PI_2).abs() < 1e-9);
    }

    #[test]
    fn arc_is_tangent_to_both_edges() {
        let from = dvec2(-3.0, 7.0);
        let corner = dvec2(2.0, 1.0);
        let to = dvec2(9.0, 5.0);
        let fillet = fillet_corner(from, corner, to, 1.5);
        let arc = *fillet.arc().unwrap();

        assert!(close(arc.start_point(), fillet.tangent_in()));
        // Radius is perpendicular to each edge at its tangency point.
        let r_in = fillet.tangent_in() - arc.center;
        let r_out = fillet.tangent_out() - arc.center;
        assert!(r_in.dot(corner - from).abs() < 1e-9);
        assert!(r_out.dot(to - corner).abs() < 1e-9);
        assert!((r_in.length() - 1.5).abs() < 1e-9);
        assert!((r_out.length() - 1.5).abs() < 1e-9);
    }

    #[test]
    fn sweep_equals_exterior_angle() {
        let from = dvec2(0.0, 0.0);
        let corner = dvec2(10.0, 0.0);
        let to = dvec2(20.0, 10.0);
        let arc = *fillet_corner(from, corner, to, 3.0).arc().unwrap();
        assert!((arc.sweep() - FRAC_PI_2 / 2.0).abs() < 1e-9);
    }

    #[test]
    fn degenerate_inputs_stay_sharp() {
        let corner = dvec2(5.0, 5.0);
        assert_eq!(
            fillet_corner(dvec2(0.0, 5.0), corner, dvec2(5.0, 10.0), 0.0),
            Fillet::Sharp(corner)
        );
        assert_eq!(
            fillet_corner(corner, corner, dvec2(5.0, 10.0), 1.0),
            Fillet::Sharp(corner)
        );
        assert_eq!(
            fillet_corner(dvec2(0.0, 5.0), corner, dvec2(10.0, 5.0), 1.0),
            Fillet::Sharp(corner)
        );
        assert_eq!(
            fillet_corner(dvec2(0.0, 5.0), corner, dvec2(0.0, 5.0), 1.0),
            Fillet::Sharp(corner)
        );
        assert_eq!(
            fillet_corner(dvec2(0.0, 5.0), corner, dvec2(5.0, 10.0), f64::NAN),
            Fillet::Sharp(corner)
        );
    }

    #[test]
    fn oversized_radius_overshoots_edges() {
        let fillet = fillet_corner(dvec2(0.0, 0.0), dvec2(2.0, 0.0), dvec2(2.0, 2.0), 5.0);
        // Tangency lands 5 units back, past the start of a 2 unit edge.
        assert!(close(fillet.tangent_in(), dvec2(-3.0, 0.0)));
        assert!(close(fillet.tangent_out(), dvec2(2.0, 5.0)));
    }
}
