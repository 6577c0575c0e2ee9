//! Default shape parameters (in the same units as the bubble size)

use crate::config::{ArrowDirection, OutOfRangePolicy};

pub const CORNER_RADIUS: f64 = 4.0;
pub const ARROW_RADIUS: f64 = 4.0;
pub const ARROW_HEIGHT: f64 = 4.0;
pub const ARROW_WIDTH: f64 = 4.0;
pub const ARROW_DIRECTION: ArrowDirection = ArrowDirection::Bottom;
/// Centered on the pointed edge.
pub const ARROW_POSITION: f64 = 0.5;
pub const POSITION_POLICY: OutOfRangePolicy = OutOfRangePolicy::Clamp;

/// Significant digits used when writing SVG path data.
pub const SVG_PRECISION: i32 = 6;
/// Maximum distance between an arc and its flattened chords.
pub const FLATTEN_TOLERANCE: f64 = 0.1;
