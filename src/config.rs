//! Bubble shape configuration.
//!
//! [`BubbleConfig`] is a plain `Copy` value. It is never mutated in place by
//! this crate: build a new one with the `with_*` setters when the shape
//! changes. Construction does no validation; [`BubbleConfig::validate`] runs
//! when geometry is requested.

use std::fmt;
use std::str::FromStr;

use crate::defaults;
use crate::errors::BubbleError;
use crate::geometry::key_points::Corner;
use crate::log::warn;
use crate::types::{Size, check_non_negative};

/// Edge of the bubble the arrow protrudes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArrowDirection {
    Right,
    Bottom,
    Left,
    Top,
}

/// Rectangle corner that follows the arrow when tracing the outline
/// clockwise.
///
/// Corners 3..=6 of the key points start here and continue clockwise, which
/// keeps the seven points a single clockwise contour for every direction.
pub const START_CORNER: [(ArrowDirection, Corner); 4] = [
    (ArrowDirection::Right, Corner::BottomRight),
    (ArrowDirection::Bottom, Corner::BottomLeft),
    (ArrowDirection::Left, Corner::TopLeft),
    (ArrowDirection::Top, Corner::TopRight),
];

impl ArrowDirection {
    /// All directions, in ordinal order.
    pub const ALL: [ArrowDirection; 4] = [
        ArrowDirection::Right,
        ArrowDirection::Bottom,
        ArrowDirection::Left,
        ArrowDirection::Top,
    ];

    /// Integer tag of this direction (`Right = 0` .. `Top = 3`).
    pub const fn ordinal(self) -> u8 {
        match self {
            ArrowDirection::Right => 0,
            ArrowDirection::Bottom => 1,
            ArrowDirection::Left => 2,
            ArrowDirection::Top => 3,
        }
    }

    pub const fn from_ordinal(ordinal: u8) -> Option<ArrowDirection> {
        match ordinal {
            0 => Some(ArrowDirection::Right),
            1 => Some(ArrowDirection::Bottom),
            2 => Some(ArrowDirection::Left),
            3 => Some(ArrowDirection::Top),
            _ => None,
        }
    }

    /// The first rectangle corner after the arrow, as listed in [`START_CORNER`].
    pub const fn start_corner(self) -> Corner {
        match self {
            ArrowDirection::Right => Corner::BottomRight,
            ArrowDirection::Bottom => Corner::BottomLeft,
            ArrowDirection::Left => Corner::TopLeft,
            ArrowDirection::Top => Corner::TopRight,
        }
    }

    /// The arrow tip travels along the Y axis (left and right edges).
    pub const fn is_vertical_edge(self) -> bool {
        matches!(self, ArrowDirection::Right | ArrowDirection::Left)
    }

    pub const fn name(self) -> &'static str {
        match self {
            ArrowDirection::Right => "right",
            ArrowDirection::Bottom => "bottom",
            ArrowDirection::Left => "left",
            ArrowDirection::Top => "top",
        }
    }
}

impl Default for ArrowDirection {
    fn default() -> Self {
        defaults::ARROW_DIRECTION
    }
}

impl fmt::Display for ArrowDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for an unrecognized direction name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown arrow direction {0:?} (expected right, bottom, left or top)")]
pub struct ParseDirectionError(pub String);

impl FromStr for ArrowDirection {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ArrowDirection::ALL
            .into_iter()
            .find(|dir| dir.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseDirectionError(s.to_string()))
    }
}

/// What to do with an `arrow_position` outside `0..=1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutOfRangePolicy {
    /// Clamp to the nearest end of the travel range.
    #[default]
    Clamp,
    /// Fail with [`BubbleError::PositionOutOfRange`].
    Reject,
    /// Use the value verbatim; the tip may leave the bounding box.
    Extrapolate,
}

/// Shape parameters of a speech bubble.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BubbleConfig {
    /// Fillet radius of the four rectangle corners
    pub corner_radius: f64,
    /// Fillet radius of the three arrow points
    pub arrow_radius: f64,
    /// Distance the tip protrudes from the rectangle
    pub arrow_height: f64,
    /// Width of the arrow base along its edge
    pub arrow_width: f64,
    pub arrow_direction: ArrowDirection,
    /// 0 = start of the edge, 1 = end, 0.5 = centered
    pub arrow_position: f64,
    pub position_policy: OutOfRangePolicy,
}

impl BubbleConfig {
    pub const DEFAULT: BubbleConfig = BubbleConfig {
        corner_radius: defaults::CORNER_RADIUS,
        arrow_radius: defaults::ARROW_RADIUS,
        arrow_height: defaults::ARROW_HEIGHT,
        arrow_width: defaults::ARROW_WIDTH,
        arrow_direction: defaults::ARROW_DIRECTION,
        arrow_position: defaults::ARROW_POSITION,
        position_policy: defaults::POSITION_POLICY,
    };

    pub const fn new() -> Self {
        Self::DEFAULT
    }

    pub const fn with_corner_radius(mut self, radius: f64) -> Self {
        self.corner_radius = radius;
        self
    }

    pub const fn with_arrow_radius(mut self, radius: f64) -> Self {
        self.arrow_radius = radius;
        self
    }

    pub const fn with_arrow_height(mut self, height: f64) -> Self {
        self.arrow_height = height;
        self
    }

    pub const fn with_arrow_width(mut self, width: f64) -> Self {
        self.arrow_width = width;
        self
    }

    pub const fn with_arrow_direction(mut self, direction: ArrowDirection) -> Self {
        self.arrow_direction = direction;
        self
    }

    pub const fn with_arrow_position(mut self, position: f64) -> Self {
        self.arrow_position = position;
        self
    }

    pub const fn with_position_policy(mut self, policy: OutOfRangePolicy) -> Self {
        self.position_policy = policy;
        self
    }

    /// Fillet radius used at key point `index` (arrow points first).
    pub fn radius_at(&self, index: usize) -> f64 {
        if index < 3 {
            self.arrow_radius
        } else {
            self.corner_radius
        }
    }

    /// Apply the position policy to `arrow_position`.
    pub fn effective_arrow_position(&self) -> Result<f64, BubbleError> {
        let position = self.arrow_position;
        if !position.is_finite() {
            return Err(BubbleError::PositionOutOfRange { position });
        }
        if (0.0..=1.0).contains(&position) {
            return Ok(position);
        }
        match self.position_policy {
            OutOfRangePolicy::Clamp => {
                let clamped = position.clamp(0.0, 1.0);
                warn!(position, clamped, "arrow position clamped");
                Ok(clamped)
            }
            OutOfRangePolicy::Reject => Err(BubbleError::PositionOutOfRange { position }),
            OutOfRangePolicy::Extrapolate => Ok(position),
        }
    }

    /// Check this config against a bubble size.
    ///
    /// Fails on an unusable size, negative or non-finite lengths, an arrow
    /// that does not fit inside the size, and positions rejected by the
    /// policy. Radii are not checked here; oversized radii only overlap.
    pub fn validate(&self, size: Size) -> Result<(), BubbleError> {
        if !size.is_valid() {
            return Err(BubbleError::InvalidSize {
                width: size.width,
                height: size.height,
            });
        }

        let lengths = [
            ("corner_radius", self.corner_radius),
            ("arrow_radius", self.arrow_radius),
            ("arrow_height", self.arrow_height),
            ("arrow_width", self.arrow_width),
        ];
        for (name, value) in lengths {
            check_non_negative(value)
                .map_err(|reason| BubbleError::invalid_parameter(name, value, reason))?;
        }

        let (across, along) = if self.arrow_direction.is_vertical_edge() {
            (size.width, size.height)
        } else {
            (size.height, size.width)
        };
        if self.arrow_height >= across {
            return Err(BubbleError::ArrowTooTall {
                arrow_height: self.arrow_height,
                available: across,
            });
        }
        if self.arrow_width >= along {
            return Err(BubbleError::ArrowTooWide {
                arrow_width: self.arrow_width,
                available: along,
            });
        }

        self.effective_arrow_position().map(|_| ())
    }
}

impl Default for BubbleConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
