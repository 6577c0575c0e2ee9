//! Closed vector outlines for speech bubbles.
//!
//! A bubble is a rounded rectangle with a triangular pointer on one edge.
//! [`key_points`] places its seven anchor points, [`build_path`] rounds each
//! of them with a tangent arc, and [`layer`] wraps the result for rendering.
//!
//! ```
//! use bubbler::{ArrowDirection, BubbleConfig, Size};
//!
//! let config = BubbleConfig::new()
//!     .with_corner_radius(8.0)
//!     .with_arrow_direction(ArrowDirection::Top)
//!     .with_arrow_position(0.25);
//! let shape = bubbler::layer(Size::new(160.0, 90.0), &config)?;
//! assert!(shape.path().is_closed());
//! println!("{}", shape.svg_path_data());
//! # Ok::<(), bubbler::BubbleError>(())
//! ```
//!
//! Coordinates grow rightward and downward from the bubble's top-left corner,
//! and the outline is traced clockwise on screen.

pub mod config;
pub mod defaults;
pub mod errors;
pub mod geometry;
pub mod log;
pub mod path;
pub mod render;
pub mod types;

pub use config::{ArrowDirection, BubbleConfig, OutOfRangePolicy, ParseDirectionError, START_CORNER};
pub use errors::BubbleError;
pub use geometry::{
    Corner, Degeneracy, Fillet, KeyPoints, PathBuilder, bubble_path, build_path,
    compute_key_points, compute_key_points_unchecked, fillet_corner,
};
pub use path::{Arc, Path, PathCommand};
pub use render::{Bubble, BubbleShape, PathData, SvgOptions, layer};
pub use types::{Angle, NumericError, Point, Size};

/// Validate and place the seven key points of a bubble.
///
/// Shorthand for [`compute_key_points`].
pub fn key_points(size: Size, config: &BubbleConfig) -> Result<KeyPoints, BubbleError> {
    compute_key_points(size, config)
}
