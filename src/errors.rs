//! Error types with diagnostics using miette
//!
//! Every error is local to a single geometry request. Oversized radii are not
//! errors: they produce overlapping fillet arcs and are reported through
//! [`KeyPoints::degeneracies`](crate::KeyPoints::degeneracies) instead.

use miette::Diagnostic;
use thiserror::Error;

use crate::types::NumericError;

/// Errors raised while turning a size and config into geometry or SVG
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum BubbleError {
    #[error("invalid bubble size {width}x{height}")]
    #[diagnostic(
        code(bubbler::size::invalid),
        help("width and height must be finite and greater than zero")
    )]
    InvalidSize { width: f64, height: f64 },

    #[error("invalid {name}: {value} ({reason})")]
    #[diagnostic(
        code(bubbler::config::invalid_parameter),
        help("lengths must be finite and not negative")
    )]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: NumericError,
    },

    #[error("arrow height {arrow_height} leaves no room for the body ({available} available)")]
    #[diagnostic(
        code(bubbler::config::arrow_too_tall),
        help("arrow height must be less than the size perpendicular to the pointed edge")
    )]
    ArrowTooTall { arrow_height: f64, available: f64 },

    #[error("arrow width {arrow_width} does not fit along the pointed edge ({available} available)")]
    #[diagnostic(
        code(bubbler::config::arrow_too_wide),
        help("arrow width must be less than the size along the pointed edge")
    )]
    ArrowTooWide { arrow_width: f64, available: f64 },

    #[error("arrow position {position} is outside 0..=1")]
    #[diagnostic(
        code(bubbler::config::position_out_of_range),
        help("use OutOfRangePolicy::Clamp or Extrapolate to accept positions outside the edge")
    )]
    PositionOutOfRange { position: f64 },

    #[error("failed to write SVG: {0}")]
    #[diagnostic(code(bubbler::svg::write))]
    Svg(String),
}

impl BubbleError {
    pub(crate) fn invalid_parameter(name: &'static str, value: f64, reason: NumericError) -> Self {
        BubbleError::InvalidParameter {
            name,
            value,
            reason,
        }
    }
}
