//! Bubble geometry
//!
//! - `key_points`: the seven anchor points for a size and config
//! - `fillet`: the tangent-arc corner primitive
//! - `path_builder`: threads the key points through the fillets

pub mod fillet;
pub mod key_points;
pub mod path_builder;

pub use fillet::{Fillet, fillet_corner};
pub use key_points::{
    Corner, Degeneracy, KEY_POINT_COUNT, KeyPoints, compute_key_points,
    compute_key_points_unchecked,
};
pub use path_builder::{PathBuilder, build_path};

use crate::config::BubbleConfig;
use crate::errors::BubbleError;
use crate::path::Path;
use crate::types::Size;

/// Compute the closed outline of a bubble of `size`.
pub fn bubble_path(size: Size, config: &BubbleConfig) -> Result<Path, BubbleError> {
    let points = compute_key_points(size, config)?;
    Ok(build_path(&points, config))
}
