//! Renderable bubble shapes
//!
//! - `svg`: path data and standalone SVG documents
//!
//! [`Bubble`] holds a size and config and produces a fresh [`BubbleShape`]
//! on every request. It keeps nothing else between calls.

pub mod svg;

pub use svg::{PathData, SvgOptions, svg_document};

use crate::config::BubbleConfig;
use crate::defaults;
use crate::errors::BubbleError;
use crate::geometry::{KeyPoints, build_path, compute_key_points};
use crate::path::Path;
use crate::types::{Point, Size};

/// An outline ready to hand to a renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct BubbleShape {
    size: Size,
    path: Path,
}

impl BubbleShape {
    pub fn new(size: Size, path: Path) -> Self {
        Self { size, path }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn into_path(self) -> Path {
        self.path
    }

    /// Outline as a polygon, arcs flattened at the default tolerance.
    pub fn polygon(&self) -> Vec<Point> {
        self.path.flatten(defaults::FLATTEN_TOLERANCE)
    }

    /// SVG `d` attribute for the outline.
    pub fn svg_path_data(&self) -> String {
        PathData::from_path(&self.path).to_string()
    }

    /// Standalone SVG document showing the outline.
    pub fn to_svg(&self, options: &SvgOptions) -> Result<String, BubbleError> {
        svg_document(&self.path, self.size, options)
    }
}

/// A bubble outline source for one view size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bubble {
    size: Size,
    config: BubbleConfig,
}

impl Bubble {
    /// Bubble of `size` with the default config.
    pub fn new(size: Size) -> Self {
        Self::with_config(size, BubbleConfig::DEFAULT)
    }

    pub fn with_config(size: Size, config: BubbleConfig) -> Self {
        Self { size, config }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn config(&self) -> &BubbleConfig {
        &self.config
    }

    pub fn key_points(&self) -> Result<KeyPoints, BubbleError> {
        compute_key_points(self.size, &self.config)
    }

    pub fn path(&self) -> Result<Path, BubbleError> {
        let points = self.key_points()?;
        Ok(build_path(&points, &self.config))
    }

    /// Build the outline and wrap it for rendering.
    pub fn layer(&self) -> Result<BubbleShape, BubbleError> {
        Ok(BubbleShape::new(self.size, self.path()?))
    }

    /// Replace the config and rebuild the outline.
    pub fn update_config(&mut self, config: BubbleConfig) -> Result<BubbleShape, BubbleError> {
        self.config = config;
        self.layer()
    }

    /// Replace the size and rebuild the outline.
    pub fn resize(&mut self, size: Size) -> Result<BubbleShape, BubbleError> {
        self.size = size;
        self.layer()
    }
}

/// Build the outline of a bubble of `size` and wrap it for rendering.
pub fn layer(size: Size, config: &BubbleConfig) -> Result<BubbleShape, BubbleError> {
    Bubble::with_config(size, *config).layer()
}
