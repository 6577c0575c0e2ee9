//! SVG output for bubble outlines

use std::fmt;
use std::fmt::Write as _;
use std::io::Cursor;

use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, Event};

use crate::defaults;
use crate::errors::BubbleError;
use crate::path::{Path, PathCommand};
use crate::types::{Point, Size};

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Coordinates closer to zero than this print as `0`.
const ZERO_SNAP: f64 = 1e-9;

/// SVG `d` attribute builder.
///
/// ```
/// use bubbler::PathData;
///
/// let d = PathData::new().m(0.0, 0.0).l(10.0, 0.0).z();
/// assert_eq!(d.to_string(), "M0,0 L10,0 Z");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathData {
    data: String,
}

impl PathData {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(mut self, cmd: char, body: fmt::Arguments<'_>) -> Self {
        if !self.data.is_empty() {
            self.data.push(' ');
        }
        self.data.push(cmd);
        let _ = self.data.write_fmt(body);
        self
    }

    /// Move to (x, y)
    pub fn m(self, x: f64, y: f64) -> Self {
        self.push('M', format_args!("{},{}", fmt_num(x), fmt_num(y)))
    }

    /// Line to (x, y)
    pub fn l(self, x: f64, y: f64) -> Self {
        self.push('L', format_args!("{},{}", fmt_num(x), fmt_num(y)))
    }

    /// Elliptical arc to (x, y)
    #[allow(clippy::too_many_arguments)]
    pub fn a(
        self,
        rx: f64,
        ry: f64,
        rotation: f64,
        large_arc: bool,
        sweep: bool,
        x: f64,
        y: f64,
    ) -> Self {
        self.push(
            'A',
            format_args!(
                "{},{} {} {},{} {},{}",
                fmt_num(rx),
                fmt_num(ry),
                fmt_num(rotation),
                u8::from(large_arc),
                u8::from(sweep),
                fmt_num(x),
                fmt_num(y)
            ),
        )
    }

    /// Close path
    pub fn z(self) -> Self {
        self.push('Z', format_args!(""))
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.data
    }

    /// Path data for every command of `path`.
    ///
    /// SVG arcs run from the current point, so an arc that does not start at
    /// the pen position gets an explicit line first.
    pub fn from_path(path: &Path) -> Self {
        let mut data = PathData::new();
        let mut start = Point::ZERO;
        let mut current = Point::ZERO;

        for cmd in path {
            match *cmd {
                PathCommand::MoveTo(p) => {
                    data = data.m(p.x, p.y);
                    start = p;
                    current = p;
                }
                PathCommand::LineTo(p) => {
                    data = data.l(p.x, p.y);
                    current = p;
                }
                PathCommand::ArcTo(arc) => {
                    let from = arc.start_point();
                    if from.distance(current) > ZERO_SNAP {
                        data = data.l(from.x, from.y);
                    }
                    let to = arc.end_point();
                    let sweep = arc.sweep();
                    data = data.a(
                        arc.radius,
                        arc.radius,
                        0.0,
                        sweep.abs() > std::f64::consts::PI,
                        sweep > 0.0,
                        to.x,
                        to.y,
                    );
                    current = to;
                }
                PathCommand::Close => {
                    data = data.z();
                    current = start;
                }
            }
        }
        data
    }
}

impl fmt::Display for PathData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.data)
    }
}

impl From<&Path> for PathData {
    fn from(path: &Path) -> Self {
        PathData::from_path(path)
    }
}

/// Styling for a standalone SVG document.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgOptions {
    pub fill: String,
    /// `None` draws no outline
    pub stroke: Option<String>,
    pub stroke_width: f64,
    /// Extra space around the bounding box on every side
    pub margin: f64,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            fill: "rgb(255,255,255)".to_string(),
            stroke: Some("rgb(0,0,0)".to_string()),
            stroke_width: 1.0,
            margin: 1.0,
        }
    }
}

/// Wrap `path` in an `<svg>` element sized to `size` plus the margin.
///
/// Style values are written as attribute text, so quotes and markup in a
/// colour come out escaped.
pub fn svg_document(path: &Path, size: Size, options: &SvgOptions) -> Result<String, BubbleError> {
    let m = options.margin.max(0.0);
    let width = fmt_num(size.width + 2.0 * m);
    let height = fmt_num(size.height + 2.0 * m);
    let view_box = format!("{} {} {width} {height}", fmt_num(-m), fmt_num(-m));

    let mut style = format!("fill:{};", options.fill);
    match &options.stroke {
        Some(stroke) => {
            let _ = write!(
                style,
                "stroke:{};stroke-width:{};",
                stroke,
                fmt_num(options.stroke_width)
            );
        }
        None => style.push_str("stroke:none;"),
    }
    let d = PathData::from_path(path);

    let mut writer = Writer::new(Cursor::new(Vec::new()));

    let mut svg = BytesStart::new("svg");
    svg.push_attribute(("xmlns", SVG_NAMESPACE));
    svg.push_attribute(("viewBox", view_box.as_str()));
    svg.push_attribute(("width", width.as_str()));
    svg.push_attribute(("height", height.as_str()));
    writer
        .write_event(Event::Start(svg))
        .map_err(|e| BubbleError::Svg(e.to_string()))?;

    let mut element = BytesStart::new("path");
    element.push_attribute(("d", d.as_str()));
    element.push_attribute(("style", style.as_str()));
    writer
        .write_event(Event::Empty(element))
        .map_err(|e| BubbleError::Svg(e.to_string()))?;

    writer
        .write_event(Event::End(BytesEnd::new("svg")))
        .map_err(|e| BubbleError::Svg(e.to_string()))?;

    let bytes = writer.into_inner().into_inner();
    String::from_utf8(bytes).map_err(|e| BubbleError::Svg(e.to_string()))
}

/// Format a number like C's `%g` (6 significant figures, trailing zeros trimmed).
pub(crate) fn fmt_num(value: f64) -> String {
    fmt_num_precision(value, defaults::SVG_PRECISION)
}

/// Format a number with specified significant figures, trailing zeros trimmed.
fn fmt_num_precision(value: f64, sig_figs: i32) -> String {
    if value.abs() < ZERO_SNAP {
        return "0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }

    // Round to specified significant figures
    let abs_val = value.abs();
    let magnitude = abs_val.log10().floor() as i32;
    let scale = 10_f64.powi(sig_figs - 1 - magnitude);
    let rounded = (value * scale).round() / scale;

    // Format with enough decimal places, then trim
    let decimals = (sig_figs - 1 - magnitude).max(0) as usize;
    let s = format!("{:.prec$}", rounded, prec = decimals);
    let s = if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s.as_str()
    };
    s.to_string()
}
