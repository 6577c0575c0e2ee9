//! Numeric primitives shared by the geometry modules.
//!
//! Points are plain `glam::DVec2` in a Y-down coordinate space (the bubble's
//! top-left corner is the origin). Sizes and angles get small newtypes so the
//! public API reads without bare tuples.

use std::f64::consts::{PI, TAU};
use std::fmt;
use std::ops::{Add, Sub};

use glam::DVec2;

/// A point in the bubble's coordinate space (Y grows downward).
pub type Point = DVec2;

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is zero when non-zero required
    Zero,
    /// Value is negative when positive required
    Negative,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Zero => write!(f, "value is zero"),
            NumericError::Negative => write!(f, "value is negative"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Check that a value is finite and strictly positive.
pub(crate) fn check_positive(val: f64) -> Result<f64, NumericError> {
    let val = check_non_negative(val)?;
    if val == 0.0 {
        Err(NumericError::Zero)
    } else {
        Ok(val)
    }
}

/// Check that a value is finite and not negative.
pub(crate) fn check_non_negative(val: f64) -> Result<f64, NumericError> {
    if val.is_nan() {
        Err(NumericError::NaN)
    } else if val.is_infinite() {
        Err(NumericError::Infinite)
    } else if val < 0.0 {
        Err(NumericError::Negative)
    } else {
        Ok(val)
    }
}

/// Bounding size of a bubble.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// Create a size without validation.
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Size { width, height }
    }

    /// Create a size, rejecting NaN, infinite and non-positive dimensions.
    pub fn try_new(width: f64, height: f64) -> Result<Self, NumericError> {
        Ok(Size {
            width: check_positive(width)?,
            height: check_positive(height)?,
        })
    }

    /// Both dimensions are finite and strictly positive.
    pub fn is_valid(self) -> bool {
        check_positive(self.width).is_ok() && check_positive(self.height).is_ok()
    }

    pub fn center(self) -> Point {
        DVec2::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn to_vec2(self) -> DVec2 {
        DVec2::new(self.width, self.height)
    }
}

impl From<(f64, f64)> for Size {
    fn from((width, height): (f64, f64)) -> Self {
        Size::new(width, height)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Angle in radians, measured from +X toward +Y.
///
/// On a Y-down surface an increasing angle turns visually clockwise.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Angle(pub f64);

impl Angle {
    #[inline]
    pub fn degrees(val: f64) -> Angle {
        Angle(val.to_radians())
    }

    /// Direction angle of a vector.
    #[inline]
    pub fn of(v: DVec2) -> Angle {
        Angle(v.y.atan2(v.x))
    }

    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn to_degrees(self) -> f64 {
        self.0.to_degrees()
    }

    /// Unit vector pointing along this angle.
    #[inline]
    pub fn unit(self) -> DVec2 {
        let (s, c) = self.0.sin_cos();
        DVec2::new(c, s)
    }

    /// Wrap into `(-PI, PI]`.
    pub fn normalized(self) -> Angle {
        let mut a = self.0 % TAU;
        if a <= -PI {
            a += TAU;
        } else if a > PI {
            a -= TAU;
        }
        Angle(a)
    }
}

impl Add for Angle {
    type Output = Angle;
    fn add(self, rhs: Angle) -> Angle { Angle(self.0 + rhs.0) }
}
impl Sub for Angle {
    type Output = Angle;
    fn sub(self, rhs: Angle) -> Angle { Angle(self.0 - rhs.0) }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}rad", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_try_new_valid() {
        assert_eq!(Size::try_new(10.0, 20.0), Ok(Size::new(10.0, 20.0)));
    }

    #[test]
    fn size_try_new_rejects_zero_and_negative() {
        assert_eq!(Size::try_new(0.0, 1.0), Err(NumericError::Zero));
        assert_eq!(Size::try_new(1.0, -1.0), Err(NumericError::Negative));
    }

    #[test]
    fn size_try_new_rejects_nan_and_infinity() {
        assert_eq!(Size::try_new(f64::NAN, 1.0), Err(NumericError::NaN));
        assert_eq!(Size::try_new(1.0, f64::INFINITY), Err(NumericError::Infinite));
    }

    #[test]
    fn size_center() {
        assert_eq!(Size::new(100.0, 50.0).center(), DVec2::new(50.0, 25.0));
    }

    #[test]
    fn angle_of_axes() {
        assert_eq!(Angle::of(DVec2::X), Angle(0.0));
        assert!((Angle::of(DVec2::Y).0 - PI / 2.0).abs() < 1e-12);
        assert!((Angle::of(-DVec2::X).0 - PI).abs() < 1e-12);
    }

    #[test]
    fn angle_normalized_wraps() {
        let a = Angle(3.0 * PI / 2.0).normalized();
        assert!((a.0 + PI / 2.0).abs() < 1e-12);
        let b = Angle(-3.0 * PI / 2.0).normalized();
        assert!((b.0 - PI / 2.0).abs() < 1e-12);
        assert_eq!(Angle(PI).normalized(), Angle(PI));
    }

    #[test]
    fn angle_unit_roundtrips_direction() {
        let v = Angle::degrees(30.0).unit();
        assert!((v.length() - 1.0).abs() < 1e-12);
        assert!((Angle::of(v).to_degrees() - 30.0).abs() < 1e-9);
    }
}
