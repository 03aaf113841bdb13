//! 2D Vector type

use bytemuck::{Pod, Zeroable};
use serde::{Serialize, Deserialize};

use crate::Point2;

/// 2D vector with x, y components, in screen-space coordinates (Y grows downward)
///
/// A `Vec2` represents a direction and magnitude, as opposed to [`Point2`]
/// which represents a position. Operators cover the usual arithmetic; the
/// checked mutators ([`set`](Vec2::set), [`scale_by`](Vec2::scale_by),
/// [`div_by`](Vec2::div_by)) reject non-finite input with a logged warning
/// instead of propagating NaN.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };
    pub const X: Self = Self { x: 1.0, y: 0.0 };
    pub const Y: Self = Self { x: 0.0, y: 1.0 };

    /// Create a new Vec2
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Create a Vec2 with both components set to the same value
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self { x: v, y: v }
    }

    /// Dot product
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// 2D cross product (the scalar z-component of the 3D cross product)
    #[inline]
    pub fn cross(self, other: Self) -> f32 {
        self.x * other.y - self.y * other.x
    }

    /// Length squared (faster than length)
    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    /// Length (magnitude)
    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Normalize to unit length
    ///
    /// Returns the zero vector when the source is zero or non-finite,
    /// so the result always has length <= 1.
    #[inline]
    pub fn normalized(self) -> Self {
        if !self.is_finite() {
            return Self::ZERO;
        }
        let len = self.length();
        if len > 0.0 {
            self * (1.0 / len)
        } else {
            Self::ZERO
        }
    }

    /// Perpendicular vector, 90 degrees counter-clockwise: (x, y) -> (-y, x)
    #[inline]
    pub fn perp(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Unit-length perpendicular vector
    #[inline]
    pub fn normal(self) -> Self {
        self.perp().normalized()
    }

    /// Angle relative to the positive x-axis, in radians
    ///
    /// Screen convention: y is inverted so that visual "up" maps to a
    /// positive angle (`atan2(-y, x)`).
    #[inline]
    pub fn angle(self) -> f32 {
        (-self.y).atan2(self.x)
    }

    /// Angle between two vectors, in radians
    ///
    /// Returns 0 when either operand has zero length (avoids NaN from
    /// the division inside the cosine).
    pub fn angle_between(self, other: Self) -> f32 {
        let len_product = self.length() * other.length();
        if len_product == 0.0 {
            return 0.0;
        }
        (self.dot(other) / len_product).clamp(-1.0, 1.0).acos()
    }

    /// Project this vector onto another
    ///
    /// Returns the zero vector when `other` has zero length.
    pub fn project_onto(self, other: Self) -> Self {
        let denom = other.length_squared();
        if denom == 0.0 {
            return Self::ZERO;
        }
        other * (self.dot(other) / denom)
    }

    /// Rotate about the origin by `angle` radians
    pub fn rotated(self, angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    /// Rescale to the given length, preserving direction
    ///
    /// A non-finite target length degenerates to the zero vector; a zero
    /// source vector stays zero (it has no direction to preserve).
    pub fn with_length(self, length: f32) -> Self {
        if !length.is_finite() {
            return Self::ZERO;
        }
        self.normalized() * length
    }

    /// Clamp the magnitude to `max`
    ///
    /// Compares squared lengths so no square root is taken when the vector
    /// is already within bounds.
    pub fn clamped_length(self, max: f32) -> Self {
        if self.length_squared() <= max * max {
            self
        } else {
            self.with_length(max)
        }
    }

    /// Euclidean distance to another vector
    #[inline]
    pub fn distance(self, other: Self) -> f32 {
        (other - self).length()
    }

    /// Squared Euclidean distance to another vector
    #[inline]
    pub fn distance_squared(self, other: Self) -> f32 {
        (other - self).length_squared()
    }

    /// Linear interpolation between two vectors
    #[inline]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        self * (1.0 - t) + other * t
    }

    /// Component-wise minimum
    #[inline]
    pub fn min_components(self, other: Self) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y))
    }

    /// Component-wise maximum
    #[inline]
    pub fn max_components(self, other: Self) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y))
    }

    /// Component-wise absolute value
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs())
    }

    /// True when both components are finite
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Extract the components as an `[x, y]` array
    #[inline]
    pub fn to_array(self) -> [f32; 2] {
        [self.x, self.y]
    }

    /// Set both components, rejecting non-finite input
    ///
    /// Invalid input leaves the vector unchanged and logs a warning.
    pub fn set(&mut self, x: f32, y: f32) -> &mut Self {
        if x.is_finite() && y.is_finite() {
            self.x = x;
            self.y = y;
        } else {
            log::warn!("Vec2::set rejected non-finite input ({}, {})", x, y);
        }
        self
    }

    /// Multiply in place by a scalar, rejecting non-finite factors
    ///
    /// Invalid input leaves the vector unchanged and logs a warning.
    pub fn scale_by(&mut self, factor: f32) -> &mut Self {
        if factor.is_finite() {
            self.x *= factor;
            self.y *= factor;
        } else {
            log::warn!("Vec2::scale_by rejected non-finite factor {}", factor);
        }
        self
    }

    /// Divide in place by a scalar, rejecting zero and non-finite divisors
    ///
    /// Invalid input leaves the vector unchanged and logs a warning.
    pub fn div_by(&mut self, divisor: f32) -> &mut Self {
        if divisor.is_finite() && divisor != 0.0 {
            self.x /= divisor;
            self.y /= divisor;
        } else {
            log::warn!("Vec2::div_by rejected divisor {}", divisor);
        }
        self
    }

    /// Interpret this vector as a position
    #[inline]
    pub fn to_point(self) -> Point2 {
        Point2::new(self.x, self.y)
    }
}

// Operator overloads

impl std::ops::Add for Vec2 {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl std::ops::AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl std::ops::SubAssign for Vec2 {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.x -= other.x;
        self.y -= other.y;
    }
}

impl std::ops::Mul<f32> for Vec2 {
    type Output = Self;
    #[inline]
    fn mul(self, scalar: f32) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }
}

impl std::ops::MulAssign<f32> for Vec2 {
    #[inline]
    fn mul_assign(&mut self, scalar: f32) {
        self.x *= scalar;
        self.y *= scalar;
    }
}

impl std::ops::Div<f32> for Vec2 {
    type Output = Self;
    #[inline]
    fn div(self, scalar: f32) -> Self {
        Self::new(self.x / scalar, self.y / scalar)
    }
}

impl std::ops::Neg for Vec2 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl From<(f32, f32)> for Vec2 {
    #[inline]
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

impl From<[f32; 2]> for Vec2 {
    #[inline]
    fn from([x, y]: [f32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Point2> for Vec2 {
    #[inline]
    fn from(p: Point2) -> Self {
        Self::new(p.x, p.y)
    }
}

impl std::fmt::Display for Vec2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
