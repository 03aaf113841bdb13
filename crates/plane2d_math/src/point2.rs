//! 2D Point type

use bytemuck::{Pod, Zeroable};
use serde::{Serialize, Deserialize};

use crate::Vec2;

/// A position in screen space (Y grows downward)
///
/// Points and vectors share a representation but not a meaning: subtracting
/// two points yields a [`Vec2`], and adding a [`Vec2`] to a point yields a
/// new point. The operator impls encode exactly those combinations.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f32,
    pub y: f32,
}

impl Point2 {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new Point2
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Interpret this point as a position vector from the origin
    #[inline]
    pub fn to_vector(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Euclidean distance to another point
    #[inline]
    pub fn distance(self, other: Self) -> f32 {
        (other - self).length()
    }

    /// Squared Euclidean distance to another point
    #[inline]
    pub fn distance_squared(self, other: Self) -> f32 {
        (other - self).length_squared()
    }

    /// Midpoint between two points
    #[inline]
    pub fn midpoint(self, other: Self) -> Self {
        Self::new((self.x + other.x) * 0.5, (self.y + other.y) * 0.5)
    }

    /// Linear interpolation between two points
    #[inline]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        self + (other - self) * t
    }

    /// Rotate about a pivot point by `angle` radians
    pub fn rotated_around(self, pivot: Self, angle: f32) -> Self {
        pivot + (self - pivot).rotated(angle)
    }

    /// Translate by an offset vector
    #[inline]
    pub fn translated(self, offset: Vec2) -> Self {
        self + offset
    }

    /// True when both coordinates are finite
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Extract the coordinates as an `[x, y]` array
    #[inline]
    pub fn to_array(self) -> [f32; 2] {
        [self.x, self.y]
    }

    /// Set both coordinates, rejecting non-finite input
    ///
    /// Invalid input leaves the point unchanged and logs a warning.
    pub fn set(&mut self, x: f32, y: f32) -> &mut Self {
        if x.is_finite() && y.is_finite() {
            self.x = x;
            self.y = y;
        } else {
            log::warn!("Point2::set rejected non-finite input ({}, {})", x, y);
        }
        self
    }
}

impl std::ops::Add<Vec2> for Point2 {
    type Output = Self;
    #[inline]
    fn add(self, offset: Vec2) -> Self {
        Self::new(self.x + offset.x, self.y + offset.y)
    }
}

impl std::ops::AddAssign<Vec2> for Point2 {
    #[inline]
    fn add_assign(&mut self, offset: Vec2) {
        self.x += offset.x;
        self.y += offset.y;
    }
}

impl std::ops::Sub<Vec2> for Point2 {
    type Output = Self;
    #[inline]
    fn sub(self, offset: Vec2) -> Self {
        Self::new(self.x - offset.x, self.y - offset.y)
    }
}

impl std::ops::SubAssign<Vec2> for Point2 {
    #[inline]
    fn sub_assign(&mut self, offset: Vec2) {
        self.x -= offset.x;
        self.y -= offset.y;
    }
}

impl std::ops::Sub for Point2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, other: Self) -> Vec2 {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

impl From<(f32, f32)> for Point2 {
    #[inline]
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

impl From<[f32; 2]> for Point2 {
    #[inline]
    fn from([x, y]: [f32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Vec2> for Point2 {
    #[inline]
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl std::fmt::Display for Point2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
