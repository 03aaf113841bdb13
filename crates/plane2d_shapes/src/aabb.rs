//! Axis-aligned bounding box

use serde::{Serialize, Deserialize};

use plane2d_math::{Point2, Vec2};

/// A 2D axis-aligned bounding box
///
/// Pure value type: an AABB is computed from a shape's parameters, never
/// stored back into it, so a rectangle's bounding box is simply a fresh
/// value with the same extents.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Minimum corner (left, top in screen space)
    pub min: Point2,
    /// Maximum corner (right, bottom in screen space)
    pub max: Point2,
}

impl Aabb {
    /// Create a new AABB from min and max corners
    pub fn new(min: Point2, max: Point2) -> Self {
        Self { min, max }
    }

    /// Create an AABB centered at a position with given half-extents
    pub fn from_center_half_extents(center: Point2, half_extents: Vec2) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Smallest AABB enclosing all the given points
    ///
    /// Returns `None` for an empty iterator.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point2>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut min = first.to_vector();
        let mut max = min;
        for p in iter {
            min = min.min_components(p.to_vector());
            max = max.max_components(p.to_vector());
        }
        Some(Self::new(min.to_point(), max.to_point()))
    }

    /// Get the center of the AABB
    pub fn center(&self) -> Point2 {
        self.min.midpoint(self.max)
    }

    /// Get the half-extents (half the size in each dimension)
    pub fn half_extents(&self) -> Vec2 {
        (self.max - self.min) * 0.5
    }

    /// Get the full size in each dimension
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Width of the box
    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    /// Height of the box
    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Check if a point is inside or on the AABB (edges count as inside)
    pub fn contains(&self, point: Point2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Check if two AABBs overlap (touching edges count as overlapping)
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.max.x >= other.min.x
            && self.min.x <= other.max.x
            && self.max.y >= other.min.y
            && self.min.y <= other.max.y
    }

    /// Get the closest point inside or on the AABB to a given point
    pub fn closest_point(&self, point: Point2) -> Point2 {
        Point2::new(
            point.x.clamp(self.min.x, self.max.x),
            point.y.clamp(self.min.y, self.max.y),
        )
    }

    /// Translate the AABB by a delta
    pub fn translated(&self, delta: Vec2) -> Self {
        Self {
            min: self.min + delta,
            max: self.max + delta,
        }
    }

    /// Smallest AABB enclosing both boxes
    pub fn union(&self, other: &Aabb) -> Self {
        Self {
            min: self
                .min
                .to_vector()
                .min_components(other.min.to_vector())
                .to_point(),
            max: self
                .max
                .to_vector()
                .max_components(other.max.to_vector())
                .to_point(),
        }
    }
}

impl std::fmt::Display for Aabb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Aabb[{} .. {}]", self.min, self.max)
    }
}
