//! Circle primitive

use serde::{Serialize, Deserialize};

use plane2d_math::{Point2, Vec2};

use crate::aabb::Aabb;
use crate::cache::Cached;
use crate::error::ShapeError;

/// A circle defined by center and radius
///
/// The radius must be strictly positive and finite; a zero or negative
/// radius makes area, circumference, and containment ill-defined, so both
/// [`new`](Circle::new) and [`set_radius`](Circle::set_radius) enforce it
/// as a fatal error rather than coercing.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Circle {
    center: Point2,
    radius: f32,
    #[serde(skip)]
    cache: Cached<CircleDerived>,
}

#[derive(Clone, Debug)]
struct CircleDerived {
    radius_squared: f32,
    area: f32,
    circumference: f32,
    aabb: Aabb,
}

impl Circle {
    /// Create a new circle
    ///
    /// Returns [`ShapeError::InvalidRadius`] unless the radius is strictly
    /// positive and finite.
    pub fn new(center: impl Into<Point2>, radius: f32) -> Result<Self, ShapeError> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(ShapeError::InvalidRadius(radius));
        }
        Ok(Self {
            center: center.into(),
            radius,
            cache: Cached::new(),
        })
    }

    /// Center position
    #[inline]
    pub fn center(&self) -> Point2 {
        self.center
    }

    /// Radius (always > 0)
    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Squared radius
    pub fn radius_squared(&mut self) -> f32 {
        self.derived().radius_squared
    }

    /// Area (pi * r^2)
    pub fn area(&mut self) -> f32 {
        self.derived().area
    }

    /// Circumference (2 * pi * r)
    pub fn circumference(&mut self) -> f32 {
        self.derived().circumference
    }

    /// Axis-aligned bounding box: a square of side 2r centered on the circle
    pub fn aabb(&mut self) -> Aabb {
        self.derived().aabb
    }

    /// Overlap test against any shape; unsupported kinds return false
    pub fn intersects(&self, other: &crate::Shape) -> bool {
        match other {
            crate::Shape::Rect(rect) => crate::intersect::rect_intersects_circle(rect, self),
            crate::Shape::Circle(circle) => crate::intersect::circles_intersect(self, circle),
            crate::Shape::Polygon(_) | crate::Shape::Line(_) => false,
        }
    }

    /// Inclusive containment: points exactly on the boundary are contained
    pub fn contains_point(&self, point: Point2) -> bool {
        self.center.distance_squared(point) <= self.radius * self.radius
    }

    /// Replace the radius
    ///
    /// Returns [`ShapeError::InvalidRadius`] and leaves the circle unchanged
    /// unless the new radius is strictly positive and finite.
    pub fn set_radius(&mut self, radius: f32) -> Result<&mut Self, ShapeError> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(ShapeError::InvalidRadius(radius));
        }
        self.radius = radius;
        self.cache.invalidate();
        Ok(self)
    }

    /// Move the circle's center
    ///
    /// Non-finite coordinates are rejected with a warning.
    pub fn set_center(&mut self, center: impl Into<Point2>) -> &mut Self {
        let center = center.into();
        if center.is_finite() {
            self.center = center;
            self.cache.invalidate();
        } else {
            log::warn!("Circle::set_center rejected non-finite center {}", center);
        }
        self
    }

    /// Translate the circle by an offset
    pub fn translate(&mut self, offset: Vec2) -> &mut Self {
        if offset.is_finite() {
            self.center += offset;
            self.cache.invalidate();
        } else {
            log::warn!("Circle::translate rejected non-finite offset {}", offset);
        }
        self
    }

    /// Center coordinates as an `[x, y]` pair (debugging/serialization aid)
    pub fn to_coords(&self) -> Vec<[f32; 2]> {
        vec![self.center.to_array()]
    }

    /// Number of derived-state rebuilds performed so far (diagnostic)
    pub fn refresh_count(&self) -> u64 {
        self.cache.refresh_count()
    }

    fn derived(&mut self) -> &CircleDerived {
        let center = self.center;
        let radius = self.radius;
        self.cache.get_or_refresh(|| CircleDerived {
            radius_squared: radius * radius,
            area: std::f32::consts::PI * radius * radius,
            circumference: 2.0 * std::f32::consts::PI * radius,
            aabb: Aabb::from_center_half_extents(center, Vec2::splat(radius)),
        })
    }
}

impl PartialEq for Circle {
    fn eq(&self, other: &Self) -> bool {
        self.center == other.center && self.radius == other.radius
    }
}

impl std::fmt::Display for Circle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Circle[{} r={}]", self.center, self.radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    #[test]
    fn test_new_rejects_bad_radius() {
        assert!(Circle::new(Point2::ORIGIN, 0.0).is_err());
        assert!(Circle::new(Point2::ORIGIN, -1.0).is_err());
        assert!(Circle::new(Point2::ORIGIN, f32::NAN).is_err());
        assert!(Circle::new(Point2::ORIGIN, f32::INFINITY).is_err());
        assert!(Circle::new(Point2::ORIGIN, 0.001).is_ok());
    }

    #[test]
    fn test_set_radius_rejects_and_preserves() {
        let mut circle = Circle::new(Point2::ORIGIN, 2.0).unwrap();
        assert!(circle.set_radius(-5.0).is_err());
        assert_eq!(circle.radius(), 2.0);

        circle.set_radius(3.0).unwrap();
        assert_eq!(circle.radius(), 3.0);
    }

    #[test]
    fn test_derived_values() {
        let mut circle = Circle::new(Point2::new(1.0, 2.0), 2.0).unwrap();
        assert_eq!(circle.radius_squared(), 4.0);
        assert!((circle.area() - 4.0 * std::f32::consts::PI).abs() < EPSILON);
        assert!((circle.circumference() - 4.0 * std::f32::consts::PI).abs() < EPSILON);

        let aabb = circle.aabb();
        assert_eq!(aabb.min, Point2::new(-1.0, 0.0));
        assert_eq!(aabb.max, Point2::new(3.0, 4.0));
    }

    #[test]
    fn test_contains_point_boundary_inclusive() {
        let circle = Circle::new(Point2::ORIGIN, 10.0).unwrap();
        assert!(circle.contains_point(Point2::new(10.0, 0.0)));
        assert!(!circle.contains_point(Point2::new(10.0001, 0.0)));
        assert!(circle.contains_point(Point2::ORIGIN));
        assert!(circle.contains_point(Point2::new(6.0, 8.0)));
        assert!(!circle.contains_point(Point2::new(8.0, 8.0)));
    }

    #[test]
    fn test_mutation_reflects_in_derived() {
        let mut circle = Circle::new(Point2::ORIGIN, 1.0).unwrap();
        assert_eq!(circle.radius_squared(), 1.0);

        circle.set_radius(4.0).unwrap();
        assert_eq!(circle.radius_squared(), 16.0);

        circle.set_center(Point2::new(5.0, 5.0));
        assert_eq!(circle.aabb().center(), Point2::new(5.0, 5.0));
    }

    #[test]
    fn test_refresh_runs_once_per_dirty_period() {
        let mut circle = Circle::new(Point2::ORIGIN, 1.0).unwrap();
        circle.area();
        circle.circumference();
        circle.aabb();
        assert_eq!(circle.refresh_count(), 1);

        circle.translate(Vec2::new(1.0, 1.0));
        circle.area();
        assert_eq!(circle.refresh_count(), 2);
    }

    #[test]
    fn test_rejects_non_finite_center() {
        let mut circle = Circle::new(Point2::new(1.0, 1.0), 1.0).unwrap();
        circle.set_center(Point2::new(f32::NAN, 0.0));
        circle.translate(Vec2::new(f32::INFINITY, 0.0));
        assert_eq!(circle.center(), Point2::new(1.0, 1.0));
    }
}
