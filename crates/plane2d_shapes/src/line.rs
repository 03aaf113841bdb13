//! Line segment primitive

use serde::{Serialize, Deserialize};

use plane2d_math::{Point2, Vec2};

use crate::cache::Cached;

/// A line segment from origin to end
///
/// Pure derived-value holder over two endpoints; mutation is endpoint
/// replacement only.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Line {
    origin: Point2,
    end: Point2,
    #[serde(skip)]
    cache: Cached<LineDerived>,
}

#[derive(Clone, Copy, Debug)]
struct LineDerived {
    direction: Vec2,
    length: f32,
    midpoint: Point2,
    angle: f32,
}

impl Line {
    /// Create a new line segment
    pub fn new(origin: impl Into<Point2>, end: impl Into<Point2>) -> Self {
        Self {
            origin: origin.into(),
            end: end.into(),
            cache: Cached::new(),
        }
    }

    #[inline]
    pub fn origin(&self) -> Point2 {
        self.origin
    }

    #[inline]
    pub fn end(&self) -> Point2 {
        self.end
    }

    /// Direction vector (end - origin), not normalized
    pub fn direction(&mut self) -> Vec2 {
        self.derived().direction
    }

    /// Euclidean length of the segment
    pub fn length(&mut self) -> f32 {
        self.derived().length
    }

    /// Midpoint of the segment
    pub fn midpoint(&mut self) -> Point2 {
        self.derived().midpoint
    }

    /// Angle of the segment, screen-space convention (`atan2(-y, x)`)
    pub fn angle(&mut self) -> f32 {
        self.derived().angle
    }

    /// Replace the origin endpoint
    ///
    /// Non-finite coordinates are rejected with a warning.
    pub fn set_origin(&mut self, origin: impl Into<Point2>) -> &mut Self {
        let origin = origin.into();
        if origin.is_finite() {
            self.origin = origin;
            self.cache.invalidate();
        } else {
            log::warn!("Line::set_origin rejected non-finite point {}", origin);
        }
        self
    }

    /// Replace the end endpoint
    ///
    /// Non-finite coordinates are rejected with a warning.
    pub fn set_end(&mut self, end: impl Into<Point2>) -> &mut Self {
        let end = end.into();
        if end.is_finite() {
            self.end = end;
            self.cache.invalidate();
        } else {
            log::warn!("Line::set_end rejected non-finite point {}", end);
        }
        self
    }

    /// Endpoint coordinates as `[x, y]` pairs (debugging/serialization aid)
    pub fn to_coords(&self) -> Vec<[f32; 2]> {
        vec![self.origin.to_array(), self.end.to_array()]
    }

    /// Number of derived-state rebuilds performed so far (diagnostic)
    pub fn refresh_count(&self) -> u64 {
        self.cache.refresh_count()
    }

    fn derived(&mut self) -> &LineDerived {
        let origin = self.origin;
        let end = self.end;
        self.cache.get_or_refresh(|| {
            let direction = end - origin;
            LineDerived {
                direction,
                length: direction.length(),
                midpoint: origin.midpoint(end),
                angle: direction.angle(),
            }
        })
    }
}

impl PartialEq for Line {
    fn eq(&self, other: &Self) -> bool {
        self.origin == other.origin && self.end == other.end
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Line[{} -> {}]", self.origin, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_derived_values() {
        let mut line = Line::new(Point2::new(1.0, 1.0), Point2::new(4.0, 5.0));
        assert_eq!(line.direction(), Vec2::new(3.0, 4.0));
        assert_eq!(line.length(), 5.0);
        assert_eq!(line.midpoint(), Point2::new(2.5, 3.0));
    }

    #[test]
    fn test_angle_screen_convention() {
        // Segment pointing visually "up" (negative y)
        let mut up = Line::new(Point2::ORIGIN, Point2::new(0.0, -1.0));
        assert!((up.angle() - std::f32::consts::FRAC_PI_2).abs() < EPSILON);

        let mut right = Line::new(Point2::ORIGIN, Point2::new(1.0, 0.0));
        assert!(right.angle().abs() < EPSILON);
    }

    #[test]
    fn test_mutation_reflects_in_derived() {
        let mut line = Line::new(Point2::ORIGIN, Point2::new(1.0, 0.0));
        assert_eq!(line.length(), 1.0);

        line.set_end(Point2::new(3.0, 4.0));
        assert_eq!(line.length(), 5.0);

        line.set_origin(Point2::new(3.0, 0.0));
        assert_eq!(line.length(), 4.0);
    }

    #[test]
    fn test_refresh_runs_once_per_dirty_period() {
        let mut line = Line::new(Point2::ORIGIN, Point2::new(1.0, 0.0));
        line.length();
        line.midpoint();
        line.angle();
        assert_eq!(line.refresh_count(), 1);

        line.set_end(Point2::new(2.0, 0.0));
        line.length();
        assert_eq!(line.refresh_count(), 2);
    }

    #[test]
    fn test_rejects_non_finite_endpoints() {
        let mut line = Line::new(Point2::ORIGIN, Point2::new(1.0, 0.0));
        line.set_origin(Point2::new(f32::NAN, 0.0));
        line.set_end(Point2::new(0.0, f32::INFINITY));
        assert_eq!(line.origin(), Point2::ORIGIN);
        assert_eq!(line.end(), Point2::new(1.0, 0.0));
    }

    #[test]
    fn test_to_coords() {
        let line = Line::new(Point2::new(1.0, 2.0), Point2::new(3.0, 4.0));
        assert_eq!(line.to_coords(), vec![[1.0, 2.0], [3.0, 4.0]]);
    }
}
