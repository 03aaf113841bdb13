//! Rectangle primitive

use serde::{Serialize, Deserialize};

use plane2d_math::{Point2, Vec2};

use crate::aabb::Aabb;
use crate::cache::Cached;

/// An axis-aligned rectangle defined by top-left position and size
///
/// Raw state is the position and size; the vertex list and bounding box are
/// derived lazily. Width/height are expected to be non-negative by
/// convention but are not enforced.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Rect {
    position: Point2,
    size: Vec2,
    #[serde(skip)]
    cache: Cached<RectDerived>,
}

#[derive(Clone, Debug)]
struct RectDerived {
    /// Corners clockwise from the top-left position
    vertices: [Point2; 4],
    aabb: Aabb,
}

impl Rect {
    /// Create a new rectangle from top-left position and size
    pub fn new(position: impl Into<Point2>, size: impl Into<Vec2>) -> Self {
        Self {
            position: position.into(),
            size: size.into(),
            cache: Cached::new(),
        }
    }

    /// Create a new rectangle from raw coordinates
    pub fn from_xywh(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new(Point2::new(x, y), Vec2::new(width, height))
    }

    /// Top-left position
    #[inline]
    pub fn position(&self) -> Point2 {
        self.position
    }

    /// Size (width, height)
    #[inline]
    pub fn size(&self) -> Vec2 {
        self.size
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.position.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.position.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.position.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.position.y + self.size.y
    }

    /// Center of the rectangle
    pub fn center(&self) -> Point2 {
        self.position + self.size * 0.5
    }

    /// The four corners, clockwise from the top-left position
    pub fn vertices(&mut self) -> [Point2; 4] {
        let position = self.position;
        let size = self.size;
        self.cache
            .get_or_refresh(|| Self::derive(position, size))
            .vertices
    }

    /// Axis-aligned bounding box (same extents as the rectangle itself)
    pub fn aabb(&mut self) -> Aabb {
        let position = self.position;
        let size = self.size;
        self.cache
            .get_or_refresh(|| Self::derive(position, size))
            .aabb
    }

    /// Overlap test against any shape; unsupported kinds return false
    pub fn intersects(&self, other: &crate::Shape) -> bool {
        match other {
            crate::Shape::Rect(rect) => crate::intersect::rects_intersect(self, rect),
            crate::Shape::Circle(circle) => crate::intersect::rect_intersects_circle(self, circle),
            crate::Shape::Polygon(_) | crate::Shape::Line(_) => false,
        }
    }

    /// Inclusive bounds test: a point exactly on an edge counts as contained
    pub fn contains_point(&self, point: Point2) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.top()
            && point.y <= self.bottom()
    }

    /// Move the rectangle, keeping its size
    ///
    /// Non-finite coordinates are rejected with a warning.
    pub fn set_position(&mut self, position: impl Into<Point2>) -> &mut Self {
        let position = position.into();
        if position.is_finite() {
            self.position = position;
            self.cache.invalidate();
        } else {
            log::warn!("Rect::set_position rejected non-finite position {}", position);
        }
        self
    }

    /// Resize the rectangle, keeping its position
    ///
    /// Non-finite sizes are rejected with a warning.
    pub fn set_size(&mut self, size: impl Into<Vec2>) -> &mut Self {
        let size = size.into();
        if size.is_finite() {
            self.size = size;
            self.cache.invalidate();
        } else {
            log::warn!("Rect::set_size rejected non-finite size {}", size);
        }
        self
    }

    /// Translate the rectangle by an offset
    pub fn translate(&mut self, offset: Vec2) -> &mut Self {
        if offset.is_finite() {
            self.position += offset;
            self.cache.invalidate();
        } else {
            log::warn!("Rect::translate rejected non-finite offset {}", offset);
        }
        self
    }

    /// Corner coordinates as `[x, y]` pairs (debugging/serialization aid)
    pub fn to_coords(&mut self) -> Vec<[f32; 2]> {
        self.vertices().iter().map(|v| v.to_array()).collect()
    }

    /// Number of derived-state rebuilds performed so far (diagnostic)
    pub fn refresh_count(&self) -> u64 {
        self.cache.refresh_count()
    }

    fn derive(position: Point2, size: Vec2) -> RectDerived {
        let vertices = [
            position,
            position + Vec2::new(size.x, 0.0),
            position + size,
            position + Vec2::new(0.0, size.y),
        ];
        RectDerived {
            vertices,
            aabb: Aabb::new(position, position + size),
        }
    }
}

impl PartialEq for Rect {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position && self.size == other.size
    }
}

impl std::fmt::Display for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Rect[{} {}x{}]", self.position, self.size.x, self.size.y)
    }
}
