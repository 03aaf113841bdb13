//! Closed shape sum type

use serde::{Serialize, Deserialize};

use plane2d_math::{Point2, Vec2};

use crate::aabb::Aabb;
use crate::circle::Circle;
use crate::intersect;
use crate::line::Line;
use crate::polygon::Polygon;
use crate::rect::Rect;

/// Any of the kernel's shape primitives
///
/// The variant set is closed; matches over shape pairs are exhaustive and
/// checked by the compiler, so adding a primitive forces every dispatch
/// site to be revisited.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Rect(Rect),
    Circle(Circle),
    Polygon(Polygon),
    Line(Line),
}

impl Shape {
    /// Short name of the variant (for logs and error messages)
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Rect(_) => "rect",
            Shape::Circle(_) => "circle",
            Shape::Polygon(_) => "polygon",
            Shape::Line(_) => "line",
        }
    }

    /// Point containment per variant
    ///
    /// Lines have zero area and contain no points.
    pub fn contains_point(&self, point: Point2) -> bool {
        match self {
            Shape::Rect(rect) => rect.contains_point(point),
            Shape::Circle(circle) => circle.contains_point(point),
            Shape::Polygon(polygon) => polygon.contains_point(point),
            Shape::Line(_) => false,
        }
    }

    /// Shape-vs-shape overlap; unsupported pairs return false
    pub fn intersects(&self, other: &Shape) -> bool {
        intersect::shapes_intersect(self, other)
    }

    /// Representative point for spatial indexing
    ///
    /// Rectangle and circle centers, polygon centroid, line midpoint.
    pub fn center(&mut self) -> Point2 {
        match self {
            Shape::Rect(rect) => rect.center(),
            Shape::Circle(circle) => circle.center(),
            Shape::Polygon(polygon) => polygon.centroid(),
            Shape::Line(line) => line.midpoint(),
        }
    }

    /// Axis-aligned bounding box per variant
    pub fn aabb(&mut self) -> Aabb {
        match self {
            Shape::Rect(rect) => rect.aabb(),
            Shape::Circle(circle) => circle.aabb(),
            Shape::Polygon(polygon) => polygon.aabb(),
            Shape::Line(line) => match Aabb::from_points([line.origin(), line.end()]) {
                Some(aabb) => aabb,
                None => Aabb::new(line.origin(), line.origin()),
            },
        }
    }

    /// Translate the shape by an offset
    pub fn translate(&mut self, offset: Vec2) -> &mut Self {
        match self {
            Shape::Rect(rect) => {
                rect.translate(offset);
            }
            Shape::Circle(circle) => {
                circle.translate(offset);
            }
            Shape::Polygon(polygon) => {
                polygon.translate(offset);
            }
            Shape::Line(line) => {
                let origin = line.origin();
                let end = line.end();
                line.set_origin(origin + offset).set_end(end + offset);
            }
        }
        self
    }

    /// Coordinate pairs per variant (debugging/serialization aid)
    pub fn to_coords(&mut self) -> Vec<[f32; 2]> {
        match self {
            Shape::Rect(rect) => rect.to_coords(),
            Shape::Circle(circle) => circle.to_coords(),
            Shape::Polygon(polygon) => polygon.to_coords(),
            Shape::Line(line) => line.to_coords(),
        }
    }
}

impl From<Rect> for Shape {
    fn from(rect: Rect) -> Self {
        Shape::Rect(rect)
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Shape::Circle(circle)
    }
}

impl From<Polygon> for Shape {
    fn from(polygon: Polygon) -> Self {
        Shape::Polygon(polygon)
    }
}

impl From<Line> for Shape {
    fn from(line: Line) -> Self {
        Shape::Line(line)
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Shape::Rect(rect) => rect.fmt(f),
            Shape::Circle(circle) => circle.fmt(f),
            Shape::Polygon(polygon) => polygon.fmt(f),
            Shape::Line(line) => line.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Polygon {
        Polygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(0.0, 4.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_contains_point_dispatch() {
        let rect = Shape::Rect(Rect::from_xywh(0.0, 0.0, 10.0, 10.0));
        assert!(rect.contains_point(Point2::new(5.0, 5.0)));

        let circle = Shape::Circle(Circle::new(Point2::ORIGIN, 2.0).unwrap());
        assert!(circle.contains_point(Point2::new(1.0, 1.0)));

        let poly = Shape::Polygon(triangle());
        assert!(poly.contains_point(Point2::new(1.0, 1.0)));
        assert!(!poly.contains_point(Point2::new(3.9, 3.9)));

        let line = Shape::Line(Line::new(Point2::ORIGIN, Point2::new(5.0, 5.0)));
        assert!(!line.contains_point(Point2::new(1.0, 1.0)));
    }

    #[test]
    fn test_center_dispatch() {
        let mut rect = Shape::Rect(Rect::from_xywh(0.0, 0.0, 10.0, 10.0));
        assert_eq!(rect.center(), Point2::new(5.0, 5.0));

        let mut line = Shape::Line(Line::new(Point2::ORIGIN, Point2::new(4.0, 0.0)));
        assert_eq!(line.center(), Point2::new(2.0, 0.0));
    }

    #[test]
    fn test_aabb_dispatch() {
        let mut line = Shape::Line(Line::new(Point2::new(3.0, -1.0), Point2::new(0.0, 2.0)));
        let aabb = line.aabb();
        assert_eq!(aabb.min, Point2::new(0.0, -1.0));
        assert_eq!(aabb.max, Point2::new(3.0, 2.0));
    }

    #[test]
    fn test_translate_dispatch() {
        let mut shape = Shape::Polygon(triangle());
        shape.translate(Vec2::new(10.0, 10.0));
        let expected = Point2::new(10.0, 10.0) + triangle().centroid().to_vector();
        assert!(shape.center().distance(expected) < 1e-4);
    }

    #[test]
    fn test_kind() {
        assert_eq!(Shape::Rect(Rect::from_xywh(0.0, 0.0, 1.0, 1.0)).kind(), "rect");
        assert_eq!(Shape::Polygon(triangle()).kind(), "polygon");
    }
}
