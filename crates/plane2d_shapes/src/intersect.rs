//! Shape-vs-shape intersection predicates
//!
//! Free functions over pairs of primitives, plus the dispatch table for the
//! closed [`Shape`] set. All predicates read raw shape parameters only, so
//! they borrow immutably and never touch the derived caches.
//!
//! These are broad containment/overlap tests; contact points, normals, and
//! penetration depths are out of scope for this kernel.

use plane2d_math::Point2;

use crate::circle::Circle;
use crate::rect::Rect;
use crate::shape::Shape;

/// Inclusive AABB overlap test between two rectangles
///
/// Touching edges count as intersecting.
pub fn rects_intersect(a: &Rect, b: &Rect) -> bool {
    a.right() >= b.left() && a.left() <= b.right() && a.bottom() >= b.top() && a.top() <= b.bottom()
}

/// Rectangle-circle overlap test
///
/// Clamps the circle center to the rectangle bounds to find the closest
/// point, then compares squared distance against squared radius.
pub fn rect_intersects_circle(rect: &Rect, circle: &Circle) -> bool {
    let center = circle.center();
    let closest = Point2::new(
        center.x.clamp(rect.left(), rect.right()),
        center.y.clamp(rect.top(), rect.bottom()),
    );
    closest.distance_squared(center) <= circle.radius() * circle.radius()
}

/// Circle-circle overlap test (touching boundaries count as intersecting)
pub fn circles_intersect(a: &Circle, b: &Circle) -> bool {
    let reach = a.radius() + b.radius();
    a.center().distance_squared(b.center()) <= reach * reach
}

/// Pair dispatch over the closed shape set
///
/// Pairs without a supported test (anything involving a polygon or line)
/// return false rather than erroring.
pub fn shapes_intersect(a: &Shape, b: &Shape) -> bool {
    match (a, b) {
        (Shape::Rect(a), Shape::Rect(b)) => rects_intersect(a, b),
        (Shape::Rect(r), Shape::Circle(c)) | (Shape::Circle(c), Shape::Rect(r)) => {
            rect_intersects_circle(r, c)
        }
        (Shape::Circle(a), Shape::Circle(b)) => circles_intersect(a, b),
        // No narrow test exists for these pairs
        (Shape::Polygon(_) | Shape::Line(_), _) | (_, Shape::Polygon(_) | Shape::Line(_)) => false,
    }
}
