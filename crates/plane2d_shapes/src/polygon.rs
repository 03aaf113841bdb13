//! Polygon primitive
//!
//! An ordered vertex loop with lazily derived aggregates: edge vectors,
//! shoelace signed area, weighted centroid, perimeter, bounding box, and a
//! concavity flag. The refresh pass recomputes everything in dependency
//! order (edges first, then the aggregates that read them).

use serde::{Serialize, Deserialize};

use plane2d_math::{Point2, Vec2};

use crate::aabb::Aabb;
use crate::cache::Cached;
use crate::error::ShapeError;

/// Signed areas below this fraction of the squared perimeter count as
/// degenerate; the ratio keeps tiny-but-valid geometry out of the fallback
const DEGENERATE_AREA_RATIO: f32 = 1e-6;

/// A polygon defined by an ordered list of at least 3 vertices
///
/// The polygon owns its vertex storage, so callers cannot mutate it from
/// outside. The "position" of a polygon is its first vertex.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Polygon {
    vertices: Vec<Point2>,
    #[serde(skip)]
    cache: Cached<PolygonDerived>,
}

#[derive(Clone, Debug)]
struct PolygonDerived {
    /// edge[i] = vertices[(i + 1) % n] - vertices[i]
    edges: Vec<Vec2>,
    /// Shoelace sum / 2; the sign encodes winding order
    signed_area: f32,
    centroid: Point2,
    perimeter: f32,
    aabb: Aabb,
    concave: bool,
}

impl Polygon {
    /// Create a new polygon
    ///
    /// Returns [`ShapeError::TooFewVertices`] for fewer than 3 vertices.
    pub fn new(vertices: impl Into<Vec<Point2>>) -> Result<Self, ShapeError> {
        let vertices = vertices.into();
        if vertices.len() < 3 {
            return Err(ShapeError::TooFewVertices(vertices.len()));
        }
        Ok(Self {
            vertices,
            cache: Cached::new(),
        })
    }

    /// The vertex list
    #[inline]
    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    /// Number of vertices
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// The polygon's position, defined as vertex 0
    ///
    /// Deserialization bypasses the constructor, so a polygon loaded from a
    /// malformed file can have no vertices at all; that case reports the
    /// origin instead of panicking.
    #[inline]
    pub fn position(&self) -> Point2 {
        self.vertices.first().copied().unwrap_or(Point2::ORIGIN)
    }

    /// Edge vectors, wrapping: edge i runs from vertex i to vertex i+1
    pub fn edges(&mut self) -> &[Vec2] {
        &self.derived().edges
    }

    /// Signed area (shoelace formula); the sign encodes winding order
    pub fn signed_area(&mut self) -> f32 {
        self.derived().signed_area
    }

    /// Unsigned area
    pub fn area(&mut self) -> f32 {
        self.derived().signed_area.abs()
    }

    /// Signed-area-weighted centroid
    ///
    /// Degenerate (zero-area) polygons report the origin instead of
    /// dividing by zero; a warning is logged during the refresh.
    pub fn centroid(&mut self) -> Point2 {
        self.derived().centroid
    }

    /// Sum of edge lengths
    pub fn perimeter(&mut self) -> f32 {
        self.derived().perimeter
    }

    /// Axis-aligned bounding box over all vertices
    pub fn aabb(&mut self) -> Aabb {
        self.derived().aabb
    }

    /// True when any corner turns against the dominant winding direction
    ///
    /// Triangles are always convex; collinear corners (zero cross product)
    /// never count as a disagreement.
    pub fn is_concave(&mut self) -> bool {
        self.derived().concave
    }

    /// Even-odd ray-casting containment test
    ///
    /// Casts a ray in +x and toggles on every edge whose y-span straddles
    /// the point. Handles concave polygons; self-intersecting polygons and
    /// holes are not supported. The boundary rule is half-open: with the
    /// strict comparisons used here, points on an axis-aligned square's top
    /// and left edges are inside while its bottom and right edges are not.
    pub fn contains_point(&self, point: Point2) -> bool {
        if self.vertices.len() < 3 {
            return false;
        }
        let mut inside = false;
        let mut j = self.vertices.len() - 1;
        for i in 0..self.vertices.len() {
            let vi = self.vertices[i];
            let vj = self.vertices[j];
            if (vi.y > point.y) != (vj.y > point.y) {
                let x_intercept = vi.x + (point.y - vi.y) / (vj.y - vi.y) * (vj.x - vi.x);
                if point.x < x_intercept {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }

    /// Move the polygon so vertex 0 lands on `position`
    ///
    /// All vertices translate by the same delta. Non-finite targets are
    /// rejected with a warning.
    pub fn set_position(&mut self, position: impl Into<Point2>) -> &mut Self {
        let position = position.into();
        if !position.is_finite() {
            log::warn!("Polygon::set_position rejected non-finite position {}", position);
            return self;
        }
        let delta = position - self.position();
        self.translate(delta)
    }

    /// Translate every vertex by an offset
    pub fn translate(&mut self, offset: Vec2) -> &mut Self {
        if !offset.is_finite() {
            log::warn!("Polygon::translate rejected non-finite offset {}", offset);
            return self;
        }
        for v in &mut self.vertices {
            *v += offset;
        }
        self.cache.invalidate();
        self
    }

    /// Rotate about the centroid by `angle` radians
    pub fn rotate_by(&mut self, angle: f32) -> &mut Self {
        let pivot = self.centroid();
        self.rotate_around(angle, pivot)
    }

    /// Rotate about an arbitrary pivot by `angle` radians
    pub fn rotate_around(&mut self, angle: f32, pivot: Point2) -> &mut Self {
        if !(angle.is_finite() && pivot.is_finite()) {
            log::warn!("Polygon::rotate_around rejected non-finite input");
            return self;
        }
        let (sin, cos) = angle.sin_cos();
        for v in &mut self.vertices {
            let d = *v - pivot;
            *v = pivot + Vec2::new(d.x * cos - d.y * sin, d.x * sin + d.y * cos);
        }
        self.cache.invalidate();
        self
    }

    /// Scale about the centroid
    pub fn scale_by(&mut self, factor: f32) -> &mut Self {
        let pivot = self.centroid();
        self.scale_around(factor, pivot)
    }

    /// Scale about an arbitrary pivot
    ///
    /// Zero and non-finite factors are rejected with a warning; a zero
    /// factor would collapse the polygon to a point.
    pub fn scale_around(&mut self, factor: f32, pivot: Point2) -> &mut Self {
        if !(factor.is_finite() && factor != 0.0 && pivot.is_finite()) {
            log::warn!("Polygon::scale_around rejected factor {}", factor);
            return self;
        }
        for v in &mut self.vertices {
            *v = pivot + (*v - pivot) * factor;
        }
        self.cache.invalidate();
        self
    }

    /// Append a vertex to the loop
    pub fn add_vertex(&mut self, vertex: impl Into<Point2>) -> &mut Self {
        let vertex = vertex.into();
        if !vertex.is_finite() {
            log::warn!("Polygon::add_vertex rejected non-finite vertex {}", vertex);
            return self;
        }
        self.vertices.push(vertex);
        self.cache.invalidate();
        self
    }

    /// Remove the vertex at `index`
    ///
    /// Refuses to drop below 3 vertices and refuses invalid indices; both
    /// cases warn and leave the polygon unchanged.
    pub fn remove_vertex(&mut self, index: usize) -> &mut Self {
        if self.vertices.len() <= 3 {
            log::warn!("Polygon::remove_vertex refused: only {} vertices left", self.vertices.len());
            return self;
        }
        if index >= self.vertices.len() {
            log::warn!("Polygon::remove_vertex index {} out of range ({} vertices)", index, self.vertices.len());
            return self;
        }
        self.vertices.remove(index);
        self.cache.invalidate();
        self
    }

    /// Replace the vertex at `index`
    ///
    /// Invalid indices and non-finite coordinates warn and leave the
    /// polygon unchanged.
    pub fn update_vertex(&mut self, index: usize, vertex: impl Into<Point2>) -> &mut Self {
        let vertex = vertex.into();
        if index >= self.vertices.len() {
            log::warn!("Polygon::update_vertex index {} out of range ({} vertices)", index, self.vertices.len());
            return self;
        }
        if !vertex.is_finite() {
            log::warn!("Polygon::update_vertex rejected non-finite vertex {}", vertex);
            return self;
        }
        self.vertices[index] = vertex;
        self.cache.invalidate();
        self
    }

    /// Vertex coordinates as `[x, y]` pairs (debugging/serialization aid)
    pub fn to_coords(&self) -> Vec<[f32; 2]> {
        self.vertices.iter().map(|v| v.to_array()).collect()
    }

    /// Number of derived-state rebuilds performed so far (diagnostic)
    pub fn refresh_count(&self) -> u64 {
        self.cache.refresh_count()
    }

    fn derived(&mut self) -> &PolygonDerived {
        let Self { vertices, cache } = self;
        cache.get_or_refresh(|| Self::derive(vertices))
    }

    /// Recompute all derived fields; edges come first, everything else
    /// reads the raw vertices directly.
    fn derive(vertices: &[Point2]) -> PolygonDerived {
        let n = vertices.len();

        let mut edges = Vec::with_capacity(n);
        for i in 0..n {
            edges.push(vertices[(i + 1) % n] - vertices[i]);
        }

        // Shoelace pass: signed area and the centroid weights share the
        // per-edge determinant a = x_i*y_j - x_j*y_i.
        let mut area_sum = 0.0f32;
        let mut cx = 0.0f32;
        let mut cy = 0.0f32;
        for i in 0..n {
            let p = vertices[i];
            let q = vertices[(i + 1) % n];
            let a = p.x * q.y - q.x * p.y;
            area_sum += a;
            cx += (p.x + q.x) * a;
            cy += (p.y + q.y) * a;
        }
        let signed_area = area_sum * 0.5;

        let perimeter: f32 = edges.iter().map(|e| e.length()).sum();

        // Degeneracy is judged relative to the polygon's own scale so a
        // tiny but well-formed polygon keeps its true centroid.
        let centroid = if signed_area.abs() <= DEGENERATE_AREA_RATIO * perimeter * perimeter {
            log::warn!("Polygon has (near-)zero area; centroid falls back to origin");
            Point2::ORIGIN
        } else {
            Point2::new(cx / (6.0 * signed_area), cy / (6.0 * signed_area))
        };

        let aabb = match Aabb::from_points(vertices.iter().copied()) {
            Some(aabb) => aabb,
            None => Aabb::new(Point2::ORIGIN, Point2::ORIGIN),
        };

        PolygonDerived {
            concave: Self::detect_concavity(vertices),
            edges,
            signed_area,
            centroid,
            perimeter,
            aabb,
        }
    }

    /// A polygon is concave when the corner cross products disagree in sign
    fn detect_concavity(vertices: &[Point2]) -> bool {
        let n = vertices.len();
        if n <= 3 {
            return false;
        }
        let mut reference_sign = 0.0f32;
        for i in 0..n {
            let prev = vertices[(i + n - 1) % n];
            let curr = vertices[i];
            let next = vertices[(i + 1) % n];
            let cross = (curr - prev).cross(next - curr);
            if cross == 0.0 {
                // Collinear corner; carries no winding information
                continue;
            }
            if reference_sign == 0.0 {
                reference_sign = cross.signum();
            } else if cross.signum() != reference_sign {
                return true;
            }
        }
        false
    }
}

impl PartialEq for Polygon {
    fn eq(&self, other: &Self) -> bool {
        self.vertices == other.vertices
    }
}

impl std::fmt::Display for Polygon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.vertices.first() {
            Some(first) => {
                write!(f, "Polygon[{} vertices, first {}]", self.vertices.len(), first)
            }
            None => write!(f, "Polygon[0 vertices]"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    fn unit_square() -> Polygon {
        Polygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_new_rejects_too_few_vertices() {
        assert_eq!(
            Polygon::new(vec![Point2::ORIGIN, Point2::new(1.0, 0.0)]),
            Err(ShapeError::TooFewVertices(2))
        );
        assert!(Polygon::new(vec![
            Point2::ORIGIN,
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 1.0)
        ])
        .is_ok());
    }

    #[test]
    fn test_unit_square_aggregates() {
        let mut square = unit_square();
        assert!((square.area() - 1.0).abs() < EPSILON);
        assert!((square.perimeter() - 4.0).abs() < EPSILON);

        let c = square.centroid();
        assert!((c.x - 0.5).abs() < EPSILON);
        assert!((c.y - 0.5).abs() < EPSILON);

        assert!(!square.is_concave());
    }

    #[test]
    fn test_signed_area_encodes_winding() {
        let mut ccw = unit_square();
        let reversed: Vec<Point2> = ccw.vertices().iter().rev().copied().collect();
        let mut cw = Polygon::new(reversed).unwrap();
        assert!((ccw.signed_area() + cw.signed_area()).abs() < EPSILON);
        assert!((ccw.area() - cw.area()).abs() < EPSILON);
    }

    #[test]
    fn test_edges_wrap() {
        let mut square = unit_square();
        let edges = square.edges().to_vec();
        assert_eq!(edges.len(), 4);
        assert_eq!(edges[0], Vec2::new(1.0, 0.0));
        assert_eq!(edges[3], Vec2::new(0.0, -1.0)); // last edge closes the loop
    }

    #[test]
    fn test_concave_detection() {
        // One reflex corner at (2, 1)
        let mut dented = Polygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(2.0, 1.0),
            Point2::new(4.0, 4.0),
            Point2::new(0.0, 4.0),
        ])
        .unwrap();
        assert!(dented.is_concave());

        // Same outline with the dent removed
        let mut plain = Polygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(4.0, 4.0),
            Point2::new(0.0, 4.0),
        ])
        .unwrap();
        assert!(!plain.is_concave());
    }

    #[test]
    fn test_triangle_always_convex() {
        let mut triangle = Polygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(5.0, 0.0),
            Point2::new(0.0, 5.0),
        ])
        .unwrap();
        assert!(!triangle.is_concave());
    }

    #[test]
    fn test_collinear_corner_ignored() {
        // A square with one edge split by a midpoint vertex
        let mut poly = Polygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(2.0, 2.0),
            Point2::new(0.0, 2.0),
        ])
        .unwrap();
        assert!(!poly.is_concave());
    }

    #[test]
    fn test_contains_point() {
        let mut square = unit_square();
        square.scale_around(10.0, Point2::ORIGIN);
        assert!(square.contains_point(Point2::new(5.0, 5.0)));
        assert!(!square.contains_point(Point2::new(50.0, 50.0)));
        assert!(!square.contains_point(Point2::new(-1.0, 5.0)));
    }

    #[test]
    fn test_contains_point_concave() {
        let poly = Polygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(2.0, 1.0),
            Point2::new(4.0, 4.0),
            Point2::new(0.0, 4.0),
        ])
        .unwrap();
        // Inside the body, but not inside the notch
        assert!(poly.contains_point(Point2::new(1.0, 2.0)));
        assert!(!poly.contains_point(Point2::new(3.9, 0.8)));
    }

    #[test]
    fn test_contains_point_edge_convention() {
        // Half-open rule: for an axis-aligned square the top and left
        // edges are inside, the bottom and right edges are not
        let square = Polygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 10.0),
            Point2::new(0.0, 10.0),
        ])
        .unwrap();
        assert!(square.contains_point(Point2::new(5.0, 0.0))); // top edge
        assert!(square.contains_point(Point2::new(0.0, 5.0))); // left edge
        assert!(!square.contains_point(Point2::new(5.0, 10.0))); // bottom edge
        assert!(!square.contains_point(Point2::new(10.0, 5.0))); // right edge
        assert!(square.contains_point(Point2::new(0.0, 0.0))); // top-left corner
        assert!(!square.contains_point(Point2::new(10.0, 10.0))); // bottom-right corner
    }

    #[test]
    fn test_tiny_polygon_keeps_true_centroid() {
        // Millimeter-scale but well-formed; must not hit the degenerate
        // fallback even though its area is far below any absolute epsilon
        let mut tiny = Polygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(1e-3, 0.0),
            Point2::new(0.0, 1e-3),
        ])
        .unwrap();
        let c = tiny.centroid();
        assert!((c.x - 1e-3 / 3.0).abs() < 1e-7);
        assert!((c.y - 1e-3 / 3.0).abs() < 1e-7);
    }

    #[test]
    fn test_degenerate_centroid_falls_back_to_origin() {
        // All vertices on one line: zero area
        let mut flat = Polygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(2.0, 0.0),
        ])
        .unwrap();
        assert!(flat.area() < EPSILON);
        assert_eq!(flat.centroid(), Point2::ORIGIN);
    }

    #[test]
    fn test_set_position_translates_all_vertices() {
        let mut square = unit_square();
        square.set_position(Point2::new(10.0, 10.0));
        assert_eq!(square.position(), Point2::new(10.0, 10.0));
        assert_eq!(square.vertices()[2], Point2::new(11.0, 11.0));
    }

    #[test]
    fn test_rotate_by_preserves_area_and_centroid() {
        let mut square = unit_square();
        let area_before = square.area();
        let centroid_before = square.centroid();

        square.rotate_by(1.0);
        assert!((square.area() - area_before).abs() < EPSILON);
        let centroid_after = square.centroid();
        assert!((centroid_after.x - centroid_before.x).abs() < EPSILON);
        assert!((centroid_after.y - centroid_before.y).abs() < EPSILON);
    }

    #[test]
    fn test_scale_by_scales_area_quadratically() {
        let mut square = unit_square();
        square.scale_by(3.0);
        assert!((square.area() - 9.0).abs() < EPSILON);
    }

    #[test]
    fn test_scale_rejects_zero_factor() {
        let mut square = unit_square();
        square.scale_by(0.0);
        assert!((square.area() - 1.0).abs() < EPSILON);

        square.scale_by(f32::NAN);
        assert!((square.area() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_remove_vertex_floor() {
        let mut square = unit_square();
        square.remove_vertex(3);
        assert_eq!(square.vertex_count(), 3);

        // Refuses to go below 3
        square.remove_vertex(0);
        assert_eq!(square.vertex_count(), 3);
    }

    #[test]
    fn test_remove_vertex_invalid_index() {
        let mut square = unit_square();
        square.remove_vertex(99);
        assert_eq!(square.vertex_count(), 4);
    }

    #[test]
    fn test_update_vertex_bounds_checked() {
        let mut square = unit_square();
        square.update_vertex(99, Point2::new(5.0, 5.0));
        assert_eq!(square.vertices()[0], Point2::ORIGIN);

        square.update_vertex(0, Point2::new(-1.0, -1.0));
        assert_eq!(square.vertices()[0], Point2::new(-1.0, -1.0));
    }

    #[test]
    fn test_add_vertex_marks_dirty() {
        // Start with half the unit square, then close it into the full square
        let mut poly = Polygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
        ])
        .unwrap();
        assert!((poly.area() - 0.5).abs() < EPSILON);

        poly.add_vertex(Point2::new(0.0, 1.0));
        assert!((poly.area() - 1.0).abs() < EPSILON);
        assert_eq!(poly.vertex_count(), 4);
    }

    #[test]
    fn test_refresh_runs_once_per_dirty_period() {
        let mut square = unit_square();
        square.area();
        square.centroid();
        square.perimeter();
        square.aabb();
        assert_eq!(square.refresh_count(), 1);

        square.translate(Vec2::new(1.0, 0.0));
        square.area();
        square.centroid();
        assert_eq!(square.refresh_count(), 2);
    }

    #[test]
    fn test_aabb() {
        let mut poly = Polygon::new(vec![
            Point2::new(-1.0, 2.0),
            Point2::new(3.0, -2.0),
            Point2::new(5.0, 4.0),
        ])
        .unwrap();
        let aabb = poly.aabb();
        assert_eq!(aabb.min, Point2::new(-1.0, -2.0));
        assert_eq!(aabb.max, Point2::new(5.0, 4.0));
    }

    #[test]
    fn test_clone_is_independent() {
        let mut original = unit_square();
        let clone = original.clone();
        original.update_vertex(0, Point2::new(-5.0, -5.0));
        assert_eq!(clone.vertices()[0], Point2::ORIGIN);
    }
}
