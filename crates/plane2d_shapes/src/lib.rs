//! 2D shape primitives for the plane2d kernel
//!
//! Every primitive owns its raw geometric parameters (position, size,
//! radius, vertices) and lazily derives the rest (vertices, areas,
//! centroids, bounding boxes) behind the shared [`Cached`] protocol:
//! mutators invalidate, getters refresh at most once per dirty period.
//!
//! ## Types
//!
//! - [`Cached`] - the lazy derived-value cache every shape uses
//! - [`Aabb`] - axis-aligned bounding box value type
//! - [`Rect`], [`Circle`], [`Polygon`], [`Line`] - the primitives
//! - [`Shape`] - closed sum type over the primitive set
//! - [`ShapeError`] - fatal construction/mutation errors
//!
//! Intersection predicates live in [`intersect`]; they operate on raw
//! parameters and borrow shapes immutably.

mod aabb;
mod cache;
mod circle;
mod error;
mod line;
mod polygon;
mod rect;
mod shape;

pub mod intersect;

pub use aabb::Aabb;
pub use cache::Cached;
pub use circle::Circle;
pub use error::ShapeError;
pub use line::Line;
pub use polygon::Polygon;
pub use rect::Rect;
pub use shape::Shape;

// Re-export the math types shapes are built from
pub use plane2d_math::{Point2, Vec2};
