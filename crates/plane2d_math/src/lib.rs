//! 2D Mathematics Library
//!
//! This crate provides the scalar, vector, and point types for the plane2d
//! kernel. Everything here is immediate arithmetic with no cached state;
//! the lazy-cached shape primitives live in `plane2d_shapes`.
//!
//! ## Core Types
//!
//! - [`Vec2`] - 2D direction/magnitude vector
//! - [`Point2`] - 2D screen-space position (Y grows downward)
//!
//! ## Conventions
//!
//! Coordinates are screen-space: Y grows downward, so [`Vec2::angle`]
//! inverts y (`atan2(-y, x)`) to keep visual "up" a positive angle.

mod vec2;
mod point2;

pub use vec2::Vec2;
pub use point2::Point2;
