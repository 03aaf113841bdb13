//! plane2d - a 2D geometry and spatial indexing kernel
//!
//! This crate ties the kernel together and adds the application layer:
//!
//! - [`AppConfig`] - layered TOML + environment configuration
//! - [`Scene`] - loadable/saveable shape collection with validation
//!
//! The geometry itself lives in the member crates and is re-exported here:
//!
//! - [`Vec2`] / [`Point2`] - vector and point algebra (plane2d_math)
//! - [`Rect`], [`Circle`], [`Polygon`], [`Line`], [`Shape`] - lazily cached
//!   shape primitives (plane2d_shapes)
//! - [`SpatialHash`] / [`Pool`] - uniform-grid broad phase and object
//!   recycling (plane2d_spatial)

pub mod config;
pub mod scene;

pub use config::{AppConfig, ConfigError, DebugConfig, SceneConfig, SpatialConfig};
pub use scene::{Scene, SceneLoadError, SceneSaveError, ValidationError};

// Re-export the kernel types for convenience
pub use plane2d_math::{Point2, Vec2};
pub use plane2d_shapes::{Aabb, Cached, Circle, Line, Polygon, Rect, Shape, ShapeError, intersect};
pub use plane2d_spatial::{GridError, Pool, SpatialHash};
