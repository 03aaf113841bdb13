//! Spatial indexing and allocation reuse for the plane2d kernel
//!
//! Two independent pieces:
//!
//! - [`SpatialHash`] - a uniform-grid broad-phase index mapping positions
//!   to buckets of caller-supplied ids
//! - [`Pool`] - a generic free-list pool for recycling scratch values such
//!   as query result buffers
//!
//! The grid answers "what is near this point" as a fast over-approximation;
//! exact distance filtering stays with the caller.

mod grid;
mod pool;

pub use grid::{GridError, SpatialHash};
pub use pool::Pool;
