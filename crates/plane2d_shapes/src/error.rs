//! Shape error types
//!
//! Construction-time invariant violations are unrecoverable misuse and
//! surface as errors; recoverable invalid input is handled in place by the
//! shape mutators (warn and no-op).

use std::fmt;

/// Error type for fatal shape construction/mutation violations
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeError {
    /// Circle radius must be strictly positive and finite
    InvalidRadius(f32),
    /// Polygons need at least 3 vertices
    TooFewVertices(usize),
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::InvalidRadius(r) => {
                write!(f, "Circle radius must be positive and finite, got {}", r)
            }
            ShapeError::TooFewVertices(n) => {
                write!(f, "Polygon needs at least 3 vertices, got {}", n)
            }
        }
    }
}

impl std::error::Error for ShapeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_radius_display() {
        let err = ShapeError::InvalidRadius(-1.0);
        let msg = format!("{}", err);
        assert!(msg.contains("radius"));
        assert!(msg.contains("-1"));
    }

    #[test]
    fn test_too_few_vertices_display() {
        let err = ShapeError::TooFewVertices(2);
        let msg = format!("{}", err);
        assert!(msg.contains("3 vertices"));
        assert!(msg.contains("got 2"));
    }
}
