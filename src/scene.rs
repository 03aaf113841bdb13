//! Scene serialization
//!
//! Provides a Scene struct for loading/saving shape collections from RON
//! files, plus validation. Deserialization bypasses the shape constructors,
//! so a loaded scene must be validated before use: a hand-edited file can
//! carry a non-positive circle radius or a two-vertex polygon that
//! [`Circle::new`](plane2d_shapes::Circle::new) and
//! [`Polygon::new`](plane2d_shapes::Polygon::new) would have rejected.

use serde::{Serialize, Deserialize};
use std::path::Path;
use std::fs;
use std::io;

use plane2d_shapes::Shape;

/// A serializable scene: a named collection of shapes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    /// Scene name (for display/debugging)
    pub name: String,
    /// Shapes in this scene
    pub shapes: Vec<Shape>,
}

impl Scene {
    /// Create a new empty scene
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            shapes: Vec::new(),
        }
    }

    /// Load a scene from a RON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SceneLoadError> {
        let contents = fs::read_to_string(path)?;
        let scene = ron::from_str(&contents)?;
        Ok(scene)
    }

    /// Save a scene to a RON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), SceneSaveError> {
        let pretty = ron::ser::PrettyConfig::new()
            .struct_names(true)
            .enumerate_arrays(false);
        let contents = ron::ser::to_string_pretty(self, pretty)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Add a shape to this scene
    pub fn add_shape(&mut self, shape: impl Into<Shape>) {
        self.shapes.push(shape.into());
    }

    /// Validate the scene, returning all errors found
    ///
    /// Re-checks the invariants the shape constructors enforce, since
    /// deserialization does not go through them. Returns an empty vector
    /// when the scene is clean.
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.shapes.is_empty() {
            errors.push(ValidationError::EmptyScene);
        }

        for (index, shape) in self.shapes.iter().enumerate() {
            match shape {
                Shape::Circle(circle) => {
                    let radius = circle.radius();
                    if !(radius.is_finite() && radius > 0.0) {
                        errors.push(ValidationError::InvalidRadius { index, radius });
                    }
                    if !circle.center().is_finite() {
                        errors.push(ValidationError::NonFiniteShape { index });
                    }
                }
                Shape::Polygon(polygon) => {
                    let count = polygon.vertex_count();
                    if count < 3 {
                        errors.push(ValidationError::TooFewVertices { index, count });
                    }
                    if polygon.vertices().iter().any(|v| !v.is_finite()) {
                        errors.push(ValidationError::NonFiniteShape { index });
                    }
                }
                Shape::Rect(rect) => {
                    if !(rect.position().is_finite() && rect.size().is_finite()) {
                        errors.push(ValidationError::NonFiniteShape { index });
                    }
                }
                Shape::Line(line) => {
                    if !(line.origin().is_finite() && line.end().is_finite()) {
                        errors.push(ValidationError::NonFiniteShape { index });
                    }
                }
            }
        }

        errors
    }

    /// Validate and return Result (Ok if no errors, Err with all errors)
    pub fn validate_or_error(&self) -> Result<(), Vec<ValidationError>> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Validation error found in a scene
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Scene has no shapes
    EmptyScene,
    /// Circle radius is zero, negative, or non-finite
    InvalidRadius { index: usize, radius: f32 },
    /// Polygon has fewer than three vertices
    TooFewVertices { index: usize, count: usize },
    /// Shape carries a NaN or infinite coordinate
    NonFiniteShape { index: usize },
}

impl ValidationError {
    /// Index of the offending shape, when the error points at one
    pub fn shape_index(&self) -> Option<usize> {
        match self {
            ValidationError::EmptyScene => None,
            ValidationError::InvalidRadius { index, .. }
            | ValidationError::TooFewVertices { index, .. }
            | ValidationError::NonFiniteShape { index } => Some(*index),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::EmptyScene => write!(f, "Scene has no shapes"),
            ValidationError::InvalidRadius { index, radius } => {
                write!(f, "Shape {}: invalid circle radius {}", index, radius)
            }
            ValidationError::TooFewVertices { index, count } => {
                write!(f, "Shape {}: polygon has {} vertices (minimum 3)", index, count)
            }
            ValidationError::NonFiniteShape { index } => {
                write!(f, "Shape {}: non-finite coordinate", index)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Error loading a scene
#[derive(Debug)]
pub enum SceneLoadError {
    /// IO error (file not found, permission denied, etc.)
    Io(io::Error),
    /// Parse error (invalid RON syntax)
    Parse(ron::error::SpannedError),
}

impl From<io::Error> for SceneLoadError {
    fn from(e: io::Error) -> Self {
        SceneLoadError::Io(e)
    }
}

impl From<ron::error::SpannedError> for SceneLoadError {
    fn from(e: ron::error::SpannedError) -> Self {
        SceneLoadError::Parse(e)
    }
}

impl std::fmt::Display for SceneLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SceneLoadError::Io(e) => write!(f, "IO error: {}", e),
            SceneLoadError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for SceneLoadError {}

/// Error saving a scene
#[derive(Debug)]
pub enum SceneSaveError {
    /// IO error (permission denied, disk full, etc.)
    Io(io::Error),
    /// Serialization error
    Serialize(ron::Error),
}

impl From<io::Error> for SceneSaveError {
    fn from(e: io::Error) -> Self {
        SceneSaveError::Io(e)
    }
}

impl From<ron::Error> for SceneSaveError {
    fn from(e: ron::Error) -> Self {
        SceneSaveError::Serialize(e)
    }
}

impl std::fmt::Display for SceneSaveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SceneSaveError::Io(e) => write!(f, "IO error: {}", e),
            SceneSaveError::Serialize(e) => write!(f, "Serialize error: {}", e),
        }
    }
}

impl std::error::Error for SceneSaveError {}
