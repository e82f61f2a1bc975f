//! Error types for the Galaxy3D geometry builder
//!
//! This module defines the error types returned when building geometry,
//! mostly construction-time layout and mesh-source validation failures.

use std::fmt;
use crate::graphics_device::{PrimitiveTopology, VertexSemantic};

/// Result type for Galaxy3D geometry operations
pub type Result<T> = std::result::Result<T, Error>;

/// Galaxy3D geometry errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Primitive topology not handled by the geometry builder
    UnsupportedTopology(PrimitiveTopology),

    /// Vertex attribute requested by the options but not provided by the mesh source
    MissingVertexAttribute(VertexSemantic),

    /// Vertex attribute added twice to the same options
    DuplicateVertexAttribute(VertexSemantic),

    /// Inconsistent vertex layout (no attributes, bad binding count, zero stride...)
    InvalidLayout(String),

    /// Mesh source referencing a vertex or primitive it cannot provide
    InvalidMeshData(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnsupportedTopology(topology) => write!(f, "Unsupported primitive topology: {:?}", topology),
            Error::MissingVertexAttribute(semantic) => write!(f, "Missing vertex attribute: {:?}", semantic),
            Error::DuplicateVertexAttribute(semantic) => write!(f, "Duplicate vertex attribute: {:?}", semantic),
            Error::InvalidLayout(msg) => write!(f, "Invalid layout: {}", msg),
            Error::InvalidMeshData(msg) => write!(f, "Invalid mesh data: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

// ===== ERROR MACROS =====

/// Log an error at ERROR severity and evaluate to it
///
/// # Example
///
/// ```ignore
/// let err = engine_err!("galaxy3d::Geometry", Error::InvalidLayout("no attributes".to_string()));
/// ```
#[macro_export]
macro_rules! engine_err {
    ($source:expr, $error:expr) => {{
        let error: $crate::galaxy3d::Error = $error;
        $crate::engine_error!($source, "{}", error);
        error
    }};
}

/// Log an error at ERROR severity and return it from the current function
///
/// # Example
///
/// ```ignore
/// engine_bail!("galaxy3d::Geometry", Error::UnsupportedTopology(topology));
/// ```
#[macro_export]
macro_rules! engine_bail {
    ($source:expr, $error:expr) => {
        return Err($crate::engine_err!($source, $error))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
