/*!
# Galaxy 3D Geometry

CPU-side geometry builder for the Galaxy 3D engine.

This crate accumulates vertex and index data into raw byte buffers laid out
exactly as a graphics pipeline consumes them, ready to be copied into GPU
buffers by a renderer backend.

## Architecture

- **GeometryOptions**: Vertex layout description (index type, attributes, interleaved or planar)
- **Geometry**: Index buffer plus one vertex buffer per binding, grown through appends
- **GeometryBuffer**: Growable byte storage with an element size
- **TriMeshSource / WireMeshSource**: Mesh traits a Geometry can be filled from
- **TriMesh / WireMesh**: Simple in-memory mesh containers

No GPU object is created here: the buffers and the `VertexLayout` are handed to
whichever backend uploads them.
*/

// Internal modules
mod error;
pub mod log;
pub mod graphics_device;
pub mod geometry;
pub mod mesh;

// Main galaxy3d namespace module
pub mod galaxy3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
        pub use crate::log::{set_logger, reset_logger, log, log_detailed};
    }

    // Render sub-module with layout and format types
    pub mod render {
        pub use crate::graphics_device::*;
    }

    // Geometry sub-module
    pub mod geometry {
        pub use crate::geometry::*;
    }

    // Mesh sub-module
    pub mod mesh {
        pub use crate::mesh::*;
    }
}

// Re-export math library at crate root
pub use glam;
