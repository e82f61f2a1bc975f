//! Geometry building module
//!
//! Accumulates vertex and index data into upload-ready byte buffers according
//! to a `GeometryOptions` layout.

mod buffer;
mod geometry;
mod options;
mod vertex;
mod writer;

pub use buffer::GeometryBuffer;
pub use geometry::Geometry;
pub use options::{GeometryOptions, VertexAttributeLayout};
pub use vertex::{AttributeValue, VertexRecord, TriMeshVertexData, WireMeshVertexData};
