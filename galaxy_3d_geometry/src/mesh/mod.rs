//! Mesh sources
//!
//! Traits a mesh has to implement to be turned into a `Geometry`, plus simple
//! in-memory containers implementing them.

mod tri_mesh;
mod wire_mesh;

pub use tri_mesh::TriMesh;
pub use wire_mesh::WireMesh;

use bitflags::bitflags;
use crate::geometry::{TriMeshVertexData, WireMeshVertexData};
use crate::graphics_device::{IndexType, VertexSemantic};

bitflags! {
    /// Per-vertex attributes a mesh is able to provide
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct MeshAttributes: u32 {
        const POSITION  = 1 << 0;
        const NORMAL    = 1 << 1;
        const COLOR     = 1 << 2;
        const TEX_COORD = 1 << 3;
        const TANGENT   = 1 << 4;
        const BITANGENT = 1 << 5;
    }
}

impl From<VertexSemantic> for MeshAttributes {
    fn from(semantic: VertexSemantic) -> Self {
        match semantic {
            VertexSemantic::Position => MeshAttributes::POSITION,
            VertexSemantic::Normal => MeshAttributes::NORMAL,
            VertexSemantic::Color => MeshAttributes::COLOR,
            VertexSemantic::TexCoord => MeshAttributes::TEX_COORD,
            VertexSemantic::Tangent => MeshAttributes::TANGENT,
            VertexSemantic::Bitangent => MeshAttributes::BITANGENT,
        }
    }
}

/// Triangle mesh readable by `Geometry::from_tri_mesh`
pub trait TriMeshSource {
    /// Index type of the mesh (`None` = every 3 vertices form a triangle)
    fn index_type(&self) -> Option<IndexType>;

    fn triangle_count(&self) -> u32;

    fn vertex_count(&self) -> u32;

    /// Attributes every vertex of the mesh carries
    fn available_attributes(&self) -> MeshAttributes;

    /// Vertex indices of a triangle, in winding order
    fn triangle(&self, index: u32) -> Option<[u32; 3]>;

    fn vertex_data(&self, index: u32) -> Option<TriMeshVertexData>;
}

/// Wire (edge) mesh readable by `Geometry::from_wire_mesh`
pub trait WireMeshSource {
    /// Index type of the mesh (`None` = every 2 vertices form an edge)
    fn index_type(&self) -> Option<IndexType>;

    fn edge_count(&self) -> u32;

    fn vertex_count(&self) -> u32;

    /// Attributes every vertex of the mesh carries
    fn available_attributes(&self) -> MeshAttributes;

    /// Vertex indices of an edge
    fn edge(&self, index: u32) -> Option<[u32; 2]>;

    fn vertex_data(&self, index: u32) -> Option<WireMeshVertexData>;
}
