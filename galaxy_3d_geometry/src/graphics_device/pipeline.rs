/// Vertex input descriptors handed to the graphics pipeline configuration

use crate::graphics_device::BufferFormat;

/// Primitive topology
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveTopology {
    /// Triangle list
    TriangleList,
    /// Triangle strip
    TriangleStrip,
    /// Line list
    LineList,
    /// Point list
    PointList,
}

/// Index buffer element type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexType {
    /// 16-bit indices (max 65535 vertices)
    U16,
    /// 32-bit indices (max ~4 billion vertices)
    U32,
}

impl IndexType {
    /// Size in bytes of one index element
    pub fn size_bytes(&self) -> u32 {
        match self {
            IndexType::U16 => 2,
            IndexType::U32 => 4,
        }
    }
}

/// Vertex input rate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexInputRate {
    /// Data is per-vertex
    Vertex,
    /// Data is per-instance
    Instance,
}

/// Logical meaning of a vertex attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexSemantic {
    Position,
    Normal,
    Color,
    Tangent,
    Bitangent,
    TexCoord,
}

impl VertexSemantic {
    /// All semantics, in the order meshes expose them
    pub const ALL: [VertexSemantic; 6] = [
        VertexSemantic::Position,
        VertexSemantic::Normal,
        VertexSemantic::Color,
        VertexSemantic::TexCoord,
        VertexSemantic::Tangent,
        VertexSemantic::Bitangent,
    ];

    /// Default format used when an attribute is added without an explicit one
    pub fn default_format(&self) -> BufferFormat {
        match self {
            VertexSemantic::TexCoord => BufferFormat::R32G32_SFLOAT,
            VertexSemantic::Tangent => BufferFormat::R32G32B32A32_SFLOAT,
            _ => BufferFormat::R32G32B32_SFLOAT,
        }
    }
}

/// Vertex attribute description
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexAttribute {
    /// What the attribute carries
    pub semantic: VertexSemantic,
    /// Attribute location in shader
    pub location: u32,
    /// Binding index
    pub binding: u32,
    /// Format of the attribute (data type and component count)
    pub format: BufferFormat,
    /// Offset in bytes from the start of the vertex
    pub offset: u32,
}

impl VertexAttribute {
    /// Size in bytes of one attribute value
    pub fn size_bytes(&self) -> u32 {
        self.format.size_bytes()
    }
}

/// Vertex binding description
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexBinding {
    /// Binding index
    pub binding: u32,
    /// Stride in bytes between consecutive elements
    pub stride: u32,
    /// Input rate (per-vertex or per-instance)
    pub input_rate: VertexInputRate,
}

/// Vertex input layout
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VertexLayout {
    /// Vertex bindings
    pub bindings: Vec<VertexBinding>,
    /// Vertex attributes
    pub attributes: Vec<VertexAttribute>,
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
