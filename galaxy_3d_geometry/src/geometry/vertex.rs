//! Per-vertex records fed to a `Geometry`.
//!
//! A record exposes one optional value per vertex semantic. The geometry pulls the
//! values its layout declares and encodes each one into exactly
//! `format.size_bytes()` bytes.

use glam::{Vec2, Vec3, Vec4};
use crate::geometry::GeometryBuffer;
use crate::graphics_device::{BufferFormat, ComponentType, VertexSemantic};

// ============================================================================
// ATTRIBUTE VALUE
// ============================================================================

/// One attribute value, tagged by its component count
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AttributeValue {
    Float2(Vec2),
    Float3(Vec3),
    Float4(Vec4),
}

impl AttributeValue {
    /// Number of f32 components carried by the value
    pub fn component_count(&self) -> usize {
        match self {
            AttributeValue::Float2(_) => 2,
            AttributeValue::Float3(_) => 3,
            AttributeValue::Float4(_) => 4,
        }
    }

    /// Components padded with zeros to 4
    fn components(&self) -> [f32; 4] {
        match *self {
            AttributeValue::Float2(v) => [v.x, v.y, 0.0, 0.0],
            AttributeValue::Float3(v) => [v.x, v.y, v.z, 0.0],
            AttributeValue::Float4(v) => v.to_array(),
        }
    }

    /// Append the value to `buffer` as exactly `format.size_bytes()` bytes
    ///
    /// Components are written in order, truncated or zero-padded to the format
    /// component count so the bytes always line up with the declared offsets.
    /// Integer formats receive each component converted with an `as` cast
    /// (rounded toward zero, saturated to the integer range), not normalized.
    pub fn write(&self, format: BufferFormat, buffer: &mut GeometryBuffer) {
        let components = self.components();
        let count = format.component_count() as usize;
        let component_size = format.size_bytes() as usize / count;
        let mut encoded = [0u8; 16];

        for (i, &value) in components.iter().take(count).enumerate() {
            let slot = &mut encoded[i * component_size..(i + 1) * component_size];
            match format.component_type() {
                ComponentType::Float32 => slot.copy_from_slice(bytemuck::bytes_of(&value)),
                ComponentType::Sint32 => slot.copy_from_slice(bytemuck::bytes_of(&(value as i32))),
                ComponentType::Uint32 => slot.copy_from_slice(bytemuck::bytes_of(&(value as u32))),
                ComponentType::Sint16 => slot.copy_from_slice(bytemuck::bytes_of(&(value as i16))),
                ComponentType::Uint16 => slot.copy_from_slice(bytemuck::bytes_of(&(value as u16))),
                ComponentType::Sint8 => slot.copy_from_slice(bytemuck::bytes_of(&(value as i8))),
                ComponentType::Uint8 => slot.copy_from_slice(bytemuck::bytes_of(&(value as u8))),
            }
        }

        buffer.append_bytes(&encoded[..format.size_bytes() as usize]);
    }
}

impl From<Vec2> for AttributeValue {
    fn from(value: Vec2) -> Self {
        AttributeValue::Float2(value)
    }
}

impl From<Vec3> for AttributeValue {
    fn from(value: Vec3) -> Self {
        AttributeValue::Float3(value)
    }
}

impl From<Vec4> for AttributeValue {
    fn from(value: Vec4) -> Self {
        AttributeValue::Float4(value)
    }
}

// ============================================================================
// VERTEX RECORD
// ============================================================================

/// Source of per-vertex attribute values
pub trait VertexRecord {
    /// Value for `semantic`, or `None` if the record does not carry it
    fn attribute(&self, semantic: VertexSemantic) -> Option<AttributeValue>;
}

/// Vertex of a triangle mesh
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TriMeshVertexData {
    pub position: Vec3,
    pub normal: Option<Vec3>,
    pub color: Option<Vec3>,
    pub tex_coord: Option<Vec2>,
    pub tangent: Option<Vec4>,
    pub bitangent: Option<Vec3>,
}

impl TriMeshVertexData {
    /// Vertex with a position only
    pub fn new(position: Vec3) -> Self {
        Self { position, ..Default::default() }
    }

    pub fn with_normal(mut self, normal: Vec3) -> Self {
        self.normal = Some(normal);
        self
    }

    pub fn with_color(mut self, color: Vec3) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_tex_coord(mut self, tex_coord: Vec2) -> Self {
        self.tex_coord = Some(tex_coord);
        self
    }

    pub fn with_tangent(mut self, tangent: Vec4) -> Self {
        self.tangent = Some(tangent);
        self
    }

    pub fn with_bitangent(mut self, bitangent: Vec3) -> Self {
        self.bitangent = Some(bitangent);
        self
    }
}

impl VertexRecord for TriMeshVertexData {
    fn attribute(&self, semantic: VertexSemantic) -> Option<AttributeValue> {
        match semantic {
            VertexSemantic::Position => Some(self.position.into()),
            VertexSemantic::Normal => self.normal.map(Into::into),
            VertexSemantic::Color => self.color.map(Into::into),
            VertexSemantic::TexCoord => self.tex_coord.map(Into::into),
            VertexSemantic::Tangent => self.tangent.map(Into::into),
            VertexSemantic::Bitangent => self.bitangent.map(Into::into),
        }
    }
}

/// Vertex of a wire (edge) mesh
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WireMeshVertexData {
    pub position: Vec3,
    pub color: Option<Vec3>,
}

impl WireMeshVertexData {
    /// Vertex with a position only
    pub fn new(position: Vec3) -> Self {
        Self { position, color: None }
    }

    pub fn with_color(mut self, color: Vec3) -> Self {
        self.color = Some(color);
        self
    }
}

impl VertexRecord for WireMeshVertexData {
    fn attribute(&self, semantic: VertexSemantic) -> Option<AttributeValue> {
        match semantic {
            VertexSemantic::Position => Some(self.position.into()),
            VertexSemantic::Color => self.color.map(Into::into),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "vertex_tests.rs"]
mod tests;
