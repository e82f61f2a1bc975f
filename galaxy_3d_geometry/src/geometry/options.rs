//! Geometry layout options.
//!
//! `GeometryOptions` describes how a `Geometry` packs its data:
//!
//! - **index_type**: `None` when the geometry carries no index data
//! - **attribute_layout**: interleaved (one binding) or planar (one binding per attribute)
//! - **attributes**: ordered vertex attributes, location = order of addition
//!
//! # Example
//!
//! ```text
//! GeometryOptions::interleaved_u16().add_color(BufferFormat::R32G32B32_SFLOAT)
//!
//! binding 0 (stride 24)
//! ├── location 0: Position  offset 0   R32G32B32_SFLOAT
//! └── location 1: Color     offset 12  R32G32B32_SFLOAT
//! ```

use crate::error::{Error, Result};
use crate::graphics_device::{
    BufferFormat, IndexType, PrimitiveTopology, VertexAttribute, VertexBinding,
    VertexInputRate, VertexLayout, VertexSemantic,
};
use crate::{engine_bail, engine_warn};

/// Physical arrangement of vertex attributes in memory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexAttributeLayout {
    /// All attributes of a vertex stored contiguously in a single buffer
    Interleaved,
    /// Each attribute stored in its own buffer
    Planar,
}

/// Layout description used to build a `Geometry`
///
/// Attribute locations (and planar binding indices) follow the order in which
/// attributes are added:
///
/// ```text
/// add_position() -> location 0
/// add_color()    -> location 1
/// ```
///
/// A `Geometry` keeps its own copy of the options, so changing a value after the
/// geometry was built has no effect on it.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryOptions {
    index_type: Option<IndexType>,
    attribute_layout: VertexAttributeLayout,
    topology: PrimitiveTopology,
    attributes: Vec<VertexAttribute>,
    bindings: Vec<VertexBinding>,
}

impl Default for GeometryOptions {
    fn default() -> Self {
        Self::new(VertexAttributeLayout::Interleaved)
    }
}

impl GeometryOptions {
    /// Create empty options (no index data, no attributes, triangle list)
    pub fn new(attribute_layout: VertexAttributeLayout) -> Self {
        Self {
            index_type: None,
            attribute_layout,
            topology: PrimitiveTopology::TriangleList,
            attributes: Vec::new(),
            bindings: Vec::new(),
        }
    }

    // ===== PRESETS =====

    /// Interleaved layout with a position attribute and no index data
    pub fn interleaved() -> Self {
        Self::new(VertexAttributeLayout::Interleaved).add_position(BufferFormat::R32G32B32_SFLOAT)
    }

    /// Planar layout with a position attribute and no index data
    pub fn planar() -> Self {
        Self::new(VertexAttributeLayout::Planar).add_position(BufferFormat::R32G32B32_SFLOAT)
    }

    /// Interleaved layout with a position attribute and 16-bit indices
    pub fn interleaved_u16() -> Self {
        Self::interleaved().with_index_type(Some(IndexType::U16))
    }

    /// Interleaved layout with a position attribute and 32-bit indices
    pub fn interleaved_u32() -> Self {
        Self::interleaved().with_index_type(Some(IndexType::U32))
    }

    /// Planar layout with a position attribute and 16-bit indices
    pub fn planar_u16() -> Self {
        Self::planar().with_index_type(Some(IndexType::U16))
    }

    /// Planar layout with a position attribute and 32-bit indices
    pub fn planar_u32() -> Self {
        Self::planar().with_index_type(Some(IndexType::U32))
    }

    // ===== BUILDER =====

    /// Set the index type (`None` = no index data)
    pub fn with_index_type(mut self, index_type: Option<IndexType>) -> Self {
        self.index_type = index_type;
        self
    }

    /// Set the primitive topology
    pub fn with_topology(mut self, topology: PrimitiveTopology) -> Self {
        self.topology = topology;
        self
    }

    pub fn add_position(self, format: BufferFormat) -> Self {
        self.add_attribute(VertexSemantic::Position, format)
    }

    pub fn add_normal(self, format: BufferFormat) -> Self {
        self.add_attribute(VertexSemantic::Normal, format)
    }

    pub fn add_color(self, format: BufferFormat) -> Self {
        self.add_attribute(VertexSemantic::Color, format)
    }

    pub fn add_tex_coord(self, format: BufferFormat) -> Self {
        self.add_attribute(VertexSemantic::TexCoord, format)
    }

    pub fn add_tangent(self, format: BufferFormat) -> Self {
        self.add_attribute(VertexSemantic::Tangent, format)
    }

    pub fn add_bitangent(self, format: BufferFormat) -> Self {
        self.add_attribute(VertexSemantic::Bitangent, format)
    }

    /// Add an attribute, chaining style
    ///
    /// A semantic that is already active is reported as a warning and ignored.
    /// Use `try_add_attribute` to get the failure as an error instead.
    pub fn add_attribute(mut self, semantic: VertexSemantic, format: BufferFormat) -> Self {
        if self.has_attribute(semantic) {
            engine_warn!("galaxy3d::GeometryOptions",
                "Vertex attribute {:?} already active, ignoring {:?}", semantic, format);
            return self;
        }
        self.push_attribute(semantic, format);
        self
    }

    // ===== MUTATION =====

    /// Add an attribute
    ///
    /// # Errors
    ///
    /// Returns `Error::DuplicateVertexAttribute` if `semantic` is already active.
    pub fn try_add_attribute(&mut self, semantic: VertexSemantic, format: BufferFormat) -> Result<()> {
        if self.has_attribute(semantic) {
            engine_bail!("galaxy3d::GeometryOptions", Error::DuplicateVertexAttribute(semantic));
        }
        self.push_attribute(semantic, format);
        Ok(())
    }

    /// Set the index type (`None` = no index data)
    pub fn set_index_type(&mut self, index_type: Option<IndexType>) {
        self.index_type = index_type;
    }

    /// Set the primitive topology
    pub fn set_topology(&mut self, topology: PrimitiveTopology) {
        self.topology = topology;
    }

    fn push_attribute(&mut self, semantic: VertexSemantic, format: BufferFormat) {
        let location = self.attributes.len() as u32;
        let size = format.size_bytes();

        let (binding, offset) = match self.attribute_layout {
            VertexAttributeLayout::Interleaved => {
                if self.bindings.is_empty() {
                    self.bindings.push(VertexBinding {
                        binding: 0,
                        stride: 0,
                        input_rate: VertexInputRate::Vertex,
                    });
                }
                let binding = &mut self.bindings[0];
                let offset = binding.stride;
                binding.stride += size;
                (0, offset)
            }
            VertexAttributeLayout::Planar => {
                let binding = self.bindings.len() as u32;
                self.bindings.push(VertexBinding {
                    binding,
                    stride: size,
                    input_rate: VertexInputRate::Vertex,
                });
                (binding, 0)
            }
        };

        self.attributes.push(VertexAttribute {
            semantic,
            location,
            binding,
            format,
            offset,
        });
    }

    // ===== ACCESSORS =====

    /// Get the index type (`None` = no index data)
    pub fn index_type(&self) -> Option<IndexType> {
        self.index_type
    }

    pub fn attribute_layout(&self) -> VertexAttributeLayout {
        self.attribute_layout
    }

    pub fn topology(&self) -> PrimitiveTopology {
        self.topology
    }

    /// Active attributes in order of addition
    pub fn attributes(&self) -> &[VertexAttribute] {
        &self.attributes
    }

    /// Get the attribute bound to a semantic
    pub fn attribute(&self, semantic: VertexSemantic) -> Option<&VertexAttribute> {
        self.attributes.iter().find(|a| a.semantic == semantic)
    }

    pub fn has_attribute(&self, semantic: VertexSemantic) -> bool {
        self.attribute(semantic).is_some()
    }

    /// Vertex bindings (1 when interleaved, 1 per attribute when planar)
    pub fn bindings(&self) -> &[VertexBinding] {
        &self.bindings
    }

    /// Stride of a binding in bytes (0 if the binding does not exist)
    pub fn stride(&self, binding: u32) -> u32 {
        self.bindings.get(binding as usize).map(|b| b.stride).unwrap_or(0)
    }

    /// Vertex input layout for pipeline creation
    pub fn vertex_layout(&self) -> VertexLayout {
        VertexLayout {
            bindings: self.bindings.clone(),
            attributes: self.attributes.clone(),
        }
    }
}

#[cfg(test)]
#[path = "options_tests.rs"]
mod tests;
