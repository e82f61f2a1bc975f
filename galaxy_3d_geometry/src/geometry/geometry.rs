//! CPU-side geometry builder.
//!
//! A `Geometry` owns one index buffer and one vertex buffer per binding of its
//! `GeometryOptions`, and grows them through append operations.
//!
//! # Buffers
//!
//! ```text
//! Interleaved (Position + Color, U16)      Planar (Position + Color, U16)
//! ├── index_buffer  [u16...]               ├── index_buffer      [u16...]
//! └── vertex_buffers                       └── vertex_buffers
//!     └── 0: [P C][P C][P C]...                ├── 0: [P][P][P]...
//!                                              └── 1: [C][C][C]...
//! ```
//!
//! Per-attribute appends (`append_position`, `append_color`...) only apply to
//! planar geometries; on interleaved geometries, or for a semantic the options
//! never activated, they silently do nothing.

use glam::{Vec2, Vec3, Vec4};
use rustc_hash::FxHashMap;
use crate::error::{Error, Result};
use crate::geometry::writer::{self, VertexWriter};
use crate::geometry::{
    AttributeValue, GeometryBuffer, GeometryOptions, VertexAttributeLayout, VertexRecord,
};
use crate::graphics_device::{
    BufferUsage, IndexType, PrimitiveTopology, VertexBinding, VertexLayout, VertexSemantic,
};
use crate::mesh::{MeshAttributes, TriMeshSource, WireMeshSource};
use crate::{engine_bail, engine_debug, engine_err, engine_warn};

/// Geometry under construction: index data plus vertex data laid out per `GeometryOptions`
#[derive(Debug, Clone)]
pub struct Geometry {
    /// Frozen copy of the options the geometry was built with
    options: GeometryOptions,

    /// Index data (element size 0 and always empty when there is no index type)
    index_buffer: GeometryBuffer,

    /// One buffer per vertex binding
    vertex_buffers: Vec<GeometryBuffer>,

    /// Semantic to owning vertex buffer
    buffer_indices: FxHashMap<VertexSemantic, usize>,

    /// Buffer whose element count is the vertex count
    counting_buffer: usize,

    writer: &'static dyn VertexWriter,
}

impl Geometry {
    /// Create an empty geometry from options
    ///
    /// # Errors
    ///
    /// - `UnsupportedTopology` if the topology is not TriangleList or LineList
    /// - `InvalidLayout` if the options have no attribute or an inconsistent binding setup
    pub fn new(options: &GeometryOptions) -> Result<Self> {
        match options.topology() {
            PrimitiveTopology::TriangleList | PrimitiveTopology::LineList => {}
            topology => engine_bail!("galaxy3d::Geometry", Error::UnsupportedTopology(topology)),
        }

        if options.attributes().is_empty() {
            engine_bail!("galaxy3d::Geometry", Error::InvalidLayout("Options have no vertex attributes".to_string()));
        }

        let binding_count = options.bindings().len();
        match options.attribute_layout() {
            VertexAttributeLayout::Interleaved if binding_count != 1 => {
                engine_bail!("galaxy3d::Geometry", Error::InvalidLayout(
                    format!("Interleaved layout needs exactly 1 binding, got {}", binding_count)));
            }
            VertexAttributeLayout::Planar if binding_count != options.attributes().len() => {
                engine_bail!("galaxy3d::Geometry", Error::InvalidLayout(
                    format!("Planar layout needs 1 binding per attribute, got {} bindings for {} attributes",
                        binding_count, options.attributes().len())));
            }
            _ => {}
        }

        if let Some(binding) = options.bindings().iter().find(|b| b.stride == 0) {
            engine_bail!("galaxy3d::Geometry", Error::InvalidLayout(
                format!("Binding {} has a stride of 0", binding.binding)));
        }

        let index_element_size = options.index_type().map(|t| t.size_bytes()).unwrap_or(0);
        let index_buffer = GeometryBuffer::new(BufferUsage::Index, index_element_size);

        let vertex_buffers: Vec<GeometryBuffer> = options.bindings().iter()
            .map(|binding| GeometryBuffer::new(BufferUsage::Vertex, binding.stride))
            .collect();

        let buffer_indices: FxHashMap<VertexSemantic, usize> = options.attributes().iter()
            .map(|attribute| (attribute.semantic, attribute.binding as usize))
            .collect();

        let counting_buffer = buffer_indices.get(&VertexSemantic::Position).copied().unwrap_or(0);

        engine_debug!("galaxy3d::Geometry", "Created {:?} geometry: {} attributes, {} vertex buffers, index type {:?}",
            options.attribute_layout(), options.attributes().len(), vertex_buffers.len(), options.index_type());

        Ok(Self {
            options: options.clone(),
            index_buffer,
            vertex_buffers,
            buffer_indices,
            counting_buffer,
            writer: writer::writer_for(options.attribute_layout()),
        })
    }

    /// Create a geometry from options and fill it with a triangle mesh
    ///
    /// # Errors
    ///
    /// - `UnsupportedTopology` if the options topology is not TriangleList
    /// - `MissingVertexAttribute` if the mesh lacks an attribute the options declare
    /// - `InvalidMeshData` if the mesh references a vertex it cannot provide
    pub fn from_tri_mesh<M: TriMeshSource + ?Sized>(options: &GeometryOptions, mesh: &M) -> Result<Self> {
        if options.topology() != PrimitiveTopology::TriangleList {
            engine_bail!("galaxy3d::Geometry", Error::UnsupportedTopology(options.topology()));
        }
        Self::check_mesh_attributes(options, mesh.available_attributes())?;

        let mut geometry = Self::new(options)?;
        geometry.fill_from_tri_mesh(mesh)?;
        Ok(geometry)
    }

    /// Create a geometry from options and fill it with a wire mesh
    ///
    /// # Errors
    ///
    /// - `UnsupportedTopology` if the options topology is not LineList
    /// - `MissingVertexAttribute` if the mesh lacks an attribute the options declare
    /// - `InvalidMeshData` if the mesh references a vertex it cannot provide
    pub fn from_wire_mesh<M: WireMeshSource + ?Sized>(options: &GeometryOptions, mesh: &M) -> Result<Self> {
        if options.topology() != PrimitiveTopology::LineList {
            engine_bail!("galaxy3d::Geometry", Error::UnsupportedTopology(options.topology()));
        }
        Self::check_mesh_attributes(options, mesh.available_attributes())?;

        let mut geometry = Self::new(options)?;
        geometry.fill_from_wire_mesh(mesh)?;
        Ok(geometry)
    }

    /// Create an interleaved geometry holding every attribute the triangle mesh carries
    ///
    /// Uses 32-bit indices if the mesh is indexed, no index data otherwise.
    pub fn from_tri_mesh_default<M: TriMeshSource + ?Sized>(mesh: &M) -> Result<Self> {
        let options = Self::default_options(
            mesh.index_type(),
            mesh.available_attributes(),
            PrimitiveTopology::TriangleList,
        );
        Self::from_tri_mesh(&options, mesh)
    }

    /// Create an interleaved geometry holding every attribute the wire mesh carries
    ///
    /// Uses 32-bit indices if the mesh is indexed, no index data otherwise.
    pub fn from_wire_mesh_default<M: WireMeshSource + ?Sized>(mesh: &M) -> Result<Self> {
        let options = Self::default_options(
            mesh.index_type(),
            mesh.available_attributes(),
            PrimitiveTopology::LineList,
        );
        Self::from_wire_mesh(&options, mesh)
    }

    // ===== ACCESSORS =====

    /// Get the options the geometry was built with
    pub fn options(&self) -> &GeometryOptions {
        &self.options
    }

    /// Get the index type (`None` = no index data)
    pub fn index_type(&self) -> Option<IndexType> {
        self.options.index_type()
    }

    pub fn attribute_layout(&self) -> VertexAttributeLayout {
        self.options.attribute_layout()
    }

    pub fn topology(&self) -> PrimitiveTopology {
        self.options.topology()
    }

    pub fn index_buffer(&self) -> &GeometryBuffer {
        &self.index_buffer
    }

    /// Number of indices (0 when there is no index data)
    pub fn index_count(&self) -> u32 {
        self.index_buffer.element_count()
    }

    pub fn vertex_binding_count(&self) -> usize {
        self.options.bindings().len()
    }

    pub fn vertex_binding(&self, index: usize) -> Option<&VertexBinding> {
        self.options.bindings().get(index)
    }

    /// Vertex input layout for pipeline creation
    pub fn vertex_layout(&self) -> VertexLayout {
        self.options.vertex_layout()
    }

    pub fn vertex_buffer_count(&self) -> usize {
        self.vertex_buffers.len()
    }

    pub fn vertex_buffer(&self, index: usize) -> Option<&GeometryBuffer> {
        self.vertex_buffers.get(index)
    }

    /// Get the vertex buffer holding a semantic
    pub fn vertex_buffer_for(&self, semantic: VertexSemantic) -> Option<&GeometryBuffer> {
        self.buffer_indices.get(&semantic).and_then(|&index| self.vertex_buffers.get(index))
    }

    /// Number of vertices (position buffer count when planar)
    pub fn vertex_count(&self) -> u32 {
        self.vertex_buffers[self.counting_buffer].element_count()
    }

    /// Size in bytes of the largest buffer, index buffer included
    pub fn largest_buffer_size(&self) -> u64 {
        self.vertex_buffers.iter()
            .map(|buffer| buffer.size())
            .fold(self.index_buffer.size(), u64::max)
    }

    // ===== INDEX APPENDS =====

    /// Append the three indices of a triangle, in order
    ///
    /// Indices are truncated to 16 bits for U16 geometries. No-op without index data.
    pub fn append_indices_triangle(&mut self, vtx0: u32, vtx1: u32, vtx2: u32) {
        self.append_indices(&[vtx0, vtx1, vtx2]);
    }

    /// Append the two indices of an edge, in order
    ///
    /// Indices are truncated to 16 bits for U16 geometries. No-op without index data.
    pub fn append_indices_edge(&mut self, vtx0: u32, vtx1: u32) {
        self.append_indices(&[vtx0, vtx1]);
    }

    fn append_indices(&mut self, indices: &[u32]) {
        match self.options.index_type() {
            Some(IndexType::U16) => {
                for &index in indices {
                    self.index_buffer.append(&(index as u16));
                }
            }
            Some(IndexType::U32) => {
                for index in indices {
                    self.index_buffer.append(index);
                }
            }
            None => {}
        }
    }

    // ===== VERTEX APPENDS =====

    /// Append every active attribute of a vertex, returns the new vertex index
    ///
    /// # Panics
    ///
    /// Panics if `vertex` lacks an attribute the geometry layout declares.
    pub fn append_vertex_data<V: VertexRecord>(&mut self, vertex: &V) -> u32 {
        self.writer.write_vertex(
            self.options.attributes(),
            &mut self.vertex_buffers,
            self.counting_buffer,
            vertex,
        )
    }

    /// Append three vertices, plus their indices if the geometry is indexed
    pub fn append_triangle<V: VertexRecord>(&mut self, vtx0: &V, vtx1: &V, vtx2: &V) {
        let n0 = self.append_vertex_data(vtx0);
        let n1 = self.append_vertex_data(vtx1);
        let n2 = self.append_vertex_data(vtx2);

        if self.options.index_type().is_some() {
            self.append_indices_triangle(n0, n1, n2);
        }
    }

    /// Append two vertices, plus their indices if the geometry is indexed
    pub fn append_edge<V: VertexRecord>(&mut self, vtx0: &V, vtx1: &V) {
        let n0 = self.append_vertex_data(vtx0);
        let n1 = self.append_vertex_data(vtx1);

        if self.options.index_type().is_some() {
            self.append_indices_edge(n0, n1);
        }
    }

    // ===== PER-ATTRIBUTE APPENDS (PLANAR ONLY) =====

    /// Append a position, returns its index
    ///
    /// Returns `None` (and appends nothing) if the geometry is interleaved or has no position.
    pub fn append_position(&mut self, value: Vec3) -> Option<u32> {
        self.append_attribute(VertexSemantic::Position, value.into())
    }

    pub fn append_normal(&mut self, value: Vec3) {
        self.append_attribute(VertexSemantic::Normal, value.into());
    }

    pub fn append_color(&mut self, value: Vec3) {
        self.append_attribute(VertexSemantic::Color, value.into());
    }

    pub fn append_tex_coord(&mut self, value: Vec2) {
        self.append_attribute(VertexSemantic::TexCoord, value.into());
    }

    pub fn append_tangent(&mut self, value: Vec4) {
        self.append_attribute(VertexSemantic::Tangent, value.into());
    }

    pub fn append_bitangent(&mut self, value: Vec3) {
        self.append_attribute(VertexSemantic::Bitangent, value.into());
    }

    fn append_attribute(&mut self, semantic: VertexSemantic, value: AttributeValue) -> Option<u32> {
        // Called speculatively per vertex: no-ops stay silent
        if self.options.attribute_layout() != VertexAttributeLayout::Planar {
            return None;
        }
        let (Some(&buffer_index), Some(attribute)) =
            (self.buffer_indices.get(&semantic), self.options.attribute(semantic))
        else {
            return None;
        };

        let buffer = &mut self.vertex_buffers[buffer_index];
        value.write(attribute.format, buffer);
        Some(buffer.element_count() - 1)
    }

    // ===== INTERNAL HELPERS =====

    fn default_options(
        index_type: Option<IndexType>,
        available: MeshAttributes,
        topology: PrimitiveTopology,
    ) -> GeometryOptions {
        let mut options = GeometryOptions::interleaved()
            .with_index_type(index_type.map(|_| IndexType::U32))
            .with_topology(topology);

        for semantic in VertexSemantic::ALL {
            if semantic != VertexSemantic::Position && available.contains(MeshAttributes::from(semantic)) {
                options = options.add_attribute(semantic, semantic.default_format());
            }
        }

        options
    }

    fn check_mesh_attributes(options: &GeometryOptions, available: MeshAttributes) -> Result<()> {
        if let Some(attribute) = options.attributes().iter()
            .find(|a| !available.contains(MeshAttributes::from(a.semantic)))
        {
            engine_bail!("galaxy3d::Geometry", Error::MissingVertexAttribute(attribute.semantic));
        }
        Ok(())
    }

    fn fill_from_tri_mesh<M: TriMeshSource + ?Sized>(&mut self, mesh: &M) -> Result<()> {
        let vertex = |index: u32| mesh.vertex_data(index).ok_or_else(|| engine_err!("galaxy3d::Geometry",
            Error::InvalidMeshData(format!("Triangle mesh has no vertex {}", index))));
        let triangle = |index: u32| mesh.triangle(index).ok_or_else(|| engine_err!("galaxy3d::Geometry",
            Error::InvalidMeshData(format!("Triangle mesh has no triangle {}", index))));

        match (self.options.index_type().is_some(), mesh.index_type().is_some()) {
            // Expand the mesh triangles into unindexed vertices
            (false, true) => {
                for tri in 0..mesh.triangle_count() {
                    for index in triangle(tri)? {
                        self.append_vertex_data(&vertex(index)?);
                    }
                }
            }
            (false, false) => {
                for index in 0..mesh.vertex_count() {
                    self.append_vertex_data(&vertex(index)?);
                }
            }
            (true, true) => {
                let vertex_count = mesh.vertex_count();
                for tri in 0..mesh.triangle_count() {
                    let indices = triangle(tri)?;
                    if let Some(index) = indices.iter().find(|&&index| index >= vertex_count) {
                        engine_bail!("galaxy3d::Geometry", Error::InvalidMeshData(format!(
                            "Triangle {} references vertex {} but the mesh has {} vertices",
                            tri, index, vertex_count)));
                    }
                    let [vtx0, vtx1, vtx2] = indices;
                    self.append_indices_triangle(vtx0, vtx1, vtx2);
                }
                for index in 0..vertex_count {
                    self.append_vertex_data(&vertex(index)?);
                }
            }
            // Every 3 vertices form a triangle
            (true, false) => {
                let vertex_count = mesh.vertex_count();
                let triangle_count = vertex_count / 3;
                for tri in 0..triangle_count {
                    let base = tri * 3;
                    self.append_triangle(&vertex(base)?, &vertex(base + 1)?, &vertex(base + 2)?);
                }
                // Trailing vertices are kept, but no index references them
                if vertex_count % 3 != 0 {
                    engine_warn!("galaxy3d::Geometry",
                        "Triangle mesh has {} vertices, the last {} are not part of any triangle",
                        vertex_count, vertex_count % 3);
                    for index in triangle_count * 3..vertex_count {
                        self.append_vertex_data(&vertex(index)?);
                    }
                }
            }
        }

        engine_debug!("galaxy3d::Geometry", "Filled from triangle mesh: {} vertices, {} indices",
            self.vertex_count(), self.index_count());
        Ok(())
    }

    fn fill_from_wire_mesh<M: WireMeshSource + ?Sized>(&mut self, mesh: &M) -> Result<()> {
        let vertex = |index: u32| mesh.vertex_data(index).ok_or_else(|| engine_err!("galaxy3d::Geometry",
            Error::InvalidMeshData(format!("Wire mesh has no vertex {}", index))));
        let edge = |index: u32| mesh.edge(index).ok_or_else(|| engine_err!("galaxy3d::Geometry",
            Error::InvalidMeshData(format!("Wire mesh has no edge {}", index))));

        match (self.options.index_type().is_some(), mesh.index_type().is_some()) {
            // Expand the mesh edges into unindexed vertices
            (false, true) => {
                for e in 0..mesh.edge_count() {
                    for index in edge(e)? {
                        self.append_vertex_data(&vertex(index)?);
                    }
                }
            }
            (false, false) => {
                for index in 0..mesh.vertex_count() {
                    self.append_vertex_data(&vertex(index)?);
                }
            }
            (true, true) => {
                let vertex_count = mesh.vertex_count();
                for e in 0..mesh.edge_count() {
                    let indices = edge(e)?;
                    if let Some(index) = indices.iter().find(|&&index| index >= vertex_count) {
                        engine_bail!("galaxy3d::Geometry", Error::InvalidMeshData(format!(
                            "Edge {} references vertex {} but the mesh has {} vertices",
                            e, index, vertex_count)));
                    }
                    let [vtx0, vtx1] = indices;
                    self.append_indices_edge(vtx0, vtx1);
                }
                for index in 0..vertex_count {
                    self.append_vertex_data(&vertex(index)?);
                }
            }
            // Every 2 vertices form an edge
            (true, false) => {
                let vertex_count = mesh.vertex_count();
                let edge_count = vertex_count / 2;
                for e in 0..edge_count {
                    let base = e * 2;
                    self.append_edge(&vertex(base)?, &vertex(base + 1)?);
                }
                // A trailing vertex is kept, but no index references it
                if vertex_count % 2 != 0 {
                    engine_warn!("galaxy3d::Geometry",
                        "Wire mesh has {} vertices, the last one is not part of any edge", vertex_count);
                    self.append_vertex_data(&vertex(vertex_count - 1)?);
                }
            }
        }

        engine_debug!("galaxy3d::Geometry", "Filled from wire mesh: {} vertices, {} indices",
            self.vertex_count(), self.index_count());
        Ok(())
    }
}

#[cfg(test)]
#[path = "geometry_tests.rs"]
mod tests;
