/// In-memory triangle mesh: attribute arrays plus an optional triangle index list.

use glam::{Vec2, Vec3, Vec4};
use crate::geometry::TriMeshVertexData;
use crate::graphics_device::IndexType;
use crate::mesh::{MeshAttributes, TriMeshSource};

/// Triangle mesh container
///
/// An attribute counts as available once every position has a matching value.
#[derive(Debug, Clone, Default)]
pub struct TriMesh {
    index_type: Option<IndexType>,
    indices: Vec<u32>,
    positions: Vec<Vec3>,
    normals: Vec<Vec3>,
    colors: Vec<Vec3>,
    tex_coords: Vec<Vec2>,
    tangents: Vec<Vec4>,
    bitangents: Vec<Vec3>,
}

impl TriMesh {
    /// Create an empty mesh (`None` = unindexed, every 3 vertices form a triangle)
    pub fn new(index_type: Option<IndexType>) -> Self {
        Self { index_type, ..Default::default() }
    }

    /// Append a position, returns its vertex index
    pub fn append_position(&mut self, value: Vec3) -> u32 {
        self.positions.push(value);
        self.positions.len() as u32 - 1
    }

    pub fn append_normal(&mut self, value: Vec3) {
        self.normals.push(value);
    }

    pub fn append_color(&mut self, value: Vec3) {
        self.colors.push(value);
    }

    pub fn append_tex_coord(&mut self, value: Vec2) {
        self.tex_coords.push(value);
    }

    pub fn append_tangent(&mut self, value: Vec4) {
        self.tangents.push(value);
    }

    pub fn append_bitangent(&mut self, value: Vec3) {
        self.bitangents.push(value);
    }

    /// Append a triangle (ignored on unindexed meshes)
    pub fn append_triangle(&mut self, vtx0: u32, vtx1: u32, vtx2: u32) {
        if self.index_type.is_none() {
            return;
        }
        self.indices.extend_from_slice(&[vtx0, vtx1, vtx2]);
    }

    /// Flat triangle index list
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    fn complete<T>(&self, values: &[T]) -> bool {
        !values.is_empty() && values.len() == self.positions.len()
    }
}

impl TriMeshSource for TriMesh {
    fn index_type(&self) -> Option<IndexType> {
        self.index_type
    }

    fn triangle_count(&self) -> u32 {
        match self.index_type {
            Some(_) => (self.indices.len() / 3) as u32,
            None => (self.positions.len() / 3) as u32,
        }
    }

    fn vertex_count(&self) -> u32 {
        self.positions.len() as u32
    }

    fn available_attributes(&self) -> MeshAttributes {
        let mut attributes = MeshAttributes::POSITION;
        attributes.set(MeshAttributes::NORMAL, self.complete(&self.normals));
        attributes.set(MeshAttributes::COLOR, self.complete(&self.colors));
        attributes.set(MeshAttributes::TEX_COORD, self.complete(&self.tex_coords));
        attributes.set(MeshAttributes::TANGENT, self.complete(&self.tangents));
        attributes.set(MeshAttributes::BITANGENT, self.complete(&self.bitangents));
        attributes
    }

    fn triangle(&self, index: u32) -> Option<[u32; 3]> {
        if index >= self.triangle_count() {
            return None;
        }
        let base = index as usize * 3;
        match self.index_type {
            Some(_) => Some([self.indices[base], self.indices[base + 1], self.indices[base + 2]]),
            None => Some([base as u32, base as u32 + 1, base as u32 + 2]),
        }
    }

    fn vertex_data(&self, index: u32) -> Option<TriMeshVertexData> {
        let i = index as usize;
        Some(TriMeshVertexData {
            position: *self.positions.get(i)?,
            normal: self.normals.get(i).copied(),
            color: self.colors.get(i).copied(),
            tex_coord: self.tex_coords.get(i).copied(),
            tangent: self.tangents.get(i).copied(),
            bitangent: self.bitangents.get(i).copied(),
        })
    }
}

#[cfg(test)]
#[path = "tri_mesh_tests.rs"]
mod tests;
