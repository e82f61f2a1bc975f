/// In-memory wire mesh: positions, optional colors and an optional edge index list.

use glam::Vec3;
use crate::geometry::WireMeshVertexData;
use crate::graphics_device::IndexType;
use crate::mesh::{MeshAttributes, WireMeshSource};

/// Wire (edge) mesh container
#[derive(Debug, Clone, Default)]
pub struct WireMesh {
    index_type: Option<IndexType>,
    indices: Vec<u32>,
    positions: Vec<Vec3>,
    colors: Vec<Vec3>,
}

impl WireMesh {
    /// Create an empty mesh (`None` = unindexed, every 2 vertices form an edge)
    pub fn new(index_type: Option<IndexType>) -> Self {
        Self { index_type, ..Default::default() }
    }

    /// Append a position, returns its vertex index
    pub fn append_position(&mut self, value: Vec3) -> u32 {
        self.positions.push(value);
        self.positions.len() as u32 - 1
    }

    pub fn append_color(&mut self, value: Vec3) {
        self.colors.push(value);
    }

    /// Append an edge (ignored on unindexed meshes)
    pub fn append_edge(&mut self, vtx0: u32, vtx1: u32) {
        if self.index_type.is_none() {
            return;
        }
        self.indices.extend_from_slice(&[vtx0, vtx1]);
    }

    /// Flat edge index list
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }
}

impl WireMeshSource for WireMesh {
    fn index_type(&self) -> Option<IndexType> {
        self.index_type
    }

    fn edge_count(&self) -> u32 {
        match self.index_type {
            Some(_) => (self.indices.len() / 2) as u32,
            None => (self.positions.len() / 2) as u32,
        }
    }

    fn vertex_count(&self) -> u32 {
        self.positions.len() as u32
    }

    fn available_attributes(&self) -> MeshAttributes {
        let mut attributes = MeshAttributes::POSITION;
        if !self.colors.is_empty() && self.colors.len() == self.positions.len() {
            attributes |= MeshAttributes::COLOR;
        }
        attributes
    }

    fn edge(&self, index: u32) -> Option<[u32; 2]> {
        if index >= self.edge_count() {
            return None;
        }
        let base = index as usize * 2;
        match self.index_type {
            Some(_) => Some([self.indices[base], self.indices[base + 1]]),
            None => Some([base as u32, base as u32 + 1]),
        }
    }

    fn vertex_data(&self, index: u32) -> Option<WireMeshVertexData> {
        let i = index as usize;
        Some(WireMeshVertexData {
            position: *self.positions.get(i)?,
            color: self.colors.get(i).copied(),
        })
    }
}

#[cfg(test)]
#[path = "wire_mesh_tests.rs"]
mod tests;
