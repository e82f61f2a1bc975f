/// Vertex writers: one per attribute layout, selected once when a Geometry is built.

use std::fmt;
use crate::geometry::{AttributeValue, GeometryBuffer, VertexAttributeLayout, VertexRecord};
use crate::graphics_device::{VertexAttribute, VertexSemantic};

/// Writes whole vertex records into the geometry vertex buffers
pub(crate) trait VertexWriter: fmt::Debug + Send + Sync {
    /// Append `record` and return the index of the new vertex
    ///
    /// `counting_buffer` is the buffer whose element count defines the vertex index.
    fn write_vertex(
        &self,
        attributes: &[VertexAttribute],
        buffers: &mut [GeometryBuffer],
        counting_buffer: usize,
        record: &dyn VertexRecord,
    ) -> u32;
}

/// All attributes written back to back into buffer 0
#[derive(Debug)]
pub(crate) struct InterleavedWriter;

/// Each attribute written into the buffer of its own binding
#[derive(Debug)]
pub(crate) struct PlanarWriter;

static INTERLEAVED_WRITER: InterleavedWriter = InterleavedWriter;
static PLANAR_WRITER: PlanarWriter = PlanarWriter;

/// Writer for an attribute layout
pub(crate) fn writer_for(layout: VertexAttributeLayout) -> &'static dyn VertexWriter {
    match layout {
        VertexAttributeLayout::Interleaved => &INTERLEAVED_WRITER,
        VertexAttributeLayout::Planar => &PLANAR_WRITER,
    }
}

fn required_value(record: &dyn VertexRecord, semantic: VertexSemantic) -> AttributeValue {
    match record.attribute(semantic) {
        Some(value) => value,
        None => panic!("Vertex record has no {:?} data but the geometry layout declares it", semantic),
    }
}

impl VertexWriter for InterleavedWriter {
    fn write_vertex(
        &self,
        attributes: &[VertexAttribute],
        buffers: &mut [GeometryBuffer],
        counting_buffer: usize,
        record: &dyn VertexRecord,
    ) -> u32 {
        let index = buffers[counting_buffer].element_count();
        let buffer = &mut buffers[0];

        // Offsets are the running sum of sizes, so writing in order lands each value at its offset
        for attribute in attributes {
            required_value(record, attribute.semantic).write(attribute.format, buffer);
        }

        index
    }
}

impl VertexWriter for PlanarWriter {
    fn write_vertex(
        &self,
        attributes: &[VertexAttribute],
        buffers: &mut [GeometryBuffer],
        counting_buffer: usize,
        record: &dyn VertexRecord,
    ) -> u32 {
        let index = buffers[counting_buffer].element_count();

        for attribute in attributes {
            let value = required_value(record, attribute.semantic);
            value.write(attribute.format, &mut buffers[attribute.binding as usize]);
        }

        index
    }
}
