/// Unit tests for vertex.rs
///
/// Tests attribute encoding against formats and the record accessors.

#[cfg(test)]
use glam::{Vec2, Vec3, Vec4};
#[cfg(test)]
use crate::geometry::{AttributeValue, GeometryBuffer, TriMeshVertexData, VertexRecord, WireMeshVertexData};
#[cfg(test)]
use crate::graphics_device::{BufferFormat, BufferUsage, VertexSemantic};

fn read_f32(data: &[u8]) -> Vec<f32> {
    data.chunks_exact(4).map(|c| f32::from_ne_bytes([c[0], c[1], c[2], c[3]])).collect()
}

// ============================================================================
// ATTRIBUTE VALUE TESTS
// ============================================================================

#[test]
fn test_attribute_value_component_count() {
    assert_eq!(AttributeValue::from(Vec2::ZERO).component_count(), 2);
    assert_eq!(AttributeValue::from(Vec3::ZERO).component_count(), 3);
    assert_eq!(AttributeValue::from(Vec4::ZERO).component_count(), 4);
}

#[test]
fn test_write_matching_format() {
    let mut buffer = GeometryBuffer::new(BufferUsage::Vertex, 12);

    AttributeValue::from(Vec3::new(1.0, 2.0, 3.0)).write(BufferFormat::R32G32B32_SFLOAT, &mut buffer);

    assert_eq!(buffer.size(), 12);
    assert_eq!(read_f32(buffer.data()), vec![1.0, 2.0, 3.0]);
}

#[test]
fn test_write_pads_wider_format() {
    let mut buffer = GeometryBuffer::new(BufferUsage::Vertex, 16);

    AttributeValue::from(Vec3::new(0.25, 0.5, 0.75)).write(BufferFormat::R32G32B32A32_SFLOAT, &mut buffer);

    assert_eq!(buffer.size(), 16);
    assert_eq!(read_f32(buffer.data()), vec![0.25, 0.5, 0.75, 0.0]);
}

#[test]
fn test_write_truncates_narrower_format() {
    let mut buffer = GeometryBuffer::new(BufferUsage::Vertex, 8);

    AttributeValue::from(Vec4::new(1.0, 2.0, 3.0, 4.0)).write(BufferFormat::R32G32_SFLOAT, &mut buffer);

    assert_eq!(buffer.size(), 8);
    assert_eq!(read_f32(buffer.data()), vec![1.0, 2.0]);
}

#[test]
fn test_write_size_always_matches_format() {
    let formats = [
        BufferFormat::R8_UINT,
        BufferFormat::R16G16_SINT,
        BufferFormat::R32_SFLOAT,
        BufferFormat::R32G32B32A32_UINT,
    ];

    for format in formats {
        let mut buffer = GeometryBuffer::new(BufferUsage::Vertex, format.size_bytes());
        AttributeValue::from(Vec3::ONE).write(format, &mut buffer);
        assert_eq!(buffer.size(), format.size_bytes() as u64, "Size mismatch for {:?}", format);
        assert_eq!(buffer.element_count(), 1);
    }
}

#[test]
fn test_write_converts_to_unsigned_bytes() {
    let mut buffer = GeometryBuffer::new(BufferUsage::Vertex, 4);

    AttributeValue::from(Vec3::new(255.0, 1.9, 300.0)).write(BufferFormat::R8G8B8A8_UINT, &mut buffer);

    // Rounded toward zero, saturated, missing component padded with 0
    assert_eq!(buffer.data().to_vec(), vec![255u8, 1, 255, 0]);
}

#[test]
fn test_write_converts_to_signed_shorts() {
    let mut buffer = GeometryBuffer::new(BufferUsage::Vertex, 4);

    AttributeValue::from(Vec2::new(-2.5, 40000.0)).write(BufferFormat::R16G16_SINT, &mut buffer);

    let values: Vec<i16> = buffer.data().chunks_exact(2)
        .map(|c| i16::from_ne_bytes([c[0], c[1]]))
        .collect();
    assert_eq!(values, vec![-2, i16::MAX]);
}

#[test]
fn test_write_converts_to_u32() {
    let mut buffer = GeometryBuffer::new(BufferUsage::Vertex, 16);

    AttributeValue::from(Vec4::new(7.0, -1.0, 0.0, 70000.0)).write(BufferFormat::R32G32B32A32_UINT, &mut buffer);

    let values: Vec<u32> = buffer.data().chunks_exact(4)
        .map(|c| u32::from_ne_bytes([c[0], c[1], c[2], c[3]]))
        .collect();
    assert_eq!(values, vec![7, 0, 0, 70000]);
}

// ============================================================================
// VERTEX RECORD TESTS
// ============================================================================

#[test]
fn test_tri_mesh_vertex_data_attributes() {
    let vertex = TriMeshVertexData::new(Vec3::new(1.0, 0.0, 0.0))
        .with_normal(Vec3::Z)
        .with_tex_coord(Vec2::new(0.5, 1.0));

    assert_eq!(vertex.attribute(VertexSemantic::Position), Some(AttributeValue::Float3(Vec3::X)));
    assert_eq!(vertex.attribute(VertexSemantic::Normal), Some(AttributeValue::Float3(Vec3::Z)));
    assert_eq!(vertex.attribute(VertexSemantic::TexCoord), Some(AttributeValue::Float2(Vec2::new(0.5, 1.0))));
    assert_eq!(vertex.attribute(VertexSemantic::Color), None);
    assert_eq!(vertex.attribute(VertexSemantic::Tangent), None);
    assert_eq!(vertex.attribute(VertexSemantic::Bitangent), None);
}

#[test]
fn test_tri_mesh_vertex_data_full() {
    let vertex = TriMeshVertexData::new(Vec3::ZERO)
        .with_color(Vec3::ONE)
        .with_tangent(Vec4::new(1.0, 0.0, 0.0, -1.0))
        .with_bitangent(Vec3::Y);

    assert_eq!(vertex.attribute(VertexSemantic::Color), Some(AttributeValue::Float3(Vec3::ONE)));
    assert_eq!(vertex.attribute(VertexSemantic::Tangent), Some(AttributeValue::Float4(Vec4::new(1.0, 0.0, 0.0, -1.0))));
    assert_eq!(vertex.attribute(VertexSemantic::Bitangent), Some(AttributeValue::Float3(Vec3::Y)));
}

#[test]
fn test_wire_mesh_vertex_data_attributes() {
    let vertex = WireMeshVertexData::new(Vec3::Y).with_color(Vec3::new(1.0, 0.0, 0.0));

    assert_eq!(vertex.attribute(VertexSemantic::Position), Some(AttributeValue::Float3(Vec3::Y)));
    assert_eq!(vertex.attribute(VertexSemantic::Color), Some(AttributeValue::Float3(Vec3::X)));
    assert_eq!(vertex.attribute(VertexSemantic::Normal), None);
    assert_eq!(vertex.attribute(VertexSemantic::TexCoord), None);
}
