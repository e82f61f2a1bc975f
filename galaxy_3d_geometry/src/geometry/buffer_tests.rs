/// Unit tests for buffer.rs
///
/// Tests both GeometryBuffer usage modes and element counting.

#[cfg(test)]
use crate::geometry::GeometryBuffer;
#[cfg(test)]
use crate::graphics_device::BufferUsage;
#[cfg(test)]
use glam::Vec3;

fn read_u16(data: &[u8]) -> Vec<u16> {
    data.chunks_exact(2).map(|c| u16::from_ne_bytes([c[0], c[1]])).collect()
}

fn read_u32(data: &[u8]) -> Vec<u32> {
    data.chunks_exact(4).map(|c| u32::from_ne_bytes([c[0], c[1], c[2], c[3]])).collect()
}

fn read_f32(data: &[u8]) -> Vec<f32> {
    data.chunks_exact(4).map(|c| f32::from_ne_bytes([c[0], c[1], c[2], c[3]])).collect()
}

// ============================================================================
// CREATION TESTS
// ============================================================================

#[test]
fn test_new_buffer_is_empty() {
    let buffer = GeometryBuffer::new(BufferUsage::Index, 2);

    assert_eq!(buffer.usage(), BufferUsage::Index);
    assert_eq!(buffer.element_size(), 2);
    assert_eq!(buffer.size(), 0);
    assert_eq!(buffer.element_count(), 0);
    assert!(buffer.is_empty());
    assert!(buffer.data().is_empty());
}

// ============================================================================
// APPEND MODE TESTS
// ============================================================================

#[test]
fn test_append_grows_by_value_size() {
    let mut buffer = GeometryBuffer::new(BufferUsage::Index, 2);

    buffer.append(&7u16);
    buffer.append(&65535u16);
    buffer.append(&0u16);

    assert_eq!(buffer.size(), 6);
    assert_eq!(buffer.element_count(), 3);
    assert_eq!(read_u16(buffer.data()), vec![7, 65535, 0]);
}

#[test]
fn test_append_vec3_copies_raw_floats() {
    let mut buffer = GeometryBuffer::new(BufferUsage::Vertex, 12);

    buffer.append(&Vec3::new(1.0, 2.0, 3.0));
    buffer.append(&Vec3::new(-1.0, 0.5, 0.0));

    assert_eq!(buffer.element_count(), 2);
    assert_eq!(read_f32(buffer.data()), vec![1.0, 2.0, 3.0, -1.0, 0.5, 0.0]);
}

#[test]
fn test_append_bytes() {
    let mut buffer = GeometryBuffer::new(BufferUsage::Vertex, 4);

    buffer.append_bytes(&[1, 2, 3, 4, 5, 6]);

    assert_eq!(buffer.size(), 6);
    // Partial trailing element is not counted
    assert_eq!(buffer.element_count(), 1);
    assert_eq!(buffer.data(), &[1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_zero_element_size_has_no_element_count() {
    let mut buffer = GeometryBuffer::new(BufferUsage::Vertex, 0);
    buffer.append(&1.0f32);

    assert_eq!(buffer.size(), 4);
    assert_eq!(buffer.element_count(), 0);
}

// ============================================================================
// PRE-SIZED MODE TESTS
// ============================================================================

#[test]
fn test_set_size_zero_fills() {
    let mut buffer = GeometryBuffer::new(BufferUsage::Index, 4);

    buffer.set_size(8);
    assert_eq!(buffer.data(), &[0u8; 8]);
    assert_eq!(buffer.element_count(), 2);

    buffer.data_mut()[..4].copy_from_slice(&42u32.to_ne_bytes());
    assert_eq!(read_u32(buffer.data()), vec![42, 0]);

    buffer.set_size(4);
    assert_eq!(buffer.size(), 4);
}

#[test]
#[should_panic(expected = "pre-sized")]
fn test_append_after_set_size_panics() {
    let mut buffer = GeometryBuffer::new(BufferUsage::Index, 2);
    buffer.set_size(4);
    buffer.append(&1u16);
}

#[test]
#[should_panic(expected = "filled with append")]
fn test_set_size_after_append_panics() {
    let mut buffer = GeometryBuffer::new(BufferUsage::Index, 2);
    buffer.append(&1u16);
    buffer.set_size(8);
}
