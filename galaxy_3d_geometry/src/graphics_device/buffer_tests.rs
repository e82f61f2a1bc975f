//! Unit tests for Buffer module
//!
//! Tests BufferFormat::size_bytes() and component_count(), the size oracle the
//! geometry layout is computed from.

use crate::graphics_device::{BufferFormat, BufferUsage, ComponentType};

const ALL_FORMATS: [BufferFormat; 24] = [
    BufferFormat::R32_SFLOAT,
    BufferFormat::R32G32_SFLOAT,
    BufferFormat::R32G32B32_SFLOAT,
    BufferFormat::R32G32B32A32_SFLOAT,
    BufferFormat::R32_SINT,
    BufferFormat::R32G32_SINT,
    BufferFormat::R32G32B32_SINT,
    BufferFormat::R32G32B32A32_SINT,
    BufferFormat::R32_UINT,
    BufferFormat::R32G32_UINT,
    BufferFormat::R32G32B32_UINT,
    BufferFormat::R32G32B32A32_UINT,
    BufferFormat::R16_SINT,
    BufferFormat::R16G16_SINT,
    BufferFormat::R16G16B16A16_SINT,
    BufferFormat::R16_UINT,
    BufferFormat::R16G16_UINT,
    BufferFormat::R16G16B16A16_UINT,
    BufferFormat::R8_SINT,
    BufferFormat::R8G8_SINT,
    BufferFormat::R8G8B8A8_SINT,
    BufferFormat::R8_UINT,
    BufferFormat::R8G8_UINT,
    BufferFormat::R8G8B8A8_UINT,
];

// ============================================================================
// SIZE TESTS
// ============================================================================

#[test]
fn test_buffer_format_size_bytes_float_formats() {
    assert_eq!(BufferFormat::R32_SFLOAT.size_bytes(), 4);
    assert_eq!(BufferFormat::R32G32_SFLOAT.size_bytes(), 8);
    assert_eq!(BufferFormat::R32G32B32_SFLOAT.size_bytes(), 12);
    assert_eq!(BufferFormat::R32G32B32A32_SFLOAT.size_bytes(), 16);
}

#[test]
fn test_buffer_format_size_bytes_integer_formats() {
    assert_eq!(BufferFormat::R32G32B32_UINT.size_bytes(), 12);
    assert_eq!(BufferFormat::R16G16_SINT.size_bytes(), 4);
    assert_eq!(BufferFormat::R16G16B16A16_UINT.size_bytes(), 8);
    assert_eq!(BufferFormat::R8_SINT.size_bytes(), 1);
    assert_eq!(BufferFormat::R8G8B8A8_UINT.size_bytes(), 4);
}

// ============================================================================
// COMPONENT COUNT TESTS
// ============================================================================

#[test]
fn test_buffer_format_component_count() {
    assert_eq!(BufferFormat::R32_SFLOAT.component_count(), 1);
    assert_eq!(BufferFormat::R32G32_SFLOAT.component_count(), 2);
    assert_eq!(BufferFormat::R32G32B32_SFLOAT.component_count(), 3);
    assert_eq!(BufferFormat::R32G32B32A32_SFLOAT.component_count(), 4);
    assert_eq!(BufferFormat::R8G8B8A8_UINT.component_count(), 4);
    assert_eq!(BufferFormat::R16G16_UINT.component_count(), 2);
}

#[test]
fn test_buffer_format_size_is_whole_components() {
    for format in ALL_FORMATS {
        let components = format.component_count();
        assert!((1..=4).contains(&components), "Bad component count for {:?}", format);
        assert_eq!(format.size_bytes() % components, 0,
                   "Size not a multiple of component count for {:?}", format);
    }
}

#[test]
fn test_buffer_format_component_type() {
    assert_eq!(BufferFormat::R32G32B32_SFLOAT.component_type(), ComponentType::Float32);
    assert_eq!(BufferFormat::R32_SINT.component_type(), ComponentType::Sint32);
    assert_eq!(BufferFormat::R32G32B32A32_UINT.component_type(), ComponentType::Uint32);
    assert_eq!(BufferFormat::R16G16_SINT.component_type(), ComponentType::Sint16);
    assert_eq!(BufferFormat::R16G16B16A16_UINT.component_type(), ComponentType::Uint16);
    assert_eq!(BufferFormat::R8_SINT.component_type(), ComponentType::Sint8);
    assert_eq!(BufferFormat::R8G8B8A8_UINT.component_type(), ComponentType::Uint8);
}

#[test]
fn test_buffer_format_component_size_matches_type() {
    for format in ALL_FORMATS {
        let component_size = format.size_bytes() / format.component_count();
        let expected = match format.component_type() {
            ComponentType::Float32 | ComponentType::Sint32 | ComponentType::Uint32 => 4,
            ComponentType::Sint16 | ComponentType::Uint16 => 2,
            ComponentType::Sint8 | ComponentType::Uint8 => 1,
        };
        assert_eq!(component_size, expected, "Component size mismatch for {:?}", format);
    }
}

// ============================================================================
// BUFFER USAGE TESTS
// ============================================================================

#[test]
fn test_buffer_usage_equality() {
    assert_eq!(BufferUsage::Vertex, BufferUsage::Vertex);
    assert_ne!(BufferUsage::Vertex, BufferUsage::Index);
}
