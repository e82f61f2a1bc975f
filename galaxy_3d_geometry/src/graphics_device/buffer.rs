/// Buffer usage and vertex attribute formats

/// Buffer usage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferUsage {
    /// Vertex buffer
    Vertex,
    /// Index buffer
    Index,
}

/// Scalar type of one format component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentType {
    Float32,
    Sint32,
    Uint32,
    Sint16,
    Uint16,
    Sint8,
    Uint8,
}

/// Buffer data format for vertex attributes
///
/// Defines the data type and component count for buffer elements.
/// Used for vertex attributes (position, normal, UV, etc.).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(non_camel_case_types)]
pub enum BufferFormat {
    // Float formats (vertex attributes)
    R32_SFLOAT,         // float (4 bytes)
    R32G32_SFLOAT,      // vec2 (8 bytes)
    R32G32B32_SFLOAT,   // vec3 (12 bytes)
    R32G32B32A32_SFLOAT, // vec4 (16 bytes)

    // Integer formats (signed)
    R32_SINT,
    R32G32_SINT,
    R32G32B32_SINT,
    R32G32B32A32_SINT,

    // Integer formats (unsigned)
    R32_UINT,
    R32G32_UINT,
    R32G32B32_UINT,
    R32G32B32A32_UINT,

    // Short formats (signed)
    R16_SINT,
    R16G16_SINT,
    R16G16B16A16_SINT,

    // Short formats (unsigned)
    R16_UINT,
    R16G16_UINT,
    R16G16B16A16_UINT,

    // Byte formats (signed)
    R8_SINT,
    R8G8_SINT,
    R8G8B8A8_SINT,

    // Byte formats (unsigned)
    R8_UINT,
    R8G8_UINT,
    R8G8B8A8_UINT,
}

impl BufferFormat {
    /// Returns size in bytes for this format
    pub fn size_bytes(&self) -> u32 {
        match self {
            // Float formats
            BufferFormat::R32_SFLOAT | BufferFormat::R32_SINT | BufferFormat::R32_UINT => 4,
            BufferFormat::R32G32_SFLOAT | BufferFormat::R32G32_SINT | BufferFormat::R32G32_UINT => 8,
            BufferFormat::R32G32B32_SFLOAT | BufferFormat::R32G32B32_SINT | BufferFormat::R32G32B32_UINT => 12,
            BufferFormat::R32G32B32A32_SFLOAT | BufferFormat::R32G32B32A32_SINT | BufferFormat::R32G32B32A32_UINT => 16,

            // Short formats
            BufferFormat::R16_SINT | BufferFormat::R16_UINT => 2,
            BufferFormat::R16G16_SINT | BufferFormat::R16G16_UINT => 4,
            BufferFormat::R16G16B16A16_SINT | BufferFormat::R16G16B16A16_UINT => 8,

            // Byte formats
            BufferFormat::R8_SINT | BufferFormat::R8_UINT => 1,
            BufferFormat::R8G8_SINT | BufferFormat::R8G8_UINT => 2,
            BufferFormat::R8G8B8A8_SINT | BufferFormat::R8G8B8A8_UINT => 4,
        }
    }

    /// Scalar type of each component
    pub fn component_type(&self) -> ComponentType {
        match self {
            BufferFormat::R32_SFLOAT | BufferFormat::R32G32_SFLOAT
            | BufferFormat::R32G32B32_SFLOAT | BufferFormat::R32G32B32A32_SFLOAT => ComponentType::Float32,

            BufferFormat::R32_SINT | BufferFormat::R32G32_SINT
            | BufferFormat::R32G32B32_SINT | BufferFormat::R32G32B32A32_SINT => ComponentType::Sint32,

            BufferFormat::R32_UINT | BufferFormat::R32G32_UINT
            | BufferFormat::R32G32B32_UINT | BufferFormat::R32G32B32A32_UINT => ComponentType::Uint32,

            BufferFormat::R16_SINT | BufferFormat::R16G16_SINT | BufferFormat::R16G16B16A16_SINT => ComponentType::Sint16,
            BufferFormat::R16_UINT | BufferFormat::R16G16_UINT | BufferFormat::R16G16B16A16_UINT => ComponentType::Uint16,
            BufferFormat::R8_SINT | BufferFormat::R8G8_SINT | BufferFormat::R8G8B8A8_SINT => ComponentType::Sint8,
            BufferFormat::R8_UINT | BufferFormat::R8G8_UINT | BufferFormat::R8G8B8A8_UINT => ComponentType::Uint8,
        }
    }

    /// Number of components (1 to 4)
    pub fn component_count(&self) -> u32 {
        match self {
            BufferFormat::R32_SFLOAT | BufferFormat::R32_SINT | BufferFormat::R32_UINT
            | BufferFormat::R16_SINT | BufferFormat::R16_UINT
            | BufferFormat::R8_SINT | BufferFormat::R8_UINT => 1,

            BufferFormat::R32G32_SFLOAT | BufferFormat::R32G32_SINT | BufferFormat::R32G32_UINT
            | BufferFormat::R16G16_SINT | BufferFormat::R16G16_UINT
            | BufferFormat::R8G8_SINT | BufferFormat::R8G8_UINT => 2,

            BufferFormat::R32G32B32_SFLOAT | BufferFormat::R32G32B32_SINT | BufferFormat::R32G32B32_UINT => 3,

            BufferFormat::R32G32B32A32_SFLOAT | BufferFormat::R32G32B32A32_SINT | BufferFormat::R32G32B32A32_UINT
            | BufferFormat::R16G16B16A16_SINT | BufferFormat::R16G16B16A16_UINT
            | BufferFormat::R8G8B8A8_SINT | BufferFormat::R8G8B8A8_UINT => 4,
        }
    }
}

#[cfg(test)]
#[path = "buffer_tests.rs"]
mod tests;
