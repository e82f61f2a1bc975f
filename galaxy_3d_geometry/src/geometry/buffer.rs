/// CPU-side byte buffer holding vertex or index data ready for upload.
///
/// Element count is data size divided by element size. For example a buffer
/// storing 16-bit indices has an element size of 2 bytes, so `size() / 2` is
/// the number of indices.
///
/// There are two ways to fill a GeometryBuffer, and they cannot be mixed on the
/// same instance:
///
/// - Pre-sized: `set_size()` to allocate zeroed storage, then write through `data_mut()`
/// - Appended: `append()` / `append_bytes()` to grow the buffer value by value

use crate::graphics_device::BufferUsage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FillMode {
    Empty,
    Sized,
    Appended,
}

/// Growable byte storage for one vertex binding or the index data
#[derive(Debug, Clone)]
pub struct GeometryBuffer {
    usage: BufferUsage,
    element_size: u32,
    data: Vec<u8>,
    fill_mode: FillMode,
}

impl GeometryBuffer {
    /// Create an empty buffer
    ///
    /// An element size of 0 means the buffer has no meaningful element count.
    pub fn new(usage: BufferUsage, element_size: u32) -> Self {
        Self {
            usage,
            element_size,
            data: Vec::new(),
            fill_mode: FillMode::Empty,
        }
    }

    // ===== ACCESSORS =====

    /// Get buffer usage (Vertex or Index)
    pub fn usage(&self) -> BufferUsage { self.usage }

    /// Get element size in bytes
    pub fn element_size(&self) -> u32 { self.element_size }

    /// Get data size in bytes
    pub fn size(&self) -> u64 { self.data.len() as u64 }

    /// Check if the buffer holds no data
    pub fn is_empty(&self) -> bool { self.data.is_empty() }

    /// Number of whole elements stored (0 if element size is 0)
    pub fn element_count(&self) -> u32 {
        if self.element_size == 0 {
            return 0;
        }
        (self.data.len() / self.element_size as usize) as u32
    }

    /// Raw bytes, ready for upload
    pub fn data(&self) -> &[u8] { &self.data }

    // ===== PRE-SIZED MODE =====

    /// Resize storage to exactly `size` bytes, zero-filling new bytes
    ///
    /// # Panics
    ///
    /// Panics if data was already appended to this buffer.
    pub fn set_size(&mut self, size: usize) {
        assert!(self.fill_mode != FillMode::Appended,
            "GeometryBuffer::set_size called on a buffer filled with append()");
        self.data.resize(size, 0);
        self.fill_mode = FillMode::Sized;
    }

    /// Mutable raw bytes, for filling a pre-sized buffer
    pub fn data_mut(&mut self) -> &mut [u8] { &mut self.data }

    // ===== APPENDED MODE =====

    /// Append the raw representation of a plain-old-data value
    ///
    /// Grows the buffer by exactly `size_of::<T>()` bytes.
    pub fn append<T: bytemuck::Pod>(&mut self, value: &T) {
        self.append_bytes(bytemuck::bytes_of(value));
    }

    /// Append raw bytes at the end of the buffer
    ///
    /// No check is made that `bytes` is a whole number of elements, keeping
    /// the element size consistent is up to the caller.
    ///
    /// # Panics
    ///
    /// Panics if the buffer was pre-sized with `set_size()`.
    pub fn append_bytes(&mut self, bytes: &[u8]) {
        assert!(self.fill_mode != FillMode::Sized,
            "GeometryBuffer::append called on a buffer pre-sized with set_size()");
        self.data.extend_from_slice(bytes);
        self.fill_mode = FillMode::Appended;
    }
}

#[cfg(test)]
#[path = "buffer_tests.rs"]
mod tests;
