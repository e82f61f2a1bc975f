/// Graphics device module - formats and vertex input descriptors shared with the GPU side

// Module declarations
pub mod buffer;
pub mod pipeline;

// Re-export from modules
pub use buffer::*;
pub use pipeline::*;
