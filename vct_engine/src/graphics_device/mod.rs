/// Graphics device module - GPU-side texture types and the device trait

// Module declarations
pub mod graphics_device;
pub mod texture;
pub mod sampler;

// Re-export everything from graphics_device.rs
pub use graphics_device::*;

// Re-export from other modules
pub use texture::*;
pub use sampler::*;

// Mock graphics device for tests (no GPU required)
#[cfg(test)]
pub mod mock_graphics_device;
