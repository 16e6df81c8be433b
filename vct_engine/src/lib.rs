/*!
# VCT Engine

Texture resources for the VCT rendering engine.

This crate turns decoded images into GPU textures through a backend-agnostic
graphics device trait. Backends (OpenGL, test doubles, etc.) implement the
trait; everything above it is platform independent.

## Architecture

- **GraphicsDevice**: Trait over the GPU texture API (create, upload, sample state)
- **RawTexture**: CPU-side decoded image and its semantic roles
- **Texture2D**: GPU texture built from a `RawTexture` with sampling parameters
- **DefaultTexture**: Lazily created 1x1 white fallback texture
- **TextureManager**: Keyed store of loaded textures with default fallback
- **Engine**: Global singletons and logging
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod graphics_device;
pub mod resource;

// Main vct namespace module
pub mod vct {
    // Error types
    pub use crate::error::{Error, Result};

    // Engine singleton
    pub use crate::engine::Engine;

    // Graphics device trait
    pub use crate::graphics_device::GraphicsDevice;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Render sub-module with all device-level types
    pub mod render {
        pub use crate::graphics_device::*;
    }

    // Resource sub-module
    pub mod resource {
        pub use crate::resource::*;
    }
}

// Re-export math library at crate root
pub use glam;
