/// GraphicsDevice trait - the GPU seam of the texture subsystem
///
/// The device is owned by whoever created the rendering context (window,
/// GL context, etc.). The texture subsystem only talks to it through this
/// trait, always from the thread that owns the context.

use std::fmt;
use std::num::NonZeroU32;
use crate::error::Result;
use crate::graphics_device::{SamplerParameter, TextureImageDesc};

// ===== TEXTURE HANDLE =====

/// Opaque GPU texture name assigned by the device
///
/// Zero is never a valid texture name, so the handle is non-zero by
/// construction and `Option<TextureHandle>` has no size overhead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TextureHandle(NonZeroU32);

impl TextureHandle {
    /// Wrap a raw device name, returns None for 0
    pub fn new(name: u32) -> Option<Self> {
        NonZeroU32::new(name).map(Self)
    }

    /// Raw device name
    pub fn get(&self) -> u32 {
        self.0.get()
    }
}

impl fmt::Display for TextureHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// ===== GRAPHICS DEVICE TRAIT =====

/// Texture operations of a graphics device
///
/// Follows a bind-to-edit model: `upload_image_2d`, `generate_mipmap` and
/// `set_sampler_parameter` act on the texture currently bound to the 2D
/// target. All calls are synchronous.
pub trait GraphicsDevice: Send + Sync {
    /// Create a new, empty texture object
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfMemory` or `Error::BackendError` if the device
    /// cannot allocate a texture name.
    fn create_texture(&mut self) -> Result<TextureHandle>;

    /// Delete a texture object and its storage
    ///
    /// Deleting the currently bound texture unbinds it.
    fn delete_texture(&mut self, texture: TextureHandle);

    /// Bind a texture to the 2D texture target
    fn bind_texture(&mut self, texture: TextureHandle) -> Result<()>;

    /// Define the image of one mip level of the bound texture
    fn upload_image_2d(&mut self, image: &TextureImageDesc<'_>) -> Result<()>;

    /// Generate the full mip chain of the bound texture from level 0
    fn generate_mipmap(&mut self) -> Result<()>;

    /// Set one sampling parameter on the bound texture
    fn set_sampler_parameter(&mut self, parameter: SamplerParameter) -> Result<()>;
}
