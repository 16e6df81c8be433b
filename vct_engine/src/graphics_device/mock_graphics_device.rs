/// Mock GraphicsDevice for unit tests (no GPU required)
///
/// Keeps a table of texture objects with the state a real driver would hold
/// (level 0 image, mip count, sampling parameters) and records every call
/// so tests can assert on the exact device traffic.

use glam::Vec4;
use rustc_hash::FxHashMap;
use crate::error::{Error, Result};
use crate::graphics_device::{
    GraphicsDevice, TextureHandle, TextureImageDesc, SamplerParameter,
    PixelLayout, MinFilter, MagFilter, WrapMode,
};

// ============================================================================
// Recorded commands
// ============================================================================

/// One recorded device call
#[derive(Debug, Clone, PartialEq)]
pub enum MockCommand {
    CreateTexture(TextureHandle),
    DeleteTexture(TextureHandle),
    BindTexture(TextureHandle),
    UploadImage2D {
        texture: TextureHandle,
        level: u32,
        width: u32,
        height: u32,
        layout: PixelLayout,
    },
    GenerateMipmap(TextureHandle),
    SetSamplerParameter(TextureHandle, SamplerParameter),
}

// ============================================================================
// Mock texture object
// ============================================================================

/// Level 0 image stored by the mock
#[derive(Debug, Clone, PartialEq)]
pub struct MockImage {
    pub width: u32,
    pub height: u32,
    pub layout: PixelLayout,
    /// Copy of the uploaded bytes
    pub data: Vec<u8>,
}

/// Driver-side state of one texture object
#[derive(Debug, Clone, Default)]
pub struct MockTextureObject {
    pub image: Option<MockImage>,
    pub mip_levels: u32,
    pub min_filter: Option<MinFilter>,
    pub mag_filter: Option<MagFilter>,
    pub wrap_s: Option<WrapMode>,
    pub wrap_t: Option<WrapMode>,
    pub border_color: Option<Vec4>,
}

// ============================================================================
// Mock device
// ============================================================================

/// In-memory graphics device
#[derive(Debug)]
pub struct MockGraphicsDevice {
    /// Every call in order
    pub commands: Vec<MockCommand>,
    /// Make the next `create_texture` calls fail with `OutOfMemory`
    pub fail_create: bool,
    /// Make `upload_image_2d` fail with a backend error
    pub fail_upload: bool,
    textures: FxHashMap<TextureHandle, MockTextureObject>,
    bound: Option<TextureHandle>,
    next_name: u32,
}

impl MockGraphicsDevice {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            fail_create: false,
            fail_upload: false,
            textures: FxHashMap::default(),
            bound: None,
            next_name: 1,
        }
    }

    /// Driver state of a live texture
    pub fn texture(&self, handle: TextureHandle) -> Option<&MockTextureObject> {
        self.textures.get(&handle)
    }

    /// Number of texture objects not yet deleted
    pub fn live_texture_count(&self) -> usize {
        self.textures.len()
    }

    /// Texture currently bound to the 2D target
    pub fn bound_texture(&self) -> Option<TextureHandle> {
        self.bound
    }

    /// Number of recorded commands matching a predicate
    pub fn count_commands(&self, predicate: impl Fn(&MockCommand) -> bool) -> usize {
        self.commands.iter().filter(|c| predicate(c)).count()
    }

    fn bound_object(&mut self) -> Result<(TextureHandle, &mut MockTextureObject)> {
        let handle = self.bound
            .ok_or_else(|| Error::BackendError("No texture bound to the 2D target".to_string()))?;
        let object = self.textures.get_mut(&handle)
            .ok_or_else(|| Error::BackendError(format!("Bound texture {} was deleted", handle)))?;
        Ok((handle, object))
    }
}

impl GraphicsDevice for MockGraphicsDevice {
    fn create_texture(&mut self) -> Result<TextureHandle> {
        if self.fail_create {
            return Err(Error::OutOfMemory);
        }

        let handle = TextureHandle::new(self.next_name)
            .ok_or_else(|| Error::BackendError("Texture names exhausted".to_string()))?;
        self.next_name += 1;
        self.textures.insert(handle, MockTextureObject::default());
        self.commands.push(MockCommand::CreateTexture(handle));
        Ok(handle)
    }

    fn delete_texture(&mut self, texture: TextureHandle) {
        self.textures.remove(&texture);
        if self.bound == Some(texture) {
            self.bound = None;
        }
        self.commands.push(MockCommand::DeleteTexture(texture));
    }

    fn bind_texture(&mut self, texture: TextureHandle) -> Result<()> {
        if !self.textures.contains_key(&texture) {
            return Err(Error::BackendError(format!("Texture {} does not exist", texture)));
        }
        self.bound = Some(texture);
        self.commands.push(MockCommand::BindTexture(texture));
        Ok(())
    }

    fn upload_image_2d(&mut self, image: &TextureImageDesc<'_>) -> Result<()> {
        if self.fail_upload {
            return Err(Error::BackendError("Image upload rejected".to_string()));
        }

        if image.row_length < image.width {
            return Err(Error::BackendError(format!(
                "Row length {} shorter than width {}", image.row_length, image.width
            )));
        }
        let size = image.layout.image_size(image.row_length, image.height);
        if image.data.len() < size {
            return Err(Error::BackendError(format!(
                "Upload needs {} bytes, got {}", size, image.data.len()
            )));
        }

        let (handle, object) = self.bound_object()?;
        if image.level == 0 {
            // Stored tightly packed, the way the driver keeps it
            let stride = image.layout.image_size(image.row_length, 1);
            let row = image.layout.image_size(image.width, 1);
            let data = if stride == 0 {
                Vec::new()
            } else {
                image.data[..size].chunks(stride).flat_map(|r| &r[..row]).copied().collect()
            };
            object.image = Some(MockImage {
                width: image.width,
                height: image.height,
                layout: image.layout,
                data,
            });
            object.mip_levels = 1;
        }
        self.commands.push(MockCommand::UploadImage2D {
            texture: handle,
            level: image.level,
            width: image.width,
            height: image.height,
            layout: image.layout,
        });
        Ok(())
    }

    fn generate_mipmap(&mut self) -> Result<()> {
        let (handle, object) = self.bound_object()?;
        let (width, height) = object.image.as_ref()
            .map(|image| (image.width, image.height))
            .ok_or_else(|| Error::BackendError("Mipmap generation without a base level".to_string()))?;

        let largest = width.max(height).max(1);
        object.mip_levels = 32 - largest.leading_zeros();
        self.commands.push(MockCommand::GenerateMipmap(handle));
        Ok(())
    }

    fn set_sampler_parameter(&mut self, parameter: SamplerParameter) -> Result<()> {
        let (handle, object) = self.bound_object()?;
        match parameter {
            SamplerParameter::MinFilter(filter) => object.min_filter = Some(filter),
            SamplerParameter::MagFilter(filter) => object.mag_filter = Some(filter),
            SamplerParameter::WrapS(mode) => object.wrap_s = Some(mode),
            SamplerParameter::WrapT(mode) => object.wrap_t = Some(mode),
            SamplerParameter::BorderColor(color) => object.border_color = Some(color),
        }
        self.commands.push(MockCommand::SetSamplerParameter(handle, parameter));
        Ok(())
    }
}

#[cfg(test)]
#[path = "mock_graphics_device_tests.rs"]
mod tests;
