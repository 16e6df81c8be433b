/// GPU-resident 2D texture built from a `RawTexture`.
///
/// A `Texture2D` goes through two states:
///
/// - **Unloaded**: holds the decoded bytes, no GPU object exists.
/// - **Loaded**: owns a GPU texture, the CPU bytes are gone.
///
/// `load` performs the only transition. It negotiates the GPU format from the
/// bit depth, uploads level 0, releases the CPU buffer, optionally builds the
/// mip chain and applies the sampling state. The GPU texture is deleted when
/// the `Texture2D` is dropped.

use std::sync::{Arc, Mutex};
use glam::Vec4;
use crate::error::{Error, Result};
use crate::graphics_device::{
    GraphicsDevice, TextureHandle, TextureImageDesc, PixelLayout,
    SamplerParameter, MinFilter, MagFilter, WrapMode,
};
use crate::resource::{RawTexture, TextureType, TextureTypes};
use crate::{engine_debug, engine_err, engine_error, engine_trace, engine_warn};

// ===== LOAD DESCRIPTOR =====

/// Sampling configuration applied by `Texture2D::load`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextureLoadDesc {
    /// Minification filter (default: LinearMipmapLinear)
    pub min_filter: MinFilter,
    /// Magnification filter (default: Linear)
    pub mag_filter: MagFilter,
    /// Wrap mode along S (default: Repeat)
    pub wrap_s: WrapMode,
    /// Wrap mode along T (default: Repeat)
    pub wrap_t: WrapMode,
    /// Build the full mip chain after upload (default: true)
    pub generate_mipmaps: bool,
    /// Border color, only sent when a wrap axis is ClampToBorder (default: transparent black)
    pub border_color: Vec4,
}

impl Default for TextureLoadDesc {
    fn default() -> Self {
        Self {
            min_filter: MinFilter::LinearMipmapLinear,
            mag_filter: MagFilter::Linear,
            wrap_s: WrapMode::Repeat,
            wrap_t: WrapMode::Repeat,
            generate_mipmaps: true,
            border_color: Vec4::ZERO,
        }
    }
}

impl TextureLoadDesc {
    /// Whether either wrap axis samples the border color
    pub fn uses_border(&self) -> bool {
        self.wrap_s == WrapMode::ClampToBorder || self.wrap_t == WrapMode::ClampToBorder
    }
}

// ===== LOAD STATUS =====

/// Outcome of `Texture2D::load`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    /// The texture was uploaded and now owns this GPU texture
    Uploaded(TextureHandle),
    /// The texture was already loaded; nothing changed
    AlreadyLoaded,
}

impl LoadStatus {
    /// GPU texture name, 0 for `AlreadyLoaded`
    ///
    /// Zero is never a valid texture name, so callers that only keep the raw
    /// value can still tell the two cases apart.
    pub fn raw(&self) -> u32 {
        match self {
            LoadStatus::Uploaded(handle) => handle.get(),
            LoadStatus::AlreadyLoaded => 0,
        }
    }

    /// The new handle, None for `AlreadyLoaded`
    pub fn handle(&self) -> Option<TextureHandle> {
        match self {
            LoadStatus::Uploaded(handle) => Some(*handle),
            LoadStatus::AlreadyLoaded => None,
        }
    }
}

// ===== TEXTURE 2D =====

/// Sampling state applied by a successful `load`
#[derive(Debug, Clone, Copy, PartialEq)]
struct SamplingState {
    min_filter: MinFilter,
    mag_filter: MagFilter,
    wrap_s: WrapMode,
    wrap_t: WrapMode,
    /// Transparent black unless a wrap axis is ClampToBorder
    border_color: Vec4,
    mipmap_generated: bool,
}

impl SamplingState {
    fn from_desc(desc: &TextureLoadDesc) -> Self {
        Self {
            min_filter: desc.min_filter,
            mag_filter: desc.mag_filter,
            wrap_s: desc.wrap_s,
            wrap_t: desc.wrap_t,
            border_color: if desc.uses_border() { desc.border_color } else { Vec4::ZERO },
            mipmap_generated: desc.generate_mipmaps,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum TextureState {
    Unloaded,
    Loaded {
        handle: TextureHandle,
        layout: PixelLayout,
        sampling: SamplingState,
    },
}

/// GPU texture resource
pub struct Texture2D {
    device: Arc<Mutex<dyn GraphicsDevice>>,
    raw: RawTexture,
    state: TextureState,
}

impl Texture2D {
    /// Wrap a decoded image; nothing touches the GPU until `load`
    ///
    /// Sampling state only exists once loaded: its getters return
    /// `Error::NotLoaded` before that.
    pub fn new(device: Arc<Mutex<dyn GraphicsDevice>>, raw: RawTexture) -> Self {
        Self {
            device,
            raw,
            state: TextureState::Unloaded,
        }
    }

    /// Create an unloaded 1x1 texture of a single color tagged with every role
    ///
    /// `rgb` is `[red, green, blue]`.
    pub fn create_solid_color(
        device: Arc<Mutex<dyn GraphicsDevice>>,
        name: impl Into<String>,
        rgb: [u8; 3],
    ) -> Self {
        Self::new(device, RawTexture::create_solid_color(name, rgb))
    }

    /// Upload the image to the GPU and configure sampling
    ///
    /// Returns `LoadStatus::AlreadyLoaded` without touching any state when the
    /// texture already owns a GPU object. On success the CPU pixel buffer has
    /// been released.
    ///
    /// # Errors
    ///
    /// - `Error::UnsupportedPixelDepth` if the bit depth is not 8, 16, 24 or 32
    /// - `Error::InvalidResource` if the pixel bytes are missing, their size
    ///   differs from `RawTexture::expected_size`, or the image is not 2D
    /// - any device error (`OutOfMemory`, `BackendError`); a GPU texture
    ///   created before the failure is deleted again
    pub fn load(&mut self, desc: &TextureLoadDesc) -> Result<LoadStatus> {
        if let TextureState::Loaded { handle, .. } = self.state {
            engine_warn!("vct::Texture2D",
                "Texture '{}' is already loaded as {}, ignoring load", self.raw.filepath, handle);
            return Ok(LoadStatus::AlreadyLoaded);
        }

        let layout = PixelLayout::from_bits_per_pixel(self.raw.bits_per_pixel)
            .inspect_err(|e| engine_error!("vct::Texture2D", "Texture '{}': {}", self.raw.filepath, e))?;
        self.check_pixel_data()?;

        if desc.min_filter.uses_mipmaps() && !desc.generate_mipmaps {
            engine_warn!("vct::Texture2D",
                "Texture '{}' uses {:?} without mipmaps, only level 0 will exist",
                self.raw.filepath, desc.min_filter);
        }

        let mut device = self.device.lock()
            .map_err(|_| engine_err!("vct::Texture2D", "Graphics device lock poisoned"))?;

        let handle = device.create_texture()
            .inspect_err(|e| engine_error!("vct::Texture2D",
                "Cannot create GPU texture for '{}': {}", self.raw.filepath, e))?;

        if let Err(e) = Self::upload_and_configure(&mut *device, handle, layout, &mut self.raw, desc) {
            device.delete_texture(handle);
            engine_error!("vct::Texture2D", "Upload of '{}' failed: {}", self.raw.filepath, e);
            return Err(e);
        }
        drop(device);

        let sampling = SamplingState::from_desc(desc);
        self.state = TextureState::Loaded { handle, layout, sampling };

        engine_debug!("vct::Texture2D",
            "Uploaded '{}' ({}x{}, {:?}) as texture {}{}",
            self.raw.filepath, self.raw.width, self.raw.height, layout.internal_format, handle,
            if sampling.mipmap_generated { " with mipmaps" } else { "" });

        Ok(LoadStatus::Uploaded(handle))
    }

    /// Pixel bytes must be present and hold exactly `line_width * height`
    /// pixels of a single slice
    fn check_pixel_data(&self) -> Result<()> {
        let raw = &self.raw;
        let data = raw.data().ok_or_else(|| {
            let reason = if raw.is_released() { "pixel data already released" } else { "no pixel data" };
            engine_error!("vct::Texture2D", "Texture '{}': {}", raw.filepath, reason);
            Error::InvalidResource(format!("Texture '{}': {}", raw.filepath, reason))
        })?;

        if raw.depth != 1 || raw.line_width < raw.width {
            engine_error!("vct::Texture2D", "Texture '{}': {}x{}x{} with line width {} is not a 2D image",
                raw.filepath, raw.width, raw.height, raw.depth, raw.line_width);
            return Err(Error::InvalidResource(format!(
                "Texture '{}': depth {} and line width {} do not describe a {}x{} 2D image",
                raw.filepath, raw.depth, raw.line_width, raw.width, raw.height
            )));
        }

        let expected = raw.expected_size();
        if data.len() != expected {
            engine_error!("vct::Texture2D", "Texture '{}' has {} bytes, {}x{} at {} bpp needs {}",
                raw.filepath, data.len(), raw.line_width, raw.height, raw.bits_per_pixel, expected);
            return Err(Error::InvalidResource(format!(
                "Texture '{}': {} bytes of pixel data, expected {}", raw.filepath, data.len(), expected
            )));
        }
        Ok(())
    }

    /// Device-side part of `load`, run against the freshly created texture
    fn upload_and_configure(
        device: &mut dyn GraphicsDevice,
        handle: TextureHandle,
        layout: PixelLayout,
        raw: &mut RawTexture,
        desc: &TextureLoadDesc,
    ) -> Result<()> {
        device.bind_texture(handle)?;
        {
            let data = raw.data()
                .ok_or_else(|| Error::InvalidResource(format!("Texture '{}': no pixel data", raw.filepath)))?;
            device.upload_image_2d(&TextureImageDesc {
                level: 0,
                width: raw.width,
                height: raw.height,
                row_length: raw.line_width,
                layout,
                data,
            })?;
        }
        // The GPU holds the only copy from here on
        raw.release();

        if desc.generate_mipmaps {
            device.generate_mipmap()?;
        }

        device.set_sampler_parameter(SamplerParameter::MinFilter(desc.min_filter))?;
        device.set_sampler_parameter(SamplerParameter::MagFilter(desc.mag_filter))?;
        device.set_sampler_parameter(SamplerParameter::WrapS(desc.wrap_s))?;
        device.set_sampler_parameter(SamplerParameter::WrapT(desc.wrap_t))?;

        if desc.uses_border() {
            device.set_sampler_parameter(SamplerParameter::BorderColor(desc.border_color))?;
        }
        Ok(())
    }

    /// Bind this texture to the 2D target for the next draw calls
    ///
    /// # Errors
    ///
    /// `Error::NotLoaded` if `load` has not succeeded yet.
    pub fn bind(&self) -> Result<()> {
        let handle = self.handle()?;
        engine_trace!("vct::Texture2D", "Binding '{}' ({})", self.raw.filepath, handle);

        let mut device = self.device.lock()
            .map_err(|_| engine_err!("vct::Texture2D", "Graphics device lock poisoned"))?;
        device.bind_texture(handle)
    }

    /// GPU texture name
    ///
    /// # Errors
    ///
    /// `Error::NotLoaded` if `load` has not succeeded yet.
    pub fn handle(&self) -> Result<TextureHandle> {
        match self.state {
            TextureState::Loaded { handle, .. } => Ok(handle),
            TextureState::Unloaded => Err(Error::NotLoaded(self.raw.filepath.clone())),
        }
    }

    /// Negotiated GPU layout
    ///
    /// # Errors
    ///
    /// `Error::NotLoaded` if `load` has not succeeded yet.
    pub fn pixel_layout(&self) -> Result<PixelLayout> {
        match self.state {
            TextureState::Loaded { layout, .. } => Ok(layout),
            TextureState::Unloaded => Err(Error::NotLoaded(self.raw.filepath.clone())),
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.state, TextureState::Loaded { .. })
    }

    pub fn filepath(&self) -> &str {
        &self.raw.filepath
    }

    pub fn width(&self) -> u32 {
        self.raw.width
    }

    pub fn height(&self) -> u32 {
        self.raw.height
    }

    pub fn bits_per_pixel(&self) -> u32 {
        self.raw.bits_per_pixel
    }

    fn sampling(&self) -> Result<&SamplingState> {
        match &self.state {
            TextureState::Loaded { sampling, .. } => Ok(sampling),
            TextureState::Unloaded => Err(Error::NotLoaded(self.raw.filepath.clone())),
        }
    }

    /// Minification filter applied by `load`
    ///
    /// # Errors
    ///
    /// `Error::NotLoaded` if `load` has not succeeded yet. The same holds for
    /// the other sampling getters below.
    pub fn min_filter(&self) -> Result<MinFilter> {
        self.sampling().map(|s| s.min_filter)
    }

    pub fn mag_filter(&self) -> Result<MagFilter> {
        self.sampling().map(|s| s.mag_filter)
    }

    pub fn wrap_s(&self) -> Result<WrapMode> {
        self.sampling().map(|s| s.wrap_s)
    }

    pub fn wrap_t(&self) -> Result<WrapMode> {
        self.sampling().map(|s| s.wrap_t)
    }

    /// Border color, transparent black unless a wrap axis is ClampToBorder
    pub fn border_color(&self) -> Result<Vec4> {
        self.sampling().map(|s| s.border_color)
    }

    pub fn mipmap_generated(&self) -> Result<bool> {
        self.sampling().map(|s| s.mipmap_generated)
    }

    /// Semantic roles inherited from the source image
    pub fn texture_types(&self) -> TextureTypes {
        self.raw.texture_types
    }

    pub fn has_type(&self, texture_type: TextureType) -> bool {
        self.raw.texture_types.has(texture_type)
    }

    /// Source image (geometry and roles; pixel bytes are gone once loaded)
    pub fn raw(&self) -> &RawTexture {
        &self.raw
    }
}

impl Drop for Texture2D {
    fn drop(&mut self) {
        if let TextureState::Loaded { handle, .. } = self.state {
            if let Ok(mut device) = self.device.lock() {
                device.delete_texture(handle);
            }
        }
    }
}

impl std::fmt::Debug for Texture2D {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Texture2D")
            .field("filepath", &self.raw.filepath)
            .field("width", &self.raw.width)
            .field("height", &self.raw.height)
            .field("bits_per_pixel", &self.raw.bits_per_pixel)
            .field("state", &self.state)
            .finish()
    }
}

#[cfg(test)]
#[path = "texture_tests.rs"]
mod tests;
