/// CPU-side decoded image: pixel bytes plus geometry and semantic roles.
///
/// A `RawTexture` is produced by the image decoder and consumed by
/// `Texture2D::load`, which copies the bytes to the GPU and releases them.
/// The byte buffer is freed when released or when the value is dropped,
/// whichever comes first. Once released it cannot be refilled.

use crate::resource::{TextureType, TextureTypes};

/// Decoded pixel buffer awaiting GPU upload
#[derive(Debug, Clone, Default)]
pub struct RawTexture {
    /// Identity / debug label, usually the source file path
    pub filepath: String,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Row stride in pixels
    pub line_width: u32,
    /// Number of image slices (1 for 2D images)
    pub depth: u32,
    /// 8, 16, 24 or 32
    pub bits_per_pixel: u32,
    /// Roles this image may serve
    pub texture_types: TextureTypes,
    data: Option<Vec<u8>>,
    released: bool,
}

impl RawTexture {
    /// Create an empty raw texture (no pixel data, zero geometry, depth 1)
    pub fn new(filepath: impl Into<String>) -> Self {
        Self {
            filepath: filepath.into(),
            depth: 1,
            ..Default::default()
        }
    }

    /// Create a raw texture from tightly packed pixels handed over by the decoder
    ///
    /// `line_width` is set to `width` and `depth` to 1.
    pub fn from_pixels(
        filepath: impl Into<String>,
        width: u32,
        height: u32,
        bits_per_pixel: u32,
        data: Vec<u8>,
    ) -> Self {
        Self {
            filepath: filepath.into(),
            width,
            height,
            line_width: width,
            depth: 1,
            bits_per_pixel,
            texture_types: TextureTypes::empty(),
            data: Some(data),
            released: false,
        }
    }

    /// Build a 1x1, 24-bit texture holding a single color
    ///
    /// `rgb` is given as `[red, green, blue]`; the stored pixel uses the
    /// decoder's native order (blue, green, red). The result is tagged with
    /// every semantic role so it can stand in for any material slot.
    pub fn create_solid_color(name: impl Into<String>, rgb: [u8; 3]) -> Self {
        let [red, green, blue] = rgb;
        let mut raw = Self::from_pixels(name, 1, 1, 24, vec![blue, green, red]);
        raw.texture_types = TextureType::ALL.into_iter().collect();
        raw
    }

    /// Set the roles of this texture (builder style)
    pub fn with_types(mut self, texture_types: TextureTypes) -> Self {
        self.texture_types = texture_types;
        self
    }

    /// Pixel bytes, None if never provided or already released
    pub fn data(&self) -> Option<&[u8]> {
        self.data.as_deref()
    }

    /// Whether pixel bytes are currently held
    pub fn has_data(&self) -> bool {
        self.data.is_some()
    }

    /// Whether `release` has freed the buffer
    pub fn is_released(&self) -> bool {
        self.released
    }

    /// Byte count `line_width * height * depth` scaled by the pixel size
    pub fn expected_size(&self) -> usize {
        self.line_width as usize
            * self.height as usize
            * self.depth as usize
            * (self.bits_per_pixel / 8) as usize
    }

    /// Free the pixel bytes now
    ///
    /// Idempotent: calling it on an empty texture does nothing. Geometry and
    /// roles are kept.
    pub fn release(&mut self) {
        if let Some(data) = self.data.take() {
            drop(data);
            self.released = true;
        }
    }
}

#[cfg(test)]
#[path = "raw_texture_tests.rs"]
mod tests;
