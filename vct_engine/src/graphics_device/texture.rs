/// Pixel formats, format negotiation, and image upload descriptor

use crate::error::{Error, Result};

/// Layout of the client-side pixel data handed to the device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelDataFormat {
    /// Single channel
    Red,
    /// Two channels (luminance + alpha equivalent)
    Rg,
    /// Three channels, blue first (native decoder order)
    Bgr,
    /// Four channels, blue first (native decoder order)
    Bgra,
}

impl PixelDataFormat {
    /// Number of channels per pixel
    pub fn channel_count(&self) -> u32 {
        match self {
            PixelDataFormat::Red => 1,
            PixelDataFormat::Rg => 2,
            PixelDataFormat::Bgr => 3,
            PixelDataFormat::Bgra => 4,
        }
    }
}

/// GPU-side storage format of a texture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InternalFormat {
    R8,
    Rg8,
    Rgb8,
    Rgba8,
}

impl InternalFormat {
    /// Whether the storage keeps an alpha channel
    pub fn has_alpha(&self) -> bool {
        matches!(self, InternalFormat::Rgba8)
    }
}

/// Encoding of a single channel in the client data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelDataType {
    UnsignedByte,
}

/// Result of format negotiation for a decoded image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PixelLayout {
    /// Client data layout
    pub format: PixelDataFormat,
    /// GPU storage format
    pub internal_format: InternalFormat,
    /// Channel encoding (always unsigned bytes)
    pub data_type: PixelDataType,
}

impl PixelLayout {
    /// Negotiate the GPU layout for a decoded image depth
    ///
    /// | bits | format | internal |
    /// |------|--------|----------|
    /// | 32   | Bgra   | Rgba8    |
    /// | 24   | Bgr    | Rgb8     |
    /// | 16   | Rg     | Rg8      |
    /// | 8    | Red    | R8       |
    ///
    /// # Errors
    ///
    /// Any other depth returns `Error::UnsupportedPixelDepth`.
    pub fn from_bits_per_pixel(bits_per_pixel: u32) -> Result<Self> {
        let (format, internal_format) = match bits_per_pixel {
            32 => (PixelDataFormat::Bgra, InternalFormat::Rgba8),
            24 => (PixelDataFormat::Bgr, InternalFormat::Rgb8),
            16 => (PixelDataFormat::Rg, InternalFormat::Rg8),
            8 => (PixelDataFormat::Red, InternalFormat::R8),
            other => return Err(Error::UnsupportedPixelDepth(other)),
        };

        Ok(Self {
            format,
            internal_format,
            data_type: PixelDataType::UnsignedByte,
        })
    }

    /// Bytes per pixel of the client data
    pub fn bytes_per_pixel(&self) -> u32 {
        self.format.channel_count()
    }

    /// Minimum number of bytes a `width` x `height` image needs
    pub fn image_size(&self, width: u32, height: u32) -> usize {
        width as usize * height as usize * self.bytes_per_pixel() as usize
    }
}

/// Descriptor for a single-level image upload to the bound texture
#[derive(Debug, Clone, Copy)]
pub struct TextureImageDesc<'a> {
    /// Mip level to define (0 = base)
    pub level: u32,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Row stride in pixels, at least `width` (unpack row length)
    pub row_length: u32,
    /// Negotiated pixel layout
    pub layout: PixelLayout,
    /// Pixel rows `row_length` pixels apart, at least
    /// `layout.image_size(row_length, height)` long
    pub data: &'a [u8],
}

#[cfg(test)]
#[path = "texture_tests.rs"]
mod tests;
