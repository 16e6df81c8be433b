/// Sampling state of a 2D texture: filters, wrap modes, border color

use glam::Vec4;

/// Minification filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MinFilter {
    Nearest,
    #[default]
    Linear,
    NearestMipmapNearest,
    LinearMipmapNearest,
    NearestMipmapLinear,
    LinearMipmapLinear,
}

impl MinFilter {
    /// Whether sampling with this filter reads mip levels above 0
    pub fn uses_mipmaps(&self) -> bool {
        !matches!(self, MinFilter::Nearest | MinFilter::Linear)
    }
}

/// Magnification filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MagFilter {
    Nearest,
    #[default]
    Linear,
}

/// Policy for texture coordinates outside [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WrapMode {
    ClampToEdge,
    ClampToBorder,
    MirroredRepeat,
    #[default]
    Repeat,
    MirrorClampToEdge,
}

/// One sampling parameter applied to the bound texture
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SamplerParameter {
    MinFilter(MinFilter),
    MagFilter(MagFilter),
    /// Wrap mode along the S (U) axis
    WrapS(WrapMode),
    /// Wrap mode along the T (V) axis
    WrapT(WrapMode),
    /// RGBA color sampled outside [0, 1] with `WrapMode::ClampToBorder`
    BorderColor(Vec4),
}
