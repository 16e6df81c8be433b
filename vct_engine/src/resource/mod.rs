//! Resource management module
//!
//! Decoded images, GPU textures built from them, the shared default
//! texture, and the manager that owns loaded textures.

pub mod texture_type;
pub mod raw_texture;
pub mod texture;
pub mod default_texture;
mod texture_manager;

pub use texture_type::{TextureType, TextureTypes};
pub use raw_texture::RawTexture;
pub use texture::{Texture2D, TextureLoadDesc, LoadStatus};
pub use default_texture::{DefaultTexture, DEFAULT_TEXTURE_NAME, DEFAULT_TEXTURE_COLOR};
pub use texture_manager::{TextureManager, TextureKey};
