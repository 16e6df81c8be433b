/// Central store of loaded textures.
///
/// Textures are addressed by stable slot map keys and indexed by file path
/// so the same image is uploaded only once. Lookups that miss fall back to
/// the default texture, which keeps the render loop drawing instead of
/// failing on a missing asset.

use std::sync::{Arc, Mutex};
use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};
use crate::error::Result;
use crate::graphics_device::GraphicsDevice;
use crate::resource::{RawTexture, Texture2D, TextureLoadDesc};
use crate::{engine_debug, engine_warn};

new_key_type! {
    /// Stable key for a texture within a TextureManager.
    ///
    /// A key stays valid until its own texture is removed.
    pub struct TextureKey;
}

/// Texture manager singleton (managed by Engine)
pub struct TextureManager {
    device: Arc<Mutex<dyn GraphicsDevice>>,
    default_texture: Arc<Texture2D>,
    textures: SlotMap<TextureKey, Arc<Texture2D>>,
    paths: FxHashMap<String, TextureKey>,
}

impl TextureManager {
    /// Create an empty manager uploading to `device`
    ///
    /// `default_texture` is handed out by the `*_or_default` lookups.
    pub fn new(device: Arc<Mutex<dyn GraphicsDevice>>, default_texture: Arc<Texture2D>) -> Self {
        Self {
            device,
            default_texture,
            textures: SlotMap::with_key(),
            paths: FxHashMap::default(),
        }
    }

    /// Upload a decoded image and register it
    ///
    /// If a texture with the same non-empty file path is already registered,
    /// its key is returned and `raw` is dropped without touching the GPU.
    ///
    /// # Errors
    ///
    /// Propagates `Texture2D::load` errors; nothing is registered then.
    pub fn load_texture(&mut self, raw: RawTexture, desc: &TextureLoadDesc) -> Result<TextureKey> {
        if let Some(&key) = self.paths.get(&raw.filepath) {
            engine_debug!("vct::TextureManager", "Texture '{}' already registered", raw.filepath);
            return Ok(key);
        }

        let mut texture = Texture2D::new(Arc::clone(&self.device), raw);
        texture.load(desc)?;

        let path = texture.filepath().to_string();
        let key = self.textures.insert(Arc::new(texture));
        if !path.is_empty() {
            self.paths.insert(path, key);
        }
        Ok(key)
    }

    /// Get a texture by key
    pub fn texture(&self, key: TextureKey) -> Option<&Arc<Texture2D>> {
        self.textures.get(key)
    }

    /// Get a texture by file path
    pub fn texture_by_path(&self, path: &str) -> Option<&Arc<Texture2D>> {
        self.paths.get(path).and_then(|&key| self.textures.get(key))
    }

    /// Get the key registered for a file path
    pub fn texture_key(&self, path: &str) -> Option<TextureKey> {
        self.paths.get(path).copied()
    }

    /// Get a texture by key, or the default texture if the key is stale
    pub fn texture_or_default(&self, key: TextureKey) -> Arc<Texture2D> {
        match self.textures.get(key) {
            Some(texture) => Arc::clone(texture),
            None => {
                engine_warn!("vct::TextureManager", "Unknown texture key {:?}, using default texture", key);
                Arc::clone(&self.default_texture)
            }
        }
    }

    /// Get a texture by file path, or the default texture if none is registered
    pub fn texture_by_path_or_default(&self, path: &str) -> Arc<Texture2D> {
        match self.texture_by_path(path) {
            Some(texture) => Arc::clone(texture),
            None => {
                engine_warn!("vct::TextureManager", "Texture '{}' not loaded, using default texture", path);
                Arc::clone(&self.default_texture)
            }
        }
    }

    /// The fallback texture
    pub fn default_texture(&self) -> &Arc<Texture2D> {
        &self.default_texture
    }

    /// Remove a texture
    ///
    /// Returns the removed texture, or None if the key is stale. The GPU
    /// texture is deleted once the last `Arc` is dropped.
    pub fn remove_texture(&mut self, key: TextureKey) -> Option<Arc<Texture2D>> {
        let texture = self.textures.remove(key)?;
        if self.paths.get(texture.filepath()) == Some(&key) {
            self.paths.remove(texture.filepath());
        }
        Some(texture)
    }

    /// Number of registered textures (the default texture is not counted)
    pub fn texture_count(&self) -> usize {
        self.textures.len()
    }

    /// Remove every registered texture
    pub fn clear(&mut self) {
        self.textures.clear();
        self.paths.clear();
    }
}

#[cfg(test)]
#[path = "texture_manager_tests.rs"]
mod tests;
