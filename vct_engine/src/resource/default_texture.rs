/// Shared fallback texture: solid white, 1x1, every semantic role.
///
/// Anything that has no real texture to bind (missing file, failed upload,
/// material slot left empty) binds the default texture instead. One instance
/// exists per `DefaultTexture` slot; the engine owns the process-wide slot.

use std::sync::{Arc, Mutex, RwLock};
use crate::error::Result;
use crate::graphics_device::GraphicsDevice;
use crate::resource::{Texture2D, TextureLoadDesc};
use crate::{engine_bail, engine_info};

/// Debug label of the default texture
pub const DEFAULT_TEXTURE_NAME: &str = "!defaultTexture";

/// Color of the default texture, `[red, green, blue]`
pub const DEFAULT_TEXTURE_COLOR: [u8; 3] = [255, 255, 255];

/// Lazily created default texture slot
///
/// `get_or_create` builds and uploads the texture on first use. Concurrent
/// first calls are serialized by the write lock and exactly one texture is
/// created; later calls only take the read lock.
pub struct DefaultTexture {
    slot: RwLock<Option<Arc<Texture2D>>>,
}

impl DefaultTexture {
    /// Create an empty slot
    pub const fn new() -> Self {
        Self {
            slot: RwLock::new(None),
        }
    }

    /// Get the default texture, creating and uploading it on first call
    ///
    /// The graphics device mutex must not be held by the caller: the first
    /// call locks it to upload the texture.
    ///
    /// # Errors
    ///
    /// Propagates upload failures. The slot stays empty so a later call can
    /// retry.
    pub fn get_or_create(&self, device: &Arc<Mutex<dyn GraphicsDevice>>) -> Result<Arc<Texture2D>> {
        if let Some(texture) = self.get() {
            return Ok(texture);
        }

        let Ok(mut slot) = self.slot.write() else {
            engine_bail!("vct::DefaultTexture", "Default texture lock poisoned");
        };

        // Another thread may have won the race between the two locks
        if let Some(texture) = slot.as_ref() {
            return Ok(Arc::clone(texture));
        }

        let mut texture = Texture2D::create_solid_color(
            Arc::clone(device),
            DEFAULT_TEXTURE_NAME,
            DEFAULT_TEXTURE_COLOR,
        );
        texture.load(&TextureLoadDesc::default())?;

        let texture = Arc::new(texture);
        *slot = Some(Arc::clone(&texture));

        engine_info!("vct::DefaultTexture", "Default texture created ({})",
            texture.handle().map(|h| h.to_string()).unwrap_or_default());

        Ok(texture)
    }

    /// The default texture if it has been created
    pub fn get(&self) -> Option<Arc<Texture2D>> {
        self.slot.read().ok().and_then(|slot| slot.clone())
    }

    pub fn is_initialized(&self) -> bool {
        self.get().is_some()
    }

    /// Drop the slot's reference
    ///
    /// The GPU texture is deleted once the last outstanding `Arc` is gone.
    pub fn clear(&self) {
        if let Ok(mut slot) = self.slot.write() {
            *slot = None;
        }
    }
}

impl Default for DefaultTexture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "default_texture_tests.rs"]
mod tests;
