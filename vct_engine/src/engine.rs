/// VCT Engine - Singleton manager for engine subsystems
///
/// This module provides global singleton management for the graphics device,
/// the texture manager and the shared default texture. It uses thread-safe
/// static storage with RwLock for safe concurrent access.

use std::sync::{OnceLock, RwLock, Arc, Mutex};
use std::time::SystemTime;
use crate::graphics_device::GraphicsDevice;
use crate::resource::{DefaultTexture, Texture2D, TextureManager};
use crate::error::{Result, Error};
use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};

// ===== INTERNAL STATE =====

/// Global engine state storage
static ENGINE_STATE: OnceLock<EngineState> = OnceLock::new();

/// Global logger (initialized with DefaultLogger)
static LOGGER: OnceLock<RwLock<Box<dyn Logger>>> = OnceLock::new();

/// Internal state structure holding all engine singletons
struct EngineState {
    /// Graphics device singleton (wrapped in Mutex for thread-safe mutable access)
    graphics_device: RwLock<Option<Arc<Mutex<dyn GraphicsDevice>>>>,
    /// Texture manager singleton
    texture_manager: RwLock<Option<Arc<Mutex<TextureManager>>>>,
    /// Fallback texture, created on first request
    default_texture: DefaultTexture,
}

impl EngineState {
    /// Create a new empty engine state
    fn new() -> Self {
        Self {
            graphics_device: RwLock::new(None),
            texture_manager: RwLock::new(None),
            default_texture: DefaultTexture::new(),
        }
    }

    /// Release every subsystem, textures first (they delete through the device)
    fn clear(&self) {
        self.default_texture.clear();
        if let Ok(mut tm) = self.texture_manager.write() {
            *tm = None;
        }
        if let Ok(mut device) = self.graphics_device.write() {
            *device = None;
        }
    }
}

fn logger() -> &'static RwLock<Box<dyn Logger>> {
    LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger::default())))
}

// ===== PUBLIC API =====

/// Main engine singleton manager
///
/// Manages the lifecycle of all engine subsystems (graphics device, texture
/// manager, default texture) using a singleton pattern with thread-safe access.
///
/// # Example
///
/// ```no_run
/// use vct_engine::vct::{Engine, GraphicsDevice, Result};
///
/// fn run(device: impl GraphicsDevice + 'static) -> Result<()> {
///     Engine::initialize()?;
///     Engine::create_graphics_device(device)?;
///     Engine::create_texture_manager()?;
///
///     let white = Engine::default_texture()?;
///     white.bind()?;
///
///     Engine::shutdown();
///     Ok(())
/// }
/// ```
pub struct Engine;

impl Engine {
    /// Helper to log errors before returning them (internal use)
    fn log_and_return_error(error: Error) -> Error {
        match &error {
            Error::InitializationFailed(msg) => {
                crate::engine_error!("vct::Engine", "Initialization failed: {}", msg);
            }
            Error::BackendError(msg) => {
                crate::engine_error!("vct::Engine", "Backend error: {}", msg);
            }
            _ => {
                crate::engine_error!("vct::Engine", "Engine error: {}", error);
            }
        }
        error
    }

    fn state() -> Result<&'static EngineState> {
        ENGINE_STATE.get()
            .ok_or_else(|| Self::log_and_return_error(
                Error::InitializationFailed("Engine not initialized. Call Engine::initialize() first.".to_string())
            ))
    }

    /// Initialize the engine
    ///
    /// This must be called once at application startup before creating any
    /// subsystems. Calling it again is a no-op.
    pub fn initialize() -> Result<()> {
        ENGINE_STATE.get_or_init(EngineState::new);
        Ok(())
    }

    /// Shutdown the entire engine and destroy all singletons
    ///
    /// The default texture and texture manager are released before the
    /// graphics device. GPU textures still referenced elsewhere are deleted
    /// when their last `Arc` drops.
    pub fn shutdown() {
        if let Some(state) = ENGINE_STATE.get() {
            state.clear();
        }
    }

    // ===== GRAPHICS DEVICE API =====

    /// Create and register the graphics device singleton
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The engine is not initialized
    /// - A graphics device already exists
    /// - The device lock is poisoned
    pub fn create_graphics_device<D: GraphicsDevice + 'static>(device: D) -> Result<()> {
        let arc_device: Arc<Mutex<dyn GraphicsDevice>> = Arc::new(Mutex::new(device));
        Self::register_graphics_device(arc_device)?;

        crate::engine_info!("vct::Engine", "GraphicsDevice singleton created successfully");

        Ok(())
    }

    /// Register an already shared graphics device singleton
    ///
    /// Lets the caller keep a typed handle on the device it registers.
    ///
    /// # Errors
    ///
    /// Same as `create_graphics_device`.
    pub fn register_graphics_device(device: Arc<Mutex<dyn GraphicsDevice>>) -> Result<()> {
        let state = Self::state()?;

        let mut lock = state.graphics_device.write()
            .map_err(|_| Self::log_and_return_error(
                Error::BackendError("GraphicsDevice lock poisoned".to_string())
            ))?;

        if lock.is_some() {
            return Err(Self::log_and_return_error(
                Error::InitializationFailed("GraphicsDevice already exists. Call Engine::destroy_graphics_device() first.".to_string())
            ));
        }

        *lock = Some(device);
        Ok(())
    }

    /// Get the graphics device singleton
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The engine is not initialized
    /// - The graphics device has not been created
    pub fn graphics_device() -> Result<Arc<Mutex<dyn GraphicsDevice>>> {
        let state = Self::state()?;

        let lock = state.graphics_device.read()
            .map_err(|_| Self::log_and_return_error(
                Error::BackendError("GraphicsDevice lock poisoned".to_string())
            ))?;

        lock.clone()
            .ok_or_else(|| Self::log_and_return_error(
                Error::InitializationFailed("GraphicsDevice not created. Call Engine::create_graphics_device() first.".to_string())
            ))
    }

    /// Destroy the graphics device singleton
    ///
    /// Also drops the engine's references to the default texture and texture
    /// manager, which were created on this device.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine is not initialized
    pub fn destroy_graphics_device() -> Result<()> {
        let state = Self::state()?;
        state.clear();

        crate::engine_info!("vct::Engine", "GraphicsDevice singleton destroyed");

        Ok(())
    }

    // ===== DEFAULT TEXTURE API =====

    /// Get the default texture, creating it on the graphics device on first call
    ///
    /// Every caller receives the same instance until the device is destroyed
    /// or the engine shut down. The caller must not hold the graphics device
    /// lock.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The engine is not initialized
    /// - The graphics device has not been created
    /// - Uploading the texture fails
    pub fn default_texture() -> Result<Arc<Texture2D>> {
        let state = Self::state()?;
        if let Some(texture) = state.default_texture.get() {
            return Ok(texture);
        }

        let device = Self::graphics_device()?;
        state.default_texture.get_or_create(&device)
    }

    // ===== TEXTURE MANAGER API =====

    /// Create and register the texture manager singleton
    ///
    /// The manager uploads to the current graphics device and falls back to
    /// the default texture, which is created here if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The engine is not initialized
    /// - The graphics device has not been created
    /// - A texture manager already exists
    pub fn create_texture_manager() -> Result<()> {
        let state = Self::state()?;
        let device = Self::graphics_device()?;
        let default_texture = Self::default_texture()?;

        let mut lock = state.texture_manager.write()
            .map_err(|_| Self::log_and_return_error(
                Error::BackendError("TextureManager lock poisoned".to_string())
            ))?;

        if lock.is_some() {
            return Err(Self::log_and_return_error(
                Error::InitializationFailed("TextureManager already exists. Call Engine::destroy_texture_manager() first.".to_string())
            ));
        }

        *lock = Some(Arc::new(Mutex::new(TextureManager::new(device, default_texture))));

        crate::engine_info!("vct::Engine", "TextureManager singleton created successfully");

        Ok(())
    }

    /// Get the texture manager singleton
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The engine is not initialized
    /// - The texture manager has not been created
    pub fn texture_manager() -> Result<Arc<Mutex<TextureManager>>> {
        let state = Self::state()?;

        let lock = state.texture_manager.read()
            .map_err(|_| Self::log_and_return_error(
                Error::BackendError("TextureManager lock poisoned".to_string())
            ))?;

        lock.clone()
            .ok_or_else(|| Self::log_and_return_error(
                Error::InitializationFailed("TextureManager not created. Call Engine::create_texture_manager() first.".to_string())
            ))
    }

    /// Destroy the texture manager singleton
    ///
    /// # Errors
    ///
    /// Returns an error if the engine is not initialized
    pub fn destroy_texture_manager() -> Result<()> {
        let state = Self::state()?;

        let mut lock = state.texture_manager.write()
            .map_err(|_| Self::log_and_return_error(
                Error::BackendError("TextureManager lock poisoned".to_string())
            ))?;

        *lock = None;

        crate::engine_info!("vct::Engine", "TextureManager singleton destroyed");

        Ok(())
    }

    /// Reset all singletons for testing (only available in test builds)
    #[cfg(test)]
    pub fn reset_for_testing() {
        if let Some(state) = ENGINE_STATE.get() {
            state.clear();
        }
    }

    // ===== LOGGING API =====

    /// Set a custom logger
    ///
    /// Replace the default logger with a custom implementation (file logger,
    /// frame capture, etc.)
    pub fn set_logger<L: Logger + 'static>(logger: L) {
        if let Ok(mut lock) = self::logger().write() {
            *lock = Box::new(logger);
        }
    }

    /// Reset logger to default (DefaultLogger)
    pub fn reset_logger() {
        if let Ok(mut lock) = self::logger().write() {
            *lock = Box::new(DefaultLogger::default());
        }
    }

    /// Internal logging method (for simple logs without file:line)
    ///
    /// Used by macros like engine_info!, engine_warn!, etc.
    ///
    /// # Arguments
    ///
    /// * `severity` - Log severity level
    /// * `source` - Source module (e.g., "vct::Texture2D")
    /// * `message` - Log message
    pub fn log(severity: LogSeverity, source: &str, message: String) {
        if let Ok(lock) = self::logger().read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file: None,
                line: None,
            });
        }
    }

    /// Internal logging method with file:line information (for ERROR logs)
    ///
    /// Used by engine_error! macro to include source location.
    pub fn log_detailed(
        severity: LogSeverity,
        source: &str,
        message: String,
        file: &'static str,
        line: u32,
    ) {
        if let Ok(lock) = self::logger().read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file: Some(file),
                line: Some(line),
            });
        }
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
