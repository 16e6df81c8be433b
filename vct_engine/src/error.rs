//! Error types for the VCT engine
//!
//! This module defines the error types used throughout the engine,
//! including texture upload, initialization, and resource management.

use std::fmt;

/// Result type for VCT engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// VCT engine errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Backend-specific error reported by the graphics device
    BackendError(String),

    /// Out of GPU memory (texture object or storage allocation failed)
    OutOfMemory,

    /// Invalid resource (missing pixel data, mismatched geometry, etc.)
    InvalidResource(String),

    /// Initialization failed (engine, graphics device, subsystems)
    InitializationFailed(String),

    /// Texture used before a successful upload (carries the texture filepath)
    NotLoaded(String),

    /// Bits per pixel outside of {8, 16, 24, 32}
    UnsupportedPixelDepth(u32),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::OutOfMemory => write!(f, "Out of GPU memory"),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
            Error::NotLoaded(name) => write!(f, "Unloaded resource: texture '{}' has not been uploaded", name),
            Error::UnsupportedPixelDepth(bits) => {
                write!(f, "Unsupported pixel depth: {} bits per pixel (expected 8, 16, 24 or 32)", bits)
            }
        }
    }
}

impl std::error::Error for Error {}

// ===== ERROR MACROS =====

/// Log an error and build an `Error::BackendError` with the same message
///
/// # Example
///
/// ```no_run
/// # use vct_engine::engine_err;
/// let err = engine_err!("vct::TextureManager", "Texture '{}' not found", "brick.png");
/// ```
#[macro_export]
macro_rules! engine_err {
    ($source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::vct::Engine::log_detailed(
            $crate::vct::log::LogSeverity::Error,
            $source,
            message.clone(),
            file!(),
            line!()
        );
        $crate::vct::Error::BackendError(message)
    }};
}

/// Log an error and return early with an `Error::BackendError`
///
/// # Example
///
/// ```no_run
/// # use vct_engine::engine_bail;
/// fn check(count: usize) -> vct_engine::vct::Result<()> {
///     if count == 0 {
///         engine_bail!("vct::TextureManager", "Empty texture set");
///     }
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! engine_bail {
    ($source:expr, $($arg:tt)*) => {
        return Err($crate::engine_err!($source, $($arg)*))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
