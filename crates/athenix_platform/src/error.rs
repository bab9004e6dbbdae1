//! Platform error types

use thiserror::Error;

/// Platform-related errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlatformError {
    /// No handler could open the URL
    #[error("Failed to open '{url}': {reason}")]
    LinkDispatch { url: String, reason: String },

    /// Operation not available on this platform
    #[error("Platform not supported: {0}")]
    Unsupported(String),

    /// A section could not be measured
    #[error("Layout measurement failed: {0}")]
    Layout(String),

    /// A section id that names no anchor
    #[error("Unknown section anchor: {0}")]
    UnknownAnchor(String),

    /// A path that names no route
    #[error("Unknown route: {0}")]
    UnknownRoute(String),
}

/// Result type for platform operations
pub type Result<T> = std::result::Result<T, PlatformError>;
