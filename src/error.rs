//! Error types for canvas construction and configuration.
//!
//! Gesture handling itself never fails: every unroutable or redundant input
//! is absorbed as a no-op. Only building a session and loading settings can
//! go wrong.

use thiserror::Error;

/// Errors that can occur while building or configuring a canvas
#[derive(Error, Debug)]
pub enum CanvasError {
    /// Scale must be finite and strictly positive
    #[error("Invalid scale: {0}")]
    InvalidScale(f32),

    /// Zoom bounds must be positive and ordered
    #[error("Invalid zoom limits: min {min}, max {max}")]
    InvalidZoomLimits { min: f32, max: f32 },

    /// Zoom speed must lie strictly between 0 and 1
    #[error("Invalid zoom speed: {0} (expected 0 < speed < 1)")]
    InvalidZoomSpeed(f32),

    /// Node dimensions must be positive
    #[error("Invalid node size: {width}x{height}")]
    InvalidNodeSize { width: f32, height: f32 },

    /// Two seed nodes share an id
    #[error("Duplicate node id: {0}")]
    DuplicateNodeId(String),

    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Settings file is not valid JSON for `CanvasSettings`
    #[error("Settings parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for canvas operations
pub type CanvasResult<T> = Result<T, CanvasError>;
