//! Canvas-wide constants.
//!
//! Compiled defaults for every tunable value. `CanvasSettings` starts from
//! these and may override them from a settings file.

// ============================================================================
// Zoom
// ============================================================================

/// Minimum scale factor
pub const MIN_SCALE: f32 = 0.5;

/// Maximum scale factor
pub const MAX_SCALE: f32 = 2.0;

/// Fractional scale change per discrete zoom step (wheel notch or button)
pub const ZOOM_SPEED: f32 = 0.1;

/// Scale restored by the reset button
pub const RESET_SCALE: f32 = 1.0;

// ============================================================================
// Initial Viewport
// ============================================================================

/// Initial horizontal translate in pixels
pub const INITIAL_VIEWPORT_X: f32 = 150.0;

/// Initial vertical translate in pixels
pub const INITIAL_VIEWPORT_Y: f32 = 50.0;

/// Initial scale factor
pub const INITIAL_VIEWPORT_SCALE: f32 = 1.0;

// ============================================================================
// Nodes
// ============================================================================

/// Node width in world units (used for edge anchors and hit testing)
pub const NODE_WIDTH: f32 = 100.0;

/// Node height in world units (used for edge anchors and hit testing)
pub const NODE_HEIGHT: f32 = 40.0;

// ============================================================================
// Canvas
// ============================================================================

/// Side length of the square world area backing the edge layer
pub const CANVAS_WORLD_SIZE: f32 = 4000.0;

/// Grid background cell size in pixels
pub const GRID_SIZE: f32 = 20.0;

// ============================================================================
// Input Handling
// ============================================================================

/// Touch distance below which a pinch cannot be anchored reliably
pub const MIN_PINCH_DISTANCE: f32 = 1.0;

/// Threshold for warning about slow input handling, in milliseconds
pub const SLOW_HANDLER_MS: f64 = 4.0;
