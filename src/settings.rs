//! Canvas settings.
//!
//! Every field defaults to the compiled constant, so a settings file only
//! needs to name what it overrides:
//!
//! ```json
//! { "zoom_speed": 0.2, "wheel_direction": "positive_delta_zooms_in" }
//! ```

use crate::constants::{CANVAS_WORLD_SIZE, GRID_SIZE, NODE_HEIGHT, NODE_WIDTH, ZOOM_SPEED};
use crate::error::{CanvasError, CanvasResult};
use crate::types::Size;
use crate::viewport::Viewport;
use crate::zoom::{WheelDirection, ZoomLimits};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasSettings {
    pub zoom_limits: ZoomLimits,
    /// Fractional change per discrete zoom step
    pub zoom_speed: f32,
    pub wheel_direction: WheelDirection,
    pub initial_viewport: Viewport,
    /// Fixed node dimensions in world units
    pub node_size: Size,
    /// Side of the square world area backing the edge layer
    pub world_size: f32,
    /// Grid background cell size in pixels
    pub grid_size: f32,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            zoom_limits: ZoomLimits::default(),
            zoom_speed: ZOOM_SPEED,
            wheel_direction: WheelDirection::default(),
            initial_viewport: Viewport::default(),
            node_size: Size::new(NODE_WIDTH, NODE_HEIGHT),
            world_size: CANVAS_WORLD_SIZE,
            grid_size: GRID_SIZE,
        }
    }
}

impl CanvasSettings {
    /// Check cross-field constraints serde cannot express.
    pub fn validate(&self) -> CanvasResult<()> {
        self.zoom_limits.validate()?;

        if !(self.zoom_speed > 0.0 && self.zoom_speed < 1.0) {
            return Err(CanvasError::InvalidZoomSpeed(self.zoom_speed));
        }

        let scale = self.initial_viewport.scale();
        if !self.zoom_limits.contains(scale) {
            return Err(CanvasError::InvalidScale(scale));
        }

        let Size { width, height } = self.node_size;
        if !(width > 0.0 && height > 0.0) {
            return Err(CanvasError::InvalidNodeSize { width, height });
        }

        Ok(())
    }

    /// Load and validate settings from a JSON file.
    pub fn load(path: &Path) -> CanvasResult<Self> {
        let content = fs::read_to_string(path)?;
        let settings: Self = serde_json::from_str(&content)?;
        settings.validate()?;
        debug!(path = %path.display(), "Loaded canvas settings");
        Ok(settings)
    }

    /// Load from the default location, falling back to defaults when the
    /// file is missing or unusable.
    pub fn load_or_default() -> Self {
        let Some(path) = default_settings_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load(&path) {
            Ok(settings) => settings,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Ignoring invalid settings file");
                Self::default()
            }
        }
    }
}

/// `<config dir>/flowboard/settings.json`
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("flowboard").join("settings.json"))
}
