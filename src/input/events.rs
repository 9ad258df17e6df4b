//! Raw input events, independent of any UI toolkit.
//!
//! Positions are window coordinates. Touch events carry every contact that
//! is currently down (for `TouchEnd`, the contacts that remain).

use crate::types::Point;
use crate::zoom::ZoomCommand;
use serde::{Deserialize, Serialize};

/// Mouse button that triggered a press or release.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MouseButton {
    Primary,
    Middle,
    Secondary,
    Other(u16),
}

/// Device family that started a gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerSource {
    Mouse,
    Touch,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    MouseDown { position: Point, button: MouseButton },
    MouseMove { position: Point },
    MouseUp { position: Point },
    /// Pointer left the canvas tracking surface
    MouseLeave,
    /// Window-level capture lost (blur, pointer left the window)
    PointerCancel,
    TouchStart { touches: Vec<Point> },
    TouchMove { touches: Vec<Point> },
    TouchEnd { touches: Vec<Point> },
    Wheel { position: Point, delta_y: f32 },
    ZoomButton { command: ZoomCommand },
}

impl InputEvent {
    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::MouseDown { .. } => "mouse_down",
            Self::MouseMove { .. } => "mouse_move",
            Self::MouseUp { .. } => "mouse_up",
            Self::MouseLeave => "mouse_leave",
            Self::PointerCancel => "pointer_cancel",
            Self::TouchStart { .. } => "touch_start",
            Self::TouchMove { .. } => "touch_move",
            Self::TouchEnd { .. } => "touch_end",
            Self::Wheel { .. } => "wheel",
            Self::ZoomButton { .. } => "zoom_button",
        }
    }
}
