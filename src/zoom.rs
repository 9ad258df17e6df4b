//! Zoom engine - anchor-preserving scale changes.
//!
//! Every zoom trigger (wheel, buttons, pinch) reduces to `zoom_at`: pick a
//! screen anchor and a target scale, clamp the scale, and solve for the
//! translate that keeps the world point under the anchor in place.

use crate::constants::{MAX_SCALE, MIN_SCALE, RESET_SCALE};
use crate::error::{CanvasError, CanvasResult};
use crate::input::coords::{CanvasBounds, CoordinateConverter};
use crate::types::Point;
use crate::viewport::Viewport;
use serde::{Deserialize, Serialize};

/// Inclusive scale bounds.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZoomLimits {
    pub min: f32,
    pub max: f32,
}

impl ZoomLimits {
    pub fn new(min: f32, max: f32) -> CanvasResult<Self> {
        let limits = Self { min, max };
        limits.validate()?;
        Ok(limits)
    }

    pub fn validate(&self) -> CanvasResult<()> {
        let finite = self.min.is_finite() && self.max.is_finite();
        if !finite || self.min <= 0.0 || self.min > self.max {
            return Err(CanvasError::InvalidZoomLimits {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    #[inline]
    pub fn contains(&self, scale: f32) -> bool {
        scale >= self.min && scale <= self.max
    }

    /// Clamp a requested scale into bounds. NaN collapses to the lower bound.
    #[inline]
    pub fn clamp(&self, scale: f32) -> f32 {
        if scale.is_nan() {
            return self.min;
        }
        scale.clamp(self.min, self.max)
    }
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self {
            min: MIN_SCALE,
            max: MAX_SCALE,
        }
    }
}

/// Which sign of the wheel's vertical delta zooms in.
///
/// Browsers report a negative delta when the wheel is rolled away from the
/// user; some trackpad drivers invert that.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WheelDirection {
    #[default]
    NegativeDeltaZoomsIn,
    PositiveDeltaZoomsIn,
}

impl WheelDirection {
    /// +1 to zoom in, -1 to zoom out, 0 for a zero delta.
    pub fn step(self, delta_y: f32) -> f32 {
        if delta_y == 0.0 || delta_y.is_nan() {
            return 0.0;
        }
        let zooms_in = match self {
            Self::NegativeDeltaZoomsIn => delta_y < 0.0,
            Self::PositiveDeltaZoomsIn => delta_y > 0.0,
        };
        if zooms_in { 1.0 } else { -1.0 }
    }
}

/// Zoom toolbar commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoomCommand {
    In,
    Out,
    Reset,
}

/// Zoom to `requested` scale while keeping `anchor` (screen) fixed.
///
/// Returns `current` untouched when the clamped scale equals the current one.
pub fn zoom_at(anchor: Point, requested: f32, current: &Viewport, limits: &ZoomLimits) -> Viewport {
    let new_scale = limits.clamp(requested);
    if new_scale == current.scale() {
        return *current;
    }

    let world = CoordinateConverter::screen_to_world(anchor, current);
    let translate = anchor - world * new_scale;
    Viewport::from_parts(translate, new_scale)
}

/// Target scale for one wheel notch.
pub fn wheel_target_scale(current: f32, delta_y: f32, direction: WheelDirection, speed: f32) -> f32 {
    current * (1.0 + direction.step(delta_y) * speed)
}

/// Target scale for a toolbar command.
///
/// Zoom in divides by `1 - speed` so that in followed by out is an exact
/// round trip.
pub fn button_target_scale(command: ZoomCommand, current: f32, speed: f32) -> f32 {
    match command {
        ZoomCommand::In => current / (1.0 - speed),
        ZoomCommand::Out => current * (1.0 - speed),
        ZoomCommand::Reset => RESET_SCALE,
    }
}

/// Apply a toolbar command, anchored at the canvas centre when the canvas has
/// been measured, otherwise as a plain scale change.
pub fn zoom_button(
    command: ZoomCommand,
    current: &Viewport,
    bounds: Option<&CanvasBounds>,
    limits: &ZoomLimits,
    speed: f32,
) -> Viewport {
    let requested = button_target_scale(command, current.scale(), speed);
    match bounds {
        Some(bounds) => zoom_at(bounds.center(), requested, current, limits),
        None => {
            let new_scale = limits.clamp(requested);
            if new_scale == current.scale() {
                *current
            } else {
                current.with_scale(new_scale)
            }
        }
    }
}

/// Target scale for a pinch: the start scale times the finger-spread ratio.
pub fn pinch_target_scale(initial_scale: f32, initial_distance: f32, current_distance: f32) -> f32 {
    initial_scale * (current_distance / initial_distance)
}
