//! Two-finger pinch zoom.
//!
//! The anchor is the midpoint of the two touches when the pinch starts and
//! stays fixed for the whole gesture; only the finger spread drives scale.

use super::coords::CanvasBounds;
use crate::constants::MIN_PINCH_DISTANCE;
use crate::types::Point;
use crate::viewport::Viewport;
use crate::zoom::{self, ZoomLimits};

/// Exactly two touch contacts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchPair {
    pub first: Point,
    pub second: Point,
}

impl TouchPair {
    /// `None` unless exactly two contacts are down.
    pub fn from_touches(touches: &[Point]) -> Option<Self> {
        match touches {
            [first, second] => Some(Self {
                first: *first,
                second: *second,
            }),
            _ => None,
        }
    }

    #[inline]
    pub fn distance(&self) -> f32 {
        self.first.distance(self.second)
    }

    #[inline]
    pub fn midpoint(&self) -> Point {
        self.first.midpoint(self.second)
    }
}

/// Start-state of a pinch, captured once when the second finger lands.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchGesture {
    pub initial_distance: f32,
    pub initial_scale: f32,
    /// Canvas-relative midpoint of the two touches at start
    pub anchor: Point,
}

impl PinchGesture {
    /// `None` when the fingers are too close together to give a usable ratio.
    pub fn begin(pair: TouchPair, viewport: &Viewport, bounds: &CanvasBounds) -> Option<Self> {
        let initial_distance = pair.distance();
        if initial_distance.is_nan() || initial_distance < MIN_PINCH_DISTANCE {
            return None;
        }
        Some(Self {
            initial_distance,
            initial_scale: viewport.scale(),
            anchor: bounds.to_canvas(pair.midpoint()),
        })
    }

    pub fn target_scale(&self, pair: TouchPair) -> f32 {
        zoom::pinch_target_scale(self.initial_scale, self.initial_distance, pair.distance())
    }

    /// Viewport for the current finger spread, zoomed around the fixed anchor.
    pub fn viewport_at(&self, pair: TouchPair, current: &Viewport, limits: &ZoomLimits) -> Viewport {
        zoom::zoom_at(self.anchor, self.target_scale(pair), current, limits)
    }
}
