//! Coordinate conversion utilities for canvas interactions.
//!
//! Three spaces are involved:
//! - **window**: raw event positions as delivered by the platform
//! - **screen**: canvas-relative pixels (window minus the canvas origin)
//! - **world**: diagram coordinates, where node positions live
//!
//! Screen and world are related by the viewport transform. Every conversion
//! goes through here so the formulas exist exactly once.

use crate::types::{Point, Size};
use crate::viewport::Viewport;
use serde::{Deserialize, Serialize};

/// Measured on-screen geometry of the canvas element.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CanvasBounds {
    /// Top-left corner in window coordinates
    pub origin: Point,
    pub size: Size,
}

impl CanvasBounds {
    pub fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Geometric centre, canvas-relative.
    #[inline]
    pub fn center(&self) -> Point {
        self.size.half()
    }

    /// Convert a window position to a canvas-relative screen position.
    #[inline]
    pub fn to_canvas(&self, window_pos: Point) -> Point {
        window_pos - self.origin
    }
}

pub struct CoordinateConverter;

impl CoordinateConverter {
    /// Convert world position to screen position
    #[inline]
    pub fn world_to_screen(world: Point, viewport: &Viewport) -> Point {
        world * viewport.scale() + viewport.translate()
    }

    /// Convert screen position to world position
    #[inline]
    pub fn screen_to_world(screen: Point, viewport: &Viewport) -> Point {
        (screen - viewport.translate()) / viewport.scale()
    }

    /// Convert a delta from screen to world (for node drag)
    #[inline]
    pub fn delta_screen_to_world(delta: Point, scale: f32) -> Point {
        delta / scale
    }

    /// Convert a delta from world to screen
    #[inline]
    pub fn delta_world_to_screen(delta: Point, scale: f32) -> Point {
        delta * scale
    }

    /// Window position to screen position. Without measured bounds the
    /// canvas is assumed to sit at the window origin.
    #[inline]
    pub fn window_to_screen(window_pos: Point, bounds: Option<&CanvasBounds>) -> Point {
        match bounds {
            Some(bounds) => bounds.to_canvas(window_pos),
            None => window_pos,
        }
    }
}
