//! Viewport model - the world-to-screen transform.
//!
//! `screen = world * scale + translate`. The scale is always finite and
//! strictly positive, so the transform is always invertible; the zoom engine
//! additionally keeps it inside the configured zoom limits.

use crate::constants::{INITIAL_VIEWPORT_SCALE, INITIAL_VIEWPORT_X, INITIAL_VIEWPORT_Y};
use crate::error::{CanvasError, CanvasResult};
use crate::types::Point;
use serde::{Deserialize, Serialize};

/// Translate plus uniform scale.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ViewportRepr", into = "ViewportRepr")]
pub struct Viewport {
    translate: Point,
    scale: f32,
}

impl Viewport {
    /// Create a viewport, rejecting a scale that would make the transform
    /// singular.
    pub fn new(translate_x: f32, translate_y: f32, scale: f32) -> CanvasResult<Self> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(CanvasError::InvalidScale(scale));
        }
        Ok(Self {
            translate: Point::new(translate_x, translate_y),
            scale,
        })
    }

    /// Build from parts already known to be valid.
    #[inline]
    pub(crate) fn from_parts(translate: Point, scale: f32) -> Self {
        debug_assert!(scale.is_finite() && scale > 0.0, "scale must be positive");
        Self { translate, scale }
    }

    #[inline]
    pub fn translate(&self) -> Point {
        self.translate
    }

    #[inline]
    pub fn translate_x(&self) -> f32 {
        self.translate.x
    }

    #[inline]
    pub fn translate_y(&self) -> f32 {
        self.translate.y
    }

    #[inline]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Same scale, different translate.
    #[inline]
    pub fn with_translate(self, translate: Point) -> Self {
        Self { translate, ..self }
    }

    /// Same translate, different scale. Used when there is no anchor to zoom
    /// around.
    #[inline]
    pub(crate) fn with_scale(self, scale: f32) -> Self {
        Self::from_parts(self.translate, scale)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::from_parts(
            Point::new(INITIAL_VIEWPORT_X, INITIAL_VIEWPORT_Y),
            INITIAL_VIEWPORT_SCALE,
        )
    }
}

/// Serialized form, validated on the way in.
#[derive(Serialize, Deserialize)]
struct ViewportRepr {
    translate_x: f32,
    translate_y: f32,
    scale: f32,
}

impl TryFrom<ViewportRepr> for Viewport {
    type Error = CanvasError;

    fn try_from(repr: ViewportRepr) -> Result<Self, Self::Error> {
        Viewport::new(repr.translate_x, repr.translate_y, repr.scale)
    }
}

impl From<Viewport> for ViewportRepr {
    fn from(v: Viewport) -> Self {
        Self {
            translate_x: v.translate.x,
            translate_y: v.translate.y,
            scale: v.scale,
        }
    }
}
