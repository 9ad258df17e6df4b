//! Canvas panning - drag on the background moves the viewport.

use super::events::PointerSource;
use crate::types::Point;
use crate::viewport::Viewport;

/// Start-state of a pan, captured once at press time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanGesture {
    pub source: PointerSource,
    /// Pointer position at press time
    pub anchor: Point,
    /// Viewport translate at press time
    pub start_translate: Point,
}

impl PanGesture {
    pub fn begin(source: PointerSource, anchor: Point, viewport: &Viewport) -> Self {
        Self {
            source,
            anchor,
            start_translate: viewport.translate(),
        }
    }

    /// Viewport with the translate following the pointer 1:1 in screen
    /// pixels, whatever the current scale.
    pub fn viewport_at(&self, current: Point, viewport: &Viewport) -> Viewport {
        viewport.with_translate(self.start_translate + (current - self.anchor))
    }
}
