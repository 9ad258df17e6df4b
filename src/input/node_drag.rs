//! Node dragging - drag on a node moves that node in world space.

use super::coords::CoordinateConverter;
use super::events::PointerSource;
use crate::types::{Node, NodeId, Point};

/// Start-state of a node drag, captured once at press time.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeDragGesture {
    pub source: PointerSource,
    pub node_id: NodeId,
    /// Pointer position at press time
    pub anchor: Point,
    /// Viewport scale at press time
    pub start_scale: f32,
    /// Node world position at press time
    pub start_position: Point,
}

impl NodeDragGesture {
    pub fn begin(source: PointerSource, node: &Node, anchor: Point, scale: f32) -> Self {
        Self {
            source,
            node_id: node.id.clone(),
            anchor,
            start_scale: scale,
            start_position: node.position(),
        }
    }

    /// World position of the node for the given pointer position. The
    /// screen delta is divided by the scale so the node tracks the cursor.
    pub fn position_at(&self, current: Point) -> Point {
        let delta = CoordinateConverter::delta_screen_to_world(current - self.anchor, self.start_scale);
        self.start_position + delta
    }
}
