//! Gesture state machine - the single source of truth for what the pointer
//! is currently doing.
//!
//! One tagged enum instead of scattered `is_dragging` flags, so two gestures
//! can never be live at once.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Panning          (primary press / one-finger touch on background)
//! Idle -> DraggingNode     (primary press / one-finger touch on a node)
//! Any  -> Pinching         (two fingers down, or a second finger mid-gesture)
//! Any  -> Panning/Dragging (a new press replaces whatever was live)
//!
//! Panning      -> Idle     (release, leaving the canvas, cancel)
//! DraggingNode -> Idle     (release, cancel)
//! Pinching     -> Idle     (any finger lifted, cancel)
//! ```

use super::events::PointerSource;
use super::node_drag::NodeDragGesture;
use super::pan::PanGesture;
use super::pinch::PinchGesture;
use crate::types::NodeId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum GestureState {
    /// No active gesture
    #[default]
    Idle,

    /// Background drag moving the viewport
    Panning(PanGesture),

    /// Drag moving a single node
    DraggingNode(NodeDragGesture),

    /// Two-finger zoom
    Pinching(PinchGesture),
}

/// Gesture discriminant, for outcomes and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GestureKind {
    Pan,
    NodeDrag,
    Pinch,
}

/// Cursor the shell should show over the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CursorStyle {
    Grab,
    Grabbing,
}

impl GestureState {
    /// Returns true if the state is Idle
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_panning(&self) -> bool {
        matches!(self, Self::Panning(_))
    }

    pub fn is_dragging_node(&self) -> bool {
        matches!(self, Self::DraggingNode(_))
    }

    pub fn is_pinching(&self) -> bool {
        matches!(self, Self::Pinching(_))
    }

    pub fn kind(&self) -> Option<GestureKind> {
        match self {
            Self::Idle => None,
            Self::Panning(_) => Some(GestureKind::Pan),
            Self::DraggingNode(_) => Some(GestureKind::NodeDrag),
            Self::Pinching(_) => Some(GestureKind::Pinch),
        }
    }

    /// Device that owns the gesture. Pinch is always touch.
    pub fn source(&self) -> Option<PointerSource> {
        match self {
            Self::Idle => None,
            Self::Panning(pan) => Some(pan.source),
            Self::DraggingNode(drag) => Some(drag.source),
            Self::Pinching(_) => Some(PointerSource::Touch),
        }
    }

    /// Get the node being dragged, if any
    pub fn dragged_node(&self) -> Option<&NodeId> {
        match self {
            Self::DraggingNode(drag) => Some(&drag.node_id),
            _ => None,
        }
    }

    pub fn cursor(&self) -> CursorStyle {
        match self {
            Self::Panning(_) | Self::DraggingNode(_) => CursorStyle::Grabbing,
            Self::Idle | Self::Pinching(_) => CursorStyle::Grab,
        }
    }
}
