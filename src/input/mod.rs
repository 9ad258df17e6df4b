//! Pointer and touch input handling for the canvas.
//!
//! ## Architecture
//!
//! Raw events enter through the `GestureRouter`, which hit-tests presses,
//! decides which gesture (if any) they start, and delivers moves only to the
//! live one. The live gesture is a single `GestureState` value whose variants
//! carry their start-state as immutable data.
//!
//! ## Modules
//!
//! - `coords` - Screen/world/window coordinate conversion
//! - `events` - Toolkit-independent input events
//! - `state` - Gesture state machine enum and helper methods
//! - `pan` - Background drag moving the viewport
//! - `node_drag` - Drag moving one node
//! - `pinch` - Two-finger zoom
//! - `router` - Classification and the transition function

pub mod coords;
mod events;
mod node_drag;
mod pan;
mod pinch;
mod router;
mod state;

pub use coords::{CanvasBounds, CoordinateConverter};
pub use events::{InputEvent, MouseButton, PointerSource};
pub use node_drag::NodeDragGesture;
pub use pan::PanGesture;
pub use pinch::{PinchGesture, TouchPair};
pub use router::{GestureRouter, RouteContext, RouteOutcome};
pub use state::{CursorStyle, GestureKind, GestureState};
