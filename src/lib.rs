//! Flowboard - viewport and gesture engine for a node-and-edge canvas.
//!
//! Users pan and zoom an unbounded 2-D world and drag nodes around in it,
//! with a mouse or with touch. This crate turns raw input events into a
//! consistent viewport transform and node positions, with at most one
//! gesture live at a time. Drawing is left to the shell; `render` only
//! computes the geometry.

pub mod constants;
pub mod error;
pub mod input;
pub mod perf;
pub mod render;
pub mod session;
pub mod settings;
pub mod spatial_index;
pub mod store;
pub mod types;
pub mod viewport;
pub mod zoom;

pub use error::{CanvasError, CanvasResult};
pub use input::{CanvasBounds, GestureState, InputEvent, RouteOutcome};
pub use session::CanvasSession;
pub use settings::CanvasSettings;
pub use store::{DiagramStore, MemoryStore, StoreEvent};
pub use types::{Edge, Node, NodeId, Point, Size};
pub use viewport::Viewport;
