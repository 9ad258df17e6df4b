//! Diagram state store.
//!
//! `DiagramStore` is the contract the gesture engines write through: the
//! viewport (full replace), the ordered node collection (position updates
//! only) and the read-only edge list. `MemoryStore` is the in-memory
//! implementation, with change subscriptions for the renderer.

use crate::error::{CanvasError, CanvasResult};
use crate::types::{Edge, Node, NodeId, Point};
use crate::viewport::Viewport;
use std::collections::HashMap;
use std::fmt;
use tracing::trace;

pub trait DiagramStore {
    fn viewport(&self) -> Viewport;

    /// Replace the viewport wholesale.
    fn set_viewport(&mut self, viewport: Viewport);

    /// Nodes in insertion order.
    fn nodes(&self) -> &[Node];

    fn node(&self, id: &NodeId) -> Option<&Node> {
        self.nodes().iter().find(|n| &n.id == id)
    }

    /// Move a node. Unknown ids are ignored.
    fn update_node_position(&mut self, id: &NodeId, x: f32, y: f32);

    fn edges(&self) -> &[Edge];
}

/// Change notification delivered to subscribers after an effective write.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    ViewportChanged(Viewport),
    NodeMoved { id: NodeId, position: Point },
}

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&StoreEvent)>;

/// In-memory store: nodes in a `Vec` with an id index.
pub struct MemoryStore {
    viewport: Viewport,
    nodes: Vec<Node>,
    node_index: HashMap<NodeId, usize>,
    edges: Vec<Edge>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl MemoryStore {
    /// Build a store, rejecting duplicate node ids.
    pub fn new(viewport: Viewport, nodes: Vec<Node>, edges: Vec<Edge>) -> CanvasResult<Self> {
        let mut node_index = HashMap::with_capacity(nodes.len());
        for (i, node) in nodes.iter().enumerate() {
            if node_index.insert(node.id.clone(), i).is_some() {
                return Err(CanvasError::DuplicateNodeId(node.id.to_string()));
            }
        }

        Ok(Self {
            viewport,
            nodes,
            node_index,
            edges,
            listeners: Vec::new(),
            next_subscription: 0,
        })
    }

    /// The fixed starter diagram: two nodes joined by one edge.
    pub fn seeded(viewport: Viewport) -> CanvasResult<Self> {
        Self::new(viewport, seed_nodes(), seed_edges())
    }

    /// Register a listener for viewport and node changes.
    pub fn subscribe(&mut self, listener: impl FnMut(&StoreEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false if the subscription was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() != before
    }

    fn notify(&mut self, event: StoreEvent) {
        for (_, listener) in &mut self.listeners {
            listener(&event);
        }
    }
}

impl DiagramStore for MemoryStore {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn set_viewport(&mut self, viewport: Viewport) {
        if self.viewport == viewport {
            return;
        }
        self.viewport = viewport;
        self.notify(StoreEvent::ViewportChanged(viewport));
    }

    fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    fn node(&self, id: &NodeId) -> Option<&Node> {
        self.node_index.get(id).and_then(|&i| self.nodes.get(i))
    }

    fn update_node_position(&mut self, id: &NodeId, x: f32, y: f32) {
        let Some(node) = self.node_index.get(id).and_then(|&i| self.nodes.get_mut(i)) else {
            trace!(node_id = %id, "position update for unknown node ignored");
            return;
        };
        if node.x == x && node.y == y {
            return;
        }
        node.x = x;
        node.y = y;
        self.notify(StoreEvent::NodeMoved {
            id: id.clone(),
            position: Point::new(x, y),
        });
    }

    fn edges(&self) -> &[Edge] {
        &self.edges
    }
}

impl fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryStore")
            .field("viewport", &self.viewport)
            .field("nodes", &self.nodes)
            .field("edges", &self.edges)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

fn seed_nodes() -> Vec<Node> {
    vec![
        Node::new("1", Point::new(100.0, 100.0), "Node A"),
        Node::new("2", Point::new(400.0, 300.0), "Node B"),
    ]
}

fn seed_edges() -> Vec<Edge> {
    vec![Edge::new("e1-2", "1", "2")]
}
