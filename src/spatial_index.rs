//! Spatial Index Module
//!
//! R-tree based hit testing for node surfaces, in world coordinates.
//! Nodes are keyed by their insertion slot, which doubles as z-order: a
//! later node is drawn on top of an earlier one.

use crate::types::{Node, NodeId, Point, Size};
use rstar::{AABB, RTree, RTreeObject};
use std::collections::HashMap;

/// A node's bounding box in the tree.
#[derive(Debug, Clone, Copy)]
pub struct SpatialEntry {
    pub slot: usize,
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl SpatialEntry {
    pub fn new(slot: usize, position: Point, size: Size) -> Self {
        Self {
            slot,
            min_x: position.x,
            min_y: position.y,
            max_x: position.x + size.width,
            max_y: position.y + size.height,
        }
    }

    #[inline]
    pub fn contains_point(&self, p: Point) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners([self.min_x, self.min_y], [self.max_x, self.max_y])
    }
}

impl PartialEq for SpatialEntry {
    fn eq(&self, other: &Self) -> bool {
        self.slot == other.slot
    }
}

/// Hit tester for node surfaces.
pub struct HitTester {
    tree: RTree<SpatialEntry>,
    entries: HashMap<NodeId, SpatialEntry>,
    /// Slot -> node id, in insertion order
    ids: Vec<NodeId>,
    node_size: Size,
}

impl HitTester {
    /// Build from the node collection in insertion order.
    pub fn from_nodes(nodes: &[Node], node_size: Size) -> Self {
        let entries: Vec<SpatialEntry> = nodes
            .iter()
            .enumerate()
            .map(|(slot, node)| SpatialEntry::new(slot, node.position(), node_size))
            .collect();

        let entries_map: HashMap<NodeId, SpatialEntry> = nodes
            .iter()
            .zip(entries.iter())
            .map(|(node, entry)| (node.id.clone(), *entry))
            .collect();

        Self {
            tree: RTree::bulk_load(entries),
            entries: entries_map,
            ids: nodes.iter().map(|n| n.id.clone()).collect(),
            node_size,
        }
    }

    /// Insert a node or move its box to the node's current position.
    pub fn update(&mut self, node: &Node) {
        let slot = match self.entries.remove(&node.id) {
            Some(old_entry) => {
                self.tree.remove(&old_entry);
                old_entry.slot
            }
            None => {
                self.ids.push(node.id.clone());
                self.ids.len() - 1
            }
        };

        let entry = SpatialEntry::new(slot, node.position(), self.node_size);
        self.tree.insert(entry);
        self.entries.insert(node.id.clone(), entry);
    }

    /// Topmost node whose surface contains the world point.
    pub fn node_at(&self, world: Point) -> Option<&NodeId> {
        let point_envelope = AABB::from_point([world.x, world.y]);

        self.tree
            .locate_in_envelope_intersecting(&point_envelope)
            .filter(|entry| entry.contains_point(world))
            .map(|entry| entry.slot)
            .max()
            .and_then(|slot| self.ids.get(slot))
    }

    /// Number of indexed nodes.
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}
