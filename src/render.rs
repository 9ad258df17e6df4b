//! Render scene - presentation geometry for the shell to draw.
//!
//! Nothing here feeds back into gesture handling. Nodes become boxes, edges
//! become straight segments between node centres, and the grid background
//! scrolls with the translate.

use crate::input::coords::CoordinateConverter;
use crate::settings::CanvasSettings;
use crate::types::{Edge, Node, NodeId, Point, Rect, Size};
use crate::viewport::Viewport;
use serde::Serialize;
use std::collections::HashMap;
use tracing::trace;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NodeView {
    pub id: NodeId,
    pub label: String,
    /// Bounds in world coordinates
    pub world: Rect,
    /// Bounds in canvas-relative screen pixels
    pub screen: Rect,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EdgeView {
    pub id: String,
    /// Source node centre, world coordinates
    pub from: Point,
    /// Target node centre, world coordinates
    pub to: Point,
    /// SVG path data for the edge layer
    pub path: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GridView {
    /// Background position, follows the translate
    pub offset: Point,
    pub cell_size: f32,
}

/// Everything the shell needs for one frame.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RenderScene {
    pub viewport: Viewport,
    /// Side of the world layer; the edge layer spans this square
    pub world_size: f32,
    pub grid: GridView,
    pub nodes: Vec<NodeView>,
    pub edges: Vec<EdgeView>,
}

impl RenderScene {
    pub fn build(viewport: &Viewport, nodes: &[Node], edges: &[Edge], settings: &CanvasSettings) -> Self {
        let size = settings.node_size;
        let by_id: HashMap<&NodeId, &Node> = nodes.iter().map(|n| (&n.id, n)).collect();

        let node_views = nodes
            .iter()
            .map(|node| {
                let world = node.bounds(size);
                NodeView {
                    id: node.id.clone(),
                    label: node.label.clone(),
                    world,
                    screen: screen_rect(&world, viewport),
                }
            })
            .collect();

        let edge_views = edges
            .iter()
            .filter_map(|edge| {
                let (Some(source), Some(target)) = (by_id.get(&edge.source), by_id.get(&edge.target))
                else {
                    trace!(edge = %edge.id, "dangling edge not drawn");
                    return None;
                };
                let from = node_center(source, size);
                let to = node_center(target, size);
                Some(EdgeView {
                    id: edge.id.clone(),
                    from,
                    to,
                    path: straight_path(from, to),
                })
            })
            .collect();

        Self {
            viewport: *viewport,
            world_size: settings.world_size,
            grid: GridView {
                offset: viewport.translate(),
                cell_size: settings.grid_size,
            },
            nodes: node_views,
            edges: edge_views,
        }
    }
}

/// Centre of a node box: position plus half the node size.
pub fn node_center(node: &Node, size: Size) -> Point {
    node.position() + size.half()
}

/// `M x1 y1 L x2 y2`
pub fn straight_path(from: Point, to: Point) -> String {
    format!("M {} {} L {} {}", from.x, from.y, to.x, to.y)
}

fn screen_rect(world: &Rect, viewport: &Viewport) -> Rect {
    let origin = CoordinateConverter::world_to_screen(world.origin, viewport);
    let scaled = CoordinateConverter::delta_world_to_screen(
        Point::new(world.size.width, world.size.height),
        viewport.scale(),
    );
    Rect::new(origin, Size::new(scaled.x, scaled.y))
}
