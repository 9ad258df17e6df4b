//! Unit tests for node hit testing.

use flowboard::spatial_index::HitTester;
use flowboard::{Node, NodeId, Point, Size};

fn size() -> Size {
    Size::new(100.0, 40.0)
}

#[test]
fn test_edges_are_inclusive() {
    let nodes = vec![Node::new("a", Point::new(100.0, 100.0), "A")];
    let tester = HitTester::from_nodes(&nodes, size());

    assert_eq!(tester.node_at(Point::new(100.0, 100.0)), Some(&NodeId::new("a")));
    assert_eq!(tester.node_at(Point::new(200.0, 140.0)), Some(&NodeId::new("a")));
    assert_eq!(tester.node_at(Point::new(200.1, 120.0)), None);
    assert_eq!(tester.node_at(Point::new(99.9, 120.0)), None);
}

#[test]
fn test_overlap_prefers_last_inserted() {
    let nodes = vec![
        Node::new("below", Point::new(0.0, 0.0), "below"),
        Node::new("above", Point::new(50.0, 20.0), "above"),
    ];
    let tester = HitTester::from_nodes(&nodes, size());

    assert_eq!(tester.node_at(Point::new(60.0, 30.0)), Some(&NodeId::new("above")));
    assert_eq!(tester.node_at(Point::new(10.0, 10.0)), Some(&NodeId::new("below")));
}

#[test]
fn test_update_moves_hit_box() {
    let mut nodes = vec![Node::new("a", Point::ZERO, "A")];
    let mut tester = HitTester::from_nodes(&nodes, size());

    nodes[0].x = 500.0;
    nodes[0].y = 500.0;
    tester.update(&nodes[0]);

    assert_eq!(tester.node_at(Point::new(10.0, 10.0)), None);
    assert_eq!(tester.node_at(Point::new(510.0, 510.0)), Some(&NodeId::new("a")));
}

#[test]
fn test_empty_index() {
    let tester = HitTester::from_nodes(&[], size());
    assert_eq!(tester.node_at(Point::ZERO), None);
}
