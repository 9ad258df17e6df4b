//! Mouse gesture workflows: pan, node drag, and their mutual exclusion.

use crate::helpers::*;
use flowboard::input::{CursorStyle, GestureKind, RouteOutcome};
use flowboard::{DiagramStore, InputEvent, NodeId, Point, Viewport};

fn node_position(session: &flowboard::CanvasSession, id: &str) -> Point {
    session.store().node(&NodeId::new(id)).unwrap().position()
}

#[test]
fn test_background_pan_follows_pointer() {
    let mut session = TestSessionBuilder::new().build();

    session.handle(&mouse_down(10.0, 10.0));
    assert!(session.gesture().is_panning());
    assert_eq!(session.gesture().cursor(), CursorStyle::Grabbing);

    session.handle(&mouse_move(40.0, 30.0));
    assert_eq!(session.viewport().translate(), Point::new(180.0, 70.0));
    session.handle(&mouse_move(0.0, 0.0));
    assert_eq!(session.viewport().translate(), Point::new(140.0, 40.0));
    assert_eq!(session.viewport().scale(), 1.0);

    assert_eq!(
        session.handle(&mouse_up(0.0, 0.0)),
        RouteOutcome::Ended {
            gesture: GestureKind::Pan
        }
    );
    assert_eq!(session.gesture().cursor(), CursorStyle::Grab);

    // Moves after release do nothing
    assert_eq!(session.handle(&mouse_move(300.0, 300.0)), RouteOutcome::Ignored);
    assert_eq!(session.viewport().translate(), Point::new(140.0, 40.0));
}

#[test]
fn test_pan_is_scale_independent() {
    let mut session = TestSessionBuilder::new().with_viewport(0.0, 0.0, 2.0).build();
    session.handle(&mouse_down(700.0, 500.0));
    session.handle(&mouse_move(710.0, 505.0));
    assert_eq!(session.viewport().translate(), Point::new(10.0, 5.0));
    assert_eq!(session.viewport().scale(), 2.0);
}

#[test]
fn test_node_drag_divides_by_scale() {
    let mut session = TestSessionBuilder::new()
        .with_viewport(0.0, 0.0, 2.0)
        .with_node("n", (100.0, 100.0))
        .build();

    // Node at world (100,100) renders at screen (200,200)
    let outcome = session.handle(&mouse_down(210.0, 210.0));
    assert_eq!(
        outcome,
        RouteOutcome::Started {
            gesture: GestureKind::NodeDrag,
            replaced: None,
        }
    );

    session.handle(&mouse_move(250.0, 230.0));
    assert_eq!(node_position(&session, "n"), Point::new(120.0, 110.0));
    assert_eq!(session.viewport(), Viewport::new(0.0, 0.0, 2.0).unwrap());
}

#[test]
fn test_node_drag_respects_canvas_offset() {
    let mut session = TestSessionBuilder::new()
        .with_viewport(0.0, 0.0, 1.0)
        .with_node("n", (100.0, 100.0))
        .with_bounds((50.0, 80.0), (800.0, 600.0))
        .build();

    // Window (160,190) is canvas (110,110), inside the node
    session.handle(&mouse_down(160.0, 190.0));
    assert_eq!(session.gesture().dragged_node(), Some(&NodeId::new("n")));

    // Window (140,190) is canvas (90,110), left of the node
    session.handle(&mouse_up(160.0, 190.0));
    session.handle(&mouse_down(140.0, 190.0));
    assert!(session.gesture().is_panning());
}

#[test]
fn test_node_press_never_pans() {
    let mut session = TestSessionBuilder::new().build();
    // Seed node 1 at world (100,100) sits at screen (250,150)
    session.handle(&mouse_down(260.0, 160.0));
    session.handle(&mouse_move(300.0, 200.0));
    session.handle(&mouse_up(300.0, 200.0));

    assert_eq!(session.viewport(), Viewport::default());
    assert_eq!(node_position(&session, "1"), Point::new(140.0, 140.0));
    assert_eq!(node_position(&session, "2"), Point::new(400.0, 300.0));
}

#[test]
fn test_node_drag_start_replaces_pan() {
    let mut session = TestSessionBuilder::new().build();

    session.handle(&mouse_down(10.0, 10.0));
    session.handle(&mouse_move(20.0, 10.0));
    let panned = session.viewport();
    assert_eq!(panned.translate(), Point::new(160.0, 50.0));

    // Node 1 now at screen (260,150)
    let outcome = session.handle(&mouse_down(270.0, 160.0));
    assert_eq!(
        outcome,
        RouteOutcome::Started {
            gesture: GestureKind::NodeDrag,
            replaced: Some(GestureKind::Pan),
        }
    );

    session.handle(&mouse_move(290.0, 160.0));
    assert_eq!(session.viewport(), panned);
    assert_eq!(node_position(&session, "1"), Point::new(120.0, 100.0));
}

#[test]
fn test_dragged_node_hit_box_follows_after_release() {
    let mut session = TestSessionBuilder::new().build();
    session.handle(&mouse_down(260.0, 160.0));
    session.handle(&mouse_move(660.0, 160.0));
    session.handle(&mouse_up(660.0, 160.0));

    // Old spot is background now
    session.handle(&mouse_down(260.0, 160.0));
    assert!(session.gesture().is_panning());
    session.handle(&mouse_up(260.0, 160.0));

    // New spot grabs the node again
    session.handle(&mouse_down(660.0, 160.0));
    assert_eq!(session.gesture().dragged_node(), Some(&NodeId::new("1")));
}

#[test]
fn test_lost_release_then_press_on_moved_node() {
    let mut session = TestSessionBuilder::new().build();
    session.handle(&mouse_down(260.0, 160.0));
    session.handle(&mouse_move(660.0, 160.0));
    // Release happens outside the window and never arrives
    session.handle(&InputEvent::MouseLeave);
    assert!(session.gesture().is_dragging_node());

    session.handle(&mouse_down(670.0, 170.0));
    assert_eq!(session.gesture().dragged_node(), Some(&NodeId::new("1")));
    session.handle(&mouse_move(680.0, 170.0));
    assert_eq!(node_position(&session, "1"), Point::new(510.0, 100.0));
    assert_eq!(session.viewport(), Viewport::default());
}

#[test]
fn test_leave_and_cancel() {
    let mut session = TestSessionBuilder::new().build();

    session.handle(&mouse_down(10.0, 10.0));
    session.handle(&InputEvent::MouseLeave);
    assert!(session.gesture().is_idle());

    session.handle(&mouse_down(260.0, 160.0));
    session.handle(&InputEvent::MouseLeave);
    session.handle(&mouse_move(270.0, 160.0));
    assert_eq!(node_position(&session, "1"), Point::new(110.0, 100.0));

    assert_eq!(
        session.handle(&InputEvent::PointerCancel),
        RouteOutcome::Ended {
            gesture: GestureKind::NodeDrag
        }
    );
    assert_eq!(session.handle(&InputEvent::PointerCancel), RouteOutcome::Ignored);
}

#[test]
fn test_release_without_gesture_is_ignored() {
    let mut session = TestSessionBuilder::new().build();
    assert_eq!(session.handle(&mouse_up(0.0, 0.0)), RouteOutcome::Ignored);
    assert_eq!(session.handle(&InputEvent::MouseLeave), RouteOutcome::Ignored);
    assert!(session.gesture().is_idle());
}
