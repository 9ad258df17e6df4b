//! Gesture router - classifies raw input and drives the one live gesture.
//!
//! | Input                         | Condition        | Result                  |
//! |-------------------------------|------------------|-------------------------|
//! | mouse down, primary           | over a node      | node drag               |
//! | mouse down, primary           | over background  | pan                     |
//! | touch start, 1 contact        | over a node      | node drag               |
//! | touch start, 1 contact        | over background  | pan                     |
//! | touch start, 2 contacts       | anywhere         | pinch                   |
//! | touch move, 2 contacts        | not pinching     | pinch (second finger)   |
//! | wheel / zoom button           | always           | zoom, any gesture stays |
//!
//! Starting a gesture replaces whatever was live. Everything else (other
//! buttons, three fingers, moves from the wrong device) is ignored.
//!
//! ## Performance Notes
//!
//! Move events dominate. They never hit-test; only presses do, through the
//! R-tree in `HitTester`. A node drag moves its own box in the tree on each
//! move, a single R-tree remove and insert.

use super::coords::{CanvasBounds, CoordinateConverter};
use super::events::{InputEvent, MouseButton, PointerSource};
use super::node_drag::NodeDragGesture;
use super::pan::PanGesture;
use super::pinch::{PinchGesture, TouchPair};
use super::state::{GestureKind, GestureState};
use crate::profile_scope;
use crate::settings::CanvasSettings;
use crate::spatial_index::HitTester;
use crate::store::DiagramStore;
use crate::types::Point;
use crate::viewport::Viewport;
use crate::zoom::{self, ZoomCommand};
use serde::Serialize;
use tracing::{debug, trace};

/// Everything the router reads or writes while handling one event.
pub struct RouteContext<'a, S: DiagramStore> {
    pub store: &'a mut S,
    pub hit_tester: &'a mut HitTester,
    pub bounds: Option<&'a CanvasBounds>,
    pub settings: &'a CanvasSettings,
}

/// What an event did.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RouteOutcome {
    /// Matched no routing rule; nothing changed
    Ignored,
    /// A gesture began, replacing `replaced` if one was live
    Started {
        gesture: GestureKind,
        replaced: Option<GestureKind>,
    },
    /// The live gesture moved the viewport or its node
    Updated { gesture: GestureKind },
    /// Routed, but the result equals the current state
    Unchanged,
    /// The live gesture returned to Idle
    Ended { gesture: GestureKind },
    /// Wheel or button zoom changed the viewport
    Zoomed { scale: f32 },
}

#[derive(Debug, Default)]
pub struct GestureRouter {
    state: GestureState,
    /// Last position delivered to the live pan, for rebasing after a zoom
    last_pointer: Option<Point>,
}

impl GestureRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &GestureState {
        &self.state
    }

    pub fn handle<S: DiagramStore>(
        &mut self,
        event: &InputEvent,
        cx: &mut RouteContext<'_, S>,
    ) -> RouteOutcome {
        profile_scope!("route_event");

        let outcome = match event {
            InputEvent::MouseDown { position, button } => {
                if *button != MouseButton::Primary {
                    RouteOutcome::Ignored
                } else {
                    self.begin_single(PointerSource::Mouse, *position, cx)
                }
            }
            InputEvent::MouseMove { position } => {
                self.move_single(PointerSource::Mouse, *position, cx)
            }
            InputEvent::MouseUp { .. } => {
                self.end_if(|s| s.source() == Some(PointerSource::Mouse))
            }
            InputEvent::MouseLeave => self.end_if(|s| {
                // Node drags track at window level and survive leaving the canvas
                s.is_panning() && s.source() == Some(PointerSource::Mouse)
            }),
            InputEvent::PointerCancel => self.end_if(|s| !s.is_idle()),
            InputEvent::TouchStart { touches } => match touches.as_slice() {
                [single] => self.begin_single(PointerSource::Touch, *single, cx),
                [_, _] => self.begin_pinch(touches, cx),
                _ => RouteOutcome::Ignored,
            },
            InputEvent::TouchMove { touches } => match touches.as_slice() {
                [single] => self.move_single(PointerSource::Touch, *single, cx),
                [_, _] if self.state.is_pinching() => self.update_pinch(touches, cx),
                [_, _] => self.begin_pinch(touches, cx),
                _ => RouteOutcome::Ignored,
            },
            InputEvent::TouchEnd { .. } => {
                self.end_if(|s| s.source() == Some(PointerSource::Touch))
            }
            InputEvent::Wheel { position, delta_y } => self.wheel(*position, *delta_y, cx),
            InputEvent::ZoomButton { command } => self.zoom_button(*command, cx),
        };

        if outcome == RouteOutcome::Ignored {
            trace!(event = event.name(), "input ignored");
        }
        outcome
    }

    /// The only place the live gesture changes kind.
    fn transition(&mut self, next: GestureState) -> Option<GestureKind> {
        let prev = std::mem::replace(&mut self.state, next);
        if !self.state.is_panning() {
            self.last_pointer = None;
        }
        debug!(from = ?prev.kind(), to = ?self.state.kind(), "gesture transition");
        prev.kind()
    }

    fn begin_single<S: DiagramStore>(
        &mut self,
        source: PointerSource,
        position: Point,
        cx: &mut RouteContext<'_, S>,
    ) -> RouteOutcome {
        let viewport = cx.store.viewport();
        let screen = CoordinateConverter::window_to_screen(position, cx.bounds);
        let world = CoordinateConverter::screen_to_world(screen, &viewport);

        let hit = {
            profile_scope!("hit_test_nodes");
            cx.hit_tester
                .node_at(world)
                .and_then(|id| cx.store.node(id))
                .map(|node| NodeDragGesture::begin(source, node, position, viewport.scale()))
        };

        let next = match hit {
            Some(drag) => {
                debug!(node_id = %drag.node_id, ?source, "node drag start");
                GestureState::DraggingNode(drag)
            }
            None => GestureState::Panning(PanGesture::begin(source, position, &viewport)),
        };
        let gesture = next.kind().unwrap_or(GestureKind::Pan);
        let replaced = self.transition(next);
        if gesture == GestureKind::Pan {
            self.last_pointer = Some(position);
        }
        RouteOutcome::Started { gesture, replaced }
    }

    fn move_single<S: DiagramStore>(
        &mut self,
        source: PointerSource,
        position: Point,
        cx: &mut RouteContext<'_, S>,
    ) -> RouteOutcome {
        match &self.state {
            GestureState::Panning(pan) if pan.source == source => {
                self.last_pointer = Some(position);
                let current = cx.store.viewport();
                let next = pan.viewport_at(position, &current);
                if next == current {
                    return RouteOutcome::Unchanged;
                }
                trace!(x = next.translate_x(), y = next.translate_y(), "pan");
                cx.store.set_viewport(next);
                RouteOutcome::Updated {
                    gesture: GestureKind::Pan,
                }
            }
            GestureState::DraggingNode(drag) if drag.source == source => {
                let p = drag.position_at(position);
                trace!(node_id = %drag.node_id, x = p.x, y = p.y, "node drag");
                cx.store.update_node_position(&drag.node_id, p.x, p.y);
                // Keep the hit box under the node so a later press finds it
                if let Some(node) = cx.store.node(&drag.node_id) {
                    cx.hit_tester.update(node);
                }
                RouteOutcome::Updated {
                    gesture: GestureKind::NodeDrag,
                }
            }
            _ => RouteOutcome::Ignored,
        }
    }

    fn end_if(&mut self, matches: impl FnOnce(&GestureState) -> bool) -> RouteOutcome {
        if !matches(&self.state) {
            return RouteOutcome::Ignored;
        }
        match self.transition(GestureState::Idle) {
            Some(gesture) => RouteOutcome::Ended { gesture },
            None => RouteOutcome::Ignored,
        }
    }

    fn begin_pinch<S: DiagramStore>(
        &mut self,
        touches: &[Point],
        cx: &mut RouteContext<'_, S>,
    ) -> RouteOutcome {
        let pinch = match (TouchPair::from_touches(touches), cx.bounds) {
            (Some(pair), Some(bounds)) => PinchGesture::begin(pair, &cx.store.viewport(), bounds),
            _ => None,
        };

        match pinch {
            Some(pinch) => {
                let replaced = self.transition(GestureState::Pinching(pinch));
                RouteOutcome::Started {
                    gesture: GestureKind::Pinch,
                    replaced,
                }
            }
            // No anchor available; still drop any single-touch gesture so
            // the second finger never drags.
            None => self.end_if(|s| !s.is_idle()),
        }
    }

    fn update_pinch<S: DiagramStore>(
        &mut self,
        touches: &[Point],
        cx: &mut RouteContext<'_, S>,
    ) -> RouteOutcome {
        let (GestureState::Pinching(pinch), Some(pair)) =
            (&self.state, TouchPair::from_touches(touches))
        else {
            return RouteOutcome::Ignored;
        };

        let current = cx.store.viewport();
        let next = pinch.viewport_at(pair, &current, &cx.settings.zoom_limits);
        if next == current {
            return RouteOutcome::Unchanged;
        }
        trace!(scale = next.scale(), "pinch");
        cx.store.set_viewport(next);
        RouteOutcome::Updated {
            gesture: GestureKind::Pinch,
        }
    }

    fn wheel<S: DiagramStore>(
        &mut self,
        position: Point,
        delta_y: f32,
        cx: &mut RouteContext<'_, S>,
    ) -> RouteOutcome {
        let Some(bounds) = cx.bounds else {
            return RouteOutcome::Ignored;
        };
        let current = cx.store.viewport();
        let settings = cx.settings;
        let target = zoom::wheel_target_scale(
            current.scale(),
            delta_y,
            settings.wheel_direction,
            settings.zoom_speed,
        );
        let next = zoom::zoom_at(bounds.to_canvas(position), target, &current, &settings.zoom_limits);
        self.apply_zoom(current, next, cx)
    }

    fn zoom_button<S: DiagramStore>(
        &mut self,
        command: ZoomCommand,
        cx: &mut RouteContext<'_, S>,
    ) -> RouteOutcome {
        let current = cx.store.viewport();
        let settings = cx.settings;
        let next = zoom::zoom_button(
            command,
            &current,
            cx.bounds,
            &settings.zoom_limits,
            settings.zoom_speed,
        );
        self.apply_zoom(current, next, cx)
    }

    /// Write a wheel or button zoom to the store.
    ///
    /// A live pan is restarted from the zoomed viewport at the last pointer
    /// position: its payload holds the pre-zoom translate, so the next move
    /// would otherwise undo the zoom. This is the one exception to gesture
    /// payloads being fixed for the whole gesture. Node drags and pinches are
    /// left as they are.
    fn apply_zoom<S: DiagramStore>(
        &mut self,
        current: Viewport,
        next: Viewport,
        cx: &mut RouteContext<'_, S>,
    ) -> RouteOutcome {
        if next == current {
            return RouteOutcome::Unchanged;
        }
        debug!(scale = next.scale(), x = next.translate_x(), y = next.translate_y(), "zoom");
        cx.store.set_viewport(next);

        if let GestureState::Panning(pan) = &self.state {
            let anchor = self.last_pointer.unwrap_or(pan.anchor);
            self.state = GestureState::Panning(PanGesture::begin(pan.source, anchor, &next));
        }

        RouteOutcome::Zoomed {
            scale: next.scale(),
        }
    }
}
