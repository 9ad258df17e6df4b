//! Canvas session - one diagram, its viewport, and its live gesture.
//!
//! The session is constructed explicitly and owns everything the gesture
//! engines touch: the store, the hit index, the measured canvas geometry and
//! the settings. The shell feeds it raw events and reads state back (or
//! subscribes to the store) to re-render.

use crate::error::{CanvasError, CanvasResult};
use crate::input::{CanvasBounds, GestureRouter, GestureState, InputEvent, RouteContext, RouteOutcome};
use crate::render::RenderScene;
use crate::settings::CanvasSettings;
use crate::spatial_index::HitTester;
use crate::store::{DiagramStore, MemoryStore};
use crate::viewport::Viewport;
use crate::zoom::ZoomCommand;
use tracing::{debug, info};

pub struct CanvasSession<S: DiagramStore = MemoryStore> {
    store: S,
    router: GestureRouter,
    hit_tester: HitTester,
    bounds: Option<CanvasBounds>,
    settings: CanvasSettings,
}

impl CanvasSession<MemoryStore> {
    /// Session over the seed diagram, starting at the configured viewport.
    pub fn new(settings: CanvasSettings) -> CanvasResult<Self> {
        let store = MemoryStore::seeded(settings.initial_viewport)?;
        Self::with_store(store, settings)
    }
}

impl<S: DiagramStore> CanvasSession<S> {
    /// Fails when the settings are invalid or the store's viewport scale lies
    /// outside the configured zoom limits.
    pub fn with_store(store: S, settings: CanvasSettings) -> CanvasResult<Self> {
        settings.validate()?;
        let scale = store.viewport().scale();
        if !settings.zoom_limits.contains(scale) {
            return Err(CanvasError::InvalidScale(scale));
        }

        let hit_tester = HitTester::from_nodes(store.nodes(), settings.node_size);
        info!(
            nodes = hit_tester.len(),
            edges = store.edges().len(),
            "Canvas session created"
        );

        Ok(Self {
            store,
            router: GestureRouter::new(),
            hit_tester,
            bounds: None,
            settings,
        })
    }

    /// Record the canvas's measured geometry, or `None` while unmeasured.
    pub fn set_bounds(&mut self, bounds: Option<CanvasBounds>) {
        self.bounds = bounds;
    }

    pub fn bounds(&self) -> Option<&CanvasBounds> {
        self.bounds.as_ref()
    }

    /// Feed one raw input event through the gesture router.
    pub fn handle(&mut self, event: &InputEvent) -> RouteOutcome {
        let mut cx = RouteContext {
            store: &mut self.store,
            hit_tester: &mut self.hit_tester,
            bounds: self.bounds.as_ref(),
            settings: &self.settings,
        };
        self.router.handle(event, &mut cx)
    }

    pub fn zoom_in(&mut self) -> RouteOutcome {
        self.handle(&InputEvent::ZoomButton {
            command: ZoomCommand::In,
        })
    }

    pub fn zoom_out(&mut self) -> RouteOutcome {
        self.handle(&InputEvent::ZoomButton {
            command: ZoomCommand::Out,
        })
    }

    pub fn reset_zoom(&mut self) -> RouteOutcome {
        self.handle(&InputEvent::ZoomButton {
            command: ZoomCommand::Reset,
        })
    }

    pub fn viewport(&self) -> Viewport {
        self.store.viewport()
    }

    pub fn gesture(&self) -> &GestureState {
        self.router.state()
    }

    pub fn settings(&self) -> &CanvasSettings {
        &self.settings
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Mutable store access, e.g. to subscribe. Node positions changed
    /// through here are not reflected in hit testing until
    /// `rebuild_hit_index`.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn rebuild_hit_index(&mut self) {
        self.hit_tester = HitTester::from_nodes(self.store.nodes(), self.settings.node_size);
        debug!(nodes = self.hit_tester.len(), "Hit index rebuilt");
    }

    /// Presentation snapshot of the current state.
    pub fn scene(&self) -> RenderScene {
        RenderScene::build(
            &self.store.viewport(),
            self.store.nodes(),
            self.store.edges(),
            &self.settings,
        )
    }
}
