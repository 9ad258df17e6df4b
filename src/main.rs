//! Headless replay: feed a recorded event script through a canvas session
//! and print the resulting state.
//!
//! ```sh
//! flowboard events.json [settings.json]
//! RUST_LOG=flowboard=debug flowboard events.json
//! ```

use anyhow::{Context, Result};
use flowboard::input::GestureKind;
use flowboard::{
    CanvasBounds, CanvasSession, CanvasSettings, DiagramStore, InputEvent, Node, Point, Size, Viewport,
};
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Canvas size used for replays, in pixels
const REPLAY_CANVAS_SIZE: Size = Size::new(800.0, 600.0);

#[derive(Serialize)]
struct ReplayReport<'a> {
    events: usize,
    viewport: Viewport,
    active_gesture: Option<GestureKind>,
    nodes: &'a [Node],
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("flowboard=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let script = args
        .next()
        .context("usage: flowboard <events.json> [settings.json]")?;

    let settings = match args.next() {
        Some(path) => CanvasSettings::load(Path::new(&path))
            .with_context(|| format!("loading settings from {path}"))?,
        None => CanvasSettings::load_or_default(),
    };

    let content =
        fs::read_to_string(&script).with_context(|| format!("reading event script {script}"))?;
    let events: Vec<InputEvent> =
        serde_json::from_str(&content).context("parsing event script")?;

    let mut session = CanvasSession::new(settings)?;
    session.set_bounds(Some(CanvasBounds::new(Point::ZERO, REPLAY_CANVAS_SIZE)));

    for event in &events {
        let outcome = session.handle(event);
        debug!(event = event.name(), ?outcome, "replayed");
    }

    let report = ReplayReport {
        events: events.len(),
        viewport: session.viewport(),
        active_gesture: session.gesture().kind(),
        nodes: session.store().nodes(),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
