//! Scripted input replay.
//!
//! A script is a configuration plus a list of input events, fed through the
//! editor in order exactly as a windowing host would deliver them.

use blueprint_core::{
    ConfigError, EditorConfig, EditorState, Guide, KeyEvent, Modifiers, PointerEvent, render,
};
use kurbo::Point;
use serde::Deserialize;
use std::fmt::Write as _;
use std::path::Path;
use thiserror::Error;

/// Replay errors.
#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid script: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Event {index}: {source}")]
    Config {
        index: usize,
        #[source]
        source: ConfigError,
    },
    #[error("Invalid script configuration: {0}")]
    InitialConfig(#[from] ConfigError),
}

/// One scripted input event.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ScriptEvent {
    Down { x: f64, y: f64 },
    Move { x: f64, y: f64 },
    Up,
    Leave,
    Key {
        key: String,
        #[serde(default)]
        ctrl: bool,
        #[serde(default)]
        meta: bool,
        #[serde(default)]
        shift: bool,
    },
    GridPitch { value: f64 },
    Thickness { value: f64 },
    Surface { width: f64, height: f64 },
    Clear,
}

/// A replayable input script.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub config: EditorConfig,
    #[serde(default)]
    pub events: Vec<ScriptEvent>,
}

impl Script {
    /// Parse a script from JSON.
    pub fn from_json(json: &str) -> Result<Self, ReplayError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a script from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ReplayError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

/// Feed one event into the editor.
fn apply(editor: &mut EditorState, event: &ScriptEvent) -> Result<(), ConfigError> {
    match event {
        ScriptEvent::Down { x, y } => editor.handle_pointer_event(PointerEvent::Down {
            position: Point::new(*x, *y),
        }),
        ScriptEvent::Move { x, y } => editor.handle_pointer_event(PointerEvent::Move {
            position: Point::new(*x, *y),
        }),
        ScriptEvent::Up => editor.handle_pointer_event(PointerEvent::Up),
        ScriptEvent::Leave => editor.handle_pointer_event(PointerEvent::Leave),
        ScriptEvent::Key {
            key,
            ctrl,
            meta,
            shift,
        } => {
            let modifiers = Modifiers {
                ctrl: *ctrl,
                meta: *meta,
                shift: *shift,
                ..Default::default()
            };
            let response = editor.handle_key_event(&KeyEvent::new(key.clone(), modifiers));
            if response.prevent_default {
                log::debug!("Key {key:?} consumed");
            }
        }
        ScriptEvent::GridPitch { value } => editor.set_grid_pitch(*value)?,
        ScriptEvent::Thickness { value } => editor.set_thickness(*value)?,
        ScriptEvent::Surface { width, height } => editor.set_surface_size(*width, *height)?,
        ScriptEvent::Clear => editor.clear(),
    }
    Ok(())
}

/// Run a script against a fresh editor.
///
/// Stops at the first rejected configuration change.
pub fn replay(script: &Script) -> Result<EditorState, ReplayError> {
    let mut editor = EditorState::with_config(script.config)?;

    for (index, event) in script.events.iter().enumerate() {
        apply(&mut editor, event).map_err(|source| ReplayError::Config { index, source })?;
    }

    log::info!(
        "Replayed {} events: {} walls, history step {}/{}",
        script.events.len(),
        editor.segments().len(),
        editor.history().cursor(),
        editor.history().len() - 1
    );
    Ok(editor)
}

fn describe_guide(guide: &Guide) -> String {
    match guide {
        Guide::Ruler { axis, line } => format!(
            "ruler {axis:?} ({}, {}) -> ({}, {})",
            line.p0.x, line.p0.y, line.p1.x, line.p1.y
        ),
        Guide::LengthMatch { center } => format!("length match at ({}, {})", center.x, center.y),
        Guide::Square { bounds } => format!(
            "square {}x{} at ({}, {})",
            bounds.width(),
            bounds.height(),
            bounds.x0,
            bounds.y0
        ),
        Guide::EndpointHighlight { center } => format!("endpoint at ({}, {})", center.x, center.y),
    }
}

/// Plain-text report of the editor state and its current frame.
pub fn report(editor: &EditorState) -> String {
    let model = render(editor);
    let config = editor.config();
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Grid {} ({}), surface {}x{}, thickness {}",
        config.grid_pitch,
        config.grid_shade.name(),
        model.surface.width,
        model.surface.height,
        config.thickness
    );
    let _ = writeln!(
        out,
        "History step {} of {}",
        editor.history().cursor(),
        editor.history().len() - 1
    );

    let _ = writeln!(out, "Walls: {}", model.walls.len());
    for (i, wall) in editor.segments().iter().enumerate() {
        let _ = writeln!(
            out,
            "  #{i}: ({}, {}) -> ({}, {}) length {:.1} thickness {}",
            wall.start.x,
            wall.start.y,
            wall.end.x,
            wall.end.y,
            wall.length(),
            wall.thickness
        );
    }

    if let Some(preview) = editor.preview() {
        let _ = writeln!(
            out,
            "Preview: ({}, {}) -> ({}, {})",
            preview.start.x, preview.start.y, preview.end.x, preview.end.y
        );
    }

    let _ = writeln!(out, "Guides: {}", model.guide_count());
    for stroke in model.hover_guides.iter().chain(&model.drag_guides) {
        let _ = writeln!(out, "  {}", describe_guide(&stroke.guide));
    }

    out
}
