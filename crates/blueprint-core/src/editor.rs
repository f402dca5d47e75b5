//! Editor state: committed walls, history, the active drag and the hover point.

use crate::config::{
    ConfigError, EditorConfig, validate_grid_pitch, validate_surface, validate_thickness,
};
use crate::geometry::Segment;
use crate::guides::{self, Guide};
use crate::history::History;
use crate::input::{KeyEvent, KeyResponse, PointerEvent};
use crate::session::DrawingSession;
use crate::snap;
use kurbo::{Point, Size};

/// The state of one open drawing.
///
/// All mutation goes through the drag entry points, `undo`, `clear` and the
/// configuration setters. Whenever no drag is active the committed walls
/// equal the active history snapshot.
#[derive(Debug, Clone)]
pub struct EditorState {
    config: EditorConfig,
    segments: Vec<Segment>,
    history: History,
    session: DrawingSession,
    hover: Option<Point>,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorState {
    /// Create an empty editor with the default configuration.
    pub fn new() -> Self {
        Self::empty(EditorConfig::default())
    }

    /// Create an empty editor, rejecting an invalid configuration.
    pub fn with_config(config: EditorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::empty(config))
    }

    fn empty(config: EditorConfig) -> Self {
        Self {
            config,
            segments: Vec::new(),
            history: History::new(),
            session: DrawingSession::new(),
            hover: None,
        }
    }

    /// Snap a raw pointer position against the committed walls.
    pub fn resolve(&self, raw: Point) -> Point {
        snap::resolve(raw, &self.segments, self.config.grid_pitch)
    }

    /// Pointer pressed: anchor a new wall at the snapped position.
    pub fn begin_drag(&mut self, raw: Point) {
        let anchor = self.resolve(raw);
        self.hover = Some(anchor);
        self.session.begin(anchor, self.config.thickness);
        log::trace!("Drag started at {anchor:?}");
    }

    /// Pointer moved: update the hover point and, while dragging, the preview end.
    pub fn move_drag(&mut self, raw: Point) {
        let point = self.resolve(raw);
        self.hover = Some(point);
        self.session.update(point, self.config.thickness);
    }

    /// Pointer released: commit the preview if it has any length.
    /// Returns true if a wall was committed.
    pub fn end_drag(&mut self) -> bool {
        let Some(wall) = self.session.end() else {
            return false;
        };
        self.segments.push(wall);
        self.history.commit(&self.segments);
        log::debug!(
            "Committed wall {:?} -> {:?} ({} walls, history step {})",
            wall.start,
            wall.end,
            self.segments.len(),
            self.history.cursor()
        );
        self.debug_check_history();
        true
    }

    /// Pointer left the surface: ends an active drag exactly like a release.
    /// Returns true if a wall was committed.
    pub fn leave_surface(&mut self) -> bool {
        self.hover = None;
        self.end_drag()
    }

    /// Undo the last committed change.
    /// Returns true if undo was performed, false if nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(previous) => {
                self.segments = previous.to_vec();
                log::debug!("Undo to history step {}", self.history.cursor());
                true
            }
            None => false,
        }
    }

    /// Remove every wall and reset history. An active drag is dropped.
    pub fn clear(&mut self) {
        self.segments.clear();
        self.history.clear();
        self.session.cancel();
        log::debug!("Drawing cleared");
    }

    /// Dispatch a pointer event to the matching entry point.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down { position } => self.begin_drag(position),
            PointerEvent::Move { position } => self.move_drag(position),
            PointerEvent::Up => {
                self.end_drag();
            }
            PointerEvent::Leave => {
                self.leave_surface();
            }
        }
    }

    /// Handle a key press. Only the undo chord is bound.
    pub fn handle_key_event(&mut self, event: &KeyEvent) -> KeyResponse {
        if event.is_undo() {
            if !self.undo() {
                log::debug!("Nothing to undo");
            }
            KeyResponse::consumed()
        } else {
            KeyResponse::ignored()
        }
    }

    /// Change the grid pitch for subsequent snapping.
    pub fn set_grid_pitch(&mut self, pitch: f64) -> Result<(), ConfigError> {
        validate_grid_pitch(pitch).inspect_err(|e| log::warn!("{e}"))?;
        self.config.grid_pitch = pitch;
        Ok(())
    }

    /// Change the thickness given to new walls.
    pub fn set_thickness(&mut self, thickness: f64) -> Result<(), ConfigError> {
        validate_thickness(thickness).inspect_err(|e| log::warn!("{e}"))?;
        self.config.thickness = thickness;
        Ok(())
    }

    /// Change the drawing surface size.
    pub fn set_surface_size(&mut self, width: f64, height: f64) -> Result<(), ConfigError> {
        let surface = Size::new(width, height);
        validate_surface(surface).inspect_err(|e| log::warn!("{e}"))?;
        self.config.surface = surface;
        Ok(())
    }

    /// Replace the whole configuration.
    pub fn set_config(&mut self, config: EditorConfig) -> Result<(), ConfigError> {
        config.validate().inspect_err(|e| log::warn!("{e}"))?;
        self.config = config;
        Ok(())
    }

    /// Current configuration.
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Committed walls in insertion order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Wall being dragged out, if any.
    pub fn preview(&self) -> Option<&Segment> {
        self.session.preview()
    }

    /// Check if a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.session.is_active()
    }

    /// Last snapped pointer position on the surface.
    pub fn hover_point(&self) -> Option<Point> {
        self.hover
    }

    /// Edit history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Guides around the hover point. Empty while dragging.
    pub fn hover_guides(&self) -> Vec<Guide> {
        match self.hover {
            Some(point) if !self.is_dragging() => guides::hover_guides(
                point,
                &self.segments,
                self.config.grid_pitch,
                self.config.surface,
            ),
            _ => Vec::new(),
        }
    }

    /// Guides for the wall being drawn. Empty while idle.
    pub fn drag_guides(&self) -> Vec<Guide> {
        match self.session.preview() {
            Some(preview) => guides::drag_guides(
                preview,
                &self.segments,
                self.config.grid_pitch,
                self.config.surface,
            ),
            None => Vec::new(),
        }
    }

    fn debug_check_history(&self) {
        debug_assert_eq!(self.history.current(), self.segments.as_slice());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Modifiers;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    fn draw(editor: &mut EditorState, from: Point, to: Point) -> bool {
        editor.begin_drag(from);
        editor.move_drag(to);
        editor.end_drag()
    }

    fn history_contents(editor: &EditorState) -> Vec<Vec<Segment>> {
        editor
            .history()
            .snapshots()
            .iter()
            .map(|s| s.segments().to_vec())
            .collect()
    }

    #[test]
    fn test_draw_commits_wall() {
        let mut editor = EditorState::new();
        assert!(draw(&mut editor, p(3.0, 2.0), p(98.0, 4.0)));
        assert_eq!(editor.segments(), &[Segment::new(p(0.0, 0.0), p(100.0, 0.0), 4.0)]);
        assert_eq!(editor.history().cursor(), 1);
        assert_eq!(editor.history().current(), editor.segments());
        assert!(!editor.is_dragging());
        assert!(editor.preview().is_none());
    }

    #[test]
    fn test_drag_preview_aligned_with_wall() {
        let mut editor = EditorState::new();
        draw(&mut editor, p(0.0, 0.0), p(0.0, 100.0));

        editor.begin_drag(p(5.0, 5.0));
        editor.move_drag(p(198.0, 3.0));
        let preview = editor.preview().unwrap();
        assert_eq!(preview.start, p(0.0, 0.0));
        assert_eq!(preview.end, p(200.0, 0.0));
    }

    #[test]
    fn test_zero_length_drag_leaves_state_unchanged() {
        let mut editor = EditorState::new();
        draw(&mut editor, p(0.0, 0.0), p(100.0, 0.0));
        let before = history_contents(&editor);

        editor.begin_drag(p(41.0, 39.0));
        editor.move_drag(p(38.0, 42.0));
        assert!(!editor.end_drag());

        assert_eq!(editor.segments().len(), 1);
        assert_eq!(history_contents(&editor), before);
        assert_eq!(editor.history().cursor(), 1);
    }

    #[test]
    fn test_click_without_move_discarded() {
        let mut editor = EditorState::new();
        editor.begin_drag(p(40.0, 40.0));
        assert!(!editor.end_drag());
        assert!(editor.segments().is_empty());
        assert_eq!(editor.history().len(), 1);
    }

    #[test]
    fn test_leave_surface_commits() {
        let mut editor = EditorState::new();
        editor.begin_drag(p(0.0, 0.0));
        editor.move_drag(p(60.0, 0.0));
        assert!(editor.leave_surface());
        assert_eq!(editor.segments().len(), 1);
        assert!(editor.hover_point().is_none());
        assert!(!editor.is_dragging());
    }

    #[test]
    fn test_undo_then_draw_truncates() {
        let mut editor = EditorState::new();
        draw(&mut editor, p(0.0, 0.0), p(100.0, 0.0));
        let a = editor.segments()[0];
        assert!(editor.undo());
        assert!(editor.segments().is_empty());

        draw(&mut editor, p(0.0, 200.0), p(0.0, 300.0));
        let b = editor.segments()[0];
        assert_eq!(history_contents(&editor), vec![vec![], vec![a], vec![b]]);
        assert_eq!(editor.history().cursor(), 2);
    }

    #[test]
    fn test_undo_floor() {
        let mut editor = EditorState::new();
        draw(&mut editor, p(0.0, 0.0), p(100.0, 0.0));
        assert!(editor.undo());
        assert!(!editor.undo());
        assert!(!editor.undo());
        assert_eq!(editor.history().cursor(), 0);
        assert!(editor.segments().is_empty());
    }

    #[test]
    fn test_undo_restores_copy() {
        let mut editor = EditorState::new();
        draw(&mut editor, p(0.0, 0.0), p(100.0, 0.0));
        draw(&mut editor, p(0.0, 100.0), p(100.0, 100.0));
        draw(&mut editor, p(0.0, 200.0), p(100.0, 200.0));
        editor.undo();
        assert_eq!(editor.segments().len(), 2);
        // Drawing on top of a restored state must not touch the snapshot it came from.
        draw(&mut editor, p(200.0, 0.0), p(200.0, 100.0));
        assert_eq!(editor.history().snapshots()[2].segments().len(), 2);
        assert_eq!(editor.history().current().len(), 3);
    }

    #[test]
    fn test_clear() {
        let mut editor = EditorState::new();
        draw(&mut editor, p(0.0, 0.0), p(100.0, 0.0));
        editor.begin_drag(p(0.0, 100.0));
        editor.clear();
        assert!(editor.segments().is_empty());
        assert!(!editor.is_dragging());
        assert_eq!(editor.history().len(), 1);
        assert_eq!(editor.history().cursor(), 0);
    }

    #[test]
    fn test_hover_snaps_to_endpoint() {
        let mut editor = EditorState::new();
        draw(&mut editor, p(0.0, 0.0), p(100.0, 0.0));
        editor.move_drag(p(101.0, 1.0));
        assert_eq!(editor.hover_point(), Some(p(100.0, 0.0)));
        assert!(!editor.hover_guides().is_empty());
    }

    #[test]
    fn test_hover_guides_suppressed_while_dragging() {
        let mut editor = EditorState::new();
        draw(&mut editor, p(0.0, 0.0), p(100.0, 0.0));
        editor.begin_drag(p(100.0, 0.0));
        editor.move_drag(p(100.0, 100.0));
        assert!(editor.hover_guides().is_empty());
        assert!(!editor.drag_guides().is_empty());
    }

    #[test]
    fn test_drag_guides_empty_when_idle() {
        let mut editor = EditorState::new();
        draw(&mut editor, p(0.0, 0.0), p(100.0, 0.0));
        assert!(editor.drag_guides().is_empty());
    }

    #[test]
    fn test_config_changes_not_retroactive() {
        let mut editor = EditorState::new();
        draw(&mut editor, p(0.0, 0.0), p(100.0, 0.0));
        editor.set_grid_pitch(40.0).unwrap();
        editor.set_thickness(6.0).unwrap();
        assert_eq!(editor.segments()[0].thickness, 4.0);

        draw(&mut editor, p(0.0, 200.0), p(0.0, 330.0));
        let wall = editor.segments()[1];
        assert_eq!(wall.thickness, 6.0);
        assert_eq!(wall.end, p(0.0, 320.0));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut editor = EditorState::new();
        assert!(editor.set_grid_pitch(0.0).is_err());
        assert!(editor.set_thickness(f64::NAN).is_err());
        assert!(editor.set_surface_size(-1.0, 10.0).is_err());
        assert_eq!(editor.config(), &EditorConfig::default());
    }

    #[test]
    fn test_with_config_validates() {
        let bad = EditorConfig {
            grid_pitch: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            EditorState::with_config(bad),
            Err(ConfigError::InvalidGridPitch(_))
        ));

        let config = EditorConfig {
            grid_pitch: 40.0,
            ..Default::default()
        };
        let editor = EditorState::with_config(config).unwrap();
        assert_eq!(editor.config().grid_pitch, 40.0);
        assert!(editor.segments().is_empty());
    }

    #[test]
    fn test_pointer_event_dispatch() {
        let mut editor = EditorState::new();
        editor.handle_pointer_event(PointerEvent::Down { position: p(0.0, 0.0) });
        editor.handle_pointer_event(PointerEvent::Move { position: p(0.0, 80.0) });
        editor.handle_pointer_event(PointerEvent::Up);
        assert_eq!(editor.segments().len(), 1);

        editor.handle_pointer_event(PointerEvent::Down { position: p(200.0, 0.0) });
        editor.handle_pointer_event(PointerEvent::Move { position: p(260.0, 0.0) });
        editor.handle_pointer_event(PointerEvent::Leave);
        assert_eq!(editor.segments().len(), 2);
    }

    #[test]
    fn test_undo_key() {
        let mut editor = EditorState::new();
        draw(&mut editor, p(0.0, 0.0), p(100.0, 0.0));
        let ctrl = Modifiers {
            ctrl: true,
            ..Default::default()
        };

        let response = editor.handle_key_event(&KeyEvent::new("z", ctrl));
        assert!(response.prevent_default);
        assert!(editor.segments().is_empty());

        // Still consumed at the bottom of history.
        let response = editor.handle_key_event(&KeyEvent::new("z", ctrl));
        assert!(response.handled);

        let response = editor.handle_key_event(&KeyEvent::new("x", ctrl));
        assert!(!response.handled);
    }
}
