//! Drawing session: the drag that places a single wall.

use crate::geometry::Segment;
use kurbo::Point;

/// State of a drawing interaction.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum SessionState {
    /// No drag in progress.
    #[default]
    Idle,
    /// A wall is being dragged out from a fixed anchor.
    Dragging {
        /// Snapped start point, fixed for the whole drag.
        anchor: Point,
        /// Wall as it would be committed right now.
        preview: Segment,
    },
}

/// Tracks the wall currently being drawn.
#[derive(Debug, Clone, Default)]
pub struct DrawingSession {
    state: SessionState,
}

impl DrawingSession {
    /// Create an idle session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a drag at an already snapped anchor.
    pub fn begin(&mut self, anchor: Point, thickness: f64) {
        self.state = SessionState::Dragging {
            anchor,
            preview: Segment::new(anchor, anchor, thickness),
        };
    }

    /// Move the free end of the preview. No-op while idle.
    pub fn update(&mut self, end: Point, thickness: f64) {
        if let SessionState::Dragging { anchor, preview } = &mut self.state {
            *preview = Segment::new(*anchor, end, thickness);
        }
    }

    /// End the drag and return the wall to commit, if it has any length.
    pub fn end(&mut self) -> Option<Segment> {
        match std::mem::take(&mut self.state) {
            SessionState::Dragging { preview, .. } if !preview.is_degenerate() => Some(preview),
            _ => None,
        }
    }

    /// Drop the drag without producing a wall.
    pub fn cancel(&mut self) {
        self.state = SessionState::Idle;
    }

    /// Check if a drag is in progress.
    pub fn is_active(&self) -> bool {
        matches!(self.state, SessionState::Dragging { .. })
    }

    /// Anchor of the current drag.
    pub fn anchor(&self) -> Option<Point> {
        match self.state {
            SessionState::Dragging { anchor, .. } => Some(anchor),
            SessionState::Idle => None,
        }
    }

    /// Preview wall of the current drag.
    pub fn preview(&self) -> Option<&Segment> {
        match &self.state {
            SessionState::Dragging { preview, .. } => Some(preview),
            SessionState::Idle => None,
        }
    }

    /// Current state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_interaction() {
        let mut session = DrawingSession::new();
        assert!(!session.is_active());
        assert!(session.preview().is_none());

        session.begin(Point::new(20.0, 20.0), 4.0);
        assert!(session.is_active());
        let preview = session.preview().unwrap();
        assert_eq!(preview.start, Point::new(20.0, 20.0));
        assert_eq!(preview.end, Point::new(20.0, 20.0));

        session.update(Point::new(120.0, 20.0), 4.0);
        let wall = session.end().unwrap();
        assert_eq!(wall, Segment::new(Point::new(20.0, 20.0), Point::new(120.0, 20.0), 4.0));
        assert!(!session.is_active());
    }

    #[test]
    fn test_anchor_fixed_during_drag() {
        let mut session = DrawingSession::new();
        session.begin(Point::new(0.0, 0.0), 4.0);
        session.update(Point::new(40.0, 0.0), 4.0);
        session.update(Point::new(40.0, 60.0), 6.0);
        assert_eq!(session.anchor(), Some(Point::new(0.0, 0.0)));
        let preview = session.preview().unwrap();
        assert_eq!(preview.start, Point::new(0.0, 0.0));
        assert_eq!(preview.end, Point::new(40.0, 60.0));
        assert_eq!(preview.thickness, 6.0);
    }

    #[test]
    fn test_zero_length_discarded() {
        let mut session = DrawingSession::new();
        session.begin(Point::new(20.0, 20.0), 4.0);
        session.update(Point::new(60.0, 20.0), 4.0);
        session.update(Point::new(20.0, 20.0), 4.0);
        assert!(session.end().is_none());
        assert!(!session.is_active());
    }

    #[test]
    fn test_idle_ignores_updates() {
        let mut session = DrawingSession::new();
        session.update(Point::new(10.0, 10.0), 4.0);
        assert_eq!(session.state(), &SessionState::Idle);
        assert!(session.end().is_none());
    }

    #[test]
    fn test_cancel() {
        let mut session = DrawingSession::new();
        session.begin(Point::new(0.0, 0.0), 4.0);
        session.update(Point::new(100.0, 0.0), 4.0);
        session.cancel();
        assert!(!session.is_active());
        assert!(session.end().is_none());
    }
}
