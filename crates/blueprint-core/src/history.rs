//! Linear edit history with undo.
//!
//! History is a list of wall-set snapshots and a cursor. The first snapshot
//! is always the empty drawing. Committing after an undo truncates the
//! undone future before appending, so there is no redo.

use crate::geometry::Segment;

/// An immutable copy of the wall set at one point in time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistorySnapshot {
    segments: Vec<Segment>,
}

impl HistorySnapshot {
    fn new(segments: &[Segment]) -> Self {
        Self {
            segments: segments.to_vec(),
        }
    }

    /// Walls in this snapshot, in insertion order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }
}

/// Snapshot list plus the index of the active snapshot.
#[derive(Debug, Clone)]
pub struct History {
    snapshots: Vec<HistorySnapshot>,
    cursor: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    /// Create a history holding only the empty drawing.
    pub fn new() -> Self {
        Self {
            snapshots: vec![HistorySnapshot::default()],
            cursor: 0,
        }
    }

    /// Record a new state, discarding anything past the cursor.
    pub fn commit(&mut self, segments: &[Segment]) {
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(HistorySnapshot::new(segments));
        self.cursor = self.snapshots.len() - 1;
    }

    /// Step back one snapshot.
    /// Returns the now-active walls, or `None` when already at the empty drawing.
    pub fn undo(&mut self) -> Option<&[Segment]> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(self.current())
    }

    /// Reset to a single empty snapshot.
    pub fn clear(&mut self) {
        self.snapshots.clear();
        self.snapshots.push(HistorySnapshot::default());
        self.cursor = 0;
    }

    /// Walls of the active snapshot.
    pub fn current(&self) -> &[Segment] {
        self.snapshots[self.cursor].segments()
    }

    /// Index of the active snapshot.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of retained snapshots, including any undone future.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Check if undo is available.
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// All retained snapshots, oldest first.
    pub fn snapshots(&self) -> &[HistorySnapshot] {
        &self.snapshots
    }
}
