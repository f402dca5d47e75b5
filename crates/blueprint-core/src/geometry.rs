//! Wall segments and plane geometry helpers.

use kurbo::{Line, Point, Rect};

/// A straight wall between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Start point (the drag anchor).
    pub start: Point,
    /// End point.
    pub end: Point,
    /// Stroke thickness. Display only, never used by snapping.
    pub thickness: f64,
}

/// Which end of a segment a point refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointRole {
    Start,
    End,
}

impl Segment {
    /// Create a new segment.
    pub fn new(start: Point, end: Point, thickness: f64) -> Self {
        Self {
            start,
            end,
            thickness,
        }
    }

    /// Get the length of the segment.
    pub fn length(&self) -> f64 {
        distance(self.start, self.end)
    }

    /// Check whether both endpoints coincide.
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    /// Endpoints in scan order: start first, then end.
    pub fn endpoints(&self) -> [(EndpointRole, Point); 2] {
        [(EndpointRole::Start, self.start), (EndpointRole::End, self.end)]
    }

    /// Axis-aligned bounding box.
    pub fn bounds(&self) -> Rect {
        Rect::from_points(self.start, self.end)
    }

    /// Absolute horizontal and vertical spans.
    pub fn spans(&self) -> (f64, f64) {
        (
            (self.end.x - self.start.x).abs(),
            (self.end.y - self.start.y).abs(),
        )
    }

    /// Get as a kurbo Line.
    pub fn as_kurbo(&self) -> Line {
        Line::new(self.start, self.end)
    }
}

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    (dx * dx + dy * dy).sqrt()
}

/// Length of a segment.
pub fn length(segment: &Segment) -> f64 {
    segment.length()
}

/// Round a coordinate to the nearest multiple of `pitch`.
pub fn round_to_grid(value: f64, pitch: f64) -> f64 {
    (value / pitch).round() * pitch
}
