//! Advisory guide geometry shown while hovering and drawing.
//!
//! Guides never feed back into snapping or the stored walls; they only
//! report alignments the renderer should paint.

use crate::geometry::{Segment, distance};
use crate::snap::{aligned_coordinate, snap_threshold};
use kurbo::{Line, Point, Rect, Size};

/// Radius of circular guide markers.
pub const MARKER_RADIUS: f64 = 6.0;

/// Orientation of an alignment ruler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Ruler at a fixed Y, spanning the surface width.
    Horizontal,
    /// Ruler at a fixed X, spanning the surface height.
    Vertical,
}

/// A piece of advisory geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Guide {
    /// Full-surface ruler through a coordinate shared with an existing wall.
    Ruler { axis: Axis, line: Line },
    /// The wall being drawn is about as long as an existing wall.
    LengthMatch { center: Point },
    /// The wall being drawn spans a near-square box.
    Square { bounds: Rect },
    /// Endpoint of a wall near the hover point.
    EndpointHighlight { center: Point },
}

impl Guide {
    fn horizontal(y: f64, surface: Size) -> Self {
        Guide::Ruler {
            axis: Axis::Horizontal,
            line: Line::new(Point::new(0.0, y), Point::new(surface.width, y)),
        }
    }

    fn vertical(x: f64, surface: Size) -> Self {
        Guide::Ruler {
            axis: Axis::Vertical,
            line: Line::new(Point::new(x, 0.0), Point::new(x, surface.height)),
        }
    }

    /// Check if this guide is an alignment ruler.
    pub fn is_ruler(&self) -> bool {
        matches!(self, Guide::Ruler { .. })
    }
}

/// Rulers contributed by one wall for a point.
fn rulers_for(
    point: Point,
    segment: &Segment,
    threshold: f64,
    surface: Size,
) -> impl Iterator<Item = Guide> {
    let horizontal = aligned_coordinate(point.y, segment.start.y, segment.end.y, threshold)
        .map(|y| Guide::horizontal(y, surface));
    let vertical = aligned_coordinate(point.x, segment.start.x, segment.end.x, threshold)
        .map(|x| Guide::vertical(x, surface));
    horizontal.into_iter().chain(vertical)
}

/// Alignment rulers for a single point, one per wall and axis match.
pub fn alignment_guides(
    point: Point,
    segments: &[Segment],
    pitch: f64,
    surface: Size,
) -> Vec<Guide> {
    let threshold = snap_threshold(pitch);
    segments
        .iter()
        .flat_map(|segment| rulers_for(point, segment, threshold, surface))
        .collect()
}

/// Alignment rulers for the moving end of `subject`.
pub fn find_alignment_guides(
    subject: &Segment,
    segments: &[Segment],
    pitch: f64,
    surface: Size,
) -> Vec<Guide> {
    alignment_guides(subject.end, segments, pitch, surface)
}

/// Check if `subject` is within half a pitch of the length of any wall.
pub fn matches_any_length(subject: &Segment, segments: &[Segment], pitch: f64) -> bool {
    let threshold = snap_threshold(pitch);
    let length = subject.length();
    segments
        .iter()
        .any(|other| (length - other.length()).abs() < threshold)
}

/// Check if the horizontal and vertical spans of `subject` are nearly equal.
pub fn is_near_square(subject: &Segment, pitch: f64) -> bool {
    let (dx, dy) = subject.spans();
    (dx - dy).abs() < snap_threshold(pitch)
}

/// All guides for a wall being dragged out.
///
/// Rulers come first in wall order, followed by at most one length marker
/// and at most one square outline.
pub fn drag_guides(
    subject: &Segment,
    segments: &[Segment],
    pitch: f64,
    surface: Size,
) -> Vec<Guide> {
    let mut guides = find_alignment_guides(subject, segments, pitch, surface);

    if matches_any_length(subject, segments, pitch) {
        guides.push(Guide::LengthMatch { center: subject.end });
    }

    if is_near_square(subject, pitch) {
        guides.push(Guide::Square {
            bounds: subject.bounds(),
        });
    }

    guides
}

/// Guides for an idle hover point.
///
/// For each wall: its rulers, then highlights on both of its endpoints when
/// either endpoint lies within one full pitch of the point.
pub fn hover_guides(point: Point, segments: &[Segment], pitch: f64, surface: Size) -> Vec<Guide> {
    let threshold = snap_threshold(pitch);
    let mut guides = Vec::new();

    for segment in segments {
        guides.extend(rulers_for(point, segment, threshold, surface));

        let near = distance(point, segment.start) < pitch || distance(point, segment.end) < pitch;
        if near {
            guides.push(Guide::EndpointHighlight { center: segment.start });
            guides.push(Guide::EndpointHighlight { center: segment.end });
        }
    }

    guides
}
