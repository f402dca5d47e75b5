//! Snap functionality for aligning points to walls and the grid.
//!
//! Resolution runs in a fixed priority order: an existing wall endpoint
//! within half a grid pitch wins outright, otherwise each axis is grid
//! rounded and then pulled onto any wall coordinate it is aligned with.

use crate::geometry::{EndpointRole, Segment, round_to_grid};
use kurbo::Point;

/// Which rule produced a snapped point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapKind {
    /// Snapped verbatim onto an existing wall endpoint.
    Endpoint {
        /// Index of the wall in insertion order.
        segment: usize,
        /// Which end of that wall.
        role: EndpointRole,
    },
    /// Grid rounded, then at least one axis aligned with a wall coordinate.
    Aligned {
        /// Whether the X coordinate came from a wall.
        x: bool,
        /// Whether the Y coordinate came from a wall.
        y: bool,
    },
    /// Plain grid rounding on both axes.
    Grid,
}

/// Result of a snap operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapResult {
    /// The snapped point.
    pub point: Point,
    /// The rule that produced it.
    pub kind: SnapKind,
}

impl SnapResult {
    /// Check if the point landed on a wall endpoint.
    pub fn is_endpoint(&self) -> bool {
        matches!(self.kind, SnapKind::Endpoint { .. })
    }

    /// Check if any axis was aligned with a wall.
    pub fn is_aligned(&self) -> bool {
        matches!(self.kind, SnapKind::Aligned { .. })
    }
}

/// A wall endpoint found by proximity search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EndpointHit {
    /// Index of the wall in insertion order.
    pub segment: usize,
    /// Which end of that wall.
    pub role: EndpointRole,
    /// Location of the endpoint.
    pub point: Point,
}

/// Alignment threshold for a grid pitch.
pub fn snap_threshold(pitch: f64) -> f64 {
    pitch / 2.0
}

/// Snap a point to the nearest grid intersection.
pub fn snap_to_grid(point: Point, pitch: f64) -> Point {
    Point::new(round_to_grid(point.x, pitch), round_to_grid(point.y, pitch))
}

/// Find the wall endpoint closest to `point` and strictly within `threshold`.
///
/// Walls are scanned in insertion order, start before end. Only a strictly
/// closer endpoint replaces the current best, so the first one found wins ties.
pub fn find_nearest_endpoint(
    point: Point,
    segments: &[Segment],
    threshold: f64,
) -> Option<EndpointHit> {
    let mut best: Option<EndpointHit> = None;
    let mut best_dist_sq = threshold * threshold;

    for (index, segment) in segments.iter().enumerate() {
        for (role, endpoint) in segment.endpoints() {
            let dx = point.x - endpoint.x;
            let dy = point.y - endpoint.y;
            let dist_sq = dx * dx + dy * dy;

            if dist_sq < best_dist_sq {
                best_dist_sq = dist_sq;
                best = Some(EndpointHit {
                    segment: index,
                    role,
                    point: endpoint,
                });
            }
        }
    }

    best
}

/// Coordinate a single axis is pulled onto by one wall, if any.
///
/// Both ends are tested and the end wins when both qualify.
pub(crate) fn aligned_coordinate(raw: f64, start: f64, end: f64, threshold: f64) -> Option<f64> {
    let mut aligned = None;
    if (raw - start).abs() < threshold {
        aligned = Some(start);
    }
    if (raw - end).abs() < threshold {
        aligned = Some(end);
    }
    aligned
}

/// Snap a raw pointer position against the walls and the grid.
///
/// Panics if `raw` is not finite or `pitch` is not a positive number.
pub fn snap_point(raw: Point, segments: &[Segment], pitch: f64) -> SnapResult {
    assert!(raw.is_finite(), "cannot snap non-finite point {raw:?}");
    assert!(pitch.is_finite() && pitch > 0.0, "grid pitch must be positive, got {pitch}");

    let threshold = snap_threshold(pitch);

    if let Some(hit) = find_nearest_endpoint(raw, segments, threshold) {
        return SnapResult {
            point: hit.point,
            kind: SnapKind::Endpoint {
                segment: hit.segment,
                role: hit.role,
            },
        };
    }

    let mut snapped = snap_to_grid(raw, pitch);
    let mut aligned_x = false;
    let mut aligned_y = false;

    // Later walls overwrite earlier ones: last match wins, not closest.
    for segment in segments {
        if let Some(y) = aligned_coordinate(raw.y, segment.start.y, segment.end.y, threshold) {
            snapped.y = y;
            aligned_y = true;
        }
        if let Some(x) = aligned_coordinate(raw.x, segment.start.x, segment.end.x, threshold) {
            snapped.x = x;
            aligned_x = true;
        }
    }

    let kind = if aligned_x || aligned_y {
        SnapKind::Aligned {
            x: aligned_x,
            y: aligned_y,
        }
    } else {
        SnapKind::Grid
    };

    SnapResult { point: snapped, kind }
}

/// Resolve a raw pointer position to its canonical snapped point.
pub fn resolve(raw: Point, segments: &[Segment], pitch: f64) -> Point {
    snap_point(raw, segments, pitch).point
}
