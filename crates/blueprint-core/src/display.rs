//! Display projection: everything a renderer needs to paint one frame.
//!
//! `render` is a pure read of the editor state. Hosts call it after every
//! mutating call and paint the layers in order: background, grid, hover
//! guides, walls, preview, drag guides.

use crate::config::GridShade;
use crate::editor::EditorState;
use crate::geometry::Segment;
use crate::guides::{Guide, MARKER_RADIUS};
use kurbo::{Line, Size};
use peniko::Color;

/// Stroke width of background grid lines.
pub const GRID_LINE_WIDTH: f64 = 0.5;
/// Stroke width of guides.
pub const GUIDE_LINE_WIDTH: f64 = 2.0;
/// Most grid lines drawn along one axis. Denser grids are left out.
pub const MAX_GRID_LINES: usize = 4096;

/// Colors used by the editor.
pub mod palette {
    use peniko::Color;

    pub const BACKGROUND: Color = Color::from_rgba8(255, 255, 255, 255);
    pub const WALL: Color = Color::from_rgba8(30, 58, 138, 255);
    pub const GUIDE: Color = Color::from_rgba8(239, 68, 68, 255);
    pub const SQUARE: Color = Color::from_rgba8(34, 197, 94, 255);
    pub const GRID_LIGHT: Color = Color::from_rgba8(229, 231, 235, 255);
    pub const GRID_MEDIUM: Color = Color::from_rgba8(156, 163, 175, 255);
    pub const GRID_DARK: Color = Color::from_rgba8(75, 85, 99, 255);
}

/// Grid line color for a shade.
pub fn grid_color(shade: GridShade) -> Color {
    match shade {
        GridShade::Light => palette::GRID_LIGHT,
        GridShade::Medium => palette::GRID_MEDIUM,
        GridShade::Dark => palette::GRID_DARK,
    }
}

/// How a line is stroked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f64,
    /// Dash and gap lengths; `None` for a solid stroke.
    pub dash: Option<[f64; 2]>,
}

impl StrokeStyle {
    /// Style for a guide of the given kind.
    pub fn for_guide(guide: &Guide) -> Self {
        let (color, dash) = match guide {
            Guide::Ruler { .. } | Guide::EndpointHighlight { .. } => {
                (palette::GUIDE, Some([5.0, 5.0]))
            }
            Guide::LengthMatch { .. } => (palette::GUIDE, None),
            Guide::Square { .. } => (palette::SQUARE, Some([2.0, 2.0])),
        };
        Self {
            color,
            width: GUIDE_LINE_WIDTH,
            dash,
        }
    }
}

/// A wall ready to stroke with square caps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallStroke {
    pub line: Line,
    pub width: f64,
    pub color: Color,
}

impl From<&Segment> for WallStroke {
    fn from(segment: &Segment) -> Self {
        Self {
            line: segment.as_kurbo(),
            width: segment.thickness,
            color: palette::WALL,
        }
    }
}

/// A guide with its stroke style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuideStroke {
    pub guide: Guide,
    pub style: StrokeStyle,
    /// Radius for circular markers.
    pub radius: Option<f64>,
}

impl From<Guide> for GuideStroke {
    fn from(guide: Guide) -> Self {
        let radius = match guide {
            Guide::LengthMatch { .. } | Guide::EndpointHighlight { .. } => Some(MARKER_RADIUS),
            Guide::Ruler { .. } | Guide::Square { .. } => None,
        };
        Self {
            style: StrokeStyle::for_guide(&guide),
            guide,
            radius,
        }
    }
}

/// Background grid layer.
#[derive(Debug, Clone, PartialEq)]
pub struct GridLayer {
    pub color: Color,
    pub width: f64,
    pub lines: Vec<Line>,
}

/// One frame of display output.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayModel {
    pub surface: Size,
    pub background: Color,
    pub grid: GridLayer,
    pub hover_guides: Vec<GuideStroke>,
    pub walls: Vec<WallStroke>,
    pub preview: Option<WallStroke>,
    pub drag_guides: Vec<GuideStroke>,
}

impl DisplayModel {
    /// Total number of guides in the frame.
    pub fn guide_count(&self) -> usize {
        self.hover_guides.len() + self.drag_guides.len()
    }
}

/// Number of grid cells along an extent, or `None` past [`MAX_GRID_LINES`].
fn grid_cells(extent: f64, pitch: f64) -> Option<usize> {
    let cells = (extent / pitch).floor();
    (cells.is_finite() && cells < MAX_GRID_LINES as f64).then_some(cells as usize)
}

/// Grid lines at every multiple of `pitch` from 0 up to and including the surface edges.
///
/// Returns no lines when either axis would need more than [`MAX_GRID_LINES`].
pub fn grid_lines(surface: Size, pitch: f64) -> Vec<Line> {
    let (Some(columns), Some(rows)) = (
        grid_cells(surface.width, pitch),
        grid_cells(surface.height, pitch),
    ) else {
        log::debug!("Grid pitch {pitch} too dense for {surface:?}, skipping grid");
        return Vec::new();
    };
    let vertical = (0..=columns).map(|i| {
        let x = i as f64 * pitch;
        Line::new((x, 0.0), (x, surface.height))
    });
    let horizontal = (0..=rows).map(|i| {
        let y = i as f64 * pitch;
        Line::new((0.0, y), (surface.width, y))
    });
    vertical.chain(horizontal).collect()
}

/// Project the editor state into a display model.
pub fn render(state: &EditorState) -> DisplayModel {
    let config = state.config();
    DisplayModel {
        surface: config.surface,
        background: palette::BACKGROUND,
        grid: GridLayer {
            color: grid_color(config.grid_shade),
            width: GRID_LINE_WIDTH,
            lines: grid_lines(config.surface, config.grid_pitch),
        },
        hover_guides: state.hover_guides().into_iter().map(GuideStroke::from).collect(),
        walls: state.segments().iter().map(WallStroke::from).collect(),
        preview: state.preview().map(WallStroke::from),
        drag_guides: state.drag_guides().into_iter().map(GuideStroke::from).collect(),
    }
}
