//! Blueprint Core Library
//!
//! Platform-agnostic snapping engine, guide finder and edit history for the
//! Blueprint wall editor.

pub mod config;
pub mod display;
pub mod editor;
pub mod geometry;
pub mod guides;
pub mod history;
pub mod input;
pub mod session;
pub mod snap;

pub use config::{ConfigError, EditorConfig, GridShade};
pub use display::{DisplayModel, render};
pub use editor::EditorState;
pub use geometry::{EndpointRole, Segment, distance, length, round_to_grid};
pub use guides::{Axis, Guide, find_alignment_guides};
pub use history::{History, HistorySnapshot};
pub use input::{KeyEvent, KeyResponse, Modifiers, PointerEvent};
pub use session::{DrawingSession, SessionState};
pub use snap::{SnapKind, SnapResult, resolve, snap_point};
