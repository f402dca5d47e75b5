//! Pointer and keyboard events fed in by the host.
//!
//! Pointer positions are in surface-local coordinates with the origin at the
//! top left corner of the drawing surface.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Modifier keys state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    /// Ctrl on most platforms, Cmd on macOS.
    pub fn command(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// Pointer event on the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down { position: Point },
    Move { position: Point },
    Up,
    /// The pointer left the drawing surface.
    Leave,
}

/// A key press with the modifiers held at the time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    /// Logical key value, e.g. `"z"`.
    pub key: String,
    #[serde(default)]
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub fn new(key: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            key: key.into(),
            modifiers,
        }
    }

    /// Check for the undo chord: command modifier plus lowercase `z`.
    pub fn is_undo(&self) -> bool {
        self.modifiers.command() && self.key == "z"
    }
}

/// What the editor did with a key event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyResponse {
    /// The editor acted on the key.
    pub handled: bool,
    /// The host must suppress the platform default action for this key.
    pub prevent_default: bool,
}

impl KeyResponse {
    /// The key is not bound to anything.
    pub fn ignored() -> Self {
        Self::default()
    }

    /// The key triggered an editor command.
    pub fn consumed() -> Self {
        Self {
            handled: true,
            prevent_default: true,
        }
    }
}
