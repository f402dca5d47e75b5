//! Blueprint Application
//!
//! Host shell around the editor core: replays scripted pointer, key and
//! configuration events and reports the resulting drawing.

mod replay;
mod shortcuts;

pub use replay::{ReplayError, Script, ScriptEvent, replay, report};
pub use shortcuts::{Action, Chord, SHORTCUTS, Shortcut, help_text};
