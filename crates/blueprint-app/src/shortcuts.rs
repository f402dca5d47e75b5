//! Keyboard shortcuts understood by the editor.

use blueprint_core::{KeyEvent, Modifiers};
use std::fmt;

/// Platform command modifier a shortcut is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chord {
    /// Control key (Windows, Linux).
    Ctrl,
    /// Command key (macOS).
    Cmd,
}

impl Chord {
    fn modifiers(self) -> Modifiers {
        match self {
            Chord::Ctrl => Modifiers {
                ctrl: true,
                ..Default::default()
            },
            Chord::Cmd => Modifiers {
                meta: true,
                ..Default::default()
            },
        }
    }
}

/// What a shortcut does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Undo,
}

impl Action {
    pub fn description(self) -> &'static str {
        match self {
            Action::Undo => "Undo last wall",
        }
    }
}

/// A key plus chord bound to an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shortcut {
    pub key: char,
    pub chord: Chord,
    pub action: Action,
}

/// Every binding, one per platform chord.
pub const SHORTCUTS: [Shortcut; 2] = [
    Shortcut {
        key: 'z',
        chord: Chord::Ctrl,
        action: Action::Undo,
    },
    Shortcut {
        key: 'z',
        chord: Chord::Cmd,
        action: Action::Undo,
    },
];

impl Shortcut {
    /// The key event a host delivers for this binding.
    pub fn key_event(&self) -> KeyEvent {
        KeyEvent::new(self.key.to_string(), self.chord.modifiers())
    }
}

impl fmt::Display for Shortcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let chord = match self.chord {
            Chord::Ctrl => "Ctrl",
            Chord::Cmd => "Cmd",
        };
        write!(f, "{chord}+{}", self.key.to_ascii_uppercase())
    }
}

/// Help text listing every binding, one per line.
pub fn help_text() -> String {
    SHORTCUTS
        .iter()
        .map(|s| format!("  {:10} {}\n", s.to_string(), s.action.description()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(SHORTCUTS[0].to_string(), "Ctrl+Z");
        assert_eq!(SHORTCUTS[1].to_string(), "Cmd+Z");
    }

    #[test]
    fn test_bindings_produce_undo_events() {
        for shortcut in SHORTCUTS {
            assert_eq!(shortcut.action, Action::Undo);
            assert!(shortcut.key_event().is_undo(), "{shortcut} is not undo");
        }
    }

    #[test]
    fn test_help_text() {
        let help = help_text();
        assert_eq!(help.lines().count(), SHORTCUTS.len());
        assert!(help.contains("Cmd+Z"));
        assert!(help.contains("Undo last wall"));
    }
}
