//! Keyboard classification: raw key identifiers to game actions.
//!
//! This is the only place that interprets key names. Everything downstream
//! receives a `KeyAction`, so the typing state machine never sees a key it
//! cannot handle.

/// A parsed host key identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    F1,
    CapsLock,
    Escape,
    Backspace,
    Enter,
    /// A single printable character, case as typed.
    Char(char),
    /// Any other named key (arrows, Shift, Tab...).
    Other(String),
}

impl Key {
    /// Parse a `KeyboardEvent.key` string.
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "F1" => Key::F1,
            "CapsLock" => Key::CapsLock,
            "Escape" => Key::Escape,
            "Backspace" => Key::Backspace,
            "Enter" => Key::Enter,
            _ => {
                let mut chars = raw.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Char(c),
                    _ => Key::Other(raw.to_string()),
                }
            }
        }
    }
}

/// What a key press means to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    ToggleFreeMode,
    ToggleCase,
    ClearInput,
    Backspace,
    /// An ASCII letter, case as typed.
    Letter(char),
    Ignored,
}

impl KeyAction {
    /// Whether the host should suppress the browser default (help page on F1,
    /// caps lock state).
    pub fn prevents_default(self) -> bool {
        matches!(self, KeyAction::ToggleFreeMode | KeyAction::ToggleCase)
    }
}

/// Exhaustive classification: every key maps to exactly one action.
pub fn classify(key: &Key) -> KeyAction {
    match key {
        Key::F1 => KeyAction::ToggleFreeMode,
        Key::CapsLock => KeyAction::ToggleCase,
        Key::Escape => KeyAction::ClearInput,
        Key::Backspace => KeyAction::Backspace,
        Key::Char(c) if c.is_ascii_alphabetic() => KeyAction::Letter(*c),
        Key::Enter | Key::Char(_) | Key::Other(_) => KeyAction::Ignored,
    }
}
