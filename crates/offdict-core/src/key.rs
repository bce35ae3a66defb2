use offdict_types::{KeyEvent, Modifiers};

use crate::error::KeyParseError;

/// Closes the dropdown and hides the overlay
pub const DISMISS_KEY: &str = "Escape";

/// Keys owned by the input widget or the window manager
pub const RESERVED_KEYS: [&str; 5] = ["Enter", "Control", "Super", "PageUp", "PageDown"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyClass {
    /// Control, alt or shift held: shell shortcut territory
    Modified,
    Dismiss,
    Reserved,
    /// Anything else, including identifiers we have never seen
    Input,
}

/// Classify a keydown. Checks run in priority order: modifiers first, then
/// Escape, then the reserved set (built-in plus `extra_reserved`).
pub fn classify(event: &KeyEvent, extra_reserved: &[String]) -> KeyClass {
    if event.modifiers.any() {
        return KeyClass::Modified;
    }

    let key = event.key.as_str();
    if key == DISMISS_KEY {
        KeyClass::Dismiss
    } else if RESERVED_KEYS.contains(&key) || extra_reserved.iter().any(|k| k == key) {
        KeyClass::Reserved
    } else {
        KeyClass::Input
    }
}

/// Parse notation like `Escape`, `a`, `Shift+A` or `Ctrl+Alt+C`.
///
/// The last `+` segment is the key, everything before it is a modifier.
/// A lone `Control` (or `Ctrl`) is the standalone Control key.
pub fn parse_key_notation(notation: &str) -> Result<KeyEvent, KeyParseError> {
    let notation = notation.trim();
    if notation.is_empty() {
        return Err(KeyParseError::Empty);
    }

    let (prefix, key) = if notation == "+" {
        (None, "+")
    } else if let Some(prefix) = notation.strip_suffix("++") {
        (Some(prefix), "+")
    } else {
        match notation.rsplit_once('+') {
            Some((prefix, key)) => (Some(prefix), key),
            None => (None, notation),
        }
    };

    let key = key.trim();
    if key.is_empty() {
        return Err(KeyParseError::MissingKey(notation.to_string()));
    }

    let mut modifiers = Modifiers::NONE;
    if let Some(prefix) = prefix {
        for part in prefix.split('+') {
            match part.trim().to_ascii_lowercase().as_str() {
                "ctrl" | "control" => modifiers.control = true,
                "alt" => modifiers.alt = true,
                "shift" => modifiers.shift = true,
                "" => return Err(KeyParseError::MissingKey(notation.to_string())),
                other => return Err(KeyParseError::UnknownModifier(other.to_string())),
            }
        }
    }

    Ok(KeyEvent::with_modifiers(canonical_key_name(key), modifiers))
}

fn canonical_key_name(key: &str) -> String {
    match key.to_ascii_lowercase().as_str() {
        "esc" | "escape" => "Escape".to_string(),
        "enter" | "return" => "Enter".to_string(),
        "ctrl" | "control" => "Control".to_string(),
        "super" | "meta" | "win" => "Super".to_string(),
        "pageup" | "pgup" => "PageUp".to_string(),
        "pagedown" | "pgdn" => "PageDown".to_string(),
        "space" => " ".to_string(),
        "tab" => "Tab".to_string(),
        "backspace" => "Backspace".to_string(),
        _ => key.to_string(),
    }
}
