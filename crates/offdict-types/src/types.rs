use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Keydown reaching the overlay
    Key(KeyEvent),
    /// Overlay window lost focus
    WindowBlurred,
    /// Rendering layer has results to show
    ResultsReady,
    /// Pointer released over a selection
    SelectionReleased,
    /// Text to look up as-is, bypassing a selection read
    TextInput {
        text: String,
        source: TextSource,
    },
}

/// Effects requested from the shell and rendering layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    Show,
    Hide,
    SetDropdown(bool),
    FocusInput,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSource {
    /// Picked up by the selection watcher
    Selection,
    /// Typed on the lookup input stream
    Manual,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    pub control: bool,
    pub alt: bool,
    pub shift: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        control: false,
        alt: false,
        shift: false,
    };

    pub fn any(&self) -> bool {
        self.control || self.alt || self.shift
    }
}

/// A single keydown: key identifier plus held modifiers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    pub key: String,
    #[serde(default)]
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            modifiers: Modifiers::NONE,
        }
    }

    pub fn with_modifiers(key: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            key: key.into(),
            modifiers,
        }
    }
}

/// Diagnostic result of a fire-and-forget lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Completed {
        query: String,
        status: u16,
        body: String,
    },
    Failed {
        query: String,
        reason: String,
    },
}
