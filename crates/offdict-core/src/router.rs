use offdict_config::overlay::OverlayConfig;
use offdict_types::KeyEvent;

use crate::capability::{RenderingSink, ShellControl};
use crate::key::{KeyClass, classify};
use crate::state::UiState;

#[derive(Debug, Clone)]
pub struct RouterOptions {
    /// Request focus for input keys even when the window is hidden
    pub focus_when_hidden: bool,
    /// Treat a lost window focus like Escape
    pub hide_on_blur: bool,
    /// Extra keys passed through alongside the built-in reserved set
    pub passthrough_keys: Vec<String>,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            focus_when_hidden: true,
            hide_on_blur: false,
            passthrough_keys: vec![],
        }
    }
}

impl From<&OverlayConfig> for RouterOptions {
    fn from(config: &OverlayConfig) -> Self {
        Self {
            focus_when_hidden: config.focus_when_hidden,
            hide_on_blur: config.hide_on_blur,
            passthrough_keys: config.passthrough_keys.clone(),
        }
    }
}

/// What the router did with a keydown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDisposition {
    /// Modifier held, left to the shell
    Ignored,
    /// Escape: dropdown closed, window hidden
    Dismissed,
    /// Reserved key delivered to the widget untouched
    PassedThrough,
    /// Focus was moved to the query input
    Refocused,
    /// Input already had focus, nothing to do
    AlreadyFocused,
    /// Window hidden and hidden-window focus is disabled
    Suppressed,
}

/// Classifies overlay keydowns and drives window/dropdown state.
///
/// Events must be fed one at a time in arrival order; every transition is
/// applied before `handle_key` returns.
pub struct OverlayKeyRouter<H> {
    host: H,
    state: UiState,
    options: RouterOptions,
}

impl<H> OverlayKeyRouter<H>
where
    H: ShellControl + RenderingSink,
{
    pub fn new(host: H, options: RouterOptions) -> Self {
        Self::with_state(host, options, UiState::new())
    }

    pub fn with_state(host: H, options: RouterOptions, state: UiState) -> Self {
        Self {
            host,
            state,
            options,
        }
    }

    pub fn state(&self) -> UiState {
        self.state
    }

    pub fn handle_key(&mut self, event: &KeyEvent) -> KeyDisposition {
        let disposition = match classify(event, &self.options.passthrough_keys) {
            KeyClass::Modified => KeyDisposition::Ignored,
            KeyClass::Dismiss => {
                self.dismiss();
                KeyDisposition::Dismissed
            }
            KeyClass::Reserved => KeyDisposition::PassedThrough,
            KeyClass::Input => self.refocus(),
        };

        tracing::debug!(key = %event.key, ?disposition, "key routed");
        disposition
    }

    /// Global shortcut: hide when visible, show when hidden.
    /// Returns the new visibility.
    pub fn toggle_window(&mut self) -> bool {
        if self.state.window_visible() {
            self.dismiss();
        } else {
            self.show();
        }
        self.state.window_visible()
    }

    /// Returns true when the blur hid the window
    pub fn window_blurred(&mut self) -> bool {
        if !self.options.hide_on_blur || !self.state.window_visible() {
            return false;
        }
        tracing::debug!("window blurred, hiding");
        self.dismiss();
        true
    }

    /// Results arrived: make sure the window is up, then expand the dropdown
    pub fn open_dropdown(&mut self) {
        if !self.state.window_visible() {
            self.show();
        }
        self.state.open_dropdown();
        if let Err(e) = self.host.set_dropdown(true) {
            tracing::warn!("Failed to open dropdown: {}", e);
        }
    }

    fn dismiss(&mut self) {
        self.state.hide();

        if let Err(e) = self.host.set_dropdown(false) {
            tracing::warn!("Failed to close dropdown: {}", e);
        }
        if let Err(e) = self.host.hide() {
            tracing::warn!("Failed to hide window: {}", e);
        }
    }

    fn show(&mut self) {
        self.state.show();
        if let Err(e) = self.host.show() {
            tracing::warn!("Failed to show window: {}", e);
        }
    }

    fn refocus(&mut self) -> KeyDisposition {
        if !self.state.window_visible() && !self.options.focus_when_hidden {
            return KeyDisposition::Suppressed;
        }

        if self.host.is_input_focused() {
            return KeyDisposition::AlreadyFocused;
        }

        if let Err(e) = self.host.focus_input() {
            tracing::warn!("Failed to focus query input: {}", e);
        }
        KeyDisposition::Refocused
    }
}
