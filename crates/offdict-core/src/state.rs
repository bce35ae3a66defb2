/// Overlay visibility flags.
///
/// Only the key router mutates this. A dropdown can never be open while the
/// window is hidden: hiding closes it, opening it shows the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiState {
    window_visible: bool,
    dropdown_open: bool,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            window_visible: true,
            dropdown_open: false,
        }
    }

    pub fn window_visible(&self) -> bool {
        self.window_visible
    }

    pub fn dropdown_open(&self) -> bool {
        self.dropdown_open
    }

    pub fn hide(&mut self) {
        self.dropdown_open = false;
        self.window_visible = false;
    }

    pub fn show(&mut self) {
        self.window_visible = true;
    }

    pub fn open_dropdown(&mut self) {
        self.window_visible = true;
        self.dropdown_open = true;
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
impl UiState {
    pub(crate) fn with_dropdown_open() -> Self {
        Self {
            window_visible: true,
            dropdown_open: true,
        }
    }
}
