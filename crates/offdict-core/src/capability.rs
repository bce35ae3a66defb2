use crate::error::{HostError, SelectionError};

/// Window-level control exposed by the desktop shell
pub trait ShellControl {
    fn hide(&self) -> Result<(), HostError>;

    fn show(&self) -> Result<(), HostError>;
}

/// Rendering layer that owns the dropdown and the query input
pub trait RenderingSink {
    fn set_dropdown(&self, open: bool) -> Result<(), HostError>;

    fn is_input_focused(&self) -> bool;

    fn focus_input(&self) -> Result<(), HostError>;
}

/// Current text selection of the host (page, clipboard, primary selection)
pub trait SelectionSource: Send + Sync {
    fn current_selection(&self) -> Result<String, SelectionError>;
}

impl<T: ShellControl + ?Sized> ShellControl for &T {
    fn hide(&self) -> Result<(), HostError> {
        (**self).hide()
    }

    fn show(&self) -> Result<(), HostError> {
        (**self).show()
    }
}

impl<T: RenderingSink + ?Sized> RenderingSink for &T {
    fn set_dropdown(&self, open: bool) -> Result<(), HostError> {
        (**self).set_dropdown(open)
    }

    fn is_input_focused(&self) -> bool {
        (**self).is_input_focused()
    }

    fn focus_input(&self) -> Result<(), HostError> {
        (**self).focus_input()
    }
}

impl<T: SelectionSource + ?Sized> SelectionSource for std::sync::Arc<T> {
    fn current_selection(&self) -> Result<String, SelectionError> {
        (**self).current_selection()
    }
}

impl<T: SelectionSource + ?Sized> SelectionSource for &T {
    fn current_selection(&self) -> Result<String, SelectionError> {
        (**self).current_selection()
    }
}
