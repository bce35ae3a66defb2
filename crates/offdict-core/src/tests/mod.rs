mod preprocess_tests;

use std::cell::{Cell, RefCell};

use offdict_types::UiEvent;

use crate::capability::{RenderingSink, ShellControl};
use crate::error::HostError;

/// Host double that records every effect the router requests
#[derive(Default)]
pub struct RecordingHost {
    pub effects: RefCell<Vec<UiEvent>>,
    pub focused: Cell<bool>,
    pub failing: bool,
}

impl RecordingHost {
    pub fn focused() -> Self {
        let host = Self::default();
        host.focused.set(true);
        host
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn count(&self, effect: UiEvent) -> usize {
        self.effects.borrow().iter().filter(|e| **e == effect).count()
    }

    fn record(&self, effect: UiEvent) -> Result<(), HostError> {
        self.effects.borrow_mut().push(effect);
        if self.failing {
            Err(HostError::Unavailable("test host".to_string()))
        } else {
            Ok(())
        }
    }
}

impl ShellControl for RecordingHost {
    fn hide(&self) -> Result<(), HostError> {
        self.record(UiEvent::Hide)
    }

    fn show(&self) -> Result<(), HostError> {
        self.record(UiEvent::Show)
    }
}

impl RenderingSink for RecordingHost {
    fn set_dropdown(&self, open: bool) -> Result<(), HostError> {
        self.record(UiEvent::SetDropdown(open))
    }

    fn is_input_focused(&self) -> bool {
        self.focused.get()
    }

    fn focus_input(&self) -> Result<(), HostError> {
        self.record(UiEvent::FocusInput)?;
        self.focused.set(true);
        Ok(())
    }
}
