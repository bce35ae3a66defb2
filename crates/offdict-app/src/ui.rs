use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use kanal::{AsyncReceiver, Sender};
use offdict_core::{HostError, RenderingSink, ShellControl};
use offdict_types::UiEvent;

/// Shell + rendering collaborator that forwards effects to the UI loop.
///
/// Focus is tracked here rather than in the UI loop so the router sees the
/// result of its own focus request on the very next key.
#[derive(Clone)]
pub struct ChannelHost {
    tx: Sender<UiEvent>,
    input_focused: Arc<AtomicBool>,
}

impl ChannelHost {
    pub fn new(tx: Sender<UiEvent>) -> Self {
        Self {
            tx,
            input_focused: Arc::new(AtomicBool::new(false)),
        }
    }

    fn forward(&self, event: UiEvent) -> Result<(), HostError> {
        self.tx
            .send(event)
            .map_err(|e| HostError::Unavailable(format!("UI loop gone: {e}")))
    }
}

impl ShellControl for ChannelHost {
    fn hide(&self) -> Result<(), HostError> {
        self.input_focused.store(false, Ordering::SeqCst);
        self.forward(UiEvent::Hide)
    }

    fn show(&self) -> Result<(), HostError> {
        self.forward(UiEvent::Show)
    }
}

impl RenderingSink for ChannelHost {
    fn set_dropdown(&self, open: bool) -> Result<(), HostError> {
        self.forward(UiEvent::SetDropdown(open))
    }

    fn is_input_focused(&self) -> bool {
        self.input_focused.load(Ordering::SeqCst)
    }

    fn focus_input(&self) -> Result<(), HostError> {
        self.forward(UiEvent::FocusInput)?;
        self.input_focused.store(true, Ordering::SeqCst);
        Ok(())
    }
}

/// What a real window would currently look like
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeadlessWindow {
    pub visible: bool,
    pub dropdown: bool,
    pub input_focused: bool,
    pub focus_requests: u64,
}

impl HeadlessWindow {
    pub fn new() -> Self {
        Self {
            visible: true,
            ..Self::default()
        }
    }

    pub fn apply(&mut self, event: UiEvent) {
        match event {
            UiEvent::Show => self.visible = true,
            UiEvent::Hide => {
                self.visible = false;
                self.input_focused = false;
            }
            UiEvent::SetDropdown(open) => self.dropdown = open,
            UiEvent::FocusInput => {
                self.input_focused = true;
                self.focus_requests += 1;
            }
        }
    }
}

/// Drain UI effects until every host handle is dropped
pub async fn ui_loop(ui_rx: AsyncReceiver<UiEvent>) -> anyhow::Result<HeadlessWindow> {
    let mut window = HeadlessWindow::new();

    while let Ok(event) = ui_rx.recv().await {
        window.apply(event);
        tracing::info!(
            "[UI] {:?} -> visible={} dropdown={} focused={}",
            event,
            window.visible,
            window.dropdown,
            window.input_focused
        );
    }

    tracing::debug!("[UI] effect channel closed");
    Ok(window)
}
