use std::sync::Mutex;
use std::time::Duration;

use arboard::Clipboard;
use offdict_core::{SelectionError, SelectionSource};
use tokio::time;

/// Desktop selection: the clipboard, or the primary selection on Linux
pub struct SystemSelection {
    clipboard: Mutex<Clipboard>,
    primary: bool,
}

impl SystemSelection {
    pub fn new(primary: bool) -> anyhow::Result<Self> {
        let clipboard = Clipboard::new()?;
        Ok(Self {
            clipboard: Mutex::new(clipboard),
            primary: primary && cfg!(target_os = "linux"),
        })
    }

    #[cfg(target_os = "linux")]
    fn read(&self, clipboard: &mut Clipboard) -> Result<String, arboard::Error> {
        use arboard::{GetExtLinux, LinuxClipboardKind};

        if self.primary {
            clipboard.get().clipboard(LinuxClipboardKind::Primary).text()
        } else {
            clipboard.get_text()
        }
    }

    #[cfg(not(target_os = "linux"))]
    fn read(&self, clipboard: &mut Clipboard) -> Result<String, arboard::Error> {
        clipboard.get_text()
    }
}

impl SelectionSource for SystemSelection {
    fn current_selection(&self) -> Result<String, SelectionError> {
        let mut clipboard = self
            .clipboard
            .lock()
            .map_err(|_| SelectionError::Unavailable("clipboard lock poisoned".to_string()))?;

        match self.read(&mut clipboard) {
            Ok(text) => Ok(text),
            Err(arboard::Error::ContentNotAvailable) => Ok(String::new()),
            Err(arboard::Error::ConversionFailure) => Err(SelectionError::NotText),
            Err(e) => Err(SelectionError::Unavailable(e.to_string())),
        }
    }
}

/// Poll `source` and call `on_change` whenever it holds new, non-blank text.
/// Runs until the surrounding task is dropped.
pub async fn watch_selection<S, F>(
    source: S,
    period: Duration,
    mut on_change: F,
) -> Result<(), anyhow::Error>
where
    S: SelectionSource,
    F: FnMut(String) + Send + 'static,
{
    let mut last_text = String::new();
    let mut interval = time::interval(period);

    loop {
        interval.tick().await;
        match source.current_selection() {
            Ok(text) if !text.trim().is_empty() && text != last_text => {
                last_text = text.clone();
                on_change(text);
            }
            Ok(_) => {}
            Err(e) => tracing::trace!("Selection read failed: {}", e),
        }
    }
}
