use offdict_core::{OverlayKeyRouter, RenderingSink, ShellControl};
use offdict_types::{AppEvent, KeyEvent};

pub fn handle_overlay_event<H>(
    router: &mut OverlayKeyRouter<H>,
    toggle_shortcut: Option<&KeyEvent>,
    event: AppEvent,
) where
    H: ShellControl + RenderingSink,
{
    match event {
        AppEvent::Key(key) if toggle_shortcut.is_some_and(|s| is_shortcut(&key, s)) => {
            let visible = router.toggle_window();
            tracing::debug!("Toggle shortcut, window visible: {}", visible);
        }
        AppEvent::Key(key) => {
            router.handle_key(&key);
        }
        AppEvent::WindowBlurred => {
            router.window_blurred();
        }
        AppEvent::ResultsReady => router.open_dropdown(),
        other => {
            tracing::debug!("Overlay ignoring {:?}", std::mem::discriminant(&other));
        }
    }
}

/// Shortcut letters match regardless of case, since shift is not part of them
fn is_shortcut(key: &KeyEvent, shortcut: &KeyEvent) -> bool {
    key.modifiers == shortcut.modifiers && key.key.eq_ignore_ascii_case(&shortcut.key)
}
