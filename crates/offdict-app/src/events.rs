use kanal::AsyncReceiver;
use offdict_core::{OverlayKeyRouter, RenderingSink, SelectionSource, ShellControl};
use offdict_dispatch::{LookupClient, SelectionDispatcher};
use offdict_types::{AppEvent, KeyEvent};

pub mod key_input;
pub mod selection;

use key_input::handle_overlay_event;
use selection::handle_selection_event;

/// Overlay main loop. Owns the router, so events are applied strictly one
/// at a time in arrival order.
pub async fn overlay_loop<H>(
    mut router: OverlayKeyRouter<H>,
    toggle_shortcut: Option<KeyEvent>,
    input_rx: AsyncReceiver<AppEvent>,
) -> anyhow::Result<()>
where
    H: ShellControl + RenderingSink,
{
    tracing::info!("[OVERLAY] Waiting for key events");
    while let Ok(event) = input_rx.recv().await {
        handle_overlay_event(&mut router, toggle_shortcut.as_ref(), event);
    }

    tracing::info!("[OVERLAY] Input channel closed");
    Ok(())
}

/// Selection main loop: every release gesture becomes an independent lookup
pub async fn selection_loop<S, C>(
    dispatcher: SelectionDispatcher<S, C>,
    input_rx: AsyncReceiver<AppEvent>,
) -> anyhow::Result<()>
where
    S: SelectionSource,
    C: LookupClient,
{
    tracing::info!("[SELECTION] Waiting for selections");
    while let Ok(event) = input_rx.recv().await {
        handle_selection_event(&dispatcher, event);
    }

    tracing::info!("[SELECTION] Input channel closed");
    Ok(())
}
