use std::sync::Arc;

use kanal::AsyncReceiver;
use offdict_core::SelectionSource;
use offdict_dispatch::{LookupClient, SelectionDispatcher};
use offdict_types::{AppEvent, LookupOutcome};

use crate::state::AppState;

/// Handles are dropped on purpose: lookups are fire-and-forget
pub fn handle_selection_event<S, C>(dispatcher: &SelectionDispatcher<S, C>, event: AppEvent)
where
    S: SelectionSource,
    C: LookupClient,
{
    match event {
        AppEvent::SelectionReleased => {
            if let Some(handle) = dispatcher.on_selection_released() {
                tracing::info!("Looking up selection: {}", handle.query());
            }
        }
        AppEvent::TextInput { text, source } => {
            if let Some(handle) = dispatcher.dispatcher().dispatch_text(&text) {
                tracing::info!("Looking up {:?} text: {}", source, handle.query());
            }
        }
        other => {
            tracing::debug!("Selection ignoring {:?}", std::mem::discriminant(&other));
        }
    }
}

/// Record finished lookups for diagnostics
pub async fn outcome_loop(
    state: Arc<AppState>,
    outcome_rx: AsyncReceiver<LookupOutcome>,
) -> anyhow::Result<()> {
    while let Ok(outcome) = outcome_rx.recv().await {
        match &outcome {
            LookupOutcome::Completed { query, status, .. } => {
                tracing::info!("Lookup '{}' answered with {}", query, status);
            }
            LookupOutcome::Failed { query, reason } => {
                tracing::warn!("Lookup '{}' failed: {}", query, reason);
            }
        }
        state.status.lookups.write().await.record(&outcome);
    }

    Ok(())
}
