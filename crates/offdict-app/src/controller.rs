use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use kanal::{AsyncReceiver, AsyncSender, Sender};
use offdict_core::key::parse_key_notation;
use offdict_core::preprocess::SelectionFilter;
use offdict_core::{OverlayKeyRouter, RouterOptions, SelectionSource};
use offdict_dispatch::{HttpLookupClient, LookupDispatcher, LookupTarget, SelectionDispatcher};
use offdict_io::{read_input_events, read_lookup_events, watch_selection};
use offdict_types::{AppEvent, LookupOutcome, TextSource, UiEvent};
use tokio::io::AsyncBufRead;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::events::selection::outcome_loop;
use crate::events::{overlay_loop, selection_loop};
use crate::state::AppState;
use crate::ui::{ChannelHost, ui_loop};

/// Centralized channel management
pub struct ChannelSet {
    pub input: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
    pub ui: (Sender<UiEvent>, AsyncReceiver<UiEvent>),
    pub outcomes: (AsyncSender<LookupOutcome>, AsyncReceiver<LookupOutcome>),
}

impl ChannelSet {
    pub fn new() -> Self {
        let (ui_tx, ui_rx) = kanal::unbounded();
        Self {
            input: kanal::unbounded_async(), // keystrokes must never be dropped or reordered
            ui: (ui_tx, ui_rx.to_async()),    // router side is synchronous
            outcomes: kanal::bounded_async(256), // lookup burst capacity
        }
    }
}

impl Default for ChannelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Task spawning and lifecycle.
///
/// Each surface gets its own channel set; senders are moved into the
/// producing tasks so a closed input drains the pipeline and ends the run.
pub struct AppController {
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            state,
            cancel_token: CancellationToken::new(),
        }
    }

    /// Overlay surface: key events from `input` drive the router
    pub async fn spawn_overlay<R>(&self, input: R) -> anyhow::Result<JoinSet<anyhow::Result<()>>>
    where
        R: AsyncBufRead + Unpin + Send + 'static,
    {
        let (options, toggle) = {
            let config = self.state.config.read().await;
            (
                RouterOptions::from(&config.overlay),
                config.overlay.toggle_shortcut.clone(),
            )
        };

        let toggle_shortcut = if toggle.trim().is_empty() {
            None
        } else {
            Some(
                parse_key_notation(&toggle)
                    .with_context(|| format!("Invalid toggle shortcut {toggle:?}"))?,
            )
        };

        let ChannelSet {
            input: (input_tx, input_rx),
            ui: (ui_tx, ui_rx),
            ..
        } = ChannelSet::new();

        let router = OverlayKeyRouter::new(ChannelHost::new(ui_tx), options);
        let mut tasks = JoinSet::new();

        // Router loop
        tasks.spawn(overlay_loop(router, toggle_shortcut, input_rx));

        // Headless UI
        tasks.spawn(async move { ui_loop(ui_rx).await.map(|_| ()) });

        // Input reader
        let cancel = self.cancel_token.child_token();
        tasks.spawn(async move {
            tokio::select! {
                result = read_input_events(input, move |event| {
                    if let Err(e) = input_tx.try_send(event) {
                        tracing::error!("Failed to queue input event: {}", e);
                    }
                }) => result,
                _ = cancel.cancelled() => {
                    tracing::info!("Input reader stopping");
                    Ok(())
                }
            }
        });

        Ok(tasks)
    }

    /// Selection surface: every new selection seen by the watcher is looked up
    pub async fn spawn_watch<S>(&self, source: S) -> anyhow::Result<JoinSet<anyhow::Result<()>>>
    where
        S: SelectionSource + 'static,
    {
        let poll_interval_ms = self.state.config.read().await.selection.poll_interval_ms;
        let source = Arc::new(source);

        let mut tasks = JoinSet::new();
        let input_tx = self.spawn_dispatch(Arc::clone(&source), &mut tasks).await;

        // Selection watcher; the text it saw is what gets looked up
        let period = Duration::from_millis(poll_interval_ms.max(1));
        let cancel = self.cancel_token.child_token();
        tasks.spawn(async move {
            tokio::select! {
                result = watch_selection(source, period, move |text| {
                    tracing::debug!("Selection changed: {} chars", text.chars().count());
                    let event = AppEvent::TextInput {
                        text,
                        source: TextSource::Selection,
                    };
                    if let Err(e) = input_tx.try_send(event) {
                        tracing::error!("Failed to queue selection: {}", e);
                    }
                }) => result,
                _ = cancel.cancelled() => {
                    tracing::info!("Selection watcher stopping");
                    Ok(())
                }
            }
        });

        Ok(tasks)
    }

    /// Selection surface driven by `input`: `!release` reads `source`,
    /// other lines are looked up as typed
    pub async fn spawn_release_watch<S, R>(
        &self,
        source: S,
        input: R,
    ) -> anyhow::Result<JoinSet<anyhow::Result<()>>>
    where
        S: SelectionSource + 'static,
        R: AsyncBufRead + Unpin + Send + 'static,
    {
        let mut tasks = JoinSet::new();
        let input_tx = self.spawn_dispatch(source, &mut tasks).await;

        // Input reader
        let cancel = self.cancel_token.child_token();
        tasks.spawn(async move {
            tokio::select! {
                result = read_lookup_events(input, move |event| {
                    if let Err(e) = input_tx.try_send(event) {
                        tracing::error!("Failed to queue lookup event: {}", e);
                    }
                }) => result,
                _ = cancel.cancelled() => {
                    tracing::info!("Lookup reader stopping");
                    Ok(())
                }
            }
        });

        Ok(tasks)
    }

    /// Dispatch loop and diagnostics shared by the selection surfaces.
    /// Returns the sender feeding the dispatch loop.
    async fn spawn_dispatch<S>(
        &self,
        source: S,
        tasks: &mut JoinSet<anyhow::Result<()>>,
    ) -> AsyncSender<AppEvent>
    where
        S: SelectionSource + 'static,
    {
        let (lookup, selection) = {
            let config = self.state.config.read().await;
            (config.lookup.clone(), config.selection.clone())
        };

        let ChannelSet {
            input: (input_tx, input_rx),
            outcomes: (outcome_tx, outcome_rx),
            ..
        } = ChannelSet::new();

        let mut dispatcher = LookupDispatcher::new(HttpLookupClient::new(), LookupTarget::from(&lookup))
            .with_outcomes(outcome_tx);
        if selection.filter {
            dispatcher = dispatcher.with_preprocessor(SelectionFilter::new(selection.max_len));
        }
        let dispatcher = SelectionDispatcher::new(source, dispatcher);
        tracing::info!("Dispatching selections to {}", lookup.base_url());

        // Dispatch loop
        tasks.spawn(selection_loop(dispatcher, input_rx));

        // Diagnostics
        tasks.spawn(outcome_loop(self.state.clone(), outcome_rx));

        input_tx
    }

    /// Wait until every task is done, one fails, or `shutdown` resolves
    pub async fn run(
        &self,
        mut tasks: JoinSet<anyhow::Result<()>>,
        shutdown: impl Future<Output = ()>,
    ) {
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    tracing::info!("Shutdown requested");
                    break;
                }
                result = tasks.join_next() => match result {
                    None => {
                        tracing::info!("All tasks finished");
                        break;
                    }
                    Some(Ok(Ok(()))) => {}
                    Some(Ok(Err(e))) => {
                        tracing::error!("Task failed: {e:#}");
                        break;
                    }
                    Some(Err(e)) => {
                        tracing::error!("Task panicked: {e}");
                        break;
                    }
                }
            }
        }

        self.shutdown();
        tasks.abort_all();
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
