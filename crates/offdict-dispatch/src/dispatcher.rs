use std::sync::Arc;

use kanal::AsyncSender;
use offdict_core::SelectionSource;
use offdict_core::preprocess::{Preprocessor, RawSelection};
use offdict_types::LookupOutcome;
use tokio::task::JoinHandle;

use crate::client::{LookupClient, LookupResponse};
use crate::error::DispatchError;
use crate::request::{LookupRequest, LookupTarget};

/// Handle to an in-flight lookup. Dropping it does not cancel the request.
pub struct DispatchHandle {
    query: String,
    task: JoinHandle<Result<LookupResponse, DispatchError>>,
}

impl DispatchHandle {
    pub fn query(&self) -> &str {
        &self.query
    }

    pub async fn wait(self) -> Result<LookupResponse, DispatchError> {
        self.task.await?
    }
}

/// Fire-and-forget lookups against a fixed server.
///
/// Every call spawns an independent request: no queue, no retry, no
/// cancellation, and responses are not correlated back to callers.
pub struct LookupDispatcher<C> {
    client: Arc<C>,
    target: LookupTarget,
    preprocessor: Box<dyn Preprocessor>,
    outcomes: Option<AsyncSender<LookupOutcome>>,
}

impl<C: LookupClient> LookupDispatcher<C> {
    pub fn new(client: C, target: LookupTarget) -> Self {
        Self {
            client: Arc::new(client),
            target,
            preprocessor: Box::new(RawSelection),
            outcomes: None,
        }
    }

    pub fn with_preprocessor(mut self, preprocessor: impl Preprocessor + 'static) -> Self {
        self.preprocessor = Box::new(preprocessor);
        self
    }

    /// Report every finished lookup on `tx` as well as in the log
    pub fn with_outcomes(mut self, tx: AsyncSender<LookupOutcome>) -> Self {
        self.outcomes = Some(tx);
        self
    }

    /// Spawn a lookup for `text` unless the preprocessor rejects it.
    ///
    /// Must be called from within a tokio runtime. Returns without waiting
    /// for the network.
    pub fn dispatch_text(&self, text: &str) -> Option<DispatchHandle> {
        let query = self.preprocessor.process(text)?;
        let request = LookupRequest::new(query.clone(), &self.target);
        tracing::debug!("Dispatching lookup: {}", request.url());

        let client = Arc::clone(&self.client);
        let outcomes = self.outcomes.clone();

        let task = tokio::spawn(async move {
            let result = client.lookup(&request).await;

            let outcome = match &result {
                Ok(response) => {
                    tracing::debug!(
                        query = %request.query,
                        status = response.status,
                        "Lookup response: {}",
                        response.body
                    );
                    LookupOutcome::Completed {
                        query: request.query.clone(),
                        status: response.status,
                        body: response.body.clone(),
                    }
                }
                Err(e) => {
                    tracing::warn!(query = %request.query, "Lookup failed: {}", e);
                    LookupOutcome::Failed {
                        query: request.query.clone(),
                        reason: e.to_string(),
                    }
                }
            };

            if let Some(tx) = outcomes
                && tx.send(outcome).await.is_err()
            {
                tracing::debug!("Outcome receiver closed");
            }

            result
        });

        Some(DispatchHandle { query, task })
    }
}

/// Turns "selection released" gestures into lookups
pub struct SelectionDispatcher<S, C> {
    source: S,
    dispatcher: LookupDispatcher<C>,
}

impl<S, C> SelectionDispatcher<S, C>
where
    S: SelectionSource,
    C: LookupClient,
{
    pub fn new(source: S, dispatcher: LookupDispatcher<C>) -> Self {
        Self { source, dispatcher }
    }

    pub fn dispatcher(&self) -> &LookupDispatcher<C> {
        &self.dispatcher
    }

    /// Read the current selection and look it up if it has any text.
    /// An unreadable selection is treated as empty.
    pub fn on_selection_released(&self) -> Option<DispatchHandle> {
        let text = match self.source.current_selection() {
            Ok(text) => text,
            Err(e) => {
                tracing::debug!("Selection unavailable: {}", e);
                return None;
            }
        };

        self.dispatcher.dispatch_text(&text)
    }
}
