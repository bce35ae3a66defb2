use std::sync::Arc;
use std::time::SystemTime;

use offdict_types::LookupOutcome;
use tokio::sync::RwLock;

/// Lookup diagnostics; nothing here feeds back into dispatching
#[derive(Clone, Debug, Default)]
pub struct LookupStatus {
    pub completed: u64,
    pub failed: u64,
    pub last_query: Option<String>,
    pub last_outcome_time: Option<SystemTime>,
}

impl LookupStatus {
    pub fn record(&mut self, outcome: &LookupOutcome) {
        let query = match outcome {
            LookupOutcome::Completed { query, .. } => {
                self.completed += 1;
                query
            }
            LookupOutcome::Failed { query, .. } => {
                self.failed += 1;
                query
            }
        };
        self.last_query = Some(query.clone());
        self.last_outcome_time = Some(SystemTime::now());
    }
}

pub struct AppStatus {
    pub lookups: Arc<RwLock<LookupStatus>>,
}

impl AppStatus {
    pub fn new() -> Self {
        Self {
            lookups: Arc::new(RwLock::new(LookupStatus::default())),
        }
    }
}

impl Default for AppStatus {
    fn default() -> Self {
        Self::new()
    }
}
