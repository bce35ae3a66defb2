#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Lookup task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}
