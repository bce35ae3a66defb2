/// Failure reported by the shell or rendering collaborator
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("Host unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum KeyParseError {
    #[error("Empty key notation")]
    Empty,

    #[error("Missing key after modifiers in {0:?}")]
    MissingKey(String),

    #[error("Unknown modifier: {0}")]
    UnknownModifier(String),
}

#[derive(Debug, thiserror::Error)]
pub enum SelectionError {
    #[error("Selection source unavailable: {0}")]
    Unavailable(String),

    #[error("Selection is not text")]
    NotText,
}
