use serde::{Deserialize, Serialize};

fn default_poll_interval_ms() -> u64 {
    500
}

fn default_filter() -> bool {
    true
}

fn default_max_len() -> usize {
    25
}

fn default_primary() -> bool {
    true
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct SelectionConfig {
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
    /// Drop code-like selections and strip punctuation before lookup
    #[serde(default = "default_filter")]
    pub filter: bool,
    #[serde(default = "default_max_len")]
    pub max_len: usize,
    /// Watch the primary selection instead of the clipboard (Linux)
    #[serde(default = "default_primary")]
    pub primary: bool,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: default_poll_interval_ms(),
            filter: default_filter(),
            max_len: default_max_len(),
            primary: default_primary(),
        }
    }
}
