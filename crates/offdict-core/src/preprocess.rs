use std::sync::LazyLock;

use regex::Regex;

static CODE_LIKE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[;\[\]{}<>#@$%^&*/\\:]").expect("static regex"));

static STRIPPED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[;\[\]{}<>#@$%^&*/\\:,.?!。，]").expect("static regex"));

/// Turns raw selected text into a lookup query, or rejects it
pub trait Preprocessor: Send + Sync {
    fn process(&self, text: &str) -> Option<String>;
}

/// Sends the selection as-is; only empty and whitespace-only text is dropped
pub struct RawSelection;

impl Preprocessor for RawSelection {
    fn process(&self, text: &str) -> Option<String> {
        if text.trim().is_empty() {
            None
        } else {
            Some(text.to_string())
        }
    }
}

/// Filter for desktop selections, which pick up a lot of code and prose
pub struct SelectionFilter {
    max_len: usize,
}

impl SelectionFilter {
    pub fn new(max_len: usize) -> Self {
        Self { max_len }
    }

    /// Too long to be a word, or looks like code
    pub fn is_denied(&self, text: &str) -> bool {
        text.trim().chars().count() > self.max_len || CODE_LIKE.is_match(text)
    }

    pub fn clean(&self, text: &str) -> String {
        STRIPPED.replace_all(text.trim(), "").trim().to_string()
    }
}

impl Default for SelectionFilter {
    fn default() -> Self {
        Self::new(25)
    }
}

impl Preprocessor for SelectionFilter {
    fn process(&self, text: &str) -> Option<String> {
        if self.is_denied(text) {
            tracing::debug!("Selection rejected: {} chars", text.chars().count());
            return None;
        }

        let cleaned = self.clean(text);
        if cleaned.is_empty() { None } else { Some(cleaned) }
    }
}
