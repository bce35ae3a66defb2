use crate::preprocess::{Preprocessor, RawSelection, SelectionFilter};

#[test]
fn raw_selection_keeps_text_untouched() {
    assert_eq!(RawSelection.process("hello world"), Some("hello world".to_string()));
    assert_eq!(RawSelection.process("  padded "), Some("  padded ".to_string()));
}

#[test]
fn raw_selection_drops_blank_text() {
    for text in ["", " ", "\n\t ", "\u{3000}"] {
        assert_eq!(RawSelection.process(text), None, "{text:?}");
    }
}

#[test]
fn filter_denies_code_and_long_text() {
    let filter = SelectionFilter::default();
    assert!(filter.is_denied("io::Error"));
    assert!(filter.is_denied("Vec<String>"));
    assert!(filter.is_denied("this selection is clearly a whole sentence"));
    assert!(!filter.is_denied("self.app.show"));
    assert!(!filter.is_denied("Concretely,"));
}

#[test]
fn filter_strips_punctuation() {
    let filter = SelectionFilter::default();
    assert_eq!(filter.clean("   c,   "), "c");
    assert_eq!(filter.process("Concretely,"), Some("Concretely".to_string()));
    assert_eq!(filter.process("你好。"), Some("你好".to_string()));
    assert_eq!(filter.process(" ?! "), None);
    assert_eq!(filter.process("a::b"), None);
}

#[test]
fn filter_limit_counts_chars() {
    let filter = SelectionFilter::new(3);
    assert_eq!(filter.process("日本語"), Some("日本語".to_string()));
    assert_eq!(filter.process("日本語だ"), None);
}
