//! `UniFFI` bindings for the annotator
//!
//! This module provides an FFI interface so host applications
//! (iOS, Android, web shells, etc.) can annotate text without
//! re-implementing the overlap resolution rules.
#![allow(clippy::cast_possible_truncation, clippy::missing_panics_doc)]

use std::sync::Mutex;

use crate::annotate::{Keyword, Span, annotate};

/// One-shot annotation for callers without a reusable keyword set.
#[uniffi::export]
#[must_use]
pub fn annotate_text(text: &str, keywords: Vec<String>) -> Vec<Span> {
    annotate(text, &keywords)
}

fn filter_valid(keywords: Vec<String>) -> Vec<String> {
    keywords
        .into_iter()
        .filter(|phrase| Keyword::new(phrase.as_str()).is_ok())
        .collect()
}

/// A keyword set reused across many annotation calls, the way a CV
/// entry's keywords apply to each of its highlight lines.
#[derive(Debug, uniffi::Object)]
pub struct Highlighter {
    keywords: Mutex<Vec<String>>,
}

#[uniffi::export]
impl Highlighter {
    /// Create a highlighter with the given keyword phrases. Empty
    /// phrases are filtered out.
    #[uniffi::constructor]
    #[must_use]
    pub fn new(keywords: Vec<String>) -> Self {
        Self {
            keywords: Mutex::new(filter_valid(keywords)),
        }
    }

    /// Annotate `text` with the held keyword set.
    #[must_use]
    pub fn annotate(&self, text: &str) -> Vec<Span> {
        let keywords = self.keywords.lock().unwrap();
        annotate(text, &keywords)
    }

    /// Replace the keyword set. Empty phrases are filtered out.
    pub fn set_keywords(&self, keywords: Vec<String>) {
        let mut held = self.keywords.lock().unwrap();
        *held = filter_valid(keywords);
    }

    /// The currently held keyword phrases, in priority order.
    #[must_use]
    pub fn keywords(&self) -> Vec<String> {
        self.keywords.lock().unwrap().clone()
    }

    /// Number of held keyword phrases.
    #[must_use]
    pub fn keyword_count(&self) -> u32 {
        self.keywords.lock().unwrap().len() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructor_filters_empty_phrases() {
        let highlighter = Highlighter::new(vec![String::new(), "sql".to_string()]);

        assert_eq!(highlighter.keyword_count(), 1);
        assert_eq!(highlighter.keywords(), vec!["sql".to_string()]);
    }

    #[test]
    fn annotate_uses_held_keywords() {
        let highlighter = Highlighter::new(vec!["python".to_string()]);

        let spans = highlighter.annotate("Python and SQL");
        assert_eq!(spans[0], Span::emphasized(0, 6, "Python".to_string()));
    }

    #[test]
    fn set_keywords_replaces_the_set() {
        let highlighter = Highlighter::new(vec!["python".to_string()]);
        highlighter.set_keywords(vec!["sql".to_string()]);

        let spans = highlighter.annotate("Python and SQL");
        assert_eq!(
            spans.last().unwrap(),
            &Span::emphasized(11, 14, "SQL".to_string())
        );
    }

    #[test]
    fn one_shot_function_matches_pipeline() {
        let keywords = vec!["world".to_string()];
        assert_eq!(
            annotate_text("hello world", keywords.clone()),
            annotate("hello world", &keywords)
        );
    }
}
