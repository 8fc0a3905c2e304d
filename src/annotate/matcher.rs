//! Literal keyword match discovery
#![allow(clippy::cast_possible_truncation)]

use regex::RegexBuilder;

use crate::error::{KeywordError, KeywordResult};

/// A validated, non-empty phrase to search for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyword {
    phrase: String,
    char_len: u64,
}

impl Keyword {
    /// Validate a phrase. Whitespace-only phrases are legal; only the
    /// empty string is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`KeywordError::EmptyPhrase`] if the phrase is empty.
    pub fn new(phrase: impl Into<String>) -> KeywordResult<Self> {
        let phrase = phrase.into();
        if phrase.is_empty() {
            return Err(KeywordError::EmptyPhrase);
        }
        let char_len = phrase.chars().count() as u64;
        Ok(Self { phrase, char_len })
    }

    #[must_use]
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    /// Phrase length in code points, used for overlap priority.
    #[must_use]
    pub const fn char_len(&self) -> u64 {
        self.char_len
    }
}

/// One keyword occurrence, prior to overlap resolution.
///
/// `start`/`end` are code-point offsets; the byte offsets are kept for
/// slicing the source when spans are emitted.
#[derive(Debug, Clone)]
pub(crate) struct KeywordMatch {
    pub start: u64,
    pub end: u64,
    pub byte_start: usize,
    pub byte_end: usize,
    pub text: String,
    pub keyword_len: u64,
}

impl KeywordMatch {
    pub(crate) const fn range(&self) -> super::span::TextRange {
        super::span::TextRange {
            start: self.start,
            end: self.end,
        }
    }
}

/// Find every case-insensitive occurrence of `keyword` in `text`,
/// left to right, advancing past each occurrence (no self-overlap).
///
/// The phrase is escaped before compilation, so regex metacharacters
/// match literally.
pub(crate) fn find_matches(text: &str, keyword: &Keyword) -> Vec<KeywordMatch> {
    let pattern = regex::escape(keyword.phrase());
    let re = RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .build()
        .unwrap();

    // find_iter yields matches in ascending byte order, so a single
    // forward cursor converts byte offsets to code-point offsets.
    let mut cursor_byte = 0usize;
    let mut cursor_char = 0u64;

    re.find_iter(text)
        .map(|found| {
            cursor_char += text[cursor_byte..found.start()].chars().count() as u64;
            cursor_byte = found.start();

            let matched = found.as_str();
            let start = cursor_char;
            let end = start + matched.chars().count() as u64;

            KeywordMatch {
                start,
                end,
                byte_start: found.start(),
                byte_end: found.end(),
                text: matched.to_string(),
                keyword_len: keyword.char_len(),
            }
        })
        .collect()
}
