//! Keyword highlight annotation
//!
//! Given a source string and a list of keyword phrases, [`annotate`]
//! partitions the source into an ordered sequence of plain and
//! emphasized [`Span`]s. Matching is case-insensitive and literal;
//! overlaps resolve in favor of longer keywords.
#![allow(clippy::cast_possible_truncation)]

pub mod matcher;
pub mod span;

pub use matcher::Keyword;
pub use span::{Span, SpanKind, TextRange};

use matcher::{KeywordMatch, find_matches};

/// Annotate `text` with the given keyword phrases.
///
/// The result is a partition of `text`: spans are contiguous, ordered
/// by start offset, non-overlapping, and their concatenated `text`
/// fields reproduce the source exactly. Offsets are code points, `end`
/// exclusive. Empty keyword phrases are skipped; phrases absent from
/// the text are ignored.
///
/// Overlaps resolve greedily in favor of longer keywords; among
/// keywords of equal length, the one earlier in `keywords` wins. A
/// rejected overlapping match is dropped entirely, it does not extend
/// the accepted one.
///
/// The function is total and pure: no input panics, and identical
/// inputs always produce identical output. Cost is O(keywords × text)
/// for discovery plus O(m²) for overlap resolution over the m
/// discovered matches, which is negligible at realistic sizes.
#[must_use]
pub fn annotate(text: &str, keywords: &[String]) -> Vec<Span> {
    let mut matches = Vec::new();
    for phrase in keywords {
        if let Ok(keyword) = Keyword::new(phrase.as_str()) {
            matches.extend(find_matches(text, &keyword));
        }
    }

    // Longer keywords take priority. The sort is stable, so among
    // equal lengths keyword-list order decides.
    matches.sort_by(|a, b| b.keyword_len.cmp(&a.keyword_len));

    let mut accepted: Vec<KeywordMatch> = Vec::new();
    for candidate in matches {
        let overlaps = accepted
            .iter()
            .any(|kept| candidate.range().intersects(kept.range()));
        if !overlaps {
            accepted.push(candidate);
        }
    }

    accepted.sort_by_key(|m| m.start);

    emit_spans(text, &accepted)
}

/// Walk accepted matches in start order, emitting plain spans for the
/// gaps and emphasized spans for the matches.
fn emit_spans(text: &str, accepted: &[KeywordMatch]) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut cursor_char = 0u64;
    let mut cursor_byte = 0usize;

    for m in accepted {
        if m.start > cursor_char {
            spans.push(Span::plain(
                cursor_char,
                m.start,
                text[cursor_byte..m.byte_start].to_string(),
            ));
        }
        spans.push(Span::emphasized(m.start, m.end, m.text.clone()));
        cursor_char = m.end;
        cursor_byte = m.byte_end;
    }

    if cursor_byte < text.len() {
        let tail = &text[cursor_byte..];
        let end = cursor_char + tail.chars().count() as u64;
        spans.push(Span::plain(cursor_char, end, tail.to_string()));
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keywords(phrases: &[&str]) -> Vec<String> {
        phrases.iter().map(ToString::to_string).collect()
    }

    /// Assert the partition invariants: contiguous, ordered, first
    /// span at 0, last span at the code-point length of the source,
    /// concatenation reproduces the source.
    fn assert_partition(text: &str, spans: &[Span]) {
        let reconstructed: String = spans.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(reconstructed, text);

        if text.is_empty() {
            assert!(spans.is_empty());
            return;
        }

        assert_eq!(spans[0].start, 0);
        assert_eq!(
            spans.last().unwrap().end,
            text.chars().count() as u64
        );
        for window in spans.windows(2) {
            assert_eq!(window[0].end, window[1].start);
        }
        for span in spans {
            assert!(span.start < span.end, "spans are never empty");
            assert_eq!(span.text.chars().count() as u64, span.end - span.start);
        }
    }

    #[test]
    fn empty_keyword_list_yields_single_plain_span() {
        let spans = annotate("hello world", &[]);

        assert_eq!(
            spans,
            vec![Span::plain(0, 11, "hello world".to_string())]
        );
    }

    #[test]
    fn empty_text_yields_no_spans() {
        assert!(annotate("", &keywords(&["x"])).is_empty());
    }

    #[test]
    fn no_match_yields_single_plain_span() {
        let spans = annotate("hello world", &keywords(&["xyz"]));

        assert_eq!(
            spans,
            vec![Span::plain(0, 11, "hello world".to_string())]
        );
        assert_partition("hello world", &spans);
    }

    #[test]
    fn case_insensitive_match_preserves_source_casing() {
        let spans = annotate("Python and SQL", &keywords(&["python"]));

        assert_eq!(
            spans,
            vec![
                Span::emphasized(0, 6, "Python".to_string()),
                Span::plain(6, 14, " and SQL".to_string()),
            ]
        );
        assert_partition("Python and SQL", &spans);
    }

    #[test]
    fn longest_match_wins_on_overlap() {
        let text = "reinforcement learning systems";
        let spans = annotate(
            text,
            &keywords(&["reinforcement learning", "learning systems"]),
        );

        // The rejected overlapping match is dropped entirely, not
        // merged into the accepted one.
        assert_eq!(
            spans,
            vec![
                Span::emphasized(0, 22, "reinforcement learning".to_string()),
                Span::plain(22, 30, " systems".to_string()),
            ]
        );
        assert_partition(text, &spans);
    }

    #[test]
    fn metacharacters_are_matched_literally() {
        let text = "cost is $500 (approx)";
        let spans = annotate(text, &keywords(&["$500 (approx)"]));

        assert_eq!(
            spans,
            vec![
                Span::plain(0, 8, "cost is ".to_string()),
                Span::emphasized(8, 21, "$500 (approx)".to_string()),
            ]
        );
        assert_partition(text, &spans);
    }

    #[test]
    fn equal_length_tiebreak_prefers_earlier_keyword() {
        let spans = annotate("abcd", &keywords(&["bc", "cd"]));

        assert_eq!(
            spans,
            vec![
                Span::plain(0, 1, "a".to_string()),
                Span::emphasized(1, 3, "bc".to_string()),
                Span::plain(3, 4, "d".to_string()),
            ]
        );
    }

    #[test]
    fn duplicate_keywords_emphasize_once() {
        let spans = annotate("python", &keywords(&["python", "python"]));

        assert_eq!(spans, vec![Span::emphasized(0, 6, "python".to_string())]);
    }

    #[test]
    fn empty_phrases_are_skipped() {
        let spans = annotate("abc", &keywords(&["", "b"]));

        assert_eq!(
            spans,
            vec![
                Span::plain(0, 1, "a".to_string()),
                Span::emphasized(1, 2, "b".to_string()),
                Span::plain(2, 3, "c".to_string()),
            ]
        );
    }

    #[test]
    fn long_match_can_be_emitted_after_short_one() {
        // "machine learning" is accepted first (longest) but emitted
        // after the shorter "ml" match at the front of the text.
        let text = "ml and machine learning";
        let spans = annotate(text, &keywords(&["ml", "machine learning", "learning"]));

        assert_eq!(
            spans,
            vec![
                Span::emphasized(0, 2, "ml".to_string()),
                Span::plain(2, 7, " and ".to_string()),
                Span::emphasized(7, 23, "machine learning".to_string()),
            ]
        );
        assert_partition(text, &spans);
    }

    #[test]
    fn offsets_are_code_points() {
        let text = "café costs €50";
        let spans = annotate(text, &keywords(&["€50"]));

        assert_eq!(
            spans,
            vec![
                Span::plain(0, 11, "café costs ".to_string()),
                Span::emphasized(11, 14, "€50".to_string()),
            ]
        );
        assert_partition(text, &spans);
    }

    #[test]
    fn annotation_is_deterministic() {
        let text = "Built end-to-end ML pipelines using GCP, MLflow, FastAPI, and Docker";
        let phrases = keywords(&["GCP", "MLflow", "FastAPI", "Docker", "ML"]);

        let first = annotate(text, &phrases);
        let second = annotate(text, &phrases);

        assert_eq!(first, second);
        assert_partition(text, &first);
    }

    #[test]
    fn coverage_holds_across_inputs() {
        let cases: Vec<(&str, Vec<String>)> = vec![
            ("", keywords(&["a"])),
            ("no keywords here", vec![]),
            ("aaaa", keywords(&["aa", "aaa"])),
            ("overlap overlap", keywords(&["overlap over", "lap"])),
            ("🦀 loves Rust", keywords(&["rust", "🦀"])),
            ("edge", keywords(&["edge"])),
        ];

        for (text, phrases) in cases {
            let spans = annotate(text, &phrases);
            assert_partition(text, &spans);
        }
    }
}
