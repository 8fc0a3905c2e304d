//! Lightweight textual interchange for annotated text
//!
//! Emphasized spans are wrapped in `**…**`, everything else is emitted
//! verbatim. Deserialization reparses delimiter pairs and recomputes
//! code-point offsets. Source text that itself contains a literal `**`
//! does not round-trip through this format; use the CBOR format for
//! lossless storage.
#![allow(clippy::cast_possible_truncation)]

use crate::annotate::Span;
use crate::error::{SerializationError, SerializationResult};
use crate::formats::AnnotationSerialization;
use crate::models::AnnotatedText;

const DELIMITER: &str = "**";

#[derive(Debug)]
pub struct MarkupFormat;

impl AnnotationSerialization for MarkupFormat {
    fn serialize(&self, annotated: &AnnotatedText) -> SerializationResult<Vec<u8>> {
        let mut out = String::with_capacity(annotated.text.len());
        for span in &annotated.spans {
            if span.is_emphasized() {
                out.push_str(DELIMITER);
                out.push_str(&span.text);
                out.push_str(DELIMITER);
            } else {
                out.push_str(&span.text);
            }
        }
        Ok(out.into_bytes())
    }

    fn deserialize(&self, data: &[u8]) -> SerializationResult<AnnotatedText> {
        let input = core::str::from_utf8(data).map_err(|_| SerializationError::InvalidUtf8)?;

        let segments: Vec<&str> = input.split(DELIMITER).collect();
        if segments.len() % 2 == 0 {
            return Err(SerializationError::malformed_markup(
                "unpaired emphasis delimiter",
            ));
        }

        let mut text = String::with_capacity(input.len());
        let mut spans = Vec::new();
        let mut cursor = 0u64;

        // Segments alternate plain, emphasized, plain, ...
        for (i, segment) in segments.iter().enumerate() {
            if segment.is_empty() {
                continue;
            }
            let len = segment.chars().count() as u64;
            let span = if i % 2 == 0 {
                Span::plain(cursor, cursor + len, (*segment).to_string())
            } else {
                Span::emphasized(cursor, cursor + len, (*segment).to_string())
            };
            text.push_str(segment);
            cursor += len;
            spans.push(span);
        }

        Ok(AnnotatedText::from_spans(text, spans))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotate::annotate;

    fn annotated(text: &str, phrases: &[&str]) -> AnnotatedText {
        let keywords: Vec<String> = phrases.iter().map(ToString::to_string).collect();
        AnnotatedText::from_spans(text.to_string(), annotate(text, &keywords))
    }

    #[test]
    fn serialize_wraps_emphasized_spans() {
        let bytes = MarkupFormat
            .serialize(&annotated("Python and SQL", &["python"]))
            .unwrap();

        assert_eq!(String::from_utf8(bytes).unwrap(), "**Python** and SQL");
    }

    #[test]
    fn round_trip_restores_spans_and_offsets() {
        let original = annotated("cost is $500 (approx)", &["$500 (approx)"]);

        let bytes = MarkupFormat.serialize(&original).unwrap();
        let restored = MarkupFormat.deserialize(&bytes).unwrap();

        assert_eq!(restored, original);
        assert!(restored.is_partition());
    }

    #[test]
    fn deserialized_offsets_are_code_points() {
        let restored = MarkupFormat
            .deserialize("café costs **€50**".as_bytes())
            .unwrap();

        assert_eq!(restored.spans.len(), 2);
        assert_eq!(restored.spans[1].start, 11);
        assert_eq!(restored.spans[1].end, 14);
        assert!(restored.is_partition());
    }

    #[test]
    fn unpaired_delimiter_is_rejected() {
        let result = MarkupFormat.deserialize(b"broken **emphasis");

        assert!(matches!(
            result,
            Err(SerializationError::MalformedMarkup(_))
        ));
    }

    #[test]
    fn invalid_utf8_is_rejected() {
        let result = MarkupFormat.deserialize(&[0xff, 0xfe]);

        assert!(matches!(result, Err(SerializationError::InvalidUtf8)));
    }

    #[test]
    fn plain_only_input_yields_single_plain_span() {
        let restored = MarkupFormat.deserialize(b"no emphasis here").unwrap();

        assert_eq!(restored.spans.len(), 1);
        assert!(restored.spans[0].is_plain());
        assert!(restored.is_partition());
    }
}
