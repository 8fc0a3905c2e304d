//! Binary interchange via CBOR, lossless for any annotated text.

use crate::error::{SerializationError, SerializationResult};
use crate::formats::AnnotationSerialization;
use crate::models::AnnotatedText;

#[derive(Debug)]
pub struct CborFormat;

impl AnnotationSerialization for CborFormat {
    fn serialize(&self, annotated: &AnnotatedText) -> SerializationResult<Vec<u8>> {
        serde_cbor::to_vec(annotated)
            .map_err(|e| SerializationError::serialization_failed(e.to_string()))
    }

    fn deserialize(&self, data: &[u8]) -> SerializationResult<AnnotatedText> {
        serde_cbor::from_slice(data)
            .map_err(|e| SerializationError::deserialization_failed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotate::annotate;

    #[test]
    fn round_trip_is_lossless() {
        let text = "Built and deployed reinforcement learning systems";
        let keywords = vec!["reinforcement learning".to_string()];
        let original = AnnotatedText::from_spans(text.to_string(), annotate(text, &keywords));

        let bytes = CborFormat.serialize(&original).unwrap();
        let restored = CborFormat.deserialize(&bytes).unwrap();

        assert_eq!(restored, original);
    }

    #[test]
    fn literal_delimiters_survive_cbor() {
        // The markup format cannot represent this text; CBOR can.
        let text = "a ** b ** c";
        let original = AnnotatedText::from_spans(text.to_string(), annotate(text, &[]));

        let bytes = CborFormat.serialize(&original).unwrap();
        let restored = CborFormat.deserialize(&bytes).unwrap();

        assert_eq!(restored.text, text);
        assert!(restored.is_partition());
    }

    #[test]
    fn garbage_input_is_rejected() {
        let result = CborFormat.deserialize(&[0x9f, 0x00]);

        assert!(matches!(
            result,
            Err(SerializationError::DeserializationFailed(_))
        ));
    }
}
