use std::fmt::Debug;

use crate::error::SerializationResult;
use crate::models::AnnotatedText;

pub mod cbor;
pub mod markup;

#[uniffi::trait_interface]
pub trait AnnotationSerialization: Send + Sync + Debug {
    /// Serialize an annotated text into bytes
    ///
    /// # Errors
    ///
    /// Returns an error if encoding fails
    fn serialize(&self, annotated: &AnnotatedText) -> SerializationResult<Vec<u8>>;

    /// Deserialize bytes into an annotated text
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not valid for this format
    fn deserialize(&self, data: &[u8]) -> SerializationResult<AnnotatedText>;
}
