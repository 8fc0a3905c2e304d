#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

uniffi::setup_scaffolding!();

pub mod annotate;
pub mod content;
pub mod error;
pub mod ffi;
pub mod formats;
pub mod models;

// Re-export common error types for convenience
pub use error::{
    ContentError, ContentResult, EmphasisError, EmphasisResult, KeywordError, KeywordResult,
    SerializationError, SerializationResult,
};

pub use annotate::{Span, SpanKind, annotate};
