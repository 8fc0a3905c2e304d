//! Error types for the emphasis library
//!
//! This module provides centralized error handling using `thiserror` across all components

use thiserror::Error;

/// Keyword-related errors
#[derive(Debug, Clone, PartialEq, Eq, Error, uniffi::Error)]
pub enum KeywordError {
    /// A keyword phrase was empty
    #[error("Keyword phrase is empty")]
    EmptyPhrase,
}

/// Result type for keyword validation
pub type KeywordResult<T> = Result<T, KeywordError>;

/// Content-lookup errors
#[derive(Debug, Clone, Error, uniffi::Error)]
pub enum ContentError {
    /// No project with the given identifier
    #[error("Project not found: {0}")]
    ProjectNotFound(String),

    /// Entry index out of range
    #[error("Entry index out of range")]
    InvalidIndex,

    /// General content error
    #[error("Content error: {0}")]
    Other(String),
}

impl ContentError {
    /// Create a project-not-found error
    pub fn project_not_found(id: impl Into<String>) -> Self {
        Self::ProjectNotFound(id.into())
    }

    /// Create a generic content error
    pub fn other(reason: impl Into<String>) -> Self {
        Self::Other(reason.into())
    }
}

/// Result type for content lookups
pub type ContentResult<T> = Result<T, ContentError>;

/// Serialization-related errors
#[derive(Debug, Error, uniffi::Error)]
pub enum SerializationError {
    /// Invalid UTF-8 encoding
    #[error("Invalid UTF-8 encoding")]
    InvalidUtf8,

    /// Markup delimiters did not pair up
    #[error("Malformed markup: {0}")]
    MalformedMarkup(String),

    /// Serialization failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Deserialization failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),
}

impl SerializationError {
    /// Create a malformed markup error
    pub fn malformed_markup(reason: impl Into<String>) -> Self {
        Self::MalformedMarkup(reason.into())
    }

    /// Create a serialization failed error
    pub fn serialization_failed(reason: impl Into<String>) -> Self {
        Self::SerializationFailed(reason.into())
    }

    /// Create a deserialization failed error
    pub fn deserialization_failed(reason: impl Into<String>) -> Self {
        Self::DeserializationFailed(reason.into())
    }
}

/// Result type for serialization operations
pub type SerializationResult<T> = Result<T, SerializationError>;

/// Main unified error type that can represent any emphasis error
#[derive(Debug, Error, uniffi::Error)]
pub enum EmphasisError {
    /// Keyword validation error
    #[error(transparent)]
    Keyword(#[from] KeywordError),

    /// Content lookup error
    #[error(transparent)]
    Content(#[from] ContentError),

    /// Serialization error
    #[error(transparent)]
    Serialization(#[from] SerializationError),

    /// Generic error with custom message
    #[error("{0}")]
    Other(String),
}

impl EmphasisError {
    /// Create a generic error
    pub fn other(reason: impl Into<String>) -> Self {
        Self::Other(reason.into())
    }
}

/// Result type for emphasis operations
pub type EmphasisResult<T> = Result<T, EmphasisError>;
