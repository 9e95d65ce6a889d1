//! Unified error types for the amostra domain layer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of domain errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Record not found.
    NotFound,
    /// Invalid input data (empty required field, malformed id, etc.).
    InvalidInput,
    /// Internal error.
    Internal,
}

/// Domain-level error with structured context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmostraError {
    /// The kind of error.
    pub kind: ErrorKind,
    /// Human-readable error message.
    pub message: String,
    /// Optional additional context.
    pub context: Option<String>,
}

impl AmostraError {
    /// Creates a new `AmostraError`.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            context: None,
        }
    }

    /// Adds context to the error.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Creates a not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Creates an invalid-input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidInput, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }
}

impl fmt::Display for AmostraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}", self.kind, self.message)?;
        if let Some(ctx) = &self.context {
            write!(f, " ({})", ctx)?;
        }
        Ok(())
    }
}

impl std::error::Error for AmostraError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_without_context() {
        let err = AmostraError::new(ErrorKind::NotFound, "sample not found");
        assert_eq!(err.to_string(), "[NotFound] sample not found");
    }

    #[test]
    fn error_display_with_context() {
        let err = AmostraError::not_found("sample not found").with_context("id: 42");
        assert!(err.to_string().contains("id: 42"));
    }

    #[test]
    fn error_serialization_roundtrip() {
        let err = AmostraError::new(ErrorKind::InvalidInput, "empty field");
        let json = serde_json::to_string(&err).expect("serialize");
        let back: AmostraError = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back.kind, ErrorKind::InvalidInput);
        assert_eq!(back.message, "empty field");
    }

    #[test]
    fn not_found_constructor() {
        let err = AmostraError::not_found("missing");
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[test]
    fn invalid_input_constructor() {
        let err = AmostraError::invalid_input("bad data");
        assert_eq!(err.kind, ErrorKind::InvalidInput);
    }

    #[test]
    fn internal_constructor() {
        let err = AmostraError::internal("boom");
        assert_eq!(err.kind, ErrorKind::Internal);
    }
}
