//! Error types for versemap core
//!
//! Covers:
//! - Scheme lookup and layout construction
//! - Reference parsing
//! - Coordinate validation against a scheme

use crate::book::BibleBook;

/// Result alias for core operations
pub type CoreResult<T> = Result<T, CoreError>;

/// Main core error type
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// No scheme registered under the requested name
    #[error("unknown versification: {0}")]
    UnknownVersification(String),

    /// Book id could not be recognised
    #[error("unknown book: {0}")]
    UnknownBook(String),

    /// Book is not part of the scheme
    #[error("{book} is not in versification {scheme}")]
    BookNotInScheme {
        /// Scheme name
        scheme: String,
        /// Requested book
        book: BibleBook,
    },

    /// Textual reference could not be parsed
    #[error("invalid reference '{input}': {reason}")]
    InvalidReference {
        /// Offending input
        input: String,
        /// What went wrong
        reason: String,
    },

    /// Chapter or verse outside the scheme bounds
    #[error("{book} {chapter}:{verse} is out of range in {scheme}")]
    OutOfRange {
        /// Scheme name
        scheme: String,
        /// Book
        book: BibleBook,
        /// Chapter number
        chapter: u32,
        /// Verse number
        verse: u32,
    },

    /// Ordinal does not address any verse of the scheme
    #[error("ordinal {ordinal} is out of range in {scheme}")]
    OrdinalOutOfRange {
        /// Scheme name
        scheme: String,
        /// Requested ordinal
        ordinal: u32,
    },

    /// Two coordinates from different schemes were combined
    #[error("scheme mismatch: {left} vs {right}")]
    SchemeMismatch {
        /// Scheme of the first operand
        left: String,
        /// Scheme of the second operand
        right: String,
    },

    /// Layout definition is unusable
    #[error("invalid layout for {scheme}: {reason}")]
    Layout {
        /// Scheme name
        scheme: String,
        /// Problem description
        reason: String,
    },

    /// Layout file could not be read
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Layout file is not valid JSON
    #[error("layout parse error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CoreError {
    /// Create an invalid reference error
    #[inline]
    #[must_use]
    pub fn invalid_reference(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidReference {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create a layout error
    #[inline]
    #[must_use]
    pub fn layout(scheme: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Layout {
            scheme: scheme.into(),
            reason: reason.into(),
        }
    }
}
