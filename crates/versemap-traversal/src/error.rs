//! Error types for traversal
//!
//! Navigation reports boundaries as `None`; these errors only describe
//! versification arithmetic that failed, and the public traverser absorbs
//! them by returning the starting verse.

use versemap_core::CoreError;

/// Result alias for traversal operations
pub type TraversalResult<T> = Result<T, TraversalError>;

/// Traversal error type
#[derive(Debug, thiserror::Error)]
pub enum TraversalError {
    /// No book of the document shares the canonicity of the current one
    #[error("no eligible book in {scheme} for {book}")]
    NoEligibleBook {
        /// Scheme name
        scheme: String,
        /// Book navigated from
        book: String,
    },

    /// Versification arithmetic failed
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl TraversalError {
    /// Create a no-eligible-book error
    #[inline]
    #[must_use]
    pub fn no_eligible_book(scheme: &str, book: impl ToString) -> Self {
        Self::NoEligibleBook {
            scheme: scheme.to_string(),
            book: book.to_string(),
        }
    }
}
