//! Canonicity
//!
//! Provides [`ScriptureClassifier`], which decides whether a book counts as
//! scripture by looking it up in one fixed reference scheme. Traversal uses it
//! so that navigation never hops between canonical and non-canonical books.

use crate::error::TraversalResult;
use std::sync::Arc;
use versemap_core::{BibleBook, SchemeLibrary, Versification};

/// Canonicity predicate over a reference scheme
#[derive(Debug, Clone)]
pub struct ScriptureClassifier {
    reference: Arc<Versification>,
}

impl ScriptureClassifier {
    /// Classify against `reference`
    #[inline]
    #[must_use]
    pub fn new(reference: Arc<Versification>) -> Self {
        Self { reference }
    }

    /// Classify against the scheme registered as `name`
    ///
    /// # Errors
    /// Returns an error if `library` has no such scheme
    pub fn from_library(library: &SchemeLibrary, name: &str) -> TraversalResult<Self> {
        Ok(Self::new(library.get(name)?))
    }

    /// The reference scheme
    #[inline]
    #[must_use]
    pub fn reference(&self) -> &Arc<Versification> {
        &self.reference
    }

    /// Book is in the reference scheme and is not an intro pseudo-book
    #[inline]
    #[must_use]
    pub fn is_scripture(&self, book: BibleBook) -> bool {
        !book.is_intro() && self.reference.contains_book(book)
    }

    /// Book is one of the intro pseudo-books
    #[inline]
    #[must_use]
    pub fn is_intro(&self, book: BibleBook) -> bool {
        book.is_intro()
    }
}
