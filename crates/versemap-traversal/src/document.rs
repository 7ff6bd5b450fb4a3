//! Document book membership
//!
//! Traversal is always relative to one installed text, which may hold only
//! part of its scheme (a New Testament, say). [`DocumentBooks`] is the
//! membership predicate the traverser consults.

use crate::scripture::ScriptureClassifier;
use std::collections::HashSet;
use std::sync::Arc;
use versemap_core::{BibleBook, Verse, Versification};

/// Which books a document contains
pub trait DocumentBooks {
    /// Check if the document contains `book`
    fn contains(&self, book: BibleBook) -> bool;
}

/// Document containing every book of its scheme
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AllBooks;

impl DocumentBooks for AllBooks {
    #[inline]
    fn contains(&self, _book: BibleBook) -> bool {
        true
    }
}

impl<F> DocumentBooks for F
where
    F: Fn(BibleBook) -> bool,
{
    #[inline]
    fn contains(&self, book: BibleBook) -> bool {
        self(book)
    }
}

/// Explicit book list, kept in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookSet {
    order: Vec<BibleBook>,
    members: HashSet<BibleBook>,
}

impl BookSet {
    /// Create an empty set
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a book; duplicates are ignored
    pub fn insert(&mut self, book: BibleBook) {
        if self.members.insert(book) {
            self.order.push(book);
        }
    }

    /// Builder-style insert
    #[inline]
    #[must_use]
    pub fn with(mut self, book: BibleBook) -> Self {
        self.insert(book);
        self
    }

    /// Books actually present in a document
    ///
    /// Walks the scheme's books (intro pseudo-books skipped) and keeps those
    /// for which `has_verse` reports content at 1:1 or 1:2.
    pub fn scan(scheme: &Arc<Versification>, has_verse: impl Fn(&Verse) -> bool) -> Self {
        let mut set = Self::new();
        for book in scheme.books().filter(|b| !b.is_intro()) {
            let probe = |verse| has_verse(&Verse::new(scheme.clone(), book, 1, verse));
            if probe(1) || probe(2) {
                set.insert(book);
            }
        }
        tracing::debug!(scheme = %scheme, books = set.len(), "scanned document books");
        set
    }

    /// Books in insertion order
    #[inline]
    #[must_use]
    pub fn books(&self) -> &[BibleBook] {
        &self.order
    }

    /// Number of books
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Every book is scripture according to `classifier`
    #[must_use]
    pub fn is_only_scripture(&self, classifier: &ScriptureClassifier) -> bool {
        self.order.iter().all(|b| classifier.is_scripture(*b))
    }
}

impl DocumentBooks for BookSet {
    #[inline]
    fn contains(&self, book: BibleBook) -> bool {
        self.members.contains(&book)
    }
}

impl FromIterator<BibleBook> for BookSet {
    fn from_iter<I: IntoIterator<Item = BibleBook>>(iter: I) -> Self {
        let mut set = Self::new();
        for book in iter {
            set.insert(book);
        }
        set
    }
}
