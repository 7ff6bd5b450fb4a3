//! Bible navigation
//!
//! Provides [`BibleTraverser`], which steps verses, chapters, books and
//! fixed-size verse ranges through one document without crossing between
//! canonical and non-canonical books.
//!
//! Reaching the edge of the eligible books is a normal outcome, reported as
//! `None` by the book-level functions. Anything else that goes wrong during
//! versification arithmetic is logged and the starting position is returned
//! unchanged.

use crate::document::DocumentBooks;
use crate::error::{TraversalError, TraversalResult};
use crate::scripture::ScriptureClassifier;
use versemap_core::{BibleBook, Verse, VerseRange, Versification};

/// What range shifting does at a chapter boundary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChapterBoundary {
    /// Keep shifting into the neighbouring chapter
    #[default]
    Cross,
    /// Stop at the last (or first) verse of the current chapter
    Stop,
}

/// Canon-aware navigation over a document
#[derive(Debug, Clone)]
pub struct BibleTraverser {
    classifier: ScriptureClassifier,
}

impl BibleTraverser {
    /// Create a traverser using `classifier` for canonicity
    #[inline]
    #[must_use]
    pub fn new(classifier: ScriptureClassifier) -> Self {
        Self { classifier }
    }

    /// Canonicity classifier
    #[inline]
    #[must_use]
    pub fn classifier(&self) -> &ScriptureClassifier {
        &self.classifier
    }

    /// Following verse, moving into the next chapter or book as needed
    #[must_use]
    pub fn next_verse<D: DocumentBooks + ?Sized>(&self, document: &D, verse: &Verse) -> Verse {
        self.try_next_verse(document, verse)
            .unwrap_or_else(|err| unchanged("next_verse", verse, &err))
    }

    /// Preceding verse, landing on the last verse of an earlier chapter as needed
    #[must_use]
    pub fn prev_verse<D: DocumentBooks + ?Sized>(&self, document: &D, verse: &Verse) -> Verse {
        self.try_prev_verse(document, verse)
            .unwrap_or_else(|err| unchanged("prev_verse", verse, &err))
    }

    /// Verse 1 of the following chapter
    ///
    /// After the last eligible book this wraps to the first eligible book of
    /// the document.
    #[must_use]
    pub fn next_chapter<D: DocumentBooks + ?Sized>(&self, document: &D, verse: &Verse) -> Verse {
        self.try_next_chapter(document, verse)
            .unwrap_or_else(|err| unchanged("next_chapter", verse, &err))
    }

    /// Verse 1 of the preceding chapter
    #[must_use]
    pub fn prev_chapter<D: DocumentBooks + ?Sized>(&self, document: &D, verse: &Verse) -> Verse {
        self.try_prev_chapter(document, verse)
            .unwrap_or_else(|err| unchanged("prev_chapter", verse, &err))
    }

    /// Next book in `scheme` order that the document holds and that shares
    /// the canonicity of `book`
    #[must_use]
    pub fn next_book<D: DocumentBooks + ?Sized>(
        &self,
        document: &D,
        scheme: &Versification,
        book: BibleBook,
    ) -> Option<BibleBook> {
        self.scan(document, book, |b| scheme.next_book(b))
    }

    /// Previous book in `scheme` order that the document holds and that
    /// shares the canonicity of `book`
    #[must_use]
    pub fn prev_book<D: DocumentBooks + ?Sized>(
        &self,
        document: &D,
        scheme: &Versification,
        book: BibleBook,
    ) -> Option<BibleBook> {
        self.scan(document, book, |b| scheme.previous_book(b))
    }

    /// Shift a range forward by its own length
    #[must_use]
    pub fn next_verse_range<D: DocumentBooks + ?Sized>(
        &self,
        document: &D,
        range: &VerseRange,
        boundary: ChapterBoundary,
    ) -> VerseRange {
        self.try_next_verse_range(document, range, boundary)
            .unwrap_or_else(|err| {
                tracing::warn!(%range, error = %err, "next_verse_range failed, keeping range");
                range.clone()
            })
    }

    /// Shift a range backward by its own length
    #[must_use]
    pub fn prev_verse_range<D: DocumentBooks + ?Sized>(
        &self,
        document: &D,
        range: &VerseRange,
        boundary: ChapterBoundary,
    ) -> VerseRange {
        self.try_prev_verse_range(document, range, boundary)
            .unwrap_or_else(|err| {
                tracing::warn!(%range, error = %err, "prev_verse_range failed, keeping range");
                range.clone()
            })
    }

    /// Reading progress through the verse's book, 0 to 100
    ///
    /// Zero for books with a single verse and for coordinates the scheme
    /// does not know.
    #[must_use]
    pub fn percent_of_book(&self, verse: &Verse) -> u32 {
        try_percent_of_book(verse).unwrap_or_else(|err| {
            tracing::debug!(%verse, error = %err, "percent_of_book unavailable");
            0
        })
    }

    fn try_next_verse<D: DocumentBooks + ?Sized>(
        &self,
        document: &D,
        verse: &Verse,
    ) -> TraversalResult<Verse> {
        let last = verse.scheme().last_verse(verse.book(), verse.chapter())?;
        if verse.verse() < last {
            Ok(verse.with_verse(verse.verse() + 1))
        } else {
            self.try_next_chapter(document, verse)
        }
    }

    fn try_prev_verse<D: DocumentBooks + ?Sized>(
        &self,
        document: &D,
        verse: &Verse,
    ) -> TraversalResult<Verse> {
        if verse.verse() > 1 {
            return Ok(verse.with_verse(verse.verse() - 1));
        }
        let prev = self.try_prev_chapter(document, verse)?;
        if prev.is_same_chapter(verse) {
            return Ok(verse.clone());
        }
        let last = verse.scheme().last_verse(prev.book(), prev.chapter())?;
        Ok(prev.with_verse(last))
    }

    fn try_next_chapter<D: DocumentBooks + ?Sized>(
        &self,
        document: &D,
        verse: &Verse,
    ) -> TraversalResult<Verse> {
        let scheme = verse.scheme();
        let book = verse.book();
        if verse.chapter() < scheme.last_chapter(book)? {
            return Ok(Verse::checked(scheme.clone(), book, verse.chapter() + 1, 1)?);
        }
        let next = match self.next_book(document, scheme, book) {
            Some(next) => next,
            None => {
                let first = self.first_book(document, scheme, book)?;
                tracing::debug!(
                    from = %book,
                    to = %first,
                    scheme = %scheme,
                    "wrapping to first book"
                );
                first
            }
        };
        Ok(Verse::checked(scheme.clone(), next, 1, 1)?)
    }

    fn try_prev_chapter<D: DocumentBooks + ?Sized>(
        &self,
        document: &D,
        verse: &Verse,
    ) -> TraversalResult<Verse> {
        let scheme = verse.scheme();
        let book = verse.book();
        if verse.chapter() > 1 {
            return Ok(Verse::checked(scheme.clone(), book, verse.chapter() - 1, 1)?);
        }
        let (book, chapter) = match self.prev_book(document, scheme, book) {
            Some(prev) => (prev, scheme.last_chapter(prev)?),
            None => (book, verse.chapter().max(1)),
        };
        Ok(Verse::checked(scheme.clone(), book, chapter, 1)?)
    }

    fn try_next_verse_range<D: DocumentBooks + ?Sized>(
        &self,
        document: &D,
        range: &VerseRange,
        boundary: ChapterBoundary,
    ) -> TraversalResult<VerseRange> {
        let mut start = range.start().clone();
        let mut end = range.end().clone();
        for _ in 0..range.cardinality() {
            if boundary == ChapterBoundary::Stop && end.is_end_of_chapter() {
                break;
            }
            start = self.try_next_verse(document, &start)?;
            end = self.try_next_verse(document, &end)?;
        }
        Ok(VerseRange::new(start, end)?)
    }

    fn try_prev_verse_range<D: DocumentBooks + ?Sized>(
        &self,
        document: &D,
        range: &VerseRange,
        boundary: ChapterBoundary,
    ) -> TraversalResult<VerseRange> {
        let mut start = range.start().clone();
        let mut end = range.end().clone();
        for _ in 0..range.cardinality() {
            if boundary == ChapterBoundary::Stop && start.is_start_of_chapter() {
                break;
            }
            start = self.try_prev_verse(document, &start)?;
            end = self.try_prev_verse(document, &end)?;
        }
        Ok(VerseRange::new(start, end)?)
    }

    /// Book may be stepped onto from a book whose canonicity is `scripture`
    fn is_eligible<D: DocumentBooks + ?Sized>(
        &self,
        document: &D,
        book: BibleBook,
        scripture: bool,
    ) -> bool {
        !self.classifier.is_intro(book)
            && self.classifier.is_scripture(book) == scripture
            && document.contains(book)
    }

    fn scan<D: DocumentBooks + ?Sized>(
        &self,
        document: &D,
        book: BibleBook,
        step: impl Fn(BibleBook) -> Option<BibleBook>,
    ) -> Option<BibleBook> {
        let scripture = self.classifier.is_scripture(book);
        let mut current = book;
        loop {
            current = step(current)?;
            if self.is_eligible(document, current, scripture) {
                return Some(current);
            }
        }
    }

    fn first_book<D: DocumentBooks + ?Sized>(
        &self,
        document: &D,
        scheme: &Versification,
        book: BibleBook,
    ) -> TraversalResult<BibleBook> {
        let scripture = self.classifier.is_scripture(book);
        scheme
            .books()
            .find(|b| self.is_eligible(document, *b, scripture))
            .ok_or_else(|| TraversalError::no_eligible_book(scheme.name(), book))
    }
}

fn unchanged(operation: &'static str, verse: &Verse, err: &TraversalError) -> Verse {
    tracing::warn!(operation, %verse, error = %err, "navigation failed, keeping verse");
    verse.clone()
}

fn try_percent_of_book(verse: &Verse) -> TraversalResult<u32> {
    let (first, last) = verse.scheme().book_bounds(verse.book())?;
    let ordinal = verse.try_ordinal()?;
    if last == first {
        return Ok(0);
    }
    let percent = u64::from(ordinal.saturating_sub(first)) * 100 / u64::from(last - first);
    Ok(u32::try_from(percent).unwrap_or(100))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{AllBooks, BookSet};
    use pretty_assertions::assert_eq;
    use std::sync::Arc;
    use versemap_core::{Testament, VersificationLayout};
    use versemap_test_utils as fixtures;

    struct Fixture {
        kjv: Arc<Versification>,
        synodal: Arc<Versification>,
        traverser: BibleTraverser,
    }

    fn fixture() -> Fixture {
        fixtures::init_tracing();
        let library = fixtures::library();
        let kjv = fixtures::scheme(&library, fixtures::KJV);
        let synodal = fixtures::scheme(&library, fixtures::SYNODAL);
        Fixture {
            traverser: BibleTraverser::new(ScriptureClassifier::new(kjv.clone())),
            kjv,
            synodal,
        }
    }

    fn nt_only(book: BibleBook) -> bool {
        book.testament() == Testament::New
    }

    #[test]
    fn next_verse_steps_within_and_across() {
        let f = fixture();
        let step = |r: &str| {
            f.traverser
                .next_verse(&AllBooks, &fixtures::verse(&f.kjv, r))
                .to_string()
        };
        assert_eq!(step("Gen.1.1"), "Gen.1.2");
        assert_eq!(step("Gen.1.31"), "Gen.2.1");
        assert_eq!(step("Gen.3.24"), "Exod.1.1");
        assert_eq!(step("Mal.4.6"), "Matt.1.1");
        // End of the canon wraps to the first book
        assert_eq!(step("Rev.3.22"), "Gen.1.1");
    }

    #[test]
    fn prev_verse_steps_within_and_across() {
        let f = fixture();
        let step = |r: &str| {
            f.traverser
                .prev_verse(&AllBooks, &fixtures::verse(&f.kjv, r))
                .to_string()
        };
        assert_eq!(step("Gen.1.2"), "Gen.1.1");
        assert_eq!(step("Gen.2.1"), "Gen.1.31");
        assert_eq!(step("Exod.1.1"), "Gen.3.24");
        assert_eq!(step("Matt.1.1"), "Mal.4.6");
        assert_eq!(step("Gen.1.1"), "Gen.1.1");
    }

    #[test]
    fn chapter_steps_land_on_verse_one() {
        let f = fixture();
        let next = |r: &str| {
            f.traverser
                .next_chapter(&AllBooks, &fixtures::verse(&f.kjv, r))
                .to_string()
        };
        let prev = |r: &str| {
            f.traverser
                .prev_chapter(&AllBooks, &fixtures::verse(&f.kjv, r))
                .to_string()
        };
        assert_eq!(next("Gen.1.5"), "Gen.2.1");
        assert_eq!(next("Gen.3.3"), "Exod.1.1");
        assert_eq!(prev("Gen.2.5"), "Gen.1.1");
        assert_eq!(prev("Exod.1.4"), "Gen.3.1");
        assert_eq!(prev("Gen.1.4"), "Gen.1.1");
    }

    #[test]
    fn book_scan_respects_document() {
        let f = fixture();
        let doc = nt_only;
        assert_eq!(f.traverser.next_book(&doc, &f.kjv, BibleBook::Rev), None);
        assert_eq!(f.traverser.prev_book(&doc, &f.kjv, BibleBook::Matt), None);
        assert_eq!(f.traverser.next_book(&doc, &f.kjv, BibleBook::Matt), Some(BibleBook::Mark));

        let sparse = BookSet::new().with(BibleBook::Gen).with(BibleBook::Ps);
        assert_eq!(f.traverser.next_book(&sparse, &f.kjv, BibleBook::Gen), Some(BibleBook::Ps));
        assert_eq!(f.traverser.prev_book(&sparse, &f.kjv, BibleBook::Ps), Some(BibleBook::Gen));
    }

    #[test]
    fn wrap_stays_inside_document() {
        let f = fixture();
        let rev = fixtures::verse(&f.kjv, "Rev.3.5");
        assert_eq!(f.traverser.next_chapter(&nt_only, &rev).to_string(), "Matt.1.1");
        let last = fixtures::verse(&f.kjv, "Rev.3.22");
        assert_eq!(f.traverser.next_verse(&nt_only, &last).to_string(), "Matt.1.1");
    }

    #[test]
    fn canonical_and_deuterocanonical_books_stay_apart() {
        let f = fixture();
        let step = |r: &str| {
            f.traverser
                .next_verse(&AllBooks, &fixtures::verse(&f.synodal, r))
                .to_string()
        };
        let back = |r: &str| {
            f.traverser
                .prev_verse(&AllBooks, &fixtures::verse(&f.synodal, r))
                .to_string()
        };

        assert_eq!(step("Mal.3.24"), "Matt.1.1");
        assert_eq!(step("Tob.3.12"), "Jdt.1.1");
        assert_eq!(back("Jdt.1.1"), "Tob.3.12");
        assert_eq!(back("Tob.1.1"), "Tob.1.1");
        // Last deuterocanonical book wraps to the first one
        assert_eq!(step("PrMan.3.12"), "Tob.1.1");
    }

    #[test]
    fn range_shifts_by_cardinality() {
        let f = fixture();
        let range = VerseRange::parse(&f.kjv, "Gen.1.1-3").unwrap();
        let next = f.traverser.next_verse_range(&AllBooks, &range, ChapterBoundary::Cross);
        assert_eq!(next, VerseRange::parse(&f.kjv, "Gen.1.4-6").unwrap());
        let back = f.traverser.prev_verse_range(&AllBooks, &next, ChapterBoundary::Cross);
        assert_eq!(back, range);
    }

    #[test]
    fn range_shift_crosses_or_stops_at_chapter_end() {
        let f = fixture();
        let range = VerseRange::parse(&f.kjv, "Gen.1.28-30").unwrap();
        let crossed = f.traverser.next_verse_range(&AllBooks, &range, ChapterBoundary::Cross);
        assert_eq!(crossed.to_string(), "Gen.1.31-Gen.2.2");
        let stopped = f.traverser.next_verse_range(&AllBooks, &range, ChapterBoundary::Stop);
        assert_eq!(stopped.to_string(), "Gen.1.29-Gen.1.31");

        let range = VerseRange::parse(&f.kjv, "Gen.2.2-4").unwrap();
        let stopped = f.traverser.prev_verse_range(&AllBooks, &range, ChapterBoundary::Stop);
        assert_eq!(stopped.to_string(), "Gen.2.1-Gen.2.3");
    }

    #[test]
    fn percent_of_book() {
        let f = fixture();
        let percent = |r: &str| f.traverser.percent_of_book(&fixtures::verse(&f.kjv, r));
        assert_eq!(percent("Gen.1.1"), 0);
        assert_eq!(percent("Gen.2.13"), 54);
        assert_eq!(percent("Gen.3.24"), 100);
        // Not a Genesis coordinate in KJV
        let missing = Verse::new(f.kjv.clone(), BibleBook::Gen, 9, 1);
        assert_eq!(f.traverser.percent_of_book(&missing), 0);
    }

    #[test]
    fn percent_of_single_verse_book() {
        let layout = VersificationLayout::new("Tiny").with_book(BibleBook::Obad, &[1]);
        let scheme = Arc::new(Versification::from_layout(&layout).unwrap());
        let traverser = BibleTraverser::new(ScriptureClassifier::new(scheme.clone()));
        assert_eq!(traverser.percent_of_book(&Verse::new(scheme, BibleBook::Obad, 1, 1)), 0);
    }

    #[test]
    fn errors_keep_starting_verse() {
        let f = fixture();
        // Tobit is not part of KJV
        let stray = Verse::new(f.kjv.clone(), BibleBook::Tob, 1, 1);
        assert_eq!(f.traverser.next_verse(&AllBooks, &stray), stray);
        assert_eq!(f.traverser.next_chapter(&AllBooks, &stray), stray);
        assert_eq!(f.traverser.prev_verse(&AllBooks, &stray.with_verse(0)), stray.with_verse(0));
    }
}
