//! Versification schemes
//!
//! Provides [`Versification`], an immutable description of how one textual
//! tradition divides the Bible into books, chapters and verses, together
//! with the dense ordinal numbering used for comparison and range arithmetic.
//!
//! # Ordinal layout
//! - Ordinal 0 is `IntroBible 0:0` and doubles as the "no such verse" sentinel
//! - Every book starts with its intro position (chapter 0, verse 0)
//! - Every chapter starts with verse 0 (chapter intro) followed by verses `1..=last`

use crate::book::{BibleBook, Testament};
use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Serializable description of a scheme
///
/// Intro pseudo-books are not listed; they are inserted on construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersificationLayout {
    /// Scheme name (e.g. `KJV`, `Synodal`)
    pub name: String,

    /// Books in scheme order
    pub books: Vec<BookLayout>,
}

/// Chapter structure of one book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookLayout {
    /// The book
    pub book: BibleBook,

    /// Last verse number of each chapter, chapter 1 first
    pub verses: Vec<u32>,
}

impl VersificationLayout {
    /// Create an empty layout
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            books: Vec::new(),
        }
    }

    /// Append a book
    #[inline]
    #[must_use]
    pub fn with_book(mut self, book: BibleBook, verses: &[u32]) -> Self {
        self.books.push(BookLayout {
            book,
            verses: verses.to_vec(),
        });
        self
    }
}

#[derive(Debug, Clone)]
struct BookEntry {
    book: BibleBook,
    /// Last verse per chapter; empty for intro pseudo-books
    verses: Vec<u32>,
    /// Ordinal of `chapter:0` indexed by chapter, entry 0 is the book intro
    chapter_starts: Vec<u32>,
    last_chapter: u32,
}

impl BookEntry {
    fn first_ordinal(&self) -> u32 {
        self.chapter_starts[0]
    }

    fn last_chapter(&self) -> u32 {
        self.last_chapter
    }
}

/// An immutable versification scheme
///
/// Schemes are compared by name only. Share them behind an `Arc`; see
/// [`crate::SchemeLibrary`].
pub struct Versification {
    name: String,
    books: Vec<BookEntry>,
    index: HashMap<BibleBook, usize>,
    ordinal_count: u32,
}

impl Versification {
    /// Build a scheme from its layout
    ///
    /// # Errors
    /// Returns [`CoreError::Layout`] for an empty name, intro books in the
    /// layout, duplicate books, books without chapters, empty chapters, or
    /// when the verses do not fit the `u32` ordinal space.
    pub fn from_layout(layout: &VersificationLayout) -> CoreResult<Self> {
        let name = layout.name.trim();
        if name.is_empty() {
            return Err(CoreError::layout(name, "scheme name is empty"));
        }

        let mut ordered: Vec<(BibleBook, Vec<u32>)> = vec![(BibleBook::IntroBible, Vec::new())];
        let mut seen_ot = false;
        let mut seen_nt = false;
        for entry in &layout.books {
            if entry.book.is_intro() {
                return Err(CoreError::layout(
                    name,
                    format!("{} is inserted automatically", entry.book),
                ));
            }
            if ordered.iter().any(|(b, _)| *b == entry.book) {
                return Err(CoreError::layout(name, format!("duplicate book {}", entry.book)));
            }
            if entry.verses.is_empty() {
                return Err(CoreError::layout(name, format!("{} has no chapters", entry.book)));
            }
            if let Some(pos) = entry.verses.iter().position(|v| *v == 0) {
                return Err(CoreError::layout(
                    name,
                    format!("{} chapter {} has no verses", entry.book, pos + 1),
                ));
            }
            match entry.book.testament() {
                Testament::Old if !seen_ot => {
                    seen_ot = true;
                    ordered.push((BibleBook::IntroOt, Vec::new()));
                }
                Testament::New if !seen_nt => {
                    seen_nt = true;
                    ordered.push((BibleBook::IntroNt, Vec::new()));
                }
                _ => {}
            }
            ordered.push((entry.book, entry.verses.clone()));
        }

        let mut books = Vec::with_capacity(ordered.len());
        let mut index = HashMap::with_capacity(ordered.len());
        let overflow = || CoreError::layout(name, "ordinal space exceeds u32");
        let mut next = 0u32;
        for (book, verses) in ordered {
            let last_chapter = u32::try_from(verses.len()).map_err(|_| overflow())?;
            let mut chapter_starts = Vec::with_capacity(verses.len() + 1);
            chapter_starts.push(next);
            // Book intro, then chapter intro plus verses for each chapter
            let mut cursor = next.checked_add(1).ok_or_else(overflow)?;
            for last in &verses {
                chapter_starts.push(cursor);
                cursor = last
                    .checked_add(1)
                    .and_then(|span| cursor.checked_add(span))
                    .ok_or_else(overflow)?;
            }
            next = cursor;
            index.insert(book, books.len());
            books.push(BookEntry {
                book,
                verses,
                chapter_starts,
                last_chapter,
            });
        }

        Ok(Self {
            name: name.to_string(),
            books,
            index,
            ordinal_count: next,
        })
    }

    /// Scheme name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of books including intro pseudo-books
    #[inline]
    #[must_use]
    pub fn book_count(&self) -> usize {
        self.books.len()
    }

    /// Books in scheme order, intro pseudo-books included
    pub fn books(&self) -> impl Iterator<Item = BibleBook> + '_ {
        self.books.iter().map(|e| e.book)
    }

    /// Check if the scheme contains a book
    #[inline]
    #[must_use]
    pub fn contains_book(&self, book: BibleBook) -> bool {
        self.index.contains_key(&book)
    }

    /// Position of a book in scheme order
    #[inline]
    #[must_use]
    pub fn book_position(&self, book: BibleBook) -> Option<usize> {
        self.index.get(&book).copied()
    }

    /// Book following `book` in scheme order
    #[must_use]
    pub fn next_book(&self, book: BibleBook) -> Option<BibleBook> {
        let pos = self.book_position(book)?;
        self.books.get(pos + 1).map(|e| e.book)
    }

    /// Book preceding `book` in scheme order
    #[must_use]
    pub fn previous_book(&self, book: BibleBook) -> Option<BibleBook> {
        let pos = self.book_position(book)?;
        pos.checked_sub(1).map(|p| self.books[p].book)
    }

    /// Number of ordinals (one past the highest ordinal)
    #[inline]
    #[must_use]
    pub fn ordinal_count(&self) -> u32 {
        self.ordinal_count
    }

    fn entry(&self, book: BibleBook) -> CoreResult<&BookEntry> {
        self.book_position(book)
            .map(|pos| &self.books[pos])
            .ok_or_else(|| CoreError::BookNotInScheme {
                scheme: self.name.clone(),
                book,
            })
    }

    fn out_of_range(&self, book: BibleBook, chapter: u32, verse: u32) -> CoreError {
        CoreError::OutOfRange {
            scheme: self.name.clone(),
            book,
            chapter,
            verse,
        }
    }

    /// Last chapter of a book (0 for intro pseudo-books)
    ///
    /// # Errors
    /// Returns [`CoreError::BookNotInScheme`] if the book is absent
    pub fn last_chapter(&self, book: BibleBook) -> CoreResult<u32> {
        Ok(self.entry(book)?.last_chapter())
    }

    /// Last verse of a chapter (0 for chapter 0)
    ///
    /// # Errors
    /// Returns an error if the book is absent or the chapter is out of range
    pub fn last_verse(&self, book: BibleBook, chapter: u32) -> CoreResult<u32> {
        let entry = self.entry(book)?;
        match chapter {
            0 => Ok(0),
            c if c <= entry.last_chapter() => Ok(entry.verses[c as usize - 1]),
            c => Err(self.out_of_range(book, c, 0)),
        }
    }

    /// Check that a coordinate exists in this scheme
    ///
    /// # Errors
    /// Returns an error describing the first violated bound
    pub fn validate(&self, book: BibleBook, chapter: u32, verse: u32) -> CoreResult<()> {
        let last = self
            .last_verse(book, chapter)
            .map_err(|e| match e {
                CoreError::OutOfRange { .. } => self.out_of_range(book, chapter, verse),
                other => other,
            })?;
        if verse > last {
            return Err(self.out_of_range(book, chapter, verse));
        }
        Ok(())
    }

    /// Ordinal of a coordinate
    ///
    /// # Errors
    /// Returns an error if the coordinate is not valid in this scheme
    pub fn ordinal(&self, book: BibleBook, chapter: u32, verse: u32) -> CoreResult<u32> {
        self.validate(book, chapter, verse)?;
        let entry = self.entry(book)?;
        Ok(entry.chapter_starts[chapter as usize] + verse)
    }

    /// Coordinate addressed by an ordinal
    ///
    /// # Errors
    /// Returns [`CoreError::OrdinalOutOfRange`] past the end of the scheme
    pub fn decode(&self, ordinal: u32) -> CoreResult<(BibleBook, u32, u32)> {
        if ordinal >= self.ordinal_count {
            return Err(CoreError::OrdinalOutOfRange {
                scheme: self.name.clone(),
                ordinal,
            });
        }
        let pos = self
            .books
            .partition_point(|e| e.first_ordinal() <= ordinal)
            .saturating_sub(1);
        let entry = &self.books[pos];
        let chapter = entry
            .chapter_starts
            .partition_point(|start| *start <= ordinal)
            .saturating_sub(1);
        let verse = ordinal - entry.chapter_starts[chapter];
        Ok((entry.book, chapter as u32, verse))
    }

    /// First and last ordinal of the readable verses of a book (chapter 1
    /// verse 1 through the final verse)
    ///
    /// # Errors
    /// Returns an error for absent books and intro pseudo-books
    pub fn book_bounds(&self, book: BibleBook) -> CoreResult<(u32, u32)> {
        let last_chapter = self.last_chapter(book)?;
        if last_chapter == 0 {
            return Err(self.out_of_range(book, 1, 1));
        }
        let first = self.ordinal(book, 1, 1)?;
        let last = self.ordinal(book, last_chapter, self.last_verse(book, last_chapter)?)?;
        Ok((first, last))
    }
}

impl PartialEq for Versification {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Versification {}

impl fmt::Debug for Versification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Versification")
            .field("name", &self.name)
            .field("books", &self.books.len())
            .field("ordinals", &self.ordinal_count)
            .finish()
    }
}

impl fmt::Display for Versification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
