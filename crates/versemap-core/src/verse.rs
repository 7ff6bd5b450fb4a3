//! Verse coordinates
//!
//! Provides [`Verse`], [`VerseRange`], [`Passage`] and the [`Reference`] sum
//! type. All values are immutable and carry the scheme they are expressed in.

use crate::book::BibleBook;
use crate::error::{CoreError, CoreResult};
use crate::versification::Versification;
use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// A (scheme, book, chapter, verse) coordinate
///
/// Verse 0 denotes the chapter intro position. [`Verse::new`] does not
/// validate; a coordinate that is not valid in its scheme reports ordinal 0.
#[derive(Clone)]
pub struct Verse {
    scheme: Arc<Versification>,
    book: BibleBook,
    chapter: u32,
    verse: u32,
}

impl Verse {
    /// Create a verse without validating it against the scheme
    #[inline]
    #[must_use]
    pub fn new(scheme: Arc<Versification>, book: BibleBook, chapter: u32, verse: u32) -> Self {
        Self {
            scheme,
            book,
            chapter,
            verse,
        }
    }

    /// Create a verse that must exist in the scheme
    ///
    /// # Errors
    /// Returns an error if the coordinate is out of bounds
    pub fn checked(
        scheme: Arc<Versification>,
        book: BibleBook,
        chapter: u32,
        verse: u32,
    ) -> CoreResult<Self> {
        scheme.validate(book, chapter, verse)?;
        Ok(Self::new(scheme, book, chapter, verse))
    }

    /// Verse addressed by an ordinal
    ///
    /// # Errors
    /// Returns an error if the ordinal is past the end of the scheme
    pub fn from_ordinal(scheme: Arc<Versification>, ordinal: u32) -> CoreResult<Self> {
        let (book, chapter, verse) = scheme.decode(ordinal)?;
        Ok(Self::new(scheme, book, chapter, verse))
    }

    /// Scheme this verse is expressed in
    #[inline]
    #[must_use]
    pub fn scheme(&self) -> &Arc<Versification> {
        &self.scheme
    }

    /// Book
    #[inline]
    #[must_use]
    pub fn book(&self) -> BibleBook {
        self.book
    }

    /// Chapter number
    #[inline]
    #[must_use]
    pub fn chapter(&self) -> u32 {
        self.chapter
    }

    /// Verse number
    #[inline]
    #[must_use]
    pub fn verse(&self) -> u32 {
        self.verse
    }

    /// Ordinal within the scheme
    ///
    /// # Errors
    /// Returns an error if the coordinate is not valid in its scheme
    pub fn try_ordinal(&self) -> CoreResult<u32> {
        self.scheme.ordinal(self.book, self.chapter, self.verse)
    }

    /// Ordinal within the scheme, or 0 if the coordinate is not valid there
    #[inline]
    #[must_use]
    pub fn ordinal(&self) -> u32 {
        self.try_ordinal().unwrap_or(0)
    }

    /// Check if the coordinate exists in its scheme
    #[inline]
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.scheme.validate(self.book, self.chapter, self.verse).is_ok()
    }

    /// Same coordinate expressed in another scheme, without validation
    #[inline]
    #[must_use]
    pub fn with_scheme(&self, scheme: Arc<Versification>) -> Self {
        Self::new(scheme, self.book, self.chapter, self.verse)
    }

    /// Same book and chapter with a different verse number
    #[inline]
    #[must_use]
    pub fn with_verse(&self, verse: u32) -> Self {
        Self::new(self.scheme.clone(), self.book, self.chapter, verse)
    }

    /// Check if this verse is expressed in `scheme`
    #[inline]
    #[must_use]
    pub fn is_in(&self, scheme: &Versification) -> bool {
        *self.scheme == *scheme
    }

    /// Check if two verses share scheme, book and chapter
    #[inline]
    #[must_use]
    pub fn is_same_chapter(&self, other: &Verse) -> bool {
        self.scheme == other.scheme && self.book == other.book && self.chapter == other.chapter
    }

    /// Check if this is the first position of its chapter
    ///
    /// Verse 0 and verse 1 both count as the start, since navigation never
    /// steps onto the chapter intro position.
    #[inline]
    #[must_use]
    pub fn is_start_of_chapter(&self) -> bool {
        self.verse <= 1
    }

    /// Check if this is the final verse of its chapter
    #[must_use]
    pub fn is_end_of_chapter(&self) -> bool {
        self.scheme
            .last_verse(self.book, self.chapter)
            .map(|last| self.verse >= last)
            .unwrap_or(false)
    }

    /// Parse `Book.Chapter.Verse` or `Book.Chapter` (verse 0)
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidReference`] for malformed text and a
    /// bounds error for coordinates not in the scheme
    pub fn parse(scheme: &Arc<Versification>, text: &str) -> CoreResult<Self> {
        let trimmed = text.trim();
        let mut parts = trimmed.split('.');
        let book_part = parts
            .next()
            .filter(|p| !p.is_empty())
            .ok_or_else(|| CoreError::invalid_reference(text, "missing book"))?;
        let book = BibleBook::from_osis(book_part).ok_or_else(|| {
            CoreError::invalid_reference(text, format!("unknown book {book_part}"))
        })?;
        let chapter = parse_number(text, parts.next(), "chapter")?
            .ok_or_else(|| CoreError::invalid_reference(text, "missing chapter"))?;
        let verse = parse_number(text, parts.next(), "verse")?.unwrap_or(0);
        if parts.next().is_some() {
            return Err(CoreError::invalid_reference(text, "too many components"));
        }
        Self::checked(scheme.clone(), book, chapter, verse)
    }
}

fn parse_number(input: &str, part: Option<&str>, what: &str) -> CoreResult<Option<u32>> {
    match part {
        None => Ok(None),
        Some(p) => p
            .trim()
            .parse::<u32>()
            .map(Some)
            .map_err(|_| CoreError::invalid_reference(input, format!("bad {what} '{p}'"))),
    }
}

impl PartialEq for Verse {
    fn eq(&self, other: &Self) -> bool {
        self.book == other.book
            && self.chapter == other.chapter
            && self.verse == other.verse
            && self.scheme == other.scheme
    }
}

impl Eq for Verse {}

impl Hash for Verse {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.scheme.name().hash(state);
        self.book.hash(state);
        self.chapter.hash(state);
        self.verse.hash(state);
    }
}

impl PartialOrd for Verse {
    /// Verses are only ordered within one scheme
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.scheme != other.scheme {
            return None;
        }
        Some(
            (self.ordinal(), self.book, self.chapter, self.verse).cmp(&(
                other.ordinal(),
                other.book,
                other.chapter,
                other.verse,
            )),
        )
    }
}

impl Display for Verse {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.book, self.chapter, self.verse)
    }
}

impl fmt::Debug for Verse {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Verse({} {})", self.scheme.name(), self)
    }
}

/// Inclusive range of verses in one scheme
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VerseRange {
    start: Verse,
    end: Verse,
}

impl VerseRange {
    /// Create a range
    ///
    /// Endpoint order is not checked.
    ///
    /// # Errors
    /// Returns [`CoreError::SchemeMismatch`] if the endpoints differ in scheme
    pub fn new(start: Verse, end: Verse) -> CoreResult<Self> {
        if start.scheme != end.scheme {
            return Err(CoreError::SchemeMismatch {
                left: start.scheme.name().to_string(),
                right: end.scheme.name().to_string(),
            });
        }
        Ok(Self { start, end })
    }

    /// Range covering a single verse
    #[inline]
    #[must_use]
    pub fn single(verse: Verse) -> Self {
        Self {
            start: verse.clone(),
            end: verse,
        }
    }

    /// First verse
    #[inline]
    #[must_use]
    pub fn start(&self) -> &Verse {
        &self.start
    }

    /// Last verse
    #[inline]
    #[must_use]
    pub fn end(&self) -> &Verse {
        &self.end
    }

    /// Scheme shared by both endpoints
    #[inline]
    #[must_use]
    pub fn scheme(&self) -> &Arc<Versification> {
        &self.start.scheme
    }

    /// Number of ordinals covered, endpoints included
    #[inline]
    #[must_use]
    pub fn cardinality(&self) -> u32 {
        self.end.ordinal().saturating_sub(self.start.ordinal()) + 1
    }

    /// Check if a verse falls inside the range
    #[must_use]
    pub fn contains(&self, verse: &Verse) -> bool {
        if verse.scheme != self.start.scheme {
            return false;
        }
        let ordinal = verse.ordinal();
        self.start.ordinal() <= ordinal && ordinal <= self.end.ordinal()
    }

    /// Iterate the verses of the range in ordinal order
    pub fn verses(&self) -> impl Iterator<Item = Verse> + '_ {
        (self.start.ordinal()..=self.end.ordinal())
            .filter_map(move |ordinal| Verse::from_ordinal(self.scheme().clone(), ordinal).ok())
    }

    /// Parse `Gen.1.1-Gen.1.3`, `Gen.1.1-3`, `Gen.1.30-2.2` or a single verse
    ///
    /// # Errors
    /// Returns an error if either endpoint is malformed or not in the scheme
    pub fn parse(scheme: &Arc<Versification>, text: &str) -> CoreResult<Self> {
        let Some((head, tail)) = text.split_once('-') else {
            return Verse::parse(scheme, text).map(Self::single);
        };
        let start = Verse::parse(scheme, head)?;
        let tail = tail.trim();
        let dots = tail.matches('.').count();
        let end = match dots {
            0 => Verse::parse(scheme, &format!("{}.{}.{tail}", start.book, start.chapter))?,
            1 => Verse::parse(scheme, &format!("{}.{tail}", start.book))?,
            _ => Verse::parse(scheme, tail)?,
        };
        Self::new(start, end)
    }
}

impl Display for VerseRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

/// Ordered collection of verse ranges in one scheme
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Passage {
    scheme: Arc<Versification>,
    ranges: Vec<VerseRange>,
}

impl Passage {
    /// Create an empty passage
    #[inline]
    #[must_use]
    pub fn new(scheme: Arc<Versification>) -> Self {
        Self {
            scheme,
            ranges: Vec::new(),
        }
    }

    /// Build a passage from ranges
    ///
    /// # Errors
    /// Returns [`CoreError::SchemeMismatch`] if any range is in another scheme
    pub fn from_ranges(
        scheme: Arc<Versification>,
        ranges: impl IntoIterator<Item = VerseRange>,
    ) -> CoreResult<Self> {
        let mut passage = Self::new(scheme);
        for range in ranges {
            passage.push(range)?;
        }
        Ok(passage)
    }

    /// Append a range
    ///
    /// # Errors
    /// Returns [`CoreError::SchemeMismatch`] if the range is in another scheme
    pub fn push(&mut self, range: VerseRange) -> CoreResult<()> {
        if *range.scheme() != self.scheme {
            return Err(CoreError::SchemeMismatch {
                left: self.scheme.name().to_string(),
                right: range.scheme().name().to_string(),
            });
        }
        self.ranges.push(range);
        Ok(())
    }

    /// Scheme of the passage
    #[inline]
    #[must_use]
    pub fn scheme(&self) -> &Arc<Versification> {
        &self.scheme
    }

    /// Constituent ranges
    #[inline]
    #[must_use]
    pub fn ranges(&self) -> &[VerseRange] {
        &self.ranges
    }

    /// Number of ranges
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// Check if the passage has no ranges
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Total verses across all ranges
    #[must_use]
    pub fn verse_count(&self) -> u32 {
        self.ranges.iter().map(VerseRange::cardinality).sum()
    }

    /// Check if any range contains the verse
    #[must_use]
    pub fn contains(&self, verse: &Verse) -> bool {
        self.ranges.iter().any(|r| r.contains(verse))
    }

    /// Parse ranges separated by `,` or `;`
    ///
    /// # Errors
    /// Returns the first range parse error
    pub fn parse(scheme: &Arc<Versification>, text: &str) -> CoreResult<Self> {
        let ranges = text
            .split([',', ';'])
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| VerseRange::parse(scheme, part))
            .collect::<CoreResult<Vec<_>>>()?;
        Self::from_ranges(scheme.clone(), ranges)
    }
}

impl Display for Passage {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, range) in self.ranges.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{range}")?;
        }
        Ok(())
    }
}

/// Any kind of scripture reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reference {
    /// A single verse
    Verse(Verse),

    /// A contiguous range
    Range(VerseRange),

    /// One or more ranges
    Passage(Passage),
}

impl Reference {
    /// Scheme the reference is expressed in
    #[must_use]
    pub fn scheme(&self) -> &Arc<Versification> {
        match self {
            Self::Verse(v) => v.scheme(),
            Self::Range(r) => r.scheme(),
            Self::Passage(p) => p.scheme(),
        }
    }
}

impl From<Verse> for Reference {
    fn from(verse: Verse) -> Self {
        Self::Verse(verse)
    }
}

impl From<VerseRange> for Reference {
    fn from(range: VerseRange) -> Self {
        Self::Range(range)
    }
}

impl From<Passage> for Reference {
    fn from(passage: Passage) -> Self {
        Self::Passage(passage)
    }
}

impl Display for Reference {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Verse(v) => write!(f, "{v}"),
            Self::Range(r) => write!(f, "{r}"),
            Self::Passage(p) => write!(f, "{p}"),
        }
    }
}
