//! Bible books
//!
//! Provides [`BibleBook`], the closed set of books any scheme may contain,
//! together with OSIS identifiers and testament classification.

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Broad grouping of a book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Testament {
    /// Introductory pseudo-book, never scripture
    Intro,

    /// Old Testament
    Old,

    /// New Testament
    New,

    /// Deuterocanonical / apocryphal books
    Deuterocanon,
}

macro_rules! bible_books {
    ($($variant:ident => $osis:literal, $testament:ident;)+) => {
        /// A book of the Bible, or one of the intro pseudo-books
        ///
        /// Declaration order is the default canonical order. Individual
        /// schemes choose their own subset and order.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "&'static str")]
        pub enum BibleBook {
            $(
                #[allow(missing_docs)]
                $variant,
            )+
        }

        impl BibleBook {
            /// Every known book in default order
            pub const ALL: &'static [BibleBook] = &[$(BibleBook::$variant),+];

            /// OSIS identifier (e.g. `Gen`, `1Cor`)
            #[must_use]
            pub const fn osis(self) -> &'static str {
                match self {
                    $(BibleBook::$variant => $osis,)+
                }
            }

            /// Testament grouping
            #[must_use]
            pub const fn testament(self) -> Testament {
                match self {
                    $(BibleBook::$variant => Testament::$testament,)+
                }
            }
        }
    };
}

bible_books! {
    IntroBible => "IntroBible", Intro;
    IntroOt => "IntroOT", Intro;
    Gen => "Gen", Old;
    Exod => "Exod", Old;
    Lev => "Lev", Old;
    Num => "Num", Old;
    Deut => "Deut", Old;
    Josh => "Josh", Old;
    Judg => "Judg", Old;
    Ruth => "Ruth", Old;
    Sam1 => "1Sam", Old;
    Sam2 => "2Sam", Old;
    Kgs1 => "1Kgs", Old;
    Kgs2 => "2Kgs", Old;
    Chr1 => "1Chr", Old;
    Chr2 => "2Chr", Old;
    Ezra => "Ezra", Old;
    Neh => "Neh", Old;
    Esth => "Esth", Old;
    Job => "Job", Old;
    Ps => "Ps", Old;
    Prov => "Prov", Old;
    Eccl => "Eccl", Old;
    Song => "Song", Old;
    Isa => "Isa", Old;
    Jer => "Jer", Old;
    Lam => "Lam", Old;
    Ezek => "Ezek", Old;
    Dan => "Dan", Old;
    Hos => "Hos", Old;
    Joel => "Joel", Old;
    Amos => "Amos", Old;
    Obad => "Obad", Old;
    Jonah => "Jonah", Old;
    Mic => "Mic", Old;
    Nah => "Nah", Old;
    Hab => "Hab", Old;
    Zeph => "Zeph", Old;
    Hag => "Hag", Old;
    Zech => "Zech", Old;
    Mal => "Mal", Old;
    IntroNt => "IntroNT", Intro;
    Matt => "Matt", New;
    Mark => "Mark", New;
    Luke => "Luke", New;
    John => "John", New;
    Acts => "Acts", New;
    Rom => "Rom", New;
    Cor1 => "1Cor", New;
    Cor2 => "2Cor", New;
    Gal => "Gal", New;
    Eph => "Eph", New;
    Phil => "Phil", New;
    Col => "Col", New;
    Thess1 => "1Thess", New;
    Thess2 => "2Thess", New;
    Tim1 => "1Tim", New;
    Tim2 => "2Tim", New;
    Titus => "Titus", New;
    Phlm => "Phlm", New;
    Heb => "Heb", New;
    Jas => "Jas", New;
    Pet1 => "1Pet", New;
    Pet2 => "2Pet", New;
    John1 => "1John", New;
    John2 => "2John", New;
    John3 => "3John", New;
    Jude => "Jude", New;
    Rev => "Rev", New;
    Tob => "Tob", Deuterocanon;
    Jdt => "Jdt", Deuterocanon;
    AddEsth => "AddEsth", Deuterocanon;
    Wis => "Wis", Deuterocanon;
    Sir => "Sir", Deuterocanon;
    Bar => "Bar", Deuterocanon;
    EpJer => "EpJer", Deuterocanon;
    PrAzar => "PrAzar", Deuterocanon;
    Sus => "Sus", Deuterocanon;
    Bel => "Bel", Deuterocanon;
    Macc1 => "1Macc", Deuterocanon;
    Macc2 => "2Macc", Deuterocanon;
    Macc3 => "3Macc", Deuterocanon;
    Macc4 => "4Macc", Deuterocanon;
    PrMan => "PrMan", Deuterocanon;
    Esd1 => "1Esd", Deuterocanon;
    Esd2 => "2Esd", Deuterocanon;
    AddPs => "AddPs", Deuterocanon;
}

impl BibleBook {
    /// Check if this is one of the intro pseudo-books
    #[inline]
    #[must_use]
    pub const fn is_intro(self) -> bool {
        matches!(self.testament(), Testament::Intro)
    }

    /// Look up a book by OSIS id, ignoring ASCII case
    #[must_use]
    pub fn from_osis(id: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|book| book.osis().eq_ignore_ascii_case(id))
    }
}

impl Display for BibleBook {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.osis())
    }
}

impl FromStr for BibleBook {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_osis(s.trim()).ok_or_else(|| CoreError::UnknownBook(s.to_string()))
    }
}

impl TryFrom<String> for BibleBook {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<BibleBook> for &'static str {
    fn from(book: BibleBook) -> Self {
        book.osis()
    }
}
