//! versemap core
//!
//! Versification schemes and the immutable coordinate types expressed in them.
//!
//! # Overview
//!
//! - **BibleBook**: closed set of books with OSIS ids
//! - **Versification**: one scheme's book order, chapter and verse counts, ordinals
//! - **SchemeLibrary**: lookup service building each scheme once, on demand
//! - **Verse / VerseRange / Passage**: coordinates bound to their scheme
//!
//! # Example
//!
//! ```rust
//! use versemap_core::{BibleBook, SchemeLibrary, Verse, VersificationLayout};
//!
//! let library = SchemeLibrary::new().with_layout(
//!     VersificationLayout::new("Tiny").with_book(BibleBook::Gen, &[31, 25]),
//! );
//! let tiny = library.get("Tiny").unwrap();
//!
//! let verse = Verse::parse(&tiny, "Gen.1.31").unwrap();
//! assert!(verse.is_end_of_chapter());
//! ```

#![warn(missing_docs)]

pub mod book;
pub mod error;
pub mod library;
pub mod verse;
pub mod versification;

// Re-exports
pub use book::{BibleBook, Testament};
pub use error::{CoreError, CoreResult};
pub use library::SchemeLibrary;
pub use verse::{Passage, Reference, Verse, VerseRange};
pub use versification::{BookLayout, Versification, VersificationLayout};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with verses
    pub use crate::{
        BibleBook, CoreError, Passage, Reference, SchemeLibrary, Verse, VerseRange, Versification,
        VersificationLayout,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
