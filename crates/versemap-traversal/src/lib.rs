//! versemap traversal
//!
//! Canon-aware navigation: step verse by verse, chapter by chapter or a
//! page of verses at a time through one document, without hopping between
//! canonical and non-canonical books.
//!
//! # Example
//!
//! ```rust
//! use versemap_core::{BibleBook, SchemeLibrary, Verse, VersificationLayout};
//! use versemap_traversal::{AllBooks, BibleTraverser, ScriptureClassifier};
//!
//! let library = SchemeLibrary::new().with_layout(
//!     VersificationLayout::new("KJV")
//!         .with_book(BibleBook::Gen, &[31, 25])
//!         .with_book(BibleBook::Exod, &[22]),
//! );
//! let classifier = ScriptureClassifier::from_library(&library, "KJV").unwrap();
//! let traverser = BibleTraverser::new(classifier);
//!
//! let kjv = library.get("KJV").unwrap();
//! let last = Verse::new(kjv, BibleBook::Gen, 2, 25);
//! assert_eq!(traverser.next_verse(&AllBooks, &last).to_string(), "Exod.1.1");
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod document;
mod error;
mod scripture;
mod traverser;

// Re-exports
pub use document::{AllBooks, BookSet, DocumentBooks};
pub use error::{TraversalError, TraversalResult};
pub use scripture::ScriptureClassifier;
pub use traverser::{BibleTraverser, ChapterBoundary};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
