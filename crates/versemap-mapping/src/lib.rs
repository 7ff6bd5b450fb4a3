//! versemap mapping
//!
//! Converts verse references between versification schemes.
//!
//! # Core Concepts
//!
//! - [`BidiVerseMap`]: forward/backward verse table, lowest ordinal wins
//! - [`DataFileMapping`]: lazily loaded `{Left}To{Right}` properties table
//! - [`PivotMapping`]: two tables chained through an intermediate scheme
//! - [`MappingStrategy`]: closed set of Identity, DataFile and Pivot
//! - [`MappingRegistry`]: priority-ordered strategies, identity last
//! - [`RangeConverter`]: total conversion of verses, ranges and passages
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use versemap_core::{BibleBook, SchemeLibrary, Verse, VersificationLayout};
//! use versemap_mapping::{MappingConfig, MappingRegistry, RangeConverter, StaticSource};
//!
//! let library = SchemeLibrary::new();
//! for name in ["KJV", "Synodal", "German"] {
//!     library.register_layout(
//!         VersificationLayout::new(name).with_book(BibleBook::Ps, &[6, 12, 8]),
//!     );
//! }
//! let source = Arc::new(StaticSource::new().with("KJVToSynodal", "Ps.3.1=Ps.2.12"));
//! let config = MappingConfig::default();
//! let registry = MappingRegistry::from_config(&config, &library, source).unwrap();
//! let converter = RangeConverter::new(Arc::new(registry));
//!
//! let kjv = library.get("KJV").unwrap();
//! let synodal = library.get("Synodal").unwrap();
//! let verse = Verse::new(kjv, BibleBook::Ps, 3, 1);
//! assert_eq!(converter.convert_verse(&verse, &synodal).to_string(), "Ps.2.12");
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod bidi;
mod config;
mod converter;
mod data_file;
mod error;
mod pivot;
mod registry;
mod source;
mod strategy;

// Re-exports
pub use bidi::BidiVerseMap;
pub use config::{MappingConfig, MappingSpec};
pub use converter::RangeConverter;
pub use data_file::DataFileMapping;
pub use error::{MappingError, MappingResult};
pub use pivot::PivotMapping;
pub use registry::MappingRegistry;
pub use source::{
    parse_properties, strip_part_suffix, DirectorySource, MalformedLine, MappingSource,
    PropertyEntry, StaticSource, RESOURCE_EXTENSION,
};
pub use strategy::MappingStrategy;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
