//! Mapping strategies
//!
//! Provides [`MappingStrategy`], the closed set of ways one verse can be
//! carried into another scheme. Every variant answers the same two
//! questions: which scheme pairs it handles, and what a verse becomes.

use crate::data_file::DataFileMapping;
use crate::error::MappingResult;
use crate::pivot::PivotMapping;
use std::fmt;
use std::sync::Arc;
use versemap_core::{Verse, Versification};

/// Verse conversion strategy
///
/// # Variants
/// - `Identity`: keeps book/chapter/verse verbatim; handles every pair
/// - `DataFile`: table lookup for one scheme pair, identity on miss
/// - `Pivot`: two data-file hops through an intermediate scheme
#[derive(Debug, Clone)]
pub enum MappingStrategy {
    /// Same coordinates in the target scheme
    Identity,

    /// Direct table between two schemes
    DataFile(Arc<DataFileMapping>),

    /// Composition of two tables through a pivot scheme
    Pivot(PivotMapping),
}

impl MappingStrategy {
    /// Check if the strategy handles `from → to`
    #[must_use]
    pub fn can_convert(&self, from: &Versification, to: &Versification) -> bool {
        match self {
            Self::Identity => true,
            Self::DataFile(mapping) => mapping.can_convert(from, to),
            Self::Pivot(mapping) => mapping.can_convert(from, to),
        }
    }

    /// Convert a verse, always producing a verse in `to`
    #[must_use]
    pub fn convert(&self, verse: &Verse, to: &Arc<Versification>) -> Verse {
        match self {
            Self::Identity => identity(verse, to),
            Self::DataFile(mapping) => mapping.convert(verse, to),
            Self::Pivot(mapping) => mapping.convert(verse, to),
        }
    }

    /// Convert a verse without identity fallback on table misses
    ///
    /// `Identity` still succeeds; its result may not exist in `to`, which
    /// callers detect through the zero ordinal.
    ///
    /// # Errors
    /// Returns the variant's lookup error
    pub fn try_convert(&self, verse: &Verse, to: &Arc<Versification>) -> MappingResult<Verse> {
        match self {
            Self::Identity => Ok(identity(verse, to)),
            Self::DataFile(mapping) => mapping.try_convert(verse, to),
            Self::Pivot(mapping) => mapping.try_convert(verse, to),
        }
    }

    /// Strategy name (for logging)
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Identity => "identity",
            Self::DataFile(_) => "data_file",
            Self::Pivot(_) => "pivot",
        }
    }

    /// Check if this is the universal fallback
    #[inline]
    #[must_use]
    pub fn is_identity(&self) -> bool {
        matches!(self, Self::Identity)
    }
}

impl fmt::Display for MappingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identity => f.write_str("identity"),
            Self::DataFile(mapping) => write!(f, "data_file({})", mapping.resource_name()),
            Self::Pivot(mapping) => write!(
                f,
                "pivot({}<->{}<->{})",
                mapping.left(),
                mapping.pivot(),
                mapping.right()
            ),
        }
    }
}

fn identity(verse: &Verse, to: &Arc<Versification>) -> Verse {
    if verse.is_in(to) {
        verse.clone()
    } else {
        verse.with_scheme(to.clone())
    }
}
