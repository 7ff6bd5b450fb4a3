//! Pivot mapping
//!
//! Provides [`PivotMapping`], which connects two schemes with no direct table
//! by chaining two data-file mappings through an intermediate scheme.
//!
//! Each hop applies its own identity fallback. A missing entry means the two
//! schemes number that verse the same way, so the pivot-scheme coordinate is
//! still the right input for the second hop.

use crate::data_file::DataFileMapping;
use crate::error::{MappingError, MappingResult};
use std::sync::Arc;
use versemap_core::{Verse, Versification};

/// Left ↔ pivot ↔ right composition of two data-file mappings
#[derive(Debug, Clone)]
pub struct PivotMapping {
    left: Arc<Versification>,
    pivot: Arc<Versification>,
    right: Arc<Versification>,
    left_hop: Arc<DataFileMapping>,
    right_hop: Arc<DataFileMapping>,
}

impl PivotMapping {
    /// Chain `left_hop` (left ↔ pivot) and `right_hop` (pivot ↔ right)
    ///
    /// # Errors
    /// Returns [`MappingError::Unsupported`] if a hop does not connect the
    /// expected schemes
    pub fn new(
        left: Arc<Versification>,
        pivot: Arc<Versification>,
        right: Arc<Versification>,
        left_hop: Arc<DataFileMapping>,
        right_hop: Arc<DataFileMapping>,
    ) -> MappingResult<Self> {
        if !left_hop.can_convert(&left, &pivot) {
            return Err(MappingError::unsupported(left.name(), pivot.name()));
        }
        if !right_hop.can_convert(&pivot, &right) {
            return Err(MappingError::unsupported(pivot.name(), right.name()));
        }
        Ok(Self {
            left,
            pivot,
            right,
            left_hop,
            right_hop,
        })
    }

    /// Left-hand scheme
    #[inline]
    #[must_use]
    pub fn left(&self) -> &Arc<Versification> {
        &self.left
    }

    /// Intermediate scheme
    #[inline]
    #[must_use]
    pub fn pivot(&self) -> &Arc<Versification> {
        &self.pivot
    }

    /// Right-hand scheme
    #[inline]
    #[must_use]
    pub fn right(&self) -> &Arc<Versification> {
        &self.right
    }

    /// Check if this mapping handles the outer pair, in either direction
    #[must_use]
    pub fn can_convert(&self, from: &Versification, to: &Versification) -> bool {
        (*self.left == *from && *self.right == *to) || (*self.left == *to && *self.right == *from)
    }

    /// Hops in the order they apply for `from → to`
    fn hops(&self, from: &Versification) -> (&DataFileMapping, &DataFileMapping) {
        if *from == *self.left {
            (&*self.left_hop, &*self.right_hop)
        } else {
            (&*self.right_hop, &*self.left_hop)
        }
    }

    /// Convert through the pivot, requiring a table entry on both hops
    ///
    /// # Errors
    /// Returns the first hop's error
    pub fn try_convert(&self, verse: &Verse, to: &Arc<Versification>) -> MappingResult<Verse> {
        if verse.is_in(to) {
            return Ok(verse.clone());
        }
        if !self.can_convert(verse.scheme(), to) {
            return Err(MappingError::unsupported(verse.scheme().name(), to.name()));
        }
        let (first, second) = self.hops(verse.scheme());
        let mid = first.try_convert(verse, &self.pivot)?;
        second.try_convert(&mid, to)
    }

    /// Convert through the pivot with per-hop identity fallback
    #[must_use]
    pub fn convert(&self, verse: &Verse, to: &Arc<Versification>) -> Verse {
        if verse.is_in(to) {
            return verse.clone();
        }
        if !self.can_convert(verse.scheme(), to) {
            return verse.with_scheme(to.clone());
        }
        let (first, second) = self.hops(verse.scheme());
        let mid = first.convert(verse, &self.pivot);
        second.convert(&mid, to)
    }
}
