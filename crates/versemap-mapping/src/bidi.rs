//! Bidirectional verse map
//!
//! Provides [`BidiVerseMap`], a forward/backward lookup between verses of two
//! schemes. Source data routinely maps several sub-verse variants onto the
//! same verse once their letter suffix is stripped, so every key keeps the
//! candidate with the lowest ordinal regardless of insertion order.

use std::collections::HashMap;
use versemap_core::Verse;

/// Forward (left → right) and backward (right → left) verse associations
#[derive(Debug, Clone, Default)]
pub struct BidiVerseMap {
    forward: HashMap<Verse, Verse>,
    backward: HashMap<Verse, Verse>,
}

impl BidiVerseMap {
    /// Create an empty map
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Associate `left` with `right` in both directions
    ///
    /// An existing association is only replaced by a candidate with a lower
    /// ordinal.
    pub fn add(&mut self, left: Verse, right: Verse) {
        insert_lowest(&mut self.forward, left.clone(), right.clone());
        insert_lowest(&mut self.backward, right, left);
    }

    /// Right-hand verse for `left`
    #[inline]
    #[must_use]
    pub fn forward(&self, left: &Verse) -> Option<&Verse> {
        self.forward.get(left)
    }

    /// Left-hand verse for `right`
    #[inline]
    #[must_use]
    pub fn backward(&self, right: &Verse) -> Option<&Verse> {
        self.backward.get(right)
    }

    /// Number of forward keys
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    /// Check if nothing was added
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }
}

fn insert_lowest(map: &mut HashMap<Verse, Verse>, key: Verse, candidate: Verse) {
    match map.get(&key) {
        Some(current) if current.ordinal() <= candidate.ordinal() => {}
        _ => {
            map.insert(key, candidate);
        }
    }
}
