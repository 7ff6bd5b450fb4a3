//! Data-file backed mapping
//!
//! Provides [`DataFileMapping`], a direction-agnostic mapping between two
//! schemes driven by a bundled `{Left}To{Right}` properties table. The table
//! is read and parsed on first use, exactly once, and shared by every caller.

use crate::bidi::BidiVerseMap;
use crate::error::{MappingError, MappingResult};
use crate::source::{parse_properties, strip_part_suffix, MappingSource};
use once_cell::sync::OnceCell;
use std::fmt;
use std::sync::Arc;
use versemap_core::{Verse, Versification};

/// Mapping between two schemes backed by a properties table
pub struct DataFileMapping {
    left: Arc<Versification>,
    right: Arc<Versification>,
    source: Arc<dyn MappingSource>,
    table: OnceCell<BidiVerseMap>,
}

impl DataFileMapping {
    /// Create a mapping; nothing is loaded until the first conversion
    #[must_use]
    pub fn new(
        left: Arc<Versification>,
        right: Arc<Versification>,
        source: Arc<dyn MappingSource>,
    ) -> Self {
        Self {
            left,
            right,
            source,
            table: OnceCell::new(),
        }
    }

    /// Left-hand scheme
    #[inline]
    #[must_use]
    pub fn left(&self) -> &Arc<Versification> {
        &self.left
    }

    /// Right-hand scheme
    #[inline]
    #[must_use]
    pub fn right(&self) -> &Arc<Versification> {
        &self.right
    }

    /// Resource name of the backing table
    #[must_use]
    pub fn resource_name(&self) -> String {
        format!("{}To{}", self.left.name(), self.right.name())
    }

    /// Check if this mapping handles `from → to` in either direction
    #[must_use]
    pub fn can_convert(&self, from: &Versification, to: &Versification) -> bool {
        (*self.left == *from && *self.right == *to) || (*self.left == *to && *self.right == *from)
    }

    /// Check if the backing table has been built
    #[inline]
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.table.get().is_some()
    }

    /// Backing table, building it on first access
    pub fn table(&self) -> &BidiVerseMap {
        self.table.get_or_init(|| self.build_table())
    }

    /// Look up `verse` in the table without any fallback
    ///
    /// # Errors
    /// Returns [`MappingError::Unsupported`] when the verse or target is not
    /// one of this mapping's schemes, and [`MappingError::Unmapped`] when the
    /// table has no entry
    pub fn try_convert(&self, verse: &Verse, to: &Arc<Versification>) -> MappingResult<Verse> {
        if verse.is_in(to) {
            return Ok(verse.clone());
        }
        if !self.can_convert(verse.scheme(), to) {
            return Err(MappingError::unsupported(verse.scheme().name(), to.name()));
        }
        let found = if **to == *self.right {
            self.table().forward(verse)
        } else {
            self.table().backward(verse)
        };
        found.cloned().ok_or_else(|| MappingError::Unmapped {
            verse: verse.to_string(),
            from: verse.scheme().name().to_string(),
            to: to.name().to_string(),
        })
    }

    /// Convert `verse`, falling back to the same coordinates in `to` when
    /// the table has no entry
    #[must_use]
    pub fn convert(&self, verse: &Verse, to: &Arc<Versification>) -> Verse {
        self.try_convert(verse, to).unwrap_or_else(|err| {
            tracing::trace!(%verse, to = %to, reason = %err, "identity fallback");
            verse.with_scheme(to.clone())
        })
    }

    fn build_table(&self) -> BidiVerseMap {
        let resource = self.resource_name();
        let mut table = BidiVerseMap::new();

        let text = match self.source.load(&resource) {
            Ok(text) => text,
            Err(err) => {
                tracing::error!(%resource, error = %err, "mapping resource unavailable");
                return table;
            }
        };

        let mut skipped = 0usize;
        for entry in parse_properties(&text) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(bad) => {
                    tracing::warn!(
                        %resource,
                        line = bad.line,
                        text = bad.text,
                        "skipping malformed mapping line"
                    );
                    skipped += 1;
                    continue;
                }
            };
            let left = Verse::parse(&self.left, strip_part_suffix(entry.key));
            let right = Verse::parse(&self.right, strip_part_suffix(entry.value));
            match (left, right) {
                (Ok(left), Ok(right)) => table.add(left, right),
                (Err(err), _) | (_, Err(err)) => {
                    tracing::warn!(
                        %resource,
                        line = entry.line,
                        error = %err,
                        "skipping unparseable mapping line"
                    );
                    skipped += 1;
                }
            }
        }

        tracing::debug!(%resource, entries = table.len(), skipped, "built mapping table");
        table
    }
}

impl fmt::Debug for DataFileMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataFileMapping")
            .field("resource", &self.resource_name())
            .field("loaded", &self.is_loaded())
            .finish()
    }
}
