//! Reference conversion
//!
//! Provides [`RangeConverter`], the consumer-facing API lifting single-verse
//! strategies to ranges and passages. Conversion is total: every call yields
//! a value in the target scheme, possibly numerically approximate.
//! [`RangeConverter::is_convertible_to`] reports whether a strict mapping
//! exists, so callers can flag approximations.

use crate::registry::MappingRegistry;
use std::sync::Arc;
use versemap_core::{Passage, Reference, Verse, VerseRange, Versification};

/// Converts verses, ranges and passages between schemes
#[derive(Debug, Clone)]
pub struct RangeConverter {
    registry: Arc<MappingRegistry>,
}

impl RangeConverter {
    /// Create a converter over `registry`
    #[inline]
    #[must_use]
    pub fn new(registry: Arc<MappingRegistry>) -> Self {
        Self { registry }
    }

    /// Underlying registry
    #[inline]
    #[must_use]
    pub fn registry(&self) -> &MappingRegistry {
        &self.registry
    }

    /// Convert a single verse
    #[must_use]
    pub fn convert_verse(&self, verse: &Verse, to: &Arc<Versification>) -> Verse {
        self.registry.resolve(verse.scheme(), to).convert(verse, to)
    }

    /// Convert both endpoints of a range independently
    ///
    /// The converted endpoints are not re-ordered.
    #[must_use]
    pub fn convert_range(&self, range: &VerseRange, to: &Arc<Versification>) -> VerseRange {
        let start = self.convert_verse(range.start(), to);
        let end = self.convert_verse(range.end(), to);
        VerseRange::new(start.clone(), end).unwrap_or_else(|err| {
            tracing::warn!(%range, error = %err, "converted endpoints disagree on scheme");
            VerseRange::single(start)
        })
    }

    /// Convert every range of a passage
    #[must_use]
    pub fn convert_passage(&self, passage: &Passage, to: &Arc<Versification>) -> Passage {
        let mut converted = Passage::new(to.clone());
        for range in passage.ranges() {
            if let Err(err) = converted.push(self.convert_range(range, to)) {
                tracing::warn!(%range, error = %err, "dropping range from converted passage");
            }
        }
        converted
    }

    /// Convert any kind of reference, keeping its kind
    #[must_use]
    pub fn convert_reference(&self, reference: &Reference, to: &Arc<Versification>) -> Reference {
        match reference {
            Reference::Verse(v) => Reference::Verse(self.convert_verse(v, to)),
            Reference::Range(r) => Reference::Range(self.convert_range(r, to)),
            Reference::Passage(p) => Reference::Passage(self.convert_passage(p, to)),
        }
    }

    /// Check if `verse` has a strict, non-fallback mapping into `to`
    ///
    /// A lookup error or a result with ordinal 0 both mean no.
    #[must_use]
    pub fn is_convertible_to(&self, verse: &Verse, to: &Arc<Versification>) -> bool {
        let strategy = self.registry.resolve(verse.scheme(), to);
        match strategy.try_convert(verse, to) {
            Ok(converted) => converted.ordinal() != 0,
            Err(err) => {
                tracing::debug!(
                    %verse,
                    to = %to,
                    strategy = strategy.name(),
                    reason = %err,
                    "no strict mapping"
                );
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_file::DataFileMapping;
    use crate::source::StaticSource;
    use crate::strategy::MappingStrategy;
    use pretty_assertions::assert_eq;
    use versemap_core::{BibleBook, VersificationLayout};

    struct Fixture {
        kjv: Arc<Versification>,
        syn: Arc<Versification>,
        converter: RangeConverter,
    }

    fn fixture() -> Fixture {
        let kjv = Arc::new(
            Versification::from_layout(
                &VersificationLayout::new("KJV")
                    .with_book(BibleBook::Gen, &[31, 25])
                    .with_book(BibleBook::Ps, &[6, 12, 8, 10]),
            )
            .unwrap(),
        );
        let syn = Arc::new(
            Versification::from_layout(
                &VersificationLayout::new("Synodal")
                    .with_book(BibleBook::Gen, &[31, 25])
                    .with_book(BibleBook::Ps, &[6, 13, 9]),
            )
            .unwrap(),
        );
        let source = Arc::new(StaticSource::new().with(
            "KJVToSynodal",
            "Ps.3.1=Ps.2.13\nPs.3.2=Ps.3.1\nPs.3.3=Ps.3.2\nPs.4.1=Ps.3.9",
        ));
        let mapping = DataFileMapping::new(kjv.clone(), syn.clone(), source);
        let registry = MappingRegistry::new().with(MappingStrategy::DataFile(Arc::new(mapping)));
        Fixture {
            kjv,
            syn,
            converter: RangeConverter::new(Arc::new(registry)),
        }
    }

    #[test]
    fn converts_mapped_verse() {
        let f = fixture();
        let v = Verse::new(f.kjv.clone(), BibleBook::Ps, 3, 2);
        assert_eq!(
            f.converter.convert_verse(&v, &f.syn),
            Verse::new(f.syn, BibleBook::Ps, 3, 1)
        );
    }

    #[test]
    fn same_scheme_is_unchanged() {
        let f = fixture();
        let v = Verse::new(f.kjv.clone(), BibleBook::Ps, 3, 2);
        assert_eq!(f.converter.convert_verse(&v, &f.kjv), v);
    }

    #[test]
    fn converts_range_endpoints() {
        let f = fixture();
        let range = VerseRange::parse(&f.kjv, "Ps.3.1-3").unwrap();
        let converted = f.converter.convert_range(&range, &f.syn);
        assert_eq!(converted.to_string(), "Ps.2.13-Ps.3.2");
        assert_eq!(converted.scheme().name(), "Synodal");
    }

    #[test]
    fn converts_passage_elementwise() {
        let f = fixture();
        let passage = Passage::parse(&f.kjv, "Gen.1.1-2; Ps.4.1").unwrap();
        let converted = f.converter.convert_passage(&passage, &f.syn);
        assert_eq!(converted.len(), 2);
        assert_eq!(converted.to_string(), "Gen.1.1-Gen.1.2, Ps.3.9");
    }

    #[test]
    fn converts_reference_keeping_kind() {
        let f = fixture();
        let reference = Reference::from(Verse::new(f.kjv.clone(), BibleBook::Ps, 3, 1));
        let converted = f.converter.convert_reference(&reference, &f.syn);
        assert!(matches!(converted, Reference::Verse(_)));
        assert_eq!(converted.to_string(), "Ps.2.13");
    }

    #[test]
    fn strict_mapping_detection() {
        let f = fixture();
        let mapped = Verse::new(f.kjv.clone(), BibleBook::Ps, 3, 1);
        let unmapped = Verse::new(f.kjv.clone(), BibleBook::Gen, 1, 1);
        assert!(f.converter.is_convertible_to(&mapped, &f.syn));
        assert!(!f.converter.is_convertible_to(&unmapped, &f.syn));
        assert!(f.converter.is_convertible_to(&unmapped, &f.kjv));
    }

    #[test]
    fn identity_into_missing_chapter_is_not_strict() {
        let f = fixture();
        let other = Arc::new(
            Versification::from_layout(
                &VersificationLayout::new("Other").with_book(BibleBook::Ps, &[6, 12, 8]),
            )
            .unwrap(),
        );
        let v = Verse::new(f.kjv.clone(), BibleBook::Ps, 4, 1);
        let converted = f.converter.convert_verse(&v, &other);
        assert_eq!(converted, Verse::new(other.clone(), BibleBook::Ps, 4, 1));
        assert!(!f.converter.is_convertible_to(&v, &other));

        let fits = Verse::new(f.kjv, BibleBook::Ps, 3, 1);
        assert!(f.converter.is_convertible_to(&fits, &other));
    }
}
