//! End-to-end conversion over the fixture schemes and tables

use pretty_assertions::assert_eq;
use std::sync::Arc;
use versemap_core::{
    BibleBook, Passage, Reference, SchemeLibrary, Verse, VerseRange, VersificationLayout,
};
use versemap_mapping::{MappingConfig, MappingRegistry, RangeConverter, StaticSource};
use versemap_test_utils::{self as fixtures, CountingSource, GERMAN, KJV, SYNODAL};

struct Setup {
    library: SchemeLibrary,
    converter: RangeConverter,
}

fn setup() -> Setup {
    fixtures::init_tracing();
    let library = fixtures::library();
    let converter = fixtures::converter(&library);
    Setup { library, converter }
}

impl Setup {
    fn convert(&self, from: &str, reference: &str, to: &str) -> Verse {
        let verse = fixtures::verse(&fixtures::scheme(&self.library, from), reference);
        self.converter
            .convert_verse(&verse, &fixtures::scheme(&self.library, to))
    }

    fn strict(&self, from: &str, reference: &str, to: &str) -> bool {
        let verse = fixtures::verse(&fixtures::scheme(&self.library, from), reference);
        self.converter
            .is_convertible_to(&verse, &fixtures::scheme(&self.library, to))
    }
}

#[test]
fn psalm_119_maps_to_synodal_118() {
    let s = setup();
    let converted = s.convert(KJV, "Ps.119.1", SYNODAL);
    let synodal = fixtures::scheme(&s.library, SYNODAL);
    assert_eq!(converted, Verse::new(synodal, BibleBook::Ps, 118, 1));
    assert!(s.strict(KJV, "Ps.119.1", SYNODAL));
}

#[test]
fn unmapped_genesis_falls_back_to_identity() {
    let s = setup();
    let converted = s.convert(KJV, "Gen.1.1", SYNODAL);
    assert_eq!(converted.to_string(), "Gen.1.1");
    assert_eq!(converted.scheme().name(), SYNODAL);
    assert!(!s.strict(KJV, "Gen.1.1", SYNODAL));
}

#[test]
fn table_is_read_in_both_directions() {
    let s = setup();
    assert_eq!(s.convert(SYNODAL, "Ps.118.1", KJV).to_string(), "Ps.119.1");
    assert_eq!(s.convert(SYNODAL, "Mal.3.24", KJV).to_string(), "Mal.4.6");
    assert_eq!(s.convert(KJV, "Mal.4.1", SYNODAL).to_string(), "Mal.3.19");
}

#[test]
fn fallback_into_missing_chapter_is_flagged() {
    let s = setup();
    // Synodal Malachi has three chapters
    let converted = s.convert(KJV, "Mal.4.3", SYNODAL);
    assert_eq!(converted.to_string(), "Mal.4.3");
    assert_eq!(converted.ordinal(), 0);
    assert!(!s.strict(KJV, "Mal.4.3", SYNODAL));
}

#[test]
fn part_suffixes_collapse_to_lowest_ordinal() {
    let s = setup();
    // Rev.1.1a and Rev.1.1b both load as Rev.1.1
    assert_eq!(s.convert(KJV, "Rev.1.1", SYNODAL).to_string(), "Rev.1.1");
    assert_eq!(s.convert(SYNODAL, "Rev.1.2", KJV).to_string(), "Rev.1.1");
}

#[test]
fn pivot_chains_through_kjv() {
    let s = setup();
    assert_eq!(s.convert(GERMAN, "Mal.3.19", SYNODAL).to_string(), "Mal.3.19");
    assert_eq!(s.convert(SYNODAL, "Mal.3.24", GERMAN).to_string(), "Mal.3.24");
    assert!(s.strict(GERMAN, "Mal.3.20", SYNODAL));
}

#[test]
fn pivot_hop_without_entry_uses_pivot_coordinate() {
    let s = setup();
    // German and KJV agree on Psalm 10; KJV to Synodal does not
    assert_eq!(s.convert(GERMAN, "Ps.10.1", SYNODAL).to_string(), "Ps.9.22");
    assert_eq!(s.convert(SYNODAL, "Ps.9.22", GERMAN).to_string(), "Ps.10.1");
    assert!(!s.strict(GERMAN, "Ps.10.1", SYNODAL));
}

#[test]
fn range_and_passage_conversion() {
    let s = setup();
    let kjv = fixtures::scheme(&s.library, KJV);
    let synodal = fixtures::scheme(&s.library, SYNODAL);

    let range = VerseRange::parse(&kjv, "Ps.119.1-176").unwrap();
    assert_eq!(
        s.converter.convert_range(&range, &synodal).to_string(),
        "Ps.118.1-Ps.118.176"
    );

    let passage = Passage::parse(&kjv, "Gen.1.1; Ps.119.1").unwrap();
    let converted = s.converter.convert_passage(&passage, &synodal);
    assert_eq!(converted.to_string(), "Gen.1.1, Ps.118.1");
    assert_eq!(converted.scheme().name(), SYNODAL);

    let reference = Reference::from(range);
    let Reference::Range(converted) = s.converter.convert_reference(&reference, &synodal) else {
        panic!("reference kind changed");
    };
    assert_eq!(converted.start().to_string(), "Ps.118.1");
}

#[test]
fn unregistered_scheme_uses_identity() {
    let s = setup();
    s.library.register_layout(VersificationLayout::new("Vulg").with_book(BibleBook::Ps, &[6]));
    let vulg = fixtures::scheme(&s.library, "Vulg");
    let verse = fixtures::verse(&fixtures::scheme(&s.library, KJV), "Ps.119.1");

    assert_eq!(s.converter.registry().resolve_name(verse.scheme(), &vulg), "identity");
    let converted = s.converter.convert_verse(&verse, &vulg);
    assert_eq!(converted, Verse::new(vulg.clone(), BibleBook::Ps, 119, 1));
    assert!(!s.converter.is_convertible_to(&verse, &vulg));
}

#[test]
fn missing_resource_behaves_as_empty_table() {
    fixtures::init_tracing();
    let library = fixtures::library();
    let converter = fixtures::converter_with_source(&library, Arc::new(StaticSource::new()));
    let kjv = fixtures::scheme(&library, KJV);
    let synodal = fixtures::scheme(&library, SYNODAL);

    let verse = fixtures::verse(&kjv, "Ps.119.1");
    assert_eq!(converter.convert_verse(&verse, &synodal).to_string(), "Ps.119.1");
    assert!(!converter.is_convertible_to(&verse, &synodal));
}

#[test]
fn tables_from_asset_directory() {
    fixtures::init_tracing();
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("KJVToSynodal.properties"), fixtures::KJV_TO_SYNODAL).unwrap();

    let config = MappingConfig::default().with_asset_dir(dir.path());
    let source = config.directory_source().unwrap();
    let library = fixtures::library();
    let registry = MappingRegistry::from_config(&config, &library, source).unwrap();
    let converter = RangeConverter::new(Arc::new(registry));

    let kjv = fixtures::scheme(&library, KJV);
    let synodal = fixtures::scheme(&library, SYNODAL);
    let verse = fixtures::verse(&kjv, "Ps.10.2");
    assert_eq!(converter.convert_verse(&verse, &synodal).to_string(), "Ps.9.23");

    // GermanToKJV.properties is absent: the pivot degrades hop by hop
    let german = fixtures::scheme(&library, GERMAN);
    let verse = fixtures::verse(&german, "Ps.10.2");
    assert_eq!(converter.convert_verse(&verse, &synodal).to_string(), "Ps.9.23");
}

#[test]
fn concurrent_first_use_loads_once() {
    fixtures::init_tracing();
    let library = fixtures::library();
    let source = Arc::new(CountingSource::new(fixtures::mapping_source()));
    let converter = fixtures::converter_with_source(&library, source.clone());
    let kjv = fixtures::scheme(&library, KJV);
    let synodal = fixtures::scheme(&library, SYNODAL);

    std::thread::scope(|scope| {
        for _ in 0..8 {
            scope.spawn(|| {
                let verse = fixtures::verse(&kjv, "Ps.119.1");
                let converted = converter.convert_verse(&verse, &synodal);
                assert_eq!(converted.to_string(), "Ps.118.1");
            });
        }
    });

    assert_eq!(source.loads(), 1);
}
