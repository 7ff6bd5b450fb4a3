//! Testing utilities for versemap workspace
//!
//! Shared fixtures: compact KJV, Synodal and German schemes with real book
//! orders and a handful of known numbering differences, sample mapping
//! tables, and a load-counting mapping source.

#![allow(missing_docs)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Once};
use versemap_core::{BibleBook, SchemeLibrary, Testament, Verse, Versification, VersificationLayout};
use versemap_mapping::{
    MappingConfig, MappingRegistry, MappingResult, MappingSource, RangeConverter, StaticSource,
};

pub const KJV: &str = "KJV";
pub const SYNODAL: &str = "Synodal";
pub const GERMAN: &str = "German";

/// Deuterocanonical books carried by the Synodal fixture, in order
pub const SYNODAL_DEUTEROCANON: &[BibleBook] = &[
    BibleBook::Tob,
    BibleBook::Jdt,
    BibleBook::Wis,
    BibleBook::Sir,
    BibleBook::Bar,
    BibleBook::EpJer,
    BibleBook::Macc1,
    BibleBook::Macc2,
    BibleBook::Macc3,
    BibleBook::Esd1,
    BibleBook::Esd2,
    BibleBook::PrMan,
];

pub const KJV_TO_SYNODAL: &str = "\
# KJV -> Synodal sample
Ps.3.1=Ps.3.2
Ps.3.2=Ps.3.3
Ps.10.1=Ps.9.22
Ps.10.2=Ps.9.23
Ps.119.1=Ps.118.1
Ps.119.176=Ps.118.176
Mal.4.1=Mal.3.19
Mal.4.2=Mal.3.20
Mal.4.6=Mal.3.24
Rev.1.1a=Rev.1.2
Rev.1.1b=Rev.1.1
Ps.151.1=Ps.151.1
not a mapping line
";

pub const GERMAN_TO_KJV: &str = "\
# German -> KJV sample
Mal.3.19=Mal.4.1
Mal.3.20=Mal.4.2
Mal.3.24=Mal.4.6
";

/// Install a test subscriber once; honours `RUST_LOG`, defaults to `warn`
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

fn psalms(chapters: u32, overrides: &[(u32, u32)]) -> Vec<u32> {
    (1..=chapters)
        .map(|c| {
            overrides
                .iter()
                .find(|(ch, _)| *ch == c)
                .map_or(10, |(_, v)| *v)
        })
        .collect()
}

fn protestant_chapters(book: BibleBook) -> Vec<u32> {
    match book {
        BibleBook::Gen => vec![31, 25, 24],
        BibleBook::Ps => psalms(150, &[(3, 8), (9, 20), (10, 18), (119, 176)]),
        BibleBook::Mal => vec![14, 17, 18, 6],
        BibleBook::Obad => vec![21],
        BibleBook::Phlm | BibleBook::Jude | BibleBook::John2 | BibleBook::John3 => vec![25],
        BibleBook::Rev => vec![20, 29, 22],
        _ => vec![12, 12, 12],
    }
}

fn canon() -> impl Iterator<Item = BibleBook> {
    BibleBook::ALL
        .iter()
        .copied()
        .filter(|b| matches!(b.testament(), Testament::Old | Testament::New))
}

pub fn kjv_layout() -> VersificationLayout {
    canon().fold(VersificationLayout::new(KJV), |layout, book| {
        layout.with_book(book, &protestant_chapters(book))
    })
}

pub fn german_layout() -> VersificationLayout {
    canon().fold(VersificationLayout::new(GERMAN), |layout, book| {
        let chapters = match book {
            BibleBook::Mal => vec![14, 17, 24],
            other => protestant_chapters(other),
        };
        layout.with_book(book, &chapters)
    })
}

/// Synodal: OT, then deuterocanon, then NT
pub fn synodal_layout() -> VersificationLayout {
    let chapters = |book: BibleBook| match book {
        BibleBook::Ps => psalms(151, &[(3, 9), (9, 39), (118, 176)]),
        BibleBook::Mal => vec![14, 17, 24],
        other => protestant_chapters(other),
    };
    let old = canon().filter(|b| b.testament() == Testament::Old);
    let new = canon().filter(|b| b.testament() == Testament::New);
    old.chain(SYNODAL_DEUTEROCANON.iter().copied())
        .chain(new)
        .fold(VersificationLayout::new(SYNODAL), |layout, book| {
            layout.with_book(book, &chapters(book))
        })
}

/// Library holding the three fixture schemes
pub fn library() -> SchemeLibrary {
    SchemeLibrary::new()
        .with_layout(kjv_layout())
        .with_layout(synodal_layout())
        .with_layout(german_layout())
}

pub fn scheme(library: &SchemeLibrary, name: &str) -> Arc<Versification> {
    library.get(name).unwrap()
}

pub fn verse(scheme: &Arc<Versification>, reference: &str) -> Verse {
    Verse::parse(scheme, reference).unwrap()
}

/// Sample KJVToSynodal and GermanToKJV tables
pub fn mapping_source() -> StaticSource {
    StaticSource::new()
        .with("KJVToSynodal", KJV_TO_SYNODAL)
        .with("GermanToKJV", GERMAN_TO_KJV)
}

/// Converter over the default configuration and the sample tables
pub fn converter(library: &SchemeLibrary) -> RangeConverter {
    converter_with_source(library, Arc::new(mapping_source()))
}

pub fn converter_with_source(
    library: &SchemeLibrary,
    source: Arc<dyn MappingSource>,
) -> RangeConverter {
    let config = MappingConfig::default();
    let registry = MappingRegistry::from_config(&config, library, source).unwrap();
    RangeConverter::new(Arc::new(registry))
}

/// Mapping source that counts loads
#[derive(Debug, Default)]
pub struct CountingSource {
    inner: StaticSource,
    loads: AtomicUsize,
}

impl CountingSource {
    pub fn new(inner: StaticSource) -> Self {
        Self {
            inner,
            loads: AtomicUsize::new(0),
        }
    }

    pub fn loads(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

impl MappingSource for CountingSource {
    fn load(&self, resource: &str) -> MappingResult<String> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        // Widen the race window for concurrent first use
        std::thread::sleep(std::time::Duration::from_millis(5));
        self.inner.load(resource)
    }
}
