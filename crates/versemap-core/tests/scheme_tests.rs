//! Scheme construction and ordinal arithmetic over generated layouts

use proptest::prelude::*;
use std::sync::Arc;
use versemap_core::{
    BibleBook, SchemeLibrary, Verse, VerseRange, Versification, VersificationLayout,
};

const BOOKS: [BibleBook; 5] = [
    BibleBook::Gen,
    BibleBook::Exod,
    BibleBook::Ps,
    BibleBook::Matt,
    BibleBook::Rev,
];

fn layout() -> impl Strategy<Value = VersificationLayout> {
    let chapters = proptest::collection::vec(1..40u32, 1..6);
    proptest::collection::vec(chapters, BOOKS.len()).prop_map(|books| {
        BOOKS
            .iter()
            .zip(books)
            .fold(VersificationLayout::new("Generated"), |layout, (book, verses)| {
                layout.with_book(*book, &verses)
            })
    })
}

proptest! {
    #[test]
    fn prop_ordinals_follow_reading_order(layout in layout()) {
        let scheme = Arc::new(Versification::from_layout(&layout).unwrap());
        let mut previous: Option<Verse> = None;
        for ordinal in 0..scheme.ordinal_count() {
            let verse = Verse::from_ordinal(scheme.clone(), ordinal).unwrap();
            prop_assert!(verse.is_valid());
            prop_assert_eq!(verse.ordinal(), ordinal);
            if let Some(prev) = &previous {
                prop_assert!(prev < &verse);
            }
            previous = Some(verse);
        }
    }

    #[test]
    fn prop_every_layout_verse_is_addressable(layout in layout()) {
        let scheme = Arc::new(Versification::from_layout(&layout).unwrap());
        for book in &layout.books {
            prop_assert_eq!(scheme.last_chapter(book.book).unwrap() as usize, book.verses.len());
            for (idx, last) in book.verses.iter().enumerate() {
                let chapter = idx as u32 + 1;
                prop_assert_eq!(scheme.last_verse(book.book, chapter).unwrap(), *last);
                let whole = VerseRange::new(
                    Verse::checked(scheme.clone(), book.book, chapter, 1).unwrap(),
                    Verse::checked(scheme.clone(), book.book, chapter, *last).unwrap(),
                )
                .unwrap();
                prop_assert_eq!(whole.cardinality(), *last);
                prop_assert!(Verse::checked(scheme.clone(), book.book, chapter, last + 1).is_err());
            }
        }
    }
}

#[test]
fn library_round_trips_layouts_through_json() {
    let dir = tempfile::tempdir().unwrap();
    let layout = VersificationLayout::new("Disk")
        .with_book(BibleBook::Gen, &[31, 25])
        .with_book(BibleBook::Matt, &[25]);
    std::fs::write(dir.path().join("disk.json"), serde_json::to_string(&layout).unwrap()).unwrap();
    std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

    let library = SchemeLibrary::new();
    assert_eq!(library.load_dir(dir.path()).unwrap(), vec!["Disk".to_string()]);

    let disk = library.get("Disk").unwrap();
    let verse = Verse::parse(&disk, "Matt.1.25").unwrap();
    assert!(verse.is_end_of_chapter());
    assert_eq!(disk.next_book(BibleBook::Gen), Some(BibleBook::IntroNt));
}
