//! Property tests for the store's validation and derivation rules.

use bookshelf_engine::{BookDraft, BookStore, Error};
use proptest::prelude::*;

fn arb_draft() -> impl Strategy<Value = BookDraft> {
    (
        "[A-Za-z][A-Za-z ]{0,23}",
        any::<i32>(),
        0u32..5000,
        0u32..5000,
        any::<bool>(),
    )
        .prop_map(|(name, year, page_count, read_page, reading)| BookDraft {
            name: Some(name),
            year: Some(year),
            author: Some("Author".to_string()),
            summary: Some("Summary".to_string()),
            publisher: Some("Publisher".to_string()),
            page_count: Some(page_count),
            read_page: Some(read_page),
            reading: Some(reading),
        })
}

proptest! {
    #[test]
    fn create_outcome_follows_page_counters(draft in arb_draft()) {
        let mut store = BookStore::new();
        let page_count = draft.page_count.unwrap();
        let read_page = draft.read_page.unwrap();

        match store.create(draft) {
            Ok(id) => {
                prop_assert!(read_page <= page_count);
                let book = store.get(&id).unwrap();
                prop_assert_eq!(book.finished, page_count == read_page);
                prop_assert_eq!(book.inserted_at, book.updated_at);
            }
            Err(Error::ReadPageExceedsPageCount) => {
                prop_assert!(read_page > page_count);
                prop_assert!(store.is_empty());
            }
            Err(other) => prop_assert!(false, "unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_name_always_rejected(mut draft in arb_draft()) {
        draft.name = None;
        let mut store = BookStore::new();
        prop_assert_eq!(store.create(draft), Err(Error::MissingName));
    }

    #[test]
    fn ids_are_unique_and_well_formed(drafts in prop::collection::vec(arb_draft(), 1..32)) {
        let mut store = BookStore::new();
        let mut ids = std::collections::HashSet::new();

        for draft in drafts {
            if draft.read_page.unwrap() > draft.page_count.unwrap() {
                continue;
            }
            let id = store.create(draft).unwrap();
            prop_assert_eq!(id.len(), 16);
            prop_assert!(ids.insert(id));
        }
    }
}
