//! Store - the in-memory book collection.
//!
//! The store is the sole owner of all records: every read and write goes
//! through it, and it enforces the catalog invariants (unique immutable
//! ids, readPage <= pageCount, derived finished flag, non-empty names).

use crate::error::Result;
use crate::{token, Book, BookDraft, BookFilter, BookId, BookSummary, Error};
use chrono::Utc;
use std::collections::HashSet;

/// The in-memory book collection.
///
/// Records are kept in insertion order; listings preserve it. Lookups and
/// filters are linear scans, which is fine at catalog scale.
#[derive(Debug, Clone, Default)]
pub struct BookStore {
    books: Vec<Book>,
    /// Every id ever issued, including deleted ones. Ids are never reused.
    issued_ids: HashSet<BookId>,
}

impl BookStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a draft and append a new record.
    ///
    /// Returns the freshly assigned id. Validation failures leave the
    /// collection untouched. An id collision or a record that cannot be
    /// found right after insertion is an internal fault, reported
    /// distinctly from validation errors.
    pub fn create(&mut self, draft: BookDraft) -> Result<BookId> {
        draft.validate()?;

        let id = token::generate(token::ID_LENGTH);
        if !self.issued_ids.insert(id.clone()) {
            return Err(Error::IdCollision(id));
        }

        let now = Utc::now();
        self.books.push(Book::new(id.clone(), draft, now));

        // Post-insert assertion: the record must be findable immediately.
        if self.get(&id).is_none() {
            return Err(Error::InsertVerificationFailed(id));
        }

        Ok(id)
    }

    /// List the {id, name, publisher} projection of matching records.
    ///
    /// An empty filter returns every record. Never fails; an empty
    /// result is a valid outcome.
    pub fn list(&self, filter: &BookFilter) -> Vec<BookSummary> {
        self.books
            .iter()
            .filter(|book| filter.matches(book))
            .map(Book::summary)
            .collect()
    }

    /// Get the full record for an exact id match.
    pub fn get(&self, id: &str) -> Option<&Book> {
        self.books.iter().find(|book| book.id == id)
    }

    /// Validate a draft and replace every mutable field of the record.
    ///
    /// Field validation runs before the id lookup, so a bad payload on an
    /// unknown id reports the payload error. On success `finished` is
    /// recomputed and `updated_at` refreshed; `id` and `inserted_at`
    /// stay as they were.
    pub fn update(&mut self, id: &str, draft: BookDraft) -> Result<()> {
        draft.validate()?;

        let now = Utc::now();
        let book = self
            .books
            .iter_mut()
            .find(|book| book.id == id)
            .ok_or_else(|| Error::BookNotFound(id.to_string()))?;

        book.apply(draft, now);
        Ok(())
    }

    /// Remove the record with the given id.
    ///
    /// The id stays in the issued set and is never handed out again.
    pub fn delete(&mut self, id: &str) -> Result<()> {
        let index = self
            .books
            .iter()
            .position(|book| book.id == id)
            .ok_or_else(|| Error::BookNotFound(id.to_string()))?;

        self.books.remove(index);
        Ok(())
    }

    /// Number of live records.
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// True when the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
