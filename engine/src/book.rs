//! Book record types.

use crate::BookId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A book record in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Unique identifier, assigned by the store at creation
    pub id: BookId,
    /// Book title, never empty on a stored record
    pub name: String,
    /// Publication year
    pub year: i32,
    pub author: String,
    pub summary: String,
    pub publisher: String,
    /// Total number of pages
    pub page_count: u32,
    /// Pages read so far, never exceeds `page_count`
    pub read_page: u32,
    /// Caller-supplied reading-in-progress flag
    pub reading: bool,
    /// Derived: `page_count == read_page`, recomputed on every write
    pub finished: bool,
    /// Set once at creation, immutable afterwards
    pub inserted_at: DateTime<Utc>,
    /// Refreshed on every successful update
    pub updated_at: DateTime<Utc>,
}

/// Caller-supplied fields for creating or updating a book.
///
/// Every field is optional at the parsing level; [`BookDraft::validate`]
/// enforces the required ones. Absent strings default to empty, absent
/// counters to zero, an absent `reading` flag to `false`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookDraft {
    pub name: Option<String>,
    pub year: Option<i32>,
    pub author: Option<String>,
    pub summary: Option<String>,
    pub publisher: Option<String>,
    pub page_count: Option<u32>,
    pub read_page: Option<u32>,
    pub reading: Option<bool>,
}

impl BookDraft {
    /// Check the draft against the write rules.
    ///
    /// Order is observable: the name check runs before the page check.
    pub fn validate(&self) -> crate::error::Result<()> {
        match &self.name {
            None => return Err(crate::Error::MissingName),
            Some(name) if name.trim().is_empty() => return Err(crate::Error::MissingName),
            Some(_) => {}
        }

        if self.read_page.unwrap_or(0) > self.page_count.unwrap_or(0) {
            return Err(crate::Error::ReadPageExceedsPageCount);
        }

        Ok(())
    }

    /// Derived completion flag for this draft's page counters.
    pub fn finished(&self) -> bool {
        self.page_count.unwrap_or(0) == self.read_page.unwrap_or(0)
    }
}

impl Book {
    /// Build a record from a validated draft.
    ///
    /// Both timestamps are set to `now`; `finished` is computed from the
    /// page counters.
    pub fn new(id: impl Into<BookId>, draft: BookDraft, now: DateTime<Utc>) -> Self {
        let finished = draft.finished();
        Self {
            id: id.into(),
            name: draft.name.unwrap_or_default(),
            year: draft.year.unwrap_or_default(),
            author: draft.author.unwrap_or_default(),
            summary: draft.summary.unwrap_or_default(),
            publisher: draft.publisher.unwrap_or_default(),
            page_count: draft.page_count.unwrap_or(0),
            read_page: draft.read_page.unwrap_or(0),
            reading: draft.reading.unwrap_or(false),
            finished,
            inserted_at: now,
            updated_at: now,
        }
    }

    /// Replace every caller-supplied field from a validated draft.
    ///
    /// `id` and `inserted_at` are untouched; `finished` is recomputed and
    /// `updated_at` refreshed to `now`.
    pub fn apply(&mut self, draft: BookDraft, now: DateTime<Utc>) {
        let finished = draft.finished();
        self.name = draft.name.unwrap_or_default();
        self.year = draft.year.unwrap_or_default();
        self.author = draft.author.unwrap_or_default();
        self.summary = draft.summary.unwrap_or_default();
        self.publisher = draft.publisher.unwrap_or_default();
        self.page_count = draft.page_count.unwrap_or(0);
        self.read_page = draft.read_page.unwrap_or(0);
        self.reading = draft.reading.unwrap_or(false);
        self.finished = finished;
        self.updated_at = now;
    }

    /// Projection returned by listings.
    pub fn summary(&self) -> BookSummary {
        BookSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            publisher: self.publisher.clone(),
        }
    }
}

/// The listing projection: everything else is withheld.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookSummary {
    pub id: BookId,
    pub name: String,
    pub publisher: String,
}
