//! # Bookshelf Engine
//!
//! The in-memory catalog core for the Bookshelf service.
//!
//! This crate owns the book collection and all of its contracts: id
//! assignment, validation, derived-field computation, and the listing
//! filters. It knows nothing about HTTP; the server crate translates
//! wire requests into the five store operations and maps their outcomes
//! back to responses.
//!
//! ## Design Principles
//!
//! - **No IO**: the engine has no knowledge of network or transport
//! - **Single owner**: every read and write goes through [`BookStore`]
//! - **Testable**: plain synchronous logic, no mocks needed
//!
//! ## Core Concepts
//!
//! ### Records
//!
//! A [`Book`] carries the caller-supplied fields plus three the store
//! controls: a unique 16-character id, a derived `finished` flag
//! (`page_count == read_page`), and creation/update timestamps.
//!
//! ### Drafts
//!
//! Writes are expressed as a [`BookDraft`], validated before any
//! mutation: the name must be present and non-empty, and `read_page`
//! must not exceed `page_count`.
//!
//! ### Filters
//!
//! Listings take a [`BookFilter`]. Only the highest-priority provided
//! criterion applies (name, then reading, then finished); the boolean
//! filters use numeric coercion, see [`query`].
//!
//! ## Quick Start
//!
//! ```rust
//! use bookshelf_engine::{BookDraft, BookFilter, BookStore};
//!
//! let mut store = BookStore::new();
//!
//! let id = store
//!     .create(BookDraft {
//!         name: Some("Dune".to_string()),
//!         publisher: Some("Chilton".to_string()),
//!         page_count: Some(500),
//!         read_page: Some(500),
//!         ..BookDraft::default()
//!     })
//!     .unwrap();
//!
//! let book = store.get(&id).unwrap();
//! assert!(book.finished);
//!
//! let listing = store.list(&BookFilter {
//!     name: Some("dun".to_string()),
//!     ..BookFilter::default()
//! });
//! assert_eq!(listing.len(), 1);
//! ```

pub mod book;
pub mod error;
pub mod query;
pub mod store;
pub mod token;

// Re-export main types at crate root
pub use book::{Book, BookDraft, BookSummary};
pub use error::Error;
pub use query::BookFilter;
pub use store::BookStore;

/// Type alias for clarity
pub type BookId = String;
