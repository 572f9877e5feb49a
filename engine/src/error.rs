//! Error types for the Bookshelf engine.

use crate::BookId;
use thiserror::Error;

/// All possible errors from the Bookshelf engine.
///
/// The first three are caller mistakes; the last two are internal
/// invariant violations the caller should surface as server faults.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    // Validation errors
    #[error("book name is required")]
    MissingName,

    #[error("readPage must not exceed pageCount")]
    ReadPageExceedsPageCount,

    // Lookup errors
    #[error("book not found: {0}")]
    BookNotFound(BookId),

    // Internal invariant violations
    #[error("generated id already issued: {0}")]
    IdCollision(BookId),

    #[error("book missing right after insert: {0}")]
    InsertVerificationFailed(BookId),
}

impl Error {
    /// True for faults that are the store's own, not the caller's.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            Error::IdCollision(_) | Error::InsertVerificationFailed(_)
        )
    }
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, Error>;
