//! Response envelope for the Bookshelf API.
//!
//! Every response carries a `status` of "success" or "fail", an optional
//! human-readable `message`, and an optional `data` object with the
//! operation's return value.

use bookshelf_engine::{Book, BookId, BookSummary};
use serde::Serialize;

/// The wire envelope wrapping every response body.
#[derive(Debug, Serialize)]
pub struct Envelope<T = ()> {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> Envelope<T> {
    /// Success with a data payload only.
    pub fn data(data: T) -> Self {
        Self {
            status: "success",
            message: None,
            data: Some(data),
        }
    }

    /// Success with both a message and a data payload.
    pub fn with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            status: "success",
            message: Some(message.into()),
            data: Some(data),
        }
    }
}

impl Envelope {
    /// Success with a message only.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            status: "success",
            message: Some(message.into()),
            data: None,
        }
    }

    /// Failure with a message.
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            status: "fail",
            message: Some(message.into()),
            data: None,
        }
    }
}

/// Data payload for a successful creation.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedBook {
    pub book_id: BookId,
}

/// Data payload for listings.
#[derive(Debug, Serialize)]
pub struct BookListing {
    pub books: Vec<BookSummary>,
}

/// Data payload for a single-record fetch.
#[derive(Debug, Serialize)]
pub struct BookDetail {
    pub book: Book,
}
