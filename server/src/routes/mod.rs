//! HTTP route definitions.

mod books;
mod health;

use crate::response::Envelope;
use crate::AppState;
use axum::{http::StatusCode, Json, Router};

/// Create all application routes.
pub fn create_routes() -> Router<AppState> {
    Router::new().merge(health::routes()).merge(books::routes())
}

/// Catch-all handler for unmatched paths.
pub async fn page_not_found() -> (StatusCode, Json<Envelope>) {
    (StatusCode::NOT_FOUND, Json(Envelope::fail("Page not found")))
}
