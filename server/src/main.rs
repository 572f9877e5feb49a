//! Bookshelf Server - HTTP API for the book catalog.
//!
//! The server is a thin adapter over the bookshelf-engine store: it
//! parses wire requests, runs one store operation per request, and maps
//! the outcome to a status code and response envelope.

mod config;
mod error;
mod response;
mod routes;

use crate::config::Config;
use axum::Router;
use bookshelf_engine::BookStore;
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// One lock around the store keeps each read-modify-write atomic.
    pub store: Arc<Mutex<BookStore>>,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bookshelf_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    tracing::info!(
        "Starting Bookshelf Server on {}:{}",
        config.host,
        config.port
    );

    // Build application state; the catalog starts empty and lives only
    // for the lifetime of the process.
    let state = AppState {
        store: Arc::new(Mutex::new(BookStore::new())),
        config: Arc::new(config),
    };

    // Build router
    let app = Router::new()
        .merge(routes::create_routes())
        .fallback(routes::page_not_found)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state.clone());

    // Start server
    let addr = format!("{}:{}", state.config.host, state.config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
