//! Presentation gateway: the HTML surface and the JSON proxy surface.
//!
//! The gateway keeps no state of its own; every request turns into at most
//! one catalog service call whose outcome is rendered or relayed.

pub mod client;
pub mod html;
pub mod proxy;

use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::trace::TraceLayer;

use client::CatalogApi;

/// Gateway state shared across all handlers
#[derive(Clone)]
pub struct GatewayState {
    pub catalog: Arc<dyn CatalogApi>,
}

/// Create the gateway router with both surfaces
pub fn create_router(state: GatewayState) -> Router {
    Router::new()
        // HTML surface
        .route("/", get(html::show_books))
        .route("/", post(html::submit_book))
        // JSON proxy surface
        .route("/api/books", get(proxy::list_books))
        .route("/api/books", post(proxy::create_book))
        .route("/api/books/:id", get(proxy::get_book))
        .route("/api/books/:id", put(proxy::update_book))
        .route("/api/books/:id", delete(proxy::delete_book))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
