use axum::{
    Router,
    routing::get,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::docs::api_docs;
use super::handlers::{
    AppState, create_book, delete_book, get_book_by_id, list_books, update_book,
};

/// Creates the API router with all book endpoints
///
/// - GET /books - List books (paginated via `page` / `limit`)
/// - POST /books - Add a book
/// - GET /books/:id - Get a book
/// - PUT /books/:id - Replace a book's fields
/// - DELETE /books/:id - Delete a book
/// - GET /api-docs - OpenAPI document
///
/// CORS is layered on by the caller, since the allowed origin comes from config.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check endpoint
        .route("/health", get(health_check))
        .route("/api-docs", get(api_docs))
        .route("/books", get(list_books).post(create_book))
        .route(
            "/books/:id",
            get(get_book_by_id).put(update_book).delete(delete_book),
        )
        // Add tracing middleware
        .layer(TraceLayer::new_for_http())
        // Add application state
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
