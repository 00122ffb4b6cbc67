use axum::{
    Router,
    routing::{get, patch, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::handlers::{
    AppState, add_copy, checkout_book, delete_copy, get_book, index, list_available_books,
    list_books, recommend_books, replace_book, return_book,
};

/// Creates the API router with all catalog endpoints
///
/// Query endpoints:
/// - GET /books, GET /book/:id
/// - GET|PUT /books/available
/// - GET /books/recommendation
///
/// Command endpoints:
/// - PATCH /book/:id/add, PATCH /book/:id/delete
/// - POST /checkout?bookId=N
/// - POST /book/:id/return
/// - PUT /book/:id
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/index", get(index))
        // Health check endpoint
        .route("/health", get(health_check))
        // Query endpoints
        .route("/books", get(list_books))
        .route("/books/available", get(list_available_books).put(list_available_books))
        .route("/books/recommendation", get(recommend_books))
        .route("/book/:id", get(get_book).put(replace_book))
        // Command endpoints
        .route("/book/:id/add", patch(add_copy))
        .route("/book/:id/delete", patch(delete_copy))
        .route("/book/:id/return", post(return_book))
        .route("/checkout", post(checkout_book))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
