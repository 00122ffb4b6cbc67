mod catalog_service;
mod errors;
mod recommendation_service;

pub use catalog_service::{
    Checkout, MIN_VALID_BOOK_ID, ServiceDependencies, add_copy, checkout_book, delete_copy,
    get_book, list_available_books, list_books, replace_book, return_book, validate_book_id,
};
pub use errors::{CatalogApplicationError, Result};
pub use recommendation_service::{recommend_books, recommend_books_with};
