mod book_service;
mod errors;
mod pagination;

pub use book_service::{
    ServiceDependencies, add_book, delete_book, get_book, list_books, update_book,
};
pub use errors::{BookApplicationError, Result};
pub use pagination::{BookPage, DEFAULT_LIMIT, DEFAULT_PAGE, PageRequest, parse_int_prefix};
