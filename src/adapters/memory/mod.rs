pub mod book_store;

#[allow(unused_imports)]
pub use book_store::BookStore;
