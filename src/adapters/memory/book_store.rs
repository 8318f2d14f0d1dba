use crate::domain::{Book, BookDetails, BookId};
use crate::ports::book_store::{BookStore as BookStoreTrait, SharedBookStore};
use std::sync::Arc;
use tokio::sync::RwLock;

/// BookStoreのインメモリ実装
///
/// プロセス起動時に空で作成され、プロセス終了まで生存する（永続化なし）。
/// IDは件数ではなく単調増加カウンタから採番するため、
/// 削除後に登録しても既存の書籍とIDが衝突しない。
#[derive(Debug)]
pub struct BookStore {
    books: Vec<Book>,
    next_id: BookId,
}

impl BookStore {
    pub fn new() -> Self {
        Self {
            books: Vec::new(),
            next_id: BookId::new(1),
        }
    }

    /// 共有ハンドルとしてラップする
    pub fn shared() -> SharedBookStore {
        Arc::new(RwLock::new(Self::new()))
    }
}

impl Default for BookStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BookStoreTrait for BookStore {
    fn list(&self) -> &[Book] {
        &self.books
    }

    fn append(&mut self, details: BookDetails) -> Book {
        let id = self.next_id;
        self.next_id = id.next();

        let book = Book::new(id, details);
        self.books.push(book.clone());
        book
    }

    fn replace(&mut self, id: BookId, details: BookDetails) -> Option<Book> {
        let book = self.books.iter_mut().find(|book| book.id == id)?;
        book.replace_details(details);
        Some(book.clone())
    }

    fn remove_at(&mut self, index: usize) -> Option<Book> {
        if index >= self.books.len() {
            return None;
        }
        Some(self.books.remove(index))
    }
}
