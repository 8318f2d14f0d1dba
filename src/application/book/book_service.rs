use crate::domain::{Book, BookId, commands::*};
use crate::ports::SharedBookStore;

use super::errors::{BookApplicationError, Result};
use super::pagination::{BookPage, PageRequest};

/// サービスの依存関係
///
/// 依存はデータ構造として保持し、振る舞いは純粋な関数に渡す。
/// Book Storeはグローバル状態ではなく、このハンドル経由でのみ参照される。
#[derive(Clone)]
pub struct ServiceDependencies {
    pub book_store: SharedBookStore,
}

/// 書籍一覧をページ単位で取得する
///
/// 失敗しない。範囲外のページは空の`books`を返す。
pub async fn list_books(deps: &ServiceDependencies, request: PageRequest) -> BookPage {
    let store = deps.book_store.read().await;
    BookPage::slice(store.list(), request)
}

/// IDで書籍を取得する
///
/// # エラー
/// - BookNotFound: IDに一致する書籍がない
pub async fn get_book(deps: &ServiceDependencies, book_id: BookId) -> Result<Book> {
    let store = deps.book_store.read().await;
    store
        .find_by_id(book_id)
        .cloned()
        .ok_or(BookApplicationError::BookNotFound)
}

/// 書籍を登録する
///
/// 入力は検証ゲートを通過済みであること。
/// IDはBook Storeが単調増加カウンタで採番する。
pub async fn add_book(deps: &ServiceDependencies, cmd: AddBook) -> Book {
    let mut store = deps.book_store.write().await;
    let book = store.append(cmd.details);

    tracing::info!(book_id = %book.id, "Book added");
    book
}

/// 書籍を更新する（name / author / publishedYear を全置換）
///
/// IDは変更されない。
///
/// # エラー
/// - BookNotFound: IDに一致する書籍がない
pub async fn update_book(deps: &ServiceDependencies, cmd: UpdateBook) -> Result<Book> {
    let mut store = deps.book_store.write().await;
    let book = store
        .replace(cmd.book_id, cmd.details)
        .ok_or(BookApplicationError::BookNotFound)?;

    tracing::info!(book_id = %book.id, "Book updated");
    Ok(book)
}

/// 書籍を削除する
///
/// 位置の検索と削除を同じ書き込みロック内で行う。
///
/// # エラー
/// - BookNotFound: IDに一致する書籍がない
pub async fn delete_book(deps: &ServiceDependencies, book_id: BookId) -> Result<Book> {
    let mut store = deps.book_store.write().await;
    let index = store
        .find_index_by_id(book_id)
        .ok_or(BookApplicationError::BookNotFound)?;
    // indexは同じ書き込みロック内で得たものなので常に範囲内
    let removed = store
        .remove_at(index)
        .ok_or(BookApplicationError::BookNotFound)?;

    tracing::info!(book_id = %removed.id, "Book deleted");
    Ok(removed)
}
