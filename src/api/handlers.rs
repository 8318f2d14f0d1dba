use crate::application::book::{
    BookApplicationError, ServiceDependencies, add_book as execute_add_book,
    delete_book as execute_delete_book, get_book as execute_get_book, list_books as execute_list_books,
    update_book as execute_update_book,
};
use crate::domain::{
    BookDetails, BookId,
    commands::{AddBook, UpdateBook},
};
use axum::{
    Json,
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde_json::Value;
use std::sync::Arc;

use super::{
    error::ApiError,
    types::{BookDeletedResponse, BookListResponse, BookResponse, ListBooksQuery, parse_book_id},
    validation::validate_book,
};

// ============================================================================
// State
// ============================================================================

/// ハンドラー間で共有されるアプリケーション状態
#[derive(Clone)]
pub struct AppState {
    pub service_deps: ServiceDependencies,
}

// ============================================================================
// Query handlers (GET)
// ============================================================================

/// GET /books - 書籍一覧をページ単位で取得
///
/// クエリパラメータ:
/// - page: ページ番号（既定値 1）
/// - limit: 1ページあたりの件数（既定値 5）
///
/// 範囲外のページは空の一覧を返す。エラーにはならない。
/// キーの重複（`page=1&page=2`）も拒否せず、最初の値を使う。
pub async fn list_books(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Json<BookListResponse> {
    let query = ListBooksQuery::from_pairs(pairs);
    let page = execute_list_books(&state.service_deps, query.to_page_request()).await;
    Json(BookListResponse::from(page))
}

/// GET /books/:id - 書籍をIDで取得
pub async fn get_book_by_id(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> Result<Json<BookResponse>, ApiError> {
    let book_id = resolve_book_id(&raw_id)?;
    let book = execute_get_book(&state.service_deps, book_id).await?;
    Ok(Json(BookResponse::from(book)))
}

// ============================================================================
// Command handlers (POST / PUT / DELETE)
// ============================================================================

/// POST /books - 新しい書籍を登録
///
/// ボディは検証ゲートを通過した後にのみサービスへ渡される。
pub async fn create_book(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<(StatusCode, Json<BookResponse>), ApiError> {
    let details = validated_details(&body)?;

    let book = execute_add_book(&state.service_deps, AddBook { details }).await;

    Ok((StatusCode::CREATED, Json(BookResponse::from(book))))
}

/// PUT /books/:id - 書籍を更新（全フィールド置換）
///
/// 検証はID検索より先に行うため、不正なボディは存在しないIDでも400になる。
pub async fn update_book(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
    body: Bytes,
) -> Result<Json<BookResponse>, ApiError> {
    let details = validated_details(&body)?;
    let book_id = resolve_book_id(&raw_id)?;

    let book = execute_update_book(&state.service_deps, UpdateBook { book_id, details }).await?;

    Ok(Json(BookResponse::from(book)))
}

/// DELETE /books/:id - 書籍を削除
pub async fn delete_book(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> Result<Json<BookDeletedResponse>, ApiError> {
    let book_id = resolve_book_id(&raw_id)?;
    execute_delete_book(&state.service_deps, book_id).await?;
    Ok(Json(BookDeletedResponse::default()))
}

// ============================================================================
// Helpers
// ============================================================================

/// 整数として解釈できないIDは存在しない書籍として扱う
fn resolve_book_id(raw_id: &str) -> Result<BookId, ApiError> {
    parse_book_id(raw_id).ok_or(ApiError::from(BookApplicationError::BookNotFound))
}

/// JSONとして読めないボディは空として検証する
fn validated_details(body: &[u8]) -> Result<BookDetails, ApiError> {
    let value = serde_json::from_slice::<Value>(body).unwrap_or(Value::Null);
    validate_book(&value).map_err(ApiError::from)
}
