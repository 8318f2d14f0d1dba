use thiserror::Error;

/// 蔵書管理アプリケーション層のエラー
///
/// すべての操作はインメモリで同期的に完了するため、
/// 内部エラーの分類は持たない。検証エラーはAPI層のゲートで弾かれ、
/// ここまで到達しない。
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BookApplicationError {
    /// IDに一致する書籍が存在しない
    #[error("Book not found")]
    BookNotFound,
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, BookApplicationError>;
