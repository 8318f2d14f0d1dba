use crate::domain::{Book, BookDetails, BookId};
use std::sync::Arc;
use tokio::sync::RwLock;

/// 共有されるBook Storeハンドル
///
/// 読み取りは共有ロック、登録・更新・削除は排他ロックで行う。
/// 書き込み操作全体を1つのロック区間で実行することで、
/// 「一度に書き込むのは1つだけ」という不変条件を保つ。
pub type SharedBookStore = Arc<RwLock<dyn BookStore>>;

/// Book Storeポート
///
/// 書籍コレクションを保持し、IDの採番を行う。
/// 検証やエラー処理は行わず、存在しないことを`None`で報告するだけ。
/// 挿入順は常に保持される。
pub trait BookStore: Send + Sync {
    /// 挿入順のコレクション全体
    fn list(&self) -> &[Book];

    /// コレクションの件数
    fn len(&self) -> usize {
        self.list().len()
    }

    /// コレクションが空か
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// IDで書籍を検索する
    fn find_by_id(&self, id: BookId) -> Option<&Book> {
        self.list().iter().find(|book| book.id == id)
    }

    /// IDで書籍の位置を検索する（削除で使用）
    fn find_index_by_id(&self, id: BookId) -> Option<usize> {
        self.list().iter().position(|book| book.id == id)
    }

    /// 次のIDを採番して末尾に追加し、保存された書籍を返す
    fn append(&mut self, details: BookDetails) -> Book;

    /// 該当書籍の可変フィールドをその場で置き換える
    fn replace(&mut self, id: BookId, details: BookDetails) -> Option<Book>;

    /// 指定位置の書籍を1件だけ取り除く
    ///
    /// 残りの要素の相対順序は保持される。範囲外なら`None`。
    fn remove_at(&mut self, index: usize) -> Option<Book>;
}
