use serde::{Deserialize, Serialize};

use super::{BookDetails, BookId};

/// コマンド：書籍を登録する
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddBook {
    pub details: BookDetails,
}

/// コマンド：書籍を更新する（全フィールド置換）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateBook {
    pub book_id: BookId,
    pub details: BookDetails,
}
