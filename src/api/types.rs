use serde::{Deserialize, Serialize};

use crate::application::book::{BookPage, PageRequest, parse_int_prefix};
use crate::domain::{Book, BookId};

use super::validation::FieldViolation;

/// 書籍一覧取得のクエリパラメータ
///
/// 数値として解釈できない値は既定値に置き換えるため、文字列のまま受け取る。
/// 同じキーが複数回現れた場合は最初の値を使う。
#[derive(Debug, Default)]
pub struct ListBooksQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl ListBooksQuery {
    /// デコード済みのキー・値の組から組み立てる
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "page" => &mut query.page,
                "limit" => &mut query.limit,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }

    pub fn to_page_request(&self) -> PageRequest {
        PageRequest::from_raw(self.page.as_deref(), self.limit.as_deref())
    }
}

/// 書籍レスポンス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookResponse {
    pub id: u64,
    pub name: String,
    pub author: String,
    pub published_year: i64,
}

impl From<Book> for BookResponse {
    fn from(book: Book) -> Self {
        Self {
            id: book.id.value(),
            name: book.name,
            author: book.author,
            published_year: book.published_year.into(),
        }
    }
}

/// ページング一覧レスポンス（GET /books）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookListResponse {
    pub total_books: usize,
    pub total_pages: u64,
    pub current_page: i64,
    pub books: Vec<BookResponse>,
}

impl From<BookPage> for BookListResponse {
    fn from(page: BookPage) -> Self {
        Self {
            total_books: page.total_books,
            total_pages: page.total_pages,
            current_page: page.current_page,
            books: page.books.into_iter().map(BookResponse::from).collect(),
        }
    }
}

/// 削除完了レスポンス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookDeletedResponse {
    pub message: String,
}

impl Default for BookDeletedResponse {
    fn default() -> Self {
        Self {
            message: "Book deleted successfully".to_string(),
        }
    }
}

/// エラーレスポンス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// 検証エラーレスポンス
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationErrorResponse {
    pub errors: Vec<FieldViolation>,
}

/// パスパラメータのIDを解釈する
///
/// 先頭の整数部分を読み取る。正の整数にならない値はどの書籍にも一致しない。
pub fn parse_book_id(raw: &str) -> Option<BookId> {
    parse_int_prefix(raw)
        .filter(|id| *id > 0)
        .map(|id| BookId::new(id as u64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_book_id() {
        assert_eq!(parse_book_id("7"), Some(BookId::new(7)));
        assert_eq!(parse_book_id("7abc"), Some(BookId::new(7)));
        assert_eq!(parse_book_id("abc"), None);
        assert_eq!(parse_book_id("0"), None);
        assert_eq!(parse_book_id("-1"), None);
    }

    #[test]
    fn test_list_query_uses_first_repeated_value() {
        let pairs = vec![
            ("page".to_string(), "2".to_string()),
            ("page".to_string(), "9".to_string()),
            ("sort".to_string(), "name".to_string()),
            ("limit".to_string(), "3".to_string()),
        ];

        let query = ListBooksQuery::from_pairs(pairs);

        assert_eq!(query.page.as_deref(), Some("2"));
        assert_eq!(query.limit.as_deref(), Some("3"));
        assert_eq!(query.to_page_request(), PageRequest::new(2, 3));
    }

    #[test]
    fn test_list_query_defaults() {
        let query = ListBooksQuery::default();
        assert_eq!(query.to_page_request(), PageRequest::new(1, 5));
    }

    #[test]
    fn test_deleted_response_message() {
        let json = serde_json::to_value(BookDeletedResponse::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "message": "Book deleted successfully" })
        );
    }
}
