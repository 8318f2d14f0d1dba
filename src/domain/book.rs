use serde::{Deserialize, Serialize};

use super::{BookId, PublishedYear};

/// 書籍の可変フィールド
///
/// 検証ゲートを通過した値のみを保持する。
/// name / author はトリム・HTMLエスケープ済みで空でないこと。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookDetails {
    pub name: String,
    pub author: String,
    pub published_year: PublishedYear,
}

impl BookDetails {
    pub fn new(
        name: impl Into<String>,
        author: impl Into<String>,
        published_year: PublishedYear,
    ) -> Self {
        Self {
            name: name.into(),
            author: author.into(),
            published_year,
        }
    }
}

/// Book - コレクションが保持する唯一のエンティティ
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: BookId,
    pub name: String,
    pub author: String,
    pub published_year: PublishedYear,
}

impl Book {
    /// 採番済みIDと検証済みフィールドから書籍を組み立てる
    pub fn new(id: BookId, details: BookDetails) -> Self {
        Self {
            id,
            name: details.name,
            author: details.author,
            published_year: details.published_year,
        }
    }

    /// 可変フィールドをすべて置き換える（部分マージではない）
    ///
    /// IDは変更されない。
    pub fn replace_details(&mut self, details: BookDetails) {
        self.name = details.name;
        self.author = details.author;
        self.published_year = details.published_year;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn year(value: i64) -> PublishedYear {
        PublishedYear::try_from(value).unwrap()
    }

    #[test]
    fn test_replace_details_keeps_id() {
        let mut book = Book::new(
            BookId::new(3),
            BookDetails::new("Dune", "Frank Herbert", year(1965)),
        );

        book.replace_details(BookDetails::new("Emma", "Jane Austen", year(1815)));

        assert_eq!(book.id, BookId::new(3));
        assert_eq!(book.name, "Emma");
        assert_eq!(book.author, "Jane Austen");
        assert_eq!(book.published_year, year(1815));
    }

    #[test]
    fn test_book_json_uses_camel_case() {
        let book = Book::new(
            BookId::new(1),
            BookDetails::new("Test Book", "Test Author", year(2023)),
        );

        let json = serde_json::to_value(&book).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "name": "Test Book",
                "author": "Test Author",
                "publishedYear": 2023
            })
        );
    }
}
