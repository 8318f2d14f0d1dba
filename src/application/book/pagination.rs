use crate::domain::Book;
use serde::Serialize;
use std::ops::Range;

/// ページ番号の既定値
pub const DEFAULT_PAGE: i64 = 1;

/// 1ページあたりの件数の既定値
pub const DEFAULT_LIMIT: i64 = 5;

/// 一覧取得のページ指定
///
/// 生のクエリ文字列は「整数として解釈し、失敗したら既定値」で変換する。
/// 0も既定値に置き換える。負の値はそのまま通し、空のページになる。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub limit: i64,
}

impl PageRequest {
    pub fn new(page: i64, limit: i64) -> Self {
        Self { page, limit }
    }

    /// クエリパラメータの生文字列から変換する
    pub fn from_raw(page: Option<&str>, limit: Option<&str>) -> Self {
        Self {
            page: coerce_or_default(page, DEFAULT_PAGE),
            limit: coerce_or_default(limit, DEFAULT_LIMIT),
        }
    }

    /// コレクション長に対する半開区間 [start, end)
    ///
    /// 範囲がコレクションを超える場合は切り詰め、完全に外れていれば空区間。
    pub fn range(&self, len: usize) -> Range<usize> {
        if self.limit <= 0 || self.page <= 0 {
            return 0..0;
        }

        let limit = i128::from(self.limit);
        let start = (i128::from(self.page) - 1) * limit;
        let end = start + limit;
        let len_wide = len as i128;

        let start = start.min(len_wide) as usize;
        let end = end.min(len_wide) as usize;
        start..end
    }

    /// 総ページ数（ceil(total / limit)）
    ///
    /// limitが負の場合は0。
    pub fn total_pages(&self, total: usize) -> u64 {
        if self.limit <= 0 {
            return 0;
        }
        (total as u64).div_ceil(self.limit as u64)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE, DEFAULT_LIMIT)
    }
}

/// ページング結果のエンベロープ
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookPage {
    pub total_books: usize,
    pub total_pages: u64,
    pub current_page: i64,
    pub books: Vec<Book>,
}

impl BookPage {
    /// コレクション全体から指定ページを切り出す
    pub fn slice(books: &[Book], request: PageRequest) -> Self {
        let range = request.range(books.len());
        Self {
            total_books: books.len(),
            total_pages: request.total_pages(books.len()),
            current_page: request.page,
            books: books[range].to_vec(),
        }
    }
}

fn coerce_or_default(raw: Option<&str>, default: i64) -> i64 {
    match raw.and_then(parse_int_prefix) {
        Some(0) | None => default,
        Some(value) => value,
    }
}

/// 文字列先頭の整数を読み取る
///
/// 先頭の空白と符号を許容し、数字以外が現れた時点で打ち切る（"3abc" → 3）。
/// 数字が1つもなければ`None`。i64に収まらない値は飽和させる。
pub fn parse_int_prefix(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let magnitude = rest[..digits_len]
        .bytes()
        .fold(0i64, |acc, digit| {
            acc.saturating_mul(10).saturating_add(i64::from(digit - b'0'))
        });

    Some(if negative { -magnitude } else { magnitude })
}
