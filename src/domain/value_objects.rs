use serde::{Deserialize, Serialize};
use std::fmt;

/// 出版年の下限（4桁の年のみ受け付ける）
pub const MIN_PUBLISHED_YEAR: i64 = 1000;

/// 出版年の上限
pub const MAX_PUBLISHED_YEAR: i64 = 9999;

/// 書籍ID - 蔵書コレクション内で一意な正の整数
///
/// 採番はBook Storeが単調増加カウンタで行う。
/// 削除後に同じIDが再利用されることはない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(u64);

impl BookId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    /// 採番順で次のID
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 出版年エラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishedYearError {
    /// 範囲外（1000〜9999）
    OutOfRange(i64),
}

/// 出版年
///
/// 不変条件：1000以上9999以下。
/// 型システムでこの制約を強制し、範囲外の値を作成できないようにする。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct PublishedYear(u16);

impl PublishedYear {
    pub fn value(&self) -> u16 {
        self.0
    }
}

impl TryFrom<i64> for PublishedYear {
    type Error = PublishedYearError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if !(MIN_PUBLISHED_YEAR..=MAX_PUBLISHED_YEAR).contains(&value) {
            return Err(PublishedYearError::OutOfRange(value));
        }
        Ok(Self(value as u16))
    }
}

impl From<PublishedYear> for i64 {
    fn from(year: PublishedYear) -> Self {
        i64::from(year.0)
    }
}

impl fmt::Display for PublishedYearError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PublishedYearError::OutOfRange(value) => {
                write!(f, "published year {} is outside 1000..=9999", value)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_id_next() {
        let id = BookId::new(1);
        assert_eq!(id.next().value(), 2);
    }

    #[test]
    fn test_book_id_display() {
        assert_eq!(BookId::new(42).to_string(), "42");
    }

    #[test]
    fn test_published_year_bounds_are_inclusive() {
        assert_eq!(PublishedYear::try_from(1000).unwrap().value(), 1000);
        assert_eq!(PublishedYear::try_from(9999).unwrap().value(), 9999);
    }

    #[test]
    fn test_published_year_out_of_range() {
        assert_eq!(
            PublishedYear::try_from(999).unwrap_err(),
            PublishedYearError::OutOfRange(999)
        );
        assert!(PublishedYear::try_from(10000).is_err());
        assert!(PublishedYear::try_from(-2023).is_err());
    }

    #[test]
    fn test_published_year_serializes_as_integer() {
        let year = PublishedYear::try_from(2023).unwrap();
        assert_eq!(serde_json::to_string(&year).unwrap(), "2023");

        let parsed: PublishedYear = serde_json::from_str("1999").unwrap();
        assert_eq!(parsed.value(), 1999);

        assert!(serde_json::from_str::<PublishedYear>("123").is_err());
    }
}
