use crate::domain::{BookDetails, PublishedYear};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const NAME_REQUIRED: &str = "Name is required";
pub const AUTHOR_REQUIRED: &str = "Author is required";
pub const VALID_YEAR_REQUIRED: &str = "Valid year required";

/// フィールド単位の検証違反
///
/// `{ "type": "field", "value": ..., "msg": ..., "path": ..., "location": "body" }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldViolation {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    pub msg: String,
    pub path: String,
    pub location: String,
}

impl FieldViolation {
    fn body_field(path: &str, value: Option<Value>, msg: &str) -> Self {
        Self {
            kind: "field".to_string(),
            value,
            msg: msg.to_string(),
            path: path.to_string(),
            location: "body".to_string(),
        }
    }
}

/// 登録・更新リクエストの検証ゲート
///
/// 違反は最初の1件で打ち切らず、name → author → publishedYear の順で全件返す。
/// JSONオブジェクトでないボディはすべてのフィールドが欠けているものとして扱う。
pub fn validate_book(body: &Value) -> Result<BookDetails, Vec<FieldViolation>> {
    let mut violations = Vec::new();

    let name = sanitized_text(body, "name", NAME_REQUIRED, &mut violations);
    let author = sanitized_text(body, "author", AUTHOR_REQUIRED, &mut violations);
    let published_year = published_year(body, &mut violations);

    match (name, author, published_year) {
        (Some(name), Some(author), Some(year)) => {
            Ok(BookDetails::new(name, author, year))
        }
        _ => Err(violations),
    }
}

/// trim → HTMLエスケープ → 空でないこと
fn sanitized_text(
    body: &Value,
    field: &str,
    msg: &str,
    violations: &mut Vec<FieldViolation>,
) -> Option<String> {
    let raw = body.get(field);
    let text = escape_html(coerce_to_string(raw).trim());

    if text.is_empty() {
        let reported = raw.map(|_| Value::String(text));
        violations.push(FieldViolation::body_field(field, reported, msg));
        return None;
    }
    Some(text)
}

fn published_year(body: &Value, violations: &mut Vec<FieldViolation>) -> Option<PublishedYear> {
    let raw = body.get("publishedYear");
    let year = raw
        .and_then(parse_integer)
        .and_then(|year| PublishedYear::try_from(year).ok());

    if year.is_none() {
        violations.push(FieldViolation::body_field(
            "publishedYear",
            raw.cloned(),
            VALID_YEAR_REQUIRED,
        ));
    }
    year
}

/// 文字列・数値・真偽値はその文字列表現に、それ以外は空文字列にする
fn coerce_to_string(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

/// JSON整数、小数部のない数値、または `^[+-]?[0-9]+$` の文字列
fn parse_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15)
                .map(|f| f as i64)
        }),
        Value::String(s) => parse_strict_integer(s),
        _ => None,
    }
}

fn parse_strict_integer(raw: &str) -> Option<i64> {
    let digits = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    let well_formed = !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit());

    if !well_formed {
        return None;
    }
    raw.parse::<i64>().ok()
}

/// HTML特殊文字をエンティティに置き換える
pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '/' => escaped.push_str("&#x2F;"),
            '\\' => escaped.push_str("&#x5C;"),
            '`' => escaped.push_str("&#96;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
