use crate::application::book::BookApplicationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::types::{ErrorResponse, ValidationErrorResponse};
use super::validation::FieldViolation;

/// API層のエラー型
///
/// アプリケーション層のエラーと検証ゲートの拒否をまとめ、
/// HTTPレスポンスへのマッピングを提供する。
#[derive(Debug)]
pub enum ApiError {
    Application(BookApplicationError),
    Validation(Vec<FieldViolation>),
}

impl From<BookApplicationError> for ApiError {
    fn from(err: BookApplicationError) -> Self {
        ApiError::Application(err)
    }
}

impl From<Vec<FieldViolation>> for ApiError {
    fn from(violations: Vec<FieldViolation>) -> Self {
        ApiError::Validation(violations)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            // 404 Not Found - リクエストされた書籍が存在しない
            ApiError::Application(BookApplicationError::BookNotFound) => (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new(
                    BookApplicationError::BookNotFound.to_string(),
                )),
            )
                .into_response(),

            // 400 Bad Request - 違反をすべて返す
            ApiError::Validation(errors) => {
                tracing::debug!(violations = errors.len(), "Request body rejected");
                (
                    StatusCode::BAD_REQUEST,
                    Json(ValidationErrorResponse { errors }),
                )
                    .into_response()
            }
        }
    }
}
