use crate::application::catalog::CatalogApplicationError;
use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::types::ErrorResponse;

/// API層のエラー型
///
/// アプリケーション層のエラーと、リクエストの抽出失敗（パス・クエリ・ボディ）を
/// 同じJSON形式のレスポンスにマッピングする。
#[derive(Debug)]
pub enum ApiError {
    Application(CatalogApplicationError),
    Rejection {
        status: StatusCode,
        error_type: &'static str,
        message: String,
    },
}

impl From<CatalogApplicationError> for ApiError {
    fn from(err: CatalogApplicationError) -> Self {
        ApiError::Application(err)
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::Rejection {
            status: rejection.status(),
            error_type: "INVALID_PATH",
            message: rejection.body_text(),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Rejection {
            status: rejection.status(),
            error_type: "INVALID_QUERY",
            message: rejection.body_text(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Rejection {
            status: rejection.status(),
            error_type: "INVALID_BODY",
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            ApiError::Application(err) => {
                let (status, error_type) = application_status(&err);
                (status, error_type, err.to_string())
            }
            ApiError::Rejection {
                status,
                error_type,
                message,
            } => {
                tracing::warn!("Rejected request ({}): {}", error_type, message);
                (status, error_type, message)
            }
        };

        let body = Json(ErrorResponse::new(error_type, message));
        (status, body).into_response()
    }
}

fn application_status(err: &CatalogApplicationError) -> (StatusCode, &'static str) {
    match err {
        // 400 Bad Request - リクエストの形式が不正
        CatalogApplicationError::InvalidBookId => (StatusCode::BAD_REQUEST, "INVALID_BOOK_ID"),
        CatalogApplicationError::MissingDueDate => (StatusCode::BAD_REQUEST, "MISSING_DUE_DATE"),
        CatalogApplicationError::BookIdMismatch { .. } => {
            (StatusCode::BAD_REQUEST, "BOOK_ID_MISMATCH")
        }

        // 404 Not Found - リクエストされた書籍が存在しない
        CatalogApplicationError::BookNotFound => (StatusCode::NOT_FOUND, "BOOK_NOT_FOUND"),

        // 409 Conflict - 現在の在庫状態では実行できない
        CatalogApplicationError::NoCopiesAvailable => {
            (StatusCode::CONFLICT, "NO_COPIES_AVAILABLE")
        }
        CatalogApplicationError::CopyLimitReached => (StatusCode::CONFLICT, "COPY_LIMIT_REACHED"),
        CatalogApplicationError::CheckoutLimitReached => {
            (StatusCode::CONFLICT, "CHECKOUT_LIMIT_REACHED")
        }
        CatalogApplicationError::DueDateNotFound => (StatusCode::CONFLICT, "DUE_DATE_NOT_FOUND"),
    }
}
