use serde::{Deserialize, Serialize};

use crate::application::catalog::Checkout;
use crate::domain::{Book, DueDate};

/// 貸出リクエストのクエリパラメータ（POST /checkout?bookId=N）
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutQuery {
    /// 範囲チェックはアプリケーション層で行うため、符号付きで受け取る
    pub book_id: Option<i64>,
}

/// 返却リクエスト（POST /book/:id/return）
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnBookRequest {
    #[serde(alias = "returnDate")]
    pub due_date: Option<String>,
}

/// 貸出レスポンス：更新後の書籍と、返却時に必要な返却期限
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponse {
    #[serde(flatten)]
    pub book: Book,
    pub due_date: DueDate,
}

impl From<Checkout> for CheckoutResponse {
    fn from(checkout: Checkout) -> Self {
        Self {
            book: checkout.book,
            due_date: checkout.due_date,
        }
    }
}

/// エラーレスポンス
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}
