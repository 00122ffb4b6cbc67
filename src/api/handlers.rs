use crate::application::catalog::{
    self as service, CatalogApplicationError, ServiceDependencies, validate_book_id,
};
use crate::domain::{Book, BookId, DueDate, commands::*};
use axum::{Json, extract::State};
use std::sync::Arc;

use super::{
    error::ApiError,
    extract::{ApiJson, ApiPath, ApiQuery},
    types::{CheckoutQuery, CheckoutResponse, ReturnBookRequest},
};

// ============================================================================
// State
// ============================================================================

/// ハンドラー間で共有されるアプリケーション状態
#[derive(Clone)]
pub struct AppState {
    pub service_deps: ServiceDependencies,
}

/// GET / と GET /index - ウェルカムメッセージ
pub async fn index() -> &'static str {
    "Welcome to the home page! In order to make an API call direct your browser \
     or Postman to an endpoint."
}

// ============================================================================
// Query handlers (GET)
// ============================================================================

/// GET /books - 全書籍を取得
pub async fn list_books(State(state): State<Arc<AppState>>) -> Json<Vec<Book>> {
    Json(service::list_books(&state.service_deps))
}

/// GET /book/:id - 書籍詳細をIDで取得
///
/// 見つからない場合は404を返す。
pub async fn get_book(
    State(state): State<Arc<AppState>>,
    ApiPath(book_id): ApiPath<u32>,
) -> Result<Json<Book>, ApiError> {
    let book = service::get_book(&state.service_deps, BookId::new(book_id))?;
    Ok(Json(book))
}

/// GET /books/available - 貸出可能な蔵書がある書籍を取得
pub async fn list_available_books(State(state): State<Arc<AppState>>) -> Json<Vec<Book>> {
    Json(service::list_available_books(&state.service_deps))
}

/// GET /books/recommendation - おすすめの書籍を取得
///
/// 人気の5冊 + 無作為の5冊。10冊未満の場合は全冊を人気順で返す。
pub async fn recommend_books(State(state): State<Arc<AppState>>) -> Json<Vec<Book>> {
    tracing::info!("Retrieving book recommendations");
    Json(service::recommend_books(&state.service_deps))
}

// ============================================================================
// Command handlers
// ============================================================================

/// PATCH /book/:id/add - 蔵書を1冊追加
pub async fn add_copy(
    State(state): State<Arc<AppState>>,
    ApiPath(book_id): ApiPath<u32>,
) -> Result<Json<Book>, ApiError> {
    let cmd = AddCopy {
        book_id: BookId::new(book_id),
    };
    let book = service::add_copy(&state.service_deps, cmd)?;
    Ok(Json(book))
}

/// PATCH /book/:id/delete - 貸出可能な蔵書を1冊除籍
///
/// 貸出可能な蔵書が無い場合は409を返す。
pub async fn delete_copy(
    State(state): State<Arc<AppState>>,
    ApiPath(book_id): ApiPath<u32>,
) -> Result<Json<Book>, ApiError> {
    let cmd = DeleteCopy {
        book_id: BookId::new(book_id),
    };
    let book = service::delete_copy(&state.service_deps, cmd)?;
    Ok(Json(book))
}

/// POST /checkout?bookId=N - 書籍を1冊貸し出す
///
/// - bookIdが未指定または1未満：400
/// - 書籍が存在しない：404
/// - 貸出可能な蔵書が無い：409
pub async fn checkout_book(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<CheckoutQuery>,
) -> Result<Json<CheckoutResponse>, ApiError> {
    let book_id = validate_book_id(query.book_id).inspect_err(|_| {
        tracing::warn!("Invalid book ID provided for checkout: {:?}", query.book_id);
    })?;

    let cmd = CheckoutBook {
        book_id,
        checked_out_on: chrono::Utc::now().date_naive(),
    };
    let checkout = service::checkout_book(&state.service_deps, cmd)?;
    Ok(Json(CheckoutResponse::from(checkout)))
}

/// POST /book/:id/return - 返却期限を指定して1冊返却
///
/// - dueDateが未指定または空：400
/// - 書籍が存在しない：404
/// - dueDateが台帳に無い：409
pub async fn return_book(
    State(state): State<Arc<AppState>>,
    ApiPath(book_id): ApiPath<u32>,
    ApiJson(req): ApiJson<ReturnBookRequest>,
) -> Result<Json<Book>, ApiError> {
    let due_date = req
        .due_date
        .map(DueDate::new)
        .ok_or(CatalogApplicationError::MissingDueDate)?;

    let cmd = ReturnBook {
        book_id: BookId::new(book_id),
        due_date,
    };
    let book = service::return_book(&state.service_deps, cmd)?;
    Ok(Json(book))
}

/// PUT /book/:id - 書籍を丸ごと置き換える
///
/// 存在しないIDの場合は追加せず404を返す。
pub async fn replace_book(
    State(state): State<Arc<AppState>>,
    ApiPath(book_id): ApiPath<u32>,
    ApiJson(book): ApiJson<Book>,
) -> Result<Json<Book>, ApiError> {
    let book = service::replace_book(&state.service_deps, BookId::new(book_id), book)?;
    Ok(Json(book))
}
