use crate::domain::{Book, BookId, DueDate, commands::*};
use crate::ports::BookCatalog;
use std::sync::Arc;

use super::errors::{CatalogApplicationError, Result};

/// 有効な書籍IDの最小値（貸出リクエスト用）
pub const MIN_VALID_BOOK_ID: i64 = 1;

/// サービスの依存関係
///
/// 振る舞いは持たず、各関数に引数として渡す。
#[derive(Clone)]
pub struct ServiceDependencies {
    pub catalog: Arc<dyn BookCatalog>,
}

/// 貸出の結果
#[derive(Debug, Clone)]
pub struct Checkout {
    pub book: Book,
    pub due_date: DueDate,
}

/// リクエストで受け取った書籍IDを検証する
///
/// 未指定、1未満、または範囲外の値は`InvalidBookId`。
pub fn validate_book_id(raw: Option<i64>) -> Result<BookId> {
    raw.filter(|id| *id >= MIN_VALID_BOOK_ID)
        .and_then(|id| u32::try_from(id).ok())
        .map(BookId::new)
        .ok_or(CatalogApplicationError::InvalidBookId)
}

/// IDで書籍を取得する
pub fn get_book(deps: &ServiceDependencies, book_id: BookId) -> Result<Book> {
    deps.catalog
        .get(book_id)
        .ok_or(CatalogApplicationError::BookNotFound)
}

/// 全書籍を取得する
pub fn list_books(deps: &ServiceDependencies) -> Vec<Book> {
    deps.catalog.all()
}

/// 貸出可能な蔵書がある書籍のみを取得する
pub fn list_available_books(deps: &ServiceDependencies) -> Vec<Book> {
    deps.catalog
        .all()
        .into_iter()
        .filter(Book::has_copies)
        .collect()
}

/// 蔵書を1冊追加する
///
/// 総冊数が上限に達している場合は`CopyLimitReached`。
pub fn add_copy(deps: &ServiceDependencies, cmd: AddCopy) -> Result<Book> {
    let mut added = false;
    let book = deps
        .catalog
        .modify(cmd.book_id, &mut |book: &mut Book| added = book.add_copy())
        .ok_or(CatalogApplicationError::BookNotFound)?;

    if !added {
        tracing::warn!("Copy limit reached for book ID: {}", cmd.book_id);
        return Err(CatalogApplicationError::CopyLimitReached);
    }

    tracing::info!(
        "Added a copy of book {}, total copies: {}",
        cmd.book_id,
        book.total_copies()
    );
    Ok(book)
}

/// 貸出可能な蔵書を1冊除籍する
///
/// 貸出中の蔵書しか残っていない場合は`NoCopiesAvailable`。
pub fn delete_copy(deps: &ServiceDependencies, cmd: DeleteCopy) -> Result<Book> {
    let mut deleted = false;
    let book = deps
        .catalog
        .modify(cmd.book_id, &mut |book: &mut Book| deleted = book.delete_copy())
        .ok_or(CatalogApplicationError::BookNotFound)?;

    if !deleted {
        tracing::warn!("No copies available to delete for book ID: {}", cmd.book_id);
        return Err(CatalogApplicationError::NoCopiesAvailable);
    }

    Ok(book)
}

/// 書籍を1冊貸し出す
///
/// 在庫確認・貸出・保存は1回の書き込みロック内で行われる。
pub fn checkout_book(deps: &ServiceDependencies, cmd: CheckoutBook) -> Result<Checkout> {
    let mut due_date = None;
    let book = deps
        .catalog
        .modify(cmd.book_id, &mut |book: &mut Book| {
            due_date = book.checkout_copy_on(cmd.checked_out_on);
        })
        .ok_or(CatalogApplicationError::BookNotFound)?;

    let Some(due_date) = due_date else {
        if book.has_copies() {
            tracing::warn!("Checkout counter saturated for book ID: {}", cmd.book_id);
            return Err(CatalogApplicationError::CheckoutLimitReached);
        }
        tracing::warn!("No copies available for checkout for book ID: {}", cmd.book_id);
        return Err(CatalogApplicationError::NoCopiesAvailable);
    };

    tracing::info!(
        "Successfully checked out book with ID: {}, due {}",
        cmd.book_id,
        due_date
    );
    Ok(Checkout { book, due_date })
}

/// 書籍を1冊返却する
///
/// 返却期限トークンが台帳に無い場合は`DueDateNotFound`。
pub fn return_book(deps: &ServiceDependencies, cmd: ReturnBook) -> Result<Book> {
    if cmd.due_date.is_blank() {
        return Err(CatalogApplicationError::MissingDueDate);
    }

    let mut returned = false;
    let book = deps
        .catalog
        .modify(cmd.book_id, &mut |book: &mut Book| {
            returned = book.return_copy(Some(&cmd.due_date));
        })
        .ok_or(CatalogApplicationError::BookNotFound)?;

    if !returned {
        tracing::warn!(
            "Due date {} is not outstanding for book ID: {}",
            cmd.due_date,
            cmd.book_id
        );
        return Err(CatalogApplicationError::DueDateNotFound);
    }

    tracing::info!("Successfully returned book with ID: {}", cmd.book_id);
    Ok(book)
}

/// 書籍を丸ごと置き換える
///
/// カタログに存在しないIDは追加せず`BookNotFound`。
pub fn replace_book(deps: &ServiceDependencies, book_id: BookId, book: Book) -> Result<Book> {
    if book.id() != book_id {
        return Err(CatalogApplicationError::BookIdMismatch {
            path: book_id.value(),
            body: book.id().value(),
        });
    }

    if !deps.catalog.replace(book.clone()) {
        return Err(CatalogApplicationError::BookNotFound);
    }

    tracing::info!("Replaced book with ID: {}", book_id);
    Ok(book)
}
