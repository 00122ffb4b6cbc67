use thiserror::Error;

/// カタログ管理アプリケーション層のエラー
#[derive(Debug, Error)]
pub enum CatalogApplicationError {
    /// 書籍が見つからない
    #[error("Book not found")]
    BookNotFound,

    /// 貸出・除籍できる蔵書が無い
    #[error("No copies available")]
    NoCopiesAvailable,

    /// 総冊数が上限に達している
    #[error("Copy limit reached")]
    CopyLimitReached,

    /// 貸出回数が上限に達している
    #[error("Checkout count limit reached")]
    CheckoutLimitReached,

    /// 返却期限トークンが台帳に無い
    #[error("Due date not found for this book")]
    DueDateNotFound,

    /// 書籍IDが不正（未指定、または1未満）
    #[error("Invalid book ID")]
    InvalidBookId,

    /// 返却期限トークンが未指定
    #[error("Due date is required")]
    MissingDueDate,

    /// リクエストのIDとパスのIDが一致しない
    #[error("Book ID mismatch: path {path}, body {body}")]
    BookIdMismatch { path: u32, body: u32 },
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, CatalogApplicationError>;
