use crate::domain::{Book, BookId};
use crate::ports::book_catalog::BookCatalog;
use std::collections::HashMap;
use std::path::Path;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::loader::load_books;

/// カタログの内部状態
///
/// 登録順を保つVecと、IDから位置を引くインデックスの組。
/// 置き換えのみで削除は行わないため、インデックスは無効にならない。
#[derive(Debug, Default)]
struct CatalogState {
    books: Vec<Book>,
    index: HashMap<BookId, usize>,
}

/// BookCatalogのインメモリ実装
///
/// 読み取りは並行、書き込みは単一（RwLock）。
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    state: RwLock<CatalogState>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// 書籍一覧からカタログを作成する
    ///
    /// IDが重複する場合は先に現れたものを残し、後続は警告を出して捨てる。
    pub fn with_books(books: impl IntoIterator<Item = Book>) -> Self {
        let mut state = CatalogState::default();

        for book in books {
            if state.index.contains_key(&book.id()) {
                tracing::warn!("Skipping duplicate book id {} ({})", book.id(), book.title());
                continue;
            }
            state.index.insert(book.id(), state.books.len());
            state.books.push(book);
        }

        Self {
            state: RwLock::new(state),
        }
    }

    /// JSONファイルからカタログを作成する
    ///
    /// 読み込みに失敗してもプロセスは止めず、エラーを記録して空のカタログを返す。
    pub fn from_json_file(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();

        match load_books(path) {
            Ok(books) => {
                let catalog = Self::with_books(books);
                tracing::info!(
                    "Successfully loaded {} books from {}",
                    catalog.len(),
                    path.display()
                );
                catalog
            }
            Err(e) => {
                let cause = std::error::Error::source(&e)
                    .map(ToString::to_string)
                    .unwrap_or_default();
                tracing::error!("{}: {}; starting with an empty catalog", e, cause);
                Self::new()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.read().books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read(&self) -> RwLockReadGuard<'_, CatalogState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, CatalogState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl BookCatalog for InMemoryCatalog {
    fn all(&self) -> Vec<Book> {
        self.read().books.clone()
    }

    fn get(&self, book_id: BookId) -> Option<Book> {
        let state = self.read();
        state
            .index
            .get(&book_id)
            .map(|&position| state.books[position].clone())
    }

    fn replace(&self, book: Book) -> bool {
        let mut state = self.write();
        match state.index.get(&book.id()).copied() {
            Some(position) => {
                state.books[position] = book;
                true
            }
            None => false,
        }
    }

    fn modify(&self, book_id: BookId, update: &mut dyn FnMut(&mut Book)) -> Option<Book> {
        let mut state = self.write();
        let position = state.index.get(&book_id).copied()?;
        let book = &mut state.books[position];
        update(book);
        Some(book.clone())
    }
}
