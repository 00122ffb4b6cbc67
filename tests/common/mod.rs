#![allow(dead_code)]

use rusty_library_catalog::adapters::memory::InMemoryCatalog;
use rusty_library_catalog::application::catalog::ServiceDependencies;
use rusty_library_catalog::domain::{Book, BookId};
use std::sync::Arc;

/// テスト用の書籍を作成する
///
/// `copies` 冊の蔵書を持ち、貸出回数は `checkouts` 回（すべて返却済みの扱い）。
pub fn book(id: u32, title: &str, copies: u32, checkouts: u32) -> Book {
    let mut book = Book::new(title, BookId::new(id));
    for _ in 1..copies {
        book.add_copy();
    }
    for _ in 0..checkouts {
        let due = book.checkout_copy();
        assert!(book.return_copy(due.as_ref()));
    }
    book
}

/// 1..=count のIDを持つ書籍群（貸出回数はID % 6）
pub fn numbered_books(count: u32) -> Vec<Book> {
    (1..=count)
        .map(|id| book(id, &format!("Book {id}"), 1, id % 6))
        .collect()
}

/// 書籍群からインメモリカタログと依存関係を組み立てる
pub fn setup(books: Vec<Book>) -> (Arc<InMemoryCatalog>, ServiceDependencies) {
    let catalog = Arc::new(InMemoryCatalog::with_books(books));
    let deps = ServiceDependencies {
        catalog: catalog.clone(),
    };
    (catalog, deps)
}

/// リポジトリ同梱のシードデータのパス
pub fn seed_path() -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("mockdata/books.json")
}
