use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::domain::Book;

/// シードデータ読み込みのエラー
#[derive(Debug, Error)]
pub enum LoadError {
    /// ファイルが見つからない、または読めない
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSONとして解釈できない、または不変条件を満たさない書籍がある
    #[error("failed to parse books from {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// JSONファイルから書籍一覧を読み込む
///
/// ファイルは書籍オブジェクトの配列。1件でも不正な書籍があれば全体をエラーとする。
pub fn load_books(path: &Path) -> Result<Vec<Book>, LoadError> {
    let raw = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&raw).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BookId;

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "rusty-library-catalog-{}-{}",
            std::process::id(),
            name
        ));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_books_success() {
        let path = write_temp(
            "ok.json",
            r#"[{"id": 1, "title": "A"}, {"id": 2, "title": "B", "totalCopies": 3}]"#,
        );

        let books = load_books(&path).unwrap();

        assert_eq!(books.len(), 2);
        assert_eq!(books[1].id(), BookId::new(2));
        assert_eq!(books[1].copies_available(), 3);
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_books_missing_file() {
        let result = load_books(Path::new("/nonexistent/books.json"));
        assert!(matches!(result, Err(LoadError::Io { .. })));
    }

    #[test]
    fn test_load_books_invalid_json() {
        let path = write_temp("broken.json", "{ not json");

        let result = load_books(&path);

        assert!(matches!(result, Err(LoadError::Parse { .. })));
        fs::remove_file(path).ok();
    }
}
