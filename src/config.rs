use std::path::PathBuf;

/// 既定の待ち受けポート
pub const DEFAULT_PORT: u16 = 3000;

/// 既定のシードデータの場所
pub const DEFAULT_BOOKS_PATH: &str = "mockdata/books.json";

/// 環境変数から読み込むアプリケーション設定
///
/// - `PORT`: 待ち受けポート（既定 3000）
/// - `BOOKS_PATH`: 起動時に読み込む書籍JSON（既定 `mockdata/books.json`）
///
/// ログレベルは `RUST_LOG` で指定する（tracing-subscriber の EnvFilter）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    pub books_path: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 任意のキー参照関数から設定を組み立てる
    ///
    /// 解釈できないPORTは警告を出して既定値を使う。
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = match lookup("PORT") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!("Invalid PORT {:?}, falling back to {}", raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        let books_path = lookup("BOOKS_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_BOOKS_PATH));

        Self { port, books_path }
    }

    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
