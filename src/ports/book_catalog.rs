use crate::domain::{Book, BookId};

/// 蔵書カタログポート
///
/// アプリケーション層と保存先の境界。
/// 実装は `all` / `get` と `replace` / `modify` を相互排他で実行しなければならない
/// （読み取りは並行可、書き込みは単一）。
pub trait BookCatalog: Send + Sync {
    /// 全書籍のスナップショットを登録順で返す
    ///
    /// 返されるVecはカタログとは独立している。要素を追加・削除しても
    /// カタログの構成は変わらない。
    fn all(&self) -> Vec<Book>;

    /// IDで書籍を取得する
    fn get(&self, book_id: BookId) -> Option<Book>;

    /// 同じIDの書籍を置き換える
    ///
    /// 一致する書籍が無い場合は何もしない（追加はしない）。
    /// 置き換えが行われたかどうかを返す。
    fn replace(&self, book: Book) -> bool;

    /// 書籍をロックしたまま更新し、更新後のスナップショットを返す
    ///
    /// 読み取り・変更・保存を1回の書き込みロックで行うため、
    /// 同じ書籍への並行した貸出が両方成功することはない。
    fn modify(&self, book_id: BookId, update: &mut dyn FnMut(&mut Book)) -> Option<Book>;
}
