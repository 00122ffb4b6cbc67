use thiserror::Error;

/// 書籍データの不変条件違反
///
/// 外部データ（シードファイル、更新リクエスト）からBookを組み立てる際にのみ発生する。
/// 貸出・返却などの通常操作はbool/Optionで結果を返し、このエラーは使わない。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookError {
    /// 貸出可能冊数が総冊数を超えている
    #[error("copiesAvailable ({available}) exceeds totalCopies ({total})")]
    AvailableExceedsTotal { available: u32, total: u32 },

    /// 返却期限リストの長さが貸出中の冊数と一致しない
    #[error("expected {expected} outstanding due dates, found {actual}")]
    LedgerMismatch { expected: u32, actual: usize },

    /// 返却期限の数が総冊数を超えている
    #[error("{due_dates} due dates cannot fit in {total} copies")]
    TooManyDueDates { due_dates: usize, total: u32 },
}
