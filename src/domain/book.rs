use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use super::{BookError, BookId, DueDate};

/// 著者が未設定の場合に使われるプレースホルダー
pub const DEFAULT_AUTHOR: &str = "Unknown";

fn default_authors() -> Vec<String> {
    vec![DEFAULT_AUTHOR.to_string()]
}

/// Book エンティティ - 1タイトル分の蔵書
///
/// 不変条件：
/// - `0 <= copies_available <= total_copies`
/// - `due_dates.len() == total_copies - copies_available`
/// - `amount_of_times_checked_out` は貸出成功ごとに1ずつ増え、減ることはない
///
/// 同一性はIDのみで決まる（タイトルや冊数は比較に使わない）。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "BookRecord")]
pub struct Book {
    id: BookId,
    title: String,
    authors: Vec<String>,
    language: String,
    shelving_location: String,
    subjects: Vec<String>,
    total_copies: u32,
    copies_available: u32,
    amount_of_times_checked_out: u32,
    #[serde(rename = "returnDates")]
    due_dates: Vec<DueDate>,
}

impl Book {
    /// 新しい書籍を1冊の在庫で作成する
    pub fn new(title: impl Into<String>, id: BookId) -> Self {
        Self {
            id,
            title: title.into(),
            authors: default_authors(),
            language: String::new(),
            shelving_location: String::new(),
            subjects: Vec::new(),
            total_copies: 1,
            copies_available: 1,
            amount_of_times_checked_out: 0,
            due_dates: Vec::new(),
        }
    }

    // ------------------------------------------------------------------------
    // 在庫操作
    // ------------------------------------------------------------------------

    pub fn has_copies(&self) -> bool {
        self.copies_available > 0
    }

    /// 蔵書を1冊追加する
    ///
    /// 総冊数が上限（`u32::MAX`）に達している場合は何もせずfalseを返す。
    pub fn add_copy(&mut self) -> bool {
        let Some(total) = self.total_copies.checked_add(1) else {
            return false;
        };
        self.total_copies = total;
        self.copies_available += 1;
        true
    }

    /// 貸出可能な蔵書を1冊除籍する
    ///
    /// 貸出中の本は除籍できない。貸出可能な冊数が0の場合は何もせずfalseを返す。
    pub fn delete_copy(&mut self) -> bool {
        if self.copies_available == 0 {
            return false;
        }
        self.copies_available -= 1;
        self.total_copies -= 1;
        true
    }

    /// 本日付で1冊貸し出す
    pub fn checkout_copy(&mut self) -> Option<DueDate> {
        self.checkout_copy_on(Utc::now().date_naive())
    }

    /// 指定日付で1冊貸し出す
    ///
    /// 貸出可能な冊数が0、または貸出回数が上限に達している場合はNoneを返し、
    /// 状態は変更しない。
    /// 成功時は返却期限（貸出日 + 14日）を台帳に追加し、そのトークンを返す。
    pub fn checkout_copy_on(&mut self, checked_out_on: NaiveDate) -> Option<DueDate> {
        if self.copies_available == 0 {
            return None;
        }
        let checked_out = self.amount_of_times_checked_out.checked_add(1)?;

        let due_date = DueDate::from_checkout_date(checked_out_on);
        self.copies_available -= 1;
        self.amount_of_times_checked_out = checked_out;
        self.due_dates.push(due_date.clone());

        Some(due_date)
    }

    /// 返却期限トークンを指定して1冊返却する
    ///
    /// トークンが無い、または台帳に存在しない場合はfalseを返し、状態は変更しない。
    /// 同じ期限が複数ある場合は1件だけ取り除く。
    pub fn return_copy(&mut self, due_date: Option<&DueDate>) -> bool {
        let Some(due_date) = due_date else {
            return false;
        };

        let Some(position) = self.due_dates.iter().position(|d| d == due_date) else {
            return false;
        };

        self.due_dates.remove(position);
        self.copies_available += 1;
        debug_assert!(self.copies_available <= self.total_copies);
        true
    }

    pub fn has_multiple_authors(&self) -> bool {
        self.authors.len() > 1
    }

    // ------------------------------------------------------------------------
    // 参照
    // ------------------------------------------------------------------------

    pub fn id(&self) -> BookId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn authors(&self) -> &[String] {
        &self.authors
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn shelving_location(&self) -> &str {
        &self.shelving_location
    }

    pub fn subjects(&self) -> &[String] {
        &self.subjects
    }

    pub fn total_copies(&self) -> u32 {
        self.total_copies
    }

    pub fn copies_available(&self) -> u32 {
        self.copies_available
    }

    pub fn amount_of_times_checked_out(&self) -> u32 {
        self.amount_of_times_checked_out
    }

    pub fn due_dates(&self) -> &[DueDate] {
        &self.due_dates
    }

    // ------------------------------------------------------------------------
    // 更新（Noneは既定値に戻す）
    // ------------------------------------------------------------------------

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_authors(&mut self, authors: Option<Vec<String>>) {
        self.authors = authors.unwrap_or_else(default_authors);
    }

    pub fn set_language(&mut self, language: Option<String>) {
        self.language = language.unwrap_or_default();
    }

    pub fn set_shelving_location(&mut self, shelving_location: Option<String>) {
        self.shelving_location = shelving_location.unwrap_or_default();
    }

    pub fn set_subjects(&mut self, subjects: Option<Vec<String>>) {
        self.subjects = subjects.unwrap_or_default();
    }

    /// 返却期限の台帳を置き換える
    ///
    /// 貸出可能冊数は `total_copies - due_dates.len()` に再計算される。
    /// 総冊数を超える件数は受け付けない。
    pub fn set_due_dates(&mut self, due_dates: Option<Vec<DueDate>>) -> Result<(), BookError> {
        let due_dates = due_dates.unwrap_or_default();
        let outstanding = u32::try_from(due_dates.len())
            .ok()
            .filter(|n| *n <= self.total_copies)
            .ok_or(BookError::TooManyDueDates {
                due_dates: due_dates.len(),
                total: self.total_copies,
            })?;

        self.copies_available = self.total_copies - outstanding;
        self.due_dates = due_dates;
        Ok(())
    }
}

impl PartialEq for Book {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Book {}

impl Hash for Book {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialOrd for Book {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Book {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

// ============================================================================
// 外部データからの復元
// ============================================================================

/// 外部表現のBook（シードデータ、更新リクエスト）
///
/// 欠落・nullのフィールドは既定値で補い、不変条件を満たさないものは拒否する。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BookRecord {
    id: BookId,
    #[serde(default)]
    title: String,
    authors: Option<Vec<String>>,
    language: Option<String>,
    shelving_location: Option<String>,
    subjects: Option<Vec<String>>,
    total_copies: Option<u32>,
    copies_available: Option<u32>,
    amount_of_times_checked_out: Option<u32>,
    #[serde(alias = "dueDates")]
    return_dates: Option<Vec<DueDate>>,
}

impl TryFrom<BookRecord> for Book {
    type Error = BookError;

    fn try_from(record: BookRecord) -> Result<Self, Self::Error> {
        let total = record.total_copies.unwrap_or(1);
        let due_dates = record.return_dates.unwrap_or_default();

        let outstanding = u32::try_from(due_dates.len())
            .ok()
            .filter(|n| *n <= total)
            .ok_or(BookError::TooManyDueDates {
                due_dates: due_dates.len(),
                total,
            })?;

        let available = record.copies_available.unwrap_or(total - outstanding);
        if available > total {
            return Err(BookError::AvailableExceedsTotal { available, total });
        }
        if total - available != outstanding {
            return Err(BookError::LedgerMismatch {
                expected: total - available,
                actual: due_dates.len(),
            });
        }

        let mut book = Book::new(record.title, record.id);
        book.set_authors(record.authors);
        book.set_language(record.language);
        book.set_shelving_location(record.shelving_location);
        book.set_subjects(record.subjects);
        book.total_copies = total;
        book.copies_available = available;
        book.amount_of_times_checked_out = record.amount_of_times_checked_out.unwrap_or(0);
        book.due_dates = due_dates;

        Ok(book)
    }
}
