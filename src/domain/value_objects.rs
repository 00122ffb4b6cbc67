use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// 貸出期間（日数）
pub const LOAN_PERIOD_DAYS: i64 = 14;

/// 返却期限トークンの書式
pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// 書籍ID - カタログ内で一意、作成後は不変
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(u32);

impl BookId {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl From<u32> for BookId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for BookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 返却期限トークン
///
/// 貸出時に発行され、返却時には値の一致で照合される。
/// 中身は不透明な文字列として扱い、日付として解釈しない。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DueDate(String);

impl DueDate {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// 貸出日から返却期限を算出する（貸出日 + 14日）
    pub fn from_checkout_date(checked_out_on: NaiveDate) -> Self {
        let due = checked_out_on + Duration::days(LOAN_PERIOD_DAYS);
        Self(due.format(DUE_DATE_FORMAT).to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<&str> for DueDate {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl std::fmt::Display for DueDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_id_ordering() {
        assert!(BookId::new(1) < BookId::new(2));
        assert_eq!(BookId::from(7).value(), 7);
    }

    #[test]
    fn test_due_date_from_checkout_date() {
        let checked_out_on = NaiveDate::from_ymd_opt(2025, 1, 25).unwrap();
        let due = DueDate::from_checkout_date(checked_out_on);
        assert_eq!(due.as_str(), "2025-02-08");
    }

    #[test]
    fn test_due_date_is_blank() {
        assert!(DueDate::new("  ").is_blank());
        assert!(!DueDate::new("2025-02-08").is_blank());
    }

    #[test]
    fn test_due_date_serializes_as_plain_string() {
        let json = serde_json::to_string(&DueDate::new("2025-02-08")).unwrap();
        assert_eq!(json, "\"2025-02-08\"");
    }
}
