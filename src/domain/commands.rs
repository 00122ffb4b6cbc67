use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{BookId, DueDate};

/// コマンド：書籍を1冊貸し出す
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutBook {
    pub book_id: BookId,
    pub checked_out_on: NaiveDate,
}

/// コマンド：書籍を1冊返却する
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnBook {
    pub book_id: BookId,
    pub due_date: DueDate,
}

/// コマンド：蔵書を1冊追加する
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddCopy {
    pub book_id: BookId,
}

/// コマンド：蔵書を1冊除籍する
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteCopy {
    pub book_id: BookId,
}
