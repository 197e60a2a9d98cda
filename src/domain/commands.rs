use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{BookId, BookStatus, MemberId};

/// コマンド：書籍を登録する（同じIDが存在すれば上書き）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddBook {
    pub book_id: BookId,
    pub title: String,
    pub author: String,
    /// 未指定の場合は Available
    pub status: Option<BookStatus>,
    pub added_at: DateTime<Utc>,
}

/// コマンド：書籍を除籍する
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveBook {
    pub book_id: BookId,
    pub removed_at: DateTime<Utc>,
}

/// コマンド：書籍を貸し出す
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorrowBook {
    pub book_id: BookId,
    pub member_id: MemberId,
    pub borrowed_at: DateTime<Utc>,
}

/// コマンド：書籍を返却する
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnBook {
    pub book_id: BookId,
    pub member_id: MemberId,
    pub returned_at: DateTime<Utc>,
}

/// コマンド：会員を登録する（同じIDが存在すれば上書き）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterMember {
    pub member_id: MemberId,
    pub name: String,
    pub registered_at: DateTime<Utc>,
}
