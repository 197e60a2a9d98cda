use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Book, MemberId, MemberRegistered};

/// 会員エンティティ
///
/// `borrowed_books` は貸出時点の書籍のスナップショット（コピー）で、
/// 蔵書側の書籍とは独立している。貸出順を保持する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub member_id: MemberId,
    pub name: String,
    pub borrowed_books: Vec<Book>,
}

/// 純粋関数：会員を登録する
///
/// 貸出一覧は空で作成される。
pub fn register_member(
    member_id: MemberId,
    name: String,
    registered_at: DateTime<Utc>,
) -> (Member, MemberRegistered) {
    let member = Member {
        member_id,
        name,
        borrowed_books: Vec::new(),
    };

    let event = MemberRegistered {
        member_id,
        name: member.name.clone(),
        registered_at,
    };

    (member, event)
}
