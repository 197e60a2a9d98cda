use thiserror::Error;

use super::{BookId, MemberId};

/// 除籍のエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveBookError {
    /// 貸出中の書籍は除籍できない
    CurrentlyBorrowed,
}

/// 貸出のエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BorrowBookError {
    /// 既に貸出中
    AlreadyBorrowed,
}

/// 返却のエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReturnBookError {
    /// この会員は対象の書籍を借りていない
    NotBorrowedByMember,
}

/// 蔵書全体に対する操作のエラー
///
/// 検索（存在確認）と純粋関数のルール違反をまとめたもの。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
    #[error("Book {0} not found")]
    BookNotFound(BookId),

    #[error("Member with id {0} not found")]
    MemberNotFound(MemberId),

    #[error("Book {0} is already borrowed")]
    BookAlreadyBorrowed(BookId),

    #[error("Cannot remove book {0} while it is borrowed")]
    BookCurrentlyBorrowed(BookId),

    #[error("Member {member_id} did not borrow book {book_id}")]
    BookNotBorrowedByMember {
        book_id: BookId,
        member_id: MemberId,
    },
}
