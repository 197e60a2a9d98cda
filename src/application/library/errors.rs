use crate::domain::{BookId, InventoryError, MemberId};
use crate::ports::StoreError;
use thiserror::Error;

/// 蔵書管理アプリケーション層のエラー
#[derive(Debug, Error)]
pub enum LibraryApplicationError {
    /// 書籍が存在しない
    #[error("book not found")]
    BookNotFound(BookId),

    /// 会員が存在しない
    #[error("member with id {0} not found")]
    MemberNotFound(MemberId),

    /// 書籍は既に貸出中
    #[error("book already borrowed")]
    BookAlreadyBorrowed(BookId),

    /// 貸出中の書籍は除籍できない
    #[error("cannot remove a borrowed book")]
    BookCurrentlyBorrowed(BookId),

    /// 会員がこの書籍を借りていない
    #[error("this member did not borrow this book")]
    BookNotBorrowedByMember {
        book_id: BookId,
        member_id: MemberId,
    },

    /// ストアのエラー
    #[error("Library store error")]
    StoreError(#[source] StoreError),
}

/// エラーの分類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// 対象が存在しない
    NotFound,
    /// 現在の状態と矛盾する操作
    Conflict,
    /// システム障害
    Internal,
}

impl LibraryApplicationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LibraryApplicationError::BookNotFound(_)
            | LibraryApplicationError::MemberNotFound(_)
            | LibraryApplicationError::BookNotBorrowedByMember { .. } => ErrorKind::NotFound,
            LibraryApplicationError::BookAlreadyBorrowed(_)
            | LibraryApplicationError::BookCurrentlyBorrowed(_) => ErrorKind::Conflict,
            LibraryApplicationError::StoreError(_) => ErrorKind::Internal,
        }
    }
}

impl From<InventoryError> for LibraryApplicationError {
    fn from(err: InventoryError) -> Self {
        match err {
            InventoryError::BookNotFound(id) => LibraryApplicationError::BookNotFound(id),
            InventoryError::MemberNotFound(id) => LibraryApplicationError::MemberNotFound(id),
            InventoryError::BookAlreadyBorrowed(id) => {
                LibraryApplicationError::BookAlreadyBorrowed(id)
            }
            InventoryError::BookCurrentlyBorrowed(id) => {
                LibraryApplicationError::BookCurrentlyBorrowed(id)
            }
            InventoryError::BookNotBorrowedByMember { book_id, member_id } => {
                LibraryApplicationError::BookNotBorrowedByMember { book_id, member_id }
            }
        }
    }
}

impl From<StoreError> for LibraryApplicationError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Rejected(rejected) => rejected.into(),
            other => LibraryApplicationError::StoreError(other),
        }
    }
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, LibraryApplicationError>;
