use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{BookAdded, BookId, BookRemoved, BookStatus, RemoveBookError};

/// 書籍エンティティ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub book_id: BookId,
    pub title: String,
    pub author: String,
    pub status: BookStatus,
}

/// 純粋関数：書籍を登録する
///
/// ビジネスルール：
/// - 状態が未指定ならAvailable
///
/// 副作用なし。新しいBookとイベントを返す。
pub fn add_book(
    book_id: BookId,
    title: String,
    author: String,
    status: Option<BookStatus>,
    added_at: DateTime<Utc>,
) -> (Book, BookAdded) {
    let book = Book {
        book_id,
        title,
        author,
        status: status.unwrap_or_default(),
    };

    let event = BookAdded {
        book_id,
        title: book.title.clone(),
        author: book.author.clone(),
        status: book.status,
        added_at,
    };

    (book, event)
}

/// 純粋関数：書籍を除籍する
///
/// ビジネスルール：
/// - 貸出中の書籍は除籍不可
pub fn remove_book(book: &Book, removed_at: DateTime<Utc>) -> Result<BookRemoved, RemoveBookError> {
    if book.status.is_borrowed() {
        return Err(RemoveBookError::CurrentlyBorrowed);
    }

    Ok(BookRemoved {
        book_id: book.book_id,
        removed_at,
    })
}
