use chrono::{DateTime, Utc};

use super::{
    Book, BookBorrowed, BookReturned, BookStatus, BorrowBookError, Member, ReturnBookError,
};

/// 純粋関数：書籍を貸し出す
///
/// ビジネスルール：
/// - 貸出中の書籍は貸出不可
/// - 書籍の状態をBorrowedにする
/// - 会員の貸出一覧の末尾に、貸出後の書籍のコピーを追加する
///
/// 副作用なし。新しいBook・Memberとイベントを返す。
pub fn borrow_book(
    book: &Book,
    member: &Member,
    borrowed_at: DateTime<Utc>,
) -> Result<(Book, Member, BookBorrowed), BorrowBookError> {
    if book.status.is_borrowed() {
        return Err(BorrowBookError::AlreadyBorrowed);
    }

    let new_book = Book {
        status: BookStatus::Borrowed,
        ..book.clone()
    };

    let mut new_member = member.clone();
    new_member.borrowed_books.push(new_book.clone());

    let event = BookBorrowed {
        book_id: book.book_id,
        member_id: member.member_id,
        borrowed_at,
    };

    Ok((new_book, new_member, event))
}

/// 純粋関数：書籍を返却する
///
/// ビジネスルール：
/// - 会員の貸出一覧に含まれていない書籍は返却不可
/// - 一覧から最初に一致した1冊を取り除く（残りの順序は維持）
/// - 書籍の状態をAvailableに戻す
///
/// 副作用なし。新しいBook・Memberとイベントを返す。
pub fn return_book(
    book: &Book,
    member: &Member,
    returned_at: DateTime<Utc>,
) -> Result<(Book, Member, BookReturned), ReturnBookError> {
    let idx = member
        .borrowed_books
        .iter()
        .position(|b| b.book_id == book.book_id)
        .ok_or(ReturnBookError::NotBorrowedByMember)?;

    let mut new_member = member.clone();
    new_member.borrowed_books.remove(idx);

    let new_book = Book {
        status: BookStatus::Available,
        ..book.clone()
    };

    let event = BookReturned {
        book_id: book.book_id,
        member_id: member.member_id,
        returned_at,
    };

    Ok((new_book, new_member, event))
}
