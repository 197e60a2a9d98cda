use std::collections::HashMap;

use super::{
    Book, BookAdded, BookBorrowed, BookId, BookRemoved, BookReturned, InventoryError, Member,
    MemberId, MemberRegistered, book, circulation, commands::*, member,
};

/// 蔵書と会員の集合
///
/// 検索（存在確認）と純粋関数によるルール判定を組み合わせ、
/// 成功した場合のみ状態を書き換える。失敗時は何も変更しない。
/// 排他制御は持たないため、共有する場合は呼び出し側でロックする。
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    books: HashMap<BookId, Book>,
    members: HashMap<MemberId, Member>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// 書籍を登録する。同じIDがあれば上書きする。
    pub fn add_book(&mut self, cmd: AddBook) -> BookAdded {
        let (book, event) = book::add_book(
            cmd.book_id,
            cmd.title,
            cmd.author,
            cmd.status,
            cmd.added_at,
        );
        self.books.insert(book.book_id, book);
        event
    }

    pub fn remove_book(&mut self, cmd: RemoveBook) -> Result<BookRemoved, InventoryError> {
        let book = self
            .books
            .get(&cmd.book_id)
            .ok_or(InventoryError::BookNotFound(cmd.book_id))?;

        let event = book::remove_book(book, cmd.removed_at)
            .map_err(|_| InventoryError::BookCurrentlyBorrowed(cmd.book_id))?;

        self.books.remove(&cmd.book_id);
        Ok(event)
    }

    /// 書籍を貸し出す
    ///
    /// 判定順：書籍の存在 → 書籍の状態 → 会員の存在
    pub fn borrow_book(&mut self, cmd: BorrowBook) -> Result<BookBorrowed, InventoryError> {
        let book = self
            .books
            .get(&cmd.book_id)
            .ok_or(InventoryError::BookNotFound(cmd.book_id))?;

        if book.status.is_borrowed() {
            return Err(InventoryError::BookAlreadyBorrowed(cmd.book_id));
        }

        let member = self
            .members
            .get(&cmd.member_id)
            .ok_or(InventoryError::MemberNotFound(cmd.member_id))?;

        let (new_book, new_member, event) = circulation::borrow_book(book, member, cmd.borrowed_at)
            .map_err(|_| InventoryError::BookAlreadyBorrowed(cmd.book_id))?;

        self.books.insert(cmd.book_id, new_book);
        self.members.insert(cmd.member_id, new_member);
        Ok(event)
    }

    pub fn return_book(&mut self, cmd: ReturnBook) -> Result<BookReturned, InventoryError> {
        let book = self
            .books
            .get(&cmd.book_id)
            .ok_or(InventoryError::BookNotFound(cmd.book_id))?;

        let member = self
            .members
            .get(&cmd.member_id)
            .ok_or(InventoryError::MemberNotFound(cmd.member_id))?;

        let (new_book, new_member, event) = circulation::return_book(book, member, cmd.returned_at)
            .map_err(|_| InventoryError::BookNotBorrowedByMember {
                book_id: cmd.book_id,
                member_id: cmd.member_id,
            })?;

        self.books.insert(cmd.book_id, new_book);
        self.members.insert(cmd.member_id, new_member);
        Ok(event)
    }

    /// 会員を登録する。同じIDがあれば上書きする。
    pub fn register_member(&mut self, cmd: RegisterMember) -> MemberRegistered {
        let (member, event) = member::register_member(cmd.member_id, cmd.name, cmd.registered_at);
        self.members.insert(member.member_id, member);
        event
    }

    /// 貸出可能な書籍の一覧（ID順）
    pub fn available_books(&self) -> Vec<Book> {
        let mut books: Vec<Book> = self
            .books
            .values()
            .filter(|b| b.status.is_available())
            .cloned()
            .collect();
        books.sort_by_key(|b| b.book_id);
        books
    }

    /// 会員が借りている書籍のスナップショット（貸出順）
    pub fn borrowed_books(&self, member_id: MemberId) -> Result<Vec<Book>, InventoryError> {
        self.members
            .get(&member_id)
            .map(|m| m.borrowed_books.clone())
            .ok_or(InventoryError::MemberNotFound(member_id))
    }

    pub fn book(&self, book_id: BookId) -> Option<&Book> {
        self.books.get(&book_id)
    }

    pub fn member_exists(&self, member_id: MemberId) -> bool {
        self.members.contains_key(&member_id)
    }
}
