use crate::domain::{
    Book, BookAdded, BookBorrowed, BookRemoved, BookReturned, InventoryError, MemberId,
    MemberRegistered, commands::*,
};
use async_trait::async_trait;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, StoreError>;

/// ストアのエラー
#[derive(Debug, Error)]
pub enum StoreError {
    /// 蔵書のルールにより操作が拒否された
    #[error(transparent)]
    Rejected(#[from] InventoryError),

    /// ロックを保持していたスレッドがパニックした
    #[error("Library store lock poisoned")]
    Poisoned,
}

/// 蔵書ストアポート
///
/// 各メソッドは1回の呼び出しで「検索・ルール判定・更新」を完結させる。
/// 実装は呼び出し全体を単一のロックで直列化しなければならない。
#[async_trait]
pub trait LibraryStore: Send + Sync {
    /// 書籍を登録する（同じIDは上書き）
    async fn add_book(&self, cmd: AddBook) -> Result<BookAdded>;

    /// 書籍を除籍する
    ///
    /// 存在しない場合は`BookNotFound`、貸出中なら`BookCurrentlyBorrowed`。
    async fn remove_book(&self, cmd: RemoveBook) -> Result<BookRemoved>;

    /// 書籍を貸し出す
    async fn borrow_book(&self, cmd: BorrowBook) -> Result<BookBorrowed>;

    /// 書籍を返却する
    async fn return_book(&self, cmd: ReturnBook) -> Result<BookReturned>;

    /// 会員を登録する（同じIDは上書き）
    async fn register_member(&self, cmd: RegisterMember) -> Result<MemberRegistered>;

    /// 貸出可能な書籍の一覧
    async fn list_available_books(&self) -> Result<Vec<Book>>;

    /// 会員が借りている書籍のスナップショット一覧
    async fn list_borrowed_books(&self, member_id: MemberId) -> Result<Vec<Book>>;

    async fn member_exists(&self, member_id: MemberId) -> Result<bool>;
}
