use crate::domain::{
    Book, BookAdded, BookBorrowed, BookRemoved, BookReturned, DomainEvent, MemberId,
    MemberRegistered, commands::*,
};
use crate::ports::*;
use std::sync::Arc;

use super::errors::{ErrorKind, LibraryApplicationError, Result};

/// サービスの依存関係
///
/// 振る舞い（メソッド）は持たず、各サービス関数に引数として渡す。
#[derive(Clone)]
pub struct ServiceDependencies {
    pub library_store: Arc<dyn LibraryStore>,
}

/// ストアのエラーをアプリケーション層のエラーに変換し、分類に応じてログに残す
fn reject(operation: &'static str, err: StoreError) -> LibraryApplicationError {
    let err = LibraryApplicationError::from(err);
    match err.kind() {
        ErrorKind::Internal => tracing::error!(operation, error = %err, "library store failure"),
        _ => tracing::debug!(operation, error = %err, "request rejected"),
    }
    err
}

/// 成功した操作のイベントをJSONでデバッグログに残す
fn record(event: impl Into<DomainEvent>) {
    let event: DomainEvent = event.into();
    match serde_json::to_value(&event) {
        Ok(json) => tracing::debug!(event = %json, "domain event"),
        Err(e) => tracing::warn!(error = %e, "failed to serialize domain event"),
    }
}

/// 書籍を登録する
///
/// ビジネスルール：
/// - 同じIDの書籍があれば上書きする
/// - 状態が未指定ならAvailable
pub async fn add_book(deps: &ServiceDependencies, cmd: AddBook) -> Result<BookAdded> {
    let event = deps
        .library_store
        .add_book(cmd)
        .await
        .map_err(|e| reject("add_book", e))?;

    tracing::info!(book_id = %event.book_id, title = %event.title, "book added");
    record(event.clone());
    Ok(event)
}

/// 書籍を除籍する
///
/// ビジネスルール：
/// - 書籍が存在すること
/// - 貸出中でないこと
pub async fn remove_book(deps: &ServiceDependencies, cmd: RemoveBook) -> Result<BookRemoved> {
    let event = deps
        .library_store
        .remove_book(cmd)
        .await
        .map_err(|e| reject("remove_book", e))?;

    tracing::info!(book_id = %event.book_id, "book removed");
    record(event.clone());
    Ok(event)
}

/// 書籍を貸し出す
///
/// ビジネスルール：
/// - 書籍が存在すること
/// - 書籍が貸出中でないこと
/// - 会員が存在すること
pub async fn borrow_book(deps: &ServiceDependencies, cmd: BorrowBook) -> Result<BookBorrowed> {
    let event = deps
        .library_store
        .borrow_book(cmd)
        .await
        .map_err(|e| reject("borrow_book", e))?;

    tracing::info!(book_id = %event.book_id, member_id = %event.member_id, "book borrowed");
    record(event.clone());
    Ok(event)
}

/// 書籍を返却する
///
/// ビジネスルール：
/// - 書籍と会員が存在すること
/// - 会員の貸出一覧に書籍が含まれていること
pub async fn return_book(deps: &ServiceDependencies, cmd: ReturnBook) -> Result<BookReturned> {
    let event = deps
        .library_store
        .return_book(cmd)
        .await
        .map_err(|e| reject("return_book", e))?;

    tracing::info!(book_id = %event.book_id, member_id = %event.member_id, "book returned");
    record(event.clone());
    Ok(event)
}

/// 会員を登録する（同じIDは上書き）
pub async fn register_member(
    deps: &ServiceDependencies,
    cmd: RegisterMember,
) -> Result<MemberRegistered> {
    let event = deps
        .library_store
        .register_member(cmd)
        .await
        .map_err(|e| reject("register_member", e))?;

    tracing::info!(member_id = %event.member_id, name = %event.name, "member registered");
    record(event.clone());
    Ok(event)
}

/// 貸出可能な書籍の一覧
pub async fn list_available_books(deps: &ServiceDependencies) -> Result<Vec<Book>> {
    deps.library_store
        .list_available_books()
        .await
        .map_err(|e| reject("list_available_books", e))
}

/// 会員が借りている書籍の一覧（貸出順）
pub async fn list_borrowed_books(
    deps: &ServiceDependencies,
    member_id: MemberId,
) -> Result<Vec<Book>> {
    deps.library_store
        .list_borrowed_books(member_id)
        .await
        .map_err(|e| reject("list_borrowed_books", e))
}

pub async fn member_exists(deps: &ServiceDependencies, member_id: MemberId) -> Result<bool> {
    deps.library_store
        .member_exists(member_id)
        .await
        .map_err(|e| reject("member_exists", e))
}
