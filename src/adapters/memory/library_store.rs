use crate::domain::{
    Book, BookAdded, BookBorrowed, BookRemoved, BookReturned, Inventory, MemberId,
    MemberRegistered, commands::*,
};
use crate::ports::library_store::{LibraryStore as LibraryStoreTrait, Result, StoreError};
use async_trait::async_trait;
use std::sync::{Mutex, MutexGuard};

/// In-memory implementation of LibraryStore
///
/// The whole inventory sits behind one mutex. Every call takes the lock
/// once, does its lookup, rule check and mutation, and releases it before
/// returning. Nothing is awaited while the guard is held.
pub struct LibraryStore {
    inventory: Mutex<Inventory>,
}

impl LibraryStore {
    pub fn new() -> Self {
        Self::with_inventory(Inventory::new())
    }

    pub fn with_inventory(inventory: Inventory) -> Self {
        Self {
            inventory: Mutex::new(inventory),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inventory>> {
        self.inventory.lock().map_err(|_| {
            tracing::error!("library store mutex poisoned");
            StoreError::Poisoned
        })
    }
}

impl Default for LibraryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LibraryStoreTrait for LibraryStore {
    async fn add_book(&self, cmd: AddBook) -> Result<BookAdded> {
        Ok(self.lock()?.add_book(cmd))
    }

    async fn remove_book(&self, cmd: RemoveBook) -> Result<BookRemoved> {
        Ok(self.lock()?.remove_book(cmd)?)
    }

    async fn borrow_book(&self, cmd: BorrowBook) -> Result<BookBorrowed> {
        Ok(self.lock()?.borrow_book(cmd)?)
    }

    async fn return_book(&self, cmd: ReturnBook) -> Result<BookReturned> {
        Ok(self.lock()?.return_book(cmd)?)
    }

    async fn register_member(&self, cmd: RegisterMember) -> Result<MemberRegistered> {
        Ok(self.lock()?.register_member(cmd))
    }

    async fn list_available_books(&self) -> Result<Vec<Book>> {
        Ok(self.lock()?.available_books())
    }

    async fn list_borrowed_books(&self, member_id: MemberId) -> Result<Vec<Book>> {
        Ok(self.lock()?.borrowed_books(member_id)?)
    }

    async fn member_exists(&self, member_id: MemberId) -> Result<bool> {
        Ok(self.lock()?.member_exists(member_id))
    }
}
