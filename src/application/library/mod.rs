mod errors;
mod library_service;
mod seed;

pub use errors::{ErrorKind, LibraryApplicationError, Result};
pub use library_service::{
    ServiceDependencies, add_book, borrow_book, list_available_books, list_borrowed_books,
    member_exists, register_member, remove_book, return_book,
};
pub use seed::seed_library;
