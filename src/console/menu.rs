/// メニュー本文
pub const MENU: &str = "\nLibrary Menu:\n\
1) Add Book\n\
2) Remove Book\n\
3) Borrow Book\n\
4) Return Book\n\
5) List Available Books\n\
6) List Borrowed Books (by member)\n\
7) Exit\n\
Choose an option: ";

/// メニューの選択肢
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    AddBook,
    RemoveBook,
    BorrowBook,
    ReturnBook,
    ListAvailableBooks,
    ListBorrowedBooks,
    Exit,
}

impl std::str::FromStr for MenuOption {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(MenuOption::AddBook),
            "2" => Ok(MenuOption::RemoveBook),
            "3" => Ok(MenuOption::BorrowBook),
            "4" => Ok(MenuOption::ReturnBook),
            "5" => Ok(MenuOption::ListAvailableBooks),
            "6" => Ok(MenuOption::ListBorrowedBooks),
            "7" => Ok(MenuOption::Exit),
            other => Err(format!("Invalid option: {}", other)),
        }
    }
}
