use crate::application::library::{
    ServiceDependencies, add_book, borrow_book, list_available_books, list_borrowed_books,
    remove_book, return_book,
};
use crate::domain::{Book, BookId, MemberId, commands::*};
use chrono::Utc;
use std::io;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use super::error::user_message;
use super::menu::{MENU, MenuOption};

/// 対話セッションを実行する
///
/// `7` を選ぶか入力が終端に達するまでメニューを繰り返す。
/// 入出力のエラーのみを返し、業務上のエラーは画面に表示して続行する。
pub async fn run_console<R, W>(
    deps: &ServiceDependencies,
    reader: R,
    writer: &mut W,
) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut session = Session {
        deps,
        reader,
        writer,
    };
    session.run().await
}

struct Session<'a, R, W> {
    deps: &'a ServiceDependencies,
    reader: R,
    writer: &'a mut W,
}

impl<R, W> Session<'_, R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    async fn run(&mut self) -> io::Result<()> {
        loop {
            self.write(MENU).await?;
            let Some(input) = self.read_line().await? else {
                tracing::debug!("console input closed");
                return Ok(());
            };

            let option = match input.parse::<MenuOption>() {
                Ok(option) => option,
                Err(_) => {
                    self.write_line("Invalid option").await?;
                    continue;
                }
            };

            match option {
                MenuOption::AddBook => self.add_book().await?,
                MenuOption::RemoveBook => self.remove_book().await?,
                MenuOption::BorrowBook => self.borrow_book().await?,
                MenuOption::ReturnBook => self.return_book().await?,
                MenuOption::ListAvailableBooks => self.list_available_books().await?,
                MenuOption::ListBorrowedBooks => self.list_borrowed_books().await?,
                MenuOption::Exit => {
                    self.write_line("Goodbye!").await?;
                    return Ok(());
                }
            }
        }
    }

    async fn add_book(&mut self) -> io::Result<()> {
        let Some(book_id) = self.prompt_id("Book ID: ").await? else {
            return Ok(());
        };
        let Some(title) = self.prompt("Title: ").await? else {
            return Ok(());
        };
        let Some(author) = self.prompt("Author: ").await? else {
            return Ok(());
        };

        let cmd = AddBook {
            book_id: BookId::new(book_id),
            title,
            author,
            status: None,
            added_at: Utc::now(),
        };

        match add_book(self.deps, cmd).await {
            Ok(_) => self.write_line("Book added.").await,
            Err(e) => self.write_line(&user_message(&e)).await,
        }
    }

    async fn remove_book(&mut self) -> io::Result<()> {
        let Some(book_id) = self.prompt_id("Book ID to remove: ").await? else {
            return Ok(());
        };

        let cmd = RemoveBook {
            book_id: BookId::new(book_id),
            removed_at: Utc::now(),
        };

        match remove_book(self.deps, cmd).await {
            Ok(_) => self.write_line("Book removed.").await,
            Err(e) => self.write_line(&user_message(&e)).await,
        }
    }

    async fn borrow_book(&mut self) -> io::Result<()> {
        let Some(member_id) = self.prompt_id("Member ID: ").await? else {
            return Ok(());
        };
        let Some(book_id) = self.prompt_id("Book ID to borrow: ").await? else {
            return Ok(());
        };

        let cmd = BorrowBook {
            book_id: BookId::new(book_id),
            member_id: MemberId::new(member_id),
            borrowed_at: Utc::now(),
        };

        match borrow_book(self.deps, cmd).await {
            Ok(_) => self.write_line("Book borrowed.").await,
            Err(e) => self.write_line(&user_message(&e)).await,
        }
    }

    async fn return_book(&mut self) -> io::Result<()> {
        let Some(member_id) = self.prompt_id("Member ID: ").await? else {
            return Ok(());
        };
        let Some(book_id) = self.prompt_id("Book ID to return: ").await? else {
            return Ok(());
        };

        let cmd = ReturnBook {
            book_id: BookId::new(book_id),
            member_id: MemberId::new(member_id),
            returned_at: Utc::now(),
        };

        match return_book(self.deps, cmd).await {
            Ok(_) => self.write_line("Book returned.").await,
            Err(e) => self.write_line(&user_message(&e)).await,
        }
    }

    async fn list_available_books(&mut self) -> io::Result<()> {
        let books = match list_available_books(self.deps).await {
            Ok(books) => books,
            Err(e) => return self.write_line(&user_message(&e)).await,
        };

        if books.is_empty() {
            return self.write_line("No available books.").await;
        }

        self.write_line("Available books:").await?;
        self.write_books(&books).await
    }

    async fn list_borrowed_books(&mut self) -> io::Result<()> {
        let Some(member_id) = self.prompt_id("Member ID: ").await? else {
            return Ok(());
        };

        let books = match list_borrowed_books(self.deps, MemberId::new(member_id)).await {
            Ok(books) => books,
            Err(e) => return self.write_line(&user_message(&e)).await,
        };

        if books.is_empty() {
            return self.write_line("This member has no borrowed books.").await;
        }

        self.write_line(&format!("Borrowed by member {}:", member_id)).await?;
        self.write_books(&books).await
    }

    async fn write_books(&mut self, books: &[Book]) -> io::Result<()> {
        for b in books {
            let line = format!("ID:{} Title:{} Author:{}", b.book_id, b.title, b.author);
            self.write_line(&line).await?;
        }
        Ok(())
    }

    /// 数値IDを尋ねる。数値でなければメッセージを出して `None` を返す。
    async fn prompt_id(&mut self, label: &str) -> io::Result<Option<i64>> {
        let Some(raw) = self.prompt(label).await? else {
            return Ok(None);
        };

        match raw.parse::<i64>() {
            Ok(id) => Ok(Some(id)),
            Err(_) => {
                self.write_line(&format!("Invalid number: {}", raw)).await?;
                Ok(None)
            }
        }
    }

    async fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        self.write(label).await?;
        self.read_line().await
    }

    /// 1行読み込み、前後の空白を除いて返す。入力終端なら `None`。
    async fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line).await? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    async fn write(&mut self, text: &str) -> io::Result<()> {
        self.writer.write_all(text.as_bytes()).await?;
        self.writer.flush().await
    }

    async fn write_line(&mut self, text: &str) -> io::Result<()> {
        self.writer.write_all(text.as_bytes()).await?;
        self.writer.write_all(b"\n").await?;
        self.writer.flush().await
    }
}
